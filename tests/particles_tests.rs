// Host-side tests for the particle field simulation.

use folio_core::*;
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn field(width: f32, height: f32, count: usize, seed: u64) -> ParticleField {
    let mut config = FieldConfig::ambient(ThemeMode::Dark);
    config.count = count;
    ParticleField::new(width, height, config, &mut StdRng::seed_from_u64(seed))
}

fn still_config() -> FieldConfig {
    FieldConfig::ambient(ThemeMode::Dark)
}

#[test]
fn initial_particles_respect_config_ranges() {
    let f = field(1024.0, 768.0, 50, 7);
    assert_eq!(f.particles().len(), 50);
    for p in f.particles() {
        assert!(p.position.x >= 0.0 && p.position.x <= 1024.0);
        assert!(p.position.y >= 0.0 && p.position.y <= 768.0);
        assert!(p.velocity.x.abs() <= PARTICLE_MAX_SPEED);
        assert!(p.velocity.y.abs() <= PARTICLE_MAX_SPEED);
        let (lo, hi) = AMBIENT_RADIUS_RANGE;
        assert!(p.radius >= lo && p.radius <= hi);
    }
}

#[test]
fn particles_stay_near_bounds_without_pointer() {
    let (w, h) = (1024.0, 768.0);
    let mut f = field(w, h, 20, 42);
    let inputs = FrameInputs::default();
    let slack = PARTICLE_MAX_SPEED + 1e-3;
    for _ in 0..1000 {
        f.step(&inputs);
        for p in f.particles() {
            assert!(p.position.is_finite());
            assert!(p.position.x >= -slack && p.position.x <= w + slack);
            assert!(p.position.y >= -slack && p.position.y <= h + slack);
        }
    }
}

#[test]
fn velocity_flips_only_when_out_of_bounds() {
    let particles = vec![
        // leaves through the right edge on this step
        Particle::new(Vec2::new(99.95, 50.0), Vec2::new(0.1, 0.0), 1.0),
        // stays inside
        Particle::new(Vec2::new(50.0, 50.0), Vec2::new(0.1, -0.1), 1.0),
        // leaves through the top edge
        Particle::new(Vec2::new(20.0, 0.05), Vec2::new(0.0, -0.1), 1.0),
    ];
    let mut f = ParticleField::from_particles(100.0, 100.0, still_config(), particles);
    f.step(&FrameInputs::default());
    let ps = f.particles();
    assert_eq!(ps[0].velocity, Vec2::new(-0.1, 0.0));
    assert_eq!(ps[1].velocity, Vec2::new(0.1, -0.1));
    assert_eq!(ps[2].velocity, Vec2::new(0.0, 0.1));
}

#[test]
fn overshoot_is_not_clamped() {
    let particles = vec![Particle::new(Vec2::new(99.95, 50.0), Vec2::new(0.1, 0.0), 1.0)];
    let mut f = ParticleField::from_particles(100.0, 100.0, still_config(), particles);
    f.step(&FrameInputs::default());
    assert!(f.particles()[0].position.x > 100.0);
    f.step(&FrameInputs::default());
    assert!(f.particles()[0].position.x <= 100.0);
}

#[test]
fn links_follow_connection_distance() {
    let d = AMBIENT_CONNECTION_DISTANCE;
    let near = [Vec2::new(100.0, 100.0), Vec2::new(100.0 + d - 1.0, 100.0)];
    let far = [Vec2::new(100.0, 100.0), Vec2::new(100.0 + d + 1.0, 100.0)];
    let exact = [Vec2::new(0.0, 0.0), Vec2::new(d, 0.0)];

    let links = links_within(&near, d);
    assert_eq!(links.len(), 1);
    assert_eq!((links[0].a, links[0].b), (0, 1));
    assert!((links[0].distance - (d - 1.0)).abs() < 1e-3);

    assert!(links_within(&far, d).is_empty());
    assert!(links_within(&exact, d).is_empty());
}

#[test]
fn links_do_not_depend_on_particle_order() {
    let f = field(600.0, 400.0, 40, 3);
    let points: Vec<Vec2> = f.particles().iter().map(|p| p.position).collect();
    let mut reversed = points.clone();
    reversed.reverse();
    let n = points.len();

    let mut forward: Vec<(usize, usize)> = links_within(&points, 180.0)
        .iter()
        .map(|l| (l.a, l.b))
        .collect();
    let mut backward: Vec<(usize, usize)> = links_within(&reversed, 180.0)
        .iter()
        .map(|l| {
            let (a, b) = (n - 1 - l.b, n - 1 - l.a);
            (a.min(b), a.max(b))
        })
        .collect();
    forward.sort();
    backward.sort();
    assert!(!forward.is_empty());
    assert_eq!(forward, backward);
}

#[test]
fn fade_width_links_shrink_with_distance() {
    let d = AMBIENT_CONNECTION_DISTANCE;
    let particles = vec![
        Particle::new(Vec2::new(0.0, 0.0), Vec2::ZERO, 1.0),
        Particle::new(Vec2::new(d / 2.0, 0.0), Vec2::ZERO, 1.0),
    ];
    let f = ParticleField::from_particles(500.0, 500.0, still_config(), particles);
    let mut out = FrameOutput::default();
    f.render(&FrameInputs::default(), &mut out);
    assert_eq!(out.dots.len(), 2);
    assert_eq!(out.strokes.len(), 1);
    assert!((out.strokes[0].width - 0.5).abs() < 1e-5);
}

#[test]
fn hero_links_fade_alpha_and_dots_pulse() {
    let config = FieldConfig::hero(1200.0, &PALETTES[0]);
    let particles = vec![
        Particle::new(Vec2::new(0.0, 0.0), Vec2::ZERO, 1.0),
        Particle::new(Vec2::new(75.0, 0.0), Vec2::ZERO, 1.0),
    ];
    let f = ParticleField::from_particles(500.0, 500.0, config, particles);
    let mut out = FrameOutput::default();
    f.render(&FrameInputs::default(), &mut out);

    let stroke = out.strokes[0];
    assert!((stroke.width - HERO_LINK_WIDTH).abs() < 1e-6);
    assert!((stroke.color.a - HERO_LINK_ALPHA * 0.5).abs() < 1e-5);

    // at t = 0 the phase is the particle index
    assert!((out.dots[0].color.a - PULSE_ALPHA_BASE).abs() < 1e-5);
    let expected = PULSE_ALPHA_BASE + PULSE_ALPHA_AMPLITUDE * 1.0_f32.sin();
    assert!((out.dots[1].color.a - expected).abs() < 1e-5);
}

#[test]
fn pointer_repels_nearby_hero_particles() {
    let config = FieldConfig::hero(1200.0, &PALETTES[0]);
    let particles = vec![
        Particle::new(Vec2::new(100.0, 100.0), Vec2::ZERO, 1.0),
        Particle::new(Vec2::new(450.0, 450.0), Vec2::ZERO, 1.0),
    ];
    let mut f = ParticleField::from_particles(500.0, 500.0, config, particles);
    let inputs = FrameInputs {
        time_ms: 0.0,
        pointer: Some(Vec2::new(150.0, 100.0)),
    };
    f.step(&inputs);
    let ps = f.particles();
    // pushed away from the pointer along -x
    assert!(ps[0].position.x < 100.0);
    assert!((ps[0].position.y - 100.0).abs() < 1e-5);
    let expected = (POINTER_REPEL_RADIUS - 50.0) / POINTER_REPEL_RADIUS * POINTER_REPEL_STRENGTH;
    assert!((100.0 - ps[0].position.x - expected).abs() < 1e-4);
    // out of range
    assert_eq!(ps[1].position, Vec2::new(450.0, 450.0));
}

#[test]
fn ambient_field_ignores_pointer() {
    let particles = vec![Particle::new(Vec2::new(100.0, 100.0), Vec2::ZERO, 1.0)];
    let mut f = ParticleField::from_particles(500.0, 500.0, still_config(), particles);
    f.step(&FrameInputs {
        time_ms: 0.0,
        pointer: Some(Vec2::new(101.0, 100.0)),
    });
    assert_eq!(f.particles()[0].position, Vec2::new(100.0, 100.0));
}

#[test]
fn empty_field_renders_nothing() {
    let mut f = field(800.0, 600.0, 0, 1);
    let mut out = FrameOutput::default();
    f.frame(&FrameInputs::default(), &mut out);
    assert!(out.dots.is_empty());
    assert!(out.strokes.is_empty());
}

#[test]
fn hero_count_scales_with_width_and_caps() {
    assert_eq!(hero_particle_count(0.0), 0);
    assert_eq!(hero_particle_count(299.0), 9);
    assert_eq!(hero_particle_count(600.0), 20);
    assert_eq!(hero_particle_count(900.0), HERO_PARTICLE_CAP);
    assert_eq!(hero_particle_count(4000.0), HERO_PARTICLE_CAP);
}

#[test]
fn resize_keeps_positions() {
    let mut f = field(1024.0, 768.0, 10, 9);
    let before: Vec<Vec2> = f.particles().iter().map(|p| p.position).collect();
    f.resize(320.0, 240.0);
    let after: Vec<Vec2> = f.particles().iter().map(|p| p.position).collect();
    assert_eq!(before, after);
    assert_eq!(f.bounds(), Vec2::new(320.0, 240.0));
}

#[test]
fn particles_outside_after_shrink_return_to_bounds() {
    let particles = vec![
        Particle::new(Vec2::new(900.0, 100.0), Vec2::new(0.1, 0.05), 1.0),
        Particle::new(Vec2::new(-40.0, 700.0), Vec2::new(-0.1, 0.1), 1.0),
    ];
    let mut f = ParticleField::from_particles(1024.0, 768.0, still_config(), particles);
    f.resize(500.0, 300.0);
    let inputs = FrameInputs::default();
    for _ in 0..10_000 {
        f.step(&inputs);
    }
    let slack = 0.1 + 1e-3;
    for p in f.particles() {
        assert!(p.position.x >= -slack && p.position.x <= 500.0 + slack, "{:?}", p);
        assert!(p.position.y >= -slack && p.position.y <= 300.0 + slack, "{:?}", p);
    }
}

#[test]
fn inward_motion_outside_bounds_is_kept() {
    let particles = vec![Particle::new(Vec2::new(150.0, 50.0), Vec2::new(-0.1, 0.0), 1.0)];
    let mut f = ParticleField::from_particles(100.0, 100.0, still_config(), particles);
    f.step(&FrameInputs::default());
    assert_eq!(f.particles()[0].velocity, Vec2::new(-0.1, 0.0));
}

#[test]
fn set_colors_changes_rendered_colors() {
    let particles = vec![Particle::new(Vec2::new(10.0, 10.0), Vec2::ZERO, 1.0)];
    let mut f = ParticleField::from_particles(100.0, 100.0, still_config(), particles);
    let light = FieldColors::ambient(ThemeMode::Light);
    f.set_colors(light);
    let mut out = FrameOutput::default();
    f.render(&FrameInputs::default(), &mut out);
    assert_eq!(out.dots[0].color, light.dot);
}

#[test]
fn same_seed_same_field() {
    let a = field(640.0, 480.0, 15, 11);
    let b = field(640.0, 480.0, 15, 11);
    assert_eq!(a.particles(), b.particles());
}
