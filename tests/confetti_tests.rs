// Host-side tests for the copy-email confetti burst and button state.

use folio_core::confetti::*;
use folio_core::{FrameOutput, CONFETTI_COUNT, CONFETTI_TICKS, COPIED_RESET_MS};
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn burst_at(origin: Vec2) -> Confetti {
    let mut c = Confetti::default();
    c.burst(origin, &BurstConfig::default(), &mut StdRng::seed_from_u64(11));
    c
}

#[test]
fn burst_launches_upward_in_a_cone() {
    let c = burst_at(Vec2::new(400.0, 300.0));
    assert_eq!(c.pieces().len(), CONFETTI_COUNT);
    let up = -std::f32::consts::FRAC_PI_2;
    let half_spread = 30f32.to_radians();
    for p in c.pieces() {
        assert!((p.heading - up).abs() <= half_spread + 1e-5);
        assert!(p.speed >= 22.5 && p.speed < 67.5);
        assert_eq!(p.position, Vec2::new(400.0, 300.0));
    }
    let colors: Vec<_> = c.pieces().iter().take(3).map(|p| p.color).collect();
    assert_eq!(colors[0], folio_core::Rgba::rgb(0x63, 0x66, 0xf1));
    assert_eq!(colors[2], folio_core::Rgba::rgb(255, 255, 255));
}

#[test]
fn pieces_rise_then_fall_and_fade_out() {
    let mut c = burst_at(Vec2::new(0.0, 500.0));
    c.step();
    assert!(c.pieces().iter().all(|p| p.position.y < 500.0));
    let first_alpha = c.pieces()[0].opacity();
    for _ in 0..100 {
        c.step();
    }
    // speed has decayed away, gravity dominates
    assert!(c.pieces().iter().all(|p| p.speed < 1e-2));
    assert!(c.pieces()[0].opacity() < first_alpha);
    for _ in 0..CONFETTI_TICKS {
        c.step();
    }
    assert!(c.is_idle());
}

#[test]
fn render_emits_one_faded_dot_per_piece() {
    let mut c = burst_at(Vec2::ZERO);
    c.step();
    let mut out = FrameOutput::default();
    c.render(&mut out);
    assert_eq!(out.dots.len(), CONFETTI_COUNT);
    assert!(out.strokes.is_empty());
    let expected = 1.0 - 1.0 / CONFETTI_TICKS as f32;
    assert!((out.dots[0].color.a - expected).abs() < 1e-6);

    Confetti::default().render(&mut out);
    assert!(out.dots.is_empty());
}

#[test]
fn copied_label_resets_after_two_seconds() {
    let mut f = CopyFeedback::default();
    assert_eq!(f.label(), COPY_EMAIL_LABEL);
    f.copied(1_000.0);
    assert!(f.is_copied());
    assert_eq!(f.label(), COPIED_LABEL);
    assert!(!f.poll(1_000.0 + COPIED_RESET_MS - 1.0));
    assert!(f.poll(1_000.0 + COPIED_RESET_MS));
    assert!(!f.is_copied());
    assert_eq!(f.label(), COPY_EMAIL_LABEL);
}

#[test]
fn second_copy_extends_the_copied_state() {
    let mut f = CopyFeedback::default();
    f.copied(0.0);
    f.copied(1_500.0);
    assert!(!f.poll(COPIED_RESET_MS));
    assert!(f.is_copied());
    assert!(f.poll(1_500.0 + COPIED_RESET_MS));
}
