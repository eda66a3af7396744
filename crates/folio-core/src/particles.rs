//! Point-particle field drawn behind the page and in the hero section.
//!
//! The simulation is frame based: each call to [`ParticleField::step`] moves
//! every particle by its velocity, bounces it off the viewport edges and, for
//! the pointer-reactive variant, pushes it away from the pointer. Drawing is
//! expressed as a list of [`Dot`]s and [`Stroke`]s so the step can run
//! without any display surface.

use crate::constants::*;
use crate::theme::{FieldColors, Palette, Rgba, ThemeMode};
use glam::Vec2;
use rand::Rng;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub position: Vec2,
    pub velocity: Vec2,
    pub radius: f32,
}

impl Particle {
    pub fn new(position: Vec2, velocity: Vec2, radius: f32) -> Self {
        Self {
            position,
            velocity,
            radius,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerRepulsion {
    pub radius: f32,
    pub strength: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LinkStyle {
    /// Line width shrinks from 1 to 0 with distance, color is fixed.
    FadeWidth,
    /// Fixed width, alpha shrinks from `max_alpha` to 0 with distance.
    FadeAlpha { width: f32, max_alpha: f32 },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DotStyle {
    Solid,
    /// Alpha oscillates as `base + amplitude * sin(t * rate + index)`.
    Pulse {
        base: f32,
        amplitude: f32,
        rate_per_ms: f64,
    },
}

#[derive(Clone, Debug, PartialEq)]
pub struct FieldConfig {
    pub count: usize,
    pub connection_distance: f32,
    pub max_speed: f32,
    pub radius_range: (f32, f32),
    pub repulsion: Option<PointerRepulsion>,
    pub links: LinkStyle,
    pub dots: DotStyle,
    pub colors: FieldColors,
}

impl FieldConfig {
    /// Lightweight full-page background.
    pub fn ambient(mode: ThemeMode) -> Self {
        Self {
            count: AMBIENT_PARTICLE_COUNT,
            connection_distance: AMBIENT_CONNECTION_DISTANCE,
            max_speed: PARTICLE_MAX_SPEED,
            radius_range: AMBIENT_RADIUS_RANGE,
            repulsion: None,
            links: LinkStyle::FadeWidth,
            dots: DotStyle::Solid,
            colors: FieldColors::ambient(mode),
        }
    }

    /// Hero network: count scales with width (capped) and particles dodge the pointer.
    pub fn hero(viewport_width: f32, palette: &Palette) -> Self {
        Self {
            count: hero_particle_count(viewport_width),
            connection_distance: HERO_CONNECTION_DISTANCE,
            max_speed: PARTICLE_MAX_SPEED,
            radius_range: HERO_RADIUS_RANGE,
            repulsion: Some(PointerRepulsion {
                radius: POINTER_REPEL_RADIUS,
                strength: POINTER_REPEL_STRENGTH,
            }),
            links: LinkStyle::FadeAlpha {
                width: HERO_LINK_WIDTH,
                max_alpha: HERO_LINK_ALPHA,
            },
            dots: DotStyle::Pulse {
                base: PULSE_ALPHA_BASE,
                amplitude: PULSE_ALPHA_AMPLITUDE,
                rate_per_ms: PULSE_RATE_PER_MS,
            },
            colors: FieldColors::hero(palette),
        }
    }
}

/// External inputs sampled once per frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameInputs {
    pub time_ms: f64,
    pub pointer: Option<Vec2>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Dot {
    pub center: Vec2,
    pub radius: f32,
    pub color: Rgba,
}

/// A connection between particles `a < b` closer than the field's threshold.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Link {
    pub a: usize,
    pub b: usize,
    pub from: Vec2,
    pub to: Vec2,
    pub distance: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stroke {
    pub from: Vec2,
    pub to: Vec2,
    pub width: f32,
    pub color: Rgba,
}

/// Draw commands for one frame. Reused across frames to avoid reallocating.
#[derive(Clone, Debug, Default)]
pub struct FrameOutput {
    pub dots: Vec<Dot>,
    pub strokes: Vec<Stroke>,
}

impl FrameOutput {
    pub fn clear(&mut self) {
        self.dots.clear();
        self.strokes.clear();
    }
}

pub struct ParticleField {
    particles: Vec<Particle>,
    bounds: Vec2,
    config: FieldConfig,
}

impl ParticleField {
    pub fn new<R: Rng + ?Sized>(width: f32, height: f32, config: FieldConfig, rng: &mut R) -> Self {
        let (r_min, r_max) = config.radius_range;
        let particles = (0..config.count)
            .map(|_| {
                let position = Vec2::new(rng.gen::<f32>() * width, rng.gen::<f32>() * height);
                let velocity = Vec2::new(
                    (rng.gen::<f32>() - 0.5) * 2.0 * config.max_speed,
                    (rng.gen::<f32>() - 0.5) * 2.0 * config.max_speed,
                );
                let radius = r_min + rng.gen::<f32>() * (r_max - r_min);
                Particle::new(position, velocity, radius)
            })
            .collect();
        Self::from_particles(width, height, config, particles)
    }

    /// Build a field from explicit particles; `config.count` is ignored.
    pub fn from_particles(
        width: f32,
        height: f32,
        config: FieldConfig,
        particles: Vec<Particle>,
    ) -> Self {
        Self {
            particles,
            bounds: Vec2::new(width, height),
            config,
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn bounds(&self) -> Vec2 {
        self.bounds
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    /// Updates the wall-bounce bounds only; particles keep their positions and
    /// any left outside head back in.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.bounds = Vec2::new(width, height);
    }

    pub fn set_colors(&mut self, colors: FieldColors) {
        self.config.colors = colors;
    }

    /// Advance one frame: move, bounce off walls, then apply pointer repulsion.
    pub fn step(&mut self, inputs: &FrameInputs) {
        let bounds = self.bounds;
        let repel = self.config.repulsion.zip(inputs.pointer);
        for p in self.particles.iter_mut() {
            p.position += p.velocity;

            // only reverse outward motion, so particles stranded outside by a
            // shrinking resize drift back in
            if (p.position.x < 0.0 && p.velocity.x < 0.0)
                || (p.position.x > bounds.x && p.velocity.x > 0.0)
            {
                p.velocity.x = -p.velocity.x;
            }
            if (p.position.y < 0.0 && p.velocity.y < 0.0)
                || (p.position.y > bounds.y && p.velocity.y > 0.0)
            {
                p.velocity.y = -p.velocity.y;
            }

            if let Some((repulsion, pointer)) = repel {
                p.position += repulsion_offset(p.position, pointer, repulsion);
            }
        }
    }

    pub fn links(&self) -> Vec<Link> {
        let points: Vec<Vec2> = self.particles.iter().map(|p| p.position).collect();
        links_within(&points, self.config.connection_distance)
    }

    /// Emit draw commands for the current particle positions.
    pub fn render(&self, inputs: &FrameInputs, out: &mut FrameOutput) {
        out.clear();
        let colors = self.config.colors;
        for (i, p) in self.particles.iter().enumerate() {
            let color = match self.config.dots {
                DotStyle::Solid => colors.dot,
                DotStyle::Pulse {
                    base,
                    amplitude,
                    rate_per_ms,
                } => {
                    let phase = inputs.time_ms * rate_per_ms + i as f64;
                    colors.dot.with_alpha(base + amplitude * phase.sin() as f32)
                }
            };
            out.dots.push(Dot {
                center: p.position,
                radius: p.radius,
                color,
            });
        }

        let max = self.config.connection_distance;
        for link in self.links() {
            let closeness = 1.0 - link.distance / max;
            let (width, color) = match self.config.links {
                LinkStyle::FadeWidth => (closeness, colors.line),
                LinkStyle::FadeAlpha { width, max_alpha } => {
                    (width, colors.line.with_alpha(max_alpha * closeness))
                }
            };
            out.strokes.push(Stroke {
                from: link.from,
                to: link.to,
                width,
                color,
            });
        }
    }

    /// One full frame: advance the simulation, then emit draw commands.
    pub fn frame(&mut self, inputs: &FrameInputs, out: &mut FrameOutput) {
        self.step(inputs);
        self.render(inputs, out);
    }
}

/// Displacement pushing a particle away from the pointer, stronger when closer.
pub fn repulsion_offset(position: Vec2, pointer: Vec2, repulsion: PointerRepulsion) -> Vec2 {
    let to_pointer = pointer - position;
    let dist_sq = to_pointer.length_squared();
    if dist_sq >= repulsion.radius * repulsion.radius {
        return Vec2::ZERO;
    }
    let dist = dist_sq.sqrt();
    let force = (repulsion.radius - dist) / repulsion.radius;
    // coincident points push along +x, matching atan2(0, 0) == 0
    let dir = if dist > f32::EPSILON {
        to_pointer / dist
    } else {
        Vec2::X
    };
    -dir * force * repulsion.strength
}

/// All unordered pairs `i < j` whose distance is strictly below `max_distance`.
pub fn links_within(points: &[Vec2], max_distance: f32) -> Vec<Link> {
    let max_sq = max_distance * max_distance;
    let mut links = Vec::new();
    for (i, a) in points.iter().enumerate() {
        for (j, b) in points.iter().enumerate().skip(i + 1) {
            let dist_sq = a.distance_squared(*b);
            if dist_sq < max_sq {
                links.push(Link {
                    a: i,
                    b: j,
                    from: *a,
                    to: *b,
                    distance: dist_sq.sqrt(),
                });
            }
        }
    }
    links
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coincident_pointer_pushes_along_x() {
        let rep = PointerRepulsion {
            radius: 200.0,
            strength: 0.5,
        };
        let off = repulsion_offset(Vec2::new(10.0, 10.0), Vec2::new(10.0, 10.0), rep);
        assert!((off.x + 0.5).abs() < 1e-6);
        assert_eq!(off.y, 0.0);
    }

    #[test]
    fn pointer_outside_radius_has_no_effect() {
        let rep = PointerRepulsion {
            radius: 200.0,
            strength: 0.5,
        };
        let off = repulsion_offset(Vec2::ZERO, Vec2::new(200.0, 0.0), rep);
        assert_eq!(off, Vec2::ZERO);
    }
}
