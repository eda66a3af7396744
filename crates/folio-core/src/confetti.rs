//! Short celebratory burst fired from a point on screen.
//!
//! Pieces launch in a cone around straight up, lose speed geometrically,
//! fall under a constant pull and fade out over a fixed number of frames.

use crate::constants::*;
use crate::motion::Debouncer;
use crate::particles::{Dot, FrameOutput};
use crate::theme::Rgba;
use glam::Vec2;
use rand::Rng;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BurstConfig {
    pub count: usize,
    pub spread_deg: f32,
    pub angle_deg: f32,
    pub start_velocity: f32,
    pub decay: f32,
    pub gravity: f32,
    pub ticks: u32,
}

impl Default for BurstConfig {
    fn default() -> Self {
        Self {
            count: CONFETTI_COUNT,
            spread_deg: CONFETTI_SPREAD_DEG,
            angle_deg: CONFETTI_ANGLE_DEG,
            start_velocity: CONFETTI_START_VELOCITY,
            decay: CONFETTI_DECAY,
            gravity: CONFETTI_GRAVITY,
            ticks: CONFETTI_TICKS,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ConfettiPiece {
    pub position: Vec2,
    /// Heading in radians, screen space (y grows downward).
    pub heading: f32,
    pub speed: f32,
    pub color: Rgba,
    tick: u32,
    ticks: u32,
    decay: f32,
    gravity: f32,
}

impl ConfettiPiece {
    fn step(&mut self) {
        self.position.x += self.heading.cos() * self.speed;
        self.position.y += self.heading.sin() * self.speed + self.gravity * 3.0;
        self.speed *= self.decay;
        self.tick += 1;
    }

    pub fn opacity(&self) -> f32 {
        1.0 - self.tick as f32 / self.ticks as f32
    }

    pub fn is_spent(&self) -> bool {
        self.tick >= self.ticks
    }
}

#[derive(Clone, Debug, Default)]
pub struct Confetti {
    pieces: Vec<ConfettiPiece>,
}

impl Confetti {
    pub fn pieces(&self) -> &[ConfettiPiece] {
        &self.pieces
    }

    pub fn is_idle(&self) -> bool {
        self.pieces.is_empty()
    }

    /// Add a burst at `origin` (canvas px). Bursts stack.
    pub fn burst<R: Rng + ?Sized>(&mut self, origin: Vec2, config: &BurstConfig, rng: &mut R) {
        let spread = config.spread_deg.to_radians();
        let base = -config.angle_deg.to_radians();
        self.pieces.extend((0..config.count).map(|i| {
            let [r, g, b] = CONFETTI_COLORS[i % CONFETTI_COLORS.len()];
            ConfettiPiece {
                position: origin,
                heading: base + (0.5 * spread - rng.gen::<f32>() * spread),
                speed: config.start_velocity * 0.5 + rng.gen::<f32>() * config.start_velocity,
                color: Rgba::rgb(r, g, b),
                tick: 0,
                ticks: config.ticks.max(1),
                decay: config.decay,
                gravity: config.gravity,
            }
        }));
    }

    /// Advance one frame and drop spent pieces.
    pub fn step(&mut self) {
        for p in &mut self.pieces {
            p.step();
        }
        self.pieces.retain(|p| !p.is_spent());
    }

    pub fn render(&self, out: &mut FrameOutput) {
        out.clear();
        out.dots.extend(self.pieces.iter().map(|p| Dot {
            center: p.position,
            radius: CONFETTI_SIZE,
            color: p.color.with_alpha(p.opacity()),
        }));
    }
}

pub const COPY_EMAIL_LABEL: &str = "Copy Email";
pub const COPIED_LABEL: &str = "Copied!";

/// "Copied!" state of the copy-email button. Another click while it shows
/// restarts the countdown.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CopyFeedback {
    reset: Debouncer,
}

impl Default for CopyFeedback {
    fn default() -> Self {
        Self {
            reset: Debouncer::new(COPIED_RESET_MS),
        }
    }
}

impl CopyFeedback {
    pub fn copied(&mut self, now_ms: f64) {
        self.reset.poke(now_ms);
    }

    /// True once, when the copied state ends.
    pub fn poll(&mut self, now_ms: f64) -> bool {
        self.reset.poll(now_ms)
    }

    pub fn is_copied(&self) -> bool {
        self.reset.is_pending()
    }

    pub fn label(&self) -> &'static str {
        if self.is_copied() {
            COPIED_LABEL
        } else {
            COPY_EMAIL_LABEL
        }
    }
}
