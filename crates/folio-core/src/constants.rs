// Shared tuning constants for the particle fields, reveal, navigation and
// decorative motion. Values mirror what the live site was tuned to.

// Particle motion
pub const PARTICLE_MAX_SPEED: f32 = 0.15; // per-axis velocity range is ±this, per frame

// Ambient background field
pub const AMBIENT_PARTICLE_COUNT: usize = 15;
pub const AMBIENT_CONNECTION_DISTANCE: f32 = 180.0;
pub const AMBIENT_RADIUS_RANGE: (f32, f32) = (0.0, 2.0);

// Pointer-reactive hero field
pub const HERO_PARTICLE_SPACING: f32 = 30.0; // one particle per this many px of width
pub const HERO_PARTICLE_CAP: usize = 30;
pub const HERO_CONNECTION_DISTANCE: f32 = 150.0;
pub const HERO_RADIUS_RANGE: (f32, f32) = (0.5, 2.5);
pub const HERO_LINK_WIDTH: f32 = 0.8;
pub const HERO_LINK_ALPHA: f32 = 0.15; // alpha of a zero-length link

// Pointer repulsion (hero only)
pub const POINTER_REPEL_RADIUS: f32 = 200.0;
pub const POINTER_REPEL_STRENGTH: f32 = 0.5; // px pushed per frame at zero distance

// Pulsing dot opacity (hero only): base + amp * sin(t * rate + i)
pub const PULSE_ALPHA_BASE: f32 = 0.4;
pub const PULSE_ALPHA_AMPLITUDE: f32 = 0.2;
pub const PULSE_RATE_PER_MS: f64 = 0.003;

// Resize handling
pub const RESIZE_QUIET_MS: f64 = 100.0;

// Scroll reveal
pub const REVEAL_THRESHOLD: f64 = 0.1; // fraction of the element that must be visible
pub const REVEAL_BOTTOM_MARGIN_PX: f64 = 50.0; // trigger this far before natural entry

// Navigation
pub const NAV_SECTIONS: [&str; 4] = ["skills", "projects", "certifications", "contact"];
pub const NAV_LOOKAHEAD_PX: f64 = 300.0;
pub const NAV_SCROLLED_PX: f64 = 20.0;

// Decorative motion
pub const MAGNETIC_STRENGTH: f32 = 0.3;
pub const TRAILER_LERP: f32 = 0.15;
pub const TRAILER_START: [f32; 2] = [-100.0, -100.0];

// Typewriter timings (ms)
pub const TYPE_DELAY_MS: u32 = 150;
pub const DELETE_DELAY_MS: u32 = 50;
pub const WORD_PAUSE_MS: u32 = 2000;

// Preloader (ms)
pub const PRELOADER_TICK_MS: f64 = 100.0;
pub const PRELOADER_MAX_STEP: f64 = 5.0; // percent added per tick is uniform in [0, this)
pub const PRELOADER_STATUS_MS: f64 = 800.0;
pub const PRELOADER_EXIT_MS: f64 = 800.0;

// Code terminal
pub const TERMINAL_CHAR_MS: f64 = 30.0;

// Copy-email button and confetti burst
pub const COPIED_RESET_MS: f64 = 2000.0;
pub const CONFETTI_COUNT: usize = 50;
pub const CONFETTI_SPREAD_DEG: f32 = 60.0;
pub const CONFETTI_ANGLE_DEG: f32 = 90.0; // straight up
pub const CONFETTI_START_VELOCITY: f32 = 45.0;
pub const CONFETTI_DECAY: f32 = 0.9;
pub const CONFETTI_GRAVITY: f32 = 1.0;
pub const CONFETTI_TICKS: u32 = 200;
pub const CONFETTI_SIZE: f32 = 5.0;
pub const CONFETTI_COLORS: [[u8; 3]; 3] = [[0x63, 0x66, 0xf1], [0xa8, 0x55, 0xf7], [0xff, 0xff, 0xff]];

#[inline]
pub fn hero_particle_count(viewport_width: f32) -> usize {
    let by_width = (viewport_width.max(0.0) / HERO_PARTICLE_SPACING).floor() as usize;
    by_width.min(HERO_PARTICLE_CAP)
}
