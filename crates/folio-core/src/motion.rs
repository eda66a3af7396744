//! Rate limiting and small pointer-driven motion helpers.

use crate::constants::{MAGNETIC_STRENGTH, RESIZE_QUIET_MS, TRAILER_LERP, TRAILER_START};
use glam::Vec2;

/// Fires once after `quiet_ms` have passed without a new poke.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Debouncer {
    quiet_ms: f64,
    deadline: Option<f64>,
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(RESIZE_QUIET_MS)
    }
}

impl Debouncer {
    pub fn new(quiet_ms: f64) -> Self {
        Self {
            quiet_ms,
            deadline: None,
        }
    }

    /// Record an event at `now_ms`, pushing the deadline out.
    pub fn poke(&mut self, now_ms: f64) {
        self.deadline = Some(now_ms + self.quiet_ms);
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// True exactly once per quiet period, on the first poll at or after the deadline.
    pub fn poll(&mut self, now_ms: f64) -> bool {
        match self.deadline {
            Some(deadline) if now_ms >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

/// Coalesces bursts of events into one update per animation frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameThrottle {
    scheduled: bool,
    closed: bool,
}

impl FrameThrottle {
    /// True when the caller should schedule an update; false if one is
    /// already queued or the throttle is closed.
    pub fn request(&mut self) -> bool {
        if self.scheduled || self.closed {
            return false;
        }
        self.scheduled = true;
        true
    }

    /// Called from the queued frame. False means the owner went away and
    /// the update must be skipped.
    pub fn complete(&mut self) -> bool {
        self.scheduled = false;
        !self.closed
    }

    pub fn close(&mut self) {
        self.closed = true;
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }
}

/// Offset pulling an element toward the pointer, proportional to distance from its center.
#[inline]
pub fn magnetic_offset(pointer: Vec2, center: Vec2, strength: f32) -> Vec2 {
    (pointer - center) * strength
}

#[inline]
pub fn magnetic_offset_default(pointer: Vec2, center: Vec2) -> Vec2 {
    magnetic_offset(pointer, center, MAGNETIC_STRENGTH)
}

/// Cursor dot plus a ring that eases toward it each frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CursorTrailer {
    pub cursor: Vec2,
    pub trailer: Vec2,
    pub lerp: f32,
    seen_pointer: bool,
}

impl Default for CursorTrailer {
    fn default() -> Self {
        let start = Vec2::from(TRAILER_START);
        Self {
            cursor: start,
            trailer: start,
            lerp: TRAILER_LERP,
            seen_pointer: false,
        }
    }
}

impl CursorTrailer {
    pub fn pointer_moved(&mut self, pos: Vec2) {
        self.cursor = pos;
        self.seen_pointer = true;
    }

    /// Both elements stay hidden until the first pointer move.
    pub fn visible(&self) -> bool {
        self.seen_pointer
    }

    pub fn step(&mut self) -> Vec2 {
        self.trailer += (self.cursor - self.trailer) * self.lerp;
        self.trailer
    }
}
