//! Boot screen: a progress counter that creeps to 100 in random steps while
//! a status line walks through a fixed script, then lingers briefly before
//! handing over to the page.

use crate::constants::{
    PRELOADER_EXIT_MS, PRELOADER_MAX_STEP, PRELOADER_STATUS_MS, PRELOADER_TICK_MS,
};
use rand::Rng;

pub const PRELOADER_STATUS: [&str; 5] = [
    "INITIALIZING SYSTEM",
    "LOADING ASSETS...",
    "CONNECTING NEURAL NET...",
    "CALIBRATING INTERFACE...",
    "ACCESS GRANTED",
];

#[derive(Clone, Debug, PartialEq)]
pub struct Preloader {
    progress: f64,
    status: usize,
    next_tick: f64,
    next_status: f64,
    done_at: Option<f64>,
}

impl Preloader {
    pub fn new(start_ms: f64) -> Self {
        Self {
            progress: 0.0,
            status: 0,
            next_tick: start_ms + PRELOADER_TICK_MS,
            next_status: start_ms + PRELOADER_STATUS_MS,
            done_at: None,
        }
    }

    pub fn progress(&self) -> f64 {
        self.progress
    }

    /// Whole percent shown next to the bar.
    pub fn percent(&self) -> u32 {
        self.progress.floor() as u32
    }

    pub fn status(&self) -> &'static str {
        PRELOADER_STATUS[self.status]
    }

    pub fn is_full(&self) -> bool {
        self.progress >= 100.0
    }

    /// The exit delay has run out; the overlay can go.
    pub fn is_complete(&self, now_ms: f64) -> bool {
        matches!(self.done_at, Some(at) if now_ms >= at)
    }

    /// Run every tick due by `now_ms`. Returns true when anything visible changed.
    ///
    /// A full bar is noticed on the tick after it fills, which then starts
    /// the exit delay.
    pub fn update<R: Rng + ?Sized>(&mut self, now_ms: f64, rng: &mut R) -> bool {
        let mut changed = false;
        while self.done_at.is_none() && now_ms >= self.next_tick {
            if self.is_full() {
                self.done_at = Some(self.next_tick + PRELOADER_EXIT_MS);
            } else {
                let step = rng.gen::<f64>() * PRELOADER_MAX_STEP;
                let next = (self.progress + step).min(100.0);
                changed |= next != self.progress;
                self.progress = next;
            }
            self.next_tick += PRELOADER_TICK_MS;
        }
        while self.status + 1 < PRELOADER_STATUS.len() && now_ms >= self.next_status {
            self.status += 1;
            self.next_status += PRELOADER_STATUS_MS;
            changed = true;
        }
        changed
    }
}
