//! One-shot scroll reveal.
//!
//! Each registered region starts inactive and becomes active the first time
//! its visible fraction reaches the threshold. Activation is permanent for the
//! lifetime of the controller; later observations of the same region are
//! reported but never change its state.

use crate::constants::{REVEAL_BOTTOM_MARGIN_PX, REVEAL_THRESHOLD};
use fnv::{FnvHashMap, FnvHashSet};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RegionId(pub u32);

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealOptions {
    /// Fraction of the region's area that must be visible, in [0, 1].
    pub threshold: f64,
    /// The viewport's bottom edge is pulled up by this many px.
    pub bottom_margin_px: f64,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self {
            threshold: REVEAL_THRESHOLD,
            bottom_margin_px: REVEAL_BOTTOM_MARGIN_PX,
        }
    }
}

impl RevealOptions {
    /// `rootMargin` string understood by the browser's intersection observer.
    pub fn root_margin(&self) -> String {
        format!("0px 0px -{}px 0px", self.bottom_margin_px)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Observation {
    /// The region just became active.
    Activated,
    AlreadyActive,
    BelowThreshold,
    /// Not registered, or the controller was disconnected.
    Unknown,
}

#[derive(Debug, Default)]
pub struct RevealController {
    options: RevealOptions,
    regions: FnvHashMap<RegionId, bool>,
    // activated regions that were unregistered; they come back active
    retired: FnvHashSet<RegionId>,
    disconnected: bool,
}

impl RevealController {
    pub fn new(options: RevealOptions) -> Self {
        Self {
            options,
            regions: FnvHashMap::default(),
            retired: FnvHashSet::default(),
            disconnected: false,
        }
    }

    pub fn options(&self) -> RevealOptions {
        self.options
    }

    /// Registering an already known region keeps its current state.
    /// Activation is one-way for the controller's whole lifetime.
    pub fn register(&mut self, id: RegionId) {
        if self.disconnected {
            return;
        }
        let revealed = self.retired.remove(&id);
        self.regions.entry(id).or_insert(revealed);
    }

    /// Forget a region. An activated region stays activated if it is
    /// registered again.
    pub fn unregister(&mut self, id: RegionId) -> bool {
        match self.regions.remove(&id) {
            Some(active) => {
                if active {
                    self.retired.insert(id);
                }
                true
            }
            None => false,
        }
    }

    pub fn observe(&mut self, id: RegionId, visible_ratio: f64) -> Observation {
        if self.disconnected {
            return Observation::Unknown;
        }
        let threshold = self.options.threshold;
        match self.regions.get_mut(&id) {
            None => Observation::Unknown,
            Some(true) => Observation::AlreadyActive,
            Some(active) => {
                if visible_ratio > 0.0 && visible_ratio >= threshold {
                    *active = true;
                    log::debug!("[reveal] region {} activated", id.0);
                    Observation::Activated
                } else {
                    Observation::BelowThreshold
                }
            }
        }
    }

    pub fn is_active(&self, id: RegionId) -> bool {
        self.regions.get(&id).copied().unwrap_or(false)
    }

    pub fn is_registered(&self, id: RegionId) -> bool {
        self.regions.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    pub fn active_count(&self) -> usize {
        self.regions.values().filter(|a| **a).count()
    }

    /// Regions still waiting for their first activation.
    pub fn pending(&self) -> Vec<RegionId> {
        let mut ids: Vec<RegionId> = self
            .regions
            .iter()
            .filter(|(_, active)| !**active)
            .map(|(id, _)| *id)
            .collect();
        ids.sort();
        ids
    }

    /// Stop observing everything; no activation happens afterwards.
    pub fn disconnect(&mut self) {
        self.disconnected = true;
        self.regions.clear();
        self.retired.clear();
    }

    pub fn is_disconnected(&self) -> bool {
        self.disconnected
    }
}

/// Visible fraction of a region spanning `[top, top + height)` in viewport
/// coordinates, with the viewport's bottom edge raised by `bottom_margin`.
pub fn intersection_ratio(top: f64, height: f64, viewport_height: f64, bottom_margin: f64) -> f64 {
    if height <= 0.0 {
        return 0.0;
    }
    let view_bottom = (viewport_height - bottom_margin).max(0.0);
    let visible = (top + height).min(view_bottom) - top.max(0.0);
    (visible / height).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_margin_matches_observer_syntax() {
        assert_eq!(RevealOptions::default().root_margin(), "0px 0px -50px 0px");
    }

    #[test]
    fn ratio_respects_bottom_margin() {
        // 100px tall element whose top sits 40px above the viewport bottom,
        // the 50px margin hides it entirely
        assert_eq!(intersection_ratio(760.0, 100.0, 800.0, 50.0), 0.0);
        assert!((intersection_ratio(700.0, 100.0, 800.0, 50.0) - 0.5).abs() < 1e-9);
        assert_eq!(intersection_ratio(0.0, 100.0, 800.0, 50.0), 1.0);
    }
}
