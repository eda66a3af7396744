//! Scroll-position helpers for the navbar and the progress bar.

use crate::constants::{NAV_LOOKAHEAD_PX, NAV_SCROLLED_PX};
use smallvec::SmallVec;

#[derive(Clone, Debug, PartialEq)]
pub struct SectionAnchor {
    pub id: String,
    /// Document offset of the section's top edge, in px.
    pub top: f64,
}

impl SectionAnchor {
    pub fn new(id: impl Into<String>, top: f64) -> Self {
        Self {
            id: id.into(),
            top,
        }
    }
}

/// Anchors in page order; only a handful of sections exist.
pub type Anchors = SmallVec<[SectionAnchor; 8]>;

/// The section to highlight: the last one whose top, minus the lookahead,
/// is at or above the scroll position. `None` while above the first section.
pub fn active_section(scroll_y: f64, anchors: &[SectionAnchor], lookahead: f64) -> Option<&str> {
    let mut current = None;
    for anchor in anchors {
        if scroll_y >= anchor.top - lookahead {
            current = Some(anchor.id.as_str());
        }
    }
    current
}

#[inline]
pub fn active_section_default(scroll_y: f64, anchors: &[SectionAnchor]) -> Option<&str> {
    active_section(scroll_y, anchors, NAV_LOOKAHEAD_PX)
}

/// Compact navbar once the page has scrolled past a few px.
#[inline]
pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > NAV_SCROLLED_PX
}

/// Fraction of the page scrolled, in [0, 1]; 0 when the page fits the viewport.
pub fn scroll_progress(scroll_top: f64, scroll_height: f64, client_height: f64) -> f64 {
    let scrollable = scroll_height - client_height;
    if scrollable <= 0.0 {
        return 0.0;
    }
    (scroll_top / scrollable).clamp(0.0, 1.0)
}
