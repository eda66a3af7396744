// Host-side tests for the DOM contract and tuning constants.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;
use folio_core::{
    AMBIENT_CONNECTION_DISTANCE, HERO_CONNECTION_DISTANCE, PARTICLE_MAX_SPEED,
    POINTER_REPEL_RADIUS, PULSE_ALPHA_AMPLITUDE, PULSE_ALPHA_BASE, REVEAL_THRESHOLD,
};

#[test]
fn selectors_and_ids_are_well_formed() {
    assert!(REVEAL_SELECTOR.starts_with('.'));
    assert!(MAGNETIC_SELECTOR.starts_with('.'));
    for id in [
        AMBIENT_CANVAS_ID,
        HERO_CANVAS_ID,
        NAVBAR_ID,
        CONTACT_FORM_ID,
        CHAT_FORM_ID,
        VIEWER_ID,
        PRELOADER_ID,
        TERMINAL_ID,
        COPY_EMAIL_BUTTON_ID,
        CONFETTI_CANVAS_ID,
    ] {
        assert!(!id.is_empty());
        assert!(!id.contains(' '));
        assert!(!id.starts_with('#'));
    }
    for attr in [
        REVEAL_ID_ATTR,
        THEME_ID_ATTR,
        PROJECT_FILTER_ATTR,
        PROJECT_CATEGORY_ATTR,
        VIEWER_KIND_ATTR,
        VIEWER_INDEX_ATTR,
        FALLBACK_TITLE_ATTR,
        FALLBACK_FAILURES_ATTR,
    ] {
        assert!(attr.starts_with("data-"));
    }
}

#[test]
fn canvases_have_distinct_ids() {
    assert_ne!(AMBIENT_CANVAS_ID, HERO_CANVAS_ID);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn tuning_constants_are_within_reasonable_bounds() {
    assert!(PARTICLE_MAX_SPEED > 0.0);
    assert!(AMBIENT_CONNECTION_DISTANCE > HERO_CONNECTION_DISTANCE);
    assert!(POINTER_REPEL_RADIUS > HERO_CONNECTION_DISTANCE);
    // pulse alpha never leaves [0, 1]
    assert!(PULSE_ALPHA_BASE - PULSE_ALPHA_AMPLITUDE >= 0.0);
    assert!(PULSE_ALPHA_BASE + PULSE_ALPHA_AMPLITUDE <= 1.0);
    assert!(REVEAL_THRESHOLD > 0.0 && REVEAL_THRESHOLD <= 1.0);
}
