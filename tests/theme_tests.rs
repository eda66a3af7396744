// Host-side tests for palettes, color helpers and the theme store.

use folio_core::*;
use std::cell::RefCell;
use std::rc::Rc;

#[test]
fn four_palettes_with_unique_ids() {
    let ids: Vec<&str> = PALETTES.iter().map(|p| p.id).collect();
    assert_eq!(ids, ["cosmic", "cyber", "sunset", "royal"]);
    assert!(palette_by_id("cyber").is_some());
    assert!(palette_by_id("neon").is_none());
}

#[test]
fn css_variables_use_hex_and_channels() {
    let vars = PALETTES[0].css_variables();
    assert_eq!(vars.len(), 9);
    assert!(vars.contains(&("--primary-rgb", "99, 102, 241".to_string())));
    assert!(vars.contains(&("--primary-500", "#6366f1".to_string())));
}

#[test]
fn rgba_formats_for_canvas() {
    let c = Rgba::rgba(148, 163, 184, 0.2);
    assert_eq!(c.css(), "rgba(148, 163, 184, 0.2)");
    assert_eq!(c.with_alpha(3.0).a, 1.0);
    assert_eq!(c.with_alpha(-1.0).a, 0.0);
}

#[test]
fn ambient_colors_follow_mode() {
    let dark = FieldColors::ambient(ThemeMode::Dark);
    let light = FieldColors::ambient(ThemeMode::Light);
    assert_ne!(dark, light);
    assert_eq!(light.dot, Rgba::rgba(99, 102, 241, 0.5));
}

#[test]
fn store_notifies_on_change_only() {
    let mut store = ThemeStore::new();
    let seen = Rc::new(RefCell::new(Vec::new()));
    let seen_cb = seen.clone();
    store.subscribe(move |s| seen_cb.borrow_mut().push((s.mode, s.palette.id)));

    store.set_mode(ThemeMode::Dark);
    assert!(seen.borrow().is_empty());

    assert_eq!(store.toggle_mode(), ThemeMode::Light);
    assert!(store.apply_palette("sunset"));
    assert!(store.apply_palette("sunset"));
    assert!(!store.apply_palette("nope"));

    assert_eq!(
        *seen.borrow(),
        vec![(ThemeMode::Light, "cosmic"), (ThemeMode::Light, "sunset")]
    );
    assert_eq!(store.state().palette.id, "sunset");
}

#[test]
fn unsubscribed_callbacks_stop_firing() {
    let mut store = ThemeStore::new();
    let count = Rc::new(RefCell::new(0));
    let count_cb = count.clone();
    let id = store.subscribe(move |_| *count_cb.borrow_mut() += 1);
    store.toggle_mode();
    assert!(store.unsubscribe(id));
    assert!(!store.unsubscribe(id));
    store.toggle_mode();
    assert_eq!(*count.borrow(), 1);
    assert_eq!(store.subscriber_count(), 0);
}

#[test]
fn default_theme_is_dark_cosmic() {
    let state = ThemeState::default();
    assert_eq!(state.mode, ThemeMode::Dark);
    assert_eq!(state.palette.id, "cosmic");
    assert!(ThemeMode::Dark.toggled().is_light());
}

#[test]
fn hero_colors_use_palette_accent_shades() {
    let cosmic = FieldColors::hero(&PALETTES[0]);
    assert_eq!(cosmic.dot, Rgba::rgb(165, 180, 252));
    assert_eq!(cosmic.line, Rgba::rgb(129, 140, 248));

    let sunset = palette_by_id("sunset").unwrap();
    let colors = FieldColors::hero(sunset);
    assert_eq!(colors.dot, sunset.primary_300);
    assert_eq!(colors.line, sunset.primary_400);
    assert_ne!(colors, cosmic);
}
