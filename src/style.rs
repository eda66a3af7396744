// Inline style strings written by the front-end.

#[inline]
pub fn translate_px(x: f32, y: f32) -> String {
    format!("translate({}px, {}px)", x, y)
}

#[inline]
pub fn scale_x(fraction: f64) -> String {
    format!("scaleX({})", fraction.clamp(0.0, 1.0))
}

#[inline]
pub fn percent(value: f64) -> String {
    format!("{}%", value.clamp(0.0, 100.0))
}

/// Selector for the navbar link pointing at an in-page section.
#[inline]
pub fn nav_link_selector(navbar_id: &str, section_id: &str) -> String {
    format!("#{} a[href=\"#{}\"]", navbar_id, section_id)
}

/// Id of the input element for a contact step key.
#[inline]
pub fn contact_input_id(prefix: &str, key: &str) -> String {
    format!("{}{}", prefix, key)
}

#[inline]
pub fn step_counter(step_index: usize, total: usize) -> String {
    format!("{:02} / {:02}", step_index + 1, total)
}

/// Whole-percent readout next to the preloader bar.
#[inline]
pub fn percent_label(percent: u32) -> String {
    format!("{}%", percent.min(100))
}
