use crate::constants::TYPEWRITER_ID;
use crate::frame::{self, LoopHandle};
use folio_core::content::HERO_ROLES;
use folio_core::typewriter::Typewriter;
use web_sys as web;

/// Cycle the hero roles in the `#typewriter` element. Ticks are scheduled
/// off the frame loop so the whole thing stops with the handle.
pub fn mount(document: &web::Document) -> Option<LoopHandle> {
    let el = document.get_element_by_id(TYPEWRITER_ID)?;
    let mut writer = Typewriter::new(&HERO_ROLES);
    let mut next_at: Option<f64> = None;
    Some(frame::start_loop(move |time| {
        let due = *next_at.get_or_insert(time.now_ms);
        if time.now_ms < due {
            return;
        }
        let delay = writer.tick();
        el.set_text_content(Some(writer.text()));
        next_at = Some(time.now_ms + delay as f64);
    }))
}
