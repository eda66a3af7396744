use crate::constants::*;
use crate::dom;
use crate::frame::{self, LoopHandle};
use crate::style;
use folio_core::preloader::Preloader;
use web_sys as web;

struct PreloaderView {
    root: web::Element,
    bar: Option<web::Element>,
    percent: Option<web::Element>,
    status: Option<web::Element>,
    badge: Option<web::Element>,
}

impl PreloaderView {
    fn render(&self, loader: &Preloader) {
        if let Some(bar) = &self.bar {
            dom::set_style(bar, "width", &style::percent(loader.progress()));
        }
        if let Some(el) = &self.percent {
            el.set_text_content(Some(&style::percent_label(loader.percent())));
        }
        if let Some(el) = &self.status {
            el.set_text_content(Some(loader.status()));
        }
        if let Some(badge) = &self.badge {
            dom::set_class(badge, HIDDEN_CLASS, !loader.is_full());
        }
    }
}

/// Run the boot overlay until it completes, then hide it. The loop idles
/// afterwards and stops with the handle.
pub fn mount(document: &web::Document) -> Option<LoopHandle> {
    let root = document.get_element_by_id(PRELOADER_ID)?;
    let view = PreloaderView {
        bar: document.get_element_by_id(PRELOADER_BAR_ID),
        percent: document.get_element_by_id(PRELOADER_PERCENT_ID),
        status: document.get_element_by_id(PRELOADER_STATUS_ID),
        badge: document.get_element_by_id(PRELOADER_BADGE_ID),
        root,
    };
    let mut loader = Preloader::new(dom::now_ms());
    let mut finished = false;
    view.render(&loader);
    let mut rng = rand::thread_rng();

    Some(frame::start_loop(move |time| {
        if finished {
            return;
        }
        if loader.update(time.now_ms, &mut rng) {
            view.render(&loader);
        }
        if loader.is_complete(time.now_ms) {
            dom::set_class(&view.root, HIDDEN_CLASS, true);
            finished = true;
            log::info!("[preloader] done");
        }
    }))
}
