use crate::constants::*;
use crate::dom::{self, Listener};
use crate::frame;
use crate::style;
use folio_core::constants::NAV_SECTIONS;
use folio_core::motion::FrameThrottle;
use folio_core::nav::{self, Anchors, SectionAnchor};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

struct ScrollView {
    document: web::Document,
    // cached once; sections do not change after mount
    sections: Vec<(String, web::HtmlElement)>,
    active: Option<String>,
}

impl ScrollView {
    fn update(&mut self) {
        let Some(window) = web::window() else {
            return;
        };
        let scroll_y = window.scroll_y().unwrap_or(0.0);

        if let Some(navbar) = self.document.get_element_by_id(NAVBAR_ID) {
            dom::set_class(&navbar, NAV_SCROLLED_CLASS, nav::is_scrolled(scroll_y));
        }

        let anchors: Anchors = self
            .sections
            .iter()
            .map(|(id, el)| SectionAnchor::new(id.clone(), el.offset_top() as f64))
            .collect();
        let current = nav::active_section_default(scroll_y, &anchors).map(str::to_string);
        if current != self.active {
            for (id, _) in &self.sections {
                let selector = style::nav_link_selector(NAVBAR_ID, id);
                for link in dom::query_all(&self.document, &selector) {
                    dom::set_class(&link, NAV_ACTIVE_CLASS, current.as_deref() == Some(id));
                }
            }
            self.active = current;
        }

        if let (Some(root), Some(bar)) = (
            self.document.document_element(),
            self.document.get_element_by_id(SCROLL_PROGRESS_ID),
        ) {
            let progress = nav::scroll_progress(
                root.scroll_top() as f64,
                root.scroll_height() as f64,
                root.client_height() as f64,
            );
            dom::set_style(&bar, "transform", &style::scale_x(progress));
        }
    }
}

/// Keeps the scroll listener alive. Dropping it closes the throttle so a
/// frame already queued skips its update.
pub struct ScrollMount {
    _listener: Listener,
    throttle: Rc<RefCell<FrameThrottle>>,
}

impl Drop for ScrollMount {
    fn drop(&mut self) {
        self.throttle.borrow_mut().close();
    }
}

/// Navbar highlight, compact navbar and progress bar, updated at most once per frame.
pub fn wire_scroll(document: &web::Document) -> Option<ScrollMount> {
    let sections = NAV_SECTIONS
        .iter()
        .filter_map(|id| {
            let el = document
                .get_element_by_id(id)?
                .dyn_into::<web::HtmlElement>()
                .ok()?;
            Some((id.to_string(), el))
        })
        .collect::<Vec<_>>();

    let view = Rc::new(RefCell::new(ScrollView {
        document: document.clone(),
        sections,
        active: None,
    }));
    view.borrow_mut().update();

    let throttle = Rc::new(RefCell::new(FrameThrottle::default()));
    let window = web::window()?;
    let throttle_listen = throttle.clone();
    let listener = Listener::new(&window, "scroll", move |_| {
        if !throttle_listen.borrow_mut().request() {
            return;
        }
        let view = Rc::downgrade(&view);
        let throttle = throttle_listen.clone();
        frame::next_frame(move || {
            if !throttle.borrow_mut().complete() {
                return;
            }
            if let Some(view) = view.upgrade() {
                view.borrow_mut().update();
            }
        });
    })?;
    Some(ScrollMount {
        _listener: listener,
        throttle,
    })
}
