use crate::constants::{REVEAL_ACTIVE_CLASS, REVEAL_ID_ATTR, REVEAL_SELECTOR};
use crate::dom;
use folio_core::{Observation, RegionId, RevealController, RevealOptions};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, web::IntersectionObserver)>;

/// Intersection observer feeding a [`RevealController`]. Dropping it
/// disconnects the observer; nothing activates afterwards.
pub struct RevealMount {
    observer: web::IntersectionObserver,
    controller: Rc<RefCell<RevealController>>,
    _callback: ObserverCallback,
}

impl Drop for RevealMount {
    fn drop(&mut self) {
        self.observer.disconnect();
        let mut c = self.controller.borrow_mut();
        log::info!(
            "[reveal] disconnected, {}/{} regions revealed",
            c.active_count(),
            c.len()
        );
        c.disconnect();
    }
}

fn region_of(el: &web::Element) -> Option<RegionId> {
    el.get_attribute(REVEAL_ID_ATTR)?.parse().ok().map(RegionId)
}

pub fn mount(document: &web::Document, options: RevealOptions) -> anyhow::Result<RevealMount> {
    let controller = Rc::new(RefCell::new(RevealController::new(options)));

    let controller_cb = controller.clone();
    let callback: ObserverCallback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: web::IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                    continue;
                };
                let target = entry.target();
                let Some(id) = region_of(&target) else {
                    continue;
                };
                let ratio = if entry.is_intersecting() {
                    entry.intersection_ratio()
                } else {
                    0.0
                };
                if controller_cb.borrow_mut().observe(id, ratio) == Observation::Activated {
                    dom::set_class(&target, REVEAL_ACTIVE_CLASS, true);
                    observer.unobserve(&target);
                }
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

    let init = web::IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(options.threshold));
    init.set_root_margin(&options.root_margin());
    let observer =
        web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;

    let elements = dom::query_all(document, REVEAL_SELECTOR);
    {
        let mut c = controller.borrow_mut();
        for (i, el) in elements.iter().enumerate() {
            let id = RegionId(i as u32);
            _ = el.set_attribute(REVEAL_ID_ATTR, &id.0.to_string());
            c.register(id);
            observer.observe(el);
        }
    }
    log::info!("[reveal] observing {} regions", elements.len());

    Ok(RevealMount {
        observer,
        controller,
        _callback: callback,
    })
}
