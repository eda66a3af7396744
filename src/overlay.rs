use crate::constants::*;
use crate::dom::{self, Listener};
use folio_core::content::{image_source_after_failures, ImageSource, ViewerData};
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn show(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(VIEWER_ID) {
        _ = el.class_list().remove_1(HIDDEN_CLASS);
        // fallback for environments without CSS class
        _ = el.set_attribute("style", "");
    }
}

#[inline]
pub fn hide(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(VIEWER_ID) {
        _ = el.class_list().add_1(HIDDEN_CLASS);
        // fallback
        _ = el.set_attribute("style", "display:none");
    }
}

#[inline]
pub fn is_hidden(document: &web::Document) -> bool {
    if let Some(el) = document.get_element_by_id(VIEWER_ID) {
        if el.class_list().contains(HIDDEN_CLASS) {
            return true;
        }
        return el
            .get_attribute("style")
            .map(|s| s.contains("display:none"))
            .unwrap_or(false);
    }
    true
}

fn set_text(document: &web::Document, id: &str, text: &str) {
    if let Some(el) = document.get_element_by_id(id) {
        el.set_text_content(Some(text));
    }
}

/// Fill the viewer from a content record and show it.
pub fn open(document: &web::Document, data: &ViewerData) {
    if let Some(img) = document
        .get_element_by_id(VIEWER_IMAGE_ID)
        .and_then(|el| el.dyn_into::<web::HtmlImageElement>().ok())
    {
        img.set_src(data.src);
        img.set_alt(data.title);
    }
    set_text(document, VIEWER_TITLE_ID, data.title);
    set_text(document, VIEWER_SUBTITLE_ID, data.subtitle);
    set_text(document, VIEWER_BADGE_ID, data.kind.label());
    set_text(document, VIEWER_DESCRIPTION_ID, &data.description);
    if let Some(tags) = document.get_element_by_id(VIEWER_TAGS_ID) {
        tags.set_text_content(None);
        for tag in &data.tags {
            if let Ok(span) = document.create_element("span") {
                span.set_text_content(Some(tag));
                _ = tags.append_child(&span);
            }
        }
    }
    show(document);
}

/// Click on any `[data-viewer-kind]` opens the viewer; the close button and
/// Escape dismiss it.
pub fn wire_viewer(document: &web::Document) -> Vec<Listener> {
    let mut listeners = Vec::new();
    for trigger in dom::query_all(document, &format!("[{}]", VIEWER_KIND_ATTR)) {
        let kind = trigger.get_attribute(VIEWER_KIND_ATTR).unwrap_or_default();
        let index = trigger
            .get_attribute(VIEWER_INDEX_ATTR)
            .and_then(|s| s.parse::<usize>().ok());
        let Some(data) = index.and_then(|i| ViewerData::lookup(&kind, i)) else {
            log::warn!("[viewer] no record for {}[{:?}]", kind, index);
            continue;
        };
        let doc = document.clone();
        listeners.extend(Listener::new(&trigger, "click", move |_| open(&doc, &data)));
    }

    let doc_close = document.clone();
    listeners.extend(dom::add_click_listener(document, VIEWER_CLOSE_ID, move || {
        hide(&doc_close)
    }));

    let doc_key = document.clone();
    listeners.extend(Listener::new(document, "keydown", move |ev| {
        let Some(kev) = ev.dyn_ref::<web::KeyboardEvent>() else {
            return;
        };
        if kev.key() == "Escape" && !is_hidden(&doc_key) {
            hide(&doc_key);
        }
    }));
    listeners
}

/// Images marked with a fallback title swap to a placeholder on the first
/// failed load and to the parent's icon fallback on the second.
pub fn wire_image_fallbacks(document: &web::Document) -> Vec<Listener> {
    let mut listeners = Vec::new();
    for el in dom::query_all(document, &format!("img[{}]", FALLBACK_TITLE_ATTR)) {
        let Ok(img) = el.clone().dyn_into::<web::HtmlImageElement>() else {
            continue;
        };
        listeners.extend(Listener::new(&el, "error", move |_| {
            let title = img.get_attribute(FALLBACK_TITLE_ATTR).unwrap_or_default();
            let failures = img
                .get_attribute(FALLBACK_FAILURES_ATTR)
                .and_then(|s| s.parse::<u32>().ok())
                .unwrap_or(0)
                + 1;
            _ = img.set_attribute(FALLBACK_FAILURES_ATTR, &failures.to_string());
            match image_source_after_failures(&title, failures) {
                ImageSource::Original => {}
                ImageSource::Placeholder(url) => img.set_src(&url),
                ImageSource::Icon => {
                    img.set_hidden(true);
                    if let Some(parent) = img.parent_element() {
                        dom::set_class(&parent, IMAGE_FAILED_CLASS, true);
                    }
                }
            }
        }));
    }
    listeners
}
