use crate::constants::*;
use crate::dom::{self, Listener};
use folio_core::{SubscriptionId, ThemeState, ThemeStore};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Reflect the theme on the document: body class for light mode, CSS custom
/// properties for the palette, selected state on the palette buttons.
pub fn apply_to_document(document: &web::Document, state: &ThemeState) {
    if let Some(body) = document.body() {
        dom::set_class(&body, LIGHT_MODE_CLASS, state.mode.is_light());
    }
    if let Some(root) = document.document_element() {
        for (name, value) in state.palette.css_variables() {
            dom::set_style(&root, name, &value);
        }
    }
    for button in dom::query_all(document, &format!("[{}]", THEME_ID_ATTR)) {
        let selected = button.get_attribute(THEME_ID_ATTR).as_deref() == Some(state.palette.id);
        dom::set_class(&button, THEME_SELECTED_CLASS, selected);
    }
}

/// Theme controls wired to the shared store.
pub struct ThemeMount {
    store: Rc<RefCell<ThemeStore>>,
    subscription: SubscriptionId,
    _listeners: Vec<Listener>,
}

impl Drop for ThemeMount {
    fn drop(&mut self) {
        if let Ok(mut store) = self.store.try_borrow_mut() {
            store.unsubscribe(self.subscription);
        }
    }
}

pub fn mount(document: &web::Document, store: &Rc<RefCell<ThemeStore>>) -> ThemeMount {
    apply_to_document(document, &store.borrow().state());

    let subscription = {
        let doc = document.clone();
        store.borrow_mut().subscribe(move |state| {
            apply_to_document(&doc, state);
            log::info!(
                "[theme] mode={:?} palette={}",
                state.mode,
                state.palette.id
            );
        })
    };

    let mut listeners = Vec::new();

    let store_mode = store.clone();
    listeners.extend(dom::add_click_listener(document, THEME_MODE_BUTTON_ID, move || {
        store_mode.borrow_mut().toggle_mode();
    }));

    let doc_panel = document.clone();
    listeners.extend(dom::add_click_listener(
        document,
        THEME_SETTINGS_BUTTON_ID,
        move || {
            if let Some(panel) = doc_panel.get_element_by_id(THEME_PANEL_ID) {
                _ = panel.class_list().toggle(THEME_PANEL_OPEN_CLASS);
            }
        },
    ));

    for button in dom::query_all(document, &format!("[{}]", THEME_ID_ATTR)) {
        let Some(id) = button.get_attribute(THEME_ID_ATTR) else {
            continue;
        };
        let store_palette = store.clone();
        listeners.extend(Listener::new(&button, "click", move |_| {
            store_palette.borrow_mut().apply_palette(&id);
        }));
    }

    ThemeMount {
        store: store.clone(),
        subscription,
        _listeners: listeners,
    }
}
