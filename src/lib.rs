#![cfg(target_arch = "wasm32")]
use folio_core::content::PERSONAL_INFO;
use folio_core::{RevealOptions, ThemeStore};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod canvas;
mod chat;
mod constants;
mod contact;
mod dom;
mod email;
mod events;
mod field;
mod frame;
mod overlay;
mod preloader;
mod projects;
mod reveal;
mod style;
mod terminal;
mod theme;
mod typing;

/// Everything the page keeps alive. Dropping it tears the page down: loops
/// cancel, listeners detach, theme subscriptions end, the observer disconnects.
struct Page {
    _preloader: Option<frame::LoopHandle>,
    // fields first: they unsubscribe from the store held by `theme`
    _ambient: Option<field::FieldMount>,
    _hero: Option<field::FieldMount>,
    _theme: theme::ThemeMount,
    _reveal: Option<reveal::RevealMount>,
    _scroll: Option<events::ScrollMount>,
    _magnetic: Vec<dom::Listener>,
    _cursor: Option<events::CursorFollower>,
    _typewriter: Option<frame::LoopHandle>,
    _terminal: Option<frame::LoopHandle>,
    _email: Option<email::EmailMount>,
    _projects: Vec<dom::Listener>,
    _contact: Option<contact::ContactMount>,
    _chat: Option<chat::ChatMount>,
    _viewer: Vec<dom::Listener>,
    _images: Vec<dom::Listener>,
}

thread_local! {
    static PAGE: RefCell<Option<Page>> = const { RefCell::new(None) };
}

fn mount_page(document: &web::Document) -> Page {
    let preloader = preloader::mount(document);
    let store = Rc::new(RefCell::new(ThemeStore::default()));
    let theme = theme::mount(document, &store);

    let ambient = field::mount(
        document,
        constants::AMBIENT_CANVAS_ID,
        field::Variant::Ambient,
        &store,
    );
    let hero = field::mount(document, constants::HERO_CANVAS_ID, field::Variant::Hero, &store);

    let reveal = match reveal::mount(document, RevealOptions::default()) {
        Ok(m) => Some(m),
        Err(e) => {
            log::warn!("[reveal] disabled: {:?}", e);
            None
        }
    };

    Page {
        _preloader: preloader,
        _ambient: ambient,
        _hero: hero,
        _theme: theme,
        _reveal: reveal,
        _scroll: events::wire_scroll(document),
        _magnetic: events::wire_magnetic(document),
        _cursor: events::mount_cursor_follower(document),
        _typewriter: typing::mount(document),
        _terminal: terminal::mount(document),
        _email: email::mount(document),
        _projects: projects::wire_filters(document),
        _contact: contact::mount(document, PERSONAL_INFO.whatsapp),
        _chat: chat::mount(document),
        _viewer: overlay::wire_viewer(document),
        _images: overlay::wire_image_fallbacks(document),
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("[page] starting");

    let document = dom::window_document().ok_or_else(|| JsValue::from_str("no document"))?;
    stop();
    let page = mount_page(&document);
    PAGE.with(|p| *p.borrow_mut() = Some(page));

    if let Some(window) = web::window() {
        let on_hide =
            Closure::wrap(Box::new(move |_: web::Event| stop()) as Box<dyn FnMut(web::Event)>);
        _ = window
            .add_event_listener_with_callback("pagehide", on_hide.as_ref().unchecked_ref());
        on_hide.forget();
    }
    Ok(())
}

/// Tear the page down. Safe to call more than once.
#[wasm_bindgen]
pub fn stop() {
    let page = PAGE.with(|p| p.borrow_mut().take());
    if page.is_some() {
        drop(page);
        log::info!("[page] stopped");
    }
}
