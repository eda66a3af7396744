use crate::constants::*;
use crate::dom::{self, Listener};
use crate::frame::{self, LoopHandle};
use crate::style;
use folio_core::motion::{magnetic_offset_default, CursorTrailer};
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Elements marked `.magnetic` lean toward the pointer while hovered.
pub fn wire_magnetic(document: &web::Document) -> Vec<Listener> {
    let mut listeners = Vec::new();
    for el in dom::query_all(document, MAGNETIC_SELECTOR) {
        let el_move = el.clone();
        listeners.extend(Listener::new(&el, "mousemove", move |ev| {
            let Some(ev) = ev.dyn_ref::<web::MouseEvent>() else {
                return;
            };
            let rect = el_move.get_bounding_client_rect();
            let center = Vec2::new(
                (rect.left() + rect.width() / 2.0) as f32,
                (rect.top() + rect.height() / 2.0) as f32,
            );
            let pointer = Vec2::new(ev.client_x() as f32, ev.client_y() as f32);
            let offset = magnetic_offset_default(pointer, center);
            dom::set_style(&el_move, "transform", &style::translate_px(offset.x, offset.y));
        }));

        let el_leave = el.clone();
        listeners.extend(Listener::new(&el, "mouseleave", move |_| {
            dom::set_style(&el_leave, "transform", &style::translate_px(0.0, 0.0));
        }));
    }
    listeners
}

pub struct CursorFollower {
    _frame_loop: LoopHandle,
    _listener: Listener,
}

/// Cursor dot plus an easing ring. Skipped on touch devices or when the
/// elements are missing.
pub fn mount_cursor_follower(document: &web::Document) -> Option<CursorFollower> {
    if dom::matches_media(COARSE_POINTER_QUERY) {
        return None;
    }
    let dot = document.get_element_by_id(CURSOR_DOT_ID)?;
    let trailer_el = document.get_element_by_id(CURSOR_TRAILER_ID)?;
    let trailer = Rc::new(RefCell::new(CursorTrailer::default()));

    let window = web::window()?;
    let trailer_move = trailer.clone();
    let dot_move = dot.clone();
    let listener = Listener::new(&window, "mousemove", move |ev| {
        let Some(ev) = ev.dyn_ref::<web::MouseEvent>() else {
            return;
        };
        let pos = Vec2::new(ev.client_x() as f32, ev.client_y() as f32);
        trailer_move.borrow_mut().pointer_moved(pos);
        dom::set_style(&dot_move, "transform", &style::translate_px(pos.x, pos.y));
    })?;

    let mut shown = false;
    let frame_loop = frame::start_loop(move |_| {
        let mut trailer = trailer.borrow_mut();
        if trailer.visible() != shown {
            shown = trailer.visible();
            let opacity = if shown { "1" } else { "0" };
            dom::set_style(&dot, "opacity", opacity);
            dom::set_style(&trailer_el, "opacity", opacity);
        }
        let pos = trailer.step();
        dom::set_style(&trailer_el, "transform", &style::translate_px(pos.x, pos.y));
    });

    Some(CursorFollower {
        _frame_loop: frame_loop,
        _listener: listener,
    })
}
