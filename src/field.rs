use crate::canvas::Painter;
use crate::dom::{self, Listener};
use crate::frame::{self, FrameTime, LoopHandle};
use folio_core::motion::Debouncer;
use folio_core::{
    FieldColors, FieldConfig, FrameInputs, FrameOutput, ParticleField, SubscriptionId,
    ThemeState, ThemeStore,
};
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Variant {
    /// Full-page background, colors follow light/dark mode.
    Ambient,
    /// Hero network that dodges the pointer, colors follow the palette.
    Hero,
}

impl Variant {
    fn config(self, viewport_width: f32, theme: &ThemeState) -> FieldConfig {
        match self {
            Variant::Ambient => FieldConfig::ambient(theme.mode),
            Variant::Hero => FieldConfig::hero(viewport_width, theme.palette),
        }
    }

    fn colors(self, theme: &ThemeState) -> FieldColors {
        match self {
            Variant::Ambient => FieldColors::ambient(theme.mode),
            Variant::Hero => FieldColors::hero(theme.palette),
        }
    }
}

struct FieldState {
    field: ParticleField,
    painter: Painter,
    out: FrameOutput,
    pointer: Option<Vec2>,
    resize: Debouncer,
}

impl FieldState {
    fn frame(&mut self, time: FrameTime) {
        if self.resize.poll(time.now_ms) {
            let (w, h) = dom::sync_canvas_to_viewport(self.painter.canvas());
            self.field.resize(w, h);
            log::debug!("[field] resized to {}x{}", w, h);
        }
        let inputs = FrameInputs {
            time_ms: time.now_ms,
            pointer: self.pointer,
        };
        self.field.frame(&inputs, &mut self.out);
        self.painter.draw(&self.out);
    }
}

/// A particle field attached to a canvas. Dropping it stops the animation,
/// removes its listeners and ends its theme subscription.
pub struct FieldMount {
    variant: Variant,
    _frame_loop: LoopHandle,
    _listeners: Vec<Listener>,
    theme: Rc<RefCell<ThemeStore>>,
    subscription: SubscriptionId,
}

impl Drop for FieldMount {
    fn drop(&mut self) {
        if let Ok(mut store) = self.theme.try_borrow_mut() {
            store.unsubscribe(self.subscription);
        }
        log::info!("[field] {:?} stopped", self.variant);
    }
}

/// Start a field on the canvas with `canvas_id`. Returns `None` when the
/// canvas or its 2D context is missing; the page simply goes without it.
pub fn mount(
    document: &web::Document,
    canvas_id: &str,
    variant: Variant,
    theme: &Rc<RefCell<ThemeStore>>,
) -> Option<FieldMount> {
    let canvas = document
        .get_element_by_id(canvas_id)?
        .dyn_into::<web::HtmlCanvasElement>()
        .ok()?;
    let painter = match Painter::new(canvas) {
        Ok(p) => p,
        Err(e) => {
            log::warn!("[field] {:?} disabled: {:?}", variant, e);
            return None;
        }
    };
    let (w, h) = dom::sync_canvas_to_viewport(painter.canvas());
    let theme_state = theme.borrow().state();
    let field = ParticleField::new(
        w,
        h,
        variant.config(w, &theme_state),
        &mut rand::thread_rng(),
    );
    log::info!(
        "[field] {:?} started: {} particles in {}x{}",
        variant,
        field.particles().len(),
        w,
        h
    );

    let state = Rc::new(RefCell::new(FieldState {
        field,
        painter,
        out: FrameOutput::default(),
        pointer: None,
        resize: Debouncer::default(),
    }));

    let subscription = {
        let state = state.clone();
        theme.borrow_mut().subscribe(move |t| {
            state.borrow_mut().field.set_colors(variant.colors(t));
        })
    };

    let mut listeners = Vec::new();
    if let Some(window) = web::window() {
        let state_resize = state.clone();
        listeners.extend(Listener::new(&window, "resize", move |_| {
            state_resize.borrow_mut().resize.poke(dom::now_ms());
        }));

        if variant == Variant::Hero {
            let state_pointer = state.clone();
            listeners.extend(Listener::new(&window, "mousemove", move |ev| {
                if let Some(ev) = ev.dyn_ref::<web::MouseEvent>() {
                    let mut st = state_pointer.borrow_mut();
                    let pos = dom::pointer_in_element(ev, st.painter.canvas());
                    st.pointer = Some(pos);
                }
            }));
        }
    }

    let state_tick = state.clone();
    let frame_loop = frame::start_loop(move |time| state_tick.borrow_mut().frame(time));

    Some(FieldMount {
        variant,
        _frame_loop: frame_loop,
        _listeners: listeners,
        theme: theme.clone(),
        subscription,
    })
}
