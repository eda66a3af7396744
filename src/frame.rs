use crate::dom;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type Tick = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

#[derive(Clone, Copy, Debug)]
pub struct FrameTime {
    /// Shared page clock, see [`dom::now_ms`].
    pub now_ms: f64,
    pub dt_ms: f64,
}

/// A running requestAnimationFrame loop. Dropping it cancels the pending
/// frame and releases the callback.
///
/// Must not be dropped from inside its own step.
pub struct LoopHandle {
    raf_id: Rc<Cell<Option<i32>>>,
    tick: Tick,
}

impl Drop for LoopHandle {
    fn drop(&mut self) {
        if let (Some(id), Some(w)) = (self.raf_id.take(), web::window()) {
            _ = w.cancel_animation_frame(id);
        }
        self.tick.borrow_mut().take();
    }
}

pub fn start_loop(mut step: impl FnMut(FrameTime) + 'static) -> LoopHandle {
    let tick: Tick = Rc::new(RefCell::new(None));
    let raf_id = Rc::new(Cell::new(None));
    let tick_clone = tick.clone();
    let raf_id_tick = raf_id.clone();
    let mut last_ms = dom::now_ms();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move |_ts: f64| {
        let now_ms = dom::now_ms();
        let dt_ms = now_ms - last_ms;
        last_ms = now_ms;
        step(FrameTime { now_ms, dt_ms });
        raf_id_tick.set(request_frame(&tick_clone));
    }) as Box<dyn FnMut(f64)>));
    raf_id.set(request_frame(&tick));
    LoopHandle { raf_id, tick }
}

fn request_frame(tick: &Tick) -> Option<i32> {
    let w = web::window()?;
    let tick = tick.borrow();
    let cb = tick.as_ref()?;
    w.request_animation_frame(cb.as_ref().unchecked_ref()).ok()
}

/// Run `f` once on the next animation frame.
pub fn next_frame(f: impl FnOnce() + 'static) {
    if let Some(w) = web::window() {
        let cb = Closure::once_into_js(f);
        _ = w.request_animation_frame(cb.unchecked_ref());
    }
}
