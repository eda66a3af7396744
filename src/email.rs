use crate::canvas::Painter;
use crate::constants::*;
use crate::dom::{self, Listener};
use crate::frame::{self, LoopHandle};
use folio_core::confetti::{BurstConfig, Confetti, CopyFeedback};
use folio_core::content::PERSONAL_INFO;
use folio_core::FrameOutput;
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

struct EmailState {
    button: web::Element,
    label: Option<web::Element>,
    feedback: CopyFeedback,
    confetti: Confetti,
    painter: Option<Painter>,
    out: FrameOutput,
    // last frame left pieces on the canvas
    dirty: bool,
}

impl EmailState {
    fn render_label(&self) {
        dom::set_class(&self.button, COPIED_CLASS, self.feedback.is_copied());
        if let Some(label) = &self.label {
            label.set_text_content(Some(self.feedback.label()));
        }
    }

    fn on_click(&mut self, now_ms: f64) {
        self.feedback.copied(now_ms);
        self.render_label();

        let Some(painter) = &self.painter else {
            return;
        };
        dom::sync_canvas_to_viewport(painter.canvas());
        let rect = self.button.get_bounding_client_rect();
        let origin = Vec2::new(
            (rect.left() + rect.width() / 2.0) as f32,
            (rect.top() + rect.height() / 2.0) as f32,
        );
        self.confetti
            .burst(origin, &BurstConfig::default(), &mut rand::thread_rng());
    }

    fn frame(&mut self, now_ms: f64) {
        if self.feedback.poll(now_ms) {
            self.render_label();
        }
        let Some(painter) = &self.painter else {
            return;
        };
        if self.confetti.is_idle() && !self.dirty {
            return;
        }
        self.confetti.step();
        self.confetti.render(&mut self.out);
        painter.draw(&self.out);
        self.dirty = !self.confetti.is_idle();
    }
}

fn copy_to_clipboard(text: &'static str) {
    let Some(window) = web::window() else {
        return;
    };
    let promise = window.navigator().clipboard().write_text(text);
    spawn_local(async move {
        if let Err(e) = JsFuture::from(promise).await {
            log::warn!("[email] clipboard write failed: {:?}", e);
        }
    });
}

pub struct EmailMount {
    _frame_loop: LoopHandle,
    _listener: Listener,
}

/// Copy-email button: writes the address to the clipboard, shows "Copied!"
/// for a while and fires confetti from the button.
pub fn mount(document: &web::Document) -> Option<EmailMount> {
    let button = document.get_element_by_id(COPY_EMAIL_BUTTON_ID)?;
    let painter = document
        .get_element_by_id(CONFETTI_CANVAS_ID)
        .and_then(|el| el.dyn_into::<web::HtmlCanvasElement>().ok())
        .and_then(|canvas| match Painter::new(canvas) {
            Ok(p) => Some(p),
            Err(e) => {
                log::warn!("[email] confetti disabled: {:?}", e);
                None
            }
        });

    let state = Rc::new(RefCell::new(EmailState {
        label: document.get_element_by_id(COPY_EMAIL_LABEL_ID),
        button: button.clone(),
        feedback: CopyFeedback::default(),
        confetti: Confetti::default(),
        painter,
        out: FrameOutput::default(),
        dirty: false,
    }));
    state.borrow().render_label();

    let state_click = state.clone();
    let listener = Listener::new(&button, "click", move |_| {
        copy_to_clipboard(PERSONAL_INFO.email);
        state_click.borrow_mut().on_click(dom::now_ms());
    })?;

    let frame_loop = frame::start_loop(move |time| state.borrow_mut().frame(time.now_ms));

    Some(EmailMount {
        _frame_loop: frame_loop,
        _listener: listener,
    })
}
