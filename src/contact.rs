use crate::constants::*;
use crate::dom::{self, Listener};
use crate::style;
use folio_core::contact::{ContactFlow, ContactOutcome, ContactStep};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

fn step_input(document: &web::Document, step: ContactStep) -> Option<web::Element> {
    document.get_element_by_id(&style::contact_input_id(CONTACT_INPUT_PREFIX, step.key()))
}

fn read_value(el: &web::Element) -> String {
    if let Some(input) = el.dyn_ref::<web::HtmlInputElement>() {
        input.value()
    } else if let Some(area) = el.dyn_ref::<web::HtmlTextAreaElement>() {
        area.value()
    } else {
        String::new()
    }
}

fn render(document: &web::Document, flow: &ContactFlow) {
    let current = flow.step();
    for step in ContactStep::ALL {
        if let Some(el) = step_input(document, step) {
            dom::set_hidden(&el, step != current);
            if step == current {
                _ = el.set_attribute("placeholder", step.placeholder());
                if let Some(html) = el.dyn_ref::<web::HtmlElement>() {
                    // only after the first step, focusing on load scrolls the page
                    if step != ContactStep::Name {
                        _ = html.focus();
                    }
                }
            }
        }
    }
    if let Some(label) = document.get_element_by_id(CONTACT_LABEL_ID) {
        label.set_text_content(Some(current.label()));
    }
    if let Some(counter) = document.get_element_by_id(CONTACT_STEP_ID) {
        counter.set_text_content(Some(&style::step_counter(
            current.index(),
            ContactStep::ALL.len(),
        )));
    }
    if let Some(bar) = document.get_element_by_id(CONTACT_PROGRESS_ID) {
        dom::set_style(&bar, "width", &style::percent(flow.progress_percent()));
    }
}

fn handle_next(document: &web::Document, flow: &Rc<RefCell<ContactFlow>>) {
    let outcome = {
        let mut f = flow.borrow_mut();
        if let Some(el) = step_input(document, f.step()) {
            f.set_current(read_value(&el));
        }
        f.next()
    };
    match outcome {
        ContactOutcome::Blocked => {}
        ContactOutcome::Advanced(step) => {
            log::info!("[contact] step {}", step.index());
            render(document, &flow.borrow());
        }
        ContactOutcome::Submit(url) => {
            log::info!("[contact] opening messaging link");
            dom::open_external(&url);
        }
    }
}

pub struct ContactMount {
    _listeners: Vec<Listener>,
}

pub fn mount(document: &web::Document, phone: &str) -> Option<ContactMount> {
    let form = document.get_element_by_id(CONTACT_FORM_ID)?;
    let flow = Rc::new(RefCell::new(ContactFlow::new(phone)));
    render(document, &flow.borrow());

    let mut listeners = Vec::new();

    let doc_submit = document.clone();
    let flow_submit = flow.clone();
    listeners.extend(Listener::new(&form, "submit", move |ev| {
        ev.prevent_default();
        handle_next(&doc_submit, &flow_submit);
    }));

    // Enter submits the message textarea, Shift+Enter inserts a newline
    if let Some(message) = step_input(document, ContactStep::Message) {
        let doc_key = document.clone();
        let flow_key = flow.clone();
        listeners.extend(Listener::new(&message, "keydown", move |ev| {
            let Some(kev) = ev.dyn_ref::<web::KeyboardEvent>() else {
                return;
            };
            if kev.key() == "Enter" && !kev.shift_key() {
                kev.prevent_default();
                handle_next(&doc_key, &flow_key);
            }
        }));
    }

    Some(ContactMount {
        _listeners: listeners,
    })
}
