use crate::constants::*;
use crate::dom;
use crate::frame::{self, LoopHandle};
use folio_core::terminal::{highlight_line, CodeTyper, TERMINAL_CODE};
use wasm_bindgen::JsValue;
use web_sys as web;

fn span(document: &web::Document, class: &str, text: &str) -> Result<web::Element, JsValue> {
    let el = document.create_element("span")?;
    el.set_class_name(class);
    el.set_text_content(Some(text));
    Ok(el)
}

fn render(document: &web::Document, target: &web::Element, text: &str) -> Result<(), JsValue> {
    target.set_text_content(None);
    for (idx, line) in text.split('\n').enumerate() {
        let row = document.create_element("div")?;
        row.set_class_name(TERMINAL_LINE_CLASS);
        row.append_child(&span(document, TERMINAL_GUTTER_CLASS, &(idx + 1).to_string())?)?;
        for (word, kind) in highlight_line(line) {
            row.append_child(&span(document, kind.css_class(), &format!("{} ", word))?)?;
        }
        target.append_child(&row)?;
    }
    target.append_child(&span(document, "cursor", "_")?)?;
    Ok(())
}

/// Type the snippet into `#code-terminal`, one character per tick.
pub fn mount(document: &web::Document) -> Option<LoopHandle> {
    let target = document.get_element_by_id(TERMINAL_ID)?;
    let document = document.clone();
    let mut typer = CodeTyper::new(TERMINAL_CODE, dom::now_ms());
    Some(frame::start_loop(move |time| {
        if typer.is_done() || !typer.update(time.now_ms) {
            return;
        }
        if let Err(e) = render(&document, &target, typer.text()) {
            log::warn!("[terminal] render failed: {:?}", e);
        }
    }))
}
