use crate::constants::*;
use crate::dom::{self, Listener};
use folio_core::chat::{
    parse_reply, reply_or_fallback, system_prompt, ChatConfig, ChatError, ChatLog, ChatRole,
    GenerateContentRequest, API_KEY_HEADER,
};
use folio_core::content::Portfolio;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// Credential baked in at build time; the page has no process environment.
pub fn config_from_build_env() -> ChatConfig {
    ChatConfig::new(option_env!("GEMINI_API_KEY").or(option_env!("API_KEY")))
}

fn js_err(e: JsValue) -> ChatError {
    ChatError::Transport(format!("{:?}", e))
}

/// One generateContent call. No retries.
pub async fn ask(config: &ChatConfig, prompt: &str, message: &str) -> Result<String, ChatError> {
    let key = config.api_key()?;
    let body = GenerateContentRequest::new(prompt, message).to_json()?;

    let headers = web::Headers::new().map_err(js_err)?;
    headers.set("Content-Type", "application/json").map_err(js_err)?;
    headers.set(API_KEY_HEADER, key).map_err(js_err)?;

    let opts = web::RequestInit::new();
    opts.set_method("POST");
    opts.set_headers(&headers);
    opts.set_body(&JsValue::from_str(&body));

    let request =
        web::Request::new_with_str_and_init(&config.endpoint(), &opts).map_err(js_err)?;
    let window = web::window().ok_or_else(|| ChatError::Transport("no window".to_string()))?;
    let response: web::Response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_err)?
        .dyn_into()
        .map_err(js_err)?;
    if !response.ok() {
        return Err(ChatError::Status(response.status()));
    }
    let text = JsFuture::from(response.text().map_err(js_err)?)
        .await
        .map_err(js_err)?
        .as_string()
        .ok_or_else(|| ChatError::Decode("body is not text".to_string()))?;
    parse_reply(&text)
}

struct ChatState {
    config: ChatConfig,
    prompt: String,
    log: ChatLog,
}

fn append_message(document: &web::Document, role: ChatRole, text: &str) -> Option<web::Element> {
    let log_el = document.get_element_by_id(CHAT_LOG_ID)?;
    let msg = document.create_element("div").ok()?;
    let role_class = match role {
        ChatRole::User => "user",
        ChatRole::Model => "model",
    };
    _ = msg.set_attribute("class", &format!("chat-msg {}", role_class));
    msg.set_text_content(Some(text));
    _ = log_el.append_child(&msg);
    log_el.set_scroll_top(log_el.scroll_height());
    Some(msg)
}

pub struct ChatMount {
    _listener: Listener,
}

pub fn mount(document: &web::Document) -> Option<ChatMount> {
    let form = document.get_element_by_id(CHAT_FORM_ID)?;
    let config = config_from_build_env();
    if config.api_key.is_none() {
        log::warn!("[chat] no API key configured, replies will be a fixed apology");
    }
    let state = Rc::new(RefCell::new(ChatState {
        config,
        prompt: system_prompt(&Portfolio::builtin()),
        log: ChatLog::default(),
    }));

    let doc = document.clone();
    let listener = Listener::new(&form, "submit", move |ev| {
        ev.prevent_default();
        let Some(input) = doc
            .get_element_by_id(CHAT_INPUT_ID)
            .and_then(|el| el.dyn_into::<web::HtmlInputElement>().ok())
        else {
            return;
        };
        let message = input.value();
        if message.trim().is_empty() {
            return;
        }
        input.set_value("");
        state.borrow_mut().log.push(ChatRole::User, message.clone());
        append_message(&doc, ChatRole::User, &message);
        let pending = append_message(&doc, ChatRole::Model, "…");
        if let Some(p) = &pending {
            dom::set_class(p, CHAT_PENDING_CLASS, true);
        }

        let (config, prompt) = {
            let s = state.borrow();
            (s.config.clone(), s.prompt.clone())
        };
        let state = state.clone();
        spawn_local(async move {
            let reply = reply_or_fallback(ask(&config, &prompt, &message).await);
            if let Some(p) = pending {
                dom::set_class(&p, CHAT_PENDING_CLASS, false);
                p.set_text_content(Some(&reply));
            }
            state.borrow_mut().log.push(ChatRole::Model, reply);
            log::info!("[chat] transcript has {} messages", state.borrow().log.len());
        });
    })?;

    Some(ChatMount {
        _listener: listener,
    })
}
