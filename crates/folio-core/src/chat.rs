//! Portfolio assistant: prompt construction, wire types and failure mapping.
//!
//! The transport lives in the web crate; everything here is pure so the
//! request body and the reply handling can be tested on the host.

use crate::content::Portfolio;
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;
use thiserror::Error;

pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";
pub const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";
pub const API_KEY_HEADER: &str = "x-goog-api-key";

pub const MISSING_KEY_REPLY: &str =
    "I'm sorry, my AI brain is missing its API key. Please check the configuration.";
pub const EMPTY_REPLY: &str = "I didn't get a clear response. Please try again.";
pub const ERROR_REPLY: &str = "I encountered an error while thinking. Please try again later.";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ChatError {
    #[error("no API key configured")]
    MissingApiKey,
    #[error("request failed: {0}")]
    Transport(String),
    #[error("unexpected HTTP status {0}")]
    Status(u16),
    #[error("could not decode response: {0}")]
    Decode(String),
    #[error("response contained no text")]
    EmptyResponse,
}

impl ChatError {
    /// The fixed message shown to the visitor in place of a reply.
    pub fn user_message(&self) -> &'static str {
        match self {
            ChatError::MissingApiKey => MISSING_KEY_REPLY,
            ChatError::EmptyResponse => EMPTY_REPLY,
            ChatError::Transport(_) | ChatError::Status(_) | ChatError::Decode(_) => ERROR_REPLY,
        }
    }
}

/// Collapse a chat result to the text shown in the transcript.
pub fn reply_or_fallback(result: Result<String, ChatError>) -> String {
    match result {
        Ok(text) => text,
        Err(e) => {
            if e != ChatError::MissingApiKey {
                log::error!("[chat] {e}");
            }
            e.user_message().to_string()
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatConfig {
    pub api_key: Option<String>,
    pub model: String,
}

impl ChatConfig {
    /// Blank keys count as missing.
    pub fn new(api_key: Option<&str>) -> Self {
        Self {
            api_key: api_key
                .map(str::trim)
                .filter(|k| !k.is_empty())
                .map(str::to_string),
            model: DEFAULT_MODEL.to_string(),
        }
    }

    pub fn endpoint(&self) -> String {
        format!("{}/{}:generateContent", API_BASE, self.model)
    }

    pub fn api_key(&self) -> Result<&str, ChatError> {
        self.api_key.as_deref().ok_or(ChatError::MissingApiKey)
    }
}

/// System instruction describing the portfolio owner, built from the content tables.
pub fn system_prompt(portfolio: &Portfolio) -> String {
    let info = portfolio.info;
    let first_name = info.name.split_whitespace().next().unwrap_or(info.name);
    let mut s = String::new();
    _ = writeln!(s, "You are an AI assistant for the personal portfolio of {}.", info.name);
    _ = writeln!(
        s,
        "Your role is to answer questions about {first_name}'s skills, projects, education, and background based STRICTLY on the following information."
    );
    _ = writeln!(s, "Be polite, professional, and encouraging. Keep answers concise.");
    _ = writeln!(s);
    _ = writeln!(s, "Details:");
    _ = writeln!(s, "Name: {}", info.name);
    _ = writeln!(s, "Role: {}", info.role);
    _ = writeln!(s, "About: {}", info.about);
    _ = writeln!(s);
    _ = writeln!(s, "Professional Experience (Internships):");
    for i in portfolio.internships {
        _ = writeln!(s, "- {} at {} (Domain: {})", i.role, i.company, i.domain);
    }
    _ = writeln!(s);
    _ = writeln!(s, "Education:");
    for e in portfolio.education {
        _ = writeln!(s, "- {} at {}: {}", e.degree, e.institution, e.description);
    }
    _ = writeln!(s);
    _ = writeln!(s, "Projects:");
    for p in portfolio.projects {
        _ = writeln!(s, "- {}: {} (Link: {})", p.title, p.description, p.link);
    }
    _ = writeln!(s);
    _ = writeln!(s, "Skills:");
    for sk in portfolio.skills {
        _ = match sk.status {
            Some(status) => writeln!(s, "- {} ({}) - {}", sk.name, sk.category.label(), status),
            None => writeln!(s, "- {} ({})", sk.name, sk.category.label()),
        };
    }
    _ = writeln!(s);
    _ = writeln!(s, "Certifications:");
    for c in portfolio.certifications {
        _ = writeln!(s, "- {} from {}", c.title, c.issuer);
    }
    _ = writeln!(s);
    _ = write!(
        s,
        "If asked about something not in this list, say you don't have that information but suggest contacting {first_name} directly via email."
    );
    s
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Part {
    #[serde(default)]
    pub text: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub parts: Vec<Part>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub system_instruction: Content,
    pub contents: Vec<Content>,
}

impl GenerateContentRequest {
    pub fn new(system_prompt: &str, user_message: &str) -> Self {
        Self {
            system_instruction: Content {
                role: None,
                parts: vec![Part {
                    text: system_prompt.to_string(),
                }],
            },
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part {
                    text: user_message.to_string(),
                }],
            }],
        }
    }

    pub fn to_json(&self) -> Result<String, ChatError> {
        serde_json::to_string(self).map_err(|e| ChatError::Decode(e.to_string()))
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct Candidate {
    #[serde(default)]
    pub content: Content,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

impl GenerateContentResponse {
    /// Text of the first candidate, parts concatenated.
    pub fn text(&self) -> Option<String> {
        let candidate = self.candidates.first()?;
        let text: String = candidate
            .content
            .parts
            .iter()
            .map(|p| p.text.as_str())
            .collect();
        (!text.is_empty()).then_some(text)
    }
}

/// Decode a response body into reply text.
pub fn parse_reply(body: &str) -> Result<String, ChatError> {
    let response: GenerateContentResponse =
        serde_json::from_str(body).map_err(|e| ChatError::Decode(e.to_string()))?;
    response.text().ok_or(ChatError::EmptyResponse)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChatRole {
    User,
    Model,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatMessage {
    pub id: u64,
    pub role: ChatRole,
    pub text: String,
}

/// In-memory transcript for the current page view.
#[derive(Clone, Debug, Default)]
pub struct ChatLog {
    messages: Vec<ChatMessage>,
    next_id: u64,
}

impl ChatLog {
    pub fn push(&mut self, role: ChatRole, text: impl Into<String>) -> &ChatMessage {
        let id = self.next_id;
        self.next_id += 1;
        self.messages.push(ChatMessage {
            id,
            role,
            text: text.into(),
        });
        &self.messages[self.messages.len() - 1]
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
