//! Decorative code window that types out a short Python snippet.

use crate::constants::TERMINAL_CHAR_MS;

pub const TERMINAL_FILE_NAME: &str = "portfolio.py";

pub const TERMINAL_CODE: &str = r#"class Developer:
  def __init__(self):
    self.name = "Khizra Rashid"
    self.role = "Python Dev"
    self.passion = "AI & Data"

  def build_future(self):
    while True:
      self.learn()
      self.code()
      self.innovate()

me = Developer()
me.build_future()"#;

const KEYWORDS: [&str; 5] = ["class", "def", "while", "True", "return"];
const RECEIVERS: [&str; 2] = ["self", "me"];
const FUNCTIONS: [&str; 2] = ["__init__", "build_future"];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenKind {
    Plain,
    Keyword,
    Receiver,
    Str,
    Function,
}

impl TokenKind {
    pub fn css_class(self) -> &'static str {
        match self {
            TokenKind::Plain => "tok-plain",
            TokenKind::Keyword => "tok-keyword",
            TokenKind::Receiver => "tok-receiver",
            TokenKind::Str => "tok-string",
            TokenKind::Function => "tok-function",
        }
    }
}

/// Classify one space-separated word. Later rules win: a word that both
/// names a receiver and quotes a string is a string.
pub fn token_kind(word: &str) -> TokenKind {
    let mut kind = TokenKind::Plain;
    if KEYWORDS.contains(&word) {
        kind = TokenKind::Keyword;
    }
    let bare: String = word.chars().filter(|c| !".:()".contains(*c)).collect();
    if RECEIVERS.contains(&bare.as_str()) {
        kind = TokenKind::Receiver;
    }
    if word.contains('"') {
        kind = TokenKind::Str;
    }
    if FUNCTIONS.iter().any(|f| word.contains(f)) {
        kind = TokenKind::Function;
    }
    kind
}

/// Split a line on single spaces, keeping empty words so indentation survives.
pub fn highlight_line(line: &str) -> Vec<(&str, TokenKind)> {
    line.split(' ').map(|w| (w, token_kind(w))).collect()
}

/// Reveals `code` one character per tick.
#[derive(Clone, Debug)]
pub struct CodeTyper {
    code: &'static str,
    shown: usize,
    total: usize,
    next_at: f64,
}

impl CodeTyper {
    pub fn new(code: &'static str, start_ms: f64) -> Self {
        Self {
            code,
            shown: 0,
            total: code.chars().count(),
            next_at: start_ms + TERMINAL_CHAR_MS,
        }
    }

    pub fn text(&self) -> &'static str {
        match self.code.char_indices().nth(self.shown) {
            Some((byte, _)) => &self.code[..byte],
            None => self.code,
        }
    }

    pub fn is_done(&self) -> bool {
        self.shown >= self.total
    }

    /// Advance through every character due by `now_ms`. True when the text grew.
    pub fn update(&mut self, now_ms: f64) -> bool {
        let before = self.shown;
        while !self.is_done() && now_ms >= self.next_at {
            self.shown += 1;
            self.next_at += TERMINAL_CHAR_MS;
        }
        self.shown != before
    }
}
