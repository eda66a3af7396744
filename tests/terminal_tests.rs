// Host-side tests for the typed code window.

use folio_core::terminal::*;
use folio_core::TERMINAL_CHAR_MS;

#[test]
fn types_one_character_per_tick() {
    let mut t = CodeTyper::new("def", 0.0);
    assert_eq!(t.text(), "");
    assert!(!t.update(TERMINAL_CHAR_MS - 1.0));
    assert!(t.update(TERMINAL_CHAR_MS));
    assert_eq!(t.text(), "d");
    assert!(t.update(TERMINAL_CHAR_MS * 2.0));
    assert_eq!(t.text(), "de");
    assert!(!t.is_done());
    t.update(TERMINAL_CHAR_MS * 50.0);
    assert_eq!(t.text(), "def");
    assert!(t.is_done());
    assert!(!t.update(TERMINAL_CHAR_MS * 100.0));
}

#[test]
fn full_snippet_finishes() {
    let mut t = CodeTyper::new(TERMINAL_CODE, 0.0);
    let chars = TERMINAL_CODE.chars().count() as f64;
    t.update(chars * TERMINAL_CHAR_MS);
    assert!(t.is_done());
    assert_eq!(t.text(), TERMINAL_CODE);
    assert!(TERMINAL_CODE.starts_with("class Developer:"));
    assert!(TERMINAL_CODE.ends_with("me.build_future()"));
}

#[test]
fn words_are_classified_with_later_rules_winning() {
    assert_eq!(token_kind("class"), TokenKind::Keyword);
    assert_eq!(token_kind("True:"), TokenKind::Plain);
    assert_eq!(token_kind("self.learn()"), TokenKind::Plain);
    assert_eq!(token_kind("(self):"), TokenKind::Receiver);
    assert_eq!(token_kind("me"), TokenKind::Receiver);
    assert_eq!(token_kind("\"AI"), TokenKind::Str);
    assert_eq!(token_kind("__init__(self):"), TokenKind::Function);
    assert_eq!(token_kind("me.build_future()"), TokenKind::Function);
    assert_eq!(token_kind("Developer()"), TokenKind::Plain);
}

#[test]
fn highlighting_keeps_indentation() {
    let tokens = highlight_line("  def build_future(self):");
    let words: Vec<&str> = tokens.iter().map(|(w, _)| *w).collect();
    assert_eq!(words, ["", "", "def", "build_future(self):"]);
    assert_eq!(tokens[2].1, TokenKind::Keyword);
    assert_eq!(tokens[3].1.css_class(), "tok-function");
}
