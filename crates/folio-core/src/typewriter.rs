//! Type, pause, delete, next word.

use crate::constants::{DELETE_DELAY_MS, TYPE_DELAY_MS, WORD_PAUSE_MS};

#[derive(Clone, Debug)]
pub struct Typewriter {
    words: Vec<&'static str>,
    word: usize,
    shown: usize, // chars of the current word
    deleting: bool,
}

impl Typewriter {
    pub fn new(words: &[&'static str]) -> Self {
        Self {
            words: words.to_vec(),
            word: 0,
            shown: 0,
            deleting: false,
        }
    }

    pub fn current_word(&self) -> &'static str {
        if self.words.is_empty() {
            return "";
        }
        self.words[self.word % self.words.len()]
    }

    pub fn text(&self) -> &'static str {
        let word = self.current_word();
        match word.char_indices().nth(self.shown) {
            Some((byte, _)) => &word[..byte],
            None => word,
        }
    }

    pub fn is_deleting(&self) -> bool {
        self.deleting
    }

    /// Advance by one character and return the delay in ms before the next tick.
    pub fn tick(&mut self) -> u32 {
        let len = self.current_word().chars().count();
        if len == 0 {
            return TYPE_DELAY_MS;
        }
        if self.deleting {
            self.shown = self.shown.saturating_sub(1);
            if self.shown == 0 {
                self.deleting = false;
                self.word += 1;
                return TYPE_DELAY_MS;
            }
            DELETE_DELAY_MS
        } else {
            self.shown = (self.shown + 1).min(len);
            if self.shown == len {
                self.deleting = true;
                return WORD_PAUSE_MS;
            }
            TYPE_DELAY_MS
        }
    }
}
