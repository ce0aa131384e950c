//! On-screen keyboard hint memory
//!
//! Remembers the best classification observed for each letter across the
//! session, for keyboard-hint coloring only.

use crate::core::{Feedback, LetterScore, Word};
use rustc_hash::FxHashMap;

/// Keyboard layout rows for rendering
pub const KEYBOARD_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// Best-observed classification per letter
///
/// A letter's hint is monotonically upgraded: once Correct it stays Correct,
/// Present is never overwritten by Absent, and Absent is recorded only for
/// letters with no prior classification.
#[derive(Debug, Default, Clone)]
pub struct KeyHints {
    scores: FxHashMap<u8, LetterScore>,
}

impl KeyHints {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge one guess's feedback into the hint memory
    pub fn record(&mut self, guess: &Word, feedback: &Feedback) {
        for i in 0..5 {
            let letter = guess.char_at(i);
            let score = feedback.score_at(i);
            self.scores
                .entry(letter)
                .and_modify(|current| *current = (*current).max(score))
                .or_insert(score);
        }
    }

    /// Get the hint for a letter, if any guess has touched it
    #[must_use]
    pub fn get(&self, letter: u8) -> Option<LetterScore> {
        self.scores.get(&letter).copied()
    }

    /// Forget all hints
    pub fn clear(&mut self) {
        self.scores.clear();
    }

    /// Number of letters with a recorded hint
    #[must_use]
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}
