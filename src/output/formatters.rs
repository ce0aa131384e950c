//! Formatting utilities for terminal output

use crate::core::{Feedback, LetterScore, Word};
use colored::Colorize;

/// Format feedback as an emoji string
#[must_use]
pub fn feedback_to_emoji(feedback: &Feedback) -> String {
    feedback.to_emoji()
}

/// Format a guess with one colored letter per classification
///
/// Correct letters are green, present letters yellow, absent letters dimmed.
#[must_use]
pub fn colored_guess(word: &Word, feedback: &Feedback) -> String {
    (0..5)
        .map(|i| {
            let letter = (word.char_at(i) as char).to_ascii_uppercase().to_string();
            match feedback.score_at(i) {
                LetterScore::Correct => format!(" {} ", letter.bold().black().on_green()),
                LetterScore::Present => format!(" {} ", letter.bold().black().on_yellow()),
                LetterScore::Absent => format!(" {} ", letter.white().on_bright_black()),
            }
        })
        .collect()
}

/// One-line legend for the classification colors
#[must_use]
pub fn color_legend() -> String {
    format!(
        "{} correct position   {} wrong position   {} not in word",
        "🟩".green(),
        "🟨".yellow(),
        "⬜".white()
    )
}
