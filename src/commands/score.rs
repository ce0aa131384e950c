//! Guess scoring command
//!
//! Evaluates a single guess against a given secret, for checking feedback by
//! hand without playing a session.

use crate::core::{Feedback, Word, WordError};

/// Result of scoring one guess
pub struct ScoreResult {
    pub guess: Word,
    pub secret: Word,
    pub feedback: Feedback,
}

/// Score `guess` against `secret`
///
/// # Errors
///
/// Returns `WordError` if either input is not a valid 5-letter word.
pub fn score_guess(guess: &str, secret: &str) -> Result<ScoreResult, WordError> {
    let guess = Word::new(guess)?;
    let secret = Word::new(secret)?;
    let feedback = Feedback::evaluate(&guess, &secret);

    Ok(ScoreResult {
        guess,
        secret,
        feedback,
    })
}
