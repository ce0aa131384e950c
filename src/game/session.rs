//! Game session state machine
//!
//! A [`GameSession`] is one play-through: the secret word, the pending entry
//! buffer, the guess history, the win/loss status, keyboard hints and the
//! reveal cursor. Every transition is an explicit operation; invalid input is
//! a silent no-op or a non-blocking message, never an error.

use super::input::Key;
use super::keyboard::KeyHints;
use crate::core::{Feedback, Word};
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use std::fmt;

/// Letters per guess
pub const WORD_LENGTH: usize = 5;

/// Maximum guesses per session
pub const MAX_ATTEMPTS: usize = 6;

/// Session status
///
/// `Won` and `Lost` are terminal: no routed input mutates the session until
/// it is replaced via [`GameSession::reset`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    Won,
    Lost,
}

/// A submitted guess and its feedback
#[derive(Debug, Clone)]
pub struct GuessRecord {
    pub word: Word,
    pub feedback: Feedback,
}

/// User-facing status message
#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl Message {
    fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: MessageStyle::Info,
        }
    }

    fn success(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: MessageStyle::Success,
        }
    }

    fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: MessageStyle::Error,
        }
    }
}

/// Error constructing a session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    EmptyWordPool,
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyWordPool => write!(f, "Word pool must contain at least one word"),
        }
    }
}

impl std::error::Error for SessionError {}

/// One play-through of the game
pub struct GameSession {
    pool: Vec<Word>,
    rng: StdRng,
    secret: Word,
    pending: String,
    history: Vec<GuessRecord>,
    status: GameStatus,
    hints: KeyHints,
    reveal_cursor: Option<u8>,
    message: Option<Message>,
    generation: u64,
}

impl GameSession {
    /// Create a session with a secret drawn uniformly from `pool`
    ///
    /// The session keeps the pool and the RNG so that [`reset`](Self::reset)
    /// can draw fresh secrets; pass a seeded `StdRng` for a deterministic
    /// session.
    ///
    /// # Errors
    /// Returns [`SessionError::EmptyWordPool`] if `pool` is empty.
    pub fn new(pool: Vec<Word>, mut rng: StdRng) -> Result<Self, SessionError> {
        let secret = pool
            .choose(&mut rng)
            .cloned()
            .ok_or(SessionError::EmptyWordPool)?;

        Ok(Self {
            pool,
            rng,
            secret,
            pending: String::new(),
            history: Vec::new(),
            status: GameStatus::Playing,
            hints: KeyHints::new(),
            reveal_cursor: None,
            message: None,
            generation: 0,
        })
    }

    /// Route a normalized key event
    ///
    /// Enter submits, Backspace deletes, letters append. Everything is a
    /// no-op once the session is over.
    pub fn handle_key(&mut self, key: Key) {
        if self.status != GameStatus::Playing {
            return;
        }

        match key {
            Key::Enter => self.submit_guess(),
            Key::Backspace => self.delete_letter(),
            Key::Letter(ch) => self.push_letter(ch),
        }
    }

    /// Append a letter to the pending guess
    ///
    /// Silently ignored unless the session is playing, the character is a
    /// single ASCII letter, and the buffer has room.
    pub fn push_letter(&mut self, ch: char) {
        if self.status != GameStatus::Playing {
            return;
        }
        if self.pending.len() < WORD_LENGTH && ch.is_ascii_alphabetic() {
            self.pending.push(ch.to_ascii_lowercase());
        }
    }

    /// Remove the last letter of the pending guess, if any
    pub fn delete_letter(&mut self) {
        if self.status != GameStatus::Playing {
            return;
        }
        self.pending.pop();
    }

    /// Submit the pending guess
    ///
    /// A short buffer is rejected with a message and no other mutation. A
    /// full buffer is evaluated against the secret, recorded in the history
    /// and the keyboard hints, and starts the staged reveal of its row;
    /// the session then transitions to Won, Lost, or stays Playing.
    pub fn submit_guess(&mut self) {
        if self.status != GameStatus::Playing {
            return;
        }

        if self.pending.len() != WORD_LENGTH {
            self.message = Some(Message::error("Your guess must be 5 letters long."));
            return;
        }

        // The buffer only ever receives lowercase ASCII letters
        let guess = Word::new(&self.pending).expect("pending buffer holds 5 ascii letters");
        let feedback = Feedback::evaluate(&guess, &self.secret);

        self.hints.record(&guess, &feedback);
        let won = guess == self.secret;
        self.history.push(GuessRecord {
            word: guess,
            feedback,
        });
        self.pending.clear();
        self.message = None;
        self.reveal_cursor = Some(0);
        // Invalidates any reveal deadline armed for the previous row
        self.generation += 1;

        if won {
            self.status = GameStatus::Won;
            self.message = Some(Message::success(
                "Congratulations! You've guessed the word correctly!",
            ));
        } else if self.history.len() >= MAX_ATTEMPTS {
            self.status = GameStatus::Lost;
            self.message = Some(Message::info(format!(
                "Game Over. The word was: {}",
                self.secret.text().to_uppercase()
            )));
        }
    }

    /// Advance the staged reveal of the most recent row by one letter
    ///
    /// Cosmetic only; parks once the whole row is revealed.
    pub fn advance_reveal(&mut self) {
        if let Some(cursor) = self.reveal_cursor
            && (cursor as usize) < WORD_LENGTH
        {
            self.reveal_cursor = Some(cursor + 1);
        }
    }

    /// Replace this play-through with a fresh one
    ///
    /// Draws a new uniform-random secret from the same pool and clears every
    /// other field.
    pub fn reset(&mut self) {
        self.secret = self
            .pool
            .choose(&mut self.rng)
            .cloned()
            .expect("word pool is validated non-empty at construction");
        self.pending.clear();
        self.history.clear();
        self.status = GameStatus::Playing;
        self.hints.clear();
        self.reveal_cursor = None;
        self.message = None;
        self.generation += 1;
    }

    /// Current status
    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Submitted guesses with their feedback, oldest first
    #[must_use]
    pub fn history(&self) -> &[GuessRecord] {
        &self.history
    }

    /// The in-progress entry buffer
    #[must_use]
    pub fn pending(&self) -> &str {
        &self.pending
    }

    /// Keyboard hint memory
    #[must_use]
    pub fn hints(&self) -> &KeyHints {
        &self.hints
    }

    /// Current status message, if any
    #[must_use]
    pub fn message(&self) -> Option<&Message> {
        self.message.as_ref()
    }

    /// Guesses left before the session is lost
    #[must_use]
    pub fn remaining_attempts(&self) -> usize {
        MAX_ATTEMPTS - self.history.len()
    }

    /// The secret word, revealed only once the session is over
    #[must_use]
    pub fn revealed_secret(&self) -> Option<&Word> {
        match self.status {
            GameStatus::Playing => None,
            GameStatus::Won | GameStatus::Lost => Some(&self.secret),
        }
    }

    /// Whether a staged reveal is still in progress
    #[must_use]
    pub fn is_revealing(&self) -> bool {
        self.reveal_cursor
            .is_some_and(|cursor| (cursor as usize) < WORD_LENGTH)
    }

    /// How many letters of history row `row` are revealed
    ///
    /// Rows older than the most recent one are always fully revealed; the
    /// most recent row follows the reveal cursor.
    #[must_use]
    pub fn revealed_count(&self, row: usize) -> usize {
        if row + 1 == self.history.len()
            && let Some(cursor) = self.reveal_cursor
        {
            (cursor as usize + 1).min(WORD_LENGTH)
        } else {
            WORD_LENGTH
        }
    }

    /// Session generation, bumped on every submit and reset
    ///
    /// Reveal deadlines are tagged with this so stale ones can be discarded.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[cfg(test)]
    pub(crate) fn secret(&self) -> &Word {
        &self.secret
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterScore;
    use rand::SeedableRng;

    fn pool(words: &[&str]) -> Vec<Word> {
        words.iter().map(|&s| Word::new(s).unwrap()).collect()
    }

    /// Session whose secret is forced by a single-word pool
    fn session_with_secret(secret: &str) -> GameSession {
        GameSession::new(pool(&[secret]), StdRng::seed_from_u64(0)).unwrap()
    }

    fn type_word(session: &mut GameSession, word: &str) {
        for ch in word.chars() {
            session.push_letter(ch);
        }
    }

    fn submit_word(session: &mut GameSession, word: &str) {
        type_word(session, word);
        session.submit_guess();
    }

    #[test]
    fn empty_pool_is_rejected() {
        let result = GameSession::new(Vec::new(), StdRng::seed_from_u64(0));
        assert!(matches!(result, Err(SessionError::EmptyWordPool)));
    }

    #[test]
    fn new_session_starts_clean() {
        let session = session_with_secret("mango");
        assert_eq!(session.status(), GameStatus::Playing);
        assert!(session.history().is_empty());
        assert!(session.pending().is_empty());
        assert!(session.hints().is_empty());
        assert!(session.message().is_none());
        assert_eq!(session.remaining_attempts(), MAX_ATTEMPTS);
        assert_eq!(session.revealed_secret(), None);
    }

    #[test]
    fn push_letter_folds_case_and_caps_at_five() {
        let mut session = session_with_secret("mango");
        for ch in "GRApes".chars() {
            session.push_letter(ch);
        }
        // Sixth letter ignored
        assert_eq!(session.pending(), "grape");
    }

    #[test]
    fn push_letter_rejects_non_letters() {
        let mut session = session_with_secret("mango");
        session.push_letter('1');
        session.push_letter(' ');
        session.push_letter('!');
        assert_eq!(session.pending(), "");
    }

    #[test]
    fn delete_letter_on_empty_buffer_is_noop() {
        let mut session = session_with_secret("mango");
        session.delete_letter();
        assert_eq!(session.pending(), "");

        session.push_letter('a');
        session.delete_letter();
        assert_eq!(session.pending(), "");
    }

    #[test]
    fn short_submission_is_rejected_with_message() {
        let mut session = session_with_secret("mango");
        type_word(&mut session, "man");
        session.submit_guess();

        assert!(session.history().is_empty());
        assert_eq!(session.pending(), "man");
        let message = session.message().unwrap();
        assert_eq!(message.text, "Your guess must be 5 letters long.");
        assert_eq!(message.style, MessageStyle::Error);

        // Completing the word afterwards still works and clears the message
        type_word(&mut session, "go");
        session.submit_guess();
        assert_eq!(session.history().len(), 1);
        assert_eq!(session.status(), GameStatus::Won);
    }

    #[test]
    fn submit_records_history_and_hints() {
        let mut session = session_with_secret("lemon");
        submit_word(&mut session, "noble");

        assert_eq!(session.history().len(), 1);
        let record = &session.history()[0];
        assert_eq!(record.word.text(), "noble");
        assert_eq!(record.feedback.score_at(2), LetterScore::Absent);
        assert_eq!(session.hints().get(b'n'), Some(LetterScore::Present));
        assert_eq!(session.pending(), "");
        assert_eq!(session.remaining_attempts(), MAX_ATTEMPTS - 1);
        assert_eq!(session.status(), GameStatus::Playing);
        assert!(session.message().is_none());
    }

    #[test]
    fn winning_guess_ends_the_session() {
        let mut session = session_with_secret("mango");
        submit_word(&mut session, "mango");

        assert_eq!(session.status(), GameStatus::Won);
        assert!(session.history()[0].feedback.is_win());
        let message = session.message().unwrap();
        assert_eq!(message.style, MessageStyle::Success);
        assert!(message.text.contains("Congratulations"));
        assert_eq!(session.revealed_secret().unwrap().text(), "mango");
    }

    #[test]
    fn first_attempt_win_is_immediate() {
        let mut session = session_with_secret("quiet");
        submit_word(&mut session, "quiet");
        assert_eq!(session.status(), GameStatus::Won);
        assert_eq!(session.history().len(), 1);
    }

    #[test]
    fn six_misses_lose_and_reveal_the_secret() {
        let mut session = session_with_secret("mango");
        for _ in 0..MAX_ATTEMPTS {
            assert_eq!(session.status(), GameStatus::Playing);
            submit_word(&mut session, "house");
        }

        assert_eq!(session.status(), GameStatus::Lost);
        assert_eq!(session.history().len(), MAX_ATTEMPTS);
        assert_eq!(session.remaining_attempts(), 0);
        assert!(session.message().unwrap().text.contains("MANGO"));
        assert_eq!(session.revealed_secret().unwrap().text(), "mango");
    }

    #[test]
    fn winning_on_the_last_attempt_beats_losing() {
        let mut session = session_with_secret("mango");
        for _ in 0..MAX_ATTEMPTS - 1 {
            submit_word(&mut session, "house");
        }
        submit_word(&mut session, "mango");
        assert_eq!(session.status(), GameStatus::Won);
    }

    #[test]
    fn input_after_game_end_is_ignored() {
        let mut session = session_with_secret("mango");
        submit_word(&mut session, "mango");
        let generation = session.generation();

        session.push_letter('a');
        session.delete_letter();
        session.submit_guess();
        session.handle_key(Key::Letter('z'));
        session.handle_key(Key::Enter);

        assert_eq!(session.pending(), "");
        assert_eq!(session.history().len(), 1);
        assert_eq!(session.status(), GameStatus::Won);
        assert_eq!(session.generation(), generation);
    }

    #[test]
    fn handle_key_routes_all_sources() {
        let mut session = session_with_secret("mango");
        for name in ["m", "a", "x", "backspace", "n", "g", "o"] {
            session.handle_key(Key::from_name(name).unwrap());
        }
        session.handle_key(Key::Enter);
        assert_eq!(session.status(), GameStatus::Won);
    }

    #[test]
    fn reveal_cursor_stages_the_last_row() {
        let mut session = session_with_secret("mango");
        assert!(!session.is_revealing());

        submit_word(&mut session, "house");
        // Submission reveals the first letter immediately
        assert!(session.is_revealing());
        assert_eq!(session.revealed_count(0), 1);

        for expected in 2..=WORD_LENGTH {
            session.advance_reveal();
            assert_eq!(session.revealed_count(0), expected);
        }

        // The final step parks the cursor past the last letter
        assert!(session.is_revealing());
        session.advance_reveal();
        assert!(!session.is_revealing());
        assert_eq!(session.revealed_count(0), WORD_LENGTH);
        session.advance_reveal();
        assert_eq!(session.revealed_count(0), WORD_LENGTH);
    }

    #[test]
    fn older_rows_are_always_fully_revealed() {
        let mut session = session_with_secret("mango");
        submit_word(&mut session, "house");
        submit_word(&mut session, "table");

        assert_eq!(session.revealed_count(0), WORD_LENGTH);
        assert_eq!(session.revealed_count(1), 1);
    }

    #[test]
    fn submit_and_reset_bump_the_generation() {
        let mut session = session_with_secret("mango");
        let g0 = session.generation();

        submit_word(&mut session, "house");
        let g1 = session.generation();
        assert!(g1 > g0);

        session.reset();
        assert!(session.generation() > g1);
    }

    #[test]
    fn reset_clears_everything_and_redraws_from_pool() {
        let words = ["mango", "apple", "zebra", "house"];
        let mut session = GameSession::new(pool(&words), StdRng::seed_from_u64(7)).unwrap();

        let secret = session.secret().clone();
        submit_word(&mut session, secret.text());
        assert_eq!(session.status(), GameStatus::Won);

        session.reset();
        assert_eq!(session.status(), GameStatus::Playing);
        assert!(session.history().is_empty());
        assert!(session.hints().is_empty());
        assert!(session.pending().is_empty());
        assert!(session.message().is_none());
        assert!(!session.is_revealing());
        assert!(words.contains(&session.secret().text()));
    }

    #[test]
    fn seeded_sessions_are_deterministic() {
        let words = ["mango", "apple", "zebra", "house", "quiet"];
        let mut a = GameSession::new(pool(&words), StdRng::seed_from_u64(42)).unwrap();
        let mut b = GameSession::new(pool(&words), StdRng::seed_from_u64(42)).unwrap();

        assert_eq!(a.secret(), b.secret());
        for _ in 0..5 {
            a.reset();
            b.reset();
            assert_eq!(a.secret(), b.secret());
        }
    }
}
