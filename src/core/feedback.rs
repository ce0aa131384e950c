//! Guess feedback evaluation
//!
//! Feedback classifies every letter of a guess against the secret word:
//! - `Absent` - letter not in the word (at remaining multiplicity)
//! - `Present` - letter in the word, wrong position
//! - `Correct` - letter in the correct position

use super::Word;

/// Per-letter classification of a guess
///
/// Ordered so that a hint can only be upgraded: `Absent < Present < Correct`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LetterScore {
    Absent,
    Present,
    Correct,
}

/// Feedback for one submitted guess
///
/// A fixed sequence of five [`LetterScore`]s, one per guess position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feedback {
    scores: [LetterScore; 5],
}

impl Feedback {
    /// All correct (winning guess)
    pub const WIN: Self = Self {
        scores: [LetterScore::Correct; 5],
    };

    /// Evaluate `guess` against `secret`
    ///
    /// This implements Wordle's exact feedback rules, including proper handling
    /// of duplicate letters.
    ///
    /// # Algorithm
    /// 1. First pass: mark all exact position matches as Correct and remove them
    ///    from the secret's letter pool
    /// 2. Second pass: mark letters still available in the pool as Present,
    ///    everything else as Absent
    ///
    /// The ordering guarantees that a letter appearing once in the secret and
    /// twice in the guess is marked at most once as Correct/Present, matching
    /// per-letter multiplicity rather than naive set membership.
    ///
    /// # Examples
    /// ```
    /// use wordle_tui::core::{Feedback, LetterScore, Word};
    ///
    /// let guess = Word::new("noble").unwrap();
    /// let secret = Word::new("lemon").unwrap();
    /// let feedback = Feedback::evaluate(&guess, &secret);
    ///
    /// // N(present) O(present) B(absent) L(present) E(present)
    /// assert_eq!(feedback.score_at(0), LetterScore::Present);
    /// assert_eq!(feedback.score_at(2), LetterScore::Absent);
    /// ```
    #[must_use]
    pub fn evaluate(guess: &Word, secret: &Word) -> Self {
        let mut scores = [LetterScore::Absent; 5];
        let mut available = secret.char_counts();

        // First pass: exact position matches
        // Allow: index needed to access guess[i], secret[i], and set scores[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..5 {
            if guess.chars()[i] == secret.chars()[i] {
                scores[i] = LetterScore::Correct;

                let letter = guess.chars()[i];
                if let Some(count) = available.get_mut(&letter) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: misplaced letters from the remaining pool
        #[allow(clippy::needless_range_loop)]
        for i in 0..5 {
            if scores[i] == LetterScore::Absent {
                let letter = guess.chars()[i];
                if let Some(count) = available.get_mut(&letter)
                    && *count > 0
                {
                    scores[i] = LetterScore::Present;
                    *count -= 1;
                }
            }
        }

        Self { scores }
    }

    /// Get the classification sequence
    #[inline]
    #[must_use]
    pub const fn scores(&self) -> &[LetterScore; 5] {
        &self.scores
    }

    /// Get the classification at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn score_at(&self, position: usize) -> LetterScore {
        self.scores[position]
    }

    /// Check if this feedback is a win (all letters Correct)
    #[inline]
    #[must_use]
    pub fn is_win(&self) -> bool {
        self.scores.iter().all(|&s| s == LetterScore::Correct)
    }

    /// Count the number of Correct classifications
    #[must_use]
    pub fn count_correct(&self) -> usize {
        self.scores
            .iter()
            .filter(|&&s| s == LetterScore::Correct)
            .count()
    }

    /// Count the number of Present classifications
    #[must_use]
    pub fn count_present(&self) -> usize {
        self.scores
            .iter()
            .filter(|&&s| s == LetterScore::Present)
            .count()
    }

    /// Convert feedback to emoji string
    ///
    /// Returns a string like "🟩🟨⬜🟩🟨" for share-style output.
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.scores
            .iter()
            .map(|score| match score {
                LetterScore::Correct => '🟩',
                LetterScore::Present => '🟨',
                LetterScore::Absent => '⬜',
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    #[test]
    fn score_ordering_supports_hint_upgrades() {
        assert!(LetterScore::Absent < LetterScore::Present);
        assert!(LetterScore::Present < LetterScore::Correct);
    }

    #[test]
    fn feedback_all_absent() {
        let feedback = Feedback::evaluate(&word("abcde"), &word("fghij"));

        assert_eq!(feedback.scores(), &[LetterScore::Absent; 5]);
        assert_eq!(feedback.count_correct(), 0);
        assert_eq!(feedback.count_present(), 0);
    }

    #[test]
    fn feedback_all_correct() {
        let secret = word("mango");
        let feedback = Feedback::evaluate(&secret, &secret);

        assert_eq!(feedback, Feedback::WIN);
        assert!(feedback.is_win());
        assert_eq!(feedback.count_correct(), 5);
    }

    #[test]
    fn feedback_self_match_is_always_win() {
        for text in ["apple", "zebra", "umbra", "aaaaa", "jelly"] {
            let w = word(text);
            assert!(Feedback::evaluate(&w, &w).is_win());
        }
    }

    #[test]
    fn feedback_duplicate_letters_consume_multiplicity() {
        // SPEED vs ERASE
        // S(present) P(absent) E(present) E(present) D(absent)
        // ERASE has two E's, so both guessed E's are present; the S is at
        // position 3 in ERASE
        let feedback = Feedback::evaluate(&word("speed"), &word("erase"));

        assert_eq!(
            feedback.scores(),
            &[
                LetterScore::Present,
                LetterScore::Absent,
                LetterScore::Present,
                LetterScore::Present,
                LetterScore::Absent,
            ]
        );
    }

    #[test]
    fn feedback_duplicate_letters_green_takes_priority() {
        // ROBOT vs FLOOR
        // R(present) O(present) B(absent) O(correct) T(absent)
        // The second O claims its exact match first; the first O falls back to
        // the remaining O in FLOOR
        let feedback = Feedback::evaluate(&word("robot"), &word("floor"));

        assert_eq!(
            feedback.scores(),
            &[
                LetterScore::Present,
                LetterScore::Present,
                LetterScore::Absent,
                LetterScore::Correct,
                LetterScore::Absent,
            ]
        );
        assert_eq!(feedback.count_correct(), 1);
        assert_eq!(feedback.count_present(), 2);
    }

    #[test]
    fn feedback_extra_duplicates_marked_absent() {
        // MELEE vs LEMON - guess has three E's, secret a single E already
        // claimed by the exact match, so the trailing E's are absent
        let feedback = Feedback::evaluate(&word("melee"), &word("lemon"));

        assert_eq!(
            feedback.scores(),
            &[
                LetterScore::Present, // m
                LetterScore::Correct, // e
                LetterScore::Present, // l
                LetterScore::Absent,  // e
                LetterScore::Absent,  // e
            ]
        );
    }

    #[test]
    fn feedback_multiplicity_property() {
        // Correct+Present marks for a letter equal min(count in guess, count in secret)
        let cases = [
            ("speed", "erase", b'e', 2),
            ("puppy", "grape", b'p', 1),
            ("robot", "floor", b'o', 2),
            ("jelly", "lemon", b'l', 1),
        ];

        for (guess, secret, letter, expected) in cases {
            let g = word(guess);
            let s = word(secret);
            let feedback = Feedback::evaluate(&g, &s);

            let marked = (0..5)
                .filter(|&i| {
                    g.char_at(i) == letter && feedback.score_at(i) != LetterScore::Absent
                })
                .count();
            assert_eq!(marked, expected, "{guess} vs {secret}, letter {letter}");
        }
    }

    #[test]
    fn feedback_mixed_example() {
        // NOBLE vs LEMON - every guessed letter except B occurs somewhere else
        let feedback = Feedback::evaluate(&word("noble"), &word("lemon"));

        assert_eq!(
            feedback.scores(),
            &[
                LetterScore::Present, // n
                LetterScore::Present, // o
                LetterScore::Absent,  // b
                LetterScore::Present, // l
                LetterScore::Present, // e
            ]
        );
    }

    #[test]
    fn feedback_to_emoji() {
        let feedback = Feedback::evaluate(&word("robot"), &word("floor"));
        assert_eq!(feedback.to_emoji(), "🟨🟨⬜🟩⬜");

        assert_eq!(Feedback::WIN.to_emoji(), "🟩🟩🟩🟩🟩");
    }
}
