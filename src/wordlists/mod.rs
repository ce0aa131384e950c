//! Secret word pool
//!
//! Provides the embedded word pool compiled into the binary, plus a loader
//! for custom pools.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_count_matches_const() {
        assert_eq!(WORDS.len(), WORDS_COUNT);
    }

    #[test]
    fn pool_has_34_words() {
        assert_eq!(WORDS_COUNT, 34);
    }

    #[test]
    fn pool_words_are_valid() {
        // All pool entries must be 5 letters, lowercase
        for &word in WORDS {
            assert_eq!(word.len(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn pool_has_no_duplicates() {
        let unique: std::collections::HashSet<_> = WORDS.iter().collect();
        assert_eq!(unique.len(), WORDS.len());
    }
}
