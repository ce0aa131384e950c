//! Core domain types for the game
//!
//! This module contains the fundamental domain types with zero external dependencies
//! beyond a hash map. All types here are pure, testable, and deterministic.

mod feedback;
mod word;

pub use feedback::{Feedback, LetterScore};
pub use word::{Word, WordError};
