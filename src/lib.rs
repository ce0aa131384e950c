//! Wordle TUI
//!
//! A terminal Wordle clone: guess the hidden 5-letter word in 6 attempts,
//! with per-letter feedback after each guess.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_tui::core::{Feedback, Word};
//!
//! let guess = Word::new("noble").unwrap();
//! let secret = Word::new("lemon").unwrap();
//!
//! let feedback = Feedback::evaluate(&guess, &secret);
//! println!("{}", feedback.to_emoji());
//! ```

// Core domain types
pub mod core;

// Session controller
pub mod game;

// Word pool
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
