//! Terminal output formatting
//!
//! Display utilities for line-mode results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{print_guess_row, print_loss_banner, print_score_result, print_win_banner};
