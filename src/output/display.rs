//! Display functions for line-mode output

use super::formatters::{colored_guess, feedback_to_emoji};
use crate::commands::ScoreResult;
use crate::core::{Feedback, Word};
use crate::game::MAX_ATTEMPTS;
use colored::Colorize;

/// Print one evaluated guess row
pub fn print_guess_row(attempt: usize, word: &Word, feedback: &Feedback) {
    println!(
        "  {}  {} {}",
        format!("{attempt}/{MAX_ATTEMPTS}").bright_black(),
        colored_guess(word, feedback),
        feedback_to_emoji(feedback)
    );
}

/// Print the win banner with the guess history
pub fn print_win_banner(history: &[(Word, Feedback)]) {
    println!("\n{}", "═".repeat(60).bright_cyan());
    println!(
        "{}",
        "    🎉  Congratulations! You've guessed the word correctly!  🎉"
            .bright_green()
            .bold()
    );
    println!("{}", "═".repeat(60).bright_cyan());

    let attempts = history.len();
    println!(
        "\n  Solved in {} {}",
        attempts.to_string().bright_cyan().bold(),
        if attempts == 1 { "guess" } else { "guesses" }
    );

    println!("\n  Guess history:");
    for (i, (word, feedback)) in history.iter().enumerate() {
        println!(
            "    {}. {} {}",
            (i + 1).to_string().bright_black(),
            word.text().to_uppercase().bright_white().bold(),
            feedback_to_emoji(feedback)
        );
    }
    println!();
}

/// Print the loss banner, revealing the secret
pub fn print_loss_banner(secret: &Word) {
    println!("\n{}", "═".repeat(60).bright_cyan());
    println!(
        "{}",
        format!(
            "    Game Over. The word was: {}",
            secret.text().to_uppercase()
        )
        .bright_red()
        .bold()
    );
    println!("{}", "═".repeat(60).bright_cyan());
    println!();
}

/// Print the result of the `score` command
pub fn print_score_result(result: &ScoreResult) {
    println!("\n{}", "─".repeat(40).cyan());
    println!(
        "  {} vs secret {}",
        result.guess.text().to_uppercase().bright_yellow().bold(),
        result.secret.text().to_uppercase().bright_white().bold()
    );
    println!("{}", "─".repeat(40).cyan());

    println!("\n  {}", colored_guess(&result.guess, &result.feedback));
    println!("  {}", feedback_to_emoji(&result.feedback));

    if result.feedback.is_win() {
        println!("\n  {}", "Exact match!".green().bold());
    } else {
        println!(
            "\n  {} correct, {} misplaced",
            result.feedback.count_correct(),
            result.feedback.count_present()
        );
    }
    println!();
}
