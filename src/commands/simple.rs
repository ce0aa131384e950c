//! Simple interactive CLI mode
//!
//! Text-based interactive game without the TUI. Guesses are typed as whole
//! lines; feedback rows print immediately (no staged reveal in line mode).

use crate::core::Word;
use crate::game::{GameSession, GameStatus, Key, MAX_ATTEMPTS, MessageStyle, SessionError};
use crate::output::formatters::color_legend;
use crate::output::{print_guess_row, print_loss_banner, print_win_banner};
use rand::rngs::StdRng;
use std::io::{self, Write};

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if the word pool is empty or if reading user input fails.
pub fn run_simple(pool: Vec<Word>, rng: StdRng) -> Result<(), String> {
    let mut session = match GameSession::new(pool, rng) {
        Ok(session) => session,
        Err(SessionError::EmptyWordPool) => return Err(SessionError::EmptyWordPool.to_string()),
    };

    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                    Wordle - Simple Mode                      ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Guess the hidden 5-letter word in {MAX_ATTEMPTS} attempts.");
    println!("{}\n", color_legend());
    println!("Commands: 'quit' to exit, 'new' for a new word\n");

    loop {
        let attempt = session.history().len() + 1;
        let input = get_user_input(&format!("Guess {attempt}/{MAX_ATTEMPTS}"))?.to_lowercase();

        match input.as_str() {
            "quit" | "q" | "exit" => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            "new" => {
                session.reset();
                println!("\n🔄 New game started!\n");
                continue;
            }
            _ => {}
        }

        // Each line is a fresh attempt; drop any leftovers from a rejected one
        while !session.pending().is_empty() {
            session.handle_key(Key::Backspace);
        }
        for ch in input.chars() {
            if let Some(key) = Key::from_char(ch) {
                session.handle_key(key);
            }
        }

        let rows_before = session.history().len();
        session.handle_key(Key::Enter);

        if session.history().len() > rows_before {
            let record = session
                .history()
                .last()
                .expect("a row was just submitted");
            print_guess_row(session.history().len(), &record.word, &record.feedback);
        } else if let Some(message) = session.message() {
            debug_assert_eq!(message.style, MessageStyle::Error);
            println!("❌ {}\n", message.text);
            continue;
        }

        match session.status() {
            GameStatus::Playing => {}
            GameStatus::Won => {
                let history: Vec<_> = session
                    .history()
                    .iter()
                    .map(|record| (record.word.clone(), record.feedback))
                    .collect();
                print_win_banner(&history);

                if !ask_play_again()? {
                    return Ok(());
                }
                session.reset();
            }
            GameStatus::Lost => {
                let secret = session
                    .revealed_secret()
                    .expect("secret is revealed once the session is lost")
                    .clone();
                print_loss_banner(&secret);

                if !ask_play_again()? {
                    return Ok(());
                }
                session.reset();
            }
        }
    }
}

fn ask_play_again() -> Result<bool, String> {
    match get_user_input("Play again? (yes/no)")?.to_lowercase().as_str() {
        "yes" | "y" => {
            println!("\n🔄 New game started!\n");
            Ok(true)
        }
        _ => {
            println!("\n👋 Thanks for playing!\n");
            Ok(false)
        }
    }
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok(input.trim().to_string())
}
