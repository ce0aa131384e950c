//! Wordle TUI - CLI
//!
//! Terminal Wordle clone with TUI and line-mode play.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use wordle_tui::{
    commands::{run_simple, score_guess},
    core::Word,
    output::print_score_result,
    wordlists::{WORDS, loader::words_from_slice},
};

#[derive(Parser)]
#[command(
    name = "wordle_tui",
    about = "Terminal Wordle clone: guess the hidden 5-letter word in 6 attempts",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'builtin' (default, 34 words) or path to a file
    #[arg(short = 'w', long, global = true, default_value = "builtin")]
    wordlist: String,

    /// Seed the secret-word selection for a reproducible session
    #[arg(long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Line-mode game without the TUI
    Simple,

    /// Score a single guess against a given secret
    Score {
        /// The guess to evaluate
        guess: String,

        /// The secret word to evaluate against
        secret: String,
    },
}

/// Load the secret-word pool based on the -w flag
fn load_wordlist(wordlist_mode: &str) -> Result<Vec<Word>> {
    use wordle_tui::wordlists::loader::load_from_file;

    let words = match wordlist_mode {
        "builtin" => words_from_slice(WORDS),
        path => load_from_file(path).with_context(|| format!("Failed to read wordlist {path}"))?,
    };

    if words.is_empty() {
        bail!("Wordlist '{wordlist_mode}' contains no valid 5-letter words");
    }

    Ok(words)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(load_wordlist(&cli.wordlist)?, rng),
        Commands::Simple => {
            run_simple(load_wordlist(&cli.wordlist)?, rng).map_err(|e| anyhow::anyhow!(e))
        }
        Commands::Score { guess, secret } => run_score_command(&guess, &secret),
    }
}

fn run_play_command(pool: Vec<Word>, rng: StdRng) -> Result<()> {
    use wordle_tui::interactive::{App, run_tui};

    let app = App::new(pool, rng)?;
    run_tui(app)
}

fn run_score_command(guess: &str, secret: &str) -> Result<()> {
    let result = score_guess(guess, secret)?;
    print_score_result(&result);
    Ok(())
}
