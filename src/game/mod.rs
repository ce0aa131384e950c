//! Session controller
//!
//! Owns all mutable game state and the transition operations triggered by
//! input events. The presentation layers only read snapshots from here.

mod input;
mod keyboard;
mod reveal;
mod session;

pub use input::Key;
pub use keyboard::{KEYBOARD_ROWS, KeyHints};
pub use reveal::{REVEAL_DELAY, RevealTimer};
pub use session::{
    GameSession, GameStatus, GuessRecord, MAX_ATTEMPTS, Message, MessageStyle, SessionError,
    WORD_LENGTH,
};
