//! Game-level rules outside a single round:
//! - When the game is over
//! - Who won

pub mod engine;

pub use engine::{check_terminal, final_result, GameResult, TerminalReason};
