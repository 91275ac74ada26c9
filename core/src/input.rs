use alloc::string::{String, ToString};
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

/// Out-of-band request that ends the current round.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ControlSignal {
    Restart,
    ReturnToMenu,
    Terminate,
}

/// One line of player input, classified.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Input {
    /// Raw move tokens, still to be validated.
    Moves(Vec<String>),
    Undo,
    Control(ControlSignal),
}

// English and Tagalog command words
const RESTART_WORDS: &[&str] = &["restart", "umulit"];
const RETURN_WORDS: &[&str] = &["menu", "return", "bumalik"];
const TERMINATE_WORDS: &[&str] = &["exit", "terminate", "isara"];
const UNDO_WORDS: &[&str] = &["undo", "z"];

impl Input {
    pub fn parse(line: &str) -> Self {
        let command = line.trim();
        let is_any = |words: &[&str]| words.iter().any(|word| word.eq_ignore_ascii_case(command));

        if is_any(RESTART_WORDS) {
            Self::Control(ControlSignal::Restart)
        } else if is_any(RETURN_WORDS) {
            Self::Control(ControlSignal::ReturnToMenu)
        } else if is_any(TERMINATE_WORDS) {
            Self::Control(ControlSignal::Terminate)
        } else if is_any(UNDO_WORDS) {
            Self::Undo
        } else {
            Self::Moves(tokenize(line).map(ToString::to_string).collect())
        }
    }
}

/// Splits a move line on whitespace and commas.
pub fn tokenize(line: &str) -> impl Iterator<Item = &str> {
    line.split(|ch: char| ch.is_whitespace() || ch == ',')
        .filter(|token| !token.is_empty())
}
