#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use board::*;
pub use cell::*;
pub use direction::*;
pub use error::*;
pub use history::*;
pub use input::*;
pub use leaderboard::*;
pub use level::*;
pub use roll::*;
pub use round::*;
pub use scoring::*;
pub use types::*;
pub use validator::*;

mod board;
mod cell;
mod direction;
mod error;
mod history;
mod input;
mod leaderboard;
mod level;
mod roll;
mod round;
mod scoring;
mod types;
mod validator;

#[derive(Copy, Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct RoundConfig {
    pub scoring: ScoringConfig,
    pub undo_depth: UndoDepth,
}

/// Why a round is over, or that it is not.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundOutcome {
    #[default]
    InProgress,
    Won,
    LostNoMoves,
    Restarted,
    /// Left through return-to-menu or terminate.
    Abandoned,
}

impl RoundOutcome {
    pub const fn is_terminal(self) -> bool {
        use RoundOutcome::*;
        match self {
            InProgress => false,
            Won => true,
            LostNoMoves => true,
            Restarted => true,
            Abandoned => true,
        }
    }

    /// Eligible for the leaderboard.
    pub const fn is_ranked(self) -> bool {
        matches!(self, Self::Won | Self::LostNoMoves)
    }
}

/// What the session layer should do after a round.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionOutcome {
    PlayAgain,
    ReturnToMenu,
    Terminate,
}
