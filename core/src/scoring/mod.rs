use serde::{Deserialize, Serialize};

use crate::*;
pub use rules::*;

mod rules;

/// Egg that fell into an exit during a roll.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClearedEgg {
    pub origin: Coord2,
    pub exit: Coord2,
    /// Cells travelled, the final step into the exit included.
    pub distance: Coord,
}

/// Points awarded for the eggs cleared by a single roll.
///
/// `moves_before` is the budget left before the roll was applied, the roll
/// itself included. Rules see nothing else of the board.
pub trait ScoringRule {
    fn score(&self, cleared: &[ClearedEgg], moves_before: Moves) -> Points;
}

impl<T: ScoringRule + ?Sized> ScoringRule for &T {
    fn score(&self, cleared: &[ClearedEgg], moves_before: Moves) -> Points {
        (**self).score(cleared, moves_before)
    }
}

/// Serializable choice of scoring rule.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScoringConfig {
    Flat(FlatScoring),
    Combo(ComboScoring),
    ReserveBonus(ReserveBonusScoring),
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self::Combo(ComboScoring::default())
    }
}

impl ScoringRule for ScoringConfig {
    fn score(&self, cleared: &[ClearedEgg], moves_before: Moves) -> Points {
        match self {
            Self::Flat(rule) => rule.score(cleared, moves_before),
            Self::Combo(rule) => rule.score(cleared, moves_before),
            Self::ReserveBonus(rule) => rule.score(cleared, moves_before),
        }
    }
}
