use alloc::string::ToString;
use alloc::vec::Vec;

use crate::*;

/// Turns raw player tokens into at most `moves_remaining` moves.
///
/// A token is a direction word (`up`, `Forward`, ...), a single shorthand
/// (`u`, `F`, `→`, ...), or a run of shorthands such as `LRFB` that stands
/// for one move per character. Every token is checked before the sequence is
/// cut down to the budget, so a bad token fails the whole batch even when it
/// sits past the cut.
pub fn validate<S: AsRef<str>>(raw_tokens: &[S], moves_remaining: Moves) -> Result<Vec<Move>> {
    let mut moves = Vec::new();

    for (index, raw) in raw_tokens.iter().enumerate() {
        let token = raw.as_ref().trim();
        if let Some(direction) = Direction::from_token(token) {
            moves.push(Move::new(direction));
            continue;
        }

        let expanded: Option<Vec<_>> = token.chars().map(Direction::from_shorthand).collect();
        match expanded {
            Some(run) if !run.is_empty() => moves.extend(run.into_iter().map(Move::new)),
            _ => {
                return Err(GameError::InvalidMoveToken {
                    index,
                    token: token.to_string(),
                });
            }
        }
    }

    let budget = usize::from(moves_remaining);
    if moves.len() > budget {
        log::debug!(
            "dropping {} queued moves beyond the {} remaining",
            moves.len() - budget,
            budget
        );
        moves.truncate(budget);
    }
    Ok(moves)
}
