use alloc::vec::Vec;
use core::cmp::Reverse;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::*;

/// Where an egg ended up after a roll.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EggFate {
    Settled(Coord2),
    Cleared { exit: Coord2 },
}

/// Path of one egg during a roll, used to animate the tilt.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EggMotion {
    pub origin: Coord2,
    pub distance: Coord,
    pub fate: EggFate,
}

impl EggMotion {
    pub const fn moved(&self) -> bool {
        self.distance > 0
    }
}

pub type ClearedEggs = SmallVec<[ClearedEgg; 4]>;

/// Result of tilting a board once.
#[derive(Clone, Debug, PartialEq)]
pub struct Roll {
    pub board: Board,
    pub direction: Direction,
    pub points: Points,
    /// One entry per egg, in the order the eggs were moved.
    pub motions: Vec<EggMotion>,
    pub cleared: ClearedEggs,
}

impl Roll {
    /// Nothing moved; the roll only cost a move.
    pub fn is_no_op(&self) -> bool {
        !self.motions.iter().any(EggMotion::moved)
    }

    pub fn into_parts(self) -> (Board, Points) {
        (self.board, self.points)
    }
}

/// Tilts `board` using the default scoring rule.
pub fn roll(board: &Board, direction: Direction) -> Result<Roll> {
    roll_with(board, direction, &ScoringConfig::default())
}

/// Tilts `board` towards `direction`, producing the successor board.
///
/// Eggs nearest the direction of travel move first, so every egg behind them
/// sees its predecessors already at rest. An egg keeps sliding over empty
/// cells, rests against walls, settled eggs and the board edge, and leaves
/// the board when it slides into an exit. The roll costs one move even when
/// nothing moves; with no moves left it fails with [`GameError::OutOfMoves`].
pub fn roll_with<S: ScoringRule + ?Sized>(
    board: &Board,
    direction: Direction,
    scoring: &S,
) -> Result<Roll> {
    if board.moves_remaining() == 0 {
        return Err(GameError::OutOfMoves);
    }

    let size = board.size();
    let delta = direction.delta();
    let mut cells = board.cells().clone();
    let mut motions = Vec::new();
    let mut cleared = ClearedEggs::new();

    for origin in traversal_order(board, direction) {
        cells[origin.to_nd_index()] = Cell::Empty;

        let mut position = origin;
        let mut distance: Coord = 0;
        let fate = loop {
            let Some(next) = apply_delta(position, delta, size) else {
                break EggFate::Settled(position);
            };
            match cells[next.to_nd_index()] {
                Cell::Empty => {
                    position = next;
                    distance += 1;
                }
                Cell::Exit => {
                    distance += 1;
                    break EggFate::Cleared { exit: next };
                }
                Cell::Wall | Cell::Egg => break EggFate::Settled(position),
            }
        };

        match fate {
            EggFate::Settled(rest) => cells[rest.to_nd_index()] = Cell::Egg,
            EggFate::Cleared { exit } => cleared.push(ClearedEgg {
                origin,
                exit,
                distance,
            }),
        }
        log::trace!("egg {:?} rolled {} {:?}", origin, distance, fate);
        motions.push(EggMotion {
            origin,
            distance,
            fate,
        });
    }

    let points = scoring.score(&cleared, board.moves_remaining());
    let board = board.advance(cells, points)?;
    log::debug!(
        "rolled {} on {:?}: {} cleared, {} points, {} moves left",
        direction,
        board.name(),
        cleared.len(),
        points,
        board.moves_remaining()
    );

    Ok(Roll {
        board,
        direction,
        points,
        motions,
        cleared,
    })
}

/// Egg positions ordered so that eggs further along `direction` come first.
fn traversal_order(board: &Board, direction: Direction) -> Vec<Coord2> {
    let (d_row, d_col) = direction.delta();
    let mut eggs: Vec<Coord2> = board.egg_positions().collect();
    eggs.sort_by_key(|&(row, col)| {
        Reverse(i16::from(row) * i16::from(d_row) + i16::from(col) * i16::from(d_col))
    });
    eggs
}
