use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;
use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Snapshot of a level at one point of a round.
///
/// Boards are never mutated by play: each roll produces a fresh value, so
/// earlier boards can be kept around as undo snapshots. Deserialized boards
/// go through the same checks as [`Board::from_parts`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "BoardParts")]
pub struct Board {
    name: String,
    cells: Array2<Cell>,
    max_moves: Moves,
    moves_remaining: Moves,
    score: Points,
}

impl Board {
    /// Fresh board for a level, with the full move budget and no score.
    pub fn new(name: impl Into<String>, cells: Array2<Cell>, max_moves: Moves) -> Result<Self> {
        Self::from_parts(name, cells, max_moves, max_moves, 0)
    }

    /// Rebuilds a board mid-round, e.g. from a saved game.
    pub fn from_parts(
        name: impl Into<String>,
        cells: Array2<Cell>,
        max_moves: Moves,
        moves_remaining: Moves,
        score: Points,
    ) -> Result<Self> {
        let (rows, cols) = cells.dim();
        if rows == 0 || cols == 0 || rows > Coord::MAX.into() || cols > Coord::MAX.into() {
            return Err(GameError::InvalidBoardShape);
        }
        if moves_remaining > max_moves {
            return Err(GameError::MovesExceedBudget);
        }

        Ok(Self {
            name: name.into(),
            cells,
            max_moves,
            moves_remaining,
            score,
        })
    }

    /// Parses one string per row, each character being a [`Cell`] glyph or symbol.
    pub fn from_rows<S: AsRef<str>>(
        name: impl Into<String>,
        rows: &[S],
        max_moves: Moves,
    ) -> Result<Self> {
        let mut width = None;
        let mut flat = Vec::new();

        for (row, line) in rows.iter().enumerate() {
            let row_start = flat.len();
            for (col, glyph) in line.as_ref().chars().enumerate() {
                let Some(cell) = Cell::from_char(glyph) else {
                    return Err(GameError::InvalidCell {
                        row: row.try_into().map_err(|_| GameError::InvalidBoardShape)?,
                        col: col.try_into().map_err(|_| GameError::InvalidBoardShape)?,
                        glyph,
                    });
                };
                flat.push(cell);
            }

            let row_width = flat.len() - row_start;
            match width {
                None => width = Some(row_width),
                Some(width) if width != row_width => return Err(GameError::InvalidBoardShape),
                Some(_) => {}
            }
        }

        let cells = Array2::from_shape_vec((rows.len(), width.unwrap_or(0)), flat)
            .map_err(|_| GameError::InvalidBoardShape)?;
        Self::new(name, cells, max_moves)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// `(rows, cols)`.
    pub fn size(&self) -> Coord2 {
        let (rows, cols) = self.cells.dim();
        // bounded by the constructor
        (rows as Coord, cols as Coord)
    }

    pub fn cells(&self) -> &Array2<Cell> {
        &self.cells
    }

    pub fn cell_at(&self, coords: Coord2) -> Option<Cell> {
        self.cells.get(coords.to_nd_index()).copied()
    }

    pub fn max_moves(&self) -> Moves {
        self.max_moves
    }

    pub fn moves_remaining(&self) -> Moves {
        self.moves_remaining
    }

    pub fn moves_used(&self) -> Moves {
        self.max_moves - self.moves_remaining
    }

    pub fn score(&self) -> Points {
        self.score
    }

    pub fn egg_count(&self) -> CellCount {
        // at most Coord::MAX squared cells
        self.cells.iter().filter(|cell| cell.is_egg()).count() as CellCount
    }

    pub fn has_eggs(&self) -> bool {
        self.cells.iter().any(|cell| cell.is_egg())
    }

    pub fn egg_positions(&self) -> impl Iterator<Item = Coord2> + '_ {
        self.cells
            .indexed_iter()
            .filter(|(_, cell)| cell.is_egg())
            .map(|((row, col), _)| (row as Coord, col as Coord))
    }

    /// Rows rendered with the emoji glyphs, for the display collaborator.
    pub fn glyph_rows(&self) -> impl Iterator<Item = String> + '_ {
        self.cells
            .rows()
            .into_iter()
            .map(|row| row.iter().map(|cell| cell.glyph()).collect())
    }

    /// Successor board after a roll has rearranged the cells.
    pub(crate) fn advance(&self, cells: Array2<Cell>, points: Points) -> Result<Self> {
        let moves_remaining = self
            .moves_remaining
            .checked_sub(1)
            .ok_or(GameError::OutOfMoves)?;

        Ok(Self {
            name: self.name.clone(),
            cells,
            max_moves: self.max_moves,
            moves_remaining,
            score: self.score.saturating_add(points),
        })
    }
}

/// Unchecked wire form of a [`Board`].
#[derive(Deserialize)]
struct BoardParts {
    name: String,
    cells: Array2<Cell>,
    max_moves: Moves,
    moves_remaining: Moves,
    score: Points,
}

impl TryFrom<BoardParts> for Board {
    type Error = GameError;

    fn try_from(parts: BoardParts) -> Result<Self> {
        Self::from_parts(
            parts.name,
            parts.cells,
            parts.max_moves,
            parts.moves_remaining,
            parts.score,
        )
    }
}

impl Index<Coord2> for Board {
    type Output = Cell;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[coords.to_nd_index()]
    }
}

/// ASCII rendering, one line per row.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, row) in self.cells.rows().into_iter().enumerate() {
            if index > 0 {
                f.write_str("\n")?;
            }
            for cell in row {
                write!(f, "{}", cell.symbol())?;
            }
        }
        Ok(())
    }
}
