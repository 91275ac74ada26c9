use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::*;

/// Source of fresh boards, looked up by level name.
pub trait LevelLoader {
    fn load(&self, name: &str) -> Result<Board>;
}

/// Level as authored: glyph rows and a move budget.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelDefinition {
    pub name: String,
    pub rows: Vec<String>,
    pub max_moves: Moves,
}

impl LevelDefinition {
    pub fn new<R: Into<String>>(
        name: impl Into<String>,
        rows: impl IntoIterator<Item = R>,
        max_moves: Moves,
    ) -> Self {
        Self {
            name: name.into(),
            rows: rows.into_iter().map(Into::into).collect(),
            max_moves,
        }
    }

    pub fn build(&self) -> Result<Board> {
        Board::from_rows(self.name.as_str(), self.rows.as_slice(), self.max_moves)
    }
}

/// Row of the level selector: dimensions and budget.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelSummary {
    pub name: String,
    pub rows: Coord,
    pub cols: Coord,
    pub max_moves: Moves,
}

impl LevelSummary {
    pub fn of(board: &Board) -> Self {
        let (rows, cols) = board.size();
        Self {
            name: board.name().into(),
            rows,
            cols,
            max_moves: board.max_moves(),
        }
    }
}

/// In-memory catalogue of validated levels, ordered by name.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LevelSet {
    boards: BTreeMap<String, Board>,
}

impl LevelSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates and stores a level, replacing any level with the same name.
    pub fn insert(&mut self, level: &LevelDefinition) -> Result<()> {
        let board = level.build()?;
        if self.boards.insert(level.name.clone(), board).is_some() {
            log::warn!("Level {:?} defined twice, keeping the latest", level.name);
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.boards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boards.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.boards.keys().map(String::as_str)
    }

    pub fn summaries(&self) -> impl Iterator<Item = LevelSummary> + '_ {
        self.boards.values().map(LevelSummary::of)
    }
}

impl LevelLoader for LevelSet {
    fn load(&self, name: &str) -> Result<Board> {
        self.boards
            .get(name)
            .cloned()
            .ok_or_else(|| GameError::UnknownLevel(name.into()))
    }
}
