use alloc::collections::VecDeque;
use serde::{Deserialize, Serialize};

use crate::*;

/// How many rolls can be taken back.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum UndoDepth {
    /// Only the most recent roll; a second undo in a row is refused.
    #[default]
    Single,
    Limited(usize),
    Unlimited,
}

impl UndoDepth {
    pub const fn capacity(self) -> Option<usize> {
        match self {
            Self::Single => Some(1),
            Self::Limited(depth) => Some(depth),
            Self::Unlimited => None,
        }
    }
}

/// Boards as they were before each roll, newest last.
#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct History {
    depth: UndoDepth,
    snapshots: VecDeque<Board>,
}

impl History {
    pub fn new(depth: UndoDepth) -> Self {
        Self {
            depth,
            snapshots: VecDeque::new(),
        }
    }

    pub fn depth(&self) -> UndoDepth {
        self.depth
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn last(&self) -> Option<&Board> {
        self.snapshots.back()
    }

    /// Stores the board about to be rolled, dropping the oldest snapshot
    /// once the depth is exhausted.
    pub fn push(&mut self, board: Board) {
        match self.depth.capacity() {
            Some(0) => return,
            Some(capacity) => {
                while self.snapshots.len() >= capacity {
                    self.snapshots.pop_front();
                }
            }
            None => {}
        }
        self.snapshots.push_back(board);
    }

    pub fn pop_last(&mut self) -> Result<Board> {
        self.snapshots.pop_back().ok_or(GameError::NothingToUndo)
    }

    pub fn clear(&mut self) {
        self.snapshots.clear();
    }
}
