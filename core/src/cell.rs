use serde::{Deserialize, Serialize};

/// Contents of a single board cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Wall,
    Egg,
    /// Nest that swallows any egg rolling into it.
    Exit,
}

impl Cell {
    pub const ALL: [Cell; 4] = [Cell::Empty, Cell::Wall, Cell::Egg, Cell::Exit];

    pub const fn is_egg(self) -> bool {
        matches!(self, Self::Egg)
    }

    /// Emoji used by the terminal front end.
    pub const fn glyph(self) -> char {
        match self {
            Self::Empty => '🟩',
            Self::Wall => '🧱',
            Self::Egg => '🥚',
            Self::Exit => '🪹',
        }
    }

    /// Plain-text stand-in for [`Cell::glyph`].
    pub const fn symbol(self) -> char {
        match self {
            Self::Empty => '.',
            Self::Wall => '#',
            Self::Egg => 'o',
            Self::Exit => '@',
        }
    }

    /// Accepts either the emoji glyph or the ASCII symbol.
    pub fn from_char(ch: char) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|cell| cell.glyph() == ch || cell.symbol() == ch)
    }
}
