use core::fmt;
use serde::{Deserialize, Serialize};

/// Tilt direction applied to the whole board.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Unit vector `(d_row, d_col)`.
    pub const fn delta(self) -> (i8, i8) {
        match self {
            Self::Up => (-1, 0),
            Self::Down => (1, 0),
            Self::Left => (0, -1),
            Self::Right => (0, 1),
        }
    }

    pub const fn arrow(self) -> char {
        match self {
            Self::Up => '↑',
            Self::Down => '↓',
            Self::Left => '←',
            Self::Right => '→',
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Left => "left",
            Self::Right => "right",
        }
    }

    /// Single-character shorthand: `u d l r`, `f b` for forward and back, or an arrow.
    pub fn from_shorthand(ch: char) -> Option<Self> {
        match ch.to_ascii_lowercase() {
            'u' | 'f' | '↑' => Some(Self::Up),
            'd' | 'b' | '↓' => Some(Self::Down),
            'l' | '←' => Some(Self::Left),
            'r' | '→' => Some(Self::Right),
            _ => None,
        }
    }

    /// Whole-word token, case-insensitive.
    pub fn from_token(token: &str) -> Option<Self> {
        const WORDS: [(&str, Direction); 7] = [
            ("up", Direction::Up),
            ("forward", Direction::Up),
            ("down", Direction::Down),
            ("backward", Direction::Down),
            ("back", Direction::Down),
            ("left", Direction::Left),
            ("right", Direction::Right),
        ];

        let token = token.trim();
        if let Some(&(_, direction)) = WORDS
            .iter()
            .find(|(word, _)| word.eq_ignore_ascii_case(token))
        {
            return Some(direction);
        }

        let mut chars = token.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) => Self::from_shorthand(ch),
            _ => None,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Validated move ready for the roll engine.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    pub direction: Direction,
    pub token: char,
}

impl Move {
    pub const fn new(direction: Direction) -> Self {
        Self {
            direction,
            token: direction.arrow(),
        }
    }
}

impl From<Direction> for Move {
    fn from(direction: Direction) -> Self {
        Self::new(direction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_are_case_insensitive() {
        assert_eq!(Direction::from_token("UP"), Some(Direction::Up));
        assert_eq!(Direction::from_token("Left"), Some(Direction::Left));
        assert_eq!(Direction::from_token("F"), Some(Direction::Up));
        assert_eq!(Direction::from_token("b"), Some(Direction::Down));
        assert_eq!(Direction::from_token("Back"), Some(Direction::Down));
        assert_eq!(Direction::from_token("→"), Some(Direction::Right));
        assert_eq!(Direction::from_token("sideways"), None);
        assert_eq!(Direction::from_token(""), None);
    }

    #[test]
    fn deltas_match_arrows() {
        assert_eq!(Direction::Up.delta(), (-1, 0));
        assert_eq!(Direction::Down.delta(), (1, 0));
        assert_eq!(Direction::Left.delta(), (0, -1));
        assert_eq!(Direction::Right.delta(), (0, 1));

        for direction in Direction::ALL {
            assert_eq!(Direction::from_shorthand(direction.arrow()), Some(direction));
        }
    }

    #[test]
    fn move_carries_arrow_token() {
        assert_eq!(Move::from(Direction::Left).token, '←');
    }
}
