use serde::{Deserialize, Serialize};
use std::fmt;

/// A seat at the table. Bidding proceeds clockwise: N, E, S, W.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub enum Position {
    #[default]
    #[serde(rename = "N")]
    North,
    #[serde(rename = "E")]
    East,
    #[serde(rename = "S")]
    South,
    #[serde(rename = "W")]
    West,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Partnership {
    NS,
    EW,
}

impl Partnership {
    pub fn contains(self, pos: Position) -> bool {
        pos.partnership() == self
    }

    pub fn opponent(self) -> Self {
        match self {
            Partnership::NS => Partnership::EW,
            Partnership::EW => Partnership::NS,
        }
    }
}

impl Position {
    pub const ALL: [Position; 4] = [
        Position::North,
        Position::East,
        Position::South,
        Position::West,
    ];

    pub fn partnership(self) -> Partnership {
        match self {
            Position::North | Position::South => Partnership::NS,
            Position::East | Position::West => Partnership::EW,
        }
    }

    pub fn next(self) -> Self {
        match self {
            Position::North => Position::East,
            Position::East => Position::South,
            Position::South => Position::West,
            Position::West => Position::North,
        }
    }

    pub fn partner(self) -> Self {
        self.next().next()
    }

    /// True for this seat and its partner.
    pub fn is_partnered_with(self, other: Position) -> bool {
        self.partnership() == other.partnership()
    }

    pub fn to_char(self) -> char {
        match self {
            Position::North => 'N',
            Position::East => 'E',
            Position::South => 'S',
            Position::West => 'W',
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'N' => Some(Position::North),
            'E' => Some(Position::East),
            'S' => Some(Position::South),
            'W' => Some(Position::West),
            _ => None,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}
