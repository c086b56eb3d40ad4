use serde::{Deserialize, Serialize};
use std::fmt;

/// The four suits, ordered by bidding rank (clubs lowest).
///
/// Serialized with the single-letter codes used on the wire by the
/// orchestration layers ("C", "D", "H", "S").
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Suit {
    #[serde(rename = "C")]
    Clubs,
    #[serde(rename = "D")]
    Diamonds,
    #[serde(rename = "H")]
    Hearts,
    #[serde(rename = "S")]
    Spades,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

    /// Spades-first order, matching `Distribution` and hand diagrams.
    pub const DISPLAY_ORDER: [Suit; 4] = [Suit::Spades, Suit::Hearts, Suit::Diamonds, Suit::Clubs];

    pub fn to_char(self) -> char {
        match self {
            Suit::Clubs => 'C',
            Suit::Diamonds => 'D',
            Suit::Hearts => 'H',
            Suit::Spades => 'S',
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'C' => Some(Suit::Clubs),
            'D' => Some(Suit::Diamonds),
            'H' => Some(Suit::Hearts),
            'S' => Some(Suit::Spades),
            _ => None,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Suit::Clubs => "♣",
            Suit::Diamonds => "♦",
            Suit::Hearts => "♥",
            Suit::Spades => "♠",
        }
    }

    pub fn is_major(self) -> bool {
        matches!(self, Suit::Hearts | Suit::Spades)
    }

    pub fn is_minor(self) -> bool {
        matches!(self, Suit::Clubs | Suit::Diamonds)
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// The denomination of a contract bid: a suit or notrump.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Strain {
    #[serde(rename = "C")]
    Clubs,
    #[serde(rename = "D")]
    Diamonds,
    #[serde(rename = "H")]
    Hearts,
    #[serde(rename = "S")]
    Spades,
    #[serde(rename = "NT")]
    NoTrump,
}

impl Strain {
    pub const ALL: [Strain; 5] = [
        Strain::Clubs,
        Strain::Diamonds,
        Strain::Hearts,
        Strain::Spades,
        Strain::NoTrump,
    ];

    /// Accepts both `N` and the `NT` spelling's leading letter.
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'N' => Some(Strain::NoTrump),
            other => Suit::from_char(other).map(Strain::from),
        }
    }

    pub fn to_char(self) -> char {
        match self.to_suit() {
            Some(suit) => suit.to_char(),
            None => 'N',
        }
    }

    pub fn to_suit(self) -> Option<Suit> {
        match self {
            Strain::Clubs => Some(Suit::Clubs),
            Strain::Diamonds => Some(Suit::Diamonds),
            Strain::Hearts => Some(Suit::Hearts),
            Strain::Spades => Some(Suit::Spades),
            Strain::NoTrump => None,
        }
    }

    pub fn is_major(self) -> bool {
        self.to_suit().is_some_and(Suit::is_major)
    }

    pub fn is_minor(self) -> bool {
        self.to_suit().is_some_and(Suit::is_minor)
    }
}

impl From<Suit> for Strain {
    fn from(suit: Suit) -> Self {
        match suit {
            Suit::Clubs => Strain::Clubs,
            Suit::Diamonds => Strain::Diamonds,
            Suit::Hearts => Strain::Hearts,
            Suit::Spades => Strain::Spades,
        }
    }
}

impl fmt::Display for Strain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strain::NoTrump => write!(f, "NT"),
            _ => write!(f, "{}", self.to_char()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suit_parsing() {
        assert_eq!(Suit::from_char('S'), Some(Suit::Spades));
        assert_eq!(Suit::from_char('h'), Some(Suit::Hearts));
        assert_eq!(Suit::from_char('D'), Some(Suit::Diamonds));
        assert_eq!(Suit::from_char('c'), Some(Suit::Clubs));
        assert_eq!(Suit::from_char('X'), None);
    }

    #[test]
    fn test_strain_parsing() {
        assert_eq!(Strain::from_char('n'), Some(Strain::NoTrump));
        assert_eq!(Strain::from_char('H'), Some(Strain::Hearts));
        assert_eq!(Strain::from_char('Z'), None);
    }

    #[test]
    fn test_strain_ordering_matches_bidding_rank() {
        assert!(Strain::Clubs < Strain::Diamonds);
        assert!(Strain::Spades < Strain::NoTrump);
        assert_eq!(Strain::from(Suit::Hearts).to_suit(), Some(Suit::Hearts));
        assert_eq!(Strain::NoTrump.to_suit(), None);
    }

    #[test]
    fn test_serialized_codes() {
        assert_eq!(serde_json::to_string(&Suit::Clubs).unwrap(), "\"C\"");
        assert_eq!(serde_json::to_string(&Strain::NoTrump).unwrap(), "\"NT\"");
    }
}
