use crate::card::{Card, Rank};
use crate::suit::Suit;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Shape {
    /// No singletons, no voids, max one doubleton (4-3-3-3, 4-4-3-2, 5-3-3-2)
    Balanced,
    /// One singleton OR two doubletons, no voids (5-4-2-2, 6-3-2-2)
    SemiBalanced,
    /// Everything else (contains singletons/voids beyond SemiBalanced)
    Unbalanced,
}

/// Suit lengths of a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Distribution {
    pub spades: u8,
    pub hearts: u8,
    pub diamonds: u8,
    pub clubs: u8,
}

impl Distribution {
    pub fn new(spades: u8, hearts: u8, diamonds: u8, clubs: u8) -> Self {
        Self {
            spades,
            hearts,
            diamonds,
            clubs,
        }
    }

    pub fn length(&self, suit: Suit) -> u8 {
        match suit {
            Suit::Spades => self.spades,
            Suit::Hearts => self.hearts,
            Suit::Diamonds => self.diamonds,
            Suit::Clubs => self.clubs,
        }
    }

    pub fn set_length(&mut self, suit: Suit, length: u8) {
        match suit {
            Suit::Spades => self.spades = length,
            Suit::Hearts => self.hearts = length,
            Suit::Diamonds => self.diamonds = length,
            Suit::Clubs => self.clubs = length,
        }
    }

    /// Lengths longest first.
    pub fn sorted_lengths(&self) -> [u8; 4] {
        let mut d = [self.spades, self.hearts, self.diamonds, self.clubs];
        d.sort_by(|a, b| b.cmp(a));
        d
    }

    pub fn shape(&self) -> Shape {
        let sorted = self.sorted_lengths();
        let longest = sorted[0];
        let doubletons = sorted.iter().filter(|&&l| l == 2).count();
        let singletons = sorted.iter().filter(|&&l| l == 1).count();
        let voids = sorted.iter().filter(|&&l| l == 0).count();

        if singletons == 0 && voids == 0 && doubletons <= 1 {
            Shape::Balanced
        } else if longest <= 6 && voids == 0 && (singletons == 1 || doubletons == 2) {
            Shape::SemiBalanced
        } else {
            Shape::Unbalanced
        }
    }
}

impl fmt::Display for Distribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{}-{}-{}",
            self.spades, self.hearts, self.diamonds, self.clubs
        )
    }
}

/// The numbers the bidding core reads about a hand, computed once per
/// evaluation: high-card points and the four suit lengths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct HandEvaluation {
    pub hcp: u8,
    pub distribution: Distribution,
}

impl HandEvaluation {
    pub fn length(&self, suit: Suit) -> u8 {
        self.distribution.length(suit)
    }

    pub fn shape(&self) -> Shape {
        self.distribution.shape()
    }

    /// 4-3-3-3, 4-4-3-2 or 5-3-3-2.
    pub fn is_balanced(&self) -> bool {
        self.shape() == Shape::Balanced
    }

    /// At least one singleton or void.
    pub fn has_shortage(&self) -> bool {
        self.distribution.sorted_lengths()[3] <= 1
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Hand {
    pub cards: Vec<Card>,
}

impl Hand {
    pub fn new(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Parse a hand string in the format "Clubs.Diamonds.Hearts.Spades".
    pub fn parse(s: &str) -> Option<Self> {
        crate::io::hand_parser::parse_hand(s)
    }

    pub fn hcp(&self) -> u8 {
        self.cards
            .iter()
            .fold(0u8, |total, c| total.saturating_add(c.rank.hcp()))
    }

    pub fn length(&self, suit: Suit) -> u8 {
        self.cards.iter().filter(|c| c.suit == suit).count() as u8
    }

    /// Number of cards of the given rank across all suits.
    pub fn count_rank(&self, rank: Rank) -> u8 {
        self.cards.iter().filter(|c| c.rank == rank).count() as u8
    }

    pub fn distribution(&self) -> Distribution {
        let mut dist = Distribution::default();
        for card in &self.cards {
            let len = dist.length(card.suit);
            dist.set_length(card.suit, len + 1);
        }
        dist
    }

    /// Single pass over the cards producing HCP and shape together.
    pub fn evaluate(&self) -> HandEvaluation {
        let mut hcp: u8 = 0;
        let mut distribution = Distribution::default();
        for card in &self.cards {
            hcp = hcp.saturating_add(card.rank.hcp());
            let len = distribution.length(card.suit);
            distribution.set_length(card.suit, len + 1);
        }
        HandEvaluation { hcp, distribution }
    }

    pub fn shape(&self) -> Shape {
        self.distribution().shape()
    }

    pub fn is_balanced(&self) -> bool {
        matches!(self.shape(), Shape::Balanced)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hcp_calculation() {
        let hand = Hand::new(vec![
            Card::new(Suit::Spades, Rank::Ace),
            Card::new(Suit::Hearts, Rank::King),
            Card::new(Suit::Diamonds, Rank::Queen),
            Card::new(Suit::Clubs, Rank::Jack),
            Card::new(Suit::Spades, Rank::Two),
        ]);
        assert_eq!(hand.hcp(), 10);
        assert_eq!(hand.count_rank(Rank::Ace), 1);
    }

    #[test]
    fn test_hcp_saturates_on_oversized_hand() {
        let hand = Hand::new(vec![Card::new(Suit::Spades, Rank::Ace); 100]);
        assert_eq!(hand.hcp(), u8::MAX);
        assert_eq!(hand.evaluate().hcp, u8::MAX);
    }

    #[test]
    fn test_evaluate_matches_piecewise() {
        let hand = Hand::parse("432.K32.AQJ2.KQ2").unwrap();
        let eval = hand.evaluate();
        assert_eq!(eval.hcp, hand.hcp());
        assert_eq!(eval.hcp, 15);
        assert_eq!(eval.distribution, Distribution::new(3, 4, 3, 3));
        assert!(eval.is_balanced());
        assert!(!eval.has_shortage());
    }

    #[test]
    fn test_balanced_patterns() {
        assert_eq!(Distribution::new(4, 3, 3, 3).shape(), Shape::Balanced);
        assert_eq!(Distribution::new(4, 4, 3, 2).shape(), Shape::Balanced);
        assert_eq!(Distribution::new(5, 3, 3, 2).shape(), Shape::Balanced);
        assert_eq!(Distribution::new(5, 4, 2, 2).shape(), Shape::SemiBalanced);
        assert_eq!(Distribution::new(5, 4, 3, 1).shape(), Shape::SemiBalanced);
        assert_eq!(Distribution::new(5, 4, 4, 0).shape(), Shape::Unbalanced);
        assert_eq!(Distribution::new(7, 3, 2, 1).shape(), Shape::Unbalanced);
    }

    #[test]
    fn test_shortage() {
        let eval = HandEvaluation {
            hcp: 10,
            distribution: Distribution::new(5, 4, 3, 1),
        };
        assert!(eval.has_shortage());
        assert!(!eval.is_balanced());
    }

    #[test]
    fn test_distribution_display() {
        assert_eq!(Distribution::new(5, 3, 3, 2).to_string(), "5-3-3-2");
    }
}
