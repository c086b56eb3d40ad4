use crate::card::{Card, Rank};
use crate::hand::Hand;
use crate::suit::Suit;
use std::collections::HashSet;

const HAND_SIZE: usize = 13;

/// Parses a hand string in the format "Clubs.Diamonds.Hearts.Spades".
///
/// Suits are listed in ascending rank, the order used by the test vector
/// files. Empty segments are voids. Returns `None` for more than four
/// segments, an unknown rank character, a repeated card, or anything other
/// than thirteen cards.
pub fn parse_hand(s: &str) -> Option<Hand> {
    let segments: Vec<&str> = s.trim().split('.').collect();
    if segments.len() > Suit::ALL.len() {
        return None;
    }
    let mut cards = Vec::with_capacity(HAND_SIZE);
    let mut seen = HashSet::new();
    for (suit, ranks) in Suit::ALL.into_iter().zip(segments) {
        for c in ranks.chars() {
            let card = Card::new(suit, Rank::from_char(c)?);
            if !seen.insert(card) {
                return None;
            }
            cards.push(card);
        }
    }
    (cards.len() == HAND_SIZE).then_some(Hand { cards })
}
