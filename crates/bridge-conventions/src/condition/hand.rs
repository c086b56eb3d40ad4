use super::{Condition, ConditionCategory, ConditionInference, ConditionRef};
use crate::context::BiddingContext;
use bridge_core::{Rank, Suit};
use std::sync::Arc;

#[derive(Debug)]
pub struct HcpMin(pub u8);
impl Condition for HcpMin {
    fn name(&self) -> String {
        format!("hcp-min-{}", self.0)
    }
    fn test(&self, ctx: &BiddingContext) -> bool {
        ctx.evaluation.hcp >= self.0
    }
    fn describe(&self, ctx: &BiddingContext) -> String {
        format!("{} HCP (need {}+)", ctx.evaluation.hcp, self.0)
    }
    fn category(&self) -> Option<ConditionCategory> {
        Some(ConditionCategory::Hand)
    }
    fn inference(&self) -> Option<ConditionInference> {
        Some(ConditionInference::HcpMin { min: self.0 })
    }
}

#[derive(Debug)]
pub struct HcpMax(pub u8);
impl Condition for HcpMax {
    fn name(&self) -> String {
        format!("hcp-max-{}", self.0)
    }
    fn test(&self, ctx: &BiddingContext) -> bool {
        ctx.evaluation.hcp <= self.0
    }
    fn describe(&self, ctx: &BiddingContext) -> String {
        format!("{} HCP (need at most {})", ctx.evaluation.hcp, self.0)
    }
    fn category(&self) -> Option<ConditionCategory> {
        Some(ConditionCategory::Hand)
    }
    fn inference(&self) -> Option<ConditionInference> {
        Some(ConditionInference::HcpMax { max: self.0 })
    }
}

#[derive(Debug)]
pub struct HcpRange(pub u8, pub u8);
impl Condition for HcpRange {
    fn name(&self) -> String {
        format!("hcp-{}-{}", self.0, self.1)
    }
    fn test(&self, ctx: &BiddingContext) -> bool {
        (self.0..=self.1).contains(&ctx.evaluation.hcp)
    }
    fn describe(&self, ctx: &BiddingContext) -> String {
        format!("{} HCP (need {}-{})", ctx.evaluation.hcp, self.0, self.1)
    }
    fn category(&self) -> Option<ConditionCategory> {
        Some(ConditionCategory::Hand)
    }
    fn inference(&self) -> Option<ConditionInference> {
        Some(ConditionInference::HcpRange {
            min: self.0,
            max: self.1,
        })
    }
}

#[derive(Debug)]
pub struct SuitMin(pub Suit, pub u8);
impl Condition for SuitMin {
    fn name(&self) -> String {
        format!("{}-min-{}", self.0.to_char(), self.1)
    }
    fn test(&self, ctx: &BiddingContext) -> bool {
        ctx.evaluation.length(self.0) >= self.1
    }
    fn describe(&self, ctx: &BiddingContext) -> String {
        format!(
            "{} {} (need {}+)",
            ctx.evaluation.length(self.0),
            self.0.symbol(),
            self.1
        )
    }
    fn category(&self) -> Option<ConditionCategory> {
        Some(ConditionCategory::Hand)
    }
    fn inference(&self) -> Option<ConditionInference> {
        Some(ConditionInference::SuitMin {
            suit: self.0,
            min: self.1,
        })
    }
}

#[derive(Debug)]
pub struct SuitMax(pub Suit, pub u8);
impl Condition for SuitMax {
    fn name(&self) -> String {
        format!("{}-max-{}", self.0.to_char(), self.1)
    }
    fn test(&self, ctx: &BiddingContext) -> bool {
        ctx.evaluation.length(self.0) <= self.1
    }
    fn describe(&self, ctx: &BiddingContext) -> String {
        format!(
            "{} {} (need at most {})",
            ctx.evaluation.length(self.0),
            self.0.symbol(),
            self.1
        )
    }
    fn category(&self) -> Option<ConditionCategory> {
        Some(ConditionCategory::Hand)
    }
    fn inference(&self) -> Option<ConditionInference> {
        Some(ConditionInference::SuitMax {
            suit: self.0,
            max: self.1,
        })
    }
}

/// At least `min` cards in one of the listed suits. Says nothing about
/// which one, so it carries no inference.
#[derive(Debug)]
pub struct AnySuitMin(pub Vec<Suit>, pub u8);
impl Condition for AnySuitMin {
    fn name(&self) -> String {
        let suits: String = self.0.iter().map(|s| s.to_char()).collect();
        format!("any-{}-min-{}", suits, self.1)
    }
    fn test(&self, ctx: &BiddingContext) -> bool {
        self.0.iter().any(|&s| ctx.evaluation.length(s) >= self.1)
    }
    fn describe(&self, ctx: &BiddingContext) -> String {
        let lengths: Vec<String> = self
            .0
            .iter()
            .map(|&s| format!("{} {}", ctx.evaluation.length(s), s.symbol()))
            .collect();
        format!("{} (need {}+ in one)", lengths.join(", "), self.1)
    }
    fn category(&self) -> Option<ConditionCategory> {
        Some(ConditionCategory::Hand)
    }
}

#[derive(Debug)]
pub struct Balanced;
impl Condition for Balanced {
    fn name(&self) -> String {
        "balanced".to_string()
    }
    fn test(&self, ctx: &BiddingContext) -> bool {
        ctx.evaluation.is_balanced()
    }
    fn describe(&self, ctx: &BiddingContext) -> String {
        format!("{} (need balanced)", ctx.evaluation.distribution)
    }
    fn category(&self) -> Option<ConditionCategory> {
        Some(ConditionCategory::Hand)
    }
    fn inference(&self) -> Option<ConditionInference> {
        Some(ConditionInference::Balanced)
    }
}

/// A singleton or void somewhere.
#[derive(Debug)]
pub struct HasShortage;
impl Condition for HasShortage {
    fn name(&self) -> String {
        "has-shortage".to_string()
    }
    fn test(&self, ctx: &BiddingContext) -> bool {
        ctx.evaluation.has_shortage()
    }
    fn describe(&self, ctx: &BiddingContext) -> String {
        format!("{} (need a singleton or void)", ctx.evaluation.distribution)
    }
    fn category(&self) -> Option<ConditionCategory> {
        Some(ConditionCategory::Hand)
    }
    fn inference(&self) -> Option<ConditionInference> {
        Some(ConditionInference::NotBalanced)
    }
}

/// Two suits of at least `min_length` cards each.
#[derive(Debug)]
pub struct TwoSuited(pub u8);
impl Condition for TwoSuited {
    fn name(&self) -> String {
        format!("two-suited-{}", self.0)
    }
    fn test(&self, ctx: &BiddingContext) -> bool {
        ctx.evaluation.distribution.sorted_lengths()[1] >= self.0
    }
    fn describe(&self, ctx: &BiddingContext) -> String {
        format!(
            "{} (need two {}+ card suits)",
            ctx.evaluation.distribution, self.0
        )
    }
    fn category(&self) -> Option<ConditionCategory> {
        Some(ConditionCategory::Hand)
    }
    fn inference(&self) -> Option<ConditionInference> {
        Some(ConditionInference::TwoSuited { min_length: self.0 })
    }
}

/// Number of cards of one rank is among `counts`. Used for aces and kings.
#[derive(Debug)]
pub struct RankCount {
    pub rank: Rank,
    pub counts: Vec<u8>,
}
impl Condition for RankCount {
    fn name(&self) -> String {
        let counts: Vec<String> = self.counts.iter().map(u8::to_string).collect();
        format!("{}-count-{}", self.rank.to_char(), counts.join("-"))
    }
    fn test(&self, ctx: &BiddingContext) -> bool {
        self.counts.contains(&ctx.hand.count_rank(self.rank))
    }
    fn describe(&self, ctx: &BiddingContext) -> String {
        let counts: Vec<String> = self.counts.iter().map(u8::to_string).collect();
        format!(
            "{} of rank {} (need {})",
            ctx.hand.count_rank(self.rank),
            self.rank.to_char(),
            counts.join(" or ")
        )
    }
    fn category(&self) -> Option<ConditionCategory> {
        Some(ConditionCategory::Hand)
    }
    fn inference(&self) -> Option<ConditionInference> {
        let counts = self.counts.clone();
        match self.rank {
            Rank::Ace => Some(ConditionInference::AceCount { counts }),
            Rank::King => Some(ConditionInference::KingCount { counts }),
            _ => None,
        }
    }
}

pub fn hcp_min(min: u8) -> ConditionRef {
    Arc::new(HcpMin(min))
}

pub fn hcp_max(max: u8) -> ConditionRef {
    Arc::new(HcpMax(max))
}

pub fn hcp_range(min: u8, max: u8) -> ConditionRef {
    Arc::new(HcpRange(min, max))
}

pub fn suit_min(suit: Suit, min: u8) -> ConditionRef {
    Arc::new(SuitMin(suit, min))
}

pub fn suit_max(suit: Suit, max: u8) -> ConditionRef {
    Arc::new(SuitMax(suit, max))
}

pub fn any_suit_min(suits: &[Suit], min: u8) -> ConditionRef {
    Arc::new(AnySuitMin(suits.to_vec(), min))
}

pub fn balanced() -> ConditionRef {
    Arc::new(Balanced)
}

pub fn has_shortage() -> ConditionRef {
    Arc::new(HasShortage)
}

pub fn two_suited(min_length: u8) -> ConditionRef {
    Arc::new(TwoSuited(min_length))
}

pub fn ace_count(counts: &[u8]) -> ConditionRef {
    Arc::new(RankCount {
        rank: Rank::Ace,
        counts: counts.to_vec(),
    })
}

pub fn king_count(counts: &[u8]) -> ConditionRef {
    Arc::new(RankCount {
        rank: Rank::King,
        counts: counts.to_vec(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use bridge_core::{Auction, Hand, Position};

    fn ctx(hand: &str) -> BiddingContext {
        BiddingContext::new(Hand::parse(hand).unwrap(), Auction::new(Position::North))
    }

    #[test]
    fn test_hcp_conditions() {
        // 10 HCP
        let c = ctx("AK2.QJ3.T98.7654");
        assert!(hcp_min(10).test(&c));
        assert!(!hcp_min(11).test(&c));
        assert!(hcp_max(10).test(&c));
        assert!(hcp_range(8, 10).test(&c));
        assert!(!hcp_range(11, 12).test(&c));
        assert_eq!(hcp_range(8, 10).describe(&c), "10 HCP (need 8-10)");
    }

    #[test]
    fn test_suit_conditions() {
        let c = ctx("AK2.QJ3.T98.7654");
        assert!(suit_min(Suit::Spades, 4).test(&c));
        assert!(!suit_min(Suit::Hearts, 4).test(&c));
        assert!(suit_max(Suit::Hearts, 3).test(&c));
        assert!(any_suit_min(&[Suit::Hearts, Suit::Spades], 4).test(&c));
        assert!(!any_suit_min(&[Suit::Hearts, Suit::Diamonds], 4).test(&c));
        assert_eq!(any_suit_min(&[Suit::Hearts, Suit::Spades], 4).inference(), None);
        assert_eq!(any_suit_min(&[Suit::Hearts, Suit::Spades], 4).name(), "any-HS-min-4");
    }

    #[test]
    fn test_shape_conditions() {
        let flat = ctx("AK2.QJ3.T98.7654");
        assert!(balanced().test(&flat));
        assert!(!has_shortage().test(&flat));
        assert!(!two_suited(5).test(&flat));

        let shapely = ctx("2.Q.KJ987.AQ9876");
        assert!(has_shortage().test(&shapely));
        assert!(two_suited(5).test(&shapely));
        assert!(!balanced().test(&shapely));
        assert_eq!(has_shortage().inference(), Some(ConditionInference::NotBalanced));
    }

    #[test]
    fn test_rank_counts() {
        let c = ctx("AK2.AJ3.K98.7654");
        assert!(ace_count(&[2]).test(&c));
        assert!(!ace_count(&[0, 3]).test(&c));
        assert!(!king_count(&[1, 4]).test(&c));
        assert!(king_count(&[2]).test(&c));
        assert_eq!(
            ace_count(&[1, 4]).inference(),
            Some(ConditionInference::AceCount { counts: vec![1, 4] })
        );
    }
}
