//! What the auction reveals about each seat's hand.
//!
//! Providers turn one call into a [`HandInference`]; the
//! [`InferenceEngine`] feeds every call of an auction to the right
//! provider and merges the results per seat into [`InferredHoldings`].

pub mod chain;
pub mod convention;
pub mod engine;
pub mod merge;
pub mod natural;

pub use chain::ChainProvider;
pub use convention::{resolve_disjunction, ConventionProvider};
pub use engine::{InferenceEngine, TimelineEntry};
pub use merge::{combine_inferences, merge_inferences};
pub use natural::{NaturalProvider, NaturalTheory};

use crate::condition::inference::{MAX_HCP, MAX_SUIT_LENGTH};
use crate::condition::ConditionInference;
use crate::error::ConventionError;
use bridge_core::{Auction, Call, Position, Suit};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SuitBound {
    pub min_length: Option<u8>,
    pub max_length: Option<u8>,
}

/// Bounds one call places on the caller's hand. Absent fields mean
/// "no information".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandInference {
    pub seat: Position,
    pub min_hcp: Option<u8>,
    pub max_hcp: Option<u8>,
    pub is_balanced: Option<bool>,
    pub suits: BTreeMap<Suit, SuitBound>,
    pub source: String,
}

impl HandInference {
    pub fn new(seat: Position, source: impl Into<String>) -> Self {
        Self {
            seat,
            min_hcp: None,
            max_hcp: None,
            is_balanced: None,
            suits: BTreeMap::new(),
            source: source.into(),
        }
    }

    pub fn with_min_hcp(mut self, min: u8) -> Self {
        self.min_hcp = Some(min);
        self
    }

    pub fn with_max_hcp(mut self, max: u8) -> Self {
        self.max_hcp = Some(max);
        self
    }

    pub fn with_balanced(mut self, balanced: bool) -> Self {
        self.is_balanced = Some(balanced);
        self
    }

    pub fn with_suit_min(mut self, suit: Suit, min: u8) -> Self {
        self.suits.entry(suit).or_default().min_length = Some(min);
        self
    }

    pub fn with_suit_max(mut self, suit: Suit, max: u8) -> Self {
        self.suits.entry(suit).or_default().max_length = Some(max);
        self
    }

    pub fn suit(&self, suit: Suit) -> SuitBound {
        self.suits.get(&suit).copied().unwrap_or_default()
    }

    pub fn has_hcp_bound(&self) -> bool {
        self.min_hcp.is_some() || self.max_hcp.is_some()
    }

    pub fn is_empty(&self) -> bool {
        !self.has_hcp_bound()
            && self.is_balanced.is_none()
            && self
                .suits
                .values()
                .all(|b| b.min_length.is_none() && b.max_length.is_none())
    }

    /// Tighten with another inference about the same hand: larger minimums,
    /// smaller maximums, and the other's balance flag when it has one.
    pub fn absorb(&mut self, other: &HandInference) {
        self.min_hcp = tighter(self.min_hcp, other.min_hcp, u8::max);
        self.max_hcp = tighter(self.max_hcp, other.max_hcp, u8::min);
        if other.is_balanced.is_some() {
            self.is_balanced = other.is_balanced;
        }
        for (suit, bound) in &other.suits {
            let mine = self.suits.entry(*suit).or_default();
            mine.min_length = tighter(mine.min_length, bound.min_length, u8::max);
            mine.max_length = tighter(mine.max_length, bound.max_length, u8::min);
        }
    }

    /// No bound contradicts another.
    pub fn is_consistent(&self) -> bool {
        let hcp_ok = match (self.min_hcp, self.max_hcp) {
            (Some(min), Some(max)) => min <= max,
            _ => true,
        };
        hcp_ok
            && self.suits.values().all(|b| match (b.min_length, b.max_length) {
                (Some(min), Some(max)) => min <= max,
                _ => true,
            })
    }

    /// Record a condition descriptor. Returns false for descriptors that
    /// have no representation here (ace, king and two-suited counts).
    pub fn apply(&mut self, descriptor: &ConditionInference) -> bool {
        use ConditionInference::*;
        let part = HandInference::new(self.seat, "");
        let part = match *descriptor {
            HcpMin { min } => part.with_min_hcp(min),
            HcpMax { max } => part.with_max_hcp(max),
            HcpRange { min, max } => part.with_min_hcp(min).with_max_hcp(max),
            SuitMin { suit, min } => part.with_suit_min(suit, min),
            SuitMax { suit, max } => part.with_suit_max(suit, max),
            Balanced => part.with_balanced(true),
            NotBalanced => part.with_balanced(false),
            AceCount { .. } | KingCount { .. } | TwoSuited { .. } => return false,
        };
        self.absorb(&part);
        true
    }
}

fn tighter(a: Option<u8>, b: Option<u8>, pick: fn(u8, u8) -> u8) -> Option<u8> {
    match (a, b) {
        (Some(a), Some(b)) => Some(pick(a, b)),
        (a, b) => a.or(b),
    }
}

/// An inclusive range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Range {
    pub min: u8,
    pub max: u8,
}

impl Range {
    pub const fn new(min: u8, max: u8) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: u8) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

/// Everything known about one seat's hand after merging its inferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InferredHoldings {
    pub seat: Position,
    pub hcp: Range,
    pub suits: BTreeMap<Suit, Range>,
    pub is_balanced: Option<bool>,
    /// The contributions these holdings were merged from, in order.
    pub inferences: Vec<HandInference>,
}

impl InferredHoldings {
    /// Holdings with no information: 0-40 HCP, 0-13 in every suit.
    pub fn unknown(seat: Position) -> Self {
        Self {
            seat,
            hcp: Range::new(0, MAX_HCP),
            suits: Suit::ALL
                .into_iter()
                .map(|s| (s, Range::new(0, MAX_SUIT_LENGTH)))
                .collect(),
            is_balanced: None,
            inferences: Vec::new(),
        }
    }

    pub fn suit(&self, suit: Suit) -> Range {
        self.suits
            .get(&suit)
            .copied()
            .unwrap_or(Range::new(0, MAX_SUIT_LENGTH))
    }
}

impl fmt::Display for InferredHoldings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}-{} hcp", self.seat, self.hcp.min, self.hcp.max)?;
        match self.is_balanced {
            Some(true) => write!(f, ", balanced")?,
            Some(false) => write!(f, ", unbalanced")?,
            None => {}
        }
        for suit in Suit::DISPLAY_ORDER {
            let range = self.suit(suit);
            let symbol = suit.symbol();
            match (range.min, range.max) {
                (0, MAX_SUIT_LENGTH) => {}
                (min, max) if min == max => write!(f, ", {}{}", min, symbol)?,
                (min, MAX_SUIT_LENGTH) => write!(f, ", {}+{}", min, symbol)?,
                (0, max) => write!(f, ", 0-{}{}", max, symbol)?,
                (min, max) => write!(f, ", {}-{}{}", min, max, symbol)?,
            }
        }
        Ok(())
    }
}

/// Derives an inference from one call.
pub trait InferenceProvider: Send + Sync {
    fn name(&self) -> &str;

    /// What `call`, made by `seat` after `auction_before`, says about the
    /// caller's hand. `Ok(None)` when this provider has nothing to say.
    fn infer_from_bid(
        &self,
        call: Call,
        auction_before: &Auction,
        seat: Position,
    ) -> Result<Option<HandInference>, ConventionError>;
}

/// Which provider reads which partnership's calls.
#[derive(Clone)]
pub struct InferenceConfig {
    pub own_partnership: Arc<dyn InferenceProvider>,
    pub opponent_partnership: Arc<dyn InferenceProvider>,
}

impl InferenceConfig {
    pub fn new(
        own_partnership: Arc<dyn InferenceProvider>,
        opponent_partnership: Arc<dyn InferenceProvider>,
    ) -> Self {
        Self {
            own_partnership,
            opponent_partnership,
        }
    }
}

impl fmt::Debug for InferenceConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InferenceConfig")
            .field("own_partnership", &self.own_partnership.name())
            .field("opponent_partnership", &self.opponent_partnership.name())
            .finish()
    }
}
