use bridge_core::Suit;
use serde::{Deserialize, Serialize};

pub const MAX_HCP: u8 = 40;
pub const MAX_SUIT_LENGTH: u8 = 13;

/// What a hand condition says about the hand when it holds.
///
/// Auction conditions may also carry one: when such a condition is
/// rejected for a seat, the inverse becomes a negative inference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum ConditionInference {
    HcpMin { min: u8 },
    HcpMax { max: u8 },
    HcpRange { min: u8, max: u8 },
    SuitMin { suit: Suit, min: u8 },
    SuitMax { suit: Suit, max: u8 },
    Balanced,
    NotBalanced,
    AceCount { counts: Vec<u8> },
    KingCount { counts: Vec<u8> },
    TwoSuited { min_length: u8 },
}

/// The result of negating a [`ConditionInference`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inverted {
    /// The negation says nothing usable.
    Nothing,
    Definite(ConditionInference),
    /// At least one of these holds. Never more than two entries.
    Disjunction(Vec<ConditionInference>),
}

impl ConditionInference {
    /// Negate the descriptor. Branches that fall outside 0..=40 HCP or
    /// 0..=13 cards are dropped.
    pub fn invert(&self) -> Inverted {
        use ConditionInference::*;
        match *self {
            HcpMin { min } => match min.checked_sub(1) {
                Some(max) => Inverted::Definite(HcpMax { max }),
                None => Inverted::Nothing,
            },
            HcpMax { max } if max < MAX_HCP => Inverted::Definite(HcpMin { min: max + 1 }),
            HcpMax { .. } => Inverted::Nothing,
            HcpRange { min, max } => {
                let mut branches = Vec::new();
                if let Some(below) = min.checked_sub(1) {
                    branches.push(HcpMax { max: below });
                }
                if max < MAX_HCP {
                    branches.push(HcpMin { min: max + 1 });
                }
                match branches.len() {
                    0 => Inverted::Nothing,
                    1 => Inverted::Definite(branches.remove(0)),
                    _ => Inverted::Disjunction(branches),
                }
            }
            SuitMin { suit, min } => match min.checked_sub(1) {
                Some(max) => Inverted::Definite(SuitMax { suit, max }),
                None => Inverted::Nothing,
            },
            SuitMax { suit, max } if max < MAX_SUIT_LENGTH => {
                Inverted::Definite(SuitMin { suit, min: max + 1 })
            }
            SuitMax { .. } => Inverted::Nothing,
            Balanced => Inverted::Definite(NotBalanced),
            NotBalanced => Inverted::Definite(Balanced),
            AceCount { .. } | KingCount { .. } | TwoSuited { .. } => Inverted::Nothing,
        }
    }
}
