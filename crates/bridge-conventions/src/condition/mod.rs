//! Conditions are the predicates on decision nodes.
//!
//! Each condition tests a [`BiddingContext`], explains itself, and may carry
//! a [`ConditionInference`] describing what it reveals about the hand.
//! Auction conditions are tagged [`ConditionCategory::Auction`]; anything
//! untagged is treated as a hand condition.

pub mod auction;
pub mod combinators;
pub mod hand;
pub mod inference;

pub use auction::*;
pub use combinators::{and, not, or, All, Any, Not, MAX_BRANCHES};
pub use hand::*;
pub use inference::{ConditionInference, Inverted};

use crate::context::BiddingContext;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConditionCategory {
    Auction,
    Hand,
}

pub type ConditionRef = Arc<dyn Condition>;

pub trait Condition: Send + Sync + Debug {
    fn name(&self) -> String;

    fn test(&self, ctx: &BiddingContext) -> bool;

    /// Human-readable account of the test against this context,
    /// e.g. "10 HCP (need 8+)".
    fn describe(&self, ctx: &BiddingContext) -> String;

    fn category(&self) -> Option<ConditionCategory> {
        None
    }

    fn inference(&self) -> Option<ConditionInference> {
        None
    }

    /// The children of a conjunction, for flattening into disjunction
    /// branches and for reading their inferences one by one.
    fn conjuncts(&self) -> Option<&[ConditionRef]> {
        None
    }

    /// Per-branch results for compound conditions. Empty for leaves.
    fn branches(&self, _ctx: &BiddingContext) -> Vec<ConditionBranch> {
        Vec::new()
    }

    fn is_auction(&self) -> bool {
        self.category() == Some(ConditionCategory::Auction)
    }
}

/// Outcome of testing one condition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConditionResult {
    pub name: String,
    pub passed: bool,
    pub description: String,
}

impl ConditionResult {
    pub fn of(condition: &dyn Condition, ctx: &BiddingContext) -> Self {
        Self {
            name: condition.name(),
            passed: condition.test(ctx),
            description: condition.describe(ctx),
        }
    }
}

/// One alternative of a disjunction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConditionBranch {
    pub passed: bool,
    pub results: Vec<ConditionResult>,
}

/// The inferences a condition implies when it holds. A conjunction implies
/// each of its children's.
pub fn implied_inferences(condition: &dyn Condition) -> Vec<ConditionInference> {
    match condition.conjuncts() {
        Some(children) => children
            .iter()
            .flat_map(|c| implied_inferences(c.as_ref()))
            .collect(),
        None => condition.inference().into_iter().collect(),
    }
}
