//! Convention rule trees.
//!
//! A tree is made of decision nodes (a condition with a yes and a no
//! subtree), bid leaves and fallback leaves. Every subtree is owned by
//! exactly one parent, so trees are finite and acyclic by construction.
//!
//! Well-formed trees put every auction-category decision above the first
//! hand-category decision on any path. Sibling discovery reports a
//! violation as [`ConventionError::InterleavedAuctionCondition`].

pub mod evaluator;
pub mod flatten;
pub mod siblings;

pub use evaluator::{evaluate_tree, PathEntry, TreeEvalResult};
pub use flatten::{flatten_tree, FlatRule};
pub use siblings::{find_siblings, FailedCondition, SiblingBid};

use crate::condition::ConditionRef;
use crate::context::BiddingContext;
use crate::error::ConventionError;
use bridge_core::Call;
use std::fmt;
use std::sync::Arc;

/// Produces a bid leaf's call. May depend on the hand, and may fail when
/// the hand cannot support the call.
pub type CallFn = Arc<dyn Fn(&BiddingContext) -> Result<Call, ConventionError> + Send + Sync>;

#[derive(Debug)]
pub struct DecisionNode {
    pub name: String,
    pub condition: ConditionRef,
    pub yes: Box<RuleNode>,
    pub no: Box<RuleNode>,
}

pub struct BidNode {
    pub name: String,
    pub meaning: Option<String>,
    call: CallFn,
}

impl BidNode {
    pub fn call(&self, ctx: &BiddingContext) -> Result<Call, ConventionError> {
        (self.call)(ctx)
    }

    pub(crate) fn call_fn(&self) -> CallFn {
        Arc::clone(&self.call)
    }
}

impl fmt::Debug for BidNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BidNode")
            .field("name", &self.name)
            .field("meaning", &self.meaning)
            .finish_non_exhaustive()
    }
}

#[derive(Debug)]
pub enum RuleNode {
    Decision(DecisionNode),
    Bid(BidNode),
    /// No bid from this convention. The label is for display only.
    Fallback(Option<String>),
}

impl RuleNode {
    pub fn decision(
        name: impl Into<String>,
        condition: ConditionRef,
        yes: RuleNode,
        no: RuleNode,
    ) -> Self {
        RuleNode::Decision(DecisionNode {
            name: name.into(),
            condition,
            yes: Box::new(yes),
            no: Box::new(no),
        })
    }

    /// A bid leaf that always makes the same call.
    pub fn bid(name: impl Into<String>, call: Call) -> Self {
        Self::bid_with(name, move |_| Ok(call))
    }

    pub fn bid_with<F>(name: impl Into<String>, call: F) -> Self
    where
        F: Fn(&BiddingContext) -> Result<Call, ConventionError> + Send + Sync + 'static,
    {
        RuleNode::Bid(BidNode {
            name: name.into(),
            meaning: None,
            call: Arc::new(call),
        })
    }

    pub fn fallback() -> Self {
        RuleNode::Fallback(None)
    }

    pub fn fallback_labeled(label: impl Into<String>) -> Self {
        RuleNode::Fallback(Some(label.into()))
    }

    /// Attach a meaning to a bid leaf. No effect on other nodes.
    pub fn with_meaning(mut self, meaning: impl Into<String>) -> Self {
        if let RuleNode::Bid(bid) = &mut self {
            bid.meaning = Some(meaning.into());
        }
        self
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            RuleNode::Decision(d) => Some(&d.name),
            RuleNode::Bid(b) => Some(&b.name),
            RuleNode::Fallback(label) => label.as_deref(),
        }
    }
}
