use super::{BidNode, DecisionNode, RuleNode};
use crate::context::BiddingContext;
use crate::error::ConventionError;
use bridge_core::Call;
use serde::ser::{SerializeStruct, Serializer};
use serde::Serialize;
use tracing::trace;

/// One decision visited during a walk.
#[derive(Debug, Clone)]
pub struct PathEntry<'t> {
    pub node: &'t DecisionNode,
    pub passed: bool,
    pub description: String,
}

/// Outcome of walking a tree for one context.
///
/// `visited` holds every decision in visit order. `path` is the subset that
/// passed and `rejected_decisions` the subset that failed.
#[derive(Debug, Clone)]
pub struct TreeEvalResult<'t> {
    pub matched: Option<&'t BidNode>,
    pub path: Vec<PathEntry<'t>>,
    pub rejected_decisions: Vec<PathEntry<'t>>,
    pub visited: Vec<PathEntry<'t>>,
}

impl<'t> TreeEvalResult<'t> {
    /// The matched bid's call, if any bid was reached.
    pub fn matched_call(&self, ctx: &BiddingContext) -> Option<Result<Call, ConventionError>> {
        self.matched.map(|bid| bid.call(ctx))
    }
}

/// Walk from the root, taking the yes branch when a decision's condition
/// holds and the no branch otherwise, until a leaf is reached.
pub fn evaluate_tree<'t>(root: &'t RuleNode, ctx: &BiddingContext) -> TreeEvalResult<'t> {
    let mut visited = Vec::new();
    let mut node = root;
    let matched = loop {
        match node {
            RuleNode::Decision(decision) => {
                let passed = decision.condition.test(ctx);
                trace!(decision = %decision.name, passed, "visited decision");
                visited.push(PathEntry {
                    node: decision,
                    passed,
                    description: decision.condition.describe(ctx),
                });
                node = if passed { &*decision.yes } else { &*decision.no };
            }
            RuleNode::Bid(bid) => break Some(bid),
            RuleNode::Fallback(_) => break None,
        }
    };
    let (path, rejected_decisions): (Vec<_>, Vec<_>) =
        visited.iter().cloned().partition(|e| e.passed);
    TreeEvalResult {
        matched,
        path,
        rejected_decisions,
        visited,
    }
}

impl Serialize for PathEntry<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("PathEntry", 4)?;
        s.serialize_field("decision", &self.node.name)?;
        s.serialize_field("condition", &self.node.condition.name())?;
        s.serialize_field("passed", &self.passed)?;
        s.serialize_field("description", &self.description)?;
        s.end()
    }
}

impl Serialize for TreeEvalResult<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("TreeEvalResult", 3)?;
        s.serialize_field("matched", &self.matched.map(|b| b.name.as_str()))?;
        s.serialize_field("path", &self.path)?;
        s.serialize_field("rejected", &self.rejected_decisions)?;
        s.end()
    }
}
