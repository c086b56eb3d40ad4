use super::{BidNode, DecisionNode, RuleNode};
use crate::context::BiddingContext;
use crate::error::ConventionError;
use bridge_core::Call;
use serde::Serialize;
use tracing::debug;

/// A decision on a sibling's path whose outcome differs from what the
/// sibling needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FailedCondition {
    pub decision: String,
    pub condition: String,
    pub description: String,
    /// The outcome the sibling's path requires.
    pub required: bool,
}

/// Another bid the convention could have made in this auction, and why
/// this hand does not make it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SiblingBid {
    pub name: String,
    pub call: Call,
    pub meaning: Option<String>,
    pub failed_conditions: Vec<FailedCondition>,
}

/// Alternative bids sharing the matched bid's auction context.
///
/// Auction decisions are followed the way the evaluator went. Below the
/// first hand decision every bid other than `matched` is collected; one
/// whose call cannot be produced for this hand is skipped.
pub fn find_siblings(
    root: &RuleNode,
    matched: &BidNode,
    ctx: &BiddingContext,
) -> Result<Vec<SiblingBid>, ConventionError> {
    let mut node = root;
    while let RuleNode::Decision(decision) = node {
        if !decision.condition.is_auction() {
            break;
        }
        node = if decision.condition.test(ctx) {
            &*decision.yes
        } else {
            &*decision.no
        };
    }

    let mut siblings = Vec::new();
    let mut stack: Vec<(&RuleNode, Vec<(&DecisionNode, bool)>)> = vec![(node, Vec::new())];
    while let Some((node, path)) = stack.pop() {
        match node {
            RuleNode::Decision(decision) => {
                if decision.condition.is_auction() {
                    return Err(ConventionError::InterleavedAuctionCondition {
                        condition: decision.condition.name(),
                    });
                }
                let mut no_path = path.clone();
                no_path.push((decision, false));
                let mut yes_path = path;
                yes_path.push((decision, true));
                stack.push((&*decision.no, no_path));
                stack.push((&*decision.yes, yes_path));
            }
            RuleNode::Bid(bid) => {
                if std::ptr::eq(bid, matched) {
                    continue;
                }
                let call = match bid.call(ctx) {
                    Ok(call) => call,
                    Err(err) => {
                        debug!(bid = %bid.name, %err, "skipping sibling");
                        continue;
                    }
                };
                let failed_conditions = path
                    .iter()
                    .filter(|(decision, required)| decision.condition.test(ctx) != *required)
                    .map(|(decision, required)| FailedCondition {
                        decision: decision.name.clone(),
                        condition: decision.condition.name(),
                        description: decision.condition.describe(ctx),
                        required: *required,
                    })
                    .collect();
                siblings.push(SiblingBid {
                    name: bid.name.clone(),
                    call,
                    meaning: bid.meaning.clone(),
                    failed_conditions,
                });
            }
            RuleNode::Fallback(_) => {}
        }
    }
    Ok(siblings)
}
