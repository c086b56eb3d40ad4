use super::{CallFn, RuleNode};
use crate::condition::{not, ConditionRef};
use crate::context::BiddingContext;
use crate::error::ConventionError;
use bridge_core::Call;
use std::fmt;

/// One root-to-bid path of a tree, with its conditions split by category.
///
/// A path through a no branch carries the negation of that decision's
/// condition.
#[derive(Clone)]
pub struct FlatRule {
    pub name: String,
    pub meaning: Option<String>,
    pub auction_conditions: Vec<ConditionRef>,
    pub hand_conditions: Vec<ConditionRef>,
    call: CallFn,
}

impl FlatRule {
    pub fn call(&self, ctx: &BiddingContext) -> Result<Call, ConventionError> {
        (self.call)(ctx)
    }

    pub fn auction_matches(&self, ctx: &BiddingContext) -> bool {
        self.auction_conditions.iter().all(|c| c.test(ctx))
    }

    pub fn hand_matches(&self, ctx: &BiddingContext) -> bool {
        self.hand_conditions.iter().all(|c| c.test(ctx))
    }
}

impl fmt::Debug for FlatRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names = |cs: &[ConditionRef]| cs.iter().map(|c| c.name()).collect::<Vec<_>>();
        f.debug_struct("FlatRule")
            .field("name", &self.name)
            .field("auction_conditions", &names(self.auction_conditions.as_slice()))
            .field("hand_conditions", &names(self.hand_conditions.as_slice()))
            .finish_non_exhaustive()
    }
}

/// Every path that ends in a bid, depth first with yes branches before no
/// branches. Paths ending in a fallback are dropped.
pub fn flatten_tree(root: &RuleNode) -> Vec<FlatRule> {
    let mut rules = Vec::new();
    let mut stack: Vec<(&RuleNode, Vec<ConditionRef>)> = vec![(root, Vec::new())];
    while let Some((node, path)) = stack.pop() {
        match node {
            RuleNode::Decision(decision) => {
                let mut no_path = path.clone();
                no_path.push(not(decision.condition.clone()));
                let mut yes_path = path;
                yes_path.push(decision.condition.clone());
                // Popped in reverse: yes first.
                stack.push((&*decision.no, no_path));
                stack.push((&*decision.yes, yes_path));
            }
            RuleNode::Bid(bid) => {
                let (auction_conditions, hand_conditions): (Vec<_>, Vec<_>) =
                    path.into_iter().partition(|c| c.is_auction());
                rules.push(FlatRule {
                    name: bid.name.clone(),
                    meaning: bid.meaning.clone(),
                    auction_conditions,
                    hand_conditions,
                    call: bid.call_fn(),
                });
            }
            RuleNode::Fallback(_) => {}
        }
    }
    rules
}
