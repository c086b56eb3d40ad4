use super::{Condition, ConditionBranch, ConditionCategory, ConditionRef, ConditionResult};
use crate::context::BiddingContext;
use crate::error::ConventionError;
use std::sync::Arc;

/// Widest disjunction `or` accepts.
pub const MAX_BRANCHES: usize = 4;

/// Logical negation. Keeps the inner category but carries no inference:
/// a negated bound is only recovered by explicit inversion.
#[derive(Debug)]
pub struct Not(pub ConditionRef);
impl Condition for Not {
    fn name(&self) -> String {
        format!("not-{}", self.0.name())
    }
    fn test(&self, ctx: &BiddingContext) -> bool {
        !self.0.test(ctx)
    }
    fn describe(&self, ctx: &BiddingContext) -> String {
        format!("not ({})", self.0.describe(ctx))
    }
    fn category(&self) -> Option<ConditionCategory> {
        self.0.category()
    }
}

/// Every child must hold. All children are evaluated so each one's result
/// can be reported.
#[derive(Debug)]
pub struct All(pub Vec<ConditionRef>);
impl Condition for All {
    fn name(&self) -> String {
        let names: Vec<String> = self.0.iter().map(|c| c.name()).collect();
        format!("and({})", names.join(", "))
    }
    fn test(&self, ctx: &BiddingContext) -> bool {
        let results: Vec<bool> = self.0.iter().map(|c| c.test(ctx)).collect();
        results.into_iter().all(|passed| passed)
    }
    fn describe(&self, ctx: &BiddingContext) -> String {
        let parts: Vec<String> = self.0.iter().map(|c| c.describe(ctx)).collect();
        parts.join("; ")
    }
    fn category(&self) -> Option<ConditionCategory> {
        shared_category(&self.0)
    }
    fn conjuncts(&self) -> Option<&[ConditionRef]> {
        Some(&self.0)
    }
    fn branches(&self, ctx: &BiddingContext) -> Vec<ConditionBranch> {
        let results: Vec<ConditionResult> = self
            .0
            .iter()
            .map(|c| ConditionResult::of(c.as_ref(), ctx))
            .collect();
        vec![ConditionBranch {
            passed: results.iter().all(|r| r.passed),
            results,
        }]
    }
}

/// At least one child must hold. Built through [`or`], which caps the
/// number of branches.
#[derive(Debug)]
pub struct Any(Vec<ConditionRef>);
impl Condition for Any {
    fn name(&self) -> String {
        let names: Vec<String> = self.0.iter().map(|c| c.name()).collect();
        format!("or({})", names.join(", "))
    }
    fn test(&self, ctx: &BiddingContext) -> bool {
        let results: Vec<bool> = self.0.iter().map(|c| c.test(ctx)).collect();
        results.into_iter().any(|passed| passed)
    }
    fn describe(&self, ctx: &BiddingContext) -> String {
        let parts: Vec<String> = self.0.iter().map(|c| c.describe(ctx)).collect();
        format!("one of: {}", parts.join(" | "))
    }
    fn category(&self) -> Option<ConditionCategory> {
        shared_category(&self.0)
    }
    fn branches(&self, ctx: &BiddingContext) -> Vec<ConditionBranch> {
        self.0
            .iter()
            .map(|child| {
                let results: Vec<ConditionResult> = match child.conjuncts() {
                    Some(parts) => parts
                        .iter()
                        .map(|c| ConditionResult::of(c.as_ref(), ctx))
                        .collect(),
                    None => vec![ConditionResult::of(child.as_ref(), ctx)],
                };
                ConditionBranch {
                    passed: results.iter().all(|r| r.passed),
                    results,
                }
            })
            .collect()
    }
}

fn shared_category(children: &[ConditionRef]) -> Option<ConditionCategory> {
    let first = children.first()?.category();
    children
        .iter()
        .all(|c| c.category() == first)
        .then_some(first)
        .flatten()
}

pub fn not(condition: ConditionRef) -> ConditionRef {
    Arc::new(Not(condition))
}

pub fn and(conditions: Vec<ConditionRef>) -> ConditionRef {
    Arc::new(All(conditions))
}

pub fn or(conditions: Vec<ConditionRef>) -> Result<ConditionRef, ConventionError> {
    if conditions.len() > MAX_BRANCHES {
        return Err(ConventionError::TooManyBranches {
            max: MAX_BRANCHES,
            got: conditions.len(),
        });
    }
    Ok(Arc::new(Any(conditions)))
}
