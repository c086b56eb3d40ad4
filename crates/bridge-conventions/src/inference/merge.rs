use super::{HandInference, InferredHoldings, Range};
use crate::condition::inference::{MAX_HCP, MAX_SUIT_LENGTH};
use bridge_core::{Position, Suit};

/// Fold contributions about one seat into a single inference, in order.
///
/// HCP takes the largest minimum and the smallest maximum. If those cross,
/// the most recent contribution with an HCP bound wins outright, since a
/// later call refines or corrects the earlier picture. Crossed suit bounds
/// clamp the minimum down to the maximum. The balance flag is whatever
/// the last contribution that stated one said. The result is always
/// consistent.
pub fn combine_inferences(
    seat: Position,
    source: impl Into<String>,
    inferences: &[HandInference],
) -> HandInference {
    let mut acc = HandInference::new(seat, source);
    for inference in inferences {
        acc.absorb(inference);
    }

    if let (Some(min), Some(max)) = (acc.min_hcp, acc.max_hcp) {
        if min > max {
            if let Some(last) = inferences.iter().rev().find(|i| i.has_hcp_bound()) {
                acc.min_hcp = last.min_hcp;
                acc.max_hcp = last.max_hcp;
            }
            if let (Some(min), Some(max)) = (acc.min_hcp, acc.max_hcp) {
                acc.min_hcp = Some(min.min(max));
            }
        }
    }
    for bound in acc.suits.values_mut() {
        if let (Some(min), Some(max)) = (bound.min_length, bound.max_length) {
            bound.min_length = Some(min.min(max));
        }
    }
    acc
}

/// Merge every inference made about one seat into holdings, with the
/// crossing rules of [`combine_inferences`].
pub fn merge_inferences(seat: Position, inferences: &[HandInference]) -> InferredHoldings {
    let combined = combine_inferences(seat, "merged", inferences);
    let mut holdings = InferredHoldings::unknown(seat);
    holdings.inferences = inferences.to_vec();

    let max = combined.max_hcp.unwrap_or(MAX_HCP);
    holdings.hcp = Range::new(combined.min_hcp.unwrap_or(0).min(max), max);
    for suit in Suit::ALL {
        let bound = combined.suit(suit);
        let max = bound.max_length.unwrap_or(MAX_SUIT_LENGTH);
        let min = bound.min_length.unwrap_or(0).min(max);
        holdings.suits.insert(suit, Range::new(min, max));
    }
    holdings.is_balanced = combined.is_balanced;
    holdings
}
