use super::{combine_inferences, HandInference, InferenceProvider};
use crate::condition::{implied_inferences, ConditionInference, Inverted};
use crate::context::BiddingContext;
use crate::error::ConventionError;
use crate::registry::{Convention, ConventionRegistry};
use crate::tree::{evaluate_tree, flatten_tree, FlatRule};
use bridge_core::{Auction, Call, Position};
use once_cell::sync::OnceCell;
use std::sync::Arc;
use tracing::debug;

struct Cached {
    convention: Arc<Convention>,
    rules: Vec<FlatRule>,
}

/// Reads calls through one convention's rule tree.
///
/// The convention is looked up and flattened on first successful lookup and
/// kept for the provider's lifetime. While the id is unknown every reading
/// comes back empty, and the lookup is retried on the next call.
pub struct ConventionProvider {
    convention_id: String,
    label: String,
    registry: Arc<dyn ConventionRegistry>,
    cache: OnceCell<Cached>,
}

impl ConventionProvider {
    pub fn new(convention_id: impl Into<String>, registry: Arc<dyn ConventionRegistry>) -> Self {
        let convention_id = convention_id.into();
        Self {
            label: format!("convention:{}", convention_id),
            convention_id,
            registry,
            cache: OnceCell::new(),
        }
    }

    fn cached(&self) -> Option<&Cached> {
        self.cache
            .get_or_try_init(|| {
                let Some(convention) = self.registry.lookup(&self.convention_id) else {
                    debug!(convention = %self.convention_id, "convention not registered");
                    return Err(());
                };
                let rules = flatten_tree(&convention.tree);
                debug!(convention = %self.convention_id, rules = rules.len(), "flattened convention");
                Ok(Cached { convention, rules })
            })
            .ok()
    }

    /// Bounds shown by the first rule that makes `call` in this auction.
    fn positive(&self, cached: &Cached, call: Call, ctx: &BiddingContext) -> Option<HandInference> {
        let rule = cached.rules.iter().find(|rule| {
            let call_matches = match rule.call(ctx) {
                Ok(probed) => probed == call,
                // The probe hand is empty; a call that depends on it is unknown.
                Err(err) => {
                    debug!(rule = %rule.name, %err, "probe call failed");
                    true
                }
            };
            call_matches && rule.auction_matches(ctx)
        })?;

        let mut inference = HandInference::new(ctx.seat, format!("{}:{}", self.label, rule.name));
        for descriptor in rule
            .hand_conditions
            .iter()
            .flat_map(|c| implied_inferences(c.as_ref()))
        {
            inference.apply(&descriptor);
        }
        Some(inference)
    }
}

/// Pick the first branch of an inverted disjunction that does not
/// contradict what is already known. `None` when every branch does.
pub fn resolve_disjunction(
    accumulated: &HandInference,
    branches: &[ConditionInference],
) -> Option<ConditionInference> {
    branches
        .iter()
        .find(|branch| {
            let mut trial = accumulated.clone();
            trial.apply(branch) && trial.is_consistent()
        })
        .cloned()
}

impl InferenceProvider for ConventionProvider {
    fn name(&self) -> &str {
        &self.label
    }

    fn infer_from_bid(
        &self,
        call: Call,
        auction_before: &Auction,
        seat: Position,
    ) -> Result<Option<HandInference>, ConventionError> {
        let Some(cached) = self.cached() else {
            return Ok(None);
        };
        let ctx = BiddingContext::probe(auction_before.clone(), seat);

        let positive = self.positive(cached, call, &ctx);
        let negative_source = format!("{}:negative", self.label);
        let source = positive
            .as_ref()
            .map_or_else(|| negative_source.clone(), |p| p.source.clone());
        // Each inverted decision is its own contribution, combined after the
        // positive reading so crossed bounds follow the merge rules.
        let mut parts: Vec<HandInference> = positive.iter().cloned().collect();

        // Only auction decisions: the probe hand is empty, so hand decisions
        // were rejected for no reason that applies to the real caller.
        let mut negative = false;
        let result = evaluate_tree(&cached.convention.tree, &ctx);
        for entry in result
            .rejected_decisions
            .iter()
            .filter(|e| e.node.condition.is_auction())
        {
            let Some(descriptor) = entry.node.condition.inference() else {
                continue;
            };
            let chosen = match descriptor.invert() {
                Inverted::Nothing => None,
                Inverted::Definite(inverse) => Some(inverse),
                Inverted::Disjunction(branches) => {
                    let known = combine_inferences(seat, source.as_str(), &parts);
                    resolve_disjunction(&known, &branches)
                }
            };
            if let Some(inverse) = chosen {
                let mut part = HandInference::new(seat, negative_source.as_str());
                if part.apply(&inverse) {
                    negative = true;
                    parts.push(part);
                }
            }
        }

        if positive.is_none() && !negative {
            return Ok(None);
        }
        Ok(Some(combine_inferences(seat, source, &parts)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::condition::{
        hcp_min, partner_opened, suit_min, Condition, ConditionCategory, ConditionRef,
    };
    use crate::inference::{InferenceConfig, InferenceEngine, Range};
    use crate::registry::InMemoryRegistry;
    use crate::tree::RuleNode;
    use bridge_core::{Strain, Suit};

    /// An auction condition that carries an HCP range, standing in for
    /// conditions like "partner is a passed hand".
    #[derive(Debug)]
    struct PartnerRange(u8, u8, bool);
    impl Condition for PartnerRange {
        fn name(&self) -> String {
            format!("partner-range-{}-{}", self.0, self.1)
        }
        fn test(&self, _ctx: &BiddingContext) -> bool {
            self.2
        }
        fn describe(&self, _ctx: &BiddingContext) -> String {
            "fixed".to_string()
        }
        fn category(&self) -> Option<ConditionCategory> {
            Some(ConditionCategory::Auction)
        }
        fn inference(&self) -> Option<ConditionInference> {
            Some(ConditionInference::HcpRange {
                min: self.0,
                max: self.1,
            })
        }
    }

    /// An auction condition that always fails and carries an HCP floor.
    #[derive(Debug)]
    struct FailedFloor(u8);
    impl Condition for FailedFloor {
        fn name(&self) -> String {
            format!("failed-floor-{}", self.0)
        }
        fn test(&self, _ctx: &BiddingContext) -> bool {
            false
        }
        fn describe(&self, _ctx: &BiddingContext) -> String {
            "never".to_string()
        }
        fn category(&self) -> Option<ConditionCategory> {
            Some(ConditionCategory::Auction)
        }
        fn inference(&self) -> Option<ConditionInference> {
            Some(ConditionInference::HcpMin { min: self.0 })
        }
    }

    fn denied_floor_then_strong() -> RuleNode {
        let floor: ConditionRef = Arc::new(FailedFloor(12));
        RuleNode::decision(
            "floor",
            floor,
            RuleNode::bid("unreachable", Call::bid(1, Strain::NoTrump)),
            RuleNode::decision(
                "strong",
                hcp_min(13),
                RuleNode::bid("strong-clubs", Call::bid(2, Strain::Clubs)),
                RuleNode::fallback(),
            ),
        )
    }

    fn provider_for(tree: RuleNode) -> ConventionProvider {
        let registry = InMemoryRegistry::new();
        registry.register(Convention::new("test", "Test", tree));
        ConventionProvider::new("test", Arc::new(registry))
    }

    fn one_nt_answers() -> RuleNode {
        RuleNode::decision(
            "after-1nt",
            partner_opened(Call::bid(1, Strain::NoTrump)),
            RuleNode::decision(
                "values",
                hcp_min(8),
                RuleNode::decision(
                    "hearts",
                    suit_min(Suit::Hearts, 5),
                    RuleNode::bid("hearts", Call::bid(3, Strain::Hearts)),
                    RuleNode::bid("game", Call::bid(3, Strain::NoTrump)),
                ),
                RuleNode::fallback(),
            ),
            RuleNode::fallback(),
        )
    }

    #[test]
    fn test_positive_inference_from_matching_rule() {
        let provider = provider_for(one_nt_answers());
        let auction = Auction::parse(Position::North, "1N P").unwrap();
        let inference = provider
            .infer_from_bid(Call::bid(3, Strain::Hearts), &auction, Position::South)
            .unwrap()
            .unwrap();
        assert_eq!(inference.min_hcp, Some(8));
        assert_eq!(inference.suit(Suit::Hearts).min_length, Some(5));
        assert_eq!(inference.source, "convention:test:hearts");
    }

    #[test]
    fn test_negated_hand_condition_carries_nothing() {
        let provider = provider_for(one_nt_answers());
        let auction = Auction::parse(Position::North, "1N P").unwrap();
        let inference = provider
            .infer_from_bid(Call::bid(3, Strain::NoTrump), &auction, Position::South)
            .unwrap()
            .unwrap();
        assert_eq!(inference.min_hcp, Some(8));
        assert_eq!(inference.suit(Suit::Hearts).max_length, None);
    }

    #[test]
    fn test_auction_mismatch_yields_none() {
        let provider = provider_for(one_nt_answers());
        let auction = Auction::parse(Position::North, "1S P").unwrap();
        let result = provider
            .infer_from_bid(Call::bid(3, Strain::Hearts), &auction, Position::South)
            .unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_unknown_convention_yields_none() {
        let provider = ConventionProvider::new("missing", Arc::new(InMemoryRegistry::new()));
        let auction = Auction::parse(Position::North, "1N P").unwrap();
        let result = provider
            .infer_from_bid(Call::bid(2, Strain::Clubs), &auction, Position::South)
            .unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_failing_probe_does_not_filter_rule() {
        let tree = RuleNode::decision(
            "after-1nt",
            partner_opened(Call::bid(1, Strain::NoTrump)),
            RuleNode::decision(
                "values",
                hcp_min(10),
                RuleNode::bid_with("needs-cards", |ctx: &BiddingContext| {
                    if ctx.hand.cards.is_empty() {
                        Err(ConventionError::CallUnavailable {
                            bid: "needs-cards".to_string(),
                            reason: "no hand".to_string(),
                        })
                    } else {
                        Ok(Call::bid(3, Strain::NoTrump))
                    }
                }),
                RuleNode::fallback(),
            ),
            RuleNode::fallback(),
        );
        let provider = provider_for(tree);
        let auction = Auction::parse(Position::North, "1N P").unwrap();
        let inference = provider
            .infer_from_bid(Call::bid(3, Strain::NoTrump), &auction, Position::South)
            .unwrap()
            .unwrap();
        assert_eq!(inference.min_hcp, Some(10));
    }

    #[test]
    fn test_negative_inference_from_rejected_auction_decision() {
        let range: ConditionRef = Arc::new(PartnerRange(10, 12, false));
        let tree = RuleNode::decision(
            "range",
            range,
            RuleNode::bid("in-range", Call::bid(2, Strain::NoTrump)),
            RuleNode::bid("outside", Call::bid(3, Strain::NoTrump)),
        );
        let provider = provider_for(tree);
        let auction = Auction::new(Position::North);
        let inference = provider
            .infer_from_bid(Call::bid(3, Strain::NoTrump), &auction, Position::North)
            .unwrap()
            .unwrap();
        // No accumulated HCP: the first branch of {max 9} or {min 13} fits.
        assert_eq!(inference.max_hcp, Some(9));
        assert_eq!(inference.min_hcp, None);
    }

    #[test]
    fn test_negative_only_inference_when_nothing_matched() {
        let range: ConditionRef = Arc::new(PartnerRange(0, 7, false));
        let tree = RuleNode::decision(
            "range",
            range,
            RuleNode::bid("weak", Call::Pass),
            RuleNode::fallback(),
        );
        let provider = provider_for(tree);
        let inference = provider
            .infer_from_bid(Call::bid(1, Strain::Spades), &Auction::new(Position::East), Position::East)
            .unwrap()
            .unwrap();
        assert_eq!(inference.min_hcp, Some(8));
        assert_eq!(inference.source, "convention:test:negative");
    }

    #[test]
    fn test_crossed_negative_bound_stays_consistent() {
        let provider = provider_for(denied_floor_then_strong());
        let inference = provider
            .infer_from_bid(Call::bid(2, Strain::Clubs), &Auction::new(Position::North), Position::North)
            .unwrap()
            .unwrap();
        assert!(inference.is_consistent());
        assert_eq!(inference.min_hcp, None);
        assert_eq!(inference.max_hcp, Some(11));
        assert_eq!(inference.source, "convention:test:strong-clubs");
    }

    #[test]
    fn test_engine_does_not_invent_exact_hcp() {
        let provider: Arc<dyn InferenceProvider> =
            Arc::new(provider_for(denied_floor_then_strong()));
        let mut engine =
            InferenceEngine::new(InferenceConfig::new(provider.clone(), provider), Position::North);
        engine.process_bid(Call::bid(2, Strain::Clubs), &Auction::new(Position::North));
        assert_eq!(engine.get_inferences()[&Position::North].hcp, Range::new(0, 11));
    }

    #[test]
    fn test_late_registration_is_seen() {
        let registry = Arc::new(InMemoryRegistry::new());
        let provider = ConventionProvider::new("test", registry.clone());
        let auction = Auction::parse(Position::North, "1N P").unwrap();
        let call = Call::bid(3, Strain::Hearts);
        assert!(provider
            .infer_from_bid(call, &auction, Position::South)
            .unwrap()
            .is_none());

        registry.register(Convention::new("test", "Test", one_nt_answers()));
        let inference = provider
            .infer_from_bid(call, &auction, Position::South)
            .unwrap()
            .unwrap();
        assert_eq!(inference.min_hcp, Some(8));
    }

    #[test]
    fn test_resolve_disjunction() {
        let branches = vec![
            ConditionInference::HcpMax { max: 9 },
            ConditionInference::HcpMin { min: 13 },
        ];
        let strong = HandInference::new(Position::South, "acc").with_min_hcp(16);
        assert_eq!(
            resolve_disjunction(&strong, &branches),
            Some(ConditionInference::HcpMin { min: 13 })
        );
        let boxed_in = HandInference::new(Position::South, "acc")
            .with_min_hcp(10)
            .with_max_hcp(12);
        assert_eq!(resolve_disjunction(&boxed_in, &branches), None);
        let weak = HandInference::new(Position::South, "acc").with_max_hcp(6);
        assert_eq!(
            resolve_disjunction(&weak, &branches),
            Some(ConditionInference::HcpMax { max: 9 })
        );
    }

    #[test]
    fn test_flattening_happens_once() {
        let provider = provider_for(one_nt_answers());
        let auction = Auction::parse(Position::North, "1N P").unwrap();
        for _ in 0..3 {
            provider
                .infer_from_bid(Call::bid(3, Strain::Hearts), &auction, Position::South)
                .unwrap();
        }
        assert_eq!(provider.cached().map(|c| c.rules.len()), Some(2));
    }
}
