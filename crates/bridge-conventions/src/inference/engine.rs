use super::{merge_inferences, HandInference, InferenceConfig, InferredHoldings};
use bridge_core::{Auction, Call, Position};
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// One processed call and the state of knowledge right after it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimelineEntry {
    pub seat: Position,
    pub call: Call,
    pub inference: Option<HandInference>,
    pub snapshot: BTreeMap<Position, InferredHoldings>,
}

/// Tracks what one observer can infer about every seat as an auction
/// unfolds.
///
/// Calls by the observer's partnership are read with the own-partnership
/// provider, the rest with the opponent provider. Feed calls in auction
/// order; one engine follows one auction.
#[derive(Debug)]
pub struct InferenceEngine {
    config: InferenceConfig,
    observer: Position,
    contributions: BTreeMap<Position, Vec<HandInference>>,
    timeline: Vec<TimelineEntry>,
}

impl InferenceEngine {
    pub fn new(config: InferenceConfig, observer: Position) -> Self {
        Self {
            config,
            observer,
            contributions: BTreeMap::new(),
            timeline: Vec::new(),
        }
    }

    pub fn observer(&self) -> Position {
        self.observer
    }

    /// Read `call`, made by the seat due to act after `prior`. A provider
    /// failure is logged and treated as no information.
    pub fn process_bid(&mut self, call: Call, prior: &Auction) -> Option<HandInference> {
        let seat = prior.current_player();
        let provider = if seat.is_partnered_with(self.observer) {
            &self.config.own_partnership
        } else {
            &self.config.opponent_partnership
        };

        let inference = match provider.infer_from_bid(call, prior, seat) {
            Ok(inference) => inference,
            Err(err) => {
                warn!(%seat, %call, provider = provider.name(), %err, "provider failed");
                None
            }
        };
        debug!(
            %seat,
            %call,
            provider = provider.name(),
            inferred = inference.is_some(),
            "processed call"
        );

        if let Some(inference) = &inference {
            self.contributions
                .entry(seat)
                .or_default()
                .push(inference.clone());
        }
        let snapshot = self.get_inferences();
        self.timeline.push(TimelineEntry {
            seat,
            call,
            inference: inference.clone(),
            snapshot,
        });
        inference
    }

    /// Process every call of `auction` in order.
    pub fn process_auction(&mut self, auction: &Auction) {
        for index in 0..auction.len() {
            let prior = auction.prefix(index);
            self.process_bid(auction.calls[index], &prior);
        }
    }

    /// Merged holdings for all four seats.
    pub fn get_inferences(&self) -> BTreeMap<Position, InferredHoldings> {
        Position::ALL
            .into_iter()
            .map(|seat| (seat, merge_inferences(seat, self.history(seat))))
            .collect()
    }

    /// Raw contributions recorded for one seat, oldest first.
    pub fn history(&self, seat: Position) -> &[HandInference] {
        self.contributions
            .get(&seat)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn timeline(&self) -> &[TimelineEntry] {
        &self.timeline
    }

    pub fn reset(&mut self) {
        self.contributions.clear();
        self.timeline.clear();
    }
}
