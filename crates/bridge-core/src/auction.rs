use crate::board::{Partnership, Position};
use crate::call::{Call, ParseCallError};
use serde::{Deserialize, Serialize};

/// The calls made so far, starting with the dealer.
///
/// The seat of each call is implied by its index: iterate with
/// [`Auction::iter`] to get `(seat, call)` entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Auction {
    pub dealer: Position,
    pub calls: Vec<Call>,
}

impl Auction {
    pub fn new(dealer: Position) -> Self {
        Self {
            dealer,
            calls: Vec::new(),
        }
    }

    /// Build an auction from space-separated calls like "1N P 2C P".
    pub fn parse(dealer: Position, calls: &str) -> Result<Self, ParseCallError> {
        let mut auction = Self::new(dealer);
        for token in calls.split_whitespace() {
            auction.add_call(token.parse()?);
        }
        Ok(auction)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Position, &Call)> {
        let mut p = self.dealer;
        self.calls.iter().map(move |call| {
            let pos = p;
            p = p.next();
            (pos, call)
        })
    }

    pub fn add_call(&mut self, call: Call) {
        self.calls.push(call);
    }

    pub fn len(&self) -> usize {
        self.calls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.calls.is_empty()
    }

    /// The auction as it stood before call `index` was made.
    pub fn prefix(&self, index: usize) -> Self {
        Self {
            dealer: self.dealer,
            calls: self.calls[..index.min(self.calls.len())].to_vec(),
        }
    }

    /// The seat due to call next.
    pub fn current_player(&self) -> Position {
        let mut p = self.dealer;
        for _ in 0..self.calls.len() {
            p = p.next();
        }
        p
    }

    pub fn is_open(&self) -> bool {
        self.calls.iter().any(Call::is_bid)
    }

    /// The seat that made the first contract bid, and that bid.
    pub fn opening(&self) -> Option<(Position, Call)> {
        self.iter()
            .find(|(_, call)| call.is_bid())
            .map(|(position, call)| (position, *call))
    }

    pub fn opener(&self) -> Option<Position> {
        self.opening().map(|(position, _)| position)
    }

    /// Returns the last bid (not pass/double/redouble) and who made it.
    pub fn last_bid(&self) -> Option<(Position, &Call)> {
        self.iter().filter(|(_, call)| call.is_bid()).last()
    }

    /// All calls made by one seat, in order.
    pub fn calls_by(&self, position: Position) -> Vec<Call> {
        self.iter()
            .filter(|(pos, _)| *pos == position)
            .map(|(_, call)| *call)
            .collect()
    }

    /// Returns true if a player has made any non-Pass call (bid, double, or redouble).
    pub fn player_has_acted(&self, player: Position) -> bool {
        self.iter()
            .any(|(pos, call)| pos == player && !call.is_pass())
    }

    /// Returns true if a partnership has made any non-Pass call.
    pub fn partnership_has_acted(&self, partnership: Partnership) -> bool {
        self.iter()
            .any(|(pos, call)| pos.partnership() == partnership && !call.is_pass())
    }
}
