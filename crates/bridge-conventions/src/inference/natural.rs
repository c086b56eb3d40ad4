use super::{HandInference, InferenceProvider};
use crate::error::ConventionError;
use bridge_core::call::ParseCallError;
use bridge_core::{Auction, Call, Position, Strain};
use serde::{Deserialize, Serialize};
use tracing::debug;

const STANDARD_THEORY: &str = include_str!("natural_theory.yaml");

/// A call written the way players write it, e.g. "1N" or "2C".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CallText(pub Call);

impl TryFrom<String> for CallText {
    type Error = ParseCallError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse().map(CallText)
    }
}

impl From<CallText> for String {
    fn from(call: CallText) -> Self {
        call.0.render()
    }
}

/// Which calls an entry covers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CallShape {
    Exact { calls: Vec<CallText> },
    /// A suit other than partner's opening suit, at this level.
    NewSuit { level: u8 },
    /// One level above partner's opening, in the same suit.
    Raise,
    Notrump { level: u8 },
    Pass,
}

impl CallShape {
    fn matches(&self, call: Call, opening: Option<Call>) -> bool {
        match (self, call) {
            (CallShape::Exact { calls }, call) => calls.iter().any(|c| c.0 == call),
            (CallShape::NewSuit { level }, Call::Bid { level: l, strain }) => {
                l == *level
                    && strain != Strain::NoTrump
                    && opening.and_then(|o| o.strain()) != Some(strain)
            }
            (CallShape::Raise, Call::Bid { level, strain }) => match opening {
                Some(Call::Bid {
                    level: opened,
                    strain: opened_strain,
                }) => opened_strain != Strain::NoTrump && strain == opened_strain && level == opened + 1,
                _ => false,
            },
            (CallShape::Notrump { level }, Call::Bid { level: l, strain }) => {
                l == *level && strain == Strain::NoTrump
            }
            (CallShape::Pass, Call::Pass) => true,
            _ => false,
        }
    }
}

/// What an entry's call shows. Suit lengths refer to the suit of the call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shows {
    pub min_hcp: Option<u8>,
    pub max_hcp: Option<u8>,
    pub balanced: Option<bool>,
    pub suit_min: Option<u8>,
    pub suit_max: Option<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TheoryEntry {
    pub name: String,
    /// Partner's opening bids this response applies to. Empty for openings.
    #[serde(default)]
    pub after: Vec<CallText>,
    pub call: CallShape,
    #[serde(default)]
    pub shows: Shows,
}

impl TheoryEntry {
    fn inference(&self, seat: Position, call: Call) -> HandInference {
        let mut inference = HandInference::new(seat, format!("natural:{}", self.name));
        inference.min_hcp = self.shows.min_hcp;
        inference.max_hcp = self.shows.max_hcp;
        inference.is_balanced = self.shows.balanced;
        if let Some(suit) = call.suit() {
            if let Some(min) = self.shows.suit_min {
                inference = inference.with_suit_min(suit, min);
            }
            if let Some(max) = self.shows.suit_max {
                inference = inference.with_suit_max(suit, max);
            }
        }
        inference
    }
}

/// Opening bids and first responses, as a lookup table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NaturalTheory {
    pub openings: Vec<TheoryEntry>,
    pub responses: Vec<TheoryEntry>,
}

impl NaturalTheory {
    pub fn from_yaml(yaml: &str) -> Result<Self, ConventionError> {
        let theory: NaturalTheory = serde_yaml::from_str(yaml)?;
        for entry in theory.openings.iter().chain(&theory.responses) {
            if let (Some(min), Some(max)) = (entry.shows.min_hcp, entry.shows.max_hcp) {
                if min > max {
                    return Err(ConventionError::InvalidTheory(format!(
                        "{}: min_hcp {} exceeds max_hcp {}",
                        entry.name, min, max
                    )));
                }
            }
        }
        Ok(theory)
    }
}

enum Situation {
    Opening,
    FirstResponse { opening: Call },
}

/// Where `seat` stands: opening the bidding, making a first uncontested
/// response to partner's opening, or somewhere the table does not cover.
fn situation(auction: &Auction, seat: Position) -> Option<Situation> {
    let Some((opener, opening)) = auction.opening() else {
        return Some(Situation::Opening);
    };
    let partner_bids = auction
        .calls_by(opener)
        .into_iter()
        .filter(|c| !c.is_pass())
        .count();
    let first_response = opener == seat.partner()
        && partner_bids == 1
        && !auction.player_has_acted(seat)
        && !auction.partnership_has_acted(seat.partnership().opponent());
    first_response.then_some(Situation::FirstResponse { opening })
}

/// Reads calls by a fixed natural table. Doubles, redoubles and anything
/// past the first response tell it nothing.
#[derive(Debug, Clone)]
pub struct NaturalProvider {
    theory: NaturalTheory,
}

impl NaturalProvider {
    pub fn new(theory: NaturalTheory) -> Self {
        Self { theory }
    }

    pub fn from_yaml(yaml: &str) -> Result<Self, ConventionError> {
        NaturalTheory::from_yaml(yaml).map(Self::new)
    }

    /// The built-in table.
    pub fn standard() -> Result<Self, ConventionError> {
        Self::from_yaml(STANDARD_THEORY)
    }

    pub fn theory(&self) -> &NaturalTheory {
        &self.theory
    }
}

impl InferenceProvider for NaturalProvider {
    fn name(&self) -> &str {
        "natural"
    }

    fn infer_from_bid(
        &self,
        call: Call,
        auction_before: &Auction,
        seat: Position,
    ) -> Result<Option<HandInference>, ConventionError> {
        if matches!(call, Call::Double | Call::Redouble) {
            return Ok(None);
        }
        let entry = match situation(auction_before, seat) {
            Some(Situation::Opening) => self
                .theory
                .openings
                .iter()
                .find(|e| e.call.matches(call, None)),
            Some(Situation::FirstResponse { opening }) => self.theory.responses.iter().find(|e| {
                e.after.iter().any(|a| a.0 == opening) && e.call.matches(call, Some(opening))
            }),
            None => None,
        };
        if let Some(entry) = entry {
            debug!(%seat, %call, entry = %entry.name, "natural reading");
        }
        Ok(entry.map(|e| e.inference(seat, call)))
    }
}
