use crate::suit::{Strain, Suit};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A single call in an auction.
///
/// Serialized internally tagged, e.g. `{"type":"bid","level":1,"strain":"C"}`
/// or `{"type":"pass"}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Call {
    Pass,
    Double,
    Redouble,
    Bid { level: u8, strain: Strain },
}

impl Call {
    pub fn bid(level: u8, strain: Strain) -> Self {
        Call::Bid { level, strain }
    }

    pub fn is_bid(&self) -> bool {
        matches!(self, Call::Bid { .. })
    }

    pub fn is_pass(&self) -> bool {
        matches!(self, Call::Pass)
    }

    /// Returns the level of this call, if it's a bid.
    pub fn level(&self) -> Option<u8> {
        match self {
            Call::Bid { level, .. } => Some(*level),
            _ => None,
        }
    }

    /// Returns the strain of this call, if it's a bid.
    pub fn strain(&self) -> Option<Strain> {
        match self {
            Call::Bid { strain, .. } => Some(*strain),
            _ => None,
        }
    }

    /// Returns the suit of this call, if it's a suited bid.
    pub fn suit(&self) -> Option<Suit> {
        self.strain().and_then(Strain::to_suit)
    }

    pub fn render(self) -> String {
        match self {
            Call::Pass => "P".to_string(),
            Call::Double => "X".to_string(),
            Call::Redouble => "XX".to_string(),
            Call::Bid { level, strain } => format!("{}{}", level, strain.to_char()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseCallError(pub String);

impl fmt::Display for ParseCallError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid call '{}'", self.0)
    }
}

impl std::error::Error for ParseCallError {}

impl FromStr for Call {
    type Err = ParseCallError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim().to_ascii_uppercase();
        match token.as_str() {
            "P" | "PASS" => return Ok(Call::Pass),
            "X" | "DBL" | "DOUBLE" => return Ok(Call::Double),
            "XX" | "RDBL" | "REDOUBLE" => return Ok(Call::Redouble),
            _ => {}
        }
        let mut chars = token.chars();
        let level = chars
            .next()
            .and_then(|c| c.to_digit(10))
            .map(|d| d as u8)
            .filter(|l| (1..=7).contains(l));
        let strain = chars.next().and_then(Strain::from_char);
        // "NT" is the only two-letter strain spelling.
        let rest: String = chars.collect();
        match (level, strain, rest.as_str()) {
            (Some(level), Some(strain), "") => Ok(Call::Bid { level, strain }),
            (Some(level), Some(Strain::NoTrump), "T") => Ok(Call::Bid {
                level,
                strain: Strain::NoTrump,
            }),
            _ => Err(ParseCallError(s.to_string())),
        }
    }
}

impl fmt::Display for Call {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render())
    }
}
