use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConventionError {
    /// An auction-category decision sits below the first hand-category
    /// decision. The convention definition is malformed.
    #[error("auction condition '{condition}' appears inside the hand subtree")]
    InterleavedAuctionCondition { condition: String },

    #[error("a disjunction accepts at most {max} branches, got {got}")]
    TooManyBranches { max: usize, got: usize },

    #[error("bid '{bid}' cannot produce a call here: {reason}")]
    CallUnavailable { bid: String, reason: String },

    #[error("provider '{provider}' failed: {reason}")]
    Provider { provider: String, reason: String },

    #[error("natural theory table failed to parse: {0}")]
    Theory(#[from] serde_yaml::Error),

    #[error("natural theory table is invalid: {0}")]
    InvalidTheory(String),
}
