pub mod condition;
pub mod context;
pub mod conventions;
pub mod error;
pub mod inference;
pub mod registry;
pub mod tree;

pub use condition::{Condition, ConditionCategory, ConditionInference, ConditionRef};
pub use context::BiddingContext;
pub use error::ConventionError;
pub use inference::{
    ChainProvider, ConventionProvider, HandInference, InferenceConfig, InferenceEngine,
    InferenceProvider, InferredHoldings, NaturalProvider,
};
pub use registry::{Convention, ConventionRegistry, InMemoryRegistry};
pub use tree::{evaluate_tree, find_siblings, flatten_tree, RuleNode, SiblingBid, TreeEvalResult};
