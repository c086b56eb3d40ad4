use super::{HandInference, InferenceProvider};
use crate::error::ConventionError;
use bridge_core::{Auction, Call, Position};
use std::sync::Arc;
use tracing::debug;

/// Asks providers in order and keeps the first reading. Lets a partnership
/// read its conventions first and fall back to natural theory. A member
/// that fails counts as having no reading.
pub struct ChainProvider {
    label: String,
    providers: Vec<Arc<dyn InferenceProvider>>,
}

impl ChainProvider {
    pub fn new(providers: Vec<Arc<dyn InferenceProvider>>) -> Self {
        let names: Vec<&str> = providers.iter().map(|p| p.name()).collect();
        Self {
            label: names.join("+"),
            providers,
        }
    }
}

impl InferenceProvider for ChainProvider {
    fn name(&self) -> &str {
        &self.label
    }

    fn infer_from_bid(
        &self,
        call: Call,
        auction_before: &Auction,
        seat: Position,
    ) -> Result<Option<HandInference>, ConventionError> {
        for provider in &self.providers {
            match provider.infer_from_bid(call, auction_before, seat) {
                Ok(Some(inference)) => return Ok(Some(inference)),
                Ok(None) => {}
                Err(err) => {
                    debug!(%seat, %call, provider = provider.name(), %err, "chain member failed")
                }
            }
        }
        Ok(None)
    }
}
