mod stayman;

pub use stayman::{stayman, STAYMAN_ID};

use crate::registry::InMemoryRegistry;

/// A registry holding every built-in convention.
pub fn builtin_registry() -> InMemoryRegistry {
    let registry = InMemoryRegistry::new();
    registry.register(stayman());
    registry
}
