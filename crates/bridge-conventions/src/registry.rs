use crate::tree::RuleNode;
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};

/// A named convention and its rule tree.
pub struct Convention {
    pub id: String,
    pub name: String,
    pub tree: RuleNode,
}

impl Convention {
    pub fn new(id: impl Into<String>, name: impl Into<String>, tree: RuleNode) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            tree,
        }
    }
}

impl fmt::Debug for Convention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Convention")
            .field("id", &self.id)
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// Looks conventions up by id.
pub trait ConventionRegistry: Send + Sync {
    fn lookup(&self, id: &str) -> Option<Arc<Convention>>;
}

#[derive(Default)]
pub struct InMemoryRegistry {
    conventions: RwLock<HashMap<String, Arc<Convention>>>,
}

impl InMemoryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a convention, replacing any with the same id.
    pub fn register(&self, convention: Convention) {
        let mut conventions = self.conventions.write().unwrap_or_else(PoisonError::into_inner);
        conventions.insert(convention.id.clone(), Arc::new(convention));
    }

    pub fn ids(&self) -> Vec<String> {
        let conventions = self.conventions.read().unwrap_or_else(PoisonError::into_inner);
        let mut ids: Vec<String> = conventions.keys().cloned().collect();
        ids.sort();
        ids
    }
}

impl ConventionRegistry for InMemoryRegistry {
    fn lookup(&self, id: &str) -> Option<Arc<Convention>> {
        let conventions = self.conventions.read().unwrap_or_else(PoisonError::into_inner);
        conventions.get(id).cloned()
    }
}
