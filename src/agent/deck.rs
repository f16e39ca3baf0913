//! Deck policy assembly.

use crate::policy::PolicyRegistry;
use crate::select::SearchPriority;

use super::hooks::AgentHooks;

/// Everything that makes one deck's strategy: the rule table, the search
/// ranking, and the out-of-band hooks.
///
/// A `DeckPolicy` is pure content configuration. Content modules build one
/// in a `deck()` constructor; the engine never inspects it beyond lookups.
#[derive(Debug)]
pub struct DeckPolicy {
    /// Policy set name (for tracing and diagnostics).
    pub name: String,

    /// The ordered rule table.
    pub registry: PolicyRegistry,

    /// Ranked add-to-hand wants.
    pub search_priority: SearchPriority,

    /// Opening and position hooks.
    pub hooks: AgentHooks,
}

impl DeckPolicy {
    /// Create an empty policy set with default hooks.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            registry: PolicyRegistry::new(),
            search_priority: SearchPriority::default(),
            hooks: AgentHooks::default(),
        }
    }

    /// Set the search ranking (builder pattern).
    #[must_use]
    pub fn with_search_priority(mut self, priority: SearchPriority) -> Self {
        self.search_priority = priority;
        self
    }

    /// Set the hooks (builder pattern).
    #[must_use]
    pub fn with_hooks(mut self, hooks: AgentHooks) -> Self {
        self.hooks = hooks;
        self
    }
}
