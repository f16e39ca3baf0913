//! Policy rule registry.
//!
//! The registry is an ordered multimap from (action category, card
//! definition) to guard rules. Registration order *is* priority order:
//! within a pair, earlier rules are tried first, and the same pair may be
//! registered any number of times to form a try-this-then-that chain.
//! Rules are never removed; a policy set is built once and then only read.

use rustc_hash::FxHashMap;

use crate::core::CardId;

use super::action::ActionKind;
use super::guard::{GuardFn, GuardScope};

/// One registered rule: a guard with a debug label and its global
/// registration sequence number.
pub struct PolicyRule {
    /// Global registration order (0-based). Unique across the registry.
    pub seq: u32,

    /// Human-readable label (for tracing and diagnostics).
    pub name: String,

    /// The guard body.
    pub guard: GuardFn,
}

impl PolicyRule {
    /// Evaluate the guard in the given scope.
    #[must_use]
    pub fn eval(&self, scope: &mut GuardScope<'_>) -> bool {
        (self.guard)(scope)
    }
}

impl std::fmt::Debug for PolicyRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PolicyRule")
            .field("seq", &self.seq)
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// Ordered multimap of guard rules keyed by (category, card).
#[derive(Debug, Default)]
pub struct PolicyRegistry {
    rules: FxHashMap<(ActionKind, CardId), Vec<PolicyRule>>,
    next_seq: u32,
}

impl PolicyRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a rule, returns its global sequence number.
    ///
    /// Appends to the (category, card) chain: the rule ranks below every
    /// rule already registered for that pair.
    pub fn register<G>(
        &mut self,
        kind: ActionKind,
        card: CardId,
        name: impl Into<String>,
        guard: G,
    ) -> u32
    where
        G: Fn(&mut GuardScope<'_>) -> bool + Send + Sync + 'static,
    {
        self.register_boxed(kind, card, name, Box::new(guard))
    }

    /// Register a pre-built guard (from the stock builders).
    pub fn register_boxed(
        &mut self,
        kind: ActionKind,
        card: CardId,
        name: impl Into<String>,
        guard: GuardFn,
    ) -> u32 {
        let seq = self.next_seq;
        self.next_seq += 1;

        self.rules.entry((kind, card)).or_default().push(PolicyRule {
            seq,
            name: name.into(),
            guard,
        });

        seq
    }

    /// Get the ordered rule chain for a (category, card) pair.
    ///
    /// Empty slice when nothing is registered for the pair.
    #[must_use]
    pub fn rules(&self, kind: ActionKind, card: CardId) -> &[PolicyRule] {
        self.rules
            .get(&(kind, card))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Total number of registered rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.next_seq as usize
    }

    /// Check whether no rules are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.next_seq == 0
    }

    /// Iterate every rule, for diagnostics.
    ///
    /// Ordered within a (category, card) chain; chains themselves come in
    /// no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &PolicyRule> {
        self.rules.values().flatten()
    }
}
