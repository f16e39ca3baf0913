//! Per-turn flag map.
//!
//! Guard rules coordinate within a turn through named flags: "the combo
//! starter already resolved", "this card's effect is spent". All of it is
//! scratch state that a new turn wholesale invalidates.
//!
//! ## Values (i64 only)
//!
//! Flags store `i64`, with booleans as 0/1 and counters as plain integers.
//! Absent keys read as 0, so a fresh map answers every query with
//! "not yet".

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::CardId;

/// Named per-turn flags.
///
/// Reset wholesale at the start of each of the agent's turns. Nothing in
/// here survives a reset; rules that need cross-turn memory do not exist in
/// this engine.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct TurnFlags {
    flags: FxHashMap<String, i64>,
}

impl TurnFlags {
    /// Create an empty flag map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear every flag. Called once per agent-owned turn.
    pub fn reset(&mut self) {
        self.flags.clear();
    }

    /// Get a flag value with a default.
    #[must_use]
    pub fn get(&self, key: &str, default: i64) -> i64 {
        self.flags.get(key).copied().unwrap_or(default)
    }

    /// Set a flag value.
    pub fn set(&mut self, key: impl Into<String>, value: i64) {
        self.flags.insert(key.into(), value);
    }

    /// Check whether a flag is set (non-zero).
    #[must_use]
    pub fn is_set(&self, key: &str) -> bool {
        self.get(key, 0) != 0
    }

    /// Set a flag to 1.
    pub fn mark(&mut self, key: impl Into<String>) {
        self.set(key, 1);
    }

    /// Add a delta to a flag value.
    pub fn increment(&mut self, key: &str, delta: i64) {
        let current = self.get(key, 0);
        self.flags.insert(key.to_string(), current + delta);
    }

    /// Mark a card's effect as used this turn.
    pub fn mark_used(&mut self, card: CardId) {
        self.mark(Self::used_key(card));
    }

    /// Check whether a card's effect was used this turn.
    #[must_use]
    pub fn used_this_turn(&self, card: CardId) -> bool {
        self.is_set(&Self::used_key(card))
    }

    /// Number of flags currently set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.flags.len()
    }

    /// Check whether no flags are set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }

    fn used_key(card: CardId) -> String {
        format!("used:{}", card.raw())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_flags_read_zero() {
        let flags = TurnFlags::new();

        assert_eq!(flags.get("combo_started", 0), 0);
        assert!(!flags.is_set("combo_started"));
        assert!(!flags.used_this_turn(CardId::new(5)));
        assert!(flags.is_empty());
    }

    #[test]
    fn test_mark_and_query() {
        let mut flags = TurnFlags::new();

        flags.mark("combo_started");
        assert!(flags.is_set("combo_started"));
        assert_eq!(flags.get("combo_started", 0), 1);
    }

    #[test]
    fn test_increment() {
        let mut flags = TurnFlags::new();

        flags.increment("summons", 1);
        flags.increment("summons", 1);
        assert_eq!(flags.get("summons", 0), 2);

        flags.increment("summons", -2);
        assert_eq!(flags.get("summons", 0), 0);
    }

    #[test]
    fn test_used_this_turn() {
        let mut flags = TurnFlags::new();
        let card = CardId::new(16387555);

        assert!(!flags.used_this_turn(card));

        flags.mark_used(card);
        assert!(flags.used_this_turn(card));
        assert!(!flags.used_this_turn(CardId::new(1)));
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut flags = TurnFlags::new();
        flags.mark("combo_started");
        flags.increment("summons", 3);
        flags.mark_used(CardId::new(9));

        flags.reset();

        assert!(flags.is_empty());
        assert!(!flags.is_set("combo_started"));
        assert_eq!(flags.get("summons", 0), 0);
        assert!(!flags.used_this_turn(CardId::new(9)));
    }

    #[test]
    fn test_distinct_cards_distinct_flags() {
        let mut flags = TurnFlags::new();

        flags.mark_used(CardId::new(1));
        flags.mark_used(CardId::new(2));

        assert!(flags.used_this_turn(CardId::new(1)));
        assert!(flags.used_this_turn(CardId::new(2)));
        assert!(!flags.used_this_turn(CardId::new(3)));
        assert_eq!(flags.len(), 2);
    }
}
