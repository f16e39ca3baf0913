//! Card identity keys.
//!
//! Two layers of identity matter to an agent:
//!
//! - `CardId`: which card *definition* this is ("the" printing). Guard rules
//!   and search priorities are keyed by definition.
//! - `EntityId`: which physical *copy* this is, assigned by the external duel
//!   engine. Two copies of the same card in hand share a `CardId` but never
//!   an `EntityId`; selection heuristics deduplicate by entity.
//!
//! The engine never interprets either value - they are opaque stable keys.

use serde::{Deserialize, Serialize};

/// Unique identifier for a card definition.
///
/// Identifies the card's printing, not a specific copy in play.
/// Policy sets declare their own `CardId` constants; the engine only
/// compares them for equality.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Unique identifier for one physical card copy.
///
/// Assigned by the external duel engine; the agent treats it as opaque.
/// Used to deduplicate candidates and to test chain targeting, where the
/// specific copy matters and the printing does not.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntityId(pub u32);

impl EntityId {
    /// Create a new entity ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Entity({})", self.0)
    }
}

/// Broad card category.
///
/// The deploy-orientation hook needs to know whether a candidate is a
/// monster; guards may branch on it too. Finer typing (levels, attributes,
/// subtypes) stays in the external engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardKind {
    /// A monster card - deployable to the monster zone.
    Monster,
    /// A spell card.
    Spell,
    /// A trap card.
    Trap,
}

impl CardKind {
    /// Check whether this is a monster card.
    #[must_use]
    pub const fn is_monster(self) -> bool {
        matches!(self, CardKind::Monster)
    }
}
