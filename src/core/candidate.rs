//! Action and selection candidates.
//!
//! A `Candidate` is the engine's snapshot of one card copy offered for a
//! decision: activate it, use it as material, destroy it. The external duel
//! engine builds candidates when it asks for a decision; the agent never
//! mutates them.

use serde::{Deserialize, Serialize};

use super::card::{CardId, CardKind, EntityId};
use super::zone::{Controller, Position, Zone};

/// One card copy offered for a decision.
///
/// Carries just enough to evaluate guards and selection heuristics:
/// identity, location, and side. Stats and effect text live in the
/// external engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Candidate {
    /// This specific copy.
    pub entity: EntityId,

    /// The card definition it prints.
    pub card: CardId,

    /// Broad card category.
    pub kind: CardKind,

    /// Where the copy currently sits.
    pub zone: Zone,

    /// Whose side it is on.
    pub controller: Controller,

    /// Battle position, if deployed to a monster zone.
    pub position: Option<Position>,
}

impl Candidate {
    /// Create a candidate for one of the agent's own cards.
    #[must_use]
    pub const fn own(entity: EntityId, card: CardId, kind: CardKind, zone: Zone) -> Self {
        Self {
            entity,
            card,
            kind,
            zone,
            controller: Controller::Agent,
            position: None,
        }
    }

    /// Create a candidate for an opponent's card.
    #[must_use]
    pub const fn opposing(entity: EntityId, card: CardId, kind: CardKind, zone: Zone) -> Self {
        Self {
            entity,
            card,
            kind,
            zone,
            controller: Controller::Opponent,
            position: None,
        }
    }

    /// Set the battle position.
    #[must_use]
    pub const fn with_position(mut self, position: Position) -> Self {
        self.position = Some(position);
        self
    }

    /// Check whether the copy belongs to the opponent.
    #[must_use]
    pub const fn is_opposing(&self) -> bool {
        matches!(self.controller, Controller::Opponent)
    }

    /// Check whether the copy sits in the given zone.
    #[must_use]
    pub fn in_zone(&self, zone: Zone) -> bool {
        self.zone == zone
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_candidate_own() {
        let c = Candidate::own(EntityId(3), CardId::new(9), CardKind::Monster, Zone::Hand);

        assert_eq!(c.entity, EntityId(3));
        assert_eq!(c.card, CardId::new(9));
        assert_eq!(c.controller, Controller::Agent);
        assert!(!c.is_opposing());
        assert!(c.in_zone(Zone::Hand));
        assert!(c.position.is_none());
    }

    #[test]
    fn test_candidate_opposing() {
        let c = Candidate::opposing(EntityId(5), CardId::new(2), CardKind::Spell, Zone::SpellZone);

        assert!(c.is_opposing());
        assert!(c.in_zone(Zone::SpellZone));
    }

    #[test]
    fn test_candidate_with_position() {
        let c = Candidate::own(EntityId(1), CardId::new(4), CardKind::Monster, Zone::MonsterZone)
            .with_position(Position::FaceUpAttack);

        assert_eq!(c.position, Some(Position::FaceUpAttack));
    }
}
