//! Duel locations, sides, and battle positions.

use serde::{Deserialize, Serialize};

/// Where a card currently sits.
///
/// Fixed duel layout rather than game-configured zones: guard rules are
/// written against these locations directly ("is it still in hand", "is the
/// combiner in the extra deck").
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Zone {
    /// Face-down draw pile.
    Deck,
    /// Cards held by a player.
    Hand,
    /// Deployed monsters.
    MonsterZone,
    /// Set or activated spells and traps.
    SpellZone,
    /// Discard pile, face-up.
    Graveyard,
    /// Removed from play.
    Banished,
    /// Side pile holding combined monsters before they are deployed.
    ExtraDeck,
}

impl Zone {
    /// Check whether this zone is on the board (publicly deployed).
    #[must_use]
    pub const fn is_board(self) -> bool {
        matches!(self, Zone::MonsterZone | Zone::SpellZone)
    }
}

/// Which side of the duel a card or view belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Controller {
    /// The side this engine is deciding for.
    Agent,
    /// The opposing side.
    Opponent,
}

impl Controller {
    /// Get the other side.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Controller::Agent => Controller::Opponent,
            Controller::Opponent => Controller::Agent,
        }
    }
}

/// Battle position of a deployed monster.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Position {
    /// Face-up, attacking orientation.
    FaceUpAttack,
    /// Face-up, defending orientation.
    FaceUpDefense,
    /// Face-down, defending orientation.
    FaceDownDefense,
}
