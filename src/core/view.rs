//! Read-only duel snapshots.
//!
//! The external duel engine owns the real board state. When it asks for a
//! decision it hands over a `DuelView`: turn progression, both sides' visible
//! zone contents, and the current chain context. Guards read the view and
//! nothing else about the duel.
//!
//! Zone contents are card definitions (`CardId`), not copies: guards ask
//! "do I control a combiner" and "is the payoff still in the extra deck",
//! never "which copy". Copy identity only matters for candidates.

use serde::{Deserialize, Serialize};

use super::card::{CardId, EntityId};
use super::phase::Phase;
use super::zone::Controller;

/// Visible zone contents for one side of the duel.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SideView {
    /// Cards in hand. Opponent hands are only as known as the external
    /// engine chooses to reveal.
    pub hand: Vec<CardId>,

    /// Deployed monsters.
    pub monster_zone: Vec<CardId>,

    /// Set or active spells and traps.
    pub spell_zone: Vec<CardId>,

    /// Graveyard, face-up.
    pub graveyard: Vec<CardId>,

    /// Banished cards.
    pub banished: Vec<CardId>,

    /// Combined monsters waiting in the extra deck.
    pub extra_deck: Vec<CardId>,

    /// Remaining cards in the deck.
    pub deck_count: usize,
}

impl SideView {
    /// Check whether a card is in this side's hand.
    #[must_use]
    pub fn has_in_hand(&self, card: CardId) -> bool {
        self.hand.contains(&card)
    }

    /// Check whether a card is deployed in this side's monster zone.
    #[must_use]
    pub fn has_in_monster_zone(&self, card: CardId) -> bool {
        self.monster_zone.contains(&card)
    }

    /// Check whether a card sits in this side's spell zone.
    #[must_use]
    pub fn has_in_spell_zone(&self, card: CardId) -> bool {
        self.spell_zone.contains(&card)
    }

    /// Check whether a card is in this side's graveyard.
    #[must_use]
    pub fn has_in_graveyard(&self, card: CardId) -> bool {
        self.graveyard.contains(&card)
    }

    /// Check whether a card waits in this side's extra deck.
    #[must_use]
    pub fn has_in_extra_deck(&self, card: CardId) -> bool {
        self.extra_deck.contains(&card)
    }

    /// Number of deployed monsters.
    #[must_use]
    pub fn monster_count(&self) -> usize {
        self.monster_zone.len()
    }

    /// Number of cards in the spell zone.
    #[must_use]
    pub fn spell_count(&self) -> usize {
        self.spell_zone.len()
    }

    /// Number of cards waiting in the extra deck.
    #[must_use]
    pub fn extra_deck_count(&self) -> usize {
        self.extra_deck.len()
    }
}

/// Complete decision-time snapshot of the duel.
///
/// Built fresh by the external engine for every decision callback. The agent
/// borrows it for the duration of one call and retains nothing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DuelView {
    /// Turn number (starts at 1).
    pub turn: u32,

    /// Current phase of the turn.
    pub phase: Phase,

    /// Whose turn it is.
    pub turn_player: Controller,

    /// The agent's side.
    pub me: SideView,

    /// The opponent's side.
    pub opponent: SideView,

    /// Card definition of the most recent chain link, if a chain is
    /// resolving.
    pub last_chain_card: Option<CardId>,

    /// Copies currently targeted by the resolving chain.
    pub chain_targets: Vec<EntityId>,
}

impl DuelView {
    /// Create an empty snapshot at the given point in the duel.
    #[must_use]
    pub fn new(turn: u32, phase: Phase, turn_player: Controller) -> Self {
        Self {
            turn,
            phase,
            turn_player,
            me: SideView::default(),
            opponent: SideView::default(),
            last_chain_card: None,
            chain_targets: Vec::new(),
        }
    }

    /// Get one side of the duel.
    #[must_use]
    pub fn side(&self, controller: Controller) -> &SideView {
        match controller {
            Controller::Agent => &self.me,
            Controller::Opponent => &self.opponent,
        }
    }

    /// Check whether it is the agent's turn.
    #[must_use]
    pub fn my_turn(&self) -> bool {
        self.turn_player == Controller::Agent
    }

    /// Check whether a specific copy is targeted by the resolving chain.
    #[must_use]
    pub fn is_chain_target(&self, entity: EntityId) -> bool {
        self.chain_targets.contains(&entity)
    }
}
