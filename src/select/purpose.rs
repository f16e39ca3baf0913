//! Selection prompt purposes and search rankings.

use serde::{Deserialize, Serialize};

use crate::core::CardId;

/// Why the external engine is asking for a selection.
///
/// The engine maps its prompt hints onto these purposes; each purpose has
/// its own heuristic. Hints the policy set does not rank arrive as `Other`
/// and fall back to input order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SelectPurpose {
    /// Pick combination material.
    Material,
    /// Pick a card to add from deck to hand.
    AddToHand,
    /// Pick cards to destroy.
    DestroyTarget,
    /// Any prompt hint this policy set does not rank. The raw hint code is
    /// kept for diagnostics.
    Other(u32),
}

/// Ranked list of cards worth adding to hand.
///
/// Content configuration for the add-to-hand heuristic: earlier entries are
/// wanted more. Cards not on the list rank below every listed card.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchPriority {
    ranked: Vec<CardId>,
}

impl SearchPriority {
    /// Create a ranking from most-wanted to least-wanted.
    #[must_use]
    pub fn new(ranked: impl IntoIterator<Item = CardId>) -> Self {
        Self {
            ranked: ranked.into_iter().collect(),
        }
    }

    /// Get a card's rank. Lower is more wanted; `None` means unranked.
    #[must_use]
    pub fn rank(&self, card: CardId) -> Option<usize> {
        self.ranked.iter().position(|&c| c == card)
    }

    /// Check whether a card appears on the list.
    #[must_use]
    pub fn is_ranked(&self, card: CardId) -> bool {
        self.ranked.contains(&card)
    }

    /// Iterate ranks from most-wanted to least-wanted.
    pub fn iter(&self) -> impl Iterator<Item = CardId> + '_ {
        self.ranked.iter().copied()
    }

    /// Number of ranked cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ranked.len()
    }

    /// Check whether the ranking is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ranked.is_empty()
    }
}
