//! Action categories and committed proposals.
//!
//! A decision callback names an action category and a candidate card; a
//! committed decision is a `ProposedAction` carrying whatever sub-choices
//! the winning guard staged. Staging is how a rule pre-answers the prompts
//! its action will raise: the combiner's materials, the search target, a
//! follow-up selection purpose.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::CardId;
use crate::select::SelectPurpose;

/// Category of action offered by the external engine.
///
/// Closed set: the registry keys on it, and a new category is an
/// intentional engine change, not content configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionKind {
    /// Deploy a monster from hand using the once-per-turn normal summon.
    NormalSummon,
    /// Activate a card or effect.
    Activate,
    /// Deploy a monster outside the normal summon (combination deploys).
    SpecialSummon,
}

/// Sub-choices staged by a guard for the action it approved.
///
/// ## Fields
///
/// - `picks`: ordered preference queue for upcoming card prompts; drained
///   front-first as prompts arrive.
/// - `materials`: the copies to feed a combination deploy.
/// - `followup`: the purpose the next selection prompt should be answered
///   under, when the engine's own hint is not specific enough.
///
/// SmallVec keeps the common 0-4 entry case off the heap.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StagedChoices {
    /// Ordered card preferences for upcoming prompts.
    pub picks: SmallVec<[CardId; 4]>,

    /// Materials for a combination deploy.
    pub materials: SmallVec<[CardId; 4]>,

    /// Purpose override for the next selection prompt.
    pub followup: Option<SelectPurpose>,
}

impl StagedChoices {
    /// Create an empty staging buffer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a card preference.
    pub fn push_pick(&mut self, card: CardId) {
        self.picks.push(card);
    }

    /// Append a material.
    pub fn push_material(&mut self, card: CardId) {
        self.materials.push(card);
    }

    /// Check whether nothing was staged.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.picks.is_empty() && self.materials.is_empty() && self.followup.is_none()
    }
}

/// A committed decision: do this action with this card, carrying the staged
/// sub-choices of the rule that approved it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProposedAction {
    /// The action category.
    pub kind: ActionKind,

    /// The card to act with.
    pub card: CardId,

    /// Sub-choices staged by the winning rule.
    pub staged: StagedChoices,
}

impl ProposedAction {
    /// Create a proposal with nothing staged.
    #[must_use]
    pub fn new(kind: ActionKind, card: CardId) -> Self {
        Self {
            kind,
            card,
            staged: StagedChoices::new(),
        }
    }
}
