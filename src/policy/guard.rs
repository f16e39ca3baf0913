//! Guard closures and their evaluation scope.
//!
//! A guard answers one question: should this rule's action happen for this
//! candidate, right now? It reads the duel snapshot, reads and writes the
//! per-turn flags, and may stage sub-choices for the action it is about to
//! approve.
//!
//! ## Discipline
//!
//! A guard that returns `false` must leave the turn flags as it found them;
//! flags only change on the approving path. The staging buffer needs no such
//! care: the orchestrator hands every evaluation a fresh buffer and discards
//! it unless the guard approves.

use crate::core::{Candidate, CardId, DuelView, SideView};
use crate::select::SelectPurpose;
use crate::turn::TurnFlags;

use super::action::StagedChoices;

/// A condition-guarded rule body.
///
/// Returns `true` to approve the action, `false` to pass to the next rule.
pub type GuardFn = Box<dyn Fn(&mut GuardScope<'_>) -> bool + Send + Sync>;

/// Everything a guard may look at or touch during one evaluation.
///
/// Borrowed for the duration of a single call; guards cannot retain any of
/// it.
pub struct GuardScope<'a> {
    /// The candidate under consideration.
    pub candidate: &'a Candidate,
    /// Read-only duel snapshot.
    pub view: &'a DuelView,
    /// Per-turn flags, shared across the turn's rules.
    pub flags: &'a mut TurnFlags,
    /// Staging buffer for the action being approved.
    pub staged: &'a mut StagedChoices,
}

impl<'a> GuardScope<'a> {
    /// Create a new scope.
    pub fn new(
        candidate: &'a Candidate,
        view: &'a DuelView,
        flags: &'a mut TurnFlags,
        staged: &'a mut StagedChoices,
    ) -> Self {
        Self {
            candidate,
            view,
            flags,
            staged,
        }
    }

    // === View shorthand ===

    /// The agent's side of the board.
    #[must_use]
    pub fn me(&self) -> &SideView {
        &self.view.me
    }

    /// The opponent's side of the board.
    #[must_use]
    pub fn opponent(&self) -> &SideView {
        &self.view.opponent
    }

    /// Check whether it is the agent's turn.
    #[must_use]
    pub fn my_turn(&self) -> bool {
        self.view.my_turn()
    }

    /// Check whether the resolving chain targets this very copy.
    #[must_use]
    pub fn targeted_by_chain(&self) -> bool {
        self.view.is_chain_target(self.candidate.entity)
    }

    // === Staging ===

    /// Stage one card preference for an upcoming prompt.
    pub fn stage_pick(&mut self, card: CardId) {
        self.staged.push_pick(card);
    }

    /// Stage several card preferences, most-preferred first.
    pub fn stage_picks(&mut self, cards: impl IntoIterator<Item = CardId>) {
        for card in cards {
            self.staged.push_pick(card);
        }
    }

    /// Stage the materials for a combination deploy.
    pub fn stage_materials(&mut self, cards: impl IntoIterator<Item = CardId>) {
        for card in cards {
            self.staged.push_material(card);
        }
    }

    /// Tag the next selection prompt with a purpose.
    pub fn stage_followup(&mut self, purpose: SelectPurpose) {
        self.staged.followup = Some(purpose);
    }
}
