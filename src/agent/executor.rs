//! Decision orchestrator.
//!
//! `DuelAgent` is the single entry point the external duel engine talks to.
//! It owns a policy set and the per-turn flags, and resolves three kinds of
//! callback:
//!
//! - `decide`: may this action happen with this candidate? First approving
//!   rule wins; later rules are never evaluated for that decision.
//! - `select`: which of these candidates should the sub-choice take?
//! - the hooks: opening turn order and deploy orientation.
//!
//! The agent holds no duel state of its own. Every callback gets the full
//! context it needs and nothing is retained across calls except the turn
//! flags.

use tracing::{Level, event};

use crate::core::{Candidate, CardKind, DuelView, Position};
use crate::policy::{ActionKind, GuardScope, PolicyRule, ProposedAction, StagedChoices};
use crate::select::{SelectPurpose, heuristic};
use crate::turn::TurnFlags;

use super::deck::DeckPolicy;
use super::hooks::TurnOrder;

/// A policy-driven duel agent.
#[derive(Debug)]
pub struct DuelAgent {
    policy: DeckPolicy,
    flags: TurnFlags,
}

impl DuelAgent {
    /// Create an agent running the given policy set.
    #[must_use]
    pub fn new(policy: DeckPolicy) -> Self {
        Self {
            policy,
            flags: TurnFlags::new(),
        }
    }

    /// The policy set this agent runs.
    #[must_use]
    pub fn policy(&self) -> &DeckPolicy {
        &self.policy
    }

    /// The per-turn flags.
    #[must_use]
    pub fn flags(&self) -> &TurnFlags {
        &self.flags
    }

    /// Mutable access to the per-turn flags.
    ///
    /// Guards mutate flags through their scope; this is for harness and
    /// test setup.
    pub fn flags_mut(&mut self) -> &mut TurnFlags {
        &mut self.flags
    }

    /// Notification that one of the agent's turns has begun.
    ///
    /// Wholesale-resets the turn flags. The external engine drives this
    /// exactly once per agent-owned turn.
    pub fn on_new_turn(&mut self) {
        self.flags.reset();
        event!(target: "duelbot::turn", Level::DEBUG, deck = %self.policy.name);
    }

    /// Resolve one decision callback.
    ///
    /// Walks the rule chain registered for `(kind, candidate.card)` in
    /// registration order and commits to the first guard that approves,
    /// returning its staged sub-choices. Later rules are not evaluated.
    /// `None` when no rule approves (or none is registered); the decision
    /// itself mutates nothing on that path.
    ///
    /// Each guard evaluates against a fresh staging buffer, so whatever a
    /// declining guard staged is discarded rather than leaking into a later
    /// rule's commit.
    ///
    /// Tie-breaks across candidates stay with the caller: the external
    /// engine asks once per candidate in its own order and takes the first
    /// commit.
    pub fn decide(
        &mut self,
        kind: ActionKind,
        candidate: &Candidate,
        view: &DuelView,
    ) -> Option<ProposedAction> {
        let chain = self.policy.registry.rules(kind, candidate.card);

        for rule in chain {
            let mut staged = StagedChoices::new();
            let fired = rule.eval(&mut GuardScope::new(
                candidate,
                view,
                &mut self.flags,
                &mut staged,
            ));

            if fired {
                log_commit(&self.policy.name, rule, kind, candidate, &staged);
                return Some(ProposedAction {
                    kind,
                    card: candidate.card,
                    staged,
                });
            }
        }

        log_no_match(&self.policy.name, kind, candidate, chain.len());
        None
    }

    /// Resolve one selection callback.
    ///
    /// Dispatches on purpose to the matching heuristic. The result is an
    /// ordered subsequence of `candidates`: at most `max` entries, no copy
    /// twice. `min` is the caller's contract and is not enforced here; the
    /// heuristics never pad with ineligible candidates.
    #[must_use]
    pub fn select(
        &self,
        candidates: &[Candidate],
        min: usize,
        max: usize,
        purpose: SelectPurpose,
    ) -> Vec<Candidate> {
        let picked = match purpose {
            SelectPurpose::Material => heuristic::material(candidates, max, &self.flags),
            SelectPurpose::AddToHand => {
                heuristic::add_to_hand(candidates, max, &self.policy.search_priority)
            }
            SelectPurpose::DestroyTarget => heuristic::destroy_targets(candidates, max),
            SelectPurpose::Other(_) => heuristic::first_in_order(candidates, max),
        };

        log_selection(&self.policy.name, purpose, candidates.len(), min, max, &picked);
        picked
    }

    /// Answer the opening turn-order prompt.
    #[must_use]
    pub fn opening_choice(&self) -> TurnOrder {
        self.policy.hooks.opening
    }

    /// Answer a deploy orientation prompt. `None` defers to the external
    /// engine's default.
    #[must_use]
    pub fn choose_position(&self, kind: CardKind, options: &[Position]) -> Option<Position> {
        (self.policy.hooks.position)(kind, options)
    }
}

fn log_commit(
    deck: &str,
    rule: &PolicyRule,
    kind: ActionKind,
    candidate: &Candidate,
    staged: &StagedChoices,
) {
    if !tracing::enabled!(Level::DEBUG) {
        return;
    }

    event!(
        target: "duelbot::decide",
        Level::DEBUG,
        deck,
        rule = %rule.name,
        seq = rule.seq,
        kind = ?kind,
        card = %candidate.card,
        entity = %candidate.entity,
        picks = staged.picks.len(),
        materials = staged.materials.len(),
        followup = ?staged.followup,
    );
}

fn log_no_match(deck: &str, kind: ActionKind, candidate: &Candidate, rules: usize) {
    if !tracing::enabled!(Level::DEBUG) {
        return;
    }

    event!(
        target: "duelbot::decide",
        Level::DEBUG,
        deck,
        kind = ?kind,
        card = %candidate.card,
        entity = %candidate.entity,
        rules,
        outcome = "declined",
    );
}

fn log_selection(
    deck: &str,
    purpose: SelectPurpose,
    offered: usize,
    min: usize,
    max: usize,
    picked: &[Candidate],
) {
    if !tracing::enabled!(Level::DEBUG) {
        return;
    }

    let cards = picked
        .iter()
        .map(|c| format!("{}", c.card))
        .collect::<Vec<_>>()
        .join(",");

    event!(
        target: "duelbot::select",
        Level::DEBUG,
        deck,
        purpose = ?purpose,
        offered,
        min,
        max,
        picked = %cards,
    );
}
