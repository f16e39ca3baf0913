//! Decision orchestration integration tests.
//!
//! These tests verify the first-approving-rule contract end to end: chain
//! walking in registration order, lazy evaluation, staging isolation, and
//! turn-flag lifecycle across decisions.

use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};

use duelbot::{
    ActionKind, Candidate, CardId, CardKind, Controller, DeckPolicy, DuelAgent, DuelView, EntityId,
    Phase, SelectPurpose, Zone,
};

const STARTER: CardId = CardId::new(1);
const EXTENDER: CardId = CardId::new(2);

fn hand_candidate(entity: u32, card: CardId) -> Candidate {
    Candidate::own(EntityId::new(entity), card, CardKind::Monster, Zone::Hand)
}

fn main_phase() -> DuelView {
    DuelView::new(1, Phase::Main1, Controller::Agent)
}

/// Rules for the same pair fire strictly in registration order.
#[test]
fn test_registration_order_is_priority() {
    let mut policy = DeckPolicy::new("order");
    policy.registry.register(ActionKind::Activate, STARTER, "first registered", |scope| {
        scope.stage_pick(CardId::new(100));
        true
    });
    policy.registry.register(ActionKind::Activate, STARTER, "second registered", |scope| {
        scope.stage_pick(CardId::new(200));
        true
    });
    let mut agent = DuelAgent::new(policy);

    let action = agent
        .decide(ActionKind::Activate, &hand_candidate(1, STARTER), &main_phase())
        .expect("a rule should approve");

    assert_eq!(
        action.staged.picks.as_slice(),
        &[CardId::new(100)],
        "the earlier registration must win"
    );
}

/// Guards after the first approval are never invoked for that decision.
#[test]
fn test_lazy_left_to_right_evaluation() {
    let invocations = Arc::new(AtomicU32::new(0));

    let mut policy = DeckPolicy::new("lazy");
    let early = Arc::clone(&invocations);
    policy.registry.register(ActionKind::Activate, STARTER, "approves", move |_| {
        early.fetch_add(1, Ordering::SeqCst);
        true
    });
    let late = Arc::clone(&invocations);
    policy.registry.register(ActionKind::Activate, STARTER, "never reached", move |_| {
        late.fetch_add(100, Ordering::SeqCst);
        true
    });
    let mut agent = DuelAgent::new(policy);

    let action = agent.decide(ActionKind::Activate, &hand_candidate(1, STARTER), &main_phase());

    assert!(action.is_some());
    assert_eq!(
        invocations.load(Ordering::SeqCst),
        1,
        "only the approving rule may run"
    );
}

/// A decision with no approving rule returns nothing and mutates nothing.
#[test]
fn test_no_match_is_inert() {
    let mut policy = DeckPolicy::new("inert");
    policy.registry.register(ActionKind::Activate, STARTER, "declines", |_| false);
    let mut agent = DuelAgent::new(policy);
    let view = main_phase();

    let first = agent.decide(ActionKind::Activate, &hand_candidate(1, STARTER), &view);
    let second = agent.decide(ActionKind::Activate, &hand_candidate(1, STARTER), &view);

    assert!(first.is_none());
    assert!(second.is_none(), "declining must be repeatable");
    assert!(agent.flags().is_empty(), "declining must not touch turn flags");
}

/// Re-evaluating well-behaved declining guards yields the same outcome.
#[test]
fn test_false_path_evaluation_is_idempotent() {
    let mut policy = DeckPolicy::new("idempotent");
    policy.registry.register(ActionKind::Activate, STARTER, "needs board", |scope| {
        scope.me().monster_count() >= 2
    });
    policy.registry.register(ActionKind::Activate, STARTER, "needs grave", |scope| {
        scope.me().has_in_graveyard(EXTENDER)
    });
    let mut agent = DuelAgent::new(policy);
    let view = main_phase();
    let candidate = hand_candidate(1, STARTER);

    for _ in 0..3 {
        assert!(agent.decide(ActionKind::Activate, &candidate, &view).is_none());
        assert!(agent.flags().is_empty());
    }

    // Once the state the guards ask about appears, the chain approves.
    let mut developed = main_phase();
    developed.me.graveyard.push(EXTENDER);
    assert!(agent.decide(ActionKind::Activate, &candidate, &developed).is_some());
}

/// Staging from declining guards never leaks into the committed action.
#[test]
fn test_staging_isolation_across_rules() {
    let mut policy = DeckPolicy::new("isolation");
    policy.registry.register(ActionKind::SpecialSummon, STARTER, "stages then declines", |scope| {
        scope.stage_materials([CardId::new(7), CardId::new(8)]);
        scope.stage_followup(SelectPurpose::DestroyTarget);
        false
    });
    policy.registry.register(ActionKind::SpecialSummon, STARTER, "stages its own", |scope| {
        scope.stage_materials([CardId::new(9)]);
        true
    });
    let mut agent = DuelAgent::new(policy);

    let action = agent
        .decide(ActionKind::SpecialSummon, &hand_candidate(1, STARTER), &main_phase())
        .expect("second rule approves");

    assert_eq!(action.staged.materials.as_slice(), &[CardId::new(9)]);
    assert!(action.staged.followup.is_none(), "declined staging must be discarded");
}

/// Candidate tie-breaks belong to the caller: the engine answers each ask
/// independently and the caller keeps its own order.
#[test]
fn test_caller_order_tie_break() {
    let mut policy = DeckPolicy::new("ties");
    policy.registry.register(ActionKind::NormalSummon, STARTER, "any copy", |_| true);
    let mut agent = DuelAgent::new(policy);
    let view = main_phase();

    let copies = [hand_candidate(3, STARTER), hand_candidate(1, STARTER), hand_candidate(2, STARTER)];
    let committed: Vec<_> = copies
        .iter()
        .filter_map(|c| agent.decide(ActionKind::NormalSummon, c, &view).map(|_| c.entity))
        .collect();

    assert_eq!(
        committed,
        vec![EntityId::new(3), EntityId::new(1), EntityId::new(2)],
        "every ask answers; the caller takes the first in its own order"
    );
}

/// Flags written during one turn are gone after the turn notification.
#[test]
fn test_turn_state_isolation() {
    let mut policy = DeckPolicy::new("turns");
    policy.registry.register(ActionKind::NormalSummon, STARTER, "once per turn", |scope| {
        if scope.flags.used_this_turn(scope.candidate.card) {
            return false;
        }
        scope.flags.mark_used(scope.candidate.card);
        true
    });
    let mut agent = DuelAgent::new(policy);
    let view = main_phase();

    assert!(agent.decide(ActionKind::NormalSummon, &hand_candidate(1, STARTER), &view).is_some());
    assert!(agent.decide(ActionKind::NormalSummon, &hand_candidate(2, STARTER), &view).is_none());

    agent.on_new_turn();

    assert!(agent.flags().is_empty(), "reset must be wholesale");
    assert!(agent.decide(ActionKind::NormalSummon, &hand_candidate(3, STARTER), &view).is_some());
}

/// Category and card are both part of the registry key.
#[test]
fn test_kind_card_pairs_are_disjoint() {
    let mut policy = DeckPolicy::new("pairs");
    policy.registry.register(ActionKind::NormalSummon, STARTER, "summon line", |_| true);
    let mut agent = DuelAgent::new(policy);
    let view = main_phase();

    assert!(agent.decide(ActionKind::NormalSummon, &hand_candidate(1, STARTER), &view).is_some());
    assert!(
        agent.decide(ActionKind::Activate, &hand_candidate(1, STARTER), &view).is_none(),
        "same card under another category has no rules"
    );
    assert!(
        agent.decide(ActionKind::NormalSummon, &hand_candidate(1, EXTENDER), &view).is_none(),
        "same category for another card has no rules"
    );
}

/// A committed proposal carries the acting card and category.
#[test]
fn test_proposal_identifies_the_action() {
    let mut policy = DeckPolicy::new("identity");
    policy.registry.register(ActionKind::Activate, EXTENDER, "fires", |_| true);
    let mut agent = DuelAgent::new(policy);

    let action = agent
        .decide(ActionKind::Activate, &hand_candidate(5, EXTENDER), &main_phase())
        .expect("rule fires");

    assert_eq!(action.kind, ActionKind::Activate);
    assert_eq!(action.card, EXTENDER);
}
