//! Stock guard builders.
//!
//! The guard shapes most policy sets share: unconditional approval, the
//! reactive hand-trap timings, and the once-per-turn gate. Content modules
//! compose these with their own closures instead of re-writing the same
//! checks per card.

use crate::policy::GuardFn;

/// Approve unconditionally.
#[must_use]
pub fn always() -> GuardFn {
    Box::new(|_| true)
}

/// Approve on the opponent's turn when the resolving chain targets this
/// copy.
///
/// The classic held-in-hand counter timing: do nothing until the opponent
/// comes for this card, then answer.
#[must_use]
pub fn when_chain_targeted() -> GuardFn {
    Box::new(|scope| !scope.my_turn() && scope.targeted_by_chain())
}

/// Like [`when_chain_targeted`], but never during the first turn of the
/// duel.
///
/// For pieces not worth spending before the opponent's strategy has shown
/// itself.
#[must_use]
pub fn when_chain_targeted_after_turn_one() -> GuardFn {
    Box::new(|scope| scope.view.turn > 1 && !scope.my_turn() && scope.targeted_by_chain())
}

/// Gate an inner guard to once per turn.
///
/// Declines outright when the candidate's card is already marked used this
/// turn; otherwise defers to `inner`, and marks the card used when `inner`
/// approves. A declining `inner` leaves the flag unset, so the rule stays
/// live for the rest of the turn.
#[must_use]
pub fn once_per_turn(inner: GuardFn) -> GuardFn {
    Box::new(move |scope| {
        if scope.flags.used_this_turn(scope.candidate.card) {
            return false;
        }
        if inner(scope) {
            scope.flags.mark_used(scope.candidate.card);
            true
        } else {
            false
        }
    })
}
