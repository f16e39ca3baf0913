//! Selection heuristics, one per prompt purpose.
//!
//! Each heuristic maps a caller-supplied candidate list to an ordered
//! subsequence: at most `max` entries, no copy twice, everything drawn from
//! the input. Ties inside an eligibility tier keep input order, so the
//! external engine's ordering is the final tie-break.
//!
//! Minimum counts are the caller's contract. The heuristics return what the
//! tiers yield; they never pad with ineligible candidates.

use crate::core::{Candidate, Zone};
use crate::turn::TurnFlags;

use super::purpose::SearchPriority;

/// Pick combination material.
///
/// Copies whose card effect was already used this turn come first (their
/// value is extracted; consuming them costs the least), then everything
/// else, both tiers in input order.
#[must_use]
pub fn material(candidates: &[Candidate], max: usize, flags: &TurnFlags) -> Vec<Candidate> {
    let mut out = Vec::with_capacity(max.min(candidates.len()));

    for candidate in candidates {
        if flags.used_this_turn(candidate.card) {
            push_unique(&mut out, candidate, max);
        }
    }
    for candidate in candidates {
        push_unique(&mut out, candidate, max);
    }

    out
}

/// Pick cards to add from deck to hand.
///
/// Ranked cards first, in rank order; a rank with several matching copies
/// emits them in input order. Unranked candidates fill the remainder in
/// input order.
#[must_use]
pub fn add_to_hand(
    candidates: &[Candidate],
    max: usize,
    priority: &SearchPriority,
) -> Vec<Candidate> {
    let mut out = Vec::with_capacity(max.min(candidates.len()));

    for wanted in priority.iter() {
        for candidate in candidates {
            if candidate.card == wanted {
                push_unique(&mut out, candidate, max);
            }
        }
    }
    for candidate in candidates {
        push_unique(&mut out, candidate, max);
    }

    out
}

/// Pick cards to destroy.
///
/// Opponent monsters first, then opponent spells and traps, both tiers in
/// input order. The agent's own cards and cards in any other zone are never
/// chosen, even when that leaves the pick short of `max`.
#[must_use]
pub fn destroy_targets(candidates: &[Candidate], max: usize) -> Vec<Candidate> {
    let mut out = Vec::with_capacity(max.min(candidates.len()));

    for candidate in candidates {
        if candidate.is_opposing() && candidate.in_zone(Zone::MonsterZone) {
            push_unique(&mut out, candidate, max);
        }
    }
    for candidate in candidates {
        if candidate.is_opposing() && candidate.in_zone(Zone::SpellZone) {
            push_unique(&mut out, candidate, max);
        }
    }

    out
}

/// Unknown-purpose fallback: the first `max` distinct copies in input order.
#[must_use]
pub fn first_in_order(candidates: &[Candidate], max: usize) -> Vec<Candidate> {
    let mut out = Vec::with_capacity(max.min(candidates.len()));

    for candidate in candidates {
        push_unique(&mut out, candidate, max);
    }

    out
}

fn push_unique(out: &mut Vec<Candidate>, candidate: &Candidate, max: usize) {
    if out.len() < max && !out.iter().any(|c| c.entity == candidate.entity) {
        out.push(*candidate);
    }
}
