//! The Clockwork policy set.
//!
//! A combination deck built around one normal summon: the opener deploys,
//! pulls its partner out of the deck, and the pair combines into escalating
//! payoff monsters from the extra deck. Reactive pieces are held for the
//! opponent's turn and spent only when the chain comes for them.
//!
//! This is the demonstration content set: it exercises every engine
//! feature - turn-gated openers with combo flags, a field-spell gate,
//! zone-keyed effect rules, quick-play timing, stock hand-trap guards,
//! combination deploys with pre-staged materials, staged search targets,
//! a ranked search list, and both hooks.

use crate::agent::DeckPolicy;
use crate::core::{CardId, Phase, Zone};
use crate::policy::ActionKind;
use crate::select::{SearchPriority, SelectPurpose};

use super::stock;

// Main deck monsters.

/// Combo starter. Normal summon on sight; its effect deploys [`RATCHET`]
/// from the deck.
pub const MAINSPRING: CardId = CardId::new(101);
/// Backup starter for hands without [`MAINSPRING`].
pub const RATCHET: CardId = CardId::new(102);
/// Searcher; works from the monster zone or the graveyard.
pub const ESCAPEMENT: CardId = CardId::new(103);
/// Combo extender; searches [`ESCAPEMENT`] or destroys a monster.
pub const FLYWHEEL: CardId = CardId::new(104);
/// Banisher aimed at the opponent's extra deck.
pub const COG: CardId = CardId::new(105);

// Spells and traps.

/// Field spell; one copy on the field at a time.
pub const GREAT_CLOCK: CardId = CardId::new(106);
/// Quick-play combination spell; battle phase or the opponent's turn.
pub const OVERWIND: CardId = CardId::new(107);
/// Recovery spell; revives a fallen starter.
pub const SPRING_BACK: CardId = CardId::new(108);
/// Counter; cuts off the effect that targeted our piece.
pub const GRAVE_SEAL: CardId = CardId::new(109);

// Hand traps.

/// Effect negate, spent when targeted.
pub const HUSH: CardId = CardId::new(110);
/// Monster negate, spent when targeted.
pub const VEIL: CardId = CardId::new(111);
/// Draw punisher; not worth spending on turn one.
pub const SIFTER: CardId = CardId::new(112);
/// Early disruption; needs five payoffs left in the extra deck to reveal.
pub const RESONANCE: CardId = CardId::new(113);
/// Board wipe for when the opponent overextends.
pub const COLLAPSE: CardId = CardId::new(114);

// Extra deck payoffs.

/// First combination: [`MAINSPRING`] + [`RATCHET`]. Searches [`OVERWIND`].
pub const CHRONOGRAPH: CardId = CardId::new(201);
/// Mid combination; trades itself on the opponent's turn for more pieces.
pub const CARILLON: CardId = CardId::new(202);
/// Negate body; answers the opponent's last chain link.
pub const METRONOME: CardId = CardId::new(203);
/// Banisher body; revives itself from the graveyard.
pub const REPEATER: CardId = CardId::new(204);
/// Top payoff: [`METRONOME`] + [`REPEATER`].
pub const PERPETUAL: CardId = CardId::new(205);
/// Generic negate body; spent when targeted.
pub const GOVERNOR: CardId = CardId::new(206);

/// Turn flag set once the opener has resolved; the extension lines key off
/// it.
pub const FLAG_COMBO_STARTED: &str = "combo_started";

/// Build the Clockwork policy set.
///
/// Registration order is play priority: openers before extenders, the
/// field spell before monster effects, cheap combinations before the top
/// end.
#[must_use]
pub fn deck() -> DeckPolicy {
    let mut policy = DeckPolicy::new("clockwork").with_search_priority(SearchPriority::new([
        OVERWIND,
        ESCAPEMENT,
        FLYWHEEL,
        COG,
        GREAT_CLOCK,
    ]));
    let registry = &mut policy.registry;

    // Normal summon priorities.
    registry.register_boxed(
        ActionKind::NormalSummon,
        MAINSPRING,
        "mainspring opener",
        stock::once_per_turn(Box::new(|scope| {
            scope.flags.mark(FLAG_COMBO_STARTED);
            true
        })),
    );
    registry.register_boxed(
        ActionKind::NormalSummon,
        RATCHET,
        "ratchet backup opener",
        stock::once_per_turn(Box::new(|scope| {
            !scope.me().has_in_hand(MAINSPRING) && scope.me().monster_count() == 0
        })),
    );
    registry.register(ActionKind::NormalSummon, FLYWHEEL, "flywheel extension", |scope| {
        scope.flags.is_set(FLAG_COMBO_STARTED) && scope.me().has_in_hand(ESCAPEMENT)
    });

    // Field spell.
    registry.register_boxed(
        ActionKind::Activate,
        GREAT_CLOCK,
        "great clock",
        stock::once_per_turn(Box::new(|scope| !scope.me().has_in_spell_zone(GREAT_CLOCK))),
    );

    // Main deck monster effects, keyed by where the copy sits.
    registry.register(ActionKind::Activate, MAINSPRING, "mainspring deploy", |scope| {
        scope.candidate.in_zone(Zone::MonsterZone)
    });
    registry.register(ActionKind::Activate, RATCHET, "ratchet graveyard search", |scope| {
        scope.candidate.in_zone(Zone::Graveyard)
    });
    registry.register(ActionKind::Activate, ESCAPEMENT, "escapement search", |scope| {
        if matches!(scope.candidate.zone, Zone::MonsterZone | Zone::Graveyard) {
            scope.stage_followup(SelectPurpose::AddToHand);
            return true;
        }
        false
    });
    registry.register(ActionKind::Activate, FLYWHEEL, "flywheel search", |scope| {
        if matches!(scope.candidate.zone, Zone::MonsterZone | Zone::Graveyard) {
            scope.stage_pick(ESCAPEMENT);
            return true;
        }
        false
    });
    registry.register_boxed(ActionKind::Activate, COG, "cog banish", stock::always());

    // Spells.
    registry.register(ActionKind::Activate, OVERWIND, "overwind quick-play", |scope| {
        scope.view.phase >= Phase::Battle || !scope.my_turn()
    });
    registry.register(ActionKind::Activate, SPRING_BACK, "spring back recovery", |scope| {
        scope.me().has_in_graveyard(RATCHET) || scope.me().has_in_graveyard(MAINSPRING)
    });
    registry.register_boxed(
        ActionKind::Activate,
        GRAVE_SEAL,
        "grave seal counter",
        stock::when_chain_targeted(),
    );

    // Hand traps, held for the opponent's turn.
    registry.register_boxed(
        ActionKind::Activate,
        SIFTER,
        "sifter punish",
        stock::when_chain_targeted_after_turn_one(),
    );
    registry.register_boxed(ActionKind::Activate, HUSH, "hush negate", stock::when_chain_targeted());
    registry.register_boxed(ActionKind::Activate, VEIL, "veil negate", stock::when_chain_targeted());
    registry.register(ActionKind::Activate, RESONANCE, "resonance disruption", |scope| {
        !scope.my_turn()
            && scope.opponent().monster_count() <= 2
            && scope.me().extra_deck_count() >= 5
    });
    registry.register(ActionKind::Activate, COLLAPSE, "collapse wide boards", |scope| {
        !scope.my_turn() && scope.opponent().monster_count() >= 5
    });

    // Combination deploys, cheapest first.
    registry.register(
        ActionKind::SpecialSummon,
        CHRONOGRAPH,
        "chronograph combination",
        |scope| {
            if scope.me().has_in_monster_zone(MAINSPRING) && scope.me().has_in_monster_zone(RATCHET)
            {
                scope.stage_materials([MAINSPRING, RATCHET]);
                return true;
            }
            false
        },
    );
    registry.register(ActionKind::SpecialSummon, CARILLON, "carillon combination", |scope| {
        scope.me().has_in_monster_zone(FLYWHEEL)
    });
    registry.register_boxed(
        ActionKind::SpecialSummon,
        METRONOME,
        "metronome combination",
        stock::always(),
    );
    registry.register_boxed(
        ActionKind::SpecialSummon,
        REPEATER,
        "repeater combination",
        stock::always(),
    );
    registry.register(ActionKind::SpecialSummon, PERPETUAL, "perpetual combination", |scope| {
        scope.me().has_in_monster_zone(METRONOME) && scope.me().has_in_monster_zone(REPEATER)
    });

    // Extra deck effects.
    registry.register(ActionKind::Activate, CHRONOGRAPH, "chronograph search", |scope| {
        if scope.candidate.in_zone(Zone::MonsterZone) {
            scope.stage_pick(OVERWIND);
            return true;
        }
        false
    });
    registry.register(ActionKind::Activate, CARILLON, "carillon trade", |scope| {
        if !scope.my_turn() && scope.candidate.in_zone(Zone::MonsterZone) {
            scope.stage_picks([FLYWHEEL, ESCAPEMENT]);
            return true;
        }
        false
    });
    registry.register(ActionKind::Activate, METRONOME, "metronome negate", |scope| {
        scope.candidate.in_zone(Zone::MonsterZone)
            && !scope.my_turn()
            && scope.view.last_chain_card.is_some()
    });
    registry.register(ActionKind::Activate, REPEATER, "repeater banish", |scope| {
        scope.candidate.in_zone(Zone::MonsterZone)
    });
    registry.register(ActionKind::Activate, REPEATER, "repeater self-revive", |scope| {
        scope.candidate.in_zone(Zone::Graveyard) && scope.me().monster_count() < 5
    });
    registry.register(ActionKind::Activate, PERPETUAL, "perpetual revive", |scope| {
        if !scope.my_turn() && scope.candidate.in_zone(Zone::MonsterZone) {
            scope.stage_pick(FLYWHEEL);
            return true;
        }
        false
    });
    registry.register(ActionKind::Activate, GOVERNOR, "governor answer", |scope| {
        if !scope.my_turn() && scope.targeted_by_chain() {
            if let Some(threat) = scope.view.last_chain_card {
                scope.stage_pick(threat);
                return true;
            }
        }
        false
    });

    policy
}
