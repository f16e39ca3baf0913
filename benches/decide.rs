use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};

use duelbot::decks::clockwork::{
    self, CHRONOGRAPH, ESCAPEMENT, FLYWHEEL, HUSH, MAINSPRING, OVERWIND, RATCHET,
};
use duelbot::{
    ActionKind, Candidate, CardId, CardKind, Controller, DuelAgent, DuelView, EntityId, Phase,
    SelectPurpose, Zone,
};

fn own(entity: u32, card: CardId, kind: CardKind, zone: Zone) -> Candidate {
    Candidate::own(EntityId::new(entity), card, kind, zone)
}

fn bench_decide(c: &mut Criterion) {
    let mut group = c.benchmark_group("decide");

    // Pure-read guard that commits: the quick-play on the opponent's turn.
    let mut agent = DuelAgent::new(clockwork::deck());
    let off_turn = DuelView::new(2, Phase::Main1, Controller::Opponent);
    let quick = own(1, OVERWIND, CardKind::Spell, Zone::SpellZone);
    group.bench_function("commit", |b| {
        b.iter(|| black_box(agent.decide(ActionKind::Activate, black_box(&quick), &off_turn)))
    });

    // Decline path: a hand trap with nothing to answer.
    let mut agent = DuelAgent::new(clockwork::deck());
    let quiet = DuelView::new(2, Phase::Main1, Controller::Opponent);
    let held = own(1, HUSH, CardKind::Monster, Zone::Hand);
    group.bench_function("decline", |b| {
        b.iter(|| black_box(agent.decide(ActionKind::Activate, black_box(&held), &quiet)))
    });

    group.finish();
}

fn bench_opening_line(c: &mut Criterion) {
    let mut group = c.benchmark_group("opening_line");

    group.bench_function("summon_extend_combine", |b| {
        b.iter_batched(
            || {
                let mut view = DuelView::new(1, Phase::Main1, Controller::Agent);
                view.me.hand = vec![FLYWHEEL, ESCAPEMENT];
                view.me.monster_zone = vec![MAINSPRING, RATCHET];
                (DuelAgent::new(clockwork::deck()), view)
            },
            |(mut agent, view)| {
                agent.on_new_turn();
                let opener = own(1, MAINSPRING, CardKind::Monster, Zone::Hand);
                let _ = black_box(agent.decide(ActionKind::NormalSummon, &opener, &view));
                let extender = own(2, FLYWHEEL, CardKind::Monster, Zone::Hand);
                let _ = black_box(agent.decide(ActionKind::NormalSummon, &extender, &view));
                let payoff = own(3, CHRONOGRAPH, CardKind::Monster, Zone::ExtraDeck);
                let _ = black_box(agent.decide(ActionKind::SpecialSummon, &payoff, &view));
            },
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

fn bench_select(c: &mut Criterion) {
    let mut group = c.benchmark_group("select");

    let mut agent = DuelAgent::new(clockwork::deck());
    agent.flags_mut().mark_used(MAINSPRING);
    agent.flags_mut().mark_used(RATCHET);

    let board: Vec<Candidate> = (0..32)
        .map(|i| {
            own(
                i,
                CardId::new(101 + (i % 5)),
                CardKind::Monster,
                Zone::MonsterZone,
            )
        })
        .collect();

    group.bench_function("material_32", |b| {
        b.iter(|| black_box(agent.select(black_box(&board), 1, 5, SelectPurpose::Material)))
    });

    let deck_offers: Vec<Candidate> = (0..32)
        .map(|i| own(i, CardId::new(101 + (i % 9)), CardKind::Monster, Zone::Deck))
        .collect();
    group.bench_function("add_to_hand_32", |b| {
        b.iter(|| black_box(agent.select(black_box(&deck_offers), 1, 3, SelectPurpose::AddToHand)))
    });

    group.finish();
}

criterion_group!(benches, bench_decide, bench_opening_line, bench_select);
criterion_main!(benches);
