use std::time::Duration;

use criterion::black_box;
use criterion::criterion_group;
use criterion::criterion_main;
use criterion::Criterion;
use quartets_core::core::PlayerId;
use quartets_core::game::{GameBuilder, GameSession};
use quartets_core::{CardDefinition, CardId, Container};

const SUITS: u32 = 13;

fn session(players: u32, seed: u64) -> GameSession {
    let mut builder = GameBuilder::new().seed(seed).cards((0..SUITS).flat_map(|s| {
        (0..4).map(move |j| CardDefinition::new(CardId::new(s * 4 + j + 1), format!("{}-{}", s, j), format!("suit {}", s)))
    }));
    for p in 1..=players {
        builder = builder.player(PlayerId::new(p), format!("P{}", p));
    }
    builder.build().expect("valid setup")
}

fn play_out(game: &mut GameSession) {
    while let Some(current) = game.current_player() {
        let held = game
            .askable_cards(current)
            .into_iter()
            .flatten()
            .find_map(|&card| match game.container_of(card) {
                Some(Container::Hand(holder)) if holder != current => Some((holder, card)),
                _ => None,
            });
        let (target, card) = held.unwrap_or_else(|| {
            let target = game.askable_players(current).map_or(current, |ps| ps[0]);
            (target, CardId::new(1))
        });
        black_box(game.submit_guess(current, target, card));
    }
}

fn bench_full_game(c: &mut Criterion) {
    let mut group = c.benchmark_group("Full Game");
    group
        .sample_size(20)
        .measurement_time(Duration::from_secs(5))
        .warm_up_time(Duration::from_secs(1));
    for players in [2, 4, 8] {
        group.bench_function(format!("{} players", players), |b| {
            b.iter(|| {
                let mut game = session(players, 7);
                game.start().expect("fresh session");
                play_out(&mut game);
                black_box(game.winners().len())
            })
        });
    }
    group.finish();
}

fn bench_reset_and_replay(c: &mut Criterion) {
    let mut group = c.benchmark_group("Reset");
    group
        .sample_size(20)
        .measurement_time(Duration::from_secs(5))
        .warm_up_time(Duration::from_secs(1));
    let mut game = session(4, 11);
    group.bench_function("reset + replay", |b| {
        b.iter(|| {
            game.reset();
            game.start().expect("reset session");
            play_out(&mut game);
            black_box(game.events().len())
        })
    });
    group.finish();
}

criterion_group!(
    name = benches;
    config = Criterion::default();
    targets = bench_full_game, bench_reset_and_replay
);
criterion_main!(benches);
