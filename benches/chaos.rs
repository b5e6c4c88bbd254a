#[macro_use]
extern crate criterion;

use criterion::Criterion;
use rand::rngs::StdRng;
use rand::SeedableRng;

use flame::xforms::{FLAME, SIERPINSKI};
use flame::{tone_map, ChaosGame, Histogram, PlaneMapper, ToneMap};

fn chaos_game(c: &mut Criterion) {
    let plane = PlaneMapper::unit_square(512, 512).unwrap();
    c.bench_function("flame 100k rounds", move |b| {
        let game = ChaosGame::new(&FLAME, 100_000).unwrap();
        b.iter(|| game.render(&plane, StdRng::seed_from_u64(1)))
    });
}

fn sierpinski(c: &mut Criterion) {
    let plane = PlaneMapper::unit_square(512, 512).unwrap();
    c.bench_function("sierpinski 100k rounds", move |b| {
        let game = ChaosGame::new(&SIERPINSKI, 100_000).unwrap();
        b.iter(|| game.render(&plane, StdRng::seed_from_u64(1)))
    });
}

fn tone_mapping(c: &mut Criterion) {
    let plane = PlaneMapper::unit_square(512, 512).unwrap();
    let game = ChaosGame::new(&FLAME, 200_000).unwrap();
    let (histogram, _): (Histogram, _) = game.render(&plane, StdRng::seed_from_u64(1));
    c.bench_function("log tone map 512x512", move |b| {
        b.iter(|| tone_map(&histogram, ToneMap::Logarithmic))
    });
}

criterion_group!(benches, chaos_game, sierpinski, tone_mapping);
criterion_main!(benches);
