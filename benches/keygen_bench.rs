//! Criterion benchmarks for key generation, planning, and rebalancing.

use criterion::{
    black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use lineup::Engine;
use lineup::Entry;
use lineup::Token;

const SIZES: [usize; 3] = [100, 1_000, 10_000];

// =============================================================================
// Helpers
// =============================================================================

fn appended(engine: &Engine, n: usize) -> Vec<Entry<usize>> {
    let mut cards: Vec<Entry<usize>> = Vec::with_capacity(n);
    for id in 0..n {
        let token = engine.key_after(cards.last().map(|card| &card.token)).unwrap();
        cards.push(Entry::new(id, token));
    }
    return cards;
}

// =============================================================================
// Key generation
// =============================================================================

fn bench_appends(c: &mut Criterion) {
    let mut group = c.benchmark_group("appends");
    let engine = Engine::default();

    for size in SIZES {
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("key_after", size), &size, |b, &size| {
            b.iter(|| {
                let mut last: Option<Token> = None;
                for _ in 0..size {
                    last = Some(engine.key_after(last.as_ref()).unwrap());
                }
                black_box(last)
            });
        });
    }

    group.finish();
}

fn bench_same_gap(c: &mut Criterion) {
    let mut group = c.benchmark_group("same_gap");
    let engine = Engine::default();
    let low: Token = "U".parse().unwrap();
    let high: Token = "V".parse().unwrap();

    for size in [10usize, 100, 1_000] {
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("key_between", size), &size, |b, &size| {
            b.iter(|| {
                let mut hi = high.clone();
                for _ in 0..size {
                    hi = engine.key_between(&low, &hi).unwrap();
                }
                black_box(hi)
            });
        });
    }

    group.finish();
}

fn bench_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch");
    let engine = Engine::default();
    let low: Token = "U".parse().unwrap();
    let high: Token = "V".parse().unwrap();

    for size in SIZES {
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("keys_between", size), &size, |b, &size| {
            b.iter(|| black_box(engine.keys_between(Some(&low), Some(&high), size).unwrap()));
        });
    }

    group.finish();
}

// =============================================================================
// Planning and repair
// =============================================================================

fn bench_random_moves(c: &mut Criterion) {
    let mut group = c.benchmark_group("random_moves");
    let engine = Engine::default();

    for size in SIZES {
        let cards = appended(&engine, size);
        group.bench_with_input(BenchmarkId::new("plan_move", size), &cards, |b, cards| {
            let mut rng = StdRng::seed_from_u64(42);
            b.iter(|| {
                let id = rng.gen_range(0..cards.len());
                let target = rng.gen_range(0..cards.len());
                black_box(engine.plan_move(&[id], target, cards).unwrap())
            });
        });
    }

    group.finish();
}

fn bench_rebalance(c: &mut Criterion) {
    let mut group = c.benchmark_group("rebalance");
    let engine = Engine::default();

    for size in SIZES {
        let cards = appended(&engine, size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("rebalance", size), &cards, |b, cards| {
            b.iter(|| black_box(engine.rebalance(cards).len()));
        });
        group.bench_with_input(BenchmarkId::new("sort", size), &cards, |b, cards| {
            b.iter(|| {
                let mut copy = cards.clone();
                copy.reverse();
                engine.sort_by_token(&mut copy);
                black_box(copy)
            });
        });
    }

    group.finish();
}

// =============================================================================
// Criterion Configuration
// =============================================================================

criterion_group!(
    benches,
    bench_appends,
    bench_same_gap,
    bench_batch,
    bench_random_moves,
    bench_rebalance,
);

criterion_main!(benches);
