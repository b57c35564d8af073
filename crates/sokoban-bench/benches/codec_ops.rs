//! Criterion micro-benchmarks for state serialization.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use sokoban_bench::{action_sequence, open_room};
use sokoban_engine::SokobanState;
use sokoban_replay::{deserialize, serialize};

fn bench_serialize_roundtrip(c: &mut Criterion) {
    let mut state = SokobanState::with_seed(&open_room(32, 32, 8), 5).unwrap();
    for a in action_sequence(500, 5) {
        state.apply_action(a);
    }
    let bytes = serialize(&state);

    c.bench_function("serialize_32x32", |b| {
        b.iter(|| black_box(serialize(&state)));
    });

    // Decoding rebuilds the board: hash basis and reachability tables.
    c.bench_function("deserialize_32x32", |b| {
        b.iter(|| black_box(deserialize(&bytes).unwrap()));
    });
}

criterion_group!(benches, bench_serialize_roundtrip);
criterion_main!(benches);
