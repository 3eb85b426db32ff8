//! Criterion benchmarks for roster lookup.
//!
//! Run: cargo bench -p roster --bench roster_lookup
//!
//! Results show:
//!   get_by_id_first   — best case (hit at the front of the scan)
//!   get_by_id_last    — worst case over a full 256-entry roster
//!   get_by_id_miss    — full scan ending in NotFound

#![allow(
    clippy::unwrap_used, // benchmark helpers use unwrap for brevity
    clippy::expect_used,
    clippy::arithmetic_side_effects, // bounded seed-id arithmetic
    clippy::cast_possible_truncation,
    missing_docs,       // criterion_group! macro generates undocumented items
)]

use criterion::{criterion_group, criterion_main, Criterion};
use roster::{Profile, ProfileId, Roster, MAX_PROFILES};

fn full_roster() -> Roster {
    let mut roster = Roster::new();
    for n in 0..MAX_PROFILES as u32 {
        let name = format!("User {n:03}");
        let picture = format!("assets/profiles/user_{n:03}.png");
        roster
            .insert(Profile::new(ProfileId(n), &name, n % 2 == 0, &picture))
            .expect("seed fits capacity");
    }
    roster
}

fn bench_lookup(c: &mut Criterion) {
    let roster = full_roster();
    let last = MAX_PROFILES as u32 - 1;

    c.bench_function("get_by_id_first", |b| {
        b.iter(|| roster.get_by_id(std::hint::black_box(ProfileId(0))))
    });
    c.bench_function("get_by_id_last", |b| {
        b.iter(|| roster.get_by_id(std::hint::black_box(ProfileId(last))))
    });
    c.bench_function("get_by_id_miss", |b| {
        b.iter(|| roster.get_by_id(std::hint::black_box(ProfileId(u32::MAX))))
    });
}

criterion_group!(benches, bench_lookup);
criterion_main!(benches);
