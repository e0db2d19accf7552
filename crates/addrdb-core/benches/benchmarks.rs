use addrdb_core::text::{matches, Collator, MatchMode, NameMatcher};
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

const NAMES: &[&str] = &[
    "Unter den Linden",
    "Friedrichstraße",
    "Karl-Marx-Allee",
    "Straße des 17. Juni",
    "Avenue des Champs-Élysées",
    "Fifth Avenue",
    "Rue de Rivoli",
    "Łódzka",
];

fn bench_match_modes(c: &mut Criterion) {
    let collator = Collator::primary();
    for mode in [
        MatchMode::StartsWith,
        MatchMode::StartsFromSpaceNotBeginning,
        MatchMode::Contains,
    ] {
        c.bench_function(&format!("matches {mode:?}"), |b| {
            b.iter(|| {
                NAMES
                    .iter()
                    .filter(|n| matches(&collator, black_box(n), "str", mode))
                    .count()
            })
        });
    }
}

fn bench_prepared_matcher(c: &mut Criterion) {
    let matcher = NameMatcher::new(Collator::primary(), "str", MatchMode::StartsFromSpace);
    c.bench_function("NameMatcher StartsFromSpace", |b| {
        b.iter(|| NAMES.iter().filter(|n| matcher.matches(black_box(n))).count())
    });
}

criterion_group!(benches, bench_match_modes, bench_prepared_matcher);
criterion_main!(benches);
