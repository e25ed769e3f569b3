use criterion::{black_box, criterion_group, criterion_main, Criterion};
use minimal_nfa::prelude::*;
use minimal_nfa::random::{random_dfa, random_nfa};

const SEED: u64 = 17;

fn targets() -> Vec<DFA> {
    let mut rng = fastrand::Rng::with_seed(SEED);
    (0..4).map(|_| random_dfa(1, 3, &mut rng)).collect()
}

fn enumerate(alphabet: &CharAlphabet, size: usize) -> usize {
    automata_of_size(alphabet, size)
        .map(|nfa| nfa.edges().count())
        .sum()
}

fn determinize(automata: &[NFA]) {
    for nfa in automata {
        black_box(nfa.subset_construction());
    }
}

fn search(targets: &[DFA]) {
    for dfa in targets {
        black_box(minimal_nfa(dfa).ok());
    }
}

fn benchings(c: &mut Criterion) {
    let binary = CharAlphabet::of_size(2);
    c.bench_function("enumerate_size_two", |b| {
        b.iter(|| enumerate(black_box(&binary), 2))
    });

    let mut rng = fastrand::Rng::with_seed(SEED);
    let automata = (0..20)
        .map(|_| random_nfa(2, 6, 0.3, &mut rng))
        .collect::<Vec<_>>();
    c.bench_function("subset_construction", |b| {
        b.iter(|| determinize(black_box(&automata)))
    });

    let targets = targets();
    c.bench_function("minimal_nfa_unary", |b| {
        b.iter(|| search(black_box(&targets)))
    });
    c.bench_function("three_state_fixture", |b| {
        let dfa = AutomatonBuilder::default()
            .with_accepting([1u32])
            .with_edges([
                (0, '0', 0),
                (0, '1', 1),
                (1, '0', 0),
                (1, '1', 2),
                (2, '0', 2),
                (2, '1', 1),
            ])
            .into_dfa(0)
            .unwrap();
        b.iter(|| minimal_nfa(black_box(&dfa)))
    });
}

criterion_group! {
    name = benches;
    config = Criterion::default().sample_size(20);
    targets = benchings
}
criterion_main!(benches);
