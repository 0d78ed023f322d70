use std::hint::black_box;
use criterion::Criterion;
use criterion::criterion_group;
use criterion::criterion_main;

use sf_energy::NucleotideVec;
use sf_fold::{fold, FoldOptions};

const SEQ_L24: &str = "GCGCAAGCUGAAUCAGCAAGCGCC";
const SEQ_L48: &str = "GCGCAAGCUGAAUCAGCAAGCGCCGCGCAAGCUGAAUCAGCAAGCGCC";
const SEQ_L96: &str = concat!(
    "GCGCAAGCUGAAUCAGCAAGCGCCGCGCAAGCUGAAUCAGCAAGCGCC",
    "GGAUCCAAGCGCUUAAGGCAUCCGGAUGCAAUUCGCGGAUCCAAGGCC",
);

pub fn fold_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("fold");

    let options = FoldOptions::default();
    for (name, seq) in [("fold_l24", SEQ_L24), ("fold_l48", SEQ_L48), ("fold_l96", SEQ_L96)] {
        let seq = NucleotideVec::from_lossy(seq);
        group.bench_function(name, |b| {
            b.iter(|| fold(black_box(&seq), &options))
        });
    }

    // the branch cap dominates runtime, not sequence length
    let seq = NucleotideVec::from_lossy(SEQ_L48);
    for branches in [2, 4, 6] {
        let options = FoldOptions { max_branches: branches, ..FoldOptions::default() };
        group.bench_function(format!("fold_l48_b{}", branches), |b| {
            b.iter(|| fold(black_box(&seq), &options))
        });
    }
    group.finish();
}

criterion_group!(benches, fold_benchmark);
criterion_main!(benches);
