//! Benchmarks for Quine-McCluskey minimization
//!
//! Functions are generated rather than read from disk: parity (no merging at
//! all), majority (many overlapping primes) and a pseudo-random mix with
//! don't-cares, each over a range of input widths.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use quine_logic::{
    prime_implicants, Minimizable, MinimizerConfig, OutputSets, OutputValue, PLAReader, PLAWriter,
    Pattern, Term, PLA,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Generated benchmark functions
#[derive(Debug, Clone, Copy)]
enum Family {
    Parity,
    Majority,
    Random,
}

impl Family {
    fn as_str(&self) -> &str {
        match self {
            Family::Parity => "parity",
            Family::Majority => "majority",
            Family::Random => "random",
        }
    }

    fn value(&self, minterm: u64, width: usize, rng: &mut StdRng) -> OutputValue {
        let ones = minterm.count_ones() as usize;
        let on = match self {
            Family::Parity => ones % 2 == 1,
            Family::Majority => 2 * ones > width,
            Family::Random => match rng.gen_range(0..4) {
                0 => return OutputValue::DontCare,
                1 | 2 => true,
                _ => false,
            },
        };
        if on {
            OutputValue::On
        } else {
            OutputValue::Off
        }
    }
}

/// Truth table of `outputs` copies of `family` over `width` inputs
fn generate(family: Family, width: usize, outputs: usize) -> PLA {
    let mut pla = PLA::new(width, outputs).unwrap();
    let mut rng = StdRng::seed_from_u64(0x2545_f491_4f6c_dd1d);
    for minterm in 0..(1u64 << width) {
        let values: Vec<OutputValue> = (0..outputs)
            .map(|_| family.value(minterm, width, &mut rng))
            .collect();
        pla.add_term(Term::new(Pattern::from_minterm(minterm, width), &values))
            .unwrap();
    }
    pla
}

const FAMILIES: [Family; 3] = [Family::Parity, Family::Majority, Family::Random];
const WIDTHS: [usize; 4] = [4, 6, 8, 10];

fn bench_prime_implicants(c: &mut Criterion) {
    let mut group = c.benchmark_group("prime_implicants");
    for family in FAMILIES {
        for width in WIDTHS {
            let pla = generate(family, width, 1);
            let patterns = OutputSets::for_output(&pla, 0).unwrap().patterns(width);
            group.throughput(Throughput::Elements(patterns.len() as u64));
            group.bench_with_input(
                BenchmarkId::new(family.as_str(), width),
                &patterns,
                |b, patterns| b.iter(|| prime_implicants(black_box(patterns))),
            );
        }
    }
    group.finish();
}

fn bench_minimize(c: &mut Criterion) {
    let mut group = c.benchmark_group("minimize");
    for family in FAMILIES {
        for width in WIDTHS {
            let pla = generate(family, width, 1);
            group.throughput(Throughput::Elements(pla.terms().len() as u64));
            group.bench_with_input(BenchmarkId::new(family.as_str(), width), &pla, |b, pla| {
                b.iter(|| black_box(pla).minimize().unwrap())
            });
        }
    }
    group.finish();
}

fn bench_parallel_outputs(c: &mut Criterion) {
    let mut group = c.benchmark_group("parallel_outputs");
    let pla = generate(Family::Random, 8, 8);
    for parallel in [false, true] {
        let config = MinimizerConfig {
            parallel,
            ..Default::default()
        };
        let name = if parallel { "parallel" } else { "sequential" };
        group.bench_with_input(BenchmarkId::new(name, 8), &config, |b, config| {
            b.iter(|| black_box(&pla).minimize_with_config(config).unwrap())
        });
    }
    group.finish();
}

fn bench_full_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_pipeline");
    for width in WIDTHS {
        let content = generate(Family::Random, width, 2).to_pla_string().unwrap();
        group.throughput(Throughput::Bytes(content.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("parse_minimize_write", width),
            &content,
            |b, content| {
                b.iter(|| {
                    let pla = PLA::from_pla_string(black_box(content)).unwrap();
                    pla.minimize().unwrap().to_pla_string().unwrap()
                })
            },
        );
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_prime_implicants,
    bench_minimize,
    bench_parallel_outputs,
    bench_full_pipeline
);
criterion_main!(benches);
