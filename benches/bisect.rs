use criterion::{Criterion, BenchmarkId, criterion_group, criterion_main};
use bisect1d::{bisect, functions::square_root_of};

mod common;

fn bench_problems(c: &mut Criterion) {
    let pbm = common::test_problems();
    let epsilon = 1e-7;

    let mut group = c.benchmark_group("problems");
    for (i, funs) in pbm.iter().enumerate() {
        // Use number indices so a comparative line graph is drawn.
        group.bench_function(
            BenchmarkId::new("bisect", i+1),
            |c| c.iter(|| -> Result<f64, bisect1d::Error<f64>> {
                let mut s = 0.;
                for (f, a, b) in funs.iter() {
                    s += bisect(f, *a, *b).epsilon(epsilon).root()?;
                }
                Ok(s)
            }));
    }
}

fn bench_epsilon(c: &mut Criterion) {
    let mut group = c.benchmark_group("epsilon");
    let f = square_root_of(10.);
    for e in [1e-4, 1e-8, 1e-10, 1e-12, 1e-14] {
        group.bench_function(
            BenchmarkId::new("sqrt", e),
            |b| b.iter(|| bisect(f, 0., 10.).epsilon(e).root()));
    }
}

criterion_group!(benches, bench_problems, bench_epsilon);
criterion_main!(benches);
