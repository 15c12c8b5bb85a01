use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use infix_calculator::interpreter::calculate;

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("calculate");
    let expressions = [
        "2+3*4".to_string(),
        "(4 + 4) * 68.5".to_string(),
        "2^3^2 - -5 / 0.5".to_string(),
        "((1.5 + 2) * (3 - 4.25))^2 / (7 - 2^-1)".to_string(),
        "1+2-3*4/5^6+7-8*9/10^11+12-13*14/15^16".to_string(),
    ];
    for expression in expressions {
        group.throughput(Throughput::Bytes(expression.len() as u64));

        group.bench_with_input(
            BenchmarkId::from_parameter(&expression),
            &expression,
            |bencher, expression| {
                bencher.iter(|| calculate(expression));
            },
        );
    }
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
