use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use fluent_sql::{GroupBuilder, MySql, Op, SelectQb, SqlBuilder, select, select_from};

/// SELECT col0, col1, ... FROM t WHERE col0 = $1 AND col1 = $2 ...
fn build_select(n: usize) -> SelectQb {
    let columns: Vec<String> = (0..n).map(|i| format!("col{i}")).collect();
    (0..n).fold(select(columns).from("t"), |qb, i| {
        qb.where_(format!("col{i}"), Op::Eq, i as i64)
    })
}

/// Alternating AND/OR chains nested `depth` groups deep.
fn build_nested(depth: usize) -> SelectQb {
    fn group(qb: GroupBuilder, depth: usize) -> GroupBuilder {
        let qb = qb.eq("a", 1).or_where("b", Op::Eq, 2);
        if depth == 0 {
            qb
        } else {
            qb.where_group(|g| group(g, depth - 1))
        }
    }
    select_from("t").where_group(|g| group(g, depth))
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("sql_builder/build");

    for n in [1, 5, 10, 50, 100] {
        let qb = build_select(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &qb, |b, qb| {
            b.iter(|| black_box(qb.build()));
        });
    }

    group.finish();
}

fn bench_render_literal(c: &mut Criterion) {
    let mut group = c.benchmark_group("sql_builder/render_literal");

    for n in [1, 10, 100] {
        let qb = build_select(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &qb, |b, qb| {
            b.iter(|| black_box(qb.render()));
        });
    }

    group.finish();
}

fn bench_construct_and_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("sql_builder/construct_and_build");

    for n in [1, 5, 10, 50] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| black_box(build_select(n).build_with(&MySql)));
        });
    }

    group.finish();
}

fn bench_in_list(c: &mut Criterion) {
    let mut group = c.benchmark_group("sql_builder/in_list");

    for n in [5, 20, 100, 500] {
        let values: Vec<i64> = (0..n).collect();
        group.bench_with_input(BenchmarkId::from_parameter(n), &values, |b, values| {
            b.iter(|| {
                let qb = select_from("t").in_list("id", values.iter().copied());
                black_box(qb.build())
            });
        });
    }

    group.finish();
}

fn bench_nested_groups(c: &mut Criterion) {
    let mut group = c.benchmark_group("sql_builder/nested_groups");

    for depth in [1, 4, 16] {
        let qb = build_nested(depth);
        group.bench_with_input(BenchmarkId::from_parameter(depth), &qb, |b, qb| {
            b.iter(|| black_box(qb.build()));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_build,
    bench_render_literal,
    bench_construct_and_build,
    bench_in_list,
    bench_nested_groups
);
criterion_main!(benches);
