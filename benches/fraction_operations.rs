// benches/fraction_operations.rs
//
// Fraction 演算のベンチマーク
// 正規化（gcd）と任意精度整数の割り当てが支配的なコストを測定

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use fraction_core::{BinaryOp, Fraction, Value};
use num_bigint::BigInt;

/// 分子・分母がおよそ `digits` 桁の分数
fn wide_fraction(digits: usize) -> Fraction {
    let numerator: BigInt = format!("7{}", "3".repeat(digits)).parse().unwrap();
    let denominator: BigInt = format!("9{}", "1".repeat(digits)).parse().unwrap();
    Fraction::new(numerator, denominator).unwrap()
}

/// ベンチマーク1: 構築と約分
fn bench_construction(c: &mut Criterion) {
    c.bench_function("construction_small", |b| {
        b.iter(|| black_box(Fraction::new(black_box(1_234_567), black_box(7_654_321))));
    });
}

/// ベンチマーク2: 加算・乗算（桁数別）
fn bench_arithmetic(c: &mut Criterion) {
    let mut group = c.benchmark_group("arithmetic");

    for digits in [1, 20, 200].iter() {
        let lhs = wide_fraction(*digits);
        let rhs = wide_fraction(*digits + 1);
        group.bench_with_input(BenchmarkId::new("add", digits), digits, |b, _| {
            b.iter(|| black_box(&lhs + &rhs));
        });
        group.bench_with_input(BenchmarkId::new("mul", digits), digits, |b, _| {
            b.iter(|| black_box(&lhs * &rhs));
        });
    }
    group.finish();
}

/// ベンチマーク3: 同じ分母同士の加算（高速経路）
fn bench_same_denominator(c: &mut Criterion) {
    let lhs = Fraction::new(1, 7).unwrap();
    let rhs = Fraction::new(3, 7).unwrap();
    c.bench_function("add_same_denominator", |b| {
        b.iter(|| black_box(&lhs + &rhs));
    });
}

/// ベンチマーク4: 文字列の解析
fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    for text in ["3/4", "-12.5e-3", "  1_000_000/3  "].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(text), text, |b, text| {
            b.iter(|| black_box(text.parse::<Fraction>()).ok());
        });
    }
    group.finish();
}

/// ベンチマーク5: float からの構築と最良有理近似
fn bench_float_and_limit(c: &mut Criterion) {
    c.bench_function("from_f64", |b| {
        b.iter(|| black_box(Fraction::from_f64(black_box(std::f64::consts::PI))).ok());
    });

    let pi = Fraction::from_f64(std::f64::consts::PI).unwrap();
    let mut group = c.benchmark_group("limit_denominator");
    for bound in [10, 1_000, 1_000_000].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(bound), bound, |b, &bound| {
            b.iter(|| black_box(pi.limit_denominator(bound)).ok());
        });
    }
    group.finish();
}

/// ベンチマーク6: 動的な振り分けを経由した演算
fn bench_dispatch(c: &mut Criterion) {
    let lhs = Value::Fraction(Fraction::new(2, 3).unwrap());
    let operands = [
        ("fraction", Value::Fraction(Fraction::new(5, 7).unwrap())),
        ("integer", Value::integer(3)),
        ("float", Value::Float(0.25)),
    ];
    let mut group = c.benchmark_group("dispatch_add");
    for (name, rhs) in operands.iter() {
        group.bench_with_input(BenchmarkId::from_parameter(name), rhs, |b, rhs| {
            b.iter(|| black_box(Value::binary(BinaryOp::Add, &lhs, rhs)).ok());
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_construction,
    bench_arithmetic,
    bench_same_denominator,
    bench_parse,
    bench_float_and_limit,
    bench_dispatch
);
criterion_main!(benches);
