//! Division benchmark: exact path vs rounded fallback.
//!
//! The exact path should stay well under the fallback for terminating
//! quotients; the fallback cost grows with operand length.

use bigdecimal::BigDecimal;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use deskcalc::decimal::divide;
use deskcalc::Engine;
use std::str::FromStr;

fn dec(s: &str) -> BigDecimal {
    BigDecimal::from_str(s).unwrap()
}

fn division_exact(c: &mut Criterion) {
    let lhs = dec("24");
    let rhs = dec("12");
    c.bench_function("divide_exact_small", |b| {
        b.iter(|| divide(black_box(&lhs), black_box(&rhs)))
    });

    let lhs = dec("1");
    let rhs = dec("1024");
    c.bench_function("divide_exact_power_of_two", |b| {
        b.iter(|| divide(black_box(&lhs), black_box(&rhs)))
    });
}

fn division_fallback(c: &mut Criterion) {
    let lhs = dec("1");
    let rhs = dec("3");
    c.bench_function("divide_fallback_one_third", |b| {
        b.iter(|| divide(black_box(&lhs), black_box(&rhs)))
    });

    let lhs = dec("123456789012345678901234567890.123456789");
    let rhs = dec("987654321098765432109876543.21");
    c.bench_function("divide_fallback_long_operands", |b| {
        b.iter(|| divide(black_box(&lhs), black_box(&rhs)))
    });
}

fn keyed_session(c: &mut Criterion) {
    c.bench_function("engine_keys_1_div_7_eval", |b| {
        b.iter(|| {
            let mut engine = Engine::new();
            engine.push_digit_or_point(black_box('1'));
            engine.press_divide().unwrap();
            engine.push_digit_or_point(black_box('7'));
            engine.evaluate()
        });
    });
}

criterion_group!(benches, division_exact, division_fallback, keyed_session);
criterion_main!(benches);
