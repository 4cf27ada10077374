// tests/fraction_properties.rs
//
// Fraction の性質テスト
//
// 正規形・等価性・ハッシュ・算術の恒等式を乱数入力で確かめる。
// 値は i64 の範囲から作るが、演算の途中は任意精度になる。

use std::cmp::Ordering;

use fraction_core::fraction::hash::hash_integer;
use fraction_core::{Fraction, ParseMode};
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, Zero};
use proptest::prelude::*;

fn nonzero() -> impl Strategy<Value = i64> {
    prop_oneof![-1_000_000_000i64..0, 1i64..1_000_000_000]
}

fn fraction_value() -> impl Strategy<Value = Fraction> {
    (-1_000_000_000_000i64..1_000_000_000_000, nonzero())
        .prop_map(|(n, d)| Fraction::new(n, d).unwrap())
}

fn nonzero_fraction() -> impl Strategy<Value = Fraction> {
    (nonzero(), nonzero()).prop_map(|(n, d)| Fraction::new(n, d).unwrap())
}

fn finite_f64() -> impl Strategy<Value = f64> {
    proptest::num::f64::NORMAL | proptest::num::f64::SUBNORMAL | proptest::num::f64::ZERO
}

fn assert_canonical(value: &Fraction) -> Result<(), TestCaseError> {
    prop_assert!(value.denominator().is_positive(), "{:?}", value);
    prop_assert!(value.numerator().gcd(value.denominator()).is_one(), "{:?}", value);
    if value.numerator().is_zero() {
        prop_assert!(value.denominator().is_one(), "{:?}", value);
    }
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    // ========================================================================
    // 正規形
    // ========================================================================

    #[test]
    fn construction_is_canonical(n in any::<i64>(), d in nonzero()) {
        let value = Fraction::new(n, d).unwrap();
        assert_canonical(&value)?;
        // n/d と値が等しい: value.num * d == n * value.den
        prop_assert_eq!(
            value.numerator() * BigInt::from(d),
            BigInt::from(n) * value.denominator()
        );
    }

    #[test]
    fn scaled_inputs_are_equal_and_hash_alike(n in -1_000_000i64..1_000_000, d in nonzero(), k in nonzero()) {
        let a = Fraction::new(n, d).unwrap();
        let b = Fraction::new(BigInt::from(n) * k, BigInt::from(d) * k).unwrap();
        prop_assert_eq!(&a, &b);
        prop_assert_eq!(a.hash_value(), b.hash_value());
    }

    #[test]
    fn integers_hash_like_host_integers(n in any::<i64>()) {
        let value = Fraction::from_integer(n);
        prop_assert_eq!(value.hash_value(), hash_integer(&BigInt::from(n)));
        prop_assert!(value.hash_value() != -1);
    }

    // ========================================================================
    // 往復
    // ========================================================================

    #[test]
    fn display_parses_back(value in fraction_value()) {
        let text = value.to_string();
        prop_assert_eq!(text.parse::<Fraction>().unwrap(), value.clone());
        prop_assert_eq!(Fraction::parse_with(&text, ParseMode::Legacy).unwrap(), value);
    }

    #[test]
    fn integer_ratio_rebuilds_value(value in fraction_value()) {
        let (n, d) = value.as_integer_ratio();
        prop_assert_eq!(Fraction::new(n, d).unwrap(), value);
    }

    #[test]
    fn decimal_text_is_exact(whole in 0u32..100_000, frac in 0u32..1000) {
        let value: Fraction = format!("{}.{:03}", whole, frac).parse().unwrap();
        let expected = Fraction::new(i64::from(whole) * 1000 + i64::from(frac), 1000).unwrap();
        prop_assert_eq!(value, expected);
    }

    #[test]
    fn float_decomposition_is_exact(x in finite_f64()) {
        let value = Fraction::from_f64(x).unwrap();
        assert_canonical(&value)?;
        prop_assert_eq!(value.try_to_f64().unwrap(), x);
        prop_assert_eq!(value.hash_value(), fraction_core::fraction::hash::hash_float(x));
    }

    // ========================================================================
    // 算術
    // ========================================================================

    #[test]
    fn division_undoes_multiplication(a in fraction_value(), b in nonzero_fraction()) {
        let quotient = a.checked_div(&b).unwrap();
        assert_canonical(&quotient)?;
        prop_assert_eq!(&quotient * &b, a);
    }

    #[test]
    fn addition_and_multiplication_commute(a in fraction_value(), b in fraction_value()) {
        prop_assert_eq!(&a + &b, &b + &a);
        prop_assert_eq!(&a * &b, &b * &a);
        prop_assert_eq!(&(&a + &b) - &b, a);
    }

    #[test]
    fn addition_and_multiplication_associate(
        a in fraction_value(),
        b in fraction_value(),
        c in fraction_value()
    ) {
        prop_assert_eq!(&(&a + &b) + &c, &a + &(&b + &c));
        prop_assert_eq!(&(&a * &b) * &c, &a * &(&b * &c));
        prop_assert_eq!(&a * &(&b + &c), &(&a * &b) + &(&a * &c));
    }

    #[test]
    fn divmod_reconstructs_dividend(a in fraction_value(), b in nonzero_fraction()) {
        let (quotient, remainder) = a.divmod(&b).unwrap();
        prop_assert_eq!(&b * Fraction::from_integer(quotient) + &remainder, a);
        // 剰余は除数と同じ符号を持ち、絶対値は除数より小さい
        prop_assert!(remainder.abs() < b.abs());
        prop_assert!(remainder.is_zero() || remainder.is_negative() == b.is_negative());
    }

    #[test]
    fn rounding_brackets_value(value in fraction_value()) {
        let floor = Fraction::from_integer(value.floor());
        let ceil = Fraction::from_integer(value.ceil());
        prop_assert!(floor <= value && value <= ceil);
        prop_assert!(&ceil - &floor <= Fraction::from_integer(1));
        let nearest = Fraction::from_integer(value.round());
        prop_assert!((&nearest - &value).abs() <= Fraction::new(1, 2).unwrap());
    }

    // ========================================================================
    // 比較
    // ========================================================================

    #[test]
    fn ordering_is_transitive(a in fraction_value(), b in fraction_value(), c in fraction_value()) {
        let mut sorted = vec![a, b, c];
        sorted.sort();
        prop_assert!(sorted[0] <= sorted[1]);
        prop_assert!(sorted[1] <= sorted[2]);
        prop_assert!(sorted[0] <= sorted[2]);
    }

    #[test]
    fn ordering_matches_difference_sign(a in fraction_value(), b in fraction_value()) {
        let expected = match (&a - &b).numerator().sign() {
            num_bigint::Sign::Minus => Ordering::Less,
            num_bigint::Sign::NoSign => Ordering::Equal,
            num_bigint::Sign::Plus => Ordering::Greater,
        };
        prop_assert_eq!(a.cmp(&b), expected);
        if a == b {
            prop_assert_eq!(a.hash_value(), b.hash_value());
        }
    }

    // ========================================================================
    // 分母の制限
    // ========================================================================

    #[test]
    fn limit_denominator_respects_bound(value in fraction_value(), bound in 1i64..10_000) {
        let limited = value.limit_denominator(bound).unwrap();
        assert_canonical(&limited)?;
        prop_assert!(limited.denominator() <= &BigInt::from(bound));
        if value.denominator() <= &BigInt::from(bound) {
            prop_assert_eq!(limited, value);
        }
    }

    #[test]
    fn limit_denominator_is_closest(n in -5_000i64..5_000, d in 1i64..2_000, bound in 1i64..60) {
        let value = Fraction::new(n, d).unwrap();
        let limited = value.limit_denominator(bound).unwrap();
        let distance = (&limited - &value).abs();
        // 分母 q <= bound の全候補 floor(x·q)/q, ceil(x·q)/q より遠くない
        for q in 1..=bound {
            let scaled = &value * q;
            for p in [scaled.floor(), scaled.ceil()] {
                let candidate = Fraction::new(p, q).unwrap();
                prop_assert!(
                    distance <= (&candidate - &value).abs(),
                    "{:?} limited to {:?} but {:?} is closer", value, limited, candidate
                );
            }
        }
    }
}
