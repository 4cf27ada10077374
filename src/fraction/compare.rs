// src/fraction/compare.rs
//
// 比較演算
//
// Fraction 同士の等価性は正規形の成分比較（derive）で決まる。
// 順序は交差乗算 a.n × b.d と b.n × a.d の比較。

use std::cmp::Ordering;

use num_bigint::BigInt;

use super::float::decompose_finite;
use super::Fraction;

impl Ord for Fraction {
    fn cmp(&self, other: &Self) -> Ordering {
        // 分母が等しければ分子だけで決まる（整数同士を含む）
        if self.denominator == other.denominator {
            return self.numerator.cmp(&other.numerator);
        }
        let left = &self.numerator * &other.denominator;
        let right = &other.numerator * &self.denominator;
        left.cmp(&right)
    }
}

impl PartialOrd for Fraction {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Fraction {
    /// 整数との比較: n と k × d
    pub fn cmp_integer(&self, other: &BigInt) -> Ordering {
        if self.is_integer() {
            self.numerator.cmp(other)
        } else {
            self.numerator.cmp(&(other * &self.denominator))
        }
    }

    /// 整数との等価: d == 1 かつ n == k
    pub fn eq_integer(&self, other: &BigInt) -> bool {
        self.is_integer() && &self.numerator == other
    }

    /// 浮動小数点数との比較
    ///
    /// NaN とは順序なし。±∞ は符号で決まり、有限値は正確な分数に
    /// 変換してから比較する。
    pub fn partial_cmp_f64(&self, other: f64) -> Option<Ordering> {
        if other.is_nan() {
            return None;
        }
        if other.is_infinite() {
            return Some(if other > 0.0 {
                Ordering::Less
            } else {
                Ordering::Greater
            });
        }
        let (numerator, denominator) = decompose_finite(other);
        Some(self.cmp(&Fraction::from_canonical(numerator, denominator)))
    }

    pub fn eq_f64(&self, other: f64) -> bool {
        self.partial_cmp_f64(other) == Some(Ordering::Equal)
    }
}

// ============================================================================
// 整数・浮動小数点数との比較演算子
// ============================================================================

impl PartialEq<BigInt> for Fraction {
    fn eq(&self, other: &BigInt) -> bool {
        self.eq_integer(other)
    }
}

impl PartialOrd<BigInt> for Fraction {
    fn partial_cmp(&self, other: &BigInt) -> Option<Ordering> {
        Some(self.cmp_integer(other))
    }
}

impl PartialEq<Fraction> for BigInt {
    fn eq(&self, other: &Fraction) -> bool {
        other.eq_integer(self)
    }
}

impl PartialOrd<Fraction> for BigInt {
    fn partial_cmp(&self, other: &Fraction) -> Option<Ordering> {
        Some(other.cmp_integer(self).reverse())
    }
}

impl PartialEq<i64> for Fraction {
    fn eq(&self, other: &i64) -> bool {
        self.eq_integer(&BigInt::from(*other))
    }
}

impl PartialOrd<i64> for Fraction {
    fn partial_cmp(&self, other: &i64) -> Option<Ordering> {
        Some(self.cmp_integer(&BigInt::from(*other)))
    }
}

impl PartialEq<Fraction> for i64 {
    fn eq(&self, other: &Fraction) -> bool {
        other.eq_integer(&BigInt::from(*self))
    }
}

impl PartialOrd<Fraction> for i64 {
    fn partial_cmp(&self, other: &Fraction) -> Option<Ordering> {
        Some(other.cmp_integer(&BigInt::from(*self)).reverse())
    }
}

impl PartialEq<f64> for Fraction {
    fn eq(&self, other: &f64) -> bool {
        self.eq_f64(*other)
    }
}

impl PartialOrd<f64> for Fraction {
    fn partial_cmp(&self, other: &f64) -> Option<Ordering> {
        self.partial_cmp_f64(*other)
    }
}

impl PartialEq<Fraction> for f64 {
    fn eq(&self, other: &Fraction) -> bool {
        other.eq_f64(*self)
    }
}

impl PartialOrd<Fraction> for f64 {
    fn partial_cmp(&self, other: &Fraction) -> Option<Ordering> {
        other.partial_cmp_f64(*self).map(Ordering::reverse)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fraction;

    #[test]
    fn test_ordering_between_fractions() {
        assert!(fraction!(1, 3) < fraction!(1, 2));
        assert!(fraction!(-1, 2) < fraction!(-1, 3));
        assert!(fraction!(7, 3) > fraction!(2));
        assert_eq!(fraction!(2, 4).cmp(&fraction!(1, 2)), Ordering::Equal);
        let mut values = vec![fraction!(3, 4), fraction!(-1), fraction!(1, 8), fraction!(0)];
        values.sort();
        assert_eq!(values, vec![fraction!(-1), fraction!(0), fraction!(1, 8), fraction!(3, 4)]);
    }

    #[test]
    fn test_compare_with_integers() {
        assert!(fraction!(4, 2) == 2i64);
        assert!(fraction!(5, 2) != 2i64);
        assert!(fraction!(5, 2) > 2i64);
        assert!(3i64 > fraction!(5, 2));
        assert!(BigInt::from(-1) < fraction!(-1, 2));
        assert!(fraction!(-3, 2) < BigInt::from(-1));
    }

    #[test]
    fn test_compare_with_floats() {
        assert!(fraction!(1, 2) == 0.5);
        assert!(fraction!(1, 10) != 0.1);
        assert!(fraction!(1, 10) < 0.1);
        assert!(fraction!(1, 3) > 0.333);
        assert!(fraction!(10).pow_int(&BigInt::from(400)).unwrap() < f64::INFINITY);
        assert!(fraction!(-10).pow_int(&BigInt::from(401)).unwrap() > f64::NEG_INFINITY);
        assert!(0.75 > fraction!(1, 2));
    }

    #[test]
    fn test_nan_is_unordered_and_unequal() {
        let half = fraction!(1, 2);
        assert_eq!(half.partial_cmp_f64(f64::NAN), None);
        assert!(!half.eq_f64(f64::NAN));
        assert!(!half.eq_f64(-f64::NAN));
        assert_eq!(PartialOrd::<f64>::partial_cmp(&half, &f64::NAN), None);
        assert_eq!(PartialOrd::<Fraction>::partial_cmp(&f64::NAN, &half), None);
    }
}
