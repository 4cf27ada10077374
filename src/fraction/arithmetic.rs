// src/fraction/arithmetic.rs
//
// 分数の算術演算
//
// 乗除算は乗算の前に交差約分（Cross-Cancellation）を行い、
// 中間値の肥大化を抑える。加減算は結果に対して一度だけ約分する。
// 整数との演算は専用のカーネルで処理する。

use std::iter::{Product, Sum};
use std::ops::{Add, Div, Mul, Neg, Rem, Sub};

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, ToPrimitive, Zero};

use super::Fraction;
use crate::error::{FractionError, Result};

const NEGATIVE_POWER_OF_ZERO: &str =
    "Either exponent should be non-negative or base should not be zero.";
const INTEGER_DIVISION_BY_ZERO: &str = "integer division or modulo by zero";

fn true_division_by_zero(numerator: &BigInt) -> FractionError {
    FractionError::division_by_zero(format!("Fraction({}, 0)", numerator))
}

fn integer_division_by_zero() -> FractionError {
    FractionError::division_by_zero(INTEGER_DIVISION_BY_ZERO)
}

// ============================================================================
// Fraction ⊕ Fraction
// ============================================================================

/// 加算: (a/b) + (c/d)
pub(crate) fn add_fractions(a: &Fraction, b: &Fraction) -> Fraction {
    // 整数同士
    if a.denominator.is_one() && b.denominator.is_one() {
        return Fraction::from_integer(&a.numerator + &b.numerator);
    }
    // 共通分母
    if a.denominator == b.denominator {
        return Fraction::reduced(&a.numerator + &b.numerator, a.denominator.clone());
    }
    Fraction::reduced(
        &a.numerator * &b.denominator + &b.numerator * &a.denominator,
        &a.denominator * &b.denominator,
    )
}

/// 減算: (a/b) - (c/d)
pub(crate) fn sub_fractions(a: &Fraction, b: &Fraction) -> Fraction {
    if a.denominator.is_one() && b.denominator.is_one() {
        return Fraction::from_integer(&a.numerator - &b.numerator);
    }
    if a.denominator == b.denominator {
        return Fraction::reduced(&a.numerator - &b.numerator, a.denominator.clone());
    }
    Fraction::reduced(
        &a.numerator * &b.denominator - &b.numerator * &a.denominator,
        &a.denominator * &b.denominator,
    )
}

/// 乗算: (a/b) × (c/d)
///
/// g1 = gcd(a, d), g2 = gcd(c, b) で先に約分してから掛けるため、
/// 結果は最初から既約になる。
pub(crate) fn mul_fractions(a: &Fraction, b: &Fraction) -> Fraction {
    if a.denominator.is_one() && b.denominator.is_one() {
        return Fraction::from_integer(&a.numerator * &b.numerator);
    }
    let g1 = a.numerator.gcd(&b.denominator);
    let g2 = b.numerator.gcd(&a.denominator);
    let numerator = (&a.numerator / &g1) * (&b.numerator / &g2);
    let denominator = (&a.denominator / &g2) * (&b.denominator / &g1);
    Fraction::from_canonical(numerator, denominator)
}

/// 除算: (a/b) ÷ (c/d) = (a×d)/(b×c)
///
/// g1 = gcd(a, c), g2 = gcd(b, d) で交差約分し、最後に符号を正規化する。
pub(crate) fn div_fractions(a: &Fraction, b: &Fraction) -> Result<Fraction> {
    if b.numerator.is_zero() {
        return Err(true_division_by_zero(&a.numerator));
    }
    let g1 = a.numerator.gcd(&b.numerator);
    let g2 = a.denominator.gcd(&b.denominator);
    let numerator = (&a.numerator / &g1) * (&b.denominator / &g2);
    let denominator = (&a.denominator / &g2) * (&b.numerator / &g1);
    Ok(Fraction::sign_normalized(numerator, denominator))
}

/// 切り捨て除算: floor((a/b) ÷ (c/d))。結果は整数。
pub(crate) fn floor_div_fractions(a: &Fraction, b: &Fraction) -> Result<BigInt> {
    if b.numerator.is_zero() {
        return Err(integer_division_by_zero());
    }
    let g1 = a.numerator.gcd(&b.numerator);
    let g2 = a.denominator.gcd(&b.denominator);
    let dividend = (&a.numerator / &g1) * (&b.denominator / &g2);
    let divisor = (&a.denominator / &g2) * (&b.numerator / &g1);
    Ok(dividend.div_floor(&divisor))
}

/// 商と剰余: 商は整数の切り捨て除算、剰余は (a×d mod c×b) / (b×d)
pub(crate) fn divmod_fractions(a: &Fraction, b: &Fraction) -> Result<(BigInt, Fraction)> {
    if b.numerator.is_zero() {
        return Err(integer_division_by_zero());
    }
    let dividend = &a.numerator * &b.denominator;
    let divisor = &b.numerator * &a.denominator;
    let (quotient, remainder) = dividend.div_mod_floor(&divisor);
    Ok((quotient, Fraction::reduced(remainder, &a.denominator * &b.denominator)))
}

/// 剰余（数学的剰余: 符号は除数に従う）
pub(crate) fn rem_fractions(a: &Fraction, b: &Fraction) -> Result<Fraction> {
    if b.numerator.is_zero() {
        return Err(integer_division_by_zero());
    }
    let dividend = &a.numerator * &b.denominator;
    let divisor = &b.numerator * &a.denominator;
    Ok(Fraction::reduced(
        dividend.mod_floor(&divisor),
        &a.denominator * &b.denominator,
    ))
}

// ============================================================================
// Fraction ⊕ 整数
// ============================================================================

pub(crate) fn add_integer(a: &Fraction, k: &BigInt) -> Fraction {
    // gcd(n + k·d, d) = gcd(n, d) = 1
    Fraction::from_canonical(&a.numerator + k * &a.denominator, a.denominator.clone())
}

pub(crate) fn sub_integer(a: &Fraction, k: &BigInt) -> Fraction {
    Fraction::from_canonical(&a.numerator - k * &a.denominator, a.denominator.clone())
}

pub(crate) fn mul_integer(a: &Fraction, k: &BigInt) -> Fraction {
    let g = k.gcd(&a.denominator);
    Fraction::from_canonical(&a.numerator * (k / &g), &a.denominator / &g)
}

pub(crate) fn div_integer(a: &Fraction, k: &BigInt) -> Result<Fraction> {
    if k.is_zero() {
        return Err(true_division_by_zero(&a.numerator));
    }
    let g = a.numerator.gcd(k);
    Ok(Fraction::sign_normalized(
        &a.numerator / &g,
        &a.denominator * (k / &g),
    ))
}

pub(crate) fn floor_div_integer(a: &Fraction, k: &BigInt) -> Result<BigInt> {
    if k.is_zero() {
        return Err(integer_division_by_zero());
    }
    let g = a.numerator.gcd(k);
    Ok((&a.numerator / &g).div_floor(&(&a.denominator * (k / &g))))
}

pub(crate) fn divmod_integer(a: &Fraction, k: &BigInt) -> Result<(BigInt, Fraction)> {
    if k.is_zero() {
        return Err(integer_division_by_zero());
    }
    let (quotient, remainder) = a.numerator.div_mod_floor(&(k * &a.denominator));
    Ok((quotient, Fraction::reduced(remainder, a.denominator.clone())))
}

pub(crate) fn rem_integer(a: &Fraction, k: &BigInt) -> Result<Fraction> {
    if k.is_zero() {
        return Err(integer_division_by_zero());
    }
    let remainder = a.numerator.mod_floor(&(k * &a.denominator));
    Ok(Fraction::reduced(remainder, a.denominator.clone()))
}

// ============================================================================
// 整数 ⊕ Fraction（反射側）
// ============================================================================

pub(crate) fn integer_add(k: &BigInt, a: &Fraction) -> Fraction {
    add_integer(a, k)
}

/// k - a = -(a - k)
pub(crate) fn integer_sub(k: &BigInt, a: &Fraction) -> Fraction {
    -sub_integer(a, k)
}

pub(crate) fn integer_mul(k: &BigInt, a: &Fraction) -> Fraction {
    mul_integer(a, k)
}

pub(crate) fn integer_div(k: &BigInt, a: &Fraction) -> Result<Fraction> {
    if a.numerator.is_zero() {
        return Err(true_division_by_zero(k));
    }
    let g = k.gcd(&a.numerator);
    Ok(Fraction::sign_normalized(
        (k / &g) * &a.denominator,
        &a.numerator / &g,
    ))
}

pub(crate) fn integer_floor_div(k: &BigInt, a: &Fraction) -> Result<BigInt> {
    if a.numerator.is_zero() {
        return Err(integer_division_by_zero());
    }
    let g = k.gcd(&a.numerator);
    Ok(((k / &g) * &a.denominator).div_floor(&(&a.numerator / &g)))
}

pub(crate) fn integer_divmod(k: &BigInt, a: &Fraction) -> Result<(BigInt, Fraction)> {
    if a.numerator.is_zero() {
        return Err(integer_division_by_zero());
    }
    let (quotient, remainder) = (k * &a.denominator).div_mod_floor(&a.numerator);
    Ok((quotient, Fraction::reduced(remainder, a.denominator.clone())))
}

pub(crate) fn integer_rem(k: &BigInt, a: &Fraction) -> Result<Fraction> {
    if a.numerator.is_zero() {
        return Err(integer_division_by_zero());
    }
    let remainder = (k * &a.denominator).mod_floor(&a.numerator);
    Ok(Fraction::reduced(remainder, a.denominator.clone()))
}

// ============================================================================
// 冪乗
// ============================================================================

/// 整数指数の冪: (n^e)/(d^e)
///
/// 負の指数は底を逆数にしてから |e| 乗する。
pub(crate) fn pow_integer(base: &Fraction, exponent: &BigInt) -> Result<Fraction> {
    if exponent.is_negative() {
        let inverted = base
            .recip()
            .map_err(|_| FractionError::division_by_zero(NEGATIVE_POWER_OF_ZERO))?;
        return pow_integer(&inverted, &-exponent);
    }
    if exponent.is_zero() {
        return Ok(Fraction::from_integer(1));
    }
    // 0, 1, -1 は指数の大きさに関係なく求まる
    if base.denominator.is_one() && base.numerator.abs() <= BigInt::one() {
        let numerator = if base.numerator.is_negative() && exponent.is_even() {
            BigInt::one()
        } else {
            base.numerator.clone()
        };
        return Ok(Fraction::from_integer(numerator));
    }
    let exponent = exponent
        .to_u32()
        .ok_or_else(|| FractionError::overflow(format!("exponent {} is too large", exponent)))?;
    // gcd(n, d) = 1 なら gcd(n^e, d^e) = 1
    Ok(Fraction::from_canonical(
        base.numerator.pow(exponent),
        base.denominator.pow(exponent),
    ))
}

/// 法付きの冪。底と指数が整数なら modpow、そうでなければ正確な冪の剰余。
pub(crate) fn pow_mod_integer(base: &Fraction, exponent: &BigInt, modulus: &BigInt) -> Result<Fraction> {
    if exponent.is_negative() {
        let inverted = base
            .recip()
            .map_err(|_| FractionError::division_by_zero(NEGATIVE_POWER_OF_ZERO))?;
        return pow_mod_integer(&inverted, &-exponent, modulus);
    }
    if base.is_integer() {
        if modulus.is_zero() {
            return Err(FractionError::value("pow() 3rd argument cannot be 0"));
        }
        return Ok(Fraction::from_integer(base.numerator.modpow(exponent, modulus)));
    }
    rem_integer(&pow_integer(base, exponent)?, modulus)
}

// ============================================================================
// 公開メソッド（失敗しうる演算は Result を返す）
// ============================================================================

impl Fraction {
    pub fn checked_div(&self, other: &Fraction) -> Result<Fraction> {
        div_fractions(self, other)
    }

    pub fn checked_div_integer(&self, other: &BigInt) -> Result<Fraction> {
        div_integer(self, other)
    }

    pub fn floor_div(&self, other: &Fraction) -> Result<BigInt> {
        floor_div_fractions(self, other)
    }

    pub fn floor_div_integer(&self, other: &BigInt) -> Result<BigInt> {
        floor_div_integer(self, other)
    }

    pub fn checked_rem(&self, other: &Fraction) -> Result<Fraction> {
        rem_fractions(self, other)
    }

    pub fn checked_rem_integer(&self, other: &BigInt) -> Result<Fraction> {
        rem_integer(self, other)
    }

    /// (商, 剰余)。商は整数、剰余は分数。
    pub fn divmod(&self, other: &Fraction) -> Result<(BigInt, Fraction)> {
        divmod_fractions(self, other)
    }

    pub fn divmod_integer(&self, other: &BigInt) -> Result<(BigInt, Fraction)> {
        divmod_integer(self, other)
    }

    pub fn pow_int(&self, exponent: &BigInt) -> Result<Fraction> {
        pow_integer(self, exponent)
    }

    pub fn pow_mod(&self, exponent: &BigInt, modulus: &BigInt) -> Result<Fraction> {
        pow_mod_integer(self, exponent, modulus)
    }
}

// ============================================================================
// 演算子トレイト
// ============================================================================
//
// `/` と `%` はゼロ除算で panic する（num_rational::Ratio と同じ挙動）。
// 失敗を値で受け取りたい場合は checked_* を使う。

fn div_or_panic(a: &Fraction, b: &Fraction) -> Fraction {
    match div_fractions(a, b) {
        Ok(result) => result,
        Err(err) => panic!("{}", err),
    }
}

fn rem_or_panic(a: &Fraction, b: &Fraction) -> Fraction {
    match rem_fractions(a, b) {
        Ok(result) => result,
        Err(err) => panic!("{}", err),
    }
}

fn div_integer_or_panic(a: &Fraction, k: &BigInt) -> Fraction {
    match div_integer(a, k) {
        Ok(result) => result,
        Err(err) => panic!("{}", err),
    }
}

fn rem_integer_or_panic(a: &Fraction, k: &BigInt) -> Fraction {
    match rem_integer(a, k) {
        Ok(result) => result,
        Err(err) => panic!("{}", err),
    }
}

fn integer_div_or_panic(k: &BigInt, a: &Fraction) -> Fraction {
    match integer_div(k, a) {
        Ok(result) => result,
        Err(err) => panic!("{}", err),
    }
}

fn integer_rem_or_panic(k: &BigInt, a: &Fraction) -> Fraction {
    match integer_rem(k, a) {
        Ok(result) => result,
        Err(err) => panic!("{}", err),
    }
}

macro_rules! forward_fraction_binop {
    (impl $imp:ident, $method:ident, $kernel:path) => {
        impl<'a, 'b> $imp<&'b Fraction> for &'a Fraction {
            type Output = Fraction;

            #[inline]
            fn $method(self, other: &'b Fraction) -> Fraction {
                $kernel(self, other)
            }
        }

        impl<'a> $imp<Fraction> for &'a Fraction {
            type Output = Fraction;

            #[inline]
            fn $method(self, other: Fraction) -> Fraction {
                $kernel(self, &other)
            }
        }

        impl<'b> $imp<&'b Fraction> for Fraction {
            type Output = Fraction;

            #[inline]
            fn $method(self, other: &'b Fraction) -> Fraction {
                $kernel(&self, other)
            }
        }

        impl $imp<Fraction> for Fraction {
            type Output = Fraction;

            #[inline]
            fn $method(self, other: Fraction) -> Fraction {
                $kernel(&self, &other)
            }
        }
    };
}

forward_fraction_binop!(impl Add, add, add_fractions);
forward_fraction_binop!(impl Sub, sub, sub_fractions);
forward_fraction_binop!(impl Mul, mul, mul_fractions);
forward_fraction_binop!(impl Div, div, div_or_panic);
forward_fraction_binop!(impl Rem, rem, rem_or_panic);

macro_rules! forward_integer_binop {
    (impl $imp:ident, $method:ident, $kernel:path, $reflected:path) => {
        impl<'a, 'b> $imp<&'b BigInt> for &'a Fraction {
            type Output = Fraction;

            #[inline]
            fn $method(self, other: &'b BigInt) -> Fraction {
                $kernel(self, other)
            }
        }

        impl $imp<BigInt> for Fraction {
            type Output = Fraction;

            #[inline]
            fn $method(self, other: BigInt) -> Fraction {
                $kernel(&self, &other)
            }
        }

        impl<'a> $imp<i64> for &'a Fraction {
            type Output = Fraction;

            #[inline]
            fn $method(self, other: i64) -> Fraction {
                $kernel(self, &BigInt::from(other))
            }
        }

        impl $imp<i64> for Fraction {
            type Output = Fraction;

            #[inline]
            fn $method(self, other: i64) -> Fraction {
                $kernel(&self, &BigInt::from(other))
            }
        }

        impl<'a, 'b> $imp<&'b Fraction> for &'a BigInt {
            type Output = Fraction;

            #[inline]
            fn $method(self, other: &'b Fraction) -> Fraction {
                $reflected(self, other)
            }
        }

        impl $imp<Fraction> for BigInt {
            type Output = Fraction;

            #[inline]
            fn $method(self, other: Fraction) -> Fraction {
                $reflected(&self, &other)
            }
        }

        impl $imp<Fraction> for i64 {
            type Output = Fraction;

            #[inline]
            fn $method(self, other: Fraction) -> Fraction {
                $reflected(&BigInt::from(self), &other)
            }
        }
    };
}

forward_integer_binop!(impl Add, add, add_integer, integer_add);
forward_integer_binop!(impl Sub, sub, sub_integer, integer_sub);
forward_integer_binop!(impl Mul, mul, mul_integer, integer_mul);
forward_integer_binop!(impl Div, div, div_integer_or_panic, integer_div_or_panic);
forward_integer_binop!(impl Rem, rem, rem_integer_or_panic, integer_rem_or_panic);

impl Neg for Fraction {
    type Output = Fraction;

    #[inline]
    fn neg(self) -> Fraction {
        Fraction::from_canonical(-self.numerator, self.denominator)
    }
}

impl<'a> Neg for &'a Fraction {
    type Output = Fraction;

    #[inline]
    fn neg(self) -> Fraction {
        Fraction::from_canonical(-&self.numerator, self.denominator.clone())
    }
}

impl Sum for Fraction {
    fn sum<I: Iterator<Item = Fraction>>(iter: I) -> Self {
        iter.fold(Fraction::default(), |acc, item| add_fractions(&acc, &item))
    }
}

impl<'a> Sum<&'a Fraction> for Fraction {
    fn sum<I: Iterator<Item = &'a Fraction>>(iter: I) -> Self {
        iter.fold(Fraction::default(), |acc, item| add_fractions(&acc, item))
    }
}

impl Product for Fraction {
    fn product<I: Iterator<Item = Fraction>>(iter: I) -> Self {
        iter.fold(Fraction::from_integer(1), |acc, item| mul_fractions(&acc, &item))
    }
}

impl<'a> Product<&'a Fraction> for Fraction {
    fn product<I: Iterator<Item = &'a Fraction>>(iter: I) -> Self {
        iter.fold(Fraction::from_integer(1), |acc, item| mul_fractions(&acc, item))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fraction;

    fn big(n: i64) -> BigInt {
        BigInt::from(n)
    }

    #[test]
    fn test_add_common_and_distinct_denominators() {
        assert_eq!(fraction!(1, 4) + fraction!(1, 4), fraction!(1, 2));
        assert_eq!(fraction!(1, 3) + fraction!(1, 6), fraction!(1, 2));
        assert_eq!(fraction!(2) + fraction!(3), fraction!(5));
        assert_eq!(fraction!(1, 2) - fraction!(1, 2), fraction!(0));
        assert_eq!((fraction!(1, 2) - fraction!(1, 2)).denominator(), &big(1));
    }

    #[test]
    fn test_mul_cross_reduces() {
        let result = fraction!(2, 3) * fraction!(9, 4);
        assert_eq!(result.numerator(), &big(3));
        assert_eq!(result.denominator(), &big(2));
        assert_eq!(fraction!(0) * fraction!(5, 7), fraction!(0));
        assert_eq!(fraction!(-3, 5) * fraction!(5, -3), fraction!(1));
    }

    #[test]
    fn test_div_normalizes_sign() {
        let result = fraction!(1, 2).checked_div(&fraction!(-3, 4)).unwrap();
        assert_eq!(result.numerator(), &big(-2));
        assert_eq!(result.denominator(), &big(3));
        assert_eq!(fraction!(0).checked_div(&fraction!(-3, 4)).unwrap(), fraction!(0));
    }

    #[test]
    fn test_div_by_zero() {
        let err = fraction!(3, 4).checked_div(&fraction!(0)).unwrap_err();
        assert_eq!(err, FractionError::DivisionByZero("Fraction(3, 0)".to_string()));
        assert!(fraction!(3, 4).checked_div_integer(&big(0)).is_err());
        assert!(fraction!(3, 4).floor_div(&fraction!(0)).is_err());
        assert!(fraction!(3, 4).checked_rem(&fraction!(0)).is_err());
        assert!(integer_div(&big(1), &fraction!(0)).is_err());
    }

    #[test]
    #[should_panic(expected = "Division by zero")]
    fn test_div_operator_panics_on_zero() {
        let _ = fraction!(1, 2) / fraction!(0);
    }

    #[test]
    fn test_floor_div_and_divmod() {
        assert_eq!(fraction!(7, 2).floor_div(&fraction!(1, 3)).unwrap(), big(10));
        assert_eq!(fraction!(-7, 2).floor_div(&fraction!(1, 3)).unwrap(), big(-11));
        let (q, r) = fraction!(7, 2).divmod(&fraction!(1, 3)).unwrap();
        assert_eq!(q, big(10));
        assert_eq!(r, fraction!(1, 6));
        let (q, r) = fraction!(-7, 2).divmod(&fraction!(1, 3)).unwrap();
        assert_eq!(q, big(-11));
        assert_eq!(r, fraction!(1, 6));
        // 剰余の符号は除数に従う
        assert_eq!(fraction!(7, 2).checked_rem(&fraction!(-1, 3)).unwrap(), fraction!(-1, 6));
    }

    #[test]
    fn test_integer_kernels() {
        assert_eq!(fraction!(1, 3) + 1i64, fraction!(4, 3));
        assert_eq!(1i64 - fraction!(1, 3), fraction!(2, 3));
        assert_eq!(fraction!(1, 6) * 4i64, fraction!(2, 3));
        assert_eq!(fraction!(2, 3) / 4i64, fraction!(1, 6));
        assert_eq!(4i64 / fraction!(2, 3), fraction!(6));
        assert_eq!(fraction!(-2, 3) / -4i64, fraction!(1, 6));
        assert_eq!(fraction!(7, 2).floor_div_integer(&big(2)).unwrap(), big(1));
        assert_eq!(integer_floor_div(&big(7), &fraction!(2, 3)).unwrap(), big(10));
        let (q, r) = fraction!(7, 2).divmod_integer(&big(-2)).unwrap();
        assert_eq!(q, big(-2));
        assert_eq!(r, fraction!(-1, 2));
        let (q, r) = integer_divmod(&big(7), &fraction!(2, 3)).unwrap();
        assert_eq!(q, big(10));
        assert_eq!(r, fraction!(1, 3));
        assert_eq!(integer_rem(&big(7), &fraction!(2, 3)).unwrap(), fraction!(1, 3));
        assert_eq!(fraction!(7, 2) % 2i64, fraction!(3, 2));
    }

    #[test]
    fn test_pow_integer() {
        assert_eq!(fraction!(-1, 3).pow_int(&big(2)).unwrap(), fraction!(1, 9));
        assert_eq!(fraction!(1, 2).pow_int(&big(-1)).unwrap(), fraction!(2));
        assert_eq!(fraction!(-2, 3).pow_int(&big(-3)).unwrap(), fraction!(-27, 8));
        assert_eq!(fraction!(0).pow_int(&big(0)).unwrap(), fraction!(1));
        assert_eq!(fraction!(-1).pow_int(&BigInt::from(10u64).pow(30)).unwrap(), fraction!(1));
        let err = fraction!(0).pow_int(&big(-2)).unwrap_err();
        assert_eq!(err.kind(), "ZeroDivisionError");
    }

    #[test]
    fn test_pow_mod() {
        assert_eq!(fraction!(3).pow_mod(&big(4), &big(5)).unwrap(), fraction!(1));
        assert_eq!(fraction!(3).pow_mod(&big(2), &big(-5)).unwrap(), fraction!(-1));
        // 1/2 の -3 乗 = 8, 8 mod 5 = 3
        assert_eq!(fraction!(1, 2).pow_mod(&big(-3), &big(5)).unwrap(), fraction!(3));
        // 非整数の結果は分数の剰余
        assert_eq!(fraction!(3, 2).pow_mod(&big(2), &big(2)).unwrap(), fraction!(1, 4));
        assert_eq!(fraction!(3).pow_mod(&big(2), &big(0)).unwrap_err().kind(), "ValueError");
    }

    #[test]
    fn test_sum_and_product() {
        let values = vec![fraction!(1, 2), fraction!(1, 3), fraction!(1, 6)];
        assert_eq!(values.iter().sum::<Fraction>(), fraction!(1));
        assert_eq!(values.into_iter().product::<Fraction>(), fraction!(1, 36));
    }
}
