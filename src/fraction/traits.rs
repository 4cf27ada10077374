// src/fraction/traits.rs
//
// 数値トレイトと外部有理数型との相互運用

use std::str::FromStr;

use num_bigint::BigInt;
use num_rational::{BigRational, Ratio};
use num_traits::{FromPrimitive, Num, One, Pow, Signed, ToPrimitive, Zero};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use super::{normalize_signs, Fraction};
use crate::error::{FractionError, Result};

// ============================================================================
// RationalLike: 分子・分母を公開する有理数
// ============================================================================

/// 分子と分母を整数として読み出せる値
pub trait RationalLike {
    fn numerator(&self) -> BigInt;
    fn denominator(&self) -> BigInt;
}

impl RationalLike for Fraction {
    fn numerator(&self) -> BigInt {
        self.numerator.clone()
    }

    fn denominator(&self) -> BigInt {
        self.denominator.clone()
    }
}

impl<T: Clone + Into<BigInt>> RationalLike for Ratio<T> {
    fn numerator(&self) -> BigInt {
        self.numer().clone().into()
    }

    fn denominator(&self) -> BigInt {
        self.denom().clone().into()
    }
}

impl Fraction {
    /// 任意の有理数から構築する（符号と約分をやり直す）
    pub fn from_rational<R: RationalLike + ?Sized>(value: &R) -> Result<Fraction> {
        Fraction::new(value.numerator(), value.denominator())
    }
}

impl From<BigRational> for Fraction {
    fn from(value: BigRational) -> Self {
        // Ratio は分母ゼロを持たない
        let (numerator, denominator) = value.into_raw();
        let (numerator, denominator) = normalize_signs(numerator, denominator);
        Fraction::reduced(numerator, denominator)
    }
}

impl From<Fraction> for BigRational {
    fn from(value: Fraction) -> Self {
        let (numerator, denominator) = value.into_parts();
        Ratio::new_raw(numerator, denominator)
    }
}

// ============================================================================
// num-traits
// ============================================================================

impl Zero for Fraction {
    fn zero() -> Self {
        Fraction::default()
    }

    fn is_zero(&self) -> bool {
        self.numerator.is_zero()
    }
}

impl One for Fraction {
    fn one() -> Self {
        Fraction::from_integer(1)
    }

    fn is_one(&self) -> bool {
        self.numerator.is_one() && self.denominator.is_one()
    }
}

impl Num for Fraction {
    type FromStrRadixErr = FractionError;

    /// 10 進ならリテラル文法、それ以外は "分子/分母" または整数
    fn from_str_radix(text: &str, radix: u32) -> Result<Self> {
        if radix == 10 {
            return Fraction::from_str(text);
        }
        let invalid = || FractionError::value(format!("Invalid literal for Fraction: '{}'", text));
        match text.split_once('/') {
            Some((numerator, denominator)) => {
                let numerator = BigInt::from_str_radix(numerator, radix).map_err(|_| invalid())?;
                let denominator = BigInt::from_str_radix(denominator, radix).map_err(|_| invalid())?;
                if denominator.is_negative() {
                    return Err(invalid());
                }
                Fraction::new(numerator, denominator)
            }
            None => {
                let value = BigInt::from_str_radix(text, radix).map_err(|_| invalid())?;
                Ok(Fraction::from_integer(value))
            }
        }
    }
}

impl Signed for Fraction {
    fn abs(&self) -> Self {
        Fraction::abs(self)
    }

    fn abs_sub(&self, other: &Self) -> Self {
        if self <= other {
            Fraction::zero()
        } else {
            self - other
        }
    }

    fn signum(&self) -> Self {
        Fraction::from_integer(self.numerator.signum())
    }

    fn is_positive(&self) -> bool {
        Fraction::is_positive(self)
    }

    fn is_negative(&self) -> bool {
        Fraction::is_negative(self)
    }
}

impl ToPrimitive for Fraction {
    fn to_i64(&self) -> Option<i64> {
        self.trunc().to_i64()
    }

    fn to_u64(&self) -> Option<u64> {
        self.trunc().to_u64()
    }

    fn to_i128(&self) -> Option<i128> {
        self.trunc().to_i128()
    }

    fn to_u128(&self) -> Option<u128> {
        self.trunc().to_u128()
    }

    fn to_f64(&self) -> Option<f64> {
        self.try_to_f64().ok()
    }
}

impl FromPrimitive for Fraction {
    fn from_i64(n: i64) -> Option<Self> {
        Some(Fraction::from_integer(n))
    }

    fn from_u64(n: u64) -> Option<Self> {
        Some(Fraction::from_integer(n))
    }

    fn from_i128(n: i128) -> Option<Self> {
        Some(Fraction::from_integer(n))
    }

    fn from_u128(n: u128) -> Option<Self> {
        Some(Fraction::from_integer(n))
    }

    fn from_f64(n: f64) -> Option<Self> {
        Fraction::from_f64(n).ok()
    }
}

impl Pow<u32> for Fraction {
    type Output = Fraction;

    fn pow(self, exponent: u32) -> Fraction {
        (&self).pow(exponent)
    }
}

impl<'a> Pow<u32> for &'a Fraction {
    type Output = Fraction;

    fn pow(self, exponent: u32) -> Fraction {
        // 既約な n/d の冪は既約
        // Pow トレイトは値渡しなので BigInt の固有メソッドを明示する
        Fraction::from_canonical(
            BigInt::pow(&self.numerator, exponent),
            BigInt::pow(&self.denominator, exponent),
        )
    }
}

// ============================================================================
// serde: (分子, 分母) の組として直列化する
// ============================================================================

impl Serialize for Fraction {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        (&self.numerator, &self.denominator).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Fraction {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let (numerator, denominator) = <(BigInt, BigInt)>::deserialize(deserializer)?;
        Fraction::new(numerator, denominator).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fraction;

    fn sum_of_parts<R: RationalLike>(value: &R) -> BigInt {
        value.numerator() + value.denominator()
    }

    #[test]
    fn test_rational_like_generic_access() {
        assert_eq!(sum_of_parts(&fraction!(3, 4)), BigInt::from(7));
        assert_eq!(sum_of_parts(&Ratio::new(6i64, 8i64)), BigInt::from(7));
        assert_eq!(Fraction::from_rational(&Ratio::new(-2i32, 4)).unwrap(), fraction!(-1, 2));
    }

    #[test]
    fn test_big_rational_conversions() {
        let ratio = BigRational::new(BigInt::from(10), BigInt::from(-4));
        let fraction = Fraction::from(ratio.clone());
        assert_eq!(fraction, fraction!(-5, 2));
        assert_eq!(BigRational::from(fraction), ratio);
    }

    #[test]
    fn test_zero_one_signed() {
        assert!(Fraction::zero().is_zero());
        assert!(Fraction::one().is_one());
        assert!(!fraction!(2, 3).is_one());
        assert_eq!(Signed::abs(&fraction!(-2, 3)), fraction!(2, 3));
        assert_eq!(fraction!(-2, 3).signum(), fraction!(-1));
        assert_eq!(fraction!(0).signum(), fraction!(0));
        assert_eq!(fraction!(1, 2).abs_sub(&fraction!(3, 4)), fraction!(0));
        assert_eq!(fraction!(3, 4).abs_sub(&fraction!(1, 2)), fraction!(1, 4));
    }

    #[test]
    fn test_from_str_radix() {
        assert_eq!(Fraction::from_str_radix("3.5", 10).unwrap(), fraction!(7, 2));
        assert_eq!(Fraction::from_str_radix("ff/10", 16).unwrap(), fraction!(255, 16));
        assert_eq!(Fraction::from_str_radix("-101", 2).unwrap(), fraction!(-5));
        assert!(Fraction::from_str_radix("1/0", 2).is_err());
        assert!(Fraction::from_str_radix("zz", 16).is_err());
    }

    #[test]
    fn test_primitive_conversions() {
        assert_eq!(fraction!(-7, 2).to_i64(), Some(-3));
        assert_eq!(fraction!(-7, 2).to_u64(), None);
        assert_eq!(fraction!(1, 4).to_f64(), Some(0.25));
        assert_eq!(<Fraction as FromPrimitive>::from_f64(0.75), Some(fraction!(3, 4)));
        assert_eq!(<Fraction as FromPrimitive>::from_f64(f64::NAN), None);
        assert_eq!(Fraction::from_u64(9), Some(fraction!(9)));
    }

    #[test]
    fn test_pow_trait() {
        assert_eq!(fraction!(-2, 3).pow(3u32), fraction!(-8, 27));
        assert_eq!(Pow::pow(&fraction!(5, 7), 0u32), fraction!(1));
    }

    #[test]
    fn test_pow_trait_borrowed_base_is_untouched() {
        let base = fraction!(-3, 4);
        let cubed = Pow::pow(&base, 3u32);
        assert_eq!(cubed, fraction!(-27, 64));
        assert_eq!(cubed.denominator(), &BigInt::from(64));
        assert_eq!(base, fraction!(-3, 4));
        assert_eq!((&base).pow(2u32), fraction!(9, 16));
    }

    #[test]
    fn test_serde_round_trip() {
        let value = fraction!(-22, 7);
        let json = serde_json::to_string(&value).unwrap();
        let restored: Fraction = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, value);
    }

    #[test]
    fn test_deserialize_normalizes_and_rejects_zero_denominator() {
        let json = serde_json::to_string(&(BigInt::from(6), BigInt::from(-4))).unwrap();
        let restored: Fraction = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, fraction!(-3, 2));

        let json = serde_json::to_string(&(BigInt::from(1), BigInt::from(0))).unwrap();
        let err = serde_json::from_str::<Fraction>(&json).unwrap_err();
        assert!(err.to_string().contains("Denominator should be non-zero."));
    }
}
