// src/fraction/float.rs
//
// 浮動小数点数との相互変換
//
// f64 → Fraction は正確な二進分解（丸めなし）。
// Fraction → f64 は n/d を一度だけ丸める（偶数丸め、非正規化数対応）。

use std::convert::TryFrom;

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, ToPrimitive, Zero};

use super::Fraction;
use crate::config::FLOAT_DECOMPOSITION_LIMIT;
use crate::error::{FractionError, Result};

const DBL_MANT_DIG: i64 = 53;
const DBL_MAX_EXP: usize = 1024;
const DBL_MIN_EXP: i64 = -1021;

lazy_static::lazy_static! {
    /// これ以上の商は f64 に丸めると無限大になる: 2^1024 - 2^970
    static ref DBL_MIN_OVERFLOW: BigInt =
        (BigInt::one() << DBL_MAX_EXP) - (BigInt::one() << (DBL_MAX_EXP - DBL_MANT_DIG as usize - 1));
}

/// x = m × 2^e, 0.5 <= |m| < 1 となる (m, e) を返す
fn frexp(value: f64) -> (f64, i32) {
    if value == 0.0 || !value.is_finite() {
        return (value, 0);
    }
    let bits = value.to_bits();
    let raw_exponent = ((bits >> 52) & 0x7ff) as i32;
    if raw_exponent == 0 {
        // 非正規化数は 2^54 倍して正規化してから求める
        let (mantissa, exponent) = frexp(value * pow2(54));
        return (mantissa, exponent - 54);
    }
    let mantissa = f64::from_bits((bits & !(0x7ffu64 << 52)) | (1022u64 << 52));
    (mantissa, raw_exponent - 1022)
}

/// 2^exponent（正規化数の範囲内）
fn pow2(exponent: i32) -> f64 {
    debug_assert!((-1022..=1023).contains(&exponent));
    f64::from_bits(((exponent + 1023) as u64) << 52)
}

/// q × 2^exponent。最終値が表現可能であれば正確。
fn ldexp(value: f64, exponent: i64) -> f64 {
    if exponent < -1000 {
        value * pow2((exponent + 200) as i32) * pow2(-200)
    } else if exponent > 1000 {
        value * pow2((exponent - 200) as i32) * pow2(200)
    } else {
        value * pow2(exponent as i32)
    }
}

/// 有限の f64 を正確に (分子, 分母) へ分解する
///
/// 仮数を整数になるまで倍にし、その回数だけ指数を下げる。
/// 指数が負で終わる場合、仮数は奇数なので結果は既約になる。
pub(crate) fn decompose_finite(value: f64) -> (BigInt, BigInt) {
    debug_assert!(value.is_finite());
    let (mut mantissa, mut exponent) = frexp(value);
    for _ in 0..FLOAT_DECOMPOSITION_LIMIT {
        if mantissa == mantissa.floor() {
            break;
        }
        mantissa *= 2.0;
        exponent -= 1;
    }
    // |mantissa| < 2^53 の整数
    let numerator = BigInt::from(mantissa as i64);
    if exponent >= 0 {
        (numerator << exponent as usize, BigInt::one())
    } else {
        (numerator, BigInt::one() << (-exponent) as usize)
    }
}

/// 正しく丸めた n/d（分母は正でなくてもよい）
pub(crate) fn ratio_to_f64(numerator: &BigInt, denominator: &BigInt) -> Result<f64> {
    if denominator.is_zero() {
        return Err(FractionError::division_by_zero("division by zero"));
    }
    let negative = numerator.is_negative() != denominator.is_negative();
    let a = numerator.abs();
    let b = denominator.abs();
    if a.is_zero() {
        return Ok(if negative { -0.0 } else { 0.0 });
    }

    // 両方が仮数に収まるなら一回の除算で正しく丸まる
    if a.bits() <= DBL_MANT_DIG as u64 && b.bits() <= DBL_MANT_DIG as u64 {
        if let (Some(x), Some(y)) = (a.to_u64(), b.to_u64()) {
            let result = x as f64 / y as f64;
            return Ok(if negative { -result } else { result });
        }
    }

    if a >= &*DBL_MIN_OVERFLOW * &b {
        return Err(FractionError::overflow(
            "integer division result too large for a float",
        ));
    }

    // 2^(d-1) <= a/b < 2^d となる d
    let mut d = a.bits() as i64 - b.bits() as i64;
    let reached = if d >= 0 {
        a >= (&b << d as usize)
    } else {
        (&a << (-d) as usize) >= b
    };
    if reached {
        d += 1;
    }

    // 2^-exp × a/b を整数商と剰余に分ける
    let exp = d.max(DBL_MIN_EXP) - DBL_MANT_DIG;
    let (a, b) = if exp < 0 {
        (a << (-exp) as usize, b)
    } else {
        (a, b << exp as usize)
    };
    let (mut quotient, remainder) = a.div_rem(&b);

    // 偶数丸め
    let twice = &remainder << 1usize;
    if twice > b || (twice == b && quotient.is_odd()) {
        quotient += 1;
    }

    let mantissa = quotient
        .to_u64()
        .ok_or_else(|| FractionError::overflow("integer division result too large for a float"))?
        as f64;
    let result = ldexp(mantissa, exp);
    Ok(if negative { -result } else { result })
}

impl Fraction {
    /// f64 からの正確な構築
    pub fn from_f64(value: f64) -> Result<Fraction> {
        if value.is_infinite() {
            return Err(FractionError::overflow("Cannot construct Fraction from infinity."));
        }
        if value.is_nan() {
            return Err(FractionError::value("Cannot construct Fraction from NaN."));
        }
        let (numerator, denominator) = decompose_finite(value);
        Ok(Fraction::from_canonical(numerator, denominator))
    }

    /// 最も近い f64。絶対値が f64::MAX を超えると Overflow。
    pub fn try_to_f64(&self) -> Result<f64> {
        ratio_to_f64(&self.numerator, &self.denominator)
    }
}

impl TryFrom<f64> for Fraction {
    type Error = FractionError;

    fn try_from(value: f64) -> Result<Self> {
        Fraction::from_f64(value)
    }
}

impl TryFrom<f32> for Fraction {
    type Error = FractionError;

    fn try_from(value: f32) -> Result<Self> {
        Fraction::from_f64(f64::from(value))
    }
}
