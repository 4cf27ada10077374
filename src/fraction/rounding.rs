// src/fraction/rounding.rs
//
// 丸めと最良有理近似

use std::cmp::Ordering;
use std::convert::TryFrom;

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Zero};

use super::arithmetic::{div_integer, mul_integer, sub_fractions};
use super::Fraction;
use crate::config::{DEFAULT_MAX_DENOMINATOR, TEN};
use crate::error::{FractionError, Result};

impl Fraction {
    /// 床関数: n // d
    pub fn floor(&self) -> BigInt {
        self.numerator.div_floor(&self.denominator)
    }

    /// 天井関数: -((-n) // d)
    pub fn ceil(&self) -> BigInt {
        -(-&self.numerator).div_floor(&self.denominator)
    }

    /// ゼロ方向への切り捨て
    pub fn trunc(&self) -> BigInt {
        if self.is_negative() {
            self.ceil()
        } else {
            self.floor()
        }
    }

    /// 整数への変換（ゼロ方向へ切り捨て）
    pub fn to_integer(&self) -> BigInt {
        self.trunc()
    }

    /// 最も近い整数。ちょうど中間なら偶数側（銀行丸め）。
    pub fn round(&self) -> BigInt {
        let (floor, remainder) = self.numerator.div_mod_floor(&self.denominator);
        let twice = remainder << 1usize;
        match twice.cmp(&self.denominator) {
            Ordering::Less => floor,
            Ordering::Greater => floor + 1,
            Ordering::Equal if floor.is_even() => floor,
            Ordering::Equal => floor + 1,
        }
    }

    /// 小数点以下 `digits` 桁に丸める（負なら整数部の桁で丸める）
    pub fn round_to(&self, digits: i64) -> Result<Fraction> {
        let power = u32::try_from(digits.unsigned_abs())
            .map_err(|_| FractionError::overflow(format!("ndigits {} is too large", digits)))?;
        let shift = TEN.pow(power);
        if digits > 0 {
            let scaled = mul_integer(self, &shift).round();
            Ok(Fraction::reduced(scaled, shift))
        } else {
            let scaled = div_integer(self, &shift)?.round();
            Ok(Fraction::from_integer(scaled * shift))
        }
    }

    /// 分母が `max_denominator` 以下で最も近い分数
    ///
    /// 連分数展開の収束子を分母が上限を超える直前まで求め、
    /// 最後の収束子と中間近似分数のうち近い方を返す。
    /// 距離が等しい場合は収束子を選ぶ。
    pub fn limit_denominator<B: Into<BigInt>>(&self, max_denominator: B) -> Result<Fraction> {
        let max_denominator = max_denominator.into();
        if max_denominator < BigInt::one() {
            return Err(FractionError::value(
                "`max_denominator` should not be less than 1.",
            ));
        }
        if self.denominator <= max_denominator {
            return Ok(self.clone());
        }

        let (mut p0, mut q0, mut p1, mut q1) =
            (BigInt::zero(), BigInt::one(), BigInt::one(), BigInt::zero());
        let mut n = self.numerator.clone();
        let mut d = self.denominator.clone();
        let mut steps = 0usize;
        loop {
            let a = n.div_floor(&d);
            let q2 = &q0 + &a * &q1;
            if q2 > max_denominator {
                break;
            }
            let p2 = &p0 + &a * &p1;
            p0 = std::mem::replace(&mut p1, p2);
            q0 = std::mem::replace(&mut q1, q2);
            let next_d = &n - &a * &d;
            n = std::mem::replace(&mut d, next_d);
            steps += 1;
        }
        tracing::trace!(target: "fraction::limit_denominator", steps, "convergents computed");

        let k = (&max_denominator - &q0).div_floor(&q1);
        let semiconvergent = Fraction::reduced(&p0 + &k * &p1, &q0 + &k * &q1);
        let convergent = Fraction::reduced(p1, q1);
        let distance_convergent = sub_fractions(&convergent, self).abs();
        let distance_semiconvergent = sub_fractions(&semiconvergent, self).abs();
        if distance_convergent <= distance_semiconvergent {
            Ok(convergent)
        } else {
            Ok(semiconvergent)
        }
    }

    /// 既定の上限（10^6）での最良有理近似
    pub fn limit_denominator_default(&self) -> Fraction {
        // 上限は正の定数なので失敗しない
        self.limit_denominator(DEFAULT_MAX_DENOMINATOR)
            .unwrap_or_else(|_| self.clone())
    }
}
