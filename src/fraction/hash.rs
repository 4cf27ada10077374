// src/fraction/hash.rs
//
// 数値ハッシュ
//
// 法 M = 2^61 - 1 による有理数ハッシュ。値が等しい整数・浮動小数点数・
// 分数は同じハッシュ値になる。
//
//   hash(n/d) = sign(n) × (|n| × d^(M-2) mod M)
//
// d が M の倍数（逆元が存在しない）場合は HASH_INF。-1 は -2 に置き換える。

use std::hash::{Hash, Hasher};

use num_bigint::BigInt;
use num_traits::{Signed, ToPrimitive, Zero};

use super::float::decompose_finite;
use super::Fraction;
use crate::config::{HASH_INF, HASH_MODULUS, HASH_MODULUS_MINUS_TWO};

/// (分子, 分母) のハッシュ。分母は正であること。
pub(crate) fn hash_ratio(numerator: &BigInt, denominator: &BigInt) -> i64 {
    let inverse = denominator.modpow(&HASH_MODULUS_MINUS_TWO, &HASH_MODULUS);
    if inverse.is_zero() {
        // 分子の符号によらず正の HASH_INF（符号を付けない）
        return HASH_INF;
    }
    let reduced = (numerator.abs() * inverse) % &*HASH_MODULUS;
    // 0 <= reduced < 2^61 なので i64 に収まる
    let magnitude = reduced.to_i64().unwrap_or_default();
    let result = if numerator.is_negative() { -magnitude } else { magnitude };
    if result == -1 {
        -2
    } else {
        result
    }
}

/// 整数のハッシュ（分母 1 の分数と一致する）
pub fn hash_integer(value: &BigInt) -> i64 {
    let magnitude = (value.abs() % &*HASH_MODULUS).to_i64().unwrap_or_default();
    let result = if value.is_negative() { -magnitude } else { magnitude };
    if result == -1 {
        -2
    } else {
        result
    }
}

/// 浮動小数点数のハッシュ。有限値は正確な分数のハッシュと一致する。
pub fn hash_float(value: f64) -> i64 {
    if value.is_nan() {
        return 0;
    }
    if value.is_infinite() {
        return if value > 0.0 { HASH_INF } else { -HASH_INF };
    }
    let (numerator, denominator) = decompose_finite(value);
    hash_ratio(&numerator, &denominator)
}

impl Fraction {
    pub fn hash_value(&self) -> i64 {
        hash_ratio(&self.numerator, &self.denominator)
    }
}

impl Hash for Fraction {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_i64(self.hash_value());
    }
}
