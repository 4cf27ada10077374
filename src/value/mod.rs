// src/value/mod.rs
//
// 動的な被演算子
//
// ホストの数値型を閉じた列挙型で表す。演算子は被演算子の種類を
// 一度だけ判定し、組ごとの専用カーネルに振り分ける（dispatch.rs）。

pub mod dispatch;
pub mod float_ops;

use std::collections::hash_map::DefaultHasher;
use std::convert::TryFrom;
use std::hash::{Hash, Hasher};

use num_bigint::BigInt;
use num_rational::BigRational;

use crate::error::{FractionError, Result};
use crate::fraction::hash::{hash_float, hash_integer};
use crate::fraction::Fraction;

pub use dispatch::{BinaryOp, CompareOp};

/// 複素数ハッシュで虚部に掛ける係数
const HASH_IMAG: i64 = 1_000_003;

#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Integer(BigInt),
    Fraction(Fraction),
    Float(f64),
    /// 分子・分母を公開する外部の有理数型
    Rational(BigRational),
    /// 構築時の入力としてのみ使う
    Text(String),
    /// Fraction が扱わない数値型
    Complex { re: f64, im: f64 },
}

impl Value {
    pub fn integer(value: impl Into<BigInt>) -> Value {
        Value::Integer(value.into())
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Integer(_) => "int",
            Value::Fraction(_) => "Fraction",
            Value::Float(_) => "float",
            Value::Rational(_) => "Rational",
            Value::Text(_) => "str",
            Value::Complex { .. } => "complex",
        }
    }

    /// 値が等しい数値は同じハッシュ値になる
    pub fn hash_value(&self) -> i64 {
        match self {
            Value::Integer(n) => hash_integer(n),
            Value::Fraction(f) => f.hash_value(),
            Value::Float(x) => hash_float(*x),
            Value::Rational(r) => Fraction::from(r.clone()).hash_value(),
            Value::Text(s) => {
                let mut hasher = DefaultHasher::new();
                s.hash(&mut hasher);
                hasher.finish() as i64
            }
            Value::Complex { re, im } => {
                let combined = hash_float(*re).wrapping_add(HASH_IMAG.wrapping_mul(hash_float(*im)));
                if combined == -1 {
                    -2
                } else {
                    combined
                }
            }
        }
    }
}

impl From<Fraction> for Value {
    fn from(value: Fraction) -> Self {
        Value::Fraction(value)
    }
}

impl From<BigInt> for Value {
    fn from(value: BigInt) -> Self {
        Value::Integer(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Integer(BigInt::from(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<BigRational> for Value {
    fn from(value: BigRational) -> Self {
        Value::Rational(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

// ============================================================================
// 動的な構築
// ============================================================================

impl Fraction {
    /// 単一の値から構築する（整数・Fraction・float・有理数・文字列）
    pub fn from_value(value: Value) -> Result<Fraction> {
        match value {
            Value::Integer(n) => Ok(Fraction::from_integer(n)),
            Value::Fraction(f) => Ok(f),
            Value::Float(x) => Fraction::from_f64(x),
            Value::Rational(r) => Ok(Fraction::from(r)),
            Value::Text(s) => s.parse(),
            Value::Complex { .. } => Err(FractionError::type_error(
                "Numerator should be either an integer or a floating point number when denominator is not specified.",
            )),
        }
    }

    /// (分子, 分母) の組から構築する。どちらも整数でなければならない。
    pub fn from_value_pair(numerator: Value, denominator: Value) -> Result<Fraction> {
        let numerator = match numerator {
            Value::Integer(n) => n,
            _ => {
                return Err(FractionError::type_error(
                    "Numerator should be an integer when denominator is specified.",
                ))
            }
        };
        let denominator = match denominator {
            Value::Integer(d) => d,
            _ => return Err(FractionError::type_error("Denominator should be an integer.")),
        };
        Fraction::new(numerator, denominator)
    }
}

impl TryFrom<Value> for Fraction {
    type Error = FractionError;

    fn try_from(value: Value) -> Result<Self> {
        Fraction::from_value(value)
    }
}
