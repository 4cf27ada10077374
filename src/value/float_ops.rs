// src/value/float_ops.rs
//
// ホスト言語の浮動小数点演算の意味論
//
// Fraction と float の演算は、Fraction を最も近い float に変換してから
// ここで計算する。IEEE 754 の演算に加えて、ゼロ除算の例外、
// 切り捨て除算・剰余の符号規則、冪乗の特殊ケースを再現する。

use std::f64::consts::PI;

use super::dispatch::BinaryOp;
use super::Value;
use crate::error::{FractionError, Result};

/// x が奇数の整数か
fn is_odd_integer(x: f64) -> bool {
    (x.abs() % 2.0) == 1.0
}

/// 二項演算（結果は常に float）
pub fn float_binary(op: BinaryOp, lhs: f64, rhs: f64) -> Result<f64> {
    match op {
        BinaryOp::Add => Ok(lhs + rhs),
        BinaryOp::Sub => Ok(lhs - rhs),
        BinaryOp::Mul => Ok(lhs * rhs),
        BinaryOp::TrueDiv => {
            if rhs == 0.0 {
                return Err(FractionError::division_by_zero("float division by zero"));
            }
            Ok(lhs / rhs)
        }
        BinaryOp::FloorDiv => {
            if rhs == 0.0 {
                return Err(FractionError::division_by_zero("float floor division by zero"));
            }
            Ok(div_mod(lhs, rhs).0)
        }
        BinaryOp::Mod => {
            if rhs == 0.0 {
                return Err(FractionError::division_by_zero("float modulo by zero"));
            }
            Ok(modulo(lhs, rhs))
        }
    }
}

/// (切り捨て商, 剰余)
pub fn float_divmod(lhs: f64, rhs: f64) -> Result<(f64, f64)> {
    if rhs == 0.0 {
        return Err(FractionError::division_by_zero("float divmod()"));
    }
    Ok(div_mod(lhs, rhs))
}

/// 剰余。符号は除数に従い、ゼロは除数の符号を持つ。
fn modulo(lhs: f64, rhs: f64) -> f64 {
    let remainder = lhs % rhs;
    if remainder != 0.0 {
        if (rhs < 0.0) != (remainder < 0.0) {
            remainder + rhs
        } else {
            remainder
        }
    } else {
        0.0f64.copysign(rhs)
    }
}

fn div_mod(lhs: f64, rhs: f64) -> (f64, f64) {
    let mut remainder = lhs % rhs;
    // fmod の結果から商を求めるので (lhs - remainder) / rhs はほぼ整数
    let mut quotient = (lhs - remainder) / rhs;
    if remainder != 0.0 {
        if (rhs < 0.0) != (remainder < 0.0) {
            remainder += rhs;
            quotient -= 1.0;
        }
    } else {
        remainder = 0.0f64.copysign(rhs);
    }
    let floor_quotient = if quotient != 0.0 {
        let floored = quotient.floor();
        if quotient - floored > 0.5 {
            floored + 1.0
        } else {
            floored
        }
    } else {
        0.0f64.copysign(lhs / rhs)
    };
    (floor_quotient, remainder)
}

/// 冪乗
///
/// 負の底と非整数の指数は複素数になる。有限の入力から無限大が
/// 得られた場合は Overflow。
pub fn float_pow(base: f64, exponent: f64) -> Result<Value> {
    if exponent == 0.0 {
        return Ok(Value::Float(1.0));
    }
    if base.is_nan() {
        return Ok(Value::Float(base));
    }
    if exponent.is_nan() {
        return Ok(Value::Float(if base == 1.0 { 1.0 } else { exponent }));
    }
    if exponent.is_infinite() {
        let magnitude = base.abs();
        let result = if magnitude == 1.0 {
            1.0
        } else if (exponent > 0.0) == (magnitude > 1.0) {
            f64::INFINITY
        } else {
            0.0
        };
        return Ok(Value::Float(result));
    }
    if base.is_infinite() {
        let odd = is_odd_integer(exponent);
        let result = if exponent > 0.0 {
            if odd {
                base
            } else {
                base.abs()
            }
        } else if odd {
            0.0f64.copysign(base)
        } else {
            0.0
        };
        return Ok(Value::Float(result));
    }
    if base == 0.0 {
        if exponent < 0.0 {
            return Err(FractionError::division_by_zero(
                "0.0 cannot be raised to a negative power",
            ));
        }
        return Ok(Value::Float(if is_odd_integer(exponent) { base } else { 0.0 }));
    }

    let mut magnitude = base;
    let mut negate = false;
    if base < 0.0 {
        if exponent != exponent.floor() {
            return complex_pow(base, exponent);
        }
        magnitude = -base;
        negate = is_odd_integer(exponent);
    }
    if magnitude == 1.0 {
        return Ok(Value::Float(if negate { -1.0 } else { 1.0 }));
    }
    let result = magnitude.powf(exponent);
    if result.is_infinite() {
        return Err(FractionError::overflow("Numerical result out of range"));
    }
    Ok(Value::Float(if negate { -result } else { result }))
}

/// 負の実数の非整数乗: |x|^y × (cos πy + i sin πy)
fn complex_pow(base: f64, exponent: f64) -> Result<Value> {
    let length = base.abs().powf(exponent);
    if length.is_infinite() {
        return Err(FractionError::overflow("complex exponentiation"));
    }
    let phase = PI * exponent;
    Ok(Value::Complex {
        re: length * phase.cos(),
        im: length * phase.sin(),
    })
}
