// src/value/dispatch.rs
//
// 演算子の振り分け
//
// 片側カーネルは「適用できない」場合に Ok(None) を返す。
// 解決関数は順方向（左が Fraction）→ 反射方向（右が Fraction）の順に試し、
// どちらも適用できなければ TypeError を返す。
//
// | 左 \ 右  | Fraction | int       | float | Rational |
// |----------|----------|-----------|-------|----------|
// | Fraction | Fraction | Fraction  | float | Fraction |
// | int      | Fraction | -         | -     | -        |
// | float    | float    | -         | -     | -        |
// | Rational | Fraction | -         | -     | -        |
//
// `//` の結果は int、divmod は (int, Fraction)。

use std::borrow::Cow;
use std::cmp::Ordering;

use num_bigint::BigInt;
use num_traits::{Signed, ToPrimitive, Zero};

use super::float_ops::{float_binary, float_divmod, float_pow};
use super::Value;
use crate::error::{FractionError, Result};
use crate::fraction::arithmetic::{
    add_fractions, add_integer, div_fractions, div_integer, divmod_fractions, divmod_integer,
    floor_div_fractions, floor_div_integer, integer_add, integer_div, integer_divmod,
    integer_floor_div, integer_mul, integer_rem, integer_sub, mul_fractions, mul_integer,
    rem_fractions, rem_integer, sub_fractions, sub_integer,
};
use crate::fraction::float::ratio_to_f64;
use crate::fraction::Fraction;

const NEGATIVE_POWER_OF_ZERO: &str =
    "Either exponent should be non-negative or base should not be zero.";
const FLOAT_MODULO_NOT_ALLOWED: &str =
    "pow() 3rd argument not allowed unless all arguments are integers";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    TrueDiv,
    FloorDiv,
    Mod,
}

impl BinaryOp {
    pub fn symbol(self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::TrueDiv => "/",
            BinaryOp::FloorDiv => "//",
            BinaryOp::Mod => "%",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareOp {
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
}

impl CompareOp {
    pub fn symbol(self) -> &'static str {
        match self {
            CompareOp::Eq => "==",
            CompareOp::Ne => "!=",
            CompareOp::Lt => "<",
            CompareOp::Le => "<=",
            CompareOp::Gt => ">",
            CompareOp::Ge => ">=",
        }
    }

    fn matches(self, ordering: Ordering) -> bool {
        match self {
            CompareOp::Eq => ordering == Ordering::Equal,
            CompareOp::Ne => ordering != Ordering::Equal,
            CompareOp::Lt => ordering == Ordering::Less,
            CompareOp::Le => ordering != Ordering::Greater,
            CompareOp::Gt => ordering == Ordering::Greater,
            CompareOp::Ge => ordering != Ordering::Less,
        }
    }
}

/// Fraction エンジンから見た被演算子の種類
enum Operand<'a> {
    Integer(&'a BigInt),
    /// Fraction と外部有理数（変換済み）
    Fraction(Cow<'a, Fraction>),
    Float(f64),
}

impl<'a> Operand<'a> {
    fn classify(value: &'a Value) -> Option<Operand<'a>> {
        match value {
            Value::Integer(n) => Some(Operand::Integer(n)),
            Value::Fraction(f) => Some(Operand::Fraction(Cow::Borrowed(f))),
            Value::Rational(r) => Some(Operand::Fraction(Cow::Owned(Fraction::from(r.clone())))),
            Value::Float(x) => Some(Operand::Float(*x)),
            Value::Text(_) | Value::Complex { .. } => None,
        }
    }
}

fn integer_to_f64(value: &BigInt) -> Result<f64> {
    ratio_to_f64(value, &BigInt::from(1))
        .map_err(|_| FractionError::overflow("int too large to convert to float"))
}

fn unsupported(symbol: &str, lhs: &Value, rhs: &Value) -> FractionError {
    FractionError::type_error(format!(
        "unsupported operand type(s) for {}: '{}' and '{}'",
        symbol,
        lhs.type_name(),
        rhs.type_name()
    ))
}

// ============================================================================
// 二項演算
// ============================================================================

fn fractions_binary(op: BinaryOp, lhs: &Fraction, rhs: &Fraction) -> Result<Value> {
    Ok(match op {
        BinaryOp::Add => Value::Fraction(add_fractions(lhs, rhs)),
        BinaryOp::Sub => Value::Fraction(sub_fractions(lhs, rhs)),
        BinaryOp::Mul => Value::Fraction(mul_fractions(lhs, rhs)),
        BinaryOp::TrueDiv => Value::Fraction(div_fractions(lhs, rhs)?),
        BinaryOp::FloorDiv => Value::Integer(floor_div_fractions(lhs, rhs)?),
        BinaryOp::Mod => Value::Fraction(rem_fractions(lhs, rhs)?),
    })
}

fn fraction_integer_binary(op: BinaryOp, lhs: &Fraction, rhs: &BigInt) -> Result<Value> {
    Ok(match op {
        BinaryOp::Add => Value::Fraction(add_integer(lhs, rhs)),
        BinaryOp::Sub => Value::Fraction(sub_integer(lhs, rhs)),
        BinaryOp::Mul => Value::Fraction(mul_integer(lhs, rhs)),
        BinaryOp::TrueDiv => Value::Fraction(div_integer(lhs, rhs)?),
        BinaryOp::FloorDiv => Value::Integer(floor_div_integer(lhs, rhs)?),
        BinaryOp::Mod => Value::Fraction(rem_integer(lhs, rhs)?),
    })
}

fn integer_fraction_binary(op: BinaryOp, lhs: &BigInt, rhs: &Fraction) -> Result<Value> {
    Ok(match op {
        BinaryOp::Add => Value::Fraction(integer_add(lhs, rhs)),
        BinaryOp::Sub => Value::Fraction(integer_sub(lhs, rhs)),
        BinaryOp::Mul => Value::Fraction(integer_mul(lhs, rhs)),
        BinaryOp::TrueDiv => Value::Fraction(integer_div(lhs, rhs)?),
        BinaryOp::FloorDiv => Value::Integer(integer_floor_div(lhs, rhs)?),
        BinaryOp::Mod => Value::Fraction(integer_rem(lhs, rhs)?),
    })
}

/// 左が Fraction
fn forward_binary(op: BinaryOp, lhs: &Fraction, rhs: &Value) -> Result<Option<Value>> {
    match Operand::classify(rhs) {
        Some(Operand::Fraction(other)) => fractions_binary(op, lhs, &other).map(Some),
        Some(Operand::Integer(other)) => fraction_integer_binary(op, lhs, other).map(Some),
        Some(Operand::Float(other)) => {
            let result = float_binary(op, lhs.try_to_f64()?, other)?;
            Ok(Some(Value::Float(result)))
        }
        None => Ok(None),
    }
}

/// 右が Fraction
fn reflected_binary(op: BinaryOp, lhs: &Value, rhs: &Fraction) -> Result<Option<Value>> {
    match Operand::classify(lhs) {
        Some(Operand::Fraction(other)) => fractions_binary(op, &other, rhs).map(Some),
        Some(Operand::Integer(other)) => integer_fraction_binary(op, other, rhs).map(Some),
        Some(Operand::Float(other)) => {
            let result = float_binary(op, other, rhs.try_to_f64()?)?;
            Ok(Some(Value::Float(result)))
        }
        None => Ok(None),
    }
}

fn forward_divmod(lhs: &Fraction, rhs: &Value) -> Result<Option<(Value, Value)>> {
    let (quotient, remainder) = match Operand::classify(rhs) {
        Some(Operand::Fraction(other)) => divmod_fractions(lhs, &other)?,
        Some(Operand::Integer(other)) => divmod_integer(lhs, other)?,
        Some(Operand::Float(other)) => {
            let (quotient, remainder) = float_divmod(lhs.try_to_f64()?, other)?;
            return Ok(Some((Value::Float(quotient), Value::Float(remainder))));
        }
        None => return Ok(None),
    };
    Ok(Some((Value::Integer(quotient), Value::Fraction(remainder))))
}

fn reflected_divmod(lhs: &Value, rhs: &Fraction) -> Result<Option<(Value, Value)>> {
    let (quotient, remainder) = match Operand::classify(lhs) {
        Some(Operand::Fraction(other)) => divmod_fractions(&other, rhs)?,
        Some(Operand::Integer(other)) => integer_divmod(other, rhs)?,
        Some(Operand::Float(other)) => {
            let (quotient, remainder) = float_divmod(other, rhs.try_to_f64()?)?;
            return Ok(Some((Value::Float(quotient), Value::Float(remainder))));
        }
        None => return Ok(None),
    };
    Ok(Some((Value::Integer(quotient), Value::Fraction(remainder))))
}

// ============================================================================
// 冪乗
// ============================================================================

/// float の冪。法が指定されていれば TypeError。
fn float_power(base: f64, exponent: f64, modulo: Option<&Value>) -> Result<Value> {
    if modulo.is_some() {
        return Err(FractionError::type_error(FLOAT_MODULO_NOT_ALLOWED));
    }
    float_pow(base, exponent)
}

/// 法による剰余を Fraction の `%` で取る
fn reduce_modulo(result: Value, modulo: Option<&Value>) -> Result<Value> {
    match modulo {
        Some(modulo) => Value::binary(BinaryOp::Mod, &result, modulo),
        None => Ok(result),
    }
}

/// Fraction の整数乗
fn fraction_integer_power(base: &Fraction, exponent: &BigInt, modulo: Option<&Value>) -> Result<Value> {
    match modulo {
        None => Ok(Value::Fraction(base.pow_int(exponent)?)),
        Some(Value::Integer(modulus)) => Ok(Value::Fraction(base.pow_mod(exponent, modulus)?)),
        Some(_) => reduce_modulo(Value::Fraction(base.pow_int(exponent)?), modulo),
    }
}

/// 整数の底と Fraction の指数
fn integer_fraction_power(base: &BigInt, exponent: &Fraction, modulo: Option<&Value>) -> Result<Value> {
    if !exponent.is_integer() {
        return float_power(integer_to_f64(base)?, exponent.try_to_f64()?, modulo);
    }
    let exponent = exponent.numerator();
    if exponent.is_negative() {
        if base.is_zero() {
            return Err(FractionError::division_by_zero(NEGATIVE_POWER_OF_ZERO));
        }
        let inverted = Fraction::from_integer(base.clone()).pow_int(exponent)?;
        return reduce_modulo(Value::Fraction(inverted), modulo);
    }
    fraction_integer_power(&Fraction::from_integer(base.clone()), exponent, modulo)
}

/// Fraction が関わらない底と指数の冪（法だけが Fraction の場合に使う）
fn host_power(base: &Operand<'_>, exponent: &Operand<'_>) -> Result<Value> {
    match (base, exponent) {
        (Operand::Integer(base), Operand::Integer(exponent)) if !exponent.is_negative() => {
            let exponent = exponent
                .to_u32()
                .ok_or_else(|| FractionError::overflow(format!("exponent {} is too large", exponent)))?;
            Ok(Value::Integer(base.pow(exponent)))
        }
        _ => float_pow(operand_to_f64(base)?, operand_to_f64(exponent)?),
    }
}

fn operand_to_f64(operand: &Operand<'_>) -> Result<f64> {
    match operand {
        Operand::Integer(n) => integer_to_f64(n),
        Operand::Fraction(f) => f.try_to_f64(),
        Operand::Float(x) => Ok(*x),
    }
}

fn is_fraction(value: &Value) -> bool {
    matches!(value, Value::Fraction(_) | Value::Rational(_))
}

fn unsupported_power(base: &Value, exponent: &Value, modulo: Option<&Value>) -> FractionError {
    match modulo {
        None => unsupported("** or pow()", base, exponent),
        Some(modulo) => FractionError::type_error(format!(
            "unsupported operand type(s) for pow(): '{}', '{}', '{}'",
            base.type_name(),
            exponent.type_name(),
            modulo.type_name()
        )),
    }
}

// ============================================================================
// 解決関数
// ============================================================================

impl Value {
    /// `lhs op rhs`
    pub fn binary(op: BinaryOp, lhs: &Value, rhs: &Value) -> Result<Value> {
        #[cfg(feature = "trace-dispatch")]
        tracing::trace!(
            target: "fraction::dispatch",
            op = op.symbol(),
            lhs = lhs.type_name(),
            rhs = rhs.type_name(),
            "binary operation"
        );

        if let Value::Fraction(fraction) = lhs {
            if let Some(result) = forward_binary(op, fraction, rhs)? {
                return Ok(result);
            }
        }
        if let Value::Fraction(fraction) = rhs {
            if let Some(result) = reflected_binary(op, lhs, fraction)? {
                return Ok(result);
            }
        }
        tracing::debug!(
            target: "fraction::dispatch",
            op = op.symbol(),
            lhs = lhs.type_name(),
            rhs = rhs.type_name(),
            "no kernel accepted the operands"
        );
        Err(unsupported(op.symbol(), lhs, rhs))
    }

    /// `divmod(lhs, rhs)`
    pub fn divmod(lhs: &Value, rhs: &Value) -> Result<(Value, Value)> {
        #[cfg(feature = "trace-dispatch")]
        tracing::trace!(
            target: "fraction::dispatch",
            lhs = lhs.type_name(),
            rhs = rhs.type_name(),
            "divmod"
        );

        if let Value::Fraction(fraction) = lhs {
            if let Some(result) = forward_divmod(fraction, rhs)? {
                return Ok(result);
            }
        }
        if let Value::Fraction(fraction) = rhs {
            if let Some(result) = reflected_divmod(lhs, fraction)? {
                return Ok(result);
            }
        }
        tracing::debug!(
            target: "fraction::dispatch",
            lhs = lhs.type_name(),
            rhs = rhs.type_name(),
            "divmod not supported"
        );
        Err(unsupported("divmod()", lhs, rhs))
    }

    /// `pow(base, exponent[, modulo])`
    pub fn pow(base: &Value, exponent: &Value, modulo: Option<&Value>) -> Result<Value> {
        #[cfg(feature = "trace-dispatch")]
        tracing::trace!(
            target: "fraction::dispatch",
            base = base.type_name(),
            exponent = exponent.type_name(),
            modulo = ?modulo.map(Value::type_name),
            "power"
        );

        let (base_operand, exponent_operand) = match (Operand::classify(base), Operand::classify(exponent)) {
            (Some(b), Some(e)) => (b, e),
            _ => return Err(unsupported_power(base, exponent, modulo)),
        };

        if is_fraction(base) {
            let base = match &base_operand {
                Operand::Fraction(f) => f,
                _ => return Err(unsupported_power(base, exponent, modulo)),
            };
            return match &exponent_operand {
                Operand::Fraction(e) if e.is_integer() => {
                    fraction_integer_power(base, e.numerator(), modulo)
                }
                Operand::Fraction(e) => float_power(base.try_to_f64()?, e.try_to_f64()?, modulo),
                Operand::Integer(e) => fraction_integer_power(base, e, modulo),
                Operand::Float(e) => float_power(base.try_to_f64()?, *e, modulo),
            };
        }

        if is_fraction(exponent) {
            if let Operand::Fraction(e) = &exponent_operand {
                return match &base_operand {
                    Operand::Integer(b) => integer_fraction_power(b, e, modulo),
                    Operand::Float(b) => float_power(*b, e.try_to_f64()?, modulo),
                    Operand::Fraction(_) => Err(unsupported_power(base, exponent, modulo)),
                };
            }
        }

        // 法だけが Fraction: 冪を求めてから剰余を取る
        if let Some(modulo_value) = modulo.filter(|m| is_fraction(m)) {
            let result = host_power(&base_operand, &exponent_operand)?;
            return Value::binary(BinaryOp::Mod, &result, modulo_value);
        }

        tracing::debug!(
            target: "fraction::dispatch",
            base = base.type_name(),
            exponent = exponent.type_name(),
            "power not supported"
        );
        Err(unsupported_power(base, exponent, modulo))
    }

    /// 比較。順序の定義されない組は `==`/`!=` だけが構造比較で成立する。
    pub fn compare(op: CompareOp, lhs: &Value, rhs: &Value) -> Result<bool> {
        let ordering = match (lhs, rhs) {
            (Value::Fraction(fraction), other) => compare_fraction(fraction, other),
            (other, Value::Fraction(fraction)) => {
                compare_fraction(fraction, other).map(|ordering| ordering.map(Ordering::reverse))
            }
            _ => None,
        };
        match ordering {
            Some(Some(ordering)) => Ok(op.matches(ordering)),
            // NaN とは順序も等価もない
            Some(None) => Ok(op == CompareOp::Ne),
            None => match op {
                CompareOp::Eq => Ok(lhs == rhs),
                CompareOp::Ne => Ok(lhs != rhs),
                _ => {
                    tracing::debug!(
                        target: "fraction::dispatch",
                        op = op.symbol(),
                        lhs = lhs.type_name(),
                        rhs = rhs.type_name(),
                        "ordering not supported"
                    );
                    Err(FractionError::type_error(format!(
                        "'{}' not supported between instances of '{}' and '{}'",
                        op.symbol(),
                        lhs.type_name(),
                        rhs.type_name()
                    )))
                }
            },
        }
    }
}

/// Fraction と他の値の順序。適用できなければ None、NaN なら Some(None)。
fn compare_fraction(fraction: &Fraction, other: &Value) -> Option<Option<Ordering>> {
    match Operand::classify(other)? {
        Operand::Fraction(other) => Some(Some(fraction.cmp(&other))),
        Operand::Integer(other) => Some(Some(fraction.cmp_integer(other))),
        Operand::Float(other) => Some(fraction.partial_cmp_f64(other)),
    }
}
