// src/fraction/parse.rs
//
// 文字列からの構築
//
// 受理する形式（前後の空白は除去、最初に一致したものを採用）:
//
//   [符号]数字列                        整数       "-42"
//   [符号]数字列/数字列                 有理数     "3/4"
//   [符号]数字列?[.数字列?][e[符号]数字列] 小数     "3.25", ".5", "1e-3"
//
// 小数は整数部か小数部の少なくとも一方に数字が必要。
// Modern モードでは数字列の中の単一の `_` を区切りとして読み飛ばす。

use std::str::FromStr;

use num_bigint::BigInt;
use num_traits::{ToPrimitive, Zero};

use super::Fraction;
use crate::config::{ParseMode, TEN};
use crate::error::{FractionError, Result};

/// ホスト文字列の strip() と同じ空白判定
fn is_host_whitespace(c: char) -> bool {
    match c {
        ' ' | '\t'..='\r' | '\x1c'..='\x1f' => true,
        c if c.is_ascii() => false,
        c => c.is_whitespace(),
    }
}

enum Literal {
    Rational {
        negative: bool,
        numerator: String,
        denominator: String,
    },
    Decimal {
        negative: bool,
        integer: String,
        fraction: String,
        exponent: Option<(bool, String)>,
    },
}

struct Scanner<'a> {
    bytes: &'a [u8],
    position: usize,
    underscores: bool,
}

impl<'a> Scanner<'a> {
    fn new(text: &'a str, underscores: bool) -> Self {
        Scanner {
            bytes: text.as_bytes(),
            position: 0,
            underscores,
        }
    }

    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.position).copied()
    }

    fn eat(&mut self, byte: u8) -> bool {
        if self.peek() == Some(byte) {
            self.position += 1;
            true
        } else {
            false
        }
    }

    fn at_end(&self) -> bool {
        self.position == self.bytes.len()
    }

    /// 符号を読む。負なら true。
    fn sign(&mut self) -> bool {
        match self.peek() {
            Some(b'-') => {
                self.position += 1;
                true
            }
            Some(b'+') => {
                self.position += 1;
                false
            }
            _ => false,
        }
    }

    /// 数字列を読む（区切りの `_` は除く）。数字がなければ None。
    fn digits(&mut self) -> Option<String> {
        let mut digits = String::new();
        loop {
            match self.peek() {
                Some(byte) if byte.is_ascii_digit() => {
                    digits.push(byte as char);
                    self.position += 1;
                }
                Some(b'_') if self.underscores && !digits.is_empty() => {
                    // 数字に挟まれた `_` だけが区切り
                    match self.bytes.get(self.position + 1) {
                        Some(next) if next.is_ascii_digit() => self.position += 1,
                        _ => break,
                    }
                }
                _ => break,
            }
        }
        if digits.is_empty() {
            None
        } else {
            Some(digits)
        }
    }

    fn literal(mut self) -> Option<Literal> {
        let negative = self.sign();
        let integer = self.digits();

        if self.eat(b'/') {
            let numerator = integer?;
            let denominator = self.digits()?;
            return self.at_end().then(|| Literal::Rational {
                negative,
                numerator,
                denominator,
            });
        }

        let fraction = if self.eat(b'.') {
            self.digits().unwrap_or_default()
        } else {
            String::new()
        };
        if integer.is_none() && fraction.is_empty() {
            return None;
        }

        let exponent = match self.peek() {
            Some(b'e') | Some(b'E') => {
                self.position += 1;
                let exponent_negative = self.sign();
                Some((exponent_negative, self.digits()?))
            }
            _ => None,
        };

        self.at_end().then(|| Literal::Decimal {
            negative,
            integer: integer.unwrap_or_default(),
            fraction,
            exponent,
        })
    }
}

fn parse_digits(digits: &str) -> Result<BigInt> {
    BigInt::from_str(digits).map_err(|err| FractionError::value(err.to_string()))
}

fn build(literal: Literal) -> Result<Fraction> {
    match literal {
        Literal::Rational {
            negative,
            numerator,
            denominator,
        } => {
            let mut numerator = parse_digits(&numerator)?;
            if negative {
                numerator = -numerator;
            }
            let denominator = parse_digits(&denominator)?;
            if denominator.is_zero() {
                return Err(FractionError::division_by_zero(format!(
                    "Fraction({}, 0)",
                    numerator
                )));
            }
            Ok(Fraction::reduced(numerator, denominator))
        }
        Literal::Decimal {
            negative,
            integer,
            fraction,
            exponent,
        } => {
            let mut numerator = parse_digits(&format!("{}{}", integer, fraction))?;
            if numerator.is_zero() {
                return Ok(Fraction::default());
            }
            if negative {
                numerator = -numerator;
            }

            // 10 の冪の指数: 指数部 - 小数部の桁数
            let mut scale = -BigInt::from(fraction.len());
            if let Some((exponent_negative, digits)) = exponent {
                let value = parse_digits(&digits)?;
                if exponent_negative {
                    scale -= value;
                } else {
                    scale += value;
                }
            }
            let power = scale
                .magnitude()
                .to_u32()
                .ok_or_else(|| FractionError::overflow("exponent too large in fraction literal"))?;
            let factor = TEN.pow(power);
            if scale.is_zero() || scale > BigInt::zero() {
                Ok(Fraction::from_integer(numerator * factor))
            } else {
                Ok(Fraction::reduced(numerator, factor))
            }
        }
    }
}

impl Fraction {
    /// 指定したモードで文字列を解釈する
    pub fn parse_with(text: &str, mode: ParseMode) -> Result<Fraction> {
        let body = text.trim_matches(is_host_whitespace);
        match Scanner::new(body, mode.allows_underscores()).literal() {
            Some(literal) => build(literal),
            None => {
                tracing::debug!(target: "fraction::parse", literal = %text, ?mode, "rejected literal");
                Err(FractionError::value(format!(
                    "Invalid literal for Fraction: '{}'",
                    text
                )))
            }
        }
    }
}

impl FromStr for Fraction {
    type Err = FractionError;

    fn from_str(text: &str) -> Result<Self> {
        Fraction::parse_with(text, ParseMode::Modern)
    }
}
