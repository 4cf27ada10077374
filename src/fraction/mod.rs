// src/fraction/mod.rs
//
// 任意精度の有理数型 Fraction
//
// ============================================================================
// 正規形
// ============================================================================
//
// すべての Fraction は構築時に次の正規形へ変換され、以後変更されない。
//
//   - 分母 > 0（符号は分子だけが持つ）
//   - gcd(|分子|, 分母) == 1（既約）
//   - ゼロは 0/1
//
// 等価性・ハッシュはこの (分子, 分母) の組だけで決まる。
// 演算はすべて新しい Fraction を返す。
//
// | 入力               | 分子 | 分母 |
// |--------------------|------|------|
// | Fraction::new(6, 4)  | 3    | 2    |
// | Fraction::new(1, -2) | -1   | 2    |
// | "3.25"             | 13   | 4    |
// | 0.5                | 1    | 2    |

pub mod arithmetic;
pub mod compare;
pub mod float;
pub mod hash;
pub mod parse;
pub mod rounding;
pub mod traits;


use std::fmt;

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, Zero};

use crate::error::{FractionError, Result};

#[derive(Clone, PartialEq, Eq)]
pub struct Fraction {
    pub(crate) numerator: BigInt,
    pub(crate) denominator: BigInt,
}

impl Fraction {
    /// (分子, 分母) の組から構築する
    ///
    /// 分母がゼロなら `DivisionByZero`。負の分母は両方の符号を反転し、
    /// 最大公約数で約分する。
    pub fn new(numerator: impl Into<BigInt>, denominator: impl Into<BigInt>) -> Result<Self> {
        let numerator = numerator.into();
        let denominator = denominator.into();
        if denominator.is_zero() {
            return Err(FractionError::division_by_zero("Denominator should be non-zero."));
        }
        let (numerator, denominator) = normalize_signs(numerator, denominator);
        Ok(Self::reduced(numerator, denominator))
    }

    pub fn from_i64s(numerator: i64, denominator: i64) -> Result<Self> {
        Self::new(numerator, denominator)
    }

    /// 整数 n/1
    pub fn from_integer(value: impl Into<BigInt>) -> Self {
        Fraction {
            numerator: value.into(),
            denominator: BigInt::one(),
        }
    }

    /// 既に正規形であることが分かっている成分から構築する
    #[inline]
    pub(crate) fn from_canonical(numerator: BigInt, denominator: BigInt) -> Self {
        debug_assert!(denominator.is_positive());
        debug_assert!(numerator.gcd(&denominator).is_one());
        Fraction { numerator, denominator }
    }

    /// 分母が正の成分を約分して構築する
    pub(crate) fn reduced(numerator: BigInt, denominator: BigInt) -> Self {
        let (numerator, denominator) = normalize_moduli(numerator, denominator);
        Fraction { numerator, denominator }
    }

    /// 符号が未確定な成分（分母が負でもよい）から構築する
    pub(crate) fn sign_normalized(numerator: BigInt, denominator: BigInt) -> Self {
        let (numerator, denominator) = normalize_signs(numerator, denominator);
        Self::from_canonical(numerator, denominator)
    }

    #[inline]
    pub fn numerator(&self) -> &BigInt {
        &self.numerator
    }

    #[inline]
    pub fn denominator(&self) -> &BigInt {
        &self.denominator
    }

    /// (分子, 分母) の組。既に正規形なのでそのまま返す。
    pub fn as_integer_ratio(&self) -> (BigInt, BigInt) {
        (self.numerator.clone(), self.denominator.clone())
    }

    pub fn into_parts(self) -> (BigInt, BigInt) {
        (self.numerator, self.denominator)
    }

    /// 分母が1かどうか
    #[inline]
    pub fn is_integer(&self) -> bool {
        self.denominator.is_one()
    }

    #[inline]
    pub fn is_negative(&self) -> bool {
        self.numerator.is_negative()
    }

    #[inline]
    pub fn is_positive(&self) -> bool {
        self.numerator.is_positive()
    }

    /// 真偽値としての評価（ゼロ以外なら真）
    #[inline]
    pub fn is_truthy(&self) -> bool {
        !self.numerator.is_zero()
    }

    pub fn abs(&self) -> Fraction {
        if self.is_negative() {
            -self
        } else {
            self.clone()
        }
    }

    /// 単項プラス。不変値なので複製を返すだけ。
    pub fn pos(&self) -> Fraction {
        self.clone()
    }

    /// 逆数
    pub fn recip(&self) -> Result<Fraction> {
        if self.numerator.is_zero() {
            return Err(FractionError::division_by_zero("Fraction(1, 0)"));
        }
        Ok(Self::sign_normalized(self.denominator.clone(), self.numerator.clone()))
    }

    /// コンストラクタ呼び出し形式の表現: `Fraction(3, 2)`
    pub fn repr(&self) -> String {
        format!("Fraction({}, {})", self.numerator, self.denominator)
    }
}

/// 分母が負なら分子・分母の符号を両方反転する
pub(crate) fn normalize_signs(numerator: BigInt, denominator: BigInt) -> (BigInt, BigInt) {
    if denominator.is_negative() {
        (-numerator, -denominator)
    } else {
        (numerator, denominator)
    }
}

/// 最大公約数で約分する。gcd == 1 の場合は除算を省く。
pub(crate) fn normalize_moduli(numerator: BigInt, denominator: BigInt) -> (BigInt, BigInt) {
    let gcd = numerator.gcd(&denominator);
    if gcd.is_one() {
        (numerator, denominator)
    } else {
        (numerator / &gcd, denominator / &gcd)
    }
}

impl Default for Fraction {
    fn default() -> Self {
        Fraction {
            numerator: BigInt::zero(),
            denominator: BigInt::one(),
        }
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_integer() {
            write!(f, "{}", self.numerator)
        } else {
            write!(f, "{}/{}", self.numerator, self.denominator)
        }
    }
}

impl fmt::Debug for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fraction({}, {})", self.numerator, self.denominator)
    }
}

macro_rules! impl_from_primitive_integer {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Fraction {
                fn from(value: $t) -> Self {
                    Fraction::from_integer(value)
                }
            }
        )*
    };
}

impl_from_primitive_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl From<BigInt> for Fraction {
    fn from(value: BigInt) -> Self {
        Fraction::from_integer(value)
    }
}

impl From<&BigInt> for Fraction {
    fn from(value: &BigInt) -> Self {
        Fraction::from_integer(value.clone())
    }
}
