// src/config.rs
//
// 分数エンジンの設定値と定数

use num_bigint::BigInt;
use num_traits::One;

/// `limit_denominator` の既定の分母上限
pub const DEFAULT_MAX_DENOMINATOR: u64 = 1_000_000;

/// 浮動小数点分解ループの反復上限
pub const FLOAT_DECOMPOSITION_LIMIT: usize = 300;

/// ハッシュ法のビット数（法は 2^61 - 1 のメルセンヌ素数）
pub const HASH_MODULUS_BITS: u32 = 61;

/// 無限大に相当するハッシュ値
pub const HASH_INF: i64 = 314_159;

lazy_static::lazy_static! {
    /// ハッシュ法: 2^61 - 1
    pub(crate) static ref HASH_MODULUS: BigInt = (BigInt::one() << HASH_MODULUS_BITS) - 1;

    /// 逆元計算用の指数: 2^61 - 3
    pub(crate) static ref HASH_MODULUS_MINUS_TWO: BigInt = &*HASH_MODULUS - 2;

    pub(crate) static ref TEN: BigInt = BigInt::from(10u32);
}

/// 文字列パースのモード
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParseMode {
    /// 数字列中の単一 `_` 区切りを許可する
    #[default]
    Modern,
    /// 区切り文字を一切許可しない
    Legacy,
}

impl ParseMode {
    pub fn allows_underscores(self) -> bool {
        matches!(self, ParseMode::Modern)
    }
}
