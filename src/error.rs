// src/error.rs
//
// 分数エンジンのエラー型定義
// 検出した地点で同期的に返し、内部で回復・再試行はしない。

use std::fmt;

pub type Result<T> = std::result::Result<T, FractionError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FractionError {
    /// ゼロ除算（分母ゼロ、`a/0` リテラル、ゼロでの除算・剰余、ゼロの負の冪）
    DivisionByZero(String),
    /// 無限大からの構築、浮動小数点への変換あふれ
    Overflow(String),
    /// NaN からの構築、不正なリテラル、不正な引数値
    Value(String),
    /// 整数でない成分、未対応の被演算子
    Type(String),
}

impl FractionError {
    pub fn division_by_zero(message: impl Into<String>) -> Self {
        FractionError::DivisionByZero(message.into())
    }

    pub fn overflow(message: impl Into<String>) -> Self {
        FractionError::Overflow(message.into())
    }

    pub fn value(message: impl Into<String>) -> Self {
        FractionError::Value(message.into())
    }

    pub fn type_error(message: impl Into<String>) -> Self {
        FractionError::Type(message.into())
    }

    /// エラー種別名（ホスト側の例外クラスへの対応付けに使う）
    pub fn kind(&self) -> &'static str {
        match self {
            FractionError::DivisionByZero(_) => "ZeroDivisionError",
            FractionError::Overflow(_) => "OverflowError",
            FractionError::Value(_) => "ValueError",
            FractionError::Type(_) => "TypeError",
        }
    }

    pub fn message(&self) -> &str {
        match self {
            FractionError::DivisionByZero(msg)
            | FractionError::Overflow(msg)
            | FractionError::Value(msg)
            | FractionError::Type(msg) => msg,
        }
    }
}

impl fmt::Display for FractionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FractionError::DivisionByZero(msg) => write!(f, "Division by zero: {}", msg),
            FractionError::Overflow(msg) => write!(f, "Overflow: {}", msg),
            FractionError::Value(msg) => write!(f, "Value error: {}", msg),
            FractionError::Type(msg) => write!(f, "Type error: {}", msg),
        }
    }
}

impl std::error::Error for FractionError {}

impl From<String> for FractionError {
    fn from(s: String) -> Self {
        FractionError::Value(s)
    }
}

impl From<&str> for FractionError {
    fn from(s: &str) -> Self {
        FractionError::Value(s.to_string())
    }
}
