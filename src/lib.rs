// src/lib.rs
//
// 任意精度の有理数エンジン

mod macros;

pub mod config;
pub mod error;
pub mod fraction;
pub mod value;

pub use config::ParseMode;
pub use error::{FractionError, Result};
pub use fraction::traits::RationalLike;
pub use fraction::Fraction;
pub use value::{BinaryOp, CompareOp, Value};
