// src/macros.rs
//
// テスト・ベンチマーク用の略記

/// `fraction!(n, d)` は `Fraction::new(n, d)`、`fraction!(n)` は整数 n/1。
///
/// 分母ゼロは panic する。
#[macro_export]
macro_rules! fraction {
    ($numerator:expr, $denominator:expr) => {
        $crate::fraction::Fraction::new($numerator, $denominator)
            .expect("fraction! literal with zero denominator")
    };
    ($value:expr) => {
        $crate::fraction::Fraction::from_integer($value)
    };
}
