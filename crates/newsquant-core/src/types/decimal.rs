//! 가격 계산을 위한 Decimal 유틸리티.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

/// 가격 타입.
pub type Price = Decimal;

/// Decimal 변환을 위한 확장 트레이트.
pub trait DecimalExt {
    /// f64로 변환합니다. 표현할 수 없으면 NaN.
    fn to_f64_lossy(&self) -> f64;

    /// `self` 대비 `current`의 변화율(%)을 계산합니다.
    ///
    /// 기준값이 0이면 정의되지 않으므로 None.
    fn pct_change_to(&self, current: Decimal) -> Option<f64>;
}

impl DecimalExt for Decimal {
    fn to_f64_lossy(&self) -> f64 {
        self.to_f64().unwrap_or(f64::NAN)
    }

    fn pct_change_to(&self, current: Decimal) -> Option<f64> {
        if self.is_zero() {
            return None;
        }
        ((current - *self) / *self * Decimal::ONE_HUNDRED).to_f64()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_pct_change() {
        let change = dec!(10).pct_change_to(dec!(11)).unwrap();
        assert!((change - 10.0).abs() < 1e-9);

        let change = dec!(11).pct_change_to(dec!(9)).unwrap();
        assert!((change + 18.181818).abs() < 1e-4);
    }

    #[test]
    fn test_pct_change_from_zero_is_undefined() {
        assert!(Decimal::ZERO.pct_change_to(dec!(5)).is_none());
    }
}
