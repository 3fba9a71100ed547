//! 모멘텀 지표 (Momentum Indicators).
//!
//! 과매수/과매도 상태를 측정하는 RSI를 제공합니다.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::{IndicatorError, IndicatorResult};

/// RSI 과매수 기준선.
pub const RSI_OVERBOUGHT: f64 = 70.0;
/// RSI 과매도 기준선.
pub const RSI_OVERSOLD: f64 = 30.0;

/// RSI 파라미터.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RsiParams {
    /// RSI 기간 (기본: 14).
    pub period: usize,
}

impl Default for RsiParams {
    fn default() -> Self {
        Self { period: 14 }
    }
}

/// 모멘텀 지표 계산기.
#[derive(Debug, Default)]
pub struct MomentumCalculator;

impl MomentumCalculator {
    /// 새로운 모멘텀 계산기 생성.
    pub fn new() -> Self {
        Self
    }

    /// RSI (Relative Strength Index) 계산.
    ///
    /// RSI = 100 - (100 / (1 + RS))
    /// RS = 평균 상승폭 / 평균 하락폭
    ///
    /// 평균은 alpha = 1/period 인 Wilder 평활(EWM)로 구합니다.
    ///
    /// 상승폭과 하락폭이 모두 0인 구간(가격 변화 없음)은 RSI가 정의되지 않으므로 None,
    /// 하락폭만 0이면 100입니다.
    ///
    /// # 반환
    /// 0-100 사이의 RSI 값들 (처음 period-1개는 None)
    pub fn rsi(&self, prices: &[Decimal], params: RsiParams) -> IndicatorResult<Vec<Option<Decimal>>> {
        let period = params.period;

        if period == 0 {
            return Err(IndicatorError::InvalidParameter(
                "기간은 0보다 커야 합니다".to_string(),
            ));
        }

        if prices.len() < period + 1 {
            return Err(IndicatorError::InsufficientData {
                required: period + 1,
                provided: prices.len(),
            });
        }

        // 가격 변화 (첫 번째는 변화 없음)
        let mut gains = Vec::with_capacity(prices.len());
        let mut losses = Vec::with_capacity(prices.len());
        gains.push(Decimal::ZERO);
        losses.push(Decimal::ZERO);
        for w in prices.windows(2) {
            let delta = w[1] - w[0];
            gains.push(delta.max(Decimal::ZERO));
            losses.push((-delta).max(Decimal::ZERO));
        }

        let alpha = Decimal::ONE / Decimal::from(period);
        let avg_gains = self.ewm(&gains, alpha, period);
        let avg_losses = self.ewm(&losses, alpha, period);

        let result = avg_gains
            .into_iter()
            .zip(avg_losses)
            .map(|(gain, loss)| match (gain, loss) {
                (Some(gain), Some(loss)) => {
                    if loss.is_zero() {
                        if gain.is_zero() {
                            None
                        } else {
                            Some(dec!(100))
                        }
                    } else {
                        // 하락폭이 0에 수렴해 RS가 Decimal 범위를 넘으면 극한값 100
                        let rsi = gain
                            .checked_div(loss)
                            .and_then(|rs| Decimal::ONE.checked_add(rs))
                            .and_then(|denom| dec!(100).checked_div(denom))
                            .map_or(dec!(100), |ratio| dec!(100) - ratio);
                        Some(rsi)
                    }
                }
                _ => None,
            })
            .collect();

        Ok(result)
    }

    /// EWM (Exponential Weighted Mean) 계산.
    ///
    /// 처음 min_periods개의 단순 평균으로 시작한 뒤 `prev + alpha × (x - prev)`로 갱신합니다.
    fn ewm(&self, values: &[Decimal], alpha: Decimal, min_periods: usize) -> Vec<Option<Decimal>> {
        let mut result = Vec::with_capacity(values.len());
        if values.len() < min_periods {
            result.resize(values.len(), None);
            return result;
        }

        result.extend(std::iter::repeat(None).take(min_periods - 1));

        let mut ewm_value =
            values[..min_periods].iter().sum::<Decimal>() / Decimal::from(min_periods);
        result.push(Some(ewm_value));

        for value in &values[min_periods..] {
            ewm_value += alpha * (*value - ewm_value);
            result.push(Some(ewm_value));
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_rsi_range() {
        let calc = MomentumCalculator::new();
        let prices = vec![
            dec!(44.34),
            dec!(44.09),
            dec!(44.15),
            dec!(43.61),
            dec!(44.33),
            dec!(44.83),
            dec!(45.10),
            dec!(45.42),
            dec!(45.84),
            dec!(46.08),
            dec!(45.89),
            dec!(46.03),
            dec!(45.61),
            dec!(46.28),
            dec!(46.28),
            dec!(46.00),
        ];

        let rsi = calc.rsi(&prices, RsiParams { period: 14 }).unwrap();
        assert_eq!(rsi.len(), prices.len());
        assert!(rsi[12].is_none());
        assert!(rsi[13].is_some());
        for value in rsi.iter().flatten() {
            assert!(*value >= Decimal::ZERO);
            assert!(*value <= dec!(100));
        }
    }

    fn assert_close(actual: Option<Decimal>, expected: Decimal) {
        let actual = actual.expect("값이 정의되어야 합니다");
        assert!(
            (actual - expected).abs() < dec!(0.000001),
            "expected {}, got {}",
            expected,
            actual
        );
    }

    #[test]
    fn test_rsi_known_values() {
        let calc = MomentumCalculator::new();
        let prices = vec![
            dec!(44.34),
            dec!(44.09),
            dec!(44.15),
            dec!(43.61),
            dec!(44.33),
            dec!(44.83),
            dec!(45.10),
            dec!(45.42),
            dec!(45.84),
            dec!(46.08),
            dec!(45.89),
            dec!(46.03),
            dec!(45.61),
            dec!(46.28),
            dec!(46.28),
            dec!(46.00),
        ];

        let rsi = calc.rsi(&prices, RsiParams { period: 14 }).unwrap();
        assert_close(rsi[13], dec!(70.464135021));
        assert_close(rsi[14], dec!(70.464135021));
        assert_close(rsi[15], dec!(65.946211183));
    }

    #[test]
    fn test_rsi_wilder_smoothing_after_seed() {
        let calc = MomentumCalculator::new();
        let prices = vec![dec!(1), dec!(2), dec!(3), dec!(2)];

        // 마지막 봉: 상승 평균 0.375, 하락 평균 0.5, RS = 0.75
        let rsi = calc.rsi(&prices, RsiParams { period: 2 }).unwrap();
        assert_eq!(rsi[0], None);
        assert_eq!(rsi[1], Some(dec!(100)));
        assert_eq!(rsi[2], Some(dec!(100)));
        assert_close(rsi[3], dec!(42.857142857));
    }

    #[test]
    fn test_rsi_vanishing_losses_saturate_at_100() {
        let calc = MomentumCalculator::new();
        let mut prices = vec![dec!(100000), dec!(99999.99)];
        let mut last = dec!(99999.99);
        for _ in 0..3000 {
            last += dec!(1000);
            prices.push(last);
        }

        let rsi = calc.rsi(&prices, RsiParams::default()).unwrap();
        for value in rsi.iter().flatten() {
            assert!(*value >= Decimal::ZERO);
            assert!(*value <= dec!(100));
        }
        assert_eq!(rsi.last().copied().flatten(), Some(dec!(100)));
    }

    #[test]
    fn test_rsi_flat_series_is_undefined() {
        let calc = MomentumCalculator::new();
        let prices = vec![dec!(100); 30];

        let rsi = calc.rsi(&prices, RsiParams::default()).unwrap();
        assert!(rsi.iter().all(|v| v.is_none()));
    }

    #[test]
    fn test_rsi_only_gains_is_100() {
        let calc = MomentumCalculator::new();
        let prices: Vec<Decimal> = (0..20).map(|i| Decimal::from(100 + i)).collect();

        let rsi = calc.rsi(&prices, RsiParams { period: 5 }).unwrap();
        assert_eq!(rsi[19], Some(dec!(100)));
    }

    #[test]
    fn test_rsi_only_losses_is_zero() {
        let calc = MomentumCalculator::new();
        let prices: Vec<Decimal> = (0..20).map(|i| Decimal::from(200 - i)).collect();

        let rsi = calc.rsi(&prices, RsiParams { period: 5 }).unwrap();
        assert_eq!(rsi[19], Some(Decimal::ZERO));
    }

    #[test]
    fn test_rsi_insufficient_data() {
        let calc = MomentumCalculator::new();
        let prices = vec![dec!(1), dec!(2)];
        assert!(matches!(
            calc.rsi(&prices, RsiParams::default()),
            Err(IndicatorError::InsufficientData { required: 15, provided: 2 })
        ));
    }
}
