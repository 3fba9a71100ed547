//! 종목별 지표 테이블.
//!
//! 가격 시계열의 각 일봉에 SMA/EMA/RSI/MACD 값을 붙입니다.
//! 시계열이 특정 지표의 워밍업 기간보다 짧으면 그 지표 컬럼만 전부 None으로 두고
//! 나머지 지표는 계속 계산합니다.

use chrono::NaiveDate;
use newsquant_core::{IndicatorConfig, PriceSeries, Ticker};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::{
    EmaParams, IndicatorEngine, IndicatorError, IndicatorResult, MacdParams, MacdResult,
    RsiParams, SmaParams,
};

/// 지표 테이블 계산 파라미터.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct IndicatorSettings {
    pub sma: SmaParams,
    pub ema: EmaParams,
    pub rsi: RsiParams,
    pub macd: MacdParams,
}

impl From<&IndicatorConfig> for IndicatorSettings {
    fn from(cfg: &IndicatorConfig) -> Self {
        Self {
            sma: SmaParams {
                period: cfg.sma_period,
            },
            ema: EmaParams {
                period: cfg.ema_period,
            },
            rsi: RsiParams {
                period: cfg.rsi_period,
            },
            macd: MacdParams {
                fast_period: cfg.macd_fast,
                slow_period: cfg.macd_slow,
                signal_period: cfg.macd_signal,
            },
        }
    }
}

/// 일봉 하나의 지표 값.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorRow {
    pub date: NaiveDate,
    pub close: Decimal,
    pub sma: Option<Decimal>,
    pub ema: Option<Decimal>,
    pub rsi: Option<Decimal>,
    pub macd: Option<Decimal>,
    pub macd_signal: Option<Decimal>,
    pub macd_histogram: Option<Decimal>,
}

/// 한 종목의 지표 테이블.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndicatorTable {
    pub ticker: Ticker,
    pub settings: IndicatorSettings,
    pub rows: Vec<IndicatorRow>,
}

impl IndicatorTable {
    /// 가격 시계열에서 지표 테이블을 계산합니다.
    ///
    /// 데이터 부족은 해당 컬럼을 None으로 채우고, 잘못된 파라미터는 에러로 반환합니다.
    pub fn compute(series: &PriceSeries, settings: IndicatorSettings) -> IndicatorResult<Self> {
        let engine = IndicatorEngine::new();
        let closes = series.closes();
        let len = closes.len();

        let sma = or_missing(engine.sma(&closes, settings.sma), len, &series.ticker, "SMA")?;
        let ema = or_missing(engine.ema(&closes, settings.ema), len, &series.ticker, "EMA")?;
        let rsi = or_missing(engine.rsi(&closes, settings.rsi), len, &series.ticker, "RSI")?;
        let macd = or_missing(
            engine.macd(&closes, settings.macd),
            len,
            &series.ticker,
            "MACD",
        )?;

        let rows = series
            .bars()
            .iter()
            .enumerate()
            .map(|(i, bar)| IndicatorRow {
                date: bar.date,
                close: bar.close,
                sma: sma[i],
                ema: ema[i],
                rsi: rsi[i],
                macd: macd[i].macd,
                macd_signal: macd[i].signal,
                macd_histogram: macd[i].histogram,
            })
            .collect();

        Ok(Self {
            ticker: series.ticker.clone(),
            settings,
            rows,
        })
    }

    /// 일봉 개수.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// 비어 있는지 확인합니다.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// 가장 최근 일봉의 지표 값.
    pub fn latest(&self) -> Option<&IndicatorRow> {
        self.rows.last()
    }
}

fn or_missing<T: Clone + Default>(
    result: IndicatorResult<Vec<T>>,
    len: usize,
    ticker: &Ticker,
    name: &str,
) -> IndicatorResult<Vec<T>> {
    match result {
        Ok(values) => Ok(values),
        Err(IndicatorError::InsufficientData { required, provided }) => {
            warn!(
                %ticker,
                indicator = name,
                required,
                provided,
                "Not enough bars, indicator left undefined"
            );
            Ok(vec![T::default(); len])
        }
        Err(e) => Err(e),
    }
}
