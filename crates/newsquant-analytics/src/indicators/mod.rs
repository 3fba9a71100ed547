//! 기술적 지표 모듈.
//!
//! 종가 시계열에 대한 추세/모멘텀 지표를 제공합니다.
//! 모든 지표는 날짜순으로 정렬된 시계열을 한 번 순회하는 점화식으로 계산되며,
//! 이력이 부족한 앞부분은 `None`으로 표시합니다.
//!
//! # 지원 지표
//!
//! ## 추세 지표 (Trend Indicators)
//! - **SMA**: 단순 이동평균 (Simple Moving Average)
//! - **EMA**: 지수 이동평균 (Exponential Moving Average)
//! - **MACD**: 이동평균 수렴/확산 (Moving Average Convergence Divergence)
//!
//! ## 모멘텀 지표 (Momentum Indicators)
//! - **RSI**: 상대강도지수 (Relative Strength Index)
//!
//! # 사용 예시
//!
//! ```ignore
//! use newsquant_analytics::indicators::{IndicatorEngine, SmaParams, RsiParams};
//!
//! let engine = IndicatorEngine::new();
//! let sma = engine.sma(&prices, SmaParams { period: 20 })?;
//! let rsi = engine.rsi(&prices, RsiParams { period: 14 })?;
//! ```

pub mod momentum;
pub mod table;
pub mod trend;

use rust_decimal::Decimal;
use thiserror::Error;

pub use momentum::{MomentumCalculator, RsiParams, RSI_OVERBOUGHT, RSI_OVERSOLD};
pub use table::{IndicatorRow, IndicatorSettings, IndicatorTable};
pub use trend::{EmaParams, MacdParams, MacdResult, SmaParams, TrendIndicators};

/// 지표 계산 오류.
#[derive(Debug, Error)]
pub enum IndicatorError {
    /// 데이터 부족 오류
    #[error("데이터가 부족합니다: 필요 {required}개, 제공 {provided}개")]
    InsufficientData { required: usize, provided: usize },

    /// 잘못된 파라미터
    #[error("잘못된 파라미터: {0}")]
    InvalidParameter(String),
}

/// 지표 계산 결과 타입.
pub type IndicatorResult<T> = Result<T, IndicatorError>;

/// 통합 지표 엔진.
///
/// 추세/모멘텀 계산기를 하나의 인터페이스로 묶습니다.
#[derive(Debug, Default)]
pub struct IndicatorEngine {
    trend: TrendIndicators,
    momentum: MomentumCalculator,
}

impl IndicatorEngine {
    /// 새로운 지표 엔진 생성.
    pub fn new() -> Self {
        Self::default()
    }

    /// 단순 이동평균 (SMA) 계산.
    ///
    /// # 반환
    /// 계산된 SMA 값들의 벡터 (처음 period-1개는 None)
    pub fn sma(&self, prices: &[Decimal], params: SmaParams) -> IndicatorResult<Vec<Option<Decimal>>> {
        self.trend.sma(prices, params)
    }

    /// 지수 이동평균 (EMA) 계산.
    pub fn ema(&self, prices: &[Decimal], params: EmaParams) -> IndicatorResult<Vec<Option<Decimal>>> {
        self.trend.ema(prices, params)
    }

    /// MACD 라인, 시그널 라인, 히스토그램 계산.
    pub fn macd(&self, prices: &[Decimal], params: MacdParams) -> IndicatorResult<Vec<MacdResult>> {
        self.trend.macd(prices, params)
    }

    /// RSI (Relative Strength Index) 계산.
    ///
    /// # 반환
    /// 0-100 사이의 RSI 값들
    pub fn rsi(&self, prices: &[Decimal], params: RsiParams) -> IndicatorResult<Vec<Option<Decimal>>> {
        self.momentum.rsi(prices, params)
    }
}
