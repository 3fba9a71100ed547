//! 감성-수익률 상관분석 결과 타입.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::types::Ticker;

/// 날짜 기준 내부 조인된 관측치.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct JoinedObservation {
    /// 날짜
    pub date: NaiveDate,
    /// 일평균 감성
    pub mean_sentiment: f64,
    /// 일간 수익률(%) (첫 거래일 등은 None)
    pub daily_return: Option<f64>,
}

/// Pearson 상관분석 결과.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorrelationResult {
    /// 종목 티커
    pub ticker: Ticker,
    /// Pearson 상관계수 (-1.0 ~ 1.0)
    pub pearson_r: f64,
    /// 양측 검정 p-value (0.0 ~ 1.0)
    pub p_value: f64,
    /// 조인된 관측치 수
    pub sample_size: usize,
}

/// 상관계수를 정의할 수 없는 이유.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UndefinedReason {
    /// 조인된 관측치가 2개 미만
    InsufficientSamples,
    /// 한쪽 시계열의 분산이 0
    ConstantInput,
    /// 두 시계열의 길이가 다름
    LengthMismatch,
}

impl fmt::Display for UndefinedReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UndefinedReason::InsufficientSamples => write!(f, "not enough joined samples"),
            UndefinedReason::ConstantInput => write!(f, "constant input series"),
            UndefinedReason::LengthMismatch => write!(f, "series lengths differ"),
        }
    }
}

/// 종목별 상관분석 결과.
///
/// 데이터 부족은 에러가 아니라 `Undefined`로 보고합니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CorrelationOutcome {
    /// 상관계수 계산 완료
    Computed(CorrelationResult),
    /// 상관계수 정의 불가
    Undefined {
        ticker: Ticker,
        sample_size: usize,
        reason: UndefinedReason,
    },
}

impl CorrelationOutcome {
    /// 종목 티커.
    pub fn ticker(&self) -> &Ticker {
        match self {
            CorrelationOutcome::Computed(result) => &result.ticker,
            CorrelationOutcome::Undefined { ticker, .. } => ticker,
        }
    }

    /// 조인된 관측치 수.
    pub fn sample_size(&self) -> usize {
        match self {
            CorrelationOutcome::Computed(result) => result.sample_size,
            CorrelationOutcome::Undefined { sample_size, .. } => *sample_size,
        }
    }

    /// 계산된 결과가 있으면 반환합니다.
    pub fn result(&self) -> Option<&CorrelationResult> {
        match self {
            CorrelationOutcome::Computed(result) => Some(result),
            CorrelationOutcome::Undefined { .. } => None,
        }
    }
}
