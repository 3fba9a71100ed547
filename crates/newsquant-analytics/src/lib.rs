//! 뉴스 감성 및 가격 분석 엔진.
//!
//! 이 크레이트는 다음을 제공합니다:
//! - 헤드라인 토큰화 및 사전 기반 감성 점수
//! - 일별 감성 집계와 감성-수익률 Pearson 상관분석
//! - 기술적 지표 (SMA, EMA, RSI, MACD)
//! - 뉴스 탐색적 분석(EDA) 통계
//! - JSON 차트 문서
//!
//! # Re-exports
//!
//! - [`sentiment`]: 감성 점수 및 일별 집계
//! - [`correlation`]: 날짜 조인 및 상관분석
//! - [`indicators`]: 기술적 지표와 종목별 지표 테이블
//! - [`eda`]: 기술 통계량과 빈도 집계

pub mod charts;
pub mod correlation;
pub mod eda;
pub mod indicators;
pub mod sentiment;
pub mod text;

// Charts 모듈 re-exports
pub use charts::{
    common_words_chart, indicator_chart, indicator_chart_file_name, publication_frequency_chart,
    publisher_domains_chart, ChartDocument, ChartKind, ChartPanel, ChartPoint, ChartSeries,
};

// Correlation 모듈 re-exports
pub use correlation::{
    calculate_correlation, correlate, correlate_joined, join_on_date, pearson_test, PearsonTest,
};

// EDA 모듈 re-exports
pub use eda::{analyze_news, describe, value_counts, EdaReport, Summary, ValueCount};

// Indicators 모듈 re-exports
pub use indicators::{
    EmaParams, IndicatorEngine, IndicatorError, IndicatorResult, IndicatorRow, IndicatorSettings,
    IndicatorTable, MacdParams, MacdResult, MomentumCalculator, RsiParams, SmaParams,
    TrendIndicators,
};

// Sentiment 모듈 re-exports
pub use sentiment::{
    aggregate_daily, daily_sentiment_by_ticker, score_news, LexiconScorer, SentimentLexicon,
    SentimentScorer,
};
