//! 차트 데이터 구조.
//!
//! 분석 결과를 렌더러와 무관한 JSON 차트 문서로 변환합니다.
//!
//! # 제공 차트
//!
//! - 일별 기사 수 (publication_frequency)
//! - 상위 단어 막대 차트 (common_words)
//! - 퍼블리셔 도메인 막대 차트 (publisher_domains)
//! - 종목별 지표 3단 차트: 가격+SMA+EMA / RSI / MACD (`<TICKER>_indicators`)

use chrono::NaiveDate;
use newsquant_core::{DecimalExt, Ticker};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::eda::ValueCount;
use crate::indicators::momentum::{RSI_OVERBOUGHT, RSI_OVERSOLD};
use crate::indicators::{IndicatorRow, IndicatorTable};

/// 차트 데이터 포인트
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    /// X축 레이블 (날짜 또는 범주)
    pub x: String,

    /// Y축 값 (결측이면 null)
    pub y: Option<f64>,
}

impl ChartPoint {
    /// 새로운 차트 포인트를 생성합니다.
    pub fn new(x: impl Into<String>, y: Option<f64>) -> Self {
        Self { x: x.into(), y }
    }

    /// 날짜 X축 포인트를 생성합니다.
    pub fn dated(date: NaiveDate, y: Option<f64>) -> Self {
        Self::new(date.format("%Y-%m-%d").to_string(), y)
    }
}

/// 패널 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    Line,
    Bar,
}

/// 이름이 붙은 데이터 계열
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    pub name: String,
    pub points: Vec<ChartPoint>,
}

impl ChartSeries {
    pub fn new(name: impl Into<String>, points: Vec<ChartPoint>) -> Self {
        Self {
            name: name.into(),
            points,
        }
    }
}

/// 차트 패널 (하나의 축)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPanel {
    pub title: String,
    pub kind: ChartKind,
    pub series: Vec<ChartSeries>,
    /// 수평 기준선 (예: RSI 70/30)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub reference_lines: Vec<f64>,
}

/// 차트 문서 (파일 하나)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartDocument {
    pub title: String,
    pub panels: Vec<ChartPanel>,
}

impl ChartDocument {
    /// 단일 패널 문서를 생성합니다.
    pub fn single(title: impl Into<String>, panel: ChartPanel) -> Self {
        Self {
            title: title.into(),
            panels: vec![panel],
        }
    }
}

/// 일별 기사 수 라인 차트.
pub fn publication_frequency_chart(daily_counts: &BTreeMap<NaiveDate, usize>) -> ChartDocument {
    let points = daily_counts
        .iter()
        .map(|(date, count)| ChartPoint::dated(*date, Some(*count as f64)))
        .collect();

    ChartDocument::single(
        "Publication Frequency Over Time",
        ChartPanel {
            title: "Articles per day".to_string(),
            kind: ChartKind::Line,
            series: vec![ChartSeries::new("articles", points)],
            reference_lines: Vec::new(),
        },
    )
}

/// 빈도 막대 차트.
pub fn frequency_bar_chart(
    title: &str,
    series_name: &str,
    counts: &[ValueCount<String>],
) -> ChartDocument {
    let points = counts
        .iter()
        .map(|c| ChartPoint::new(c.value.clone(), Some(c.count as f64)))
        .collect();

    ChartDocument::single(
        title,
        ChartPanel {
            title: title.to_string(),
            kind: ChartKind::Bar,
            series: vec![ChartSeries::new(series_name, points)],
            reference_lines: Vec::new(),
        },
    )
}

/// 상위 단어 막대 차트.
pub fn common_words_chart(words: &[ValueCount<String>]) -> ChartDocument {
    frequency_bar_chart("Most Common Words in Headlines", "frequency", words)
}

/// 퍼블리셔 도메인 막대 차트. 도메인이 없으면 None.
pub fn publisher_domains_chart(domains: &[ValueCount<String>]) -> Option<ChartDocument> {
    (!domains.is_empty())
        .then(|| frequency_bar_chart("Top Publisher Domains", "articles", domains))
}

/// 종목별 지표 3단 차트: 가격+SMA+EMA, RSI(기준선 70/30), MACD+시그널+히스토그램.
pub fn indicator_chart(table: &IndicatorTable) -> ChartDocument {
    let settings = &table.settings;
    let column = |f: fn(&IndicatorRow) -> Option<Decimal>| column_points(table, f);

    let price_panel = ChartPanel {
        title: format!("{} Close Price with Moving Averages", table.ticker),
        kind: ChartKind::Line,
        series: vec![
            ChartSeries::new("Close", column(|r| Some(r.close))),
            ChartSeries::new(format!("SMA {}", settings.sma.period), column(|r| r.sma)),
            ChartSeries::new(format!("EMA {}", settings.ema.period), column(|r| r.ema)),
        ],
        reference_lines: Vec::new(),
    };

    let rsi_panel = ChartPanel {
        title: format!("RSI ({})", settings.rsi.period),
        kind: ChartKind::Line,
        series: vec![ChartSeries::new("RSI", column(|r| r.rsi))],
        reference_lines: vec![RSI_OVERBOUGHT, RSI_OVERSOLD],
    };

    let macd_panel = ChartPanel {
        title: format!(
            "MACD ({}, {}, {})",
            settings.macd.fast_period, settings.macd.slow_period, settings.macd.signal_period
        ),
        kind: ChartKind::Line,
        series: vec![
            ChartSeries::new("MACD", column(|r| r.macd)),
            ChartSeries::new("Signal", column(|r| r.macd_signal)),
            ChartSeries::new("Histogram", column(|r| r.macd_histogram)),
        ],
        reference_lines: Vec::new(),
    };

    ChartDocument {
        title: format!("{} Technical Indicators", table.ticker),
        panels: vec![price_panel, rsi_panel, macd_panel],
    }
}

fn column_points(table: &IndicatorTable, f: fn(&IndicatorRow) -> Option<Decimal>) -> Vec<ChartPoint> {
    table
        .rows
        .iter()
        .map(|row| ChartPoint::dated(row.date, f(row).map(|v| v.to_f64_lossy())))
        .collect()
}

/// 지표 차트 파일 이름 (`<TICKER>_indicators.json`).
pub fn indicator_chart_file_name(ticker: &Ticker) -> String {
    format!("{}_indicators.json", ticker)
}
