//! 지표 테이블 통합 테스트
//!
//! 가격 시계열 → SMA/EMA/RSI/MACD 테이블 → 차트 문서 흐름 검증

use chrono::{Duration, NaiveDate};
use newsquant_analytics::{indicator_chart, IndicatorSettings, IndicatorTable, RsiParams};
use newsquant_core::{PriceBar, PriceSeries, Ticker};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn series_from_closes(ticker: &str, closes: &[Decimal]) -> PriceSeries {
    let start = NaiveDate::from_ymd_opt(2023, 1, 2).unwrap();
    let bars = closes
        .iter()
        .enumerate()
        .map(|(i, close)| PriceBar {
            date: start + Duration::days(i as i64),
            open: *close,
            high: *close + dec!(1),
            low: *close - dec!(1),
            close: *close,
            volume: 1_000_000,
        })
        .collect();
    PriceSeries::new(Ticker::new(ticker), bars)
}

/// 상승 추세 샘플 (40개)
fn sample_uptrend() -> Vec<Decimal> {
    vec![
        dec!(100), dec!(102), dec!(101), dec!(103), dec!(105),
        dec!(104), dec!(106), dec!(108), dec!(107), dec!(109),
        dec!(111), dec!(110), dec!(112), dec!(114), dec!(113),
        dec!(115), dec!(117), dec!(116), dec!(118), dec!(120),
        dec!(119), dec!(121), dec!(123), dec!(122), dec!(124),
        dec!(126), dec!(125), dec!(127), dec!(129), dec!(128),
        dec!(130), dec!(132), dec!(131), dec!(133), dec!(135),
        dec!(134), dec!(136), dec!(138), dec!(137), dec!(139),
    ]
}

#[test]
fn test_constant_price_series() {
    let closes = vec![dec!(50); 60];
    let series = series_from_closes("FLAT", &closes);
    let table = IndicatorTable::compute(&series, IndicatorSettings::default()).unwrap();

    assert_eq!(table.len(), 60);
    for row in &table.rows {
        if let (Some(sma), Some(ema)) = (row.sma, row.ema) {
            assert_eq!(sma, dec!(50));
            assert_eq!(ema, dec!(50));
        }
        // 변동이 없으면 RSI는 정의되지 않음
        assert_eq!(row.rsi, None);
    }
    let latest = table.latest().unwrap();
    assert_eq!(latest.macd, Some(Decimal::ZERO));
    assert_eq!(latest.macd_histogram, Some(Decimal::ZERO));
}

#[test]
fn test_uptrend_indicators() {
    let series = series_from_closes("UP", &sample_uptrend());
    let table = IndicatorTable::compute(&series, IndicatorSettings::default()).unwrap();

    // 워밍업 구간
    assert!(table.rows[..19].iter().all(|r| r.sma.is_none() && r.ema.is_none()));
    assert!(table.rows[..13].iter().all(|r| r.rsi.is_none()));
    assert!(table.rows[13].rsi.is_some());
    // MACD 시그널은 26 + 9 - 1 = 34번째 봉부터
    assert!(table.rows[32].macd_signal.is_none());
    assert!(table.rows[33].macd_signal.is_some());

    let latest = table.latest().unwrap();
    assert!(latest.rsi.unwrap() > dec!(50));
    assert!(latest.macd.unwrap() > Decimal::ZERO);
    assert!(latest.ema.unwrap() > latest.sma.unwrap() - dec!(5));
}

#[test]
fn test_short_series_keeps_other_indicators() {
    // 30개: MACD 시그널(34개 필요)은 부족, SMA/EMA/RSI는 계산 가능
    let closes: Vec<Decimal> = sample_uptrend().into_iter().take(30).collect();
    let series = series_from_closes("SHORT", &closes);
    let table = IndicatorTable::compute(&series, IndicatorSettings::default()).unwrap();

    assert!(table.rows.iter().all(|r| r.macd.is_none() && r.macd_signal.is_none()));
    assert!(table.latest().unwrap().sma.is_some());
    assert!(table.latest().unwrap().rsi.is_some());

    let chart = indicator_chart(&table);
    assert_eq!(chart.panels.len(), 3);
    assert!(chart.panels[2].series[0].points.iter().all(|p| p.y.is_none()));
}

#[test]
fn test_invalid_period_is_error() {
    let series = series_from_closes("BAD", &sample_uptrend());
    let settings = IndicatorSettings {
        rsi: RsiParams { period: 0 },
        ..IndicatorSettings::default()
    };
    assert!(IndicatorTable::compute(&series, settings).is_err());
}
