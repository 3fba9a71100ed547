//! 감성-수익률 파이프라인 통합 테스트
//!
//! 헤드라인 점수 → 일별 집계 → 가격 조인 → 상관분석 흐름 검증

use chrono::NaiveDate;
use newsquant_analytics::{
    correlate, daily_sentiment_by_ticker, score_news, LexiconScorer, SentimentScorer,
};
use newsquant_core::{CorrelationOutcome, NewsRecord, PriceBar, PriceSeries, Ticker, UndefinedReason};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn date(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2020, 3, day).unwrap()
}

fn news(ticker: &str, day: u32, headline: &str) -> NewsRecord {
    NewsRecord {
        headline: headline.to_string(),
        publisher: "Benzinga Newsdesk".to_string(),
        date: date(day),
        stock: Ticker::new(ticker),
    }
}

fn series(ticker: &str, closes: &[(u32, Decimal)]) -> PriceSeries {
    let bars = closes
        .iter()
        .map(|(day, close)| PriceBar {
            date: date(*day),
            open: *close,
            high: *close,
            low: *close,
            close: *close,
            volume: 10_000,
        })
        .collect();
    PriceSeries::new(Ticker::new(ticker), bars)
}

/// 부정 헤드라인 날은 하락, 긍정 헤드라인 날은 상승
#[test]
fn test_positive_news_tracks_positive_returns() {
    let records = vec![
        news("AAPL", 3, "Apple shares surge after earnings beat"),
        news("AAPL", 4, "Apple downgraded, shares plunge"),
        news("AAPL", 5, "Apple stock gains on strong iPhone demand"),
        news("AAPL", 5, "Analysts raise Apple price target"),
        news("AAPL", 6, "Apple misses revenue estimates"),
        news("TSLA", 4, "Tesla deliveries beat expectations"),
    ];
    let scorer = LexiconScorer::new();
    assert!(scorer.polarity(&records[0].headline) > 0.0);

    let scored = score_news(&scorer, records);
    let daily = daily_sentiment_by_ticker(&scored);
    let aapl_daily = &daily[&Ticker::new("AAPL")];
    assert_eq!(aapl_daily.len(), 4);
    assert_eq!(aapl_daily[2].headline_count, 2);

    let aapl = series(
        "AAPL",
        &[
            (2, dec!(100)),
            (3, dec!(104)),
            (4, dec!(98)),
            (5, dec!(101)),
            (6, dec!(97)),
        ],
    );

    let outcome = correlate(&Ticker::new("AAPL"), aapl_daily, &aapl);
    let result = outcome.result().expect("computed");
    assert_eq!(result.sample_size, 4);
    assert!(result.pearson_r > 0.8);
    assert!((0.0..=1.0).contains(&result.p_value));
}

/// 뉴스 날짜와 거래일이 겹치지 않으면 정의되지 않음
#[test]
fn test_no_overlap_is_undefined() {
    let scored = score_news(
        &LexiconScorer::new(),
        vec![news("MSFT", 20, "Microsoft upgrade"), news("MSFT", 21, "Microsoft cut")],
    );
    let daily = daily_sentiment_by_ticker(&scored);
    let msft = series("MSFT", &[(2, dec!(200)), (3, dec!(201))]);

    let outcome = correlate(&Ticker::new("MSFT"), &daily[&Ticker::new("MSFT")], &msft);
    assert!(matches!(
        outcome,
        CorrelationOutcome::Undefined {
            sample_size: 0,
            reason: UndefinedReason::InsufficientSamples,
            ..
        }
    ));
}
