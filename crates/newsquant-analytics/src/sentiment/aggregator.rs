//! 일별 감성 집계.

use chrono::NaiveDate;
use newsquant_core::{DailySentiment, ScoredNews, Ticker};
use std::collections::BTreeMap;

/// (날짜, 감성) 쌍을 날짜별 산술평균으로 집계합니다.
///
/// 결과는 날짜 오름차순이며, 헤드라인이 없는 날짜는 포함되지 않습니다.
pub fn aggregate_daily<I>(pairs: I) -> Vec<DailySentiment>
where
    I: IntoIterator<Item = (NaiveDate, f64)>,
{
    let mut groups: BTreeMap<NaiveDate, (f64, usize)> = BTreeMap::new();
    for (date, sentiment) in pairs {
        let entry = groups.entry(date).or_insert((0.0, 0));
        entry.0 += sentiment;
        entry.1 += 1;
    }

    groups
        .into_iter()
        .map(|(date, (sum, count))| DailySentiment {
            date,
            mean_sentiment: sum / count as f64,
            headline_count: count,
        })
        .collect()
}

/// 감성 점수가 부여된 뉴스를 티커별 일별 감성으로 묶습니다.
pub fn daily_sentiment_by_ticker(scored: &[ScoredNews]) -> BTreeMap<Ticker, Vec<DailySentiment>> {
    let mut by_ticker: BTreeMap<Ticker, Vec<(NaiveDate, f64)>> = BTreeMap::new();
    for item in scored {
        by_ticker
            .entry(item.record.stock.clone())
            .or_default()
            .push((item.record.date, item.sentiment));
    }

    by_ticker
        .into_iter()
        .map(|(ticker, pairs)| (ticker, aggregate_daily(pairs)))
        .collect()
}
