//! 뉴스 헤드라인 탐색적 분석(EDA).
//!
//! 헤드라인 길이 통계, 퍼블리셔/날짜별 기사 수, 단어 빈도,
//! 퍼블리셔 이메일 도메인 빈도를 계산합니다.
//!
//! 날짜를 해석할 수 없는 행은 로드 단계에서 제외되므로
//! 모든 통계는 유효한 날짜를 가진 행만 대상으로 합니다.

mod counts;
mod stats;

pub use counts::{
    daily_counts, domain_counts, publisher_counts, value_counts, word_frequencies, ValueCount,
};
pub use stats::{describe, Summary};

use chrono::NaiveDate;
use newsquant_core::{CoreError, CoreResult, EdaConfig, NewsRecord};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::info;

/// EDA 결과.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EdaReport {
    /// 유효한 날짜를 가진 기사 수
    pub total_articles: usize,
    /// 헤드라인 길이(문자 수) 통계
    pub headline_length: Option<Summary>,
    /// 서로 다른 퍼블리셔 수
    pub distinct_publishers: usize,
    /// 상위 퍼블리셔
    pub top_publishers: Vec<ValueCount<String>>,
    /// 날짜별 기사 수
    pub daily_counts: BTreeMap<NaiveDate, usize>,
    /// 상위 단어
    pub top_words: Vec<ValueCount<String>>,
    /// 상위 퍼블리셔 도메인 (이메일 퍼블리셔가 없으면 비어 있음)
    pub top_domains: Vec<ValueCount<String>>,
}

impl EdaReport {
    /// 기사 수가 가장 많은 날짜.
    pub fn busiest_day(&self) -> Option<(NaiveDate, usize)> {
        self.daily_counts
            .iter()
            .max_by(|a, b| a.1.cmp(b.1).then(b.0.cmp(a.0)))
            .map(|(date, count)| (*date, *count))
    }
}

/// 뉴스 레코드에 대한 EDA를 수행합니다.
///
/// 입력은 날짜 해석에 성공한 레코드뿐입니다. 날짜 오류로 제외된 행은
/// 길이 통계와 퍼블리셔 빈도를 포함한 어떤 집계에도 들어가지 않습니다.
///
/// 레코드가 하나도 없으면 (모든 날짜가 유효하지 않은 경우 포함)
/// 시계열을 만들 수 없으므로 `InvalidInput` 에러입니다.
pub fn analyze_news(records: &[NewsRecord], config: &EdaConfig) -> CoreResult<EdaReport> {
    if records.is_empty() {
        return Err(CoreError::InvalidInput(
            "유효한 날짜를 가진 뉴스가 없습니다".to_string(),
        ));
    }

    let lengths: Vec<f64> = records
        .iter()
        .map(|r| r.headline_length() as f64)
        .collect();

    let publishers = publisher_counts(records);
    let distinct_publishers = publishers.len();

    let mut top_words = word_frequencies(records);
    top_words.truncate(config.top_words);

    let mut top_domains = domain_counts(records);
    top_domains.truncate(config.top_domains);

    let report = EdaReport {
        total_articles: records.len(),
        headline_length: describe(&lengths),
        distinct_publishers,
        top_publishers: publishers.into_iter().take(config.top_publishers).collect(),
        daily_counts: daily_counts(records),
        top_words,
        top_domains,
    };

    info!(
        articles = report.total_articles,
        publishers = report.distinct_publishers,
        days = report.daily_counts.len(),
        domains = report.top_domains.len(),
        "EDA 완료"
    );

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use newsquant_core::Ticker;

    fn record(headline: &str, publisher: &str, day: u32) -> NewsRecord {
        NewsRecord {
            headline: headline.to_string(),
            publisher: publisher.to_string(),
            date: NaiveDate::from_ymd_opt(2020, 6, day).unwrap(),
            stock: Ticker::new("AAPL"),
        }
    }

    #[test]
    fn test_analyze_news() {
        let records = vec![
            record("Apple beats", "Lisa Levin", 1),
            record("Apple misses", "a@benzinga.com", 2),
            record("Apple gains", "Lisa Levin", 2),
        ];
        let config = EdaConfig {
            top_words: 2,
            top_publishers: 1,
            top_domains: 10,
        };

        let report = analyze_news(&records, &config).unwrap();
        assert_eq!(report.total_articles, 3);
        assert_eq!(report.distinct_publishers, 2);
        assert_eq!(report.top_publishers.len(), 1);
        assert_eq!(report.top_publishers[0].value, "Lisa Levin");
        assert_eq!(report.top_words.len(), 2);
        assert_eq!(report.top_words[0].value, "apple");
        assert_eq!(report.top_domains[0].value, "benzinga.com");

        let lengths = report.headline_length.unwrap();
        assert_eq!(lengths.min, 11.0);
        assert_eq!(lengths.max, 12.0);

        let (day, count) = report.busiest_day().unwrap();
        assert_eq!(day, NaiveDate::from_ymd_opt(2020, 6, 2).unwrap());
        assert_eq!(count, 2);
    }

    #[test]
    fn test_no_records_is_input_error() {
        let err = analyze_news(&[], &EdaConfig::default()).unwrap_err();
        assert!(matches!(err, CoreError::InvalidInput(_)));
    }
}
