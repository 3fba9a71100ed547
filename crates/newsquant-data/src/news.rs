//! 뉴스 헤드라인 CSV 로더.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;
use newsquant_core::{NewsRecord, Ticker};
use tracing::{debug, warn};

use crate::dates::parse_calendar_date;
use crate::error::{DataError, Result};
use crate::schema::{LoadReport, NewsSchema};

/// 로드된 뉴스 데이터.
#[derive(Debug, Clone, Default)]
pub struct NewsDataset {
    /// 날짜가 유효한 레코드 (파일 순서 유지)
    pub records: Vec<NewsRecord>,
    /// 로드 요약
    pub report: LoadReport,
}

/// 파일에서 뉴스 데이터를 로드합니다.
///
/// # 오류
/// - 파일이 없으면 `DataError::NotFound`
/// - 필수 컬럼이 없으면 `DataError::MissingColumn`
pub fn load_news<P: AsRef<Path>>(path: P) -> Result<NewsDataset> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(DataError::NotFound(path.to_path_buf()));
    }
    let file = File::open(path).map_err(|source| DataError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let dataset = read_news(file)?;
    debug!(
        path = %path.display(),
        loaded = dataset.records.len(),
        "Loaded news file"
    );
    Ok(dataset)
}

/// 임의의 리더에서 뉴스 CSV를 읽습니다.
pub fn read_news<R: Read>(reader: R) -> Result<NewsDataset> {
    let mut rdr = ReaderBuilder::new().flexible(true).from_reader(reader);
    let schema = NewsSchema::from_headers(rdr.headers()?)?;

    let mut dataset = NewsDataset::default();
    for row in rdr.records() {
        let row = row?;
        dataset.report.total_rows += 1;

        let field = |idx: usize| row.get(idx).unwrap_or_default();
        let Some(date) = parse_calendar_date(field(schema.date)) else {
            dataset.report.dropped_invalid_date += 1;
            continue;
        };

        dataset.records.push(NewsRecord {
            headline: field(schema.headline).to_string(),
            publisher: field(schema.publisher).trim().to_string(),
            date,
            stock: Ticker::new(field(schema.stock)),
        });
    }

    if dataset.report.dropped_invalid_date > 0 {
        warn!(
            dropped = dataset.report.dropped_invalid_date,
            total = dataset.report.total_rows,
            "Dropped news rows with unparseable dates"
        );
    }

    Ok(dataset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use proptest::prelude::*;

    const SAMPLE: &str = "\
,headline,url,publisher,date,stock
0,Stocks That Hit 52-Week Highs On Friday,https://x,Benzinga Insights,2020-06-05 10:30:54-04:00,A
1,Agilent Technologies Q2 EPS Beat,https://y,Lisa Levin,2020-05-22 08:45:06-04:00,A
2,Broken row,https://z,someone@example.com,not-a-date,A
3,\"Quoted, headline\",https://w,vick@benzinga.com,2020-05-22 00:00:00,AAPL
";

    #[test]
    fn test_read_news_drops_invalid_dates() {
        let dataset = read_news(SAMPLE.as_bytes()).unwrap();

        assert_eq!(dataset.report.total_rows, 4);
        assert_eq!(dataset.report.dropped_invalid_date, 1);
        assert_eq!(dataset.report.loaded_rows(), 3);
        assert_eq!(dataset.records.len(), 3);

        let first = &dataset.records[0];
        assert_eq!(first.headline, "Stocks That Hit 52-Week Highs On Friday");
        assert_eq!(first.publisher, "Benzinga Insights");
        assert_eq!(first.date, NaiveDate::from_ymd_opt(2020, 6, 5).unwrap());
        assert_eq!(first.stock.as_str(), "A");

        assert_eq!(dataset.records[2].headline, "Quoted, headline");
        assert_eq!(dataset.records[2].stock.as_str(), "AAPL");
    }

    #[test]
    fn test_read_news_missing_column() {
        let csv = "headline,date,stock\nSomething,2020-01-01,A\n";
        let err = read_news(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, DataError::MissingColumn { column: "publisher", .. }));
    }

    #[test]
    fn test_short_row_without_date_is_dropped() {
        let csv = "headline,publisher,date,stock\nOnly headline\n";
        let dataset = read_news(csv.as_bytes()).unwrap();
        assert_eq!(dataset.report.total_rows, 1);
        assert!(dataset.records.is_empty());
    }

    #[test]
    fn test_load_news_missing_file() {
        let err = load_news("does/not/exist.csv").unwrap_err();
        assert!(matches!(err, DataError::NotFound(_)));
    }

    proptest! {
        #[test]
        fn prop_drop_keeps_only_parseable_rows(
            rows in prop::collection::vec(
                prop_oneof![
                    (2000i32..2030, 1u32..=12, 1u32..=28)
                        .prop_map(|(y, m, d)| format!("{:04}-{:02}-{:02} 09:30:00", y, m, d)),
                    "[a-z ]{0,12}",
                ],
                0..40,
            )
        ) {
            let mut csv = String::from("headline,publisher,date,stock\n");
            for (i, date) in rows.iter().enumerate() {
                csv.push_str(&format!("headline {},pub,{},T\n", i, date));
            }

            let dataset = read_news(csv.as_bytes()).unwrap();
            let parseable = rows.iter().filter(|d| parse_calendar_date(d).is_some()).count();

            prop_assert_eq!(dataset.report.total_rows, rows.len());
            prop_assert!(dataset.records.len() <= rows.len());
            prop_assert_eq!(dataset.records.len(), parseable);
            prop_assert_eq!(dataset.report.dropped_invalid_date, rows.len() - parseable);
        }
    }
}
