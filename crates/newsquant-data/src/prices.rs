//! 티커별 주가 CSV 로더.

use std::fs::{self, File};
use std::io::Read;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use csv::{ReaderBuilder, StringRecord};
use newsquant_core::{PriceBar, PriceSeries, Ticker};
use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::dates::parse_calendar_date;
use crate::error::{DataError, Result};
use crate::schema::{LoadReport, PriceSchema};

/// 주가 CSV 파일 위치.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceFile {
    /// 파일명에서 추출한 티커
    pub ticker: Ticker,
    /// 파일 경로
    pub path: PathBuf,
}

/// 로드된 주가 데이터.
#[derive(Debug, Clone)]
pub struct PriceDataset {
    /// 날짜순 정렬된 시계열
    pub series: PriceSeries,
    /// 로드 요약
    pub report: LoadReport,
}

/// 디렉토리에서 `.csv` 파일을 찾아 티커 목록을 만듭니다.
///
/// 결과는 파일명 순으로 정렬됩니다.
pub fn list_price_files<P: AsRef<Path>>(dir: P) -> Result<Vec<PriceFile>> {
    let dir = dir.as_ref();
    if !dir.is_dir() {
        return Err(DataError::NotFound(dir.to_path_buf()));
    }
    let io_err = |source| DataError::Io {
        path: dir.to_path_buf(),
        source,
    };

    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(io_err)? {
        let path = entry.map_err(io_err)?.path();
        let is_csv = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("csv"));
        if !is_csv || !path.is_file() {
            continue;
        }
        if let Some(ticker) = Ticker::from_file_stem(&path) {
            files.push(PriceFile { ticker, path });
        }
    }
    files.sort_by(|a, b| a.path.cmp(&b.path));
    Ok(files)
}

/// 파일에서 주가 시계열을 로드합니다.
pub fn load_price_series<P: AsRef<Path>>(path: P, ticker: Ticker) -> Result<PriceDataset> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(DataError::NotFound(path.to_path_buf()));
    }
    let file = File::open(path).map_err(|source| DataError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let dataset = read_price_series(file, ticker)?;
    debug!(
        path = %path.display(),
        bars = dataset.series.len(),
        "Loaded price file"
    );
    Ok(dataset)
}

/// 임의의 리더에서 주가 CSV를 읽습니다.
///
/// 날짜를 해석할 수 없는 행은 제외하고, 가격/거래량을 해석할 수 없으면
/// 해당 파일 전체를 `DataError::InvalidValue`로 거부합니다.
pub fn read_price_series<R: Read>(reader: R, ticker: Ticker) -> Result<PriceDataset> {
    let mut rdr = ReaderBuilder::new().flexible(true).from_reader(reader);
    let schema = PriceSchema::from_headers(rdr.headers()?)?;

    let mut report = LoadReport::default();
    let mut bars = Vec::new();

    for (idx, row) in rdr.records().enumerate() {
        let row = row?;
        report.total_rows += 1;
        // 헤더가 1행이므로 데이터는 2행부터
        let row_no = idx + 2;

        let Some(date) = parse_calendar_date(row.get(schema.date).unwrap_or_default()) else {
            report.dropped_invalid_date += 1;
            continue;
        };

        bars.push(PriceBar {
            date,
            open: parse_price(&row, schema.open, "Open", row_no)?,
            high: parse_price(&row, schema.high, "High", row_no)?,
            low: parse_price(&row, schema.low, "Low", row_no)?,
            close: parse_price(&row, schema.close, "Close", row_no)?,
            volume: parse_volume(&row, schema.volume, row_no)?,
        });
    }

    if report.dropped_invalid_date > 0 {
        warn!(
            %ticker,
            dropped = report.dropped_invalid_date,
            "Dropped price rows with unparseable dates"
        );
    }

    Ok(PriceDataset {
        series: PriceSeries::new(ticker, bars),
        report,
    })
}

fn parse_price(row: &StringRecord, idx: usize, column: &'static str, row_no: usize) -> Result<Decimal> {
    let raw = row.get(idx).unwrap_or_default().trim();
    Decimal::from_str(raw)
        .or_else(|_| Decimal::from_scientific(raw))
        .map_err(|_| DataError::InvalidValue {
            row: row_no,
            column,
            value: raw.to_string(),
        })
}

fn parse_volume(row: &StringRecord, idx: usize, row_no: usize) -> Result<u64> {
    let raw = row.get(idx).unwrap_or_default().trim();
    if let Ok(volume) = raw.parse::<u64>() {
        return Ok(volume);
    }
    // yfinance 내보내기는 거래량을 "1234.0"처럼 기록하기도 함
    match raw.parse::<f64>() {
        Ok(v) if v.is_finite() && v >= 0.0 => Ok(v.round() as u64),
        _ => Err(DataError::InvalidValue {
            row: row_no,
            column: "Volume",
            value: raw.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;
    use std::io::Write;

    const SAMPLE: &str = "\
Date,Open,High,Low,Close,Adj Close,Volume,Dividends,Stock Splits
1980-12-15,0.122210,0.122210,0.121652,0.121652,0.093781,175884800,0.0,0.0
1980-12-12,0.128348,0.128906,0.128348,0.128348,0.098943,469033600.0,0.0,0.0
garbage,1,1,1,1,1,1,0,0
1980-12-16,0.113281,0.113281,0.112723,0.112723,0.086898,105728000,0.0,0.0
";

    #[test]
    fn test_read_price_series_sorts_and_drops() {
        let dataset = read_price_series(SAMPLE.as_bytes(), Ticker::new("AAPL")).unwrap();

        assert_eq!(dataset.report.total_rows, 4);
        assert_eq!(dataset.report.dropped_invalid_date, 1);

        let bars = dataset.series.bars();
        assert_eq!(bars.len(), 3);
        assert_eq!(bars[0].date, NaiveDate::from_ymd_opt(1980, 12, 12).unwrap());
        assert_eq!(bars[0].volume, 469_033_600);
        assert_eq!(bars[1].close, dec!(0.121652));
        assert_eq!(bars[2].date, NaiveDate::from_ymd_opt(1980, 12, 16).unwrap());
    }

    #[test]
    fn test_invalid_close_rejects_file() {
        let csv = "Date,Open,High,Low,Close,Volume\n2024-01-02,1,1,1,abc,10\n";
        let err = read_price_series(csv.as_bytes(), Ticker::new("BAD")).unwrap_err();
        match err {
            DataError::InvalidValue { row, column, value } => {
                assert_eq!(row, 2);
                assert_eq!(column, "Close");
                assert_eq!(value, "abc");
            }
            other => panic!("expected InvalidValue, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_close_column() {
        let csv = "Date,Open,High,Low,Volume\n2024-01-02,1,1,1,10\n";
        let err = read_price_series(csv.as_bytes(), Ticker::new("BAD")).unwrap_err();
        assert!(matches!(err, DataError::MissingColumn { column: "Close", .. }));
    }

    #[test]
    fn test_list_price_files() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["TSLA.csv", "AAPL.CSV", "notes.txt"] {
            let mut f = File::create(dir.path().join(name)).unwrap();
            writeln!(f, "Date").unwrap();
        }
        fs::create_dir(dir.path().join("nested.csv")).unwrap();

        let files = list_price_files(dir.path()).unwrap();
        let tickers: Vec<&str> = files.iter().map(|f| f.ticker.as_str()).collect();
        assert_eq!(tickers, vec!["AAPL", "TSLA"]);
    }

    #[test]
    fn test_list_price_files_missing_dir() {
        let err = list_price_files("no/such/dir").unwrap_err();
        assert!(matches!(err, DataError::NotFound(_)));
    }
}
