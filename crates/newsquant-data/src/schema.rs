//! 입력 CSV 스키마 검증.
//!
//! 헤더 이름은 앞뒤 공백과 BOM을 제거하고 대소문자 구분 없이 비교합니다.
//! 스키마에 없는 컬럼(인덱스 컬럼, `Adj Close` 등)은 무시합니다.

use csv::StringRecord;

use crate::error::{DataError, Result};

/// 필수 컬럼의 위치를 헤더에서 찾습니다.
fn require_column(headers: &StringRecord, column: &'static str) -> Result<usize> {
    headers
        .iter()
        .position(|h| normalize_header(h) == column.to_lowercase())
        .ok_or_else(|| DataError::MissingColumn {
            column,
            available: headers.iter().map(str::to_string).collect(),
        })
}

fn normalize_header(raw: &str) -> String {
    raw.trim_start_matches('\u{feff}').trim().to_lowercase()
}

/// 뉴스 CSV 스키마: `headline`, `publisher`, `date`, `stock`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewsSchema {
    pub headline: usize,
    pub publisher: usize,
    pub date: usize,
    pub stock: usize,
}

impl NewsSchema {
    /// 헤더에서 스키마를 확정합니다.
    pub fn from_headers(headers: &StringRecord) -> Result<Self> {
        Ok(Self {
            headline: require_column(headers, "headline")?,
            publisher: require_column(headers, "publisher")?,
            date: require_column(headers, "date")?,
            stock: require_column(headers, "stock")?,
        })
    }
}

/// 주가 CSV 스키마: `Date`, `Open`, `High`, `Low`, `Close`, `Volume`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceSchema {
    pub date: usize,
    pub open: usize,
    pub high: usize,
    pub low: usize,
    pub close: usize,
    pub volume: usize,
}

impl PriceSchema {
    /// 헤더에서 스키마를 확정합니다.
    pub fn from_headers(headers: &StringRecord) -> Result<Self> {
        Ok(Self {
            date: require_column(headers, "Date")?,
            open: require_column(headers, "Open")?,
            high: require_column(headers, "High")?,
            low: require_column(headers, "Low")?,
            close: require_column(headers, "Close")?,
            volume: require_column(headers, "Volume")?,
        })
    }
}

/// 로드 결과 요약.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// 헤더를 제외한 전체 행 수
    pub total_rows: usize,
    /// 날짜를 해석할 수 없어 제외된 행 수
    pub dropped_invalid_date: usize,
}

impl LoadReport {
    /// 로드된 행 수.
    pub fn loaded_rows(&self) -> usize {
        self.total_rows - self.dropped_invalid_date
    }
}
