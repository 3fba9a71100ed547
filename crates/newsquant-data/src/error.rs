//! 데이터 모듈 오류 타입.

use std::path::PathBuf;
use thiserror::Error;

/// 데이터 로딩 관련 오류.
#[derive(Debug, Error)]
pub enum DataError {
    /// 파일 또는 디렉토리를 찾을 수 없음
    #[error("Not found: {}", .0.display())]
    NotFound(PathBuf),

    /// 파일 I/O 오류
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// CSV 파싱 오류
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// 필수 컬럼 누락
    #[error("Missing required column '{column}'. Available columns: {available:?}")]
    MissingColumn {
        column: &'static str,
        available: Vec<String>,
    },

    /// 값 파싱 실패
    #[error("Invalid value {value:?} in column '{column}' at row {row}")]
    InvalidValue {
        row: usize,
        column: &'static str,
        value: String,
    },
}

pub type Result<T> = std::result::Result<T, DataError>;
