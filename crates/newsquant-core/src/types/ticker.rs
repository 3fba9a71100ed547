//! 티커 심볼 정의.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// 주식 티커 심볼 (예: AAPL).
///
/// 뉴스 CSV의 `stock` 컬럼과 정확히 일치하는 문자열로 비교하므로 대소문자를 보존합니다.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ticker(String);

impl Ticker {
    /// 새 티커를 생성합니다. 앞뒤 공백은 제거됩니다.
    pub fn new(symbol: impl AsRef<str>) -> Self {
        Self(symbol.as_ref().trim().to_string())
    }

    /// 파일 경로의 확장자를 제외한 이름에서 티커를 추출합니다.
    ///
    /// `yfinance_data/AAPL.csv` → `AAPL`
    pub fn from_file_stem(path: &Path) -> Option<Self> {
        path.file_stem()
            .and_then(|s| s.to_str())
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(Self::new)
    }

    /// 티커 문자열을 반환합니다.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Ticker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Ticker {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Ticker {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}
