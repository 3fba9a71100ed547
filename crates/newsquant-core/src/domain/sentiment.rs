//! 일별 감성 집계.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// 한 종목의 하루 평균 감성.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailySentiment {
    /// 날짜
    pub date: NaiveDate,
    /// 해당 날짜 헤드라인 감성의 산술평균
    pub mean_sentiment: f64,
    /// 집계에 포함된 헤드라인 수 (항상 1 이상)
    pub headline_count: usize,
}
