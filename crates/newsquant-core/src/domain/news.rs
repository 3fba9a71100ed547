//! 뉴스 헤드라인 레코드.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::types::Ticker;

/// 뉴스 CSV의 한 행.
///
/// 로드 시점에 날짜가 일 단위로 정규화되며 이후 변경되지 않습니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsRecord {
    /// 헤드라인 본문 (비어 있을 수 있음)
    pub headline: String,
    /// 퍼블리셔 (이름 또는 이메일)
    pub publisher: String,
    /// 게시일
    pub date: NaiveDate,
    /// 관련 종목 티커
    pub stock: Ticker,
}

impl NewsRecord {
    /// 헤드라인 길이(문자 수)를 반환합니다.
    pub fn headline_length(&self) -> usize {
        self.headline.chars().count()
    }
}

/// 감성 점수가 부여된 뉴스.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredNews {
    /// 원본 레코드
    pub record: NewsRecord,
    /// 감성 극성 (-1.0 ~ 1.0)
    pub sentiment: f64,
}
