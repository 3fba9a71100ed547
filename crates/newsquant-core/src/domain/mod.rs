//! 분석 파이프라인의 도메인 모델.
//!
//! 이 모듈은 다음 타입을 정의합니다:
//! - `NewsRecord` / `ScoredNews` - 뉴스 헤드라인과 감성 점수
//! - `PriceBar` / `PriceSeries` - 일봉 가격과 일간 수익률
//! - `DailySentiment` - 일별 평균 감성
//! - `CorrelationOutcome` - 감성-수익률 상관분석 결과

pub mod correlation;
pub mod news;
pub mod price;
pub mod sentiment;

pub use correlation::*;
pub use news::*;
pub use price::*;
pub use sentiment::*;
