//! 입력 데이터 로딩 및 스키마 검증.
//!
//! 이 crate는 다음을 제공합니다:
//! - 뉴스 헤드라인 CSV 로더 (필수 컬럼 검증, 날짜 정규화)
//! - 티커별 주가 CSV 로더
//! - 주가 CSV 디렉토리 탐색
//!
//! 헤더에서 필수 컬럼 위치를 먼저 확정하고, 누락 시 `DataError::MissingColumn`을 반환합니다.
//! 날짜를 해석할 수 없는 행은 기본값으로 채우지 않고 제외하며 로드 리포트에 집계합니다.

pub mod dates;
pub mod error;
pub mod news;
pub mod prices;
pub mod schema;

pub use dates::parse_calendar_date;
pub use error::{DataError, Result};
pub use news::{load_news, read_news, NewsDataset};
pub use prices::{list_price_files, load_price_series, read_price_series, PriceDataset, PriceFile};
pub use schema::{LoadReport, NewsSchema, PriceSchema};
