//! # Newsquant Core
//!
//! 뉴스 헤드라인/주가 분석 파이프라인의 핵심 도메인 모델 및 타입을 제공합니다.
//!
//! 이 크레이트는 워크스페이스 전반에서 사용되는 기본 타입을 제공합니다:
//! - 뉴스 레코드 및 감성 점수가 부여된 뉴스
//! - 일봉 가격 데이터와 일간 수익률
//! - 일별 감성 집계 및 상관분석 결과
//! - 티커 및 가격 타입 정의
//! - 설정 관리
//! - 로깅 인프라

pub mod config;
pub mod domain;
pub mod error;
pub mod logging;
pub mod types;

pub use config::*;
pub use domain::*;
pub use error::*;
pub use logging::*;
pub use types::*;
