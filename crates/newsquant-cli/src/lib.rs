//! CLI 도구 모음.
//!
//! 이 crate는 다음 명령어를 제공합니다:
//! - 뉴스 헤드라인 EDA
//! - 감성-수익률 상관분석
//! - 기술적 지표 계산

pub mod commands;

pub use commands::*;
