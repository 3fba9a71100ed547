//! CLI 명령어 구현 모듈.

pub mod eda;
pub mod indicators;
pub mod output;
pub mod sentiment;

use indicatif::{ProgressBar, ProgressStyle};
use newsquant_core::Ticker;
use serde::Serialize;

/// 처리에 실패해 건너뛴 티커.
#[derive(Debug, Clone, Serialize)]
pub struct TickerFailure {
    pub ticker: Ticker,
    pub error: String,
}

/// 티커 루프용 진행 표시줄.
pub(crate) fn ticker_progress(len: usize) -> anyhow::Result<ProgressBar> {
    let pb = ProgressBar::new(len as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")?
            .progress_chars("#>-"),
    );
    Ok(pb)
}
