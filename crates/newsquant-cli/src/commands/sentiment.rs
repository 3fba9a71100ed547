//! 감성-수익률 상관분석 명령어.
//!
//! 모든 헤드라인에 감성 점수를 매긴 뒤, 주가 디렉토리의 티커마다
//! 일평균 감성과 일간 수익률의 Pearson 상관계수를 계산합니다.
//!
//! # 사용 예시
//!
//! ```bash
//! newsquant sentiment --news-file data/raw_analyst_ratings.csv --stock-dir yfinance_data
//! ```

use anyhow::{Context, Result};
use newsquant_analytics::{correlate, daily_sentiment_by_ticker, score_news, LexiconScorer};
use newsquant_core::{ticker_span, CorrelationOutcome};
use newsquant_data::{list_price_files, load_news, load_price_series};
use serde::Serialize;
use std::path::PathBuf;
use tracing::{error, info};

use super::output::write_json;
use super::{ticker_progress, TickerFailure};

/// 결과 파일 이름
pub const CORRELATION_FILE: &str = "sentiment_correlation.json";

/// 상관분석 실행 설정
#[derive(Debug, Clone)]
pub struct SentimentJob {
    /// 뉴스 CSV 경로
    pub news_file: PathBuf,
    /// 티커별 주가 CSV 디렉토리
    pub stock_dir: PathBuf,
    /// 결과 출력 디렉토리
    pub output_dir: PathBuf,
}

/// 상관분석 실행 결과
#[derive(Debug, Serialize)]
pub struct SentimentOutcome {
    /// 감성 점수를 매긴 헤드라인 수
    pub scored_headlines: usize,
    /// 티커별 결과 (파일명 순)
    pub outcomes: Vec<CorrelationOutcome>,
    /// 로드에 실패한 티커
    pub failures: Vec<TickerFailure>,
    /// 결과 JSON 경로
    #[serde(skip)]
    pub output_path: PathBuf,
}

/// 상관분석을 실행합니다.
///
/// 뉴스 파일이나 주가 디렉토리가 없으면 즉시 중단하고,
/// 개별 주가 파일 오류는 로그만 남기고 다음 티커로 넘어갑니다.
pub fn run_sentiment(job: &SentimentJob) -> Result<SentimentOutcome> {
    let dataset = load_news(&job.news_file)
        .with_context(|| format!("Failed to load news file {}", job.news_file.display()))?;
    let files = list_price_files(&job.stock_dir)
        .with_context(|| format!("Failed to read stock directory {}", job.stock_dir.display()))?;

    let scorer = LexiconScorer::new();
    let scored = score_news(&scorer, dataset.records);
    let daily_by_ticker = daily_sentiment_by_ticker(&scored);
    info!(
        headlines = scored.len(),
        tickers_with_news = daily_by_ticker.len(),
        price_files = files.len(),
        "Headlines scored"
    );

    let pb = ticker_progress(files.len())?;
    let mut outcomes = Vec::with_capacity(files.len());
    let mut failures = Vec::new();

    for file in &files {
        let span = ticker_span!("correlate", file.ticker, file.path.display());
        let _guard = span.enter();
        pb.set_message(file.ticker.to_string());

        match load_price_series(&file.path, file.ticker.clone()) {
            Ok(prices) => {
                let daily = daily_by_ticker
                    .get(&file.ticker)
                    .map(Vec::as_slice)
                    .unwrap_or(&[]);
                let outcome = correlate(&file.ticker, daily, &prices.series);
                info!(sample_size = outcome.sample_size(), "Correlation computed");
                outcomes.push(outcome);
            }
            Err(e) => {
                error!(error = %e, "Skipping ticker");
                failures.push(TickerFailure {
                    ticker: file.ticker.clone(),
                    error: e.to_string(),
                });
            }
        }
        pb.inc(1);
    }
    pb.finish_and_clear();

    let mut outcome = SentimentOutcome {
        scored_headlines: scored.len(),
        outcomes,
        failures,
        output_path: PathBuf::new(),
    };
    outcome.output_path = write_json(&job.output_dir, CORRELATION_FILE, &outcome)?;
    Ok(outcome)
}

/// 상관분석 결과 출력.
pub fn print_sentiment_summary(outcome: &SentimentOutcome) {
    println!("\n📈 감성-수익률 상관분석 ({}개 헤드라인)", outcome.scored_headlines);
    println!(
        "{:<8} {:>10} {:>12} {:>8}",
        "Ticker", "Pearson r", "p-value", "N"
    );

    for result in &outcome.outcomes {
        match result {
            CorrelationOutcome::Computed(r) => println!(
                "{:<8} {:>10.4} {:>12.4e} {:>8}",
                r.ticker.as_str(), r.pearson_r, r.p_value, r.sample_size
            ),
            CorrelationOutcome::Undefined {
                ticker,
                sample_size,
                reason,
            } => println!(
                "{:<8} {:>10} {:>12} {:>8}  ({})",
                ticker.as_str(), "-", "-", sample_size, reason
            ),
        }
    }

    if !outcome.failures.is_empty() {
        println!("\n⚠️  건너뛴 티커:");
        for failure in &outcome.failures {
            println!("  {}: {}", failure.ticker, failure.error);
        }
    }
    println!("\n저장 위치: {}", outcome.output_path.display());
}
