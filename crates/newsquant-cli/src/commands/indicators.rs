//! 기술적 지표 명령어.
//!
//! 주가 디렉토리의 티커마다 SMA/EMA/RSI/MACD를 계산해
//! `<TICKER>_indicators.json` 차트 문서로 저장합니다.
//!
//! # 사용 예시
//!
//! ```bash
//! newsquant indicators --stock-dir yfinance_data --output-dir outputs
//! ```

use anyhow::{Context, Result};
use newsquant_analytics::{
    indicator_chart, indicator_chart_file_name, IndicatorRow, IndicatorSettings, IndicatorTable,
};
use newsquant_core::{ticker_span, Ticker};
use newsquant_data::{list_price_files, load_price_series, PriceFile};
use std::path::{Path, PathBuf};
use tracing::{error, info};

use super::output::write_json;
use super::{ticker_progress, TickerFailure};

/// 지표 계산 실행 설정
#[derive(Debug, Clone)]
pub struct IndicatorsJob {
    /// 티커별 주가 CSV 디렉토리
    pub stock_dir: PathBuf,
    /// 차트 출력 디렉토리
    pub output_dir: PathBuf,
    /// 지표 기간
    pub settings: IndicatorSettings,
}

/// 티커 하나의 처리 결과
#[derive(Debug, Clone)]
pub struct TickerIndicators {
    pub ticker: Ticker,
    pub bars: usize,
    pub latest: Option<IndicatorRow>,
    pub chart_path: PathBuf,
}

/// 지표 계산 실행 결과
#[derive(Debug, Default)]
pub struct IndicatorsOutcome {
    pub processed: Vec<TickerIndicators>,
    pub failures: Vec<TickerFailure>,
}

/// 모든 티커의 지표를 계산합니다.
///
/// 주가 디렉토리가 없으면 중단하고, 개별 파일 오류는 건너뜁니다.
pub fn run_indicators(job: &IndicatorsJob) -> Result<IndicatorsOutcome> {
    let files = list_price_files(&job.stock_dir)
        .with_context(|| format!("Failed to read stock directory {}", job.stock_dir.display()))?;
    info!(price_files = files.len(), "Computing technical indicators");

    let pb = ticker_progress(files.len())?;
    let mut outcome = IndicatorsOutcome::default();

    for file in &files {
        let span = ticker_span!("indicators", file.ticker, file.path.display());
        let _guard = span.enter();
        pb.set_message(file.ticker.to_string());

        match process_ticker(file, job.settings, &job.output_dir) {
            Ok(result) => {
                info!(bars = result.bars, chart = %result.chart_path.display(), "Indicators saved");
                outcome.processed.push(result);
            }
            Err(e) => {
                let message = format!("{e:#}");
                error!(error = %message, "Skipping ticker");
                outcome.failures.push(TickerFailure {
                    ticker: file.ticker.clone(),
                    error: message,
                });
            }
        }
        pb.inc(1);
    }
    pb.finish_and_clear();

    Ok(outcome)
}

fn process_ticker(
    file: &PriceFile,
    settings: IndicatorSettings,
    output_dir: &Path,
) -> Result<TickerIndicators> {
    let dataset = load_price_series(&file.path, file.ticker.clone())?;
    let table = IndicatorTable::compute(&dataset.series, settings)?;
    let chart_path = write_json(
        output_dir,
        &indicator_chart_file_name(&file.ticker),
        &indicator_chart(&table),
    )?;

    Ok(TickerIndicators {
        ticker: file.ticker.clone(),
        bars: table.len(),
        latest: table.latest().cloned(),
        chart_path,
    })
}

/// 지표 계산 결과 출력.
pub fn print_indicators_summary(outcome: &IndicatorsOutcome) {
    fn cell(value: Option<rust_decimal::Decimal>) -> String {
        value
            .map(|v| v.round_dp(2).to_string())
            .unwrap_or_else(|| "-".to_string())
    }

    println!("\n📊 기술적 지표 (최근 일봉)");
    println!(
        "{:<8} {:>6} {:>12} {:>10} {:>10} {:>10} {:>8} {:>10}",
        "Ticker", "Bars", "Date", "Close", "SMA", "EMA", "RSI", "MACD"
    );
    for item in &outcome.processed {
        match &item.latest {
            Some(row) => println!(
                "{:<8} {:>6} {:>12} {:>10} {:>10} {:>10} {:>8} {:>10}",
                item.ticker.as_str(),
                item.bars,
                row.date.to_string(),
                cell(Some(row.close)),
                cell(row.sma),
                cell(row.ema),
                cell(row.rsi),
                cell(row.macd),
            ),
            None => println!("{:<8} {:>6}  (데이터 없음)", item.ticker.as_str(), item.bars),
        }
    }

    if !outcome.failures.is_empty() {
        println!("\n⚠️  건너뛴 티커:");
        for failure in &outcome.failures {
            println!("  {}: {}", failure.ticker, failure.error);
        }
    }
}
