//! 뉴스 감성/주가 분석 CLI.
//!
//! # 사용 예시
//!
//! ```bash
//! # 뉴스 헤드라인 탐색적 분석
//! newsquant eda --news-file data/raw_analyst_ratings.csv
//!
//! # 감성-수익률 상관분석
//! newsquant sentiment --stock-dir yfinance_data
//!
//! # 기술적 지표 차트 데이터 생성
//! newsquant indicators --stock-dir yfinance_data --output-dir outputs
//!
//! # 설정 파일과 로그 형식 지정
//! newsquant --config config/local.toml --log-format json sentiment
//! ```

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;

use newsquant_cli::commands::eda::{print_eda_summary, run_eda, EdaJob};
use newsquant_cli::commands::indicators::{print_indicators_summary, run_indicators, IndicatorsJob};
use newsquant_cli::commands::sentiment::{print_sentiment_summary, run_sentiment, SentimentJob};
use newsquant_core::logging::{init_logging, LogConfig};
use newsquant_core::AppConfig;

#[derive(Parser)]
#[command(name = "newsquant")]
#[command(about = "Financial news sentiment and stock price analysis", long_about = None)]
#[command(version)]
struct Cli {
    /// 설정 파일 (TOML, 없으면 기본값 사용)
    #[arg(short, long, global = true, default_value = "config/default.toml")]
    config: PathBuf,

    /// 로그 레벨 (예: info, debug, newsquant_analytics=trace)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// 로그 형식 (pretty, json, compact)
    #[arg(long, global = true)]
    log_format: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// 뉴스 헤드라인 탐색적 분석 (길이 통계, 퍼블리셔, 날짜별 기사 수, 단어 빈도)
    Eda {
        /// 뉴스 CSV 경로
        #[arg(short, long)]
        news_file: Option<PathBuf>,

        /// 차트 출력 디렉토리
        #[arg(short, long)]
        output_dir: Option<PathBuf>,

        /// 출력할 상위 단어 수
        #[arg(long)]
        top_words: Option<usize>,
    },

    /// 헤드라인 감성과 일간 수익률의 상관분석
    Sentiment {
        /// 뉴스 CSV 경로
        #[arg(short, long)]
        news_file: Option<PathBuf>,

        /// 티커별 주가 CSV 디렉토리
        #[arg(short, long)]
        stock_dir: Option<PathBuf>,

        /// 결과 출력 디렉토리
        #[arg(short, long)]
        output_dir: Option<PathBuf>,
    },

    /// 티커별 SMA/EMA/RSI/MACD 계산
    Indicators {
        /// 티커별 주가 CSV 디렉토리
        #[arg(short, long)]
        stock_dir: Option<PathBuf>,

        /// 차트 출력 디렉토리
        #[arg(short, long)]
        output_dir: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = AppConfig::load(&cli.config)
        .with_context(|| format!("Failed to load configuration {}", cli.config.display()))?;
    if let Some(level) = cli.log_level {
        config.logging.level = level;
    }
    if let Some(format) = cli.log_format {
        config.logging.format = format;
    }
    init_logging(LogConfig::from(&config.logging))
        .map_err(|e| anyhow!("Failed to initialize logging: {e}"))?;

    let paths = config.paths.clone();

    match cli.command {
        Commands::Eda {
            news_file,
            output_dir,
            top_words,
        } => {
            let mut settings = config.eda.clone();
            if let Some(n) = top_words {
                settings.top_words = n;
            }
            let job = EdaJob {
                news_file: news_file.unwrap_or(paths.news_file),
                output_dir: output_dir.unwrap_or(paths.output_dir),
                settings,
            };
            info!(news_file = %job.news_file.display(), "Running EDA");

            let outcome = run_eda(&job)?;
            print_eda_summary(&outcome);
        }

        Commands::Sentiment {
            news_file,
            stock_dir,
            output_dir,
        } => {
            let job = SentimentJob {
                news_file: news_file.unwrap_or(paths.news_file),
                stock_dir: stock_dir.unwrap_or(paths.stock_dir),
                output_dir: output_dir.unwrap_or(paths.output_dir),
            };
            info!(
                news_file = %job.news_file.display(),
                stock_dir = %job.stock_dir.display(),
                "Running sentiment correlation"
            );

            let outcome = run_sentiment(&job)?;
            print_sentiment_summary(&outcome);
        }

        Commands::Indicators {
            stock_dir,
            output_dir,
        } => {
            let job = IndicatorsJob {
                stock_dir: stock_dir.unwrap_or(paths.stock_dir),
                output_dir: output_dir.unwrap_or(paths.output_dir),
                settings: (&config.indicators).into(),
            };
            info!(stock_dir = %job.stock_dir.display(), "Running technical indicators");

            let outcome = run_indicators(&job)?;
            print_indicators_summary(&outcome);
        }
    }

    Ok(())
}
