//! 뉴스 헤드라인 EDA 명령어.
//!
//! # 사용 예시
//!
//! ```bash
//! # 기본 설정 (config/default.toml)으로 실행
//! newsquant eda
//!
//! # 입력/출력 경로 지정
//! newsquant eda --news-file data/raw_analyst_ratings.csv --output-dir outputs
//! ```

use anyhow::{Context, Result};
use newsquant_analytics::{
    analyze_news, common_words_chart, publication_frequency_chart, publisher_domains_chart,
    EdaReport,
};
use newsquant_core::EdaConfig;
use newsquant_data::load_news;
use std::path::PathBuf;
use tracing::info;

use super::output::write_json;

/// EDA 실행 설정
#[derive(Debug, Clone)]
pub struct EdaJob {
    /// 뉴스 CSV 경로
    pub news_file: PathBuf,
    /// 차트 출력 디렉토리
    pub output_dir: PathBuf,
    /// 상위 N 설정
    pub settings: EdaConfig,
}

/// EDA 실행 결과
#[derive(Debug)]
pub struct EdaOutcome {
    pub report: EdaReport,
    /// 로드 시 날짜 오류로 제외된 행 수
    pub dropped_rows: usize,
    /// 저장된 차트 파일
    pub charts: Vec<PathBuf>,
}

/// 뉴스 파일을 분석하고 차트 문서를 저장합니다.
///
/// 뉴스 파일이 없거나 유효한 날짜가 하나도 없으면 에러입니다.
pub fn run_eda(job: &EdaJob) -> Result<EdaOutcome> {
    let dataset = load_news(&job.news_file)
        .with_context(|| format!("Failed to load news file {}", job.news_file.display()))?;

    let report = analyze_news(&dataset.records, &job.settings)
        .with_context(|| format!("Cannot analyze {}", job.news_file.display()))?;

    let mut charts = vec![
        write_json(
            &job.output_dir,
            "publication_frequency.json",
            &publication_frequency_chart(&report.daily_counts),
        )?,
        write_json(
            &job.output_dir,
            "common_words.json",
            &common_words_chart(&report.top_words),
        )?,
    ];

    match publisher_domains_chart(&report.top_domains) {
        Some(chart) => charts.push(write_json(
            &job.output_dir,
            "publisher_domains.json",
            &chart,
        )?),
        None => info!("No e-mail publishers found, skipping domain chart"),
    }

    info!(charts = charts.len(), output = %job.output_dir.display(), "EDA charts saved");

    Ok(EdaOutcome {
        report,
        dropped_rows: dataset.report.dropped_invalid_date,
        charts,
    })
}

/// EDA 결과 요약 출력.
pub fn print_eda_summary(outcome: &EdaOutcome) {
    let report = &outcome.report;

    println!("\n📰 뉴스 헤드라인 EDA");
    println!("기사 수: {}", report.total_articles);
    if outcome.dropped_rows > 0 {
        println!("날짜 오류로 제외된 행: {}", outcome.dropped_rows);
    }

    if let Some(lengths) = &report.headline_length {
        println!("\n헤드라인 길이 (문자 수)");
        println!("  count  {:>10}", lengths.count);
        println!("  mean   {:>10.2}", lengths.mean);
        match lengths.std {
            Some(std) => println!("  std    {:>10.2}", std),
            None => println!("  std    {:>10}", "-"),
        }
        println!("  min    {:>10.2}", lengths.min);
        println!("  25%    {:>10.2}", lengths.q25);
        println!("  50%    {:>10.2}", lengths.median);
        println!("  75%    {:>10.2}", lengths.q75);
        println!("  max    {:>10.2}", lengths.max);
    }

    println!("\n상위 퍼블리셔 (전체 {}곳)", report.distinct_publishers);
    for entry in &report.top_publishers {
        println!("  {:<40} {:>8}", entry.value, entry.count);
    }

    if let Some((day, count)) = report.busiest_day() {
        println!("\n기사가 가장 많은 날: {} ({}건)", day, count);
    }

    println!("\n자주 등장한 단어");
    for entry in &report.top_words {
        println!("  {:<20} {:>8}", entry.value, entry.count);
    }

    if report.top_domains.is_empty() {
        println!("\n이메일 형식의 퍼블리셔가 없습니다.");
    } else {
        println!("\n퍼블리셔 도메인");
        for entry in &report.top_domains {
            println!("  {:<30} {:>8}", entry.value, entry.count);
        }
    }

    println!("\n저장된 차트:");
    for path in &outcome.charts {
        println!("  {}", path.display());
    }
}
