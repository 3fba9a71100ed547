//! 설정 관리.
//!
//! 입력 경로, 출력 디렉토리, 지표 기간 등 파이프라인 설정을 정의합니다.
//! 기본값 → TOML 파일 → `NEWSQUANT__` 접두사 환경 변수 순으로 덮어씁니다.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{CoreError, CoreResult};

/// 애플리케이션 설정.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AppConfig {
    /// 입출력 경로 설정
    #[serde(default)]
    pub paths: PathsConfig,
    /// 로깅 설정
    #[serde(default)]
    pub logging: LoggingConfig,
    /// 기술적 지표 설정
    #[serde(default)]
    pub indicators: IndicatorConfig,
    /// 탐색적 분석 설정
    #[serde(default)]
    pub eda: EdaConfig,
}

/// 입출력 경로 설정.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct PathsConfig {
    /// 뉴스 헤드라인 CSV 경로
    pub news_file: PathBuf,
    /// 티커별 주가 CSV 디렉토리
    pub stock_dir: PathBuf,
    /// 차트 데이터 출력 디렉토리
    pub output_dir: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            news_file: PathBuf::from("data/raw_analyst_ratings.csv"),
            stock_dir: PathBuf::from("yfinance_data"),
            output_dir: PathBuf::from("outputs"),
        }
    }
}

/// 로깅 설정.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// 로그 레벨
    pub level: String,
    /// 로그 형식 (pretty, json, compact)
    pub format: String,
    /// 모듈 경로(target) 출력 여부
    pub with_target: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
            with_target: false,
        }
    }
}

/// 기술적 지표 기간 설정.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct IndicatorConfig {
    /// SMA 기간
    pub sma_period: usize,
    /// EMA 기간
    pub ema_period: usize,
    /// RSI 기간
    pub rsi_period: usize,
    /// MACD 단기 EMA 기간
    pub macd_fast: usize,
    /// MACD 장기 EMA 기간
    pub macd_slow: usize,
    /// MACD 시그널 기간
    pub macd_signal: usize,
}

impl Default for IndicatorConfig {
    fn default() -> Self {
        Self {
            sma_period: 20,
            ema_period: 20,
            rsi_period: 14,
            macd_fast: 12,
            macd_slow: 26,
            macd_signal: 9,
        }
    }
}

/// 탐색적 분석(EDA) 설정.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct EdaConfig {
    /// 출력할 상위 단어 수
    pub top_words: usize,
    /// 출력할 상위 퍼블리셔 수
    pub top_publishers: usize,
    /// 차트에 표시할 상위 도메인 수
    pub top_domains: usize,
}

impl Default for EdaConfig {
    fn default() -> Self {
        Self {
            top_words: 20,
            top_publishers: 10,
            top_domains: 10,
        }
    }
}

impl AppConfig {
    /// 파일과 환경 변수에서 설정을 로드합니다.
    ///
    /// 파일이 없으면 기본값과 환경 변수만 사용합니다.
    pub fn load<P: AsRef<Path>>(path: P) -> CoreResult<Self> {
        let builder = config::Config::builder()
            .add_source(config::File::from(path.as_ref()).required(false))
            .add_source(
                config::Environment::with_prefix("NEWSQUANT")
                    .separator("__")
                    .try_parsing(true),
            );

        let config: AppConfig = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// 설정값의 유효성을 검사합니다.
    pub fn validate(&self) -> CoreResult<()> {
        let ind = &self.indicators;
        let periods = [
            ("sma_period", ind.sma_period),
            ("ema_period", ind.ema_period),
            ("rsi_period", ind.rsi_period),
            ("macd_fast", ind.macd_fast),
            ("macd_slow", ind.macd_slow),
            ("macd_signal", ind.macd_signal),
        ];
        for (name, value) in periods {
            if value == 0 {
                return Err(CoreError::Config(format!(
                    "indicators.{} 은(는) 0보다 커야 합니다",
                    name
                )));
            }
        }
        if ind.macd_fast >= ind.macd_slow {
            return Err(CoreError::Config(format!(
                "indicators.macd_fast({})는 macd_slow({})보다 작아야 합니다",
                ind.macd_fast, ind.macd_slow
            )));
        }
        Ok(())
    }
}
