//! 감성-수익률 상관분석 모듈.
//!
//! 종목별 일평균 감성과 일간 수익률을 날짜로 내부 조인한 뒤
//! Pearson 상관계수와 양측 p-value를 계산합니다.
//!
//! # 예시
//!
//! ```rust,ignore
//! use newsquant_analytics::correlation::correlate;
//!
//! let outcome = correlate(&ticker, &daily_sentiment, &series);
//! if let Some(result) = outcome.result() {
//!     println!("r = {:.4}, p = {:.4}", result.pearson_r, result.p_value);
//! }
//! ```

use chrono::NaiveDate;
use newsquant_core::{
    CorrelationOutcome, CorrelationResult, DailySentiment, JoinedObservation, PriceSeries, Ticker,
    UndefinedReason,
};
use serde::{Deserialize, Serialize};
use statrs::distribution::{ContinuousCDF, StudentsT};
use std::collections::BTreeMap;
use tracing::debug;

/// Pearson 검정 결과.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PearsonTest {
    /// 상관계수 (-1.0 ~ 1.0)
    pub r: f64,
    /// 양측 p-value (0.0 ~ 1.0)
    pub p_value: f64,
    /// 표본 수
    pub n: usize,
}

/// Pearson 상관계수 계산.
///
/// # 반환
///
/// 상관계수 (-1.0 ~ 1.0), 길이 불일치/데이터 부족/변동 없음이면 None
pub fn calculate_correlation(x: &[f64], y: &[f64]) -> Option<f64> {
    if x.len() != y.len() || x.len() < 2 || is_constant(x) || is_constant(y) {
        return None;
    }

    let n = x.len() as f64;
    let mean_x = x.iter().sum::<f64>() / n;
    let mean_y = y.iter().sum::<f64>() / n;

    let mut cov = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for (xi, yi) in x.iter().zip(y) {
        let dx = xi - mean_x;
        let dy = yi - mean_y;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }

    if var_x == 0.0 || var_y == 0.0 {
        return None;
    }

    Some((cov / (var_x.sqrt() * var_y.sqrt())).clamp(-1.0, 1.0))
}

/// 모든 값이 같은지 확인합니다.
///
/// 평균의 부동소수점 오차로 분산이 0이 아니게 보이는 경우를 걸러냅니다.
fn is_constant(values: &[f64]) -> bool {
    values.windows(2).all(|w| w[0] == w[1])
}

/// Pearson 상관계수와 Student t 분포(자유도 n−2) 기반 양측 p-value.
///
/// n = 2이면 p-value는 1.0입니다. 길이가 다른 두 시계열은 잘라내지 않고 거부합니다.
pub fn pearson_test(x: &[f64], y: &[f64]) -> Result<PearsonTest, UndefinedReason> {
    if x.len() != y.len() {
        return Err(UndefinedReason::LengthMismatch);
    }
    let n = x.len();
    if n < 2 {
        return Err(UndefinedReason::InsufficientSamples);
    }

    let r = calculate_correlation(x, y).ok_or(UndefinedReason::ConstantInput)?;
    Ok(PearsonTest {
        r,
        p_value: two_sided_p_value(r, n),
        n,
    })
}

fn two_sided_p_value(r: f64, n: usize) -> f64 {
    if n <= 2 {
        return 1.0;
    }

    let df = (n - 2) as f64;
    let denom = 1.0 - r * r;
    if denom <= 0.0 {
        return 0.0;
    }

    let t = r * (df / denom).sqrt();
    // df ≥ 1이면 분포 생성은 실패하지 않음
    StudentsT::new(0.0, 1.0, df)
        .map(|dist| 2.0 * dist.cdf(-t.abs()))
        .map_or(1.0, |p| p.clamp(0.0, 1.0))
}

/// 일별 감성과 가격 시계열을 날짜 기준으로 내부 조인합니다.
///
/// 같은 날짜의 봉이 여러 개면 각각 한 행이 됩니다. 결과는 날짜 오름차순입니다.
pub fn join_on_date(daily: &[DailySentiment], series: &PriceSeries) -> Vec<JoinedObservation> {
    let mut returns_by_date: BTreeMap<NaiveDate, Vec<Option<f64>>> = BTreeMap::new();
    for (bar, ret) in series.bars().iter().zip(series.daily_returns()) {
        returns_by_date.entry(bar.date).or_default().push(ret);
    }

    let mut sorted: Vec<&DailySentiment> = daily.iter().collect();
    sorted.sort_by_key(|d| d.date);

    sorted
        .into_iter()
        .filter_map(|day| returns_by_date.get(&day.date).map(|rets| (day, rets)))
        .flat_map(|(day, rets)| {
            rets.iter().map(move |ret| JoinedObservation {
                date: day.date,
                mean_sentiment: day.mean_sentiment,
                daily_return: *ret,
            })
        })
        .collect()
}

/// 조인된 관측치로 상관분석을 수행합니다. 결측 수익률은 0으로 채웁니다.
pub fn correlate_joined(ticker: &Ticker, joined: &[JoinedObservation]) -> CorrelationOutcome {
    let sentiments: Vec<f64> = joined.iter().map(|o| o.mean_sentiment).collect();
    let returns: Vec<f64> = joined
        .iter()
        .map(|o| o.daily_return.unwrap_or(0.0))
        .collect();

    match pearson_test(&sentiments, &returns) {
        Ok(test) => CorrelationOutcome::Computed(CorrelationResult {
            ticker: ticker.clone(),
            pearson_r: test.r,
            p_value: test.p_value,
            sample_size: test.n,
        }),
        Err(reason) => CorrelationOutcome::Undefined {
            ticker: ticker.clone(),
            sample_size: joined.len(),
            reason,
        },
    }
}

/// 한 종목의 감성-수익률 상관분석.
pub fn correlate(
    ticker: &Ticker,
    daily: &[DailySentiment],
    series: &PriceSeries,
) -> CorrelationOutcome {
    let joined = join_on_date(daily, series);
    debug!(
        ticker = %ticker,
        sentiment_days = daily.len(),
        bars = series.len(),
        joined = joined.len(),
        "감성/수익률 조인 완료"
    );
    correlate_joined(ticker, &joined)
}
