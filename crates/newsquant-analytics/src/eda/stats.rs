//! 기술 통계량.

use serde::{Deserialize, Serialize};

/// 수치 시계열 요약 (count, mean, std, 사분위수).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// 표본 수
    pub count: usize,
    /// 산술평균
    pub mean: f64,
    /// 표본 표준편차 (n−1), 표본이 1개면 None
    pub std: Option<f64>,
    /// 최솟값
    pub min: f64,
    /// 25% 분위수
    pub q25: f64,
    /// 중앙값
    pub median: f64,
    /// 75% 분위수
    pub q75: f64,
    /// 최댓값
    pub max: f64,
}

/// 기술 통계량을 계산합니다. NaN은 제외하며, 남은 값이 없으면 None.
pub fn describe(values: &[f64]) -> Option<Summary> {
    let mut sorted: Vec<f64> = values.iter().copied().filter(|v| !v.is_nan()).collect();
    if sorted.is_empty() {
        return None;
    }
    sorted.sort_by(f64::total_cmp);

    let count = sorted.len();
    let mean = sorted.iter().sum::<f64>() / count as f64;
    let std = (count > 1).then(|| {
        let ss: f64 = sorted.iter().map(|v| (v - mean).powi(2)).sum();
        (ss / (count - 1) as f64).sqrt()
    });

    Some(Summary {
        count,
        mean,
        std,
        min: sorted[0],
        q25: quantile_sorted(&sorted, 0.25),
        median: quantile_sorted(&sorted, 0.5),
        q75: quantile_sorted(&sorted, 0.75),
        max: sorted[count - 1],
    })
}

/// 정렬된 값의 선형 보간 분위수.
fn quantile_sorted(sorted: &[f64], q: f64) -> f64 {
    let pos = q * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    sorted[lo] + (sorted[hi] - sorted[lo]) * (pos - lo as f64)
}
