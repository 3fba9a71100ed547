//! 규칙 기반 헤드라인 감성 점수.

use newsquant_core::{NewsRecord, ScoredNews};

use super::lexicon::SentimentLexicon;
use crate::text::tokenize;

/// 부정어가 적용된 감성 단어의 배율.
const NEGATION_FACTOR: f64 = -0.5;

/// 부정어 탐색 범위 (감성 단어 앞 토큰 수).
const NEGATION_WINDOW: usize = 2;

/// 텍스트 → 극성(-1.0 ~ 1.0) 변환기.
///
/// 구현체는 상태가 없고 결정적이어야 합니다.
pub trait SentimentScorer {
    /// 텍스트의 극성을 반환합니다. 빈 텍스트는 0.0입니다.
    fn polarity(&self, text: &str) -> f64;
}

/// 사전 기반 감성 분석기.
///
/// - 사전 단어마다 기본 극성을 기여
/// - 바로 앞의 강조어는 극성에 배율 적용 (`very` 1.3, `slightly` 0.5)
/// - 앞 두 토큰 안의 부정어는 극성을 반전하고 절반으로 약화
/// - 결과는 기여값의 평균을 [-1, 1]로 제한
#[derive(Debug, Clone, Default)]
pub struct LexiconScorer {
    lexicon: SentimentLexicon,
}

impl LexiconScorer {
    /// 기본 사전으로 분석기를 생성합니다.
    pub fn new() -> Self {
        Self::default()
    }

    fn contribution(&self, tokens: &[String], idx: usize, base: f64) -> f64 {
        let mut score = base;

        if let Some(factor) = idx
            .checked_sub(1)
            .and_then(|prev| self.lexicon.intensity(&tokens[prev]))
        {
            score *= factor;
        }

        let window_start = idx.saturating_sub(NEGATION_WINDOW);
        if tokens[window_start..idx]
            .iter()
            .any(|t| self.lexicon.is_negation(t))
        {
            score *= NEGATION_FACTOR;
        }

        score
    }
}

impl SentimentScorer for LexiconScorer {
    fn polarity(&self, text: &str) -> f64 {
        let tokens = tokenize(text);

        let contributions: Vec<f64> = tokens
            .iter()
            .enumerate()
            .filter_map(|(idx, token)| {
                self.lexicon
                    .polarity(token)
                    .map(|base| self.contribution(&tokens, idx, base))
            })
            .collect();

        if contributions.is_empty() {
            return 0.0;
        }

        let mean = contributions.iter().sum::<f64>() / contributions.len() as f64;
        mean.clamp(-1.0, 1.0)
    }
}

/// 모든 헤드라인에 감성 점수를 한 번씩 부여합니다.
pub fn score_news<S: SentimentScorer + ?Sized>(
    scorer: &S,
    records: Vec<NewsRecord>,
) -> Vec<ScoredNews> {
    records
        .into_iter()
        .map(|record| {
            let sentiment = scorer.polarity(&record.headline);
            ScoredNews { record, sentiment }
        })
        .collect()
}
