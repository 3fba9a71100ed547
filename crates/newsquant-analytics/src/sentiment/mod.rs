//! 헤드라인 감성 분석.
//!
//! 사전 기반 극성 점수와 일별 감성 집계를 제공합니다.

mod aggregator;
mod lexicon;
mod scorer;

pub use aggregator::{aggregate_daily, daily_sentiment_by_ticker};
pub use lexicon::SentimentLexicon;
pub use scorer::{score_news, LexiconScorer, SentimentScorer};
