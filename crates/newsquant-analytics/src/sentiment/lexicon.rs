//! 감성 사전.
//!
//! 일반 영어 극성 단어와 금융 뉴스 용어를 함께 담은 규칙 기반 사전입니다.

use std::collections::HashMap;

/// 긍정 단어와 기본 극성.
const POSITIVE_WORDS: &[(&str, f64)] = &[
    // 일반 영어
    ("good", 0.7),
    ("great", 0.8),
    ("best", 1.0),
    ("better", 0.5),
    ("excellent", 1.0),
    ("positive", 0.23),
    ("happy", 0.8),
    ("success", 0.6),
    ("successful", 0.75),
    ("win", 0.8),
    ("wins", 0.8),
    ("winning", 0.5),
    ("top", 0.5),
    ("new", 0.14),
    ("nice", 0.6),
    ("strong", 0.43),
    ("stronger", 0.5),
    ("solid", 0.4),
    ("impressive", 1.0),
    ("favorable", 0.6),
    ("optimistic", 0.6),
    ("confident", 0.5),
    ("healthy", 0.5),
    ("robust", 0.5),
    ("attractive", 0.6),
    ("promising", 0.6),
    ("significant", 0.38),
    ("boost", 0.5),
    ("boosts", 0.5),
    ("improve", 0.5),
    ("improved", 0.5),
    ("improves", 0.5),
    ("approval", 0.5),
    ("approved", 0.5),
    ("innovative", 0.5),
    ("high", 0.16),
    ("higher", 0.25),
    ("highs", 0.2),
    ("record", 0.4),
    // 금융 뉴스 용어
    ("bullish", 0.8),
    ("beat", 0.6),
    ("beats", 0.6),
    ("tops", 0.5),
    ("exceed", 0.6),
    ("exceeds", 0.6),
    ("upgrade", 0.6),
    ("upgrades", 0.6),
    ("upgraded", 0.6),
    ("outperform", 0.7),
    ("outperforms", 0.7),
    ("buy", 0.4),
    ("overweight", 0.3),
    ("raise", 0.3),
    ("raises", 0.3),
    ("raised", 0.3),
    ("gain", 0.5),
    ("gains", 0.5),
    ("rise", 0.4),
    ("rises", 0.4),
    ("rising", 0.4),
    ("up", 0.2),
    ("surge", 0.7),
    ("surges", 0.7),
    ("soar", 0.8),
    ("soars", 0.8),
    ("jump", 0.5),
    ("jumps", 0.5),
    ("rally", 0.6),
    ("rallies", 0.6),
    ("rebound", 0.5),
    ("recovery", 0.5),
    ("growth", 0.5),
    ("profit", 0.5),
    ("profitable", 0.6),
    ("dividend", 0.2),
    ("breakout", 0.6),
    ("momentum", 0.3),
];

/// 부정 단어와 기본 극성.
const NEGATIVE_WORDS: &[(&str, f64)] = &[
    // 일반 영어
    ("bad", -0.7),
    ("worse", -0.4),
    ("worst", -1.0),
    ("poor", -0.4),
    ("negative", -0.3),
    ("terrible", -1.0),
    ("fail", -0.5),
    ("fails", -0.5),
    ("failed", -0.5),
    ("failure", -0.6),
    ("weak", -0.38),
    ("weaker", -0.4),
    ("low", -0.2),
    ("lower", -0.25),
    ("lows", -0.3),
    ("concern", -0.4),
    ("concerns", -0.4),
    ("worry", -0.5),
    ("worries", -0.5),
    ("fear", -0.6),
    ("fears", -0.6),
    ("risk", -0.3),
    ("risky", -0.5),
    ("uncertain", -0.4),
    ("uncertainty", -0.4),
    ("volatile", -0.3),
    ("trouble", -0.6),
    ("problem", -0.5),
    ("warning", -0.5),
    ("warns", -0.5),
    ("lawsuit", -0.5),
    ("fraud", -0.9),
    ("scandal", -0.8),
    ("investigation", -0.4),
    ("recall", -0.4),
    ("halt", -0.4),
    ("halted", -0.4),
    ("delay", -0.3),
    ("delayed", -0.3),
    ("disappointing", -0.6),
    ("disappoint", -0.6),
    ("crisis", -0.8),
    ("bankruptcy", -0.9),
    // 금융 뉴스 용어
    ("bearish", -0.8),
    ("miss", -0.6),
    ("misses", -0.6),
    ("missed", -0.6),
    ("downgrade", -0.6),
    ("downgrades", -0.6),
    ("downgraded", -0.6),
    ("underperform", -0.6),
    ("underweight", -0.3),
    ("sell", -0.4),
    ("cut", -0.4),
    ("cuts", -0.4),
    ("lowers", -0.3),
    ("lowered", -0.3),
    ("loss", -0.5),
    ("losses", -0.5),
    ("fall", -0.4),
    ("falls", -0.4),
    ("falling", -0.4),
    ("drop", -0.5),
    ("drops", -0.5),
    ("decline", -0.5),
    ("declines", -0.5),
    ("down", -0.16),
    ("slump", -0.6),
    ("slumps", -0.6),
    ("plunge", -0.8),
    ("plunges", -0.8),
    ("tumble", -0.7),
    ("tumbles", -0.7),
    ("crash", -0.9),
    ("sink", -0.5),
    ("sinks", -0.5),
    ("selloff", -0.6),
    ("layoffs", -0.6),
    ("recession", -0.7),
    ("default", -0.5),
    ("short", -0.2),
];

/// 부정어 (뒤따르는 감성 단어의 극성을 반전).
const NEGATIONS: &[&str] = &[
    "not", "no", "never", "neither", "nor", "none", "nothing", "cannot", "can't", "don't",
    "doesn't", "didn't", "won't", "wouldn't", "shouldn't", "isn't", "aren't", "wasn't",
    "weren't", "hardly", "barely", "without",
];

/// 강조어와 배율.
const INTENSIFIERS: &[(&str, f64)] = &[
    ("very", 1.3),
    ("extremely", 1.5),
    ("highly", 1.3),
    ("really", 1.2),
    ("significantly", 1.3),
    ("sharply", 1.4),
    ("strongly", 1.3),
    ("most", 1.2),
    ("slightly", 0.5),
    ("somewhat", 0.7),
    ("modestly", 0.7),
    ("marginally", 0.5),
];

/// 감성 사전.
#[derive(Debug, Clone)]
pub struct SentimentLexicon {
    words: HashMap<&'static str, f64>,
    intensifiers: HashMap<&'static str, f64>,
}

impl Default for SentimentLexicon {
    fn default() -> Self {
        Self::new()
    }
}

impl SentimentLexicon {
    /// 기본 단어 목록으로 사전을 생성합니다.
    pub fn new() -> Self {
        let words = POSITIVE_WORDS
            .iter()
            .chain(NEGATIVE_WORDS.iter())
            .copied()
            .collect();
        let intensifiers = INTENSIFIERS.iter().copied().collect();
        Self {
            words,
            intensifiers,
        }
    }

    /// 단어의 기본 극성.
    pub fn polarity(&self, word: &str) -> Option<f64> {
        self.words.get(word).copied()
    }

    /// 강조어 배율.
    pub fn intensity(&self, word: &str) -> Option<f64> {
        self.intensifiers.get(word).copied()
    }

    /// 부정어 여부.
    pub fn is_negation(&self, word: &str) -> bool {
        NEGATIONS.contains(&word)
    }

    /// 사전에 등록된 감성 단어 수.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// 비어 있는지 확인합니다.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
