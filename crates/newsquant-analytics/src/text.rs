//! 헤드라인 텍스트 토큰화.
//!
//! 감성 분석과 단어 빈도 분석이 같은 토큰화 규칙을 공유합니다.

use regex::Regex;
use std::sync::LazyLock;

/// 단어 토큰: 문자 연속 (단어 내부 아포스트로피 허용, 예: don't).
static WORD_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\p{L}+(?:'\p{L}+)*").expect("valid word regex"));

/// 퍼블리셔 필드의 이메일 도메인 (`name@domain.com`).
static EMAIL_DOMAIN_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"@([\w.-]+)").expect("valid domain regex"));

/// 영어 불용어 목록.
pub const STOPWORDS: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "you're", "you've",
    "you'll", "you'd", "your", "yours", "yourself", "yourselves", "he", "him", "his", "himself",
    "she", "she's", "her", "hers", "herself", "it", "it's", "its", "itself", "they", "them",
    "their", "theirs", "themselves", "what", "which", "who", "whom", "this", "that", "that'll",
    "these", "those", "am", "is", "are", "was", "were", "be", "been", "being", "have", "has",
    "had", "having", "do", "does", "did", "doing", "a", "an", "the", "and", "but", "if", "or",
    "because", "as", "until", "while", "of", "at", "by", "for", "with", "about", "against",
    "between", "into", "through", "during", "before", "after", "above", "below", "to", "from",
    "up", "down", "in", "out", "on", "off", "over", "under", "again", "further", "then", "once",
    "here", "there", "when", "where", "why", "how", "all", "any", "both", "each", "few", "more",
    "most", "other", "some", "such", "no", "nor", "not", "only", "own", "same", "so", "than",
    "too", "very", "s", "t", "can", "will", "just", "don", "don't", "should", "should've", "now",
    "d", "ll", "m", "o", "re", "ve", "y", "ain", "aren", "aren't", "couldn", "couldn't", "didn",
    "didn't", "doesn", "doesn't", "hadn", "hadn't", "hasn", "hasn't", "haven", "haven't", "isn",
    "isn't", "ma", "mightn", "mightn't", "mustn", "mustn't", "needn", "needn't", "shan",
    "shan't", "shouldn", "shouldn't", "wasn", "wasn't", "weren", "weren't", "won", "won't",
    "wouldn", "wouldn't",
];

/// 소문자로 변환한 단어 토큰 목록을 반환합니다.
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    WORD_REGEX
        .find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// 불용어 여부.
pub fn is_stopword(word: &str) -> bool {
    STOPWORDS.contains(&word)
}

/// 빈도 분석용 단어: 순수 알파벳 토큰 중 불용어가 아닌 것.
pub fn content_words(text: &str) -> Vec<String> {
    tokenize(text)
        .into_iter()
        .filter(|w| w.chars().all(char::is_alphabetic) && !is_stopword(w))
        .collect()
}

/// 퍼블리셔 문자열에서 이메일 도메인을 추출합니다.
pub fn extract_email_domain(publisher: &str) -> Option<&str> {
    EMAIL_DOMAIN_REGEX
        .captures(publisher)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize() {
        assert_eq!(
            tokenize("Apple's Q2 EPS beat; shares don't fall!"),
            vec!["apple's", "q", "eps", "beat", "shares", "don't", "fall"]
        );
        assert!(tokenize("").is_empty());
        assert!(tokenize("123 456 %").is_empty());
    }

    #[test]
    fn test_content_words_filters_stopwords() {
        assert_eq!(
            content_words("The Stocks That Hit 52-Week Highs On Friday"),
            vec!["stocks", "hit", "week", "highs", "friday"]
        );
        // 아포스트로피 포함 토큰은 알파벳이 아니므로 제외
        assert_eq!(content_words("Apple's rally"), vec!["rally"]);
    }

    #[test]
    fn test_extract_email_domain() {
        assert_eq!(extract_email_domain("vick@benzinga.com"), Some("benzinga.com"));
        assert_eq!(
            extract_email_domain("Jane Doe <jane.doe@news-wire.co.uk>"),
            Some("news-wire.co.uk")
        );
        assert_eq!(extract_email_domain("Benzinga Insights"), None);
    }
}
