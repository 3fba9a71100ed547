//! 빈도 집계.

use chrono::NaiveDate;
use newsquant_core::NewsRecord;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::hash::Hash;

use crate::text::{content_words, extract_email_domain};

/// 값과 출현 횟수.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueCount<K> {
    pub value: K,
    pub count: usize,
}

/// 값별 출현 횟수를 내림차순으로 반환합니다.
///
/// 횟수가 같으면 먼저 등장한 값이 앞에 옵니다.
pub fn value_counts<K, I>(values: I) -> Vec<ValueCount<K>>
where
    K: Eq + Hash + Clone,
    I: IntoIterator<Item = K>,
{
    let mut counts: HashMap<K, (usize, usize)> = HashMap::new();
    for (idx, value) in values.into_iter().enumerate() {
        counts.entry(value).or_insert((0, idx)).0 += 1;
    }

    let mut entries: Vec<(K, usize, usize)> = counts
        .into_iter()
        .map(|(value, (count, first))| (value, count, first))
        .collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1).then(a.2.cmp(&b.2)));

    entries
        .into_iter()
        .map(|(value, count, _)| ValueCount { value, count })
        .collect()
}

/// 퍼블리셔별 기사 수.
pub fn publisher_counts(records: &[NewsRecord]) -> Vec<ValueCount<String>> {
    value_counts(records.iter().map(|r| r.publisher.clone()))
}

/// 날짜별 기사 수 (날짜 오름차순).
pub fn daily_counts(records: &[NewsRecord]) -> BTreeMap<NaiveDate, usize> {
    let mut counts = BTreeMap::new();
    for record in records {
        *counts.entry(record.date).or_insert(0) += 1;
    }
    counts
}

/// 불용어를 제외한 헤드라인 단어 빈도.
pub fn word_frequencies(records: &[NewsRecord]) -> Vec<ValueCount<String>> {
    value_counts(records.iter().flat_map(|r| content_words(&r.headline)))
}

/// 이메일 형식 퍼블리셔의 도메인 빈도.
pub fn domain_counts(records: &[NewsRecord]) -> Vec<ValueCount<String>> {
    value_counts(
        records
            .iter()
            .filter_map(|r| extract_email_domain(&r.publisher))
            .map(str::to_string),
    )
}
