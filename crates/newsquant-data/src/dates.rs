//! 날짜 문자열 정규화.
//!
//! 뉴스 CSV는 `2020-06-05 10:30:54-04:00`처럼 시각과 오프셋이 포함되고,
//! 주가 CSV는 `2020-06-05` 형식입니다. 둘 다 일 단위(`NaiveDate`)로 맞춘 뒤 조인합니다.
//! 오프셋은 UTC로 변환하지 않고 기록된 현지 날짜를 그대로 사용합니다.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

const OFFSET_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S%.f%:z", "%Y-%m-%d %H:%M:%S%.f%z"];

const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%m/%d/%Y", "%Y/%m/%d"];

/// 날짜 문자열을 일 단위 날짜로 변환합니다.
///
/// 해석할 수 없으면 None을 반환하며, 호출자는 해당 행을 제외해야 합니다.
pub fn parse_calendar_date(raw: &str) -> Option<NaiveDate> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.date_naive());
    }
    for fmt in OFFSET_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(s, fmt) {
            return Some(dt.date_naive());
        }
    }
    for fmt in NAIVE_DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt.date());
        }
    }
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_offset_timestamp_keeps_local_date() {
        // UTC로는 다음 날이지만 기록된 날짜를 사용
        assert_eq!(
            parse_calendar_date("2020-06-05 22:30:54-04:00"),
            Some(ymd(2020, 6, 5))
        );
        assert_eq!(
            parse_calendar_date("2020-06-05T10:30:54+09:00"),
            Some(ymd(2020, 6, 5))
        );
    }

    #[test]
    fn test_naive_forms() {
        assert_eq!(parse_calendar_date("2020-05-22 00:00:00"), Some(ymd(2020, 5, 22)));
        assert_eq!(parse_calendar_date("2020-05-22 11:23:20.123"), Some(ymd(2020, 5, 22)));
        assert_eq!(parse_calendar_date("2020-05-22T11:23:20"), Some(ymd(2020, 5, 22)));
        assert_eq!(parse_calendar_date("2020-05-22 11:23"), Some(ymd(2020, 5, 22)));
        assert_eq!(parse_calendar_date(" 2020-05-22 "), Some(ymd(2020, 5, 22)));
        assert_eq!(parse_calendar_date("05/22/2020"), Some(ymd(2020, 5, 22)));
    }

    #[test]
    fn test_unparseable_dates() {
        assert_eq!(parse_calendar_date(""), None);
        assert_eq!(parse_calendar_date("not a date"), None);
        assert_eq!(parse_calendar_date("2020-13-45"), None);
        assert_eq!(parse_calendar_date("yesterday 10:00"), None);
    }
}
