//! 달력 기간 규칙.
//!
//! 주차는 ISO-8601이 아닌 일요일 시작 규칙을 따릅니다:
//! `ceil((0부터 센 연중 일수 + 1월 1일 요일(일요일=0) + 1) / 7)`.
//! 1주차는 1월 1일이 포함된 (부분) 주이고, 이후 매주 일요일에 새 주가 시작됩니다.
//! 기존 차트 출력과의 호환을 위해 이 규칙을 그대로 유지합니다.

use chrono::{Datelike, Duration, NaiveDate};

use pnl_core::{BucketKey, Frequency};

/// 해당 연도 1월 1일의 요일 인덱스 (일요일 = 0).
fn jan1_weekday(year: i32) -> Option<u32> {
    NaiveDate::from_ymd_opt(year, 1, 1).map(|jan1| jan1.weekday().num_days_from_sunday())
}

/// 날짜의 주차 번호 (일요일 시작, 1부터).
pub fn week_number(date: NaiveDate) -> u32 {
    let offset = jan1_weekday(date.year()).unwrap_or(0);
    (date.ordinal0() + offset + 1 + 6) / 7
}

/// 날짜의 분기 (1~4).
pub fn quarter_of(date: NaiveDate) -> u32 {
    date.month0() / 3 + 1
}

/// 주차의 첫 날짜.
///
/// 1주차는 1월 1일, 그 이후는 해당 주를 여는 일요일입니다.
/// 연도 안에 없는 주차이면 `None`을 반환합니다.
pub fn week_start(year: i32, week: u32) -> Option<NaiveDate> {
    if week == 0 {
        return None;
    }

    let jan1 = NaiveDate::from_ymd_opt(year, 1, 1)?;
    let offset = jan1.weekday().num_days_from_sunday() as i64;
    let days = (7 * (week as i64 - 1) - offset).max(0);
    let start = jan1.checked_add_signed(Duration::days(days))?;

    (start.year() == year).then_some(start)
}

/// 날짜가 속한 기간 키를 계산합니다.
pub fn period_key(date: NaiveDate, frequency: Frequency) -> BucketKey {
    match frequency {
        Frequency::Day => BucketKey::Day(date),
        Frequency::Week => BucketKey::Week {
            year: date.year(),
            week: week_number(date),
        },
        Frequency::Month => BucketKey::Month {
            year: date.year(),
            month: date.month(),
        },
        Frequency::Quarter => BucketKey::Quarter {
            year: date.year(),
            quarter: quarter_of(date),
        },
        Frequency::Year => BucketKey::Year(date.year()),
    }
}

/// 기간 키가 나타내는 기간의 첫 날짜.
pub fn period_start(key: &BucketKey) -> Option<NaiveDate> {
    match *key {
        BucketKey::Day(date) => Some(date),
        BucketKey::Week { year, week } => week_start(year, week),
        BucketKey::Month { year, month } => NaiveDate::from_ymd_opt(year, month, 1),
        BucketKey::Quarter { year, quarter } => {
            NaiveDate::from_ymd_opt(year, quarter.checked_sub(1)? * 3 + 1, 1)
        }
        BucketKey::Year(year) => NaiveDate::from_ymd_opt(year, 1, 1),
    }
}
