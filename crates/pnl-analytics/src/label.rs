//! 기간 레이블 및 금액 표시 포맷.
//!
//! [`format_label`]은 실패하지 않습니다. 해석할 수 없는 입력은 원본 문자열을
//! 그대로 돌려줍니다.

use chrono::{Datelike, NaiveDate};
use pnl_core::{round_amount, Frequency};
use rust_decimal::Decimal;
use tracing::debug;

use crate::calendar::{quarter_of, week_number};

/// 레이블 입력을 달력 날짜로 해석한 결과.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateParse<'a> {
    /// 유효한 달력 날짜
    Parsed(NaiveDate),
    /// 날짜가 아님 (원본 입력)
    Fallback(&'a str),
}

impl DateParse<'_> {
    /// 해석된 날짜를 반환합니다.
    pub fn date(&self) -> Option<NaiveDate> {
        match self {
            DateParse::Parsed(date) => Some(*date),
            DateParse::Fallback(_) => None,
        }
    }
}

fn parse_number<T: std::str::FromStr>(part: &str, max_digits: usize) -> Option<T> {
    let valid =
        !part.is_empty() && part.len() <= max_digits && part.bytes().all(|b| b.is_ascii_digit());

    if valid {
        part.parse().ok()
    } else {
        None
    }
}

fn parse_ymd(input: &str) -> Option<NaiveDate> {
    let mut parts = input.split('-');

    let year_part = parts.next()?;
    if year_part.len() != 4 {
        return None;
    }
    let year: i32 = parse_number(year_part, 4)?;
    let month = match parts.next() {
        Some(part) => parse_number(part, 2)?,
        None => 1,
    };
    let day = match parts.next() {
        Some(part) => parse_number(part, 2)?,
        None => 1,
    };
    if parts.next().is_some() {
        return None;
    }

    NaiveDate::from_ymd_opt(year, month, day)
}

/// `YYYY`, `YYYY-M[M]`, `YYYY-M[M]-D[D]` 형태의 문자열을 날짜로 해석합니다.
///
/// 생략된 월/일은 1로 채웁니다. 연/월 버킷 키(`2024`, `2024-3`)도 이 규칙으로
/// 해당 기간의 첫 날짜가 됩니다.
pub fn parse_calendar_date(input: &str) -> DateParse<'_> {
    match parse_ymd(input) {
        Some(date) => DateParse::Parsed(date),
        None => DateParse::Fallback(input),
    }
}

/// 집계기가 만든 주/분기 키(`2024-W3`, `2024-Q1`)를 레이블로 바꿉니다.
///
/// 해당 주기에서만 인식하며, 두 부분이 모두 숫자가 아니면 `None`입니다.
fn synthetic_key_label(input: &str, frequency: Frequency) -> Option<String> {
    let separator = match frequency {
        Frequency::Week => "-W",
        Frequency::Quarter => "-Q",
        _ => return None,
    };

    let (year, number) = input.split_once(separator)?;
    let year: i32 = parse_number(year, 4)?;
    let number: u32 = parse_number(number, 2)?;

    Some(match frequency {
        Frequency::Week => format!("Week {}, {}", number, year),
        _ => format!("Q{} {}", number, year),
    })
}

/// 날짜를 주기에 맞는 레이블로 포맷합니다.
pub fn date_label(date: NaiveDate, frequency: Frequency) -> String {
    match frequency {
        Frequency::Day => date.format("%b %-d").to_string(),
        Frequency::Week => format!("Week {}, {}", week_number(date), date.year()),
        Frequency::Month => format!("{} {}", date.format("%b"), date.year()),
        Frequency::Quarter => format!("Q{} {}", quarter_of(date), date.year()),
        Frequency::Year => date.year().to_string(),
    }
}

/// 버킷 키 또는 날짜 문자열을 표시 레이블로 변환합니다.
///
/// | 주기 | 예시 입력 | 출력 |
/// |------|-----------|------|
/// | Day | `2024-01-05` | `Jan 5` |
/// | Week | `2024-W3` 또는 날짜 | `Week 3, 2024` |
/// | Month | `2024-1` 또는 날짜 | `Jan 2024` |
/// | Quarter | `2024-Q3` 또는 날짜 | `Q3 2024` |
/// | Year | `2024` 또는 날짜 | `2024` |
pub fn format_label(input: &str, frequency: Frequency) -> String {
    if let Some(label) = synthetic_key_label(input, frequency) {
        return label;
    }

    match parse_calendar_date(input) {
        DateParse::Parsed(date) => date_label(date, frequency),
        DateParse::Fallback(raw) => {
            debug!(
                input = raw,
                frequency = %frequency,
                "Label input is not a date, returned as-is"
            );
            raw.to_string()
        }
    }
}

/// 툴팁용 기간 손익 문자열.
///
/// 양수는 `+$50.12`, 그 외는 부호 없이 `$30.45` (부호는 색상으로 표시).
pub fn format_period_amount(value: Decimal) -> String {
    let sign = if value > Decimal::ZERO { "+" } else { "" };
    format!("{}${:.2}", sign, round_amount(value).abs())
}

/// 툴팁용 누적 손익 문자열 (예: `$19.67`, `$-12.30`).
pub fn format_cumulative_amount(value: Decimal) -> String {
    format!("${:.2}", round_amount(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_parse_calendar_date_shapes() {
        let jan1 = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        assert_eq!(parse_calendar_date("2024-01-01"), DateParse::Parsed(jan1));
        assert_eq!(parse_calendar_date("2024-1"), DateParse::Parsed(jan1));
        assert_eq!(parse_calendar_date("2024"), DateParse::Parsed(jan1));
        assert_eq!(
            parse_calendar_date("2024-3-9").date(),
            NaiveDate::from_ymd_opt(2024, 3, 9)
        );
    }

    #[test]
    fn test_parse_calendar_date_fallback() {
        let inputs = [
            "not-a-date",
            "",
            "2024-W1",
            "2024-Q3",
            "2024-02-30",
            "24-01-01",
            "2024-01-01-01",
            "2024-001",
        ];
        for input in inputs {
            assert_eq!(
                parse_calendar_date(input),
                DateParse::Fallback(input),
                "{}",
                input
            );
        }
    }

    #[test]
    fn test_day_labels() {
        assert_eq!(format_label("2024-01-01", Frequency::Day), "Jan 1");
        assert_eq!(format_label("2024-10-15", Frequency::Day), "Oct 15");
    }

    #[test]
    fn test_week_labels() {
        assert_eq!(format_label("2024-W1", Frequency::Week), "Week 1, 2024");
        assert_eq!(format_label("2024-W27", Frequency::Week), "Week 27, 2024");
        // 날짜 입력은 같은 주차 규칙으로 다시 계산
        assert_eq!(format_label("2024-01-07", Frequency::Week), "Week 2, 2024");
    }

    #[test]
    fn test_month_labels() {
        assert_eq!(format_label("2024-1", Frequency::Month), "Jan 2024");
        assert_eq!(format_label("2024-2", Frequency::Month), "Feb 2024");
        assert_eq!(format_label("2024-12-25", Frequency::Month), "Dec 2024");
    }

    #[test]
    fn test_padded_year_keys() {
        assert_eq!(format_label("0999-3", Frequency::Month), "Mar 999");
        assert_eq!(format_label("0999-W10", Frequency::Week), "Week 10, 999");
        assert_eq!(format_label("0999-Q1", Frequency::Quarter), "Q1 999");
        assert_eq!(format_label("0999", Frequency::Year), "999");
        assert_eq!(format_label("0999-03-05", Frequency::Day), "Mar 5");
    }

    #[test]
    fn test_quarter_labels() {
        assert_eq!(format_label("2024-Q3", Frequency::Quarter), "Q3 2024");
        assert_eq!(format_label("2024-05-01", Frequency::Quarter), "Q2 2024");
    }

    #[test]
    fn test_year_labels() {
        assert_eq!(format_label("2024", Frequency::Year), "2024");
        assert_eq!(format_label("2023-06-30", Frequency::Year), "2023");
    }

    #[test]
    fn test_fallback_returns_input() {
        assert_eq!(format_label("not-a-date", Frequency::Day), "not-a-date");
        assert_eq!(format_label("2024-Wx", Frequency::Week), "2024-Wx");
        // 주/분기 키는 해당 주기에서만 인식
        assert_eq!(format_label("2024-W1", Frequency::Day), "2024-W1");
        assert_eq!(format_label("2024-Q3", Frequency::Month), "2024-Q3");
    }

    #[test]
    fn test_format_period_amount() {
        assert_eq!(format_period_amount(dec!(50.12)), "+$50.12");
        assert_eq!(format_period_amount(dec!(-30.45)), "$30.45");
        assert_eq!(format_period_amount(dec!(7)), "+$7.00");
        assert_eq!(format_period_amount(Decimal::ZERO), "$0.00");
    }

    #[test]
    fn test_format_cumulative_amount() {
        assert_eq!(format_cumulative_amount(dec!(19.67)), "$19.67");
        assert_eq!(format_cumulative_amount(dec!(-12.3)), "$-12.30");
        assert_eq!(format_cumulative_amount(dec!(0.125)), "$0.13");
    }
}
