//! 기간 버킷과 버킷 키.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Serialize, Serializer};
use std::fmt;

use crate::types::Frequency;

/// 집계 기간을 식별하는 키.
///
/// 같은 주기에서 생성된 키끼리는 버킷 시작일의 시간 순서대로 정렬됩니다.
/// 문자열 표현(`2024-1`, `2024-Q3` 등)은 월/주차/분기를 0으로 채우지 않으므로
/// 문자열 정렬은 시간 순서와 다릅니다. 정렬에는 항상 이 타입의 `Ord`를 사용합니다.
/// 연도는 날짜 키와 같이 네 자리로 채웁니다 (`0999-3`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BucketKey {
    /// 일별 키 (날짜 그대로)
    Day(NaiveDate),
    /// 주별 키 (연도 + 일요일 시작 주차)
    Week { year: i32, week: u32 },
    /// 월별 키 (연도 + 1~12월)
    Month { year: i32, month: u32 },
    /// 분기별 키 (연도 + 1~4분기)
    Quarter { year: i32, quarter: u32 },
    /// 연간 키
    Year(i32),
}

impl BucketKey {
    /// 이 키를 생성한 집계 주기.
    pub fn frequency(&self) -> Frequency {
        match self {
            BucketKey::Day(_) => Frequency::Day,
            BucketKey::Week { .. } => Frequency::Week,
            BucketKey::Month { .. } => Frequency::Month,
            BucketKey::Quarter { .. } => Frequency::Quarter,
            BucketKey::Year(_) => Frequency::Year,
        }
    }

    /// 키가 속한 연도.
    pub fn year(&self) -> i32 {
        match *self {
            BucketKey::Day(date) => date.year(),
            BucketKey::Week { year, .. }
            | BucketKey::Month { year, .. }
            | BucketKey::Quarter { year, .. }
            | BucketKey::Year(year) => year,
        }
    }
}

impl fmt::Display for BucketKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BucketKey::Day(date) => write!(f, "{}", date.format("%Y-%m-%d")),
            BucketKey::Week { year, week } => write!(f, "{:04}-W{}", year, week),
            BucketKey::Month { year, month } => write!(f, "{:04}-{}", year, month),
            BucketKey::Quarter { year, quarter } => write!(f, "{:04}-Q{}", year, quarter),
            BucketKey::Year(year) => write!(f, "{:04}", year),
        }
    }
}

impl Serialize for BucketKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// 하나의 집계 기간과 그 기간의 손익 합계.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Bucket {
    /// 기간 키
    pub key: BucketKey,
    /// 기간 손익 합계 (반올림 전)
    pub sum: Decimal,
}

impl Bucket {
    /// 합계 0으로 새 버킷을 생성합니다.
    pub fn empty(key: BucketKey) -> Self {
        Self {
            key,
            sum: Decimal::ZERO,
        }
    }

    /// 관측치 값을 합계에 더합니다.
    pub fn add(&mut self, value: Decimal) {
        self.sum += value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn month(year: i32, month: u32) -> BucketKey {
        BucketKey::Month { year, month }
    }

    fn week(year: i32, week: u32) -> BucketKey {
        BucketKey::Week { year, week }
    }

    fn quarter(year: i32, quarter: u32) -> BucketKey {
        BucketKey::Quarter { year, quarter }
    }

    #[test]
    fn test_key_display() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        assert_eq!(BucketKey::Day(date).to_string(), "2024-03-05");
        assert_eq!(week(2024, 1).to_string(), "2024-W1");
        assert_eq!(month(2024, 3).to_string(), "2024-3");
        assert_eq!(quarter(2024, 3).to_string(), "2024-Q3");
        assert_eq!(BucketKey::Year(2024).to_string(), "2024");
    }

    #[test]
    fn test_key_display_pads_year_like_dates() {
        let date = NaiveDate::from_ymd_opt(999, 3, 5).unwrap();
        assert_eq!(BucketKey::Day(date).to_string(), "0999-03-05");
        assert_eq!(week(999, 10).to_string(), "0999-W10");
        assert_eq!(month(999, 3).to_string(), "0999-3");
        assert_eq!(quarter(999, 1).to_string(), "0999-Q1");
        assert_eq!(BucketKey::Year(999).to_string(), "0999");
    }

    #[test]
    fn test_key_order_is_chronological() {
        // 문자열로는 "2024-10" < "2024-9" 이지만 키 순서는 시간 순서
        let september = month(2024, 9);
        let october = month(2024, 10);
        assert!(september < october);
        assert!(september.to_string() > october.to_string());

        assert!(week(2023, 53) < week(2024, 1));
    }

    #[test]
    fn test_key_frequency_and_year() {
        let key = quarter(2023, 4);
        assert_eq!(key.frequency(), Frequency::Quarter);
        assert_eq!(key.year(), 2023);
    }

    #[test]
    fn test_bucket_serializes_key_as_string() {
        let mut bucket = Bucket::empty(quarter(2024, 3));
        bucket.add(dec!(400.12));

        let json = serde_json::to_value(&bucket).unwrap();
        assert_eq!(json["key"], "2024-Q3");
    }

    #[test]
    fn test_bucket_accumulates() {
        let mut bucket = Bucket::empty(BucketKey::Year(2024));
        bucket.add(dec!(50.12));
        bucket.add(dec!(-30.45));
        assert_eq!(bucket.sum, dec!(19.67));
    }
}
