//! 손익 집계 주기 정의.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::PnlError;

/// 일별 손익을 묶는 집계 주기.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    /// 일별 (집계 없음)
    #[default]
    Day,
    /// 주별 (일요일 시작, 비 ISO 주차)
    Week,
    /// 월별
    Month,
    /// 분기별
    Quarter,
    /// 연간
    Year,
}

impl Frequency {
    /// 세밀한 순서부터 나열한 모든 주기.
    pub const ALL: [Frequency; 5] = [
        Frequency::Day,
        Frequency::Week,
        Frequency::Month,
        Frequency::Quarter,
        Frequency::Year,
    ];

    /// 설정/CLI에서 사용하는 이름.
    pub fn as_str(&self) -> &'static str {
        match self {
            Frequency::Day => "day",
            Frequency::Week => "week",
            Frequency::Month => "month",
            Frequency::Quarter => "quarter",
            Frequency::Year => "year",
        }
    }

    /// 주기 선택 컨트롤에 표시되는 이름.
    pub fn display_name(&self) -> &'static str {
        match self {
            Frequency::Day => "By day",
            Frequency::Week => "By week",
            Frequency::Month => "By month",
            Frequency::Quarter => "By quarter",
            Frequency::Year => "By year",
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Frequency {
    type Err = PnlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "day" | "daily" => Ok(Frequency::Day),
            "week" | "weekly" => Ok(Frequency::Week),
            "month" | "monthly" => Ok(Frequency::Month),
            "quarter" | "quarterly" => Ok(Frequency::Quarter),
            "year" | "yearly" => Ok(Frequency::Year),
            _ => Err(PnlError::InvalidFrequency(s.to_string())),
        }
    }
}
