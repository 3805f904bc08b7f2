//! 차트 표시 모드 정의.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::PnlError;

/// 차트 표시 모드.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    /// 누적 손익 선 차트만
    Cumulative,
    /// 기간별 손익 막대 차트만
    Periodic,
    /// 누적 선 + 기간별 막대
    #[default]
    Combined,
}

impl ViewMode {
    /// 설정/CLI에서 사용하는 이름.
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewMode::Cumulative => "cumulative",
            ViewMode::Periodic => "periodic",
            ViewMode::Combined => "combined",
        }
    }

    /// 누적 손익 선을 그리는지 여부.
    pub fn shows_cumulative_line(&self) -> bool {
        matches!(self, ViewMode::Cumulative | ViewMode::Combined)
    }

    /// 양수/음수 기간 막대를 그리는지 여부.
    pub fn shows_period_bars(&self) -> bool {
        matches!(self, ViewMode::Periodic | ViewMode::Combined)
    }

    /// 툴팁에 누적 손익을 표시하는지 여부.
    pub fn shows_cumulative_in_tooltip(&self) -> bool {
        !matches!(self, ViewMode::Periodic)
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ViewMode {
    type Err = PnlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "cumulative" => Ok(ViewMode::Cumulative),
            "periodic" => Ok(ViewMode::Periodic),
            "combined" => Ok(ViewMode::Combined),
            _ => Err(PnlError::InvalidViewMode(s.to_string())),
        }
    }
}
