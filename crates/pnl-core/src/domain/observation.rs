//! 일별 손익 관측치와 수집 경계.
//!
//! 외부에서 들어오는 레코드는 `{ "dt": "YYYY-MM-DD", "daily_pnl_usd": 12.34 }` 형태이며,
//! 이 모듈에서 고정된 [`RawObservation`]으로 변환된 뒤에만 코어로 전달됩니다.
//! 알 수 없는 필드는 무시됩니다.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{PnlError, PnlResult};

/// 수집 레코드의 날짜 형식.
pub const OBSERVATION_DATE_FORMAT: &str = "%Y-%m-%d";

/// 하루치 손익 관측치.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawObservation {
    /// 거래일
    pub date: NaiveDate,
    /// 당일 손익 (USD)
    pub value: Decimal,
}

impl RawObservation {
    /// 새 관측치를 생성합니다.
    pub fn new(date: NaiveDate, value: Decimal) -> Self {
        Self { date, value }
    }
}

/// 수집 경계의 관측치 레코드 (와이어 형태).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObservationRecord {
    /// 거래일 (`YYYY-MM-DD`)
    pub dt: String,
    /// 당일 손익 (USD)
    pub daily_pnl_usd: Decimal,
}

impl TryFrom<ObservationRecord> for RawObservation {
    type Error = PnlError;

    fn try_from(record: ObservationRecord) -> Result<Self, Self::Error> {
        let dt = record.dt.trim();
        let date = NaiveDate::parse_from_str(dt, OBSERVATION_DATE_FORMAT)
            .map_err(|_| PnlError::InvalidInput(format!("날짜 형식이 아닙니다: {}", dt)))?;

        Ok(RawObservation::new(date, record.daily_pnl_usd))
    }
}

impl From<&RawObservation> for ObservationRecord {
    fn from(observation: &RawObservation) -> Self {
        Self {
            dt: observation.date.format(OBSERVATION_DATE_FORMAT).to_string(),
            daily_pnl_usd: observation.value,
        }
    }
}

/// JSON 배열에서 관측치를 파싱합니다.
///
/// 날짜가 `YYYY-MM-DD`가 아닌 레코드가 하나라도 있으면 전체 입력을 거부합니다.
pub fn parse_observations(json: &str) -> PnlResult<Vec<RawObservation>> {
    let records: Vec<ObservationRecord> = serde_json::from_str(json)?;

    records.into_iter().map(RawObservation::try_from).collect()
}

/// JSON 파일에서 관측치를 읽습니다.
pub fn load_observations_file<P: AsRef<Path>>(path: P) -> PnlResult<Vec<RawObservation>> {
    let json = std::fs::read_to_string(path)?;
    parse_observations(&json)
}

/// 관측치를 JSON 레코드 배열로 직렬화합니다.
pub fn observations_to_json(observations: &[RawObservation]) -> PnlResult<String> {
    let records: Vec<ObservationRecord> =
        observations.iter().map(ObservationRecord::from).collect();
    Ok(serde_json::to_string_pretty(&records)?)
}
