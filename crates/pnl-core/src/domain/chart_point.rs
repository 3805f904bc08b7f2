//! 렌더링 계층이 소비하는 차트 포인트.

use rust_decimal::Decimal;
use serde::Serialize;

use super::BucketKey;

/// 차트 데이터 포인트 (기간 하나).
///
/// 모든 금액은 소수점 2자리로 반올림된 표시용 값입니다.
/// `positive_part + negative_part == period_value`가 항상 성립합니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartPoint {
    /// 기간 키
    pub key: BucketKey,

    /// 표시 레이블 (X축, 툴팁 조회 키)
    pub label: String,

    /// 기간 손익
    pub period_value: Decimal,

    /// 첫 기간부터 이 기간까지의 누적 손익
    pub cumulative_value: Decimal,

    /// 양수 막대 값 (`max(period_value, 0)`)
    pub positive_part: Decimal,

    /// 음수 막대 값 (`min(period_value, 0)`)
    pub negative_part: Decimal,

    /// 툴팁용 기간 손익 문자열 (예: "+$50.12")
    pub formatted_period: String,

    /// 툴팁용 누적 손익 문자열 (예: "$19.67")
    pub formatted_cumulative: String,
}

impl ChartPoint {
    /// 이익 기간인지 확인합니다.
    pub fn is_gain(&self) -> bool {
        self.period_value > Decimal::ZERO
    }

    /// 손실 기간인지 확인합니다.
    pub fn is_loss(&self) -> bool {
        self.period_value < Decimal::ZERO
    }
}
