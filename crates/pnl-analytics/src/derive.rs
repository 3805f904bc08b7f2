//! 집계된 버킷에서 차트 시리즈를 파생합니다.

use pnl_core::{round_amount, AmountExt, Bucket, ChartPoint, Frequency};
use rust_decimal::Decimal;
use tracing::debug;

use crate::label::{format_cumulative_amount, format_label, format_period_amount};

/// 시간순 버킷을 차트 포인트로 변환합니다.
///
/// 한 번의 순회로 누적 손익을 계산합니다. 누적 합계는 반올림하지 않은 값으로
/// 쌓고, 각 포인트를 내보낼 때만 소수점 2자리로 반올림합니다. 양수/음수 분할은
/// 반올림된 기간 값에서 계산하므로 `positive_part + negative_part == period_value`가
/// 정확히 성립합니다.
pub fn derive(buckets: &[Bucket], frequency: Frequency) -> Vec<ChartPoint> {
    let mut cumulative = Decimal::ZERO;

    let points: Vec<ChartPoint> = buckets
        .iter()
        .map(|bucket| {
            cumulative += bucket.sum;

            let period_value = round_amount(bucket.sum);
            let cumulative_value = round_amount(cumulative);

            ChartPoint {
                key: bucket.key,
                label: format_label(&bucket.key.to_string(), frequency),
                period_value,
                cumulative_value,
                positive_part: period_value.positive_part(),
                negative_part: period_value.negative_part(),
                formatted_period: format_period_amount(bucket.sum),
                formatted_cumulative: format_cumulative_amount(cumulative),
            }
        })
        .collect();

    let total = round_amount(cumulative);
    debug!(
        frequency = %frequency,
        points = points.len(),
        total = %total,
        "Derived PnL chart series"
    );

    points
}
