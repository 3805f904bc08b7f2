//! 일별 손익 관측치를 기간 버킷으로 집계합니다.

use std::collections::BTreeMap;

use pnl_core::{Bucket, BucketKey, Frequency, RawObservation};
use tracing::debug;

use crate::calendar::period_key;

/// 관측치를 주기별 버킷으로 묶고 기간별 손익을 합산합니다.
///
/// 입력 순서와 관계없이 결과는 버킷 시작일 기준 오름차순입니다.
/// 같은 날짜의 관측치가 여러 개면 (일별 주기 포함) 합산됩니다.
/// 빈 입력은 빈 결과를 반환합니다.
pub fn aggregate(observations: &[RawObservation], frequency: Frequency) -> Vec<Bucket> {
    if observations.is_empty() {
        return Vec::new();
    }

    let mut sorted: Vec<&RawObservation> = observations.iter().collect();
    sorted.sort_by_key(|observation| observation.date);

    // 호출 범위 안에서만 사는 누적 맵. 키 순서 = 시간 순서
    let mut buckets: BTreeMap<BucketKey, Bucket> = BTreeMap::new();
    for observation in sorted {
        let key = period_key(observation.date, frequency);
        buckets
            .entry(key)
            .or_insert_with(|| Bucket::empty(key))
            .add(observation.value);
    }

    debug!(
        frequency = %frequency,
        observations = observations.len(),
        buckets = buckets.len(),
        "Aggregated PnL observations"
    );

    buckets.into_values().collect()
}
