//! 샘플 데이터셋 출력.

use anyhow::Result;
use pnl_core::{observations_to_json, sample_observations};

/// 샘플 관측치를 `chart --input`이 읽을 수 있는 JSON으로 반환합니다.
pub fn run_sample() -> Result<String> {
    Ok(observations_to_json(&sample_observations())?)
}
