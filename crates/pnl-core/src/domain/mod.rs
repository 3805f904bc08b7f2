//! 손익 집계를 위한 도메인 모델.

mod bucket;
mod chart_point;
mod observation;
mod sample;

pub use bucket::*;
pub use chart_point::*;
pub use observation::*;
pub use sample::*;
