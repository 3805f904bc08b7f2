//! 집계 엔진과 표시 계층이 공유하는 공통 타입.

mod decimal;
mod frequency;
mod view_mode;

pub use decimal::*;
pub use frequency::*;
pub use view_mode::*;
