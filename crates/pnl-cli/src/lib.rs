//! PnL 차트 CLI 도구 모음.
//!
//! 이 crate는 다음 기능을 제공합니다:
//! - 관측치 JSON 또는 샘플 데이터로 차트 표/JSON 출력
//! - 단일 키/날짜 레이블 변환
//! - 샘플 데이터셋 내보내기

pub mod commands;

pub use commands::*;
