//! CLI 명령어 구현 모듈.

pub mod chart;
pub mod label;
pub mod sample;
