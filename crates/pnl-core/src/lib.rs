//! # PnL Core
//!
//! PnL 차트 엔진의 핵심 도메인 모델 및 타입을 제공합니다.
//!
//! 이 크레이트는 집계 엔진과 표시 계층이 공유하는 기본 타입을 제공합니다:
//! - 일별 손익 관측치와 수집(ingestion) 경계
//! - 집계 주기(Frequency) 및 표시 모드(ViewMode)
//! - 버킷 키, 버킷, 차트 포인트
//! - 샘플 데이터셋
//! - 설정 관리
//! - 로깅 인프라

pub mod config;
pub mod domain;
pub mod error;
pub mod logging;
pub mod types;

pub use config::*;
pub use domain::*;
pub use error::*;
pub use logging::*;
pub use types::*;
