//! PnL 차트 엔진의 에러 타입.
//!
//! 집계/포맷/파생 코어는 데이터 품질 문제(잘못된 날짜, 중복 날짜, 빈 입력)로
//! 실패하지 않습니다. 이 모듈의 에러는 수집 경계(파일, JSON), 설정, 그리고
//! 알 수 없는 주기/표시 모드 이름에서만 발생합니다.

use thiserror::Error;

/// 핵심 PnL 에러.
#[derive(Debug, Error)]
pub enum PnlError {
    /// 알 수 없는 집계 주기
    #[error("잘못된 집계 주기: {0}")]
    InvalidFrequency(String),

    /// 알 수 없는 표시 모드
    #[error("잘못된 표시 모드: {0}")]
    InvalidViewMode(String),

    /// 잘못된 입력 (수집 경계에서 거부된 레코드)
    #[error("잘못된 입력: {0}")]
    InvalidInput(String),

    /// 설정 에러
    #[error("설정 에러: {0}")]
    Config(String),

    /// 직렬화 에러
    #[error("직렬화 에러: {0}")]
    Serialization(String),

    /// 입출력 에러
    #[error("입출력 에러: {0}")]
    Io(String),
}

/// PnL 작업을 위한 Result 타입.
pub type PnlResult<T> = Result<T, PnlError>;

impl From<serde_json::Error> for PnlError {
    fn from(err: serde_json::Error) -> Self {
        PnlError::Serialization(err.to_string())
    }
}

impl From<config::ConfigError> for PnlError {
    fn from(err: config::ConfigError) -> Self {
        PnlError::Config(err.to_string())
    }
}

impl From<std::io::Error> for PnlError {
    fn from(err: std::io::Error) -> Self {
        PnlError::Io(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: PnlError = io_err.into();
        assert!(matches!(err, PnlError::Io(_)));
    }

    #[test]
    fn test_from_serde_json() {
        let json_err = serde_json::from_str::<Vec<u32>>("not json").unwrap_err();
        let err: PnlError = json_err.into();
        assert!(matches!(err, PnlError::Serialization(_)));
    }

    #[test]
    fn test_error_message() {
        let err = PnlError::InvalidFrequency("hourly".to_string());
        assert_eq!(err.to_string(), "잘못된 집계 주기: hourly");
    }
}
