//! tracing 구독자 초기화.
//!
//! `[logging]` 설정 섹션(또는 `PNL__LOGGING__*` 환경 변수)에서 형식과 레벨을 읽습니다.
//! `RUST_LOG`가 설정되어 있으면 설정 파일의 레벨보다 우선합니다.
//!
//! 형식:
//! - **pretty**: 터미널용 여러 줄 형식
//! - **json**: 로그 수집기용 JSON 한 줄 형식
//! - **compact**: 간결한 한 줄 형식

use crate::config::LoggingConfig;
use crate::error::{PnlError, PnlResult};
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

/// 로그 출력 형식.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// 터미널용 여러 줄 형식
    #[default]
    Pretty,
    /// JSON 한 줄 형식
    Json,
    /// 간결한 한 줄 형식
    Compact,
}

impl std::str::FromStr for LogFormat {
    type Err = PnlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pretty" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            "compact" => Ok(Self::Compact),
            _ => Err(PnlError::Config(format!("알 수 없는 로그 형식: {}", s))),
        }
    }
}

/// 검증된 로깅 설정.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// 기본 레벨 필터 (`RUST_LOG`가 없을 때 사용)
    pub level: String,
    /// 출력 형식
    pub format: LogFormat,
    /// `pnl_chart` 등 파이프라인 span의 종료 이벤트(소요 시간) 출력 여부
    pub span_events: bool,
}

impl LogConfig {
    /// `[logging]` 설정 섹션을 검증해 생성합니다.
    ///
    /// 알 수 없는 형식 이름은 `PnlError::Config`로 거부합니다.
    pub fn from_settings(settings: &LoggingConfig) -> PnlResult<Self> {
        Ok(Self {
            level: settings.level.clone(),
            format: settings.format.parse()?,
            span_events: settings.span_events,
        })
    }

    fn filter(&self) -> PnlResult<EnvFilter> {
        if let Ok(filter) = EnvFilter::try_from_default_env() {
            return Ok(filter);
        }
        EnvFilter::try_new(&self.level).map_err(|e| PnlError::Config(e.to_string()))
    }
}

/// 전역 tracing 구독자를 설치합니다.
///
/// 프로세스당 한 번만 성공합니다. 두 번째 호출은 `PnlError::Config`를 반환합니다.
///
/// ```no_run
/// use pnl_core::{init_logging, AppConfig, LogConfig};
///
/// let app = AppConfig::load_default().unwrap();
/// init_logging(LogConfig::from_settings(&app.logging).unwrap()).unwrap();
/// ```
pub fn init_logging(config: LogConfig) -> PnlResult<()> {
    let env_filter = config.filter()?;

    let span_events = if config.span_events {
        FmtSpan::CLOSE
    } else {
        FmtSpan::NONE
    };

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_span_events(span_events);

    let registry = tracing_subscriber::registry().with(env_filter);

    let installed = match config.format {
        LogFormat::Pretty => registry.with(fmt_layer.pretty()).try_init(),
        LogFormat::Json => registry.with(fmt_layer.json()).try_init(),
        LogFormat::Compact => registry.with(fmt_layer.compact()).try_init(),
    };
    installed.map_err(|e| PnlError::Config(e.to_string()))?;

    tracing::debug!(
        format = ?config.format,
        level = %config.level,
        span_events = config.span_events,
        "Logging initialized"
    );

    Ok(())
}

/// 주기와 표시 모드를 담은 집계 파이프라인 span.
///
/// `span_events`가 켜져 있으면 span 종료 시 소요 시간이 기록됩니다.
#[macro_export]
macro_rules! pipeline_span {
    ($name:expr, $frequency:expr, $view_mode:expr) => {
        tracing::info_span!($name, frequency = %$frequency, view_mode = %$view_mode)
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(level: &str, format: &str) -> LoggingConfig {
        LoggingConfig {
            level: level.to_string(),
            format: format.to_string(),
            span_events: false,
        }
    }

    #[test]
    fn test_log_format_from_str() {
        assert_eq!("pretty".parse::<LogFormat>().unwrap(), LogFormat::Pretty);
        assert_eq!("json".parse::<LogFormat>().unwrap(), LogFormat::Json);
        assert_eq!("compact".parse::<LogFormat>().unwrap(), LogFormat::Compact);
        assert_eq!("PRETTY".parse::<LogFormat>().unwrap(), LogFormat::Pretty);
    }

    #[test]
    fn test_unknown_format_is_config_error() {
        let err = "fancy".parse::<LogFormat>().unwrap_err();
        assert!(matches!(err, PnlError::Config(_)));

        let result = LogConfig::from_settings(&settings("warn", "fancy"));
        assert!(matches!(result, Err(PnlError::Config(_))));
    }

    #[test]
    fn test_log_config_from_settings() {
        let mut logging = settings("debug", "json");
        logging.span_events = true;

        let config = LogConfig::from_settings(&logging).unwrap();
        assert_eq!(config.level, "debug");
        assert_eq!(config.format, LogFormat::Json);
        assert!(config.span_events);
    }

    #[test]
    fn test_default_settings_are_valid() {
        let config = LogConfig::from_settings(&LoggingConfig::default()).unwrap();
        assert_eq!(config.format, LogFormat::Pretty);
        assert!(!config.span_events);
    }
}
