//! 설정 관리.
//!
//! 이 모듈은 애플리케이션 설정을 정의하고 관리합니다.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::PnlResult;
use crate::types::{Frequency, ViewMode};

type Builder = config::ConfigBuilder<config::builder::DefaultState>;

/// 기본 설정 파일 경로.
pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

/// 환경 변수 오버라이드 접두사 (예: `PNL__CHART__VIEW_MODE=periodic`).
pub const ENV_PREFIX: &str = "PNL";

/// 애플리케이션 설정.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AppConfig {
    /// 차트 설정
    #[serde(default)]
    pub chart: ChartConfig,
    /// 로깅 설정
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// 차트 설정.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ChartConfig {
    /// 초기 집계 주기
    #[serde(default)]
    pub frequency: Frequency,
    /// 초기 표시 모드
    #[serde(default)]
    pub view_mode: ViewMode,
}

/// 로깅 설정.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// 로그 레벨
    pub level: String,
    /// 로그 형식 (pretty, json, compact)
    pub format: String,
    /// 파이프라인 span 종료 시 소요 시간 출력 여부
    #[serde(default)]
    pub span_events: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
            span_events: false,
        }
    }
}

impl AppConfig {
    /// 파일과 환경 변수에서 설정을 로드합니다.
    pub fn load<P: AsRef<Path>>(path: P) -> PnlResult<Self> {
        let settings = Self::builder()?
            .add_source(config::File::from(path.as_ref()))
            .add_source(Self::environment())
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    /// 설정 파일이 없으면 기본값과 환경 변수만으로 설정을 구성합니다.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> PnlResult<Self> {
        let settings = Self::builder()?
            .add_source(config::File::from(path.as_ref()).required(false))
            .add_source(Self::environment())
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    /// 기본 경로에서 설정을 로드합니다.
    pub fn load_default() -> PnlResult<Self> {
        Self::load_or_default(DEFAULT_CONFIG_PATH)
    }

    fn builder() -> Result<Builder, config::ConfigError> {
        let defaults = LoggingConfig::default();

        config::Config::builder()
            .set_default("chart.frequency", Frequency::default().as_str())?
            .set_default("chart.view_mode", ViewMode::default().as_str())?
            .set_default("logging.level", defaults.level)?
            .set_default("logging.format", defaults.format)?
            .set_default("logging.span_events", defaults.span_events)
    }

    fn environment() -> config::Environment {
        config::Environment::with_prefix(ENV_PREFIX)
            .separator("__")
            .try_parsing(true)
    }
}
