//! 손익 차트 출력 기능.

use anyhow::{Context, Result};
use pnl_analytics::{PnlChart, EMPTY_CHART_MESSAGE};
use pnl_core::{load_observations_file, sample_observations, Frequency, RawObservation, ViewMode};
use std::path::PathBuf;
use tracing::info;

/// 차트 명령 설정.
#[derive(Debug)]
pub struct ChartCommandConfig {
    /// 관측치 JSON 파일 (없으면 샘플 데이터)
    pub input: Option<PathBuf>,
    /// 집계 주기
    pub frequency: Frequency,
    /// 표시 모드
    pub view_mode: ViewMode,
    /// 출력 형식
    pub format: OutputFormat,
}

/// 출력 형식.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
}

impl OutputFormat {
    pub fn parse(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "table" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            _ => Err(anyhow::anyhow!("Invalid format: {}. Use: table, json", s)),
        }
    }
}

/// 관측치를 불러옵니다.
fn load_observations(input: Option<&PathBuf>) -> Result<Vec<RawObservation>> {
    match input {
        Some(path) => {
            let observations = load_observations_file(path)
                .with_context(|| format!("Failed to load {}", path.display()))?;
            info!(path = %path.display(), count = observations.len(), "Loaded observations");
            Ok(observations)
        }
        None => {
            info!("No input given, using sample dataset");
            Ok(sample_observations())
        }
    }
}

/// 차트를 생성하고 출력 문자열을 반환합니다.
pub fn run_chart(config: &ChartCommandConfig) -> Result<String> {
    let observations = load_observations(config.input.as_ref())?;
    let chart = PnlChart::build(&observations, config.frequency, config.view_mode);

    match config.format {
        OutputFormat::Table => Ok(format_table(&chart)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&chart)?),
    }
}

/// 표시 모드에 맞는 열만 포함한 표를 만듭니다.
pub fn format_table(chart: &PnlChart) -> String {
    if chart.is_empty() {
        return EMPTY_CHART_MESSAGE.to_string();
    }

    let view_mode = chart.view_mode();
    let mut output = String::new();

    // 헤더
    output.push_str(&format!("{:<16}", "PERIOD"));
    if view_mode.shows_period_bars() {
        output.push_str(&format!(" {:>14}", "PNL"));
    }
    if view_mode.shows_cumulative_line() {
        output.push_str(&format!(" {:>14}", "CUMULATIVE"));
    }
    output.push('\n');
    output.push_str(&"-".repeat(46));
    output.push('\n');

    // 데이터
    for point in chart.points() {
        output.push_str(&format!("{:<16}", point.label));
        if view_mode.shows_period_bars() {
            output.push_str(&format!(" {:>14}", signed_period(point.period_value)));
        }
        if view_mode.shows_cumulative_line() {
            output.push_str(&format!(" {:>14}", point.formatted_cumulative));
        }
        output.push('\n');
    }

    // 요약
    let summary = chart.summary();
    output.push('\n');
    output.push_str(&format!(
        "Total: {} periods ({} up, {} down), PnL ${:.2}",
        chart.len(),
        summary.positive_periods,
        summary.negative_periods,
        summary.total
    ));
    if let (Some(best), Some(worst)) = (&summary.best_period, &summary.worst_period) {
        output.push_str(&format!("\nBest: {}  Worst: {}", best, worst));
    }

    output
}

/// 표에서는 색상이 없으므로 손실에도 부호를 붙입니다.
fn signed_period(value: rust_decimal::Decimal) -> String {
    if value.is_sign_negative() && !value.is_zero() {
        format!("-${:.2}", value.abs())
    } else {
        format!("+${:.2}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(
        frequency: Frequency,
        view_mode: ViewMode,
        format: OutputFormat,
    ) -> ChartCommandConfig {
        ChartCommandConfig {
            input: None,
            frequency,
            view_mode,
            format,
        }
    }

    #[test]
    fn test_output_format_parse() {
        assert_eq!(OutputFormat::parse("TABLE").unwrap(), OutputFormat::Table);
        assert_eq!(OutputFormat::parse("json").unwrap(), OutputFormat::Json);
        assert!(OutputFormat::parse("csv").is_err());
    }

    #[test]
    fn test_quarter_table_from_sample() {
        let cfg = config(Frequency::Quarter, ViewMode::Combined, OutputFormat::Table);
        let output = run_chart(&cfg).unwrap();

        assert!(output.contains("PNL"));
        assert!(output.contains("CUMULATIVE"));
        assert!(output.contains("Q1 2024"));
        assert!(output.contains("Q4 2024"));
        assert!(output.contains("Total: 4 periods"));
    }

    #[test]
    fn test_table_columns_follow_view_mode() {
        let cfg = config(Frequency::Month, ViewMode::Periodic, OutputFormat::Table);
        let periodic = run_chart(&cfg).unwrap();
        assert!(periodic.contains("PNL"));
        assert!(!periodic.contains("CUMULATIVE"));

        let cfg = config(Frequency::Month, ViewMode::Cumulative, OutputFormat::Table);
        let cumulative = run_chart(&cfg).unwrap();
        assert!(!cumulative.lines().next().unwrap().contains("PNL"));
        assert!(cumulative.contains("CUMULATIVE"));
    }

    #[test]
    fn test_json_output() {
        let cfg = config(Frequency::Year, ViewMode::Combined, OutputFormat::Json);
        let output = run_chart(&cfg).unwrap();
        let json: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(json["frequency"], "year");
        assert_eq!(json["points"][0]["label"], "2024");
    }

    #[test]
    fn test_empty_chart_message() {
        let chart = PnlChart::build(&[], Frequency::Day, ViewMode::Combined);
        assert_eq!(format_table(&chart), "No data available");
    }

    #[test]
    fn test_missing_input_file() {
        let mut cfg = config(Frequency::Day, ViewMode::Combined, OutputFormat::Table);
        cfg.input = Some(PathBuf::from("does/not/exist.json"));
        assert!(run_chart(&cfg).is_err());
    }

    #[test]
    fn test_signed_period() {
        use rust_decimal_macros::dec;
        assert_eq!(signed_period(dec!(12.5)), "+$12.50");
        assert_eq!(signed_period(dec!(-3.25)), "-$3.25");
        assert_eq!(signed_period(dec!(0)), "+$0.00");
    }
}
