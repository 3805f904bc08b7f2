//! PnL 차트 CLI.
//!
//! # 사용 예시
//!
//! ```bash
//! # 샘플 데이터를 월별 누적+기간 차트로 보기
//! pnl chart -F month
//!
//! # JSON 관측치 파일을 분기별 막대 차트 JSON으로 출력
//! pnl chart -i data/pnl.json -F quarter -v periodic --format json
//!
//! # 버킷 키 레이블 확인
//! pnl label 2024-W3 -F week
//!
//! # 샘플 데이터셋 내보내기
//! pnl sample > data/pnl.json
//! ```

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::error;

use pnl_cli::commands::chart::{run_chart, ChartCommandConfig, OutputFormat};
use pnl_cli::commands::label::run_label;
use pnl_cli::commands::sample::run_sample;
use pnl_core::{init_logging, AppConfig, Frequency, LogConfig, ViewMode, DEFAULT_CONFIG_PATH};

#[derive(Parser)]
#[command(name = "pnl")]
#[command(about = "PnL chart CLI - 일별 손익을 기간별로 집계해 차트 데이터로 출력", long_about = None)]
#[command(version)]
struct Cli {
    /// 설정 파일 경로
    #[arg(short, long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// 손익 차트 데이터 출력
    Chart {
        /// 관측치 JSON 파일 ([{"dt": "2024-01-01", "daily_pnl_usd": 50.12}, ...])
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// 집계 주기 (day, week, month, quarter, year). 기본: 설정 파일
        #[arg(short = 'F', long)]
        frequency: Option<String>,

        /// 표시 모드 (cumulative, periodic, combined). 기본: 설정 파일
        #[arg(short, long)]
        view: Option<String>,

        /// 출력 형식 (table, json)
        #[arg(long, default_value = "table")]
        format: String,
    },

    /// 버킷 키 또는 날짜를 표시 레이블로 변환
    Label {
        /// 버킷 키 또는 날짜 (예: 2024-Q3, 2024-1, 2024-01-05)
        key: String,

        /// 집계 주기
        #[arg(short = 'F', long, default_value = "day")]
        frequency: String,
    },

    /// 샘플 데이터셋을 JSON으로 출력
    Sample,
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let app_config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("Failed to load config {}", cli.config.display()))?;

    init_logging(LogConfig::from_settings(&app_config.logging)?)?;

    let result = match cli.command {
        Commands::Chart {
            input,
            frequency,
            view,
            format,
        } => {
            let frequency = match frequency {
                Some(name) => name.parse::<Frequency>()?,
                None => app_config.chart.frequency,
            };
            let view_mode = match view {
                Some(name) => name.parse::<ViewMode>()?,
                None => app_config.chart.view_mode,
            };

            let config = ChartCommandConfig {
                input,
                frequency,
                view_mode,
                format: OutputFormat::parse(&format)?,
            };
            run_chart(&config)
        }
        Commands::Label { key, frequency } => {
            let frequency = frequency.parse::<Frequency>()?;
            Ok(run_label(&key, frequency))
        }
        Commands::Sample => run_sample(),
    };

    match result {
        Ok(output) => {
            println!("{}", output);
            Ok(())
        }
        Err(e) => {
            error!(error = %e, "Command failed");
            Err(e)
        }
    }
}
