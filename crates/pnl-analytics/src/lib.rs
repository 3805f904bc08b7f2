//! 손익 시계열 집계 엔진.
//!
//! 이 크레이트는 다음을 제공합니다:
//! - 기간 집계 (일/주/월/분기/연)
//! - 기간 레이블 포맷
//! - 누적 손익 및 양수/음수 분할 시리즈 파생
//! - 렌더링용 차트 데이터 (표시 모드, 툴팁, 요약)
//!
//! # 파이프라인
//!
//! ```text
//! RawObservation[] → aggregate → Bucket[] → derive (format_label) → ChartPoint[] → 렌더러
//! ```
//!
//! 세 단계 모두 입력만으로 결과가 결정되는 순수 함수이며 호출 간 상태를 공유하지 않습니다.

pub mod aggregate;
pub mod calendar;
pub mod chart;
pub mod derive;
pub mod label;

pub use aggregate::aggregate;
pub use calendar::{period_key, period_start, quarter_of, week_number, week_start};
pub use chart::{ChartSummary, PnlChart, SeriesKind, Tooltip, EMPTY_CHART_MESSAGE};
pub use derive::derive;
pub use label::{
    date_label, format_cumulative_amount, format_label, format_period_amount, parse_calendar_date,
    DateParse,
};
