//! 손익 차트 데이터 구조
//!
//! 렌더링 계층(웹 대시보드, CLI)이 그대로 그릴 수 있는 차트 데이터를 생성합니다.
//!
//! # 제공 시리즈
//!
//! - 누적 손익 선 (Cumulative)
//! - 기간별 양수/음수 막대 (Periodic)
//! - 둘 다 (Combined)

use pnl_core::{pipeline_span, BucketKey, ChartPoint, Frequency, RawObservation, ViewMode};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::aggregate::aggregate;
use crate::derive::derive;

/// 데이터가 없을 때 렌더러가 표시하는 문구.
pub const EMPTY_CHART_MESSAGE: &str = "No data available";

/// 렌더러가 그리는 시리즈 종류.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SeriesKind {
    /// 누적 손익 선
    CumulativeLine,
    /// 양수 기간 막대
    PositiveBars,
    /// 음수 기간 막대
    NegativeBars,
}

/// 포인트 하나의 툴팁 내용.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tooltip {
    /// 기간 레이블
    pub label: String,

    /// 기간 손익 문자열
    pub period: String,

    /// 기간 손익이 0 이상인지 (색상 결정용)
    pub period_non_negative: bool,

    /// 누적 손익 문자열 (Periodic 모드에서는 없음)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cumulative: Option<String>,

    /// 누적 손익이 0 이상인지 (색상 결정용)
    pub cumulative_non_negative: bool,
}

/// 차트 전체 요약 (합계 수준의 정보만 제공).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartSummary {
    /// 전체 손익 합계
    pub total: Decimal,

    /// 손익이 가장 큰 기간의 레이블
    #[serde(skip_serializing_if = "Option::is_none")]
    pub best_period: Option<String>,

    /// 손익이 가장 작은 기간의 레이블
    #[serde(skip_serializing_if = "Option::is_none")]
    pub worst_period: Option<String>,

    /// 이익 기간 수
    pub positive_periods: usize,

    /// 손실 기간 수
    pub negative_periods: usize,
}

/// 렌더링 준비가 끝난 손익 차트.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PnlChart {
    /// 집계 주기
    frequency: Frequency,

    /// 표시 모드
    view_mode: ViewMode,

    /// 시간순 차트 포인트
    points: Vec<ChartPoint>,
}

impl PnlChart {
    /// 원시 관측치에서 차트를 생성합니다.
    ///
    /// 주기나 표시 모드가 바뀔 때마다 다시 호출해도 될 만큼 가볍습니다.
    /// 이전 결과에 의존하지 않습니다.
    pub fn build(
        observations: &[RawObservation],
        frequency: Frequency,
        view_mode: ViewMode,
    ) -> Self {
        let _span = pipeline_span!("pnl_chart", frequency, view_mode).entered();

        let buckets = aggregate(observations, frequency);
        let points = derive(&buckets, frequency);

        Self {
            frequency,
            view_mode,
            points,
        }
    }

    /// 집계 주기.
    pub fn frequency(&self) -> Frequency {
        self.frequency
    }

    /// 표시 모드.
    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    /// 시간순 차트 포인트.
    pub fn points(&self) -> &[ChartPoint] {
        &self.points
    }

    /// 포인트 수.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// 그릴 데이터가 없는지 확인합니다.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// 같은 포인트를 다른 표시 모드로 봅니다 (재집계 없음).
    pub fn with_view_mode(mut self, view_mode: ViewMode) -> Self {
        self.view_mode = view_mode;
        self
    }

    /// 현재 표시 모드에서 그려야 하는 시리즈.
    pub fn visible_series(&self) -> Vec<SeriesKind> {
        let mut series = Vec::with_capacity(3);
        if self.view_mode.shows_period_bars() {
            series.push(SeriesKind::PositiveBars);
            series.push(SeriesKind::NegativeBars);
        }
        if self.view_mode.shows_cumulative_line() {
            series.push(SeriesKind::CumulativeLine);
        }
        series
    }

    /// 레이블로 포인트를 찾아 툴팁 내용을 만듭니다.
    ///
    /// 같은 레이블이 여러 번 나오면 (예: 여러 해에 걸친 일별 차트의 `Jan 1`)
    /// 가장 이른 포인트를 사용합니다. 특정 포인트는 [`PnlChart::tooltip_for_key`]로 찾습니다.
    pub fn tooltip(&self, label: &str) -> Option<Tooltip> {
        let point = self.points.iter().find(|p| p.label == label)?;
        Some(self.tooltip_for(point))
    }

    /// 버킷 키로 포인트를 찾아 툴팁 내용을 만듭니다.
    pub fn tooltip_for_key(&self, key: &BucketKey) -> Option<Tooltip> {
        let point = self.points.iter().find(|p| p.key == *key)?;
        Some(self.tooltip_for(point))
    }

    fn tooltip_for(&self, point: &ChartPoint) -> Tooltip {
        let cumulative = self
            .view_mode
            .shows_cumulative_in_tooltip()
            .then(|| point.formatted_cumulative.clone());

        Tooltip {
            label: point.label.clone(),
            period: point.formatted_period.clone(),
            period_non_negative: point.period_value >= Decimal::ZERO,
            cumulative,
            cumulative_non_negative: point.cumulative_value >= Decimal::ZERO,
        }
    }

    /// 합계 수준의 요약을 계산합니다.
    pub fn summary(&self) -> ChartSummary {
        let total = self
            .points
            .last()
            .map(|p| p.cumulative_value)
            .unwrap_or(Decimal::ZERO);

        // 동점이면 먼저 나온 기간
        let best = self.points.iter().reduce(|best, p| {
            if p.period_value > best.period_value {
                p
            } else {
                best
            }
        });
        let worst = self.points.iter().reduce(|worst, p| {
            if p.period_value < worst.period_value {
                p
            } else {
                worst
            }
        });

        ChartSummary {
            total,
            best_period: best.map(|p| p.label.clone()),
            worst_period: worst.map(|p| p.label.clone()),
            positive_periods: self.points.iter().filter(|p| p.is_gain()).count(),
            negative_periods: self.points.iter().filter(|p| p.is_loss()).count(),
        }
    }
}
