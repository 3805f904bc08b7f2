//! 단일 키/날짜 레이블 변환.

use pnl_analytics::format_label;
use pnl_core::Frequency;

/// 키 또는 날짜 문자열을 주기에 맞는 레이블로 변환합니다.
pub fn run_label(input: &str, frequency: Frequency) -> String {
    format_label(input, frequency)
}
