//! 정적 샘플 데이터셋.
//!
//! 외부 데이터 소스가 연결되기 전까지 사용하는 2024년 일별 손익 데이터입니다.
//! 1월은 매일, 2월 이후는 월/분기 집계를 확인할 수 있도록 드문드문 포함합니다.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::RawObservation;

const SAMPLE_PNL: [((i32, u32, u32), Decimal); 42] = [
    ((2024, 1, 1), dec!(50.12)),
    ((2024, 1, 2), dec!(-30.45)),
    ((2024, 1, 3), dec!(80.67)),
    ((2024, 1, 4), dec!(-15.89)),
    ((2024, 1, 5), dec!(120.34)),
    ((2024, 1, 6), dec!(-90.23)),
    ((2024, 1, 7), dec!(200.78)),
    ((2024, 1, 8), dec!(-50.12)),
    ((2024, 1, 9), dec!(75.45)),
    ((2024, 1, 10), dec!(160.23)),
    ((2024, 1, 11), dec!(-110.34)),
    ((2024, 1, 12), dec!(140.67)),
    ((2024, 1, 13), dec!(-35.78)),
    ((2024, 1, 14), dec!(95.89)),
    ((2024, 1, 15), dec!(-25.12)),
    ((2024, 1, 16), dec!(210.34)),
    ((2024, 1, 17), dec!(-190.45)),
    ((2024, 1, 18), dec!(300.23)),
    ((2024, 1, 19), dec!(-220.56)),
    ((2024, 1, 20), dec!(180.67)),
    ((2024, 1, 21), dec!(275.78)),
    ((2024, 1, 22), dec!(-140.12)),
    ((2024, 1, 23), dec!(90.45)),
    ((2024, 1, 24), dec!(310.23)),
    ((2024, 1, 25), dec!(-290.78)),
    ((2024, 1, 26), dec!(200.89)),
    ((2024, 1, 27), dec!(-150.34)),
    ((2024, 2, 1), dec!(180.45)),
    ((2024, 2, 5), dec!(-120.67)),
    ((2024, 2, 10), dec!(250.34)),
    ((2024, 2, 15), dec!(-90.56)),
    ((2024, 2, 20), dec!(310.78)),
    ((2024, 2, 25), dec!(-150.23)),
    ((2024, 3, 1), dec!(220.56)),
    ((2024, 3, 10), dec!(-180.34)),
    ((2024, 3, 20), dec!(290.67)),
    ((2024, 4, 1), dec!(-120.45)),
    ((2024, 4, 15), dec!(340.23)),
    ((2024, 7, 1), dec!(400.12)),
    ((2024, 7, 15), dec!(-250.67)),
    ((2024, 10, 1), dec!(380.45)),
    ((2024, 10, 15), dec!(-200.34)),
];

/// 샘플 일별 손익 관측치를 반환합니다 (날짜 오름차순).
pub fn sample_observations() -> Vec<RawObservation> {
    SAMPLE_PNL
        .iter()
        .filter_map(|&((year, month, day), value)| {
            NaiveDate::from_ymd_opt(year, month, day).map(|date| RawObservation::new(date, value))
        })
        .collect()
}
