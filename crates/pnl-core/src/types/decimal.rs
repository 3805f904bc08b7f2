//! 손익 금액을 위한 Decimal 유틸리티.
//!
//! 내부 누적 합계는 반올림하지 않은 값으로 유지하고, 표시 시점에만
//! [`round_amount`]로 소수점 2자리까지 반올림합니다.

use rust_decimal::{Decimal, RoundingStrategy};

/// 손익 금액 타입 (USD).
pub type Amount = Decimal;

/// 표시용 소수점 자릿수.
pub const DISPLAY_DECIMAL_PLACES: u32 = 2;

/// 표시용으로 금액을 소수점 2자리로 반올림합니다 (0.5는 0에서 먼 쪽으로).
pub fn round_amount(amount: Amount) -> Amount {
    amount.round_dp_with_strategy(
        DISPLAY_DECIMAL_PLACES,
        RoundingStrategy::MidpointAwayFromZero,
    )
}

/// 손익 금액 연산을 위한 확장 트레이트.
pub trait AmountExt {
    /// 0보다 큰 부분 (`max(self, 0)`).
    fn positive_part(&self) -> Amount;

    /// 0보다 작은 부분 (`min(self, 0)`).
    fn negative_part(&self) -> Amount;
}

impl AmountExt for Decimal {
    fn positive_part(&self) -> Amount {
        (*self).max(Decimal::ZERO)
    }

    fn negative_part(&self) -> Amount {
        (*self).min(Decimal::ZERO)
    }
}
