//! Rounding helpers shared by both pricing engines.

use rust_decimal::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Round to specified decimal places using banker's rounding (ROUND_HALF_EVEN).
///
/// Banker's rounding rounds to the nearest even number when the value is exactly
/// halfway between two possibilities. This reduces cumulative rounding bias.
pub fn round_money(amount: Decimal, places: u32) -> Decimal {
    amount.round_dp_with_strategy(places, RoundingStrategy::MidpointNearestEven)
}

/// Round a duration up to the next quarter hour.
///
/// Labor is scheduled in 15-minute blocks, so estimates always round up.
pub fn round_up_to_quarter_hour(hours: Decimal) -> Decimal {
    (hours * dec!(4)).ceil() / dec!(4)
}
