//! Flat-rate pricing engine (chart based).
//!
//! Deep cleans are priced from a fixed chart keyed on bedroom and bathroom
//! count. Standard cleans use an additive hours formula billed at the
//! service's hourly rate, and move-out cleans scale the standard formula by
//! 1.5x. This is the authoritative engine for customer-facing quotes.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::catalog::{Bedrooms, Frequency, ServiceType};
use super::rounding::round_up_to_quarter_hour;

/// Fallback when a (bedrooms, bathrooms) pair matches no chart entry
const DEEP_FALLBACK_HOURS: Decimal = dec!(8);
const DEEP_FALLBACK_PRICE: Decimal = dec!(400);

/// A computed flat-rate quote. Immutable snapshot of the inputs at one
/// point in time; recomputed whenever any input changes.
#[derive(Debug, Clone, PartialEq)]
pub struct FlatRateQuote {
    pub service: ServiceType,
    pub hours: Decimal,
    pub cleaners: u32,
    pub base_price: Decimal,
    pub discount_rate: Decimal,
    pub final_price: Decimal,
}

/// Deep-cleaning flat-rate chart. Bathroom counts of 3 or more collapse
/// into a single tier for 3-bedroom homes; 4- and 5-bedroom homes price
/// on bedrooms alone.
fn deep_cleaning_chart(bedrooms: Bedrooms, bathrooms: Decimal) -> Option<(Decimal, Decimal)> {
    match bedrooms {
        Bedrooms::Studio if bathrooms == dec!(1) => Some((dec!(4), dec!(230))),
        Bedrooms::One if bathrooms == dec!(1) => Some((dec!(6), dec!(320))),
        Bedrooms::Two if bathrooms == dec!(1) => Some((dec!(7), dec!(365))),
        Bedrooms::Two if bathrooms == dec!(2) => Some((dec!(8), dec!(415))),
        Bedrooms::Three if bathrooms == dec!(2) => Some((dec!(9), dec!(475))),
        Bedrooms::Three if bathrooms >= dec!(3) => Some((dec!(10), dec!(530))),
        Bedrooms::Four => Some((dec!(11), dec!(590))),
        Bedrooms::Five => Some((dec!(13), dec!(725))),
        _ => None,
    }
}

/// Estimated hours for a deep clean, with chart fallback
pub fn deep_cleaning_hours(bedrooms: Bedrooms, bathrooms: Decimal) -> Decimal {
    deep_cleaning_chart(bedrooms, bathrooms)
        .map(|(hours, _)| hours)
        .unwrap_or(DEEP_FALLBACK_HOURS)
}

/// Flat price for a deep clean, with chart fallback
pub fn deep_cleaning_price(bedrooms: Bedrooms, bathrooms: Decimal) -> Decimal {
    deep_cleaning_chart(bedrooms, bathrooms)
        .map(|(_, price)| price)
        .unwrap_or(DEEP_FALLBACK_PRICE)
}

/// Estimated hours for a standard clean.
///
/// Base is 3 hours for 1 bed / 1 bath (2.5 for a studio). Each bedroom
/// past the first adds 45 minutes; each bathroom past the first adds an
/// hour. Rounded up to the next quarter hour.
pub fn standard_hours(bedrooms: Bedrooms, bathrooms: Decimal) -> Decimal {
    let mut hours = match bedrooms {
        Bedrooms::Studio => dec!(2.5),
        _ => dec!(3),
    };

    let bedroom_count = bedrooms.count_equivalent();
    if bedroom_count > dec!(1) {
        hours += (bedroom_count - dec!(1)) * dec!(0.75);
    }

    if bathrooms > dec!(1) {
        hours += bathrooms - dec!(1);
    }

    round_up_to_quarter_hour(hours)
}

/// Estimated hours for a move-out clean: 1.5x the standard formula
pub fn moveout_hours(bedrooms: Bedrooms, bathrooms: Decimal) -> Decimal {
    round_up_to_quarter_hour(standard_hours(bedrooms, bathrooms) * dec!(1.5))
}

/// Estimated labor hours for any service
pub fn estimated_hours(service: ServiceType, bedrooms: Bedrooms, bathrooms: Decimal) -> Decimal {
    match service {
        ServiceType::Deep => deep_cleaning_hours(bedrooms, bathrooms),
        ServiceType::Standard => standard_hours(bedrooms, bathrooms),
        ServiceType::MoveOut => moveout_hours(bedrooms, bathrooms),
    }
}

/// Two cleaners are sent for anything larger than 1 bed / 1 bath
pub fn cleaner_count(bedrooms: Bedrooms, bathrooms: Decimal) -> u32 {
    match bedrooms {
        Bedrooms::Studio => 1,
        Bedrooms::One if bathrooms == dec!(1) => 1,
        _ => 2,
    }
}

/// Compute a flat-rate quote.
///
/// Deep cleans take their price from the chart; standard and move-out
/// cleans bill the service's hourly rate against the estimated hours. An
/// absent or unrecognized frequency means no discount, never an error.
pub fn compute_quote(
    service: ServiceType,
    bedrooms: Bedrooms,
    bathrooms: Decimal,
    frequency: Option<Frequency>,
) -> FlatRateQuote {
    let hours = estimated_hours(service, bedrooms, bathrooms);

    let base_price = match service {
        ServiceType::Deep => deep_cleaning_price(bedrooms, bathrooms),
        _ => service.hourly_rate() * hours,
    };

    let discount_rate = frequency
        .map(Frequency::flat_rate_discount)
        .unwrap_or(Decimal::ZERO);

    let final_price = base_price * (Decimal::ONE - discount_rate);

    FlatRateQuote {
        service,
        hours,
        cleaners: cleaner_count(bedrooms, bathrooms),
        base_price,
        discount_rate,
        final_price,
    }
}
