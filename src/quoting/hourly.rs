//! Hourly-rate pricing engine (legacy).
//!
//! Predates the flat-rate chart and keeps its own discount table; the two
//! engines are deliberately not merged. Prices by home-size hours times
//! the service rate, with a stepped distance surcharge, and also produces
//! an internal cost/profit breakdown used to judge whether a job is worth
//! taking.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::catalog::{Frequency, HomeSize, ServiceType};

// Internal cost assumptions
const LABOR_RATE_PER_HOUR: Decimal = dec!(22);
const SUPPLIES_COST: Decimal = dec!(15);
const GAS_PRICE_PER_GALLON: Decimal = dec!(3.20);
const ASSUMED_MPG: Decimal = dec!(25);
const PROFITABLE_MARGIN: Decimal = dec!(0.35);

/// Internal cost and profit breakdown attached to every hourly quote
#[derive(Debug, Clone, PartialEq)]
pub struct CostBreakdown {
    pub base_hours: Decimal,
    pub team_hours: Decimal,
    pub hourly_rate: Decimal,
    pub labor_cost: Decimal,
    pub gas_cost: Decimal,
    pub toll_estimate: Decimal,
    pub supplies: Decimal,
    pub total_costs: Decimal,
    pub profit: Decimal,
    pub travel_time: Decimal,
}

/// A computed hourly-engine quote
#[derive(Debug, Clone, PartialEq)]
pub struct HourlyQuote {
    pub base_price: Decimal,
    pub distance_surcharge: Decimal,
    pub discount_amount: Decimal,
    pub subtotal: Decimal,
    pub team_hours: Decimal,
    pub total_time: Decimal,
    /// Profit as a fraction of the subtotal, 0 when the subtotal is not positive
    pub profit_margin: Decimal,
    pub worth_it: bool,
    pub breakdown: CostBreakdown,
}

/// Stepped surcharge for jobs beyond 15 miles: $15 per full or partial
/// 10-mile band
pub fn distance_surcharge(distance_miles: Decimal) -> Decimal {
    if distance_miles > dec!(15) {
        let extra_miles = distance_miles - dec!(15);
        (extra_miles / dec!(10)).ceil() * dec!(15)
    } else {
        Decimal::ZERO
    }
}

/// Round-trip toll estimate by distance band
fn toll_estimate(distance_miles: Decimal) -> Decimal {
    if distance_miles > dec!(30) {
        dec!(15)
    } else if distance_miles > dec!(20) {
        dec!(10)
    } else {
        Decimal::ZERO
    }
}

/// Compute an hourly quote.
///
/// Returns `None` while any of service, home size, or frequency is still
/// unselected; an incomplete form is a normal state, not an error.
pub fn compute_quote(
    service: Option<ServiceType>,
    home_size: Option<HomeSize>,
    frequency: Option<Frequency>,
    distance_miles: Decimal,
) -> Option<HourlyQuote> {
    let service = service?;
    let home_size = home_size?;
    let frequency = frequency?;

    let base_hours = home_size.base_hours();
    let hourly_rate = service.hourly_rate();
    let base_price = base_hours * hourly_rate;

    let surcharge = distance_surcharge(distance_miles);
    let discount_amount = base_price * frequency.hourly_discount();
    let subtotal = base_price + surcharge - discount_amount;

    // A two-person team completes the job in half the estimated hours but
    // only one is on payroll
    let team_hours = (base_hours / dec!(2)).ceil();
    let labor_cost = team_hours * LABOR_RATE_PER_HOUR;
    let gas_cost = (distance_miles * dec!(2) / ASSUMED_MPG) * GAS_PRICE_PER_GALLON;
    let toll_estimate = toll_estimate(distance_miles);
    let total_costs = labor_cost + gas_cost + toll_estimate + SUPPLIES_COST;
    let profit = subtotal - total_costs;
    let profit_margin = if subtotal > Decimal::ZERO {
        profit / subtotal
    } else {
        Decimal::ZERO
    };

    // Round-trip travel at an assumed 20 mph, with a 1-hour floor when no
    // distance is known
    let travel_time = if distance_miles > Decimal::ZERO {
        (distance_miles / dec!(20)).ceil() * dec!(2)
    } else {
        dec!(1)
    };
    let total_time = team_hours + travel_time;

    Some(HourlyQuote {
        base_price,
        distance_surcharge: surcharge,
        discount_amount,
        subtotal,
        team_hours,
        total_time,
        profit_margin,
        worth_it: profit_margin >= PROFITABLE_MARGIN,
        breakdown: CostBreakdown {
            base_hours,
            team_hours,
            hourly_rate,
            labor_cost,
            gas_cost,
            toll_estimate,
            supplies: SUPPLIES_COST,
            total_costs,
            profit,
            travel_time,
        },
    })
}
