//! Response DTOs for quoting API endpoints.

use rust_decimal::Decimal;
use serde::Serialize;

use super::catalog::ServiceType;
use super::flat_rate::FlatRateQuote;
use super::hourly::HourlyQuote;
use super::rounding::round_money;

/// Flat-rate quote for JSON responses
#[derive(Debug, Clone, Serialize)]
pub struct FlatRateQuoteResponse {
    pub service: String,
    pub service_name: String,
    /// "Flat Rate" for deep cleans, "$35/hr" style otherwise
    pub rate: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub hours: Decimal,
    /// Team size sent for this home: 2 cleaners for anything larger
    /// than 1 bed / 1 bath
    pub cleaners: u32,
    #[serde(with = "rust_decimal::serde::str")]
    pub base_price: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub discount_rate: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub final_price: Decimal,
}

impl From<FlatRateQuote> for FlatRateQuoteResponse {
    fn from(quote: FlatRateQuote) -> Self {
        let rate = match quote.service {
            ServiceType::Deep => "Flat Rate".to_string(),
            other => format!("${}/hr", other.hourly_rate()),
        };

        Self {
            service: quote.service.id().to_string(),
            service_name: quote.service.display_name().to_string(),
            rate,
            hours: quote.hours,
            cleaners: quote.cleaners,
            base_price: round_money(quote.base_price, 2),
            discount_rate: quote.discount_rate,
            final_price: round_money(quote.final_price, 2),
        }
    }
}

/// Hourly quote wrapper: `quote` is null while the form is incomplete
#[derive(Debug, Serialize)]
pub struct HourlyQuoteEnvelope {
    pub quote: Option<HourlyQuoteResponse>,
}

/// Hourly (legacy) quote for JSON responses
#[derive(Debug, Serialize)]
pub struct HourlyQuoteResponse {
    #[serde(with = "rust_decimal::serde::str")]
    pub base_price: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub distance_surcharge: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub discount_amount: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub subtotal: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub team_hours: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub total_time: Decimal,
    /// Profit margin as a percentage, one decimal place
    #[serde(with = "rust_decimal::serde::str")]
    pub profit_margin_pct: Decimal,
    pub worth_it: bool,
    pub breakdown: CostBreakdownResponse,
}

/// Cost breakdown for JSON responses
#[derive(Debug, Serialize)]
pub struct CostBreakdownResponse {
    #[serde(with = "rust_decimal::serde::str")]
    pub base_hours: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub team_hours: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub hourly_rate: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub labor_cost: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub gas_cost: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub toll_estimate: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub supplies: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub total_costs: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub profit: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub travel_time: Decimal,
}

impl From<HourlyQuote> for HourlyQuoteResponse {
    fn from(quote: HourlyQuote) -> Self {
        Self {
            base_price: round_money(quote.base_price, 2),
            distance_surcharge: quote.distance_surcharge,
            discount_amount: round_money(quote.discount_amount, 2),
            subtotal: round_money(quote.subtotal, 2),
            team_hours: quote.team_hours,
            total_time: quote.total_time,
            profit_margin_pct: round_money(quote.profit_margin * Decimal::from(100), 1),
            worth_it: quote.worth_it,
            breakdown: CostBreakdownResponse {
                base_hours: quote.breakdown.base_hours,
                team_hours: quote.breakdown.team_hours,
                hourly_rate: quote.breakdown.hourly_rate,
                labor_cost: round_money(quote.breakdown.labor_cost, 2),
                gas_cost: round_money(quote.breakdown.gas_cost, 2),
                toll_estimate: quote.breakdown.toll_estimate,
                supplies: quote.breakdown.supplies,
                total_costs: round_money(quote.breakdown.total_costs, 2),
                profit: round_money(quote.breakdown.profit, 2),
                travel_time: quote.breakdown.travel_time,
            },
        }
    }
}
