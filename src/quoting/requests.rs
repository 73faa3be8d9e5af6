//! Request DTOs for quoting API endpoints.

use rust_decimal::Decimal;
use serde::Deserialize;

/// Request for a flat-rate quote
#[derive(Debug, Deserialize)]
pub struct FlatRateQuoteRequest {
    pub service: String,
    pub bedrooms: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub bathrooms: Decimal,
    #[serde(default)]
    pub frequency: Option<String>,
}

/// Request for an hourly (legacy) quote. All fields are optional: a
/// half-filled form is a valid request that simply yields no quote yet.
#[derive(Debug, Deserialize)]
pub struct HourlyQuoteRequest {
    #[serde(default)]
    pub service: Option<String>,
    #[serde(default)]
    pub home_size: Option<String>,
    #[serde(default)]
    pub frequency: Option<String>,
    #[serde(default, with = "rust_decimal::serde::str_option")]
    pub distance_miles: Option<Decimal>,
}
