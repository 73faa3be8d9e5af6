//! Quote route handlers

use axum::{routing::post, Json, Router};

use crate::error::{AppError, Result};
use crate::AppState;

use super::catalog::{Bedrooms, Frequency, HomeSize, ServiceType};
use super::requests::{FlatRateQuoteRequest, HourlyQuoteRequest};
use super::responses::{FlatRateQuoteResponse, HourlyQuoteEnvelope};
use super::{flat_rate, hourly};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/quote", post(flat_rate_quote))
        .route("/api/quote/hourly", post(hourly_quote))
}

/// Flat-rate quote (authoritative pricing).
///
/// Unrecognized frequencies are tolerated and mean no discount; the
/// service and bedroom ids must be valid.
async fn flat_rate_quote(
    Json(req): Json<FlatRateQuoteRequest>,
) -> Result<Json<FlatRateQuoteResponse>> {
    let service = ServiceType::parse(&req.service).ok_or_else(|| AppError::UnknownValue {
        field: "service",
        value: req.service.clone(),
    })?;
    let bedrooms = Bedrooms::parse(&req.bedrooms).ok_or_else(|| AppError::UnknownValue {
        field: "bedrooms",
        value: req.bedrooms.clone(),
    })?;
    let frequency = req.frequency.as_deref().and_then(Frequency::parse);

    let quote = flat_rate::compute_quote(service, bedrooms, req.bathrooms, frequency);
    tracing::debug!(
        service = service.id(),
        bedrooms = bedrooms.id(),
        final_price = %quote.final_price,
        "computed flat-rate quote"
    );

    Ok(Json(quote.into()))
}

/// Hourly quote (legacy pricing model).
///
/// Responds with a null quote while the form is incomplete; unknown ids
/// are treated the same as unselected fields.
async fn hourly_quote(Json(req): Json<HourlyQuoteRequest>) -> Json<HourlyQuoteEnvelope> {
    let service = req.service.as_deref().and_then(ServiceType::parse);
    let home_size = req.home_size.as_deref().and_then(HomeSize::parse);
    let frequency = req.frequency.as_deref().and_then(Frequency::parse);
    let distance = req.distance_miles.unwrap_or_default();

    let quote = hourly::compute_quote(service, home_size, frequency, distance);

    Json(HourlyQuoteEnvelope {
        quote: quote.map(Into::into),
    })
}
