//! Booking submission handler.
//!
//! Validates the assembled form, takes a flat-rate quote snapshot, runs
//! the scheduling conflict check, and returns a confirmation reference.
//! Nothing is persisted; payment capture and notifications happen in
//! external services that consume this response.

use std::str::FromStr;

use axum::{extract::State, routing::post, Json, Router};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

use crate::calendar::conflicts::{self, Appointment, SlotOption, SlotWindow};
use crate::error::{AppError, Result};
use crate::quoting::catalog::{Bedrooms, Frequency, ServiceType};
use crate::quoting::flat_rate;
use crate::quoting::responses::FlatRateQuoteResponse;
use crate::AppState;

use super::form::{validate_email, validate_phone, BookingForm};

pub fn router() -> Router<AppState> {
    Router::new().route("/api/book", post(submit_booking))
}

/// Scheduling outcome attached to a confirmation
#[derive(Debug, Serialize)]
pub struct SchedulingSummary {
    pub date: NaiveDate,
    pub has_conflict: bool,
    pub conflicts: Vec<Appointment>,
    pub selected_slot: Option<SlotWindow>,
    pub alternatives: Vec<SlotOption>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct BookingConfirmation {
    pub confirmation_number: String,
    pub service_name: String,
    pub frequency: Option<String>,
    pub quote: FlatRateQuoteResponse,
    pub scheduling: SchedulingSummary,
}

async fn submit_booking(
    State(state): State<AppState>,
    Json(form): Json<BookingForm>,
) -> Result<Json<BookingConfirmation>> {
    let missing = form.missing_fields();
    if !missing.is_empty() {
        return Err(AppError::IncompleteBooking {
            missing: missing.into_iter().map(String::from).collect(),
        });
    }

    // Completeness was just checked, so the unwraps below cannot miss
    let email = form.email.as_deref().unwrap_or_default();
    if !validate_email(email) {
        return Err(AppError::InvalidField { field: "email" });
    }
    let phone = form.phone.as_deref().unwrap_or_default();
    if !validate_phone(phone) {
        return Err(AppError::InvalidField { field: "phone" });
    }

    let service_id = form.service.as_deref().unwrap_or_default();
    let service = ServiceType::parse(service_id).ok_or_else(|| AppError::UnknownValue {
        field: "service",
        value: service_id.to_string(),
    })?;

    let bedrooms_id = form.bedrooms.as_deref().unwrap_or_default();
    let bedrooms = Bedrooms::parse(bedrooms_id).ok_or_else(|| AppError::UnknownValue {
        field: "bedrooms",
        value: bedrooms_id.to_string(),
    })?;

    let bathrooms_raw = form.bathrooms.as_deref().unwrap_or_default();
    let bathrooms = Decimal::from_str(bathrooms_raw).map_err(|_| AppError::UnknownValue {
        field: "bathrooms",
        value: bathrooms_raw.to_string(),
    })?;

    // Unrecognized frequency still books, just without a discount
    let frequency = form.frequency.as_deref().and_then(Frequency::parse);

    let quote = flat_rate::compute_quote(service, bedrooms, bathrooms, frequency);

    let date = form
        .preferred_date
        .ok_or(AppError::InvalidField { field: "preferred_date" })?;
    let slot_id = form.preferred_time.as_deref().unwrap_or_default();

    let appointments = match state.calendar.appointments_for_day(date).await {
        Ok(appointments) => appointments,
        Err(e) => {
            tracing::warn!("Calendar source unavailable, assuming open day: {}", e);
            Vec::new()
        }
    };
    let conflict_check = conflicts::check_conflicts(&appointments, date, slot_id);
    let alternatives = conflicts::alternative_slots(&appointments, date);

    let confirmation_number = confirmation_number();
    tracing::info!(
        confirmation = %confirmation_number,
        service = service.id(),
        %date,
        has_conflict = conflict_check.has_conflict,
        "booking submitted"
    );

    Ok(Json(BookingConfirmation {
        confirmation_number,
        service_name: service.display_name().to_string(),
        frequency: frequency.map(|f| f.display_name().to_string()),
        quote: quote.into(),
        scheduling: SchedulingSummary {
            date,
            has_conflict: conflict_check.has_conflict,
            conflicts: conflict_check.conflicts,
            selected_slot: conflict_check.selected_slot,
            alternatives,
            error: conflict_check.error,
        },
    }))
}

/// "CLN-" plus a short random reference
fn confirmation_number() -> String {
    let id = Uuid::new_v4().simple().to_string();
    format!("CLN-{}", id[..8].to_uppercase())
}
