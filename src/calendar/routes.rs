//! Calendar route handlers

use axum::{
    extract::{Query, State},
    routing::{get, post},
    Json, Router,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::AppState;

use super::conflicts::{self, Appointment, SlotOption, SlotWindow};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/calendar/check-conflicts", post(check_conflicts))
        .route("/api/calendar/alternatives", get(alternatives))
}

/// Request to check one (date, time slot) pair
#[derive(Debug, Deserialize)]
pub struct ConflictCheckRequest {
    pub date: NaiveDate,
    pub time_slot: String,
}

/// Conflict check result plus the open slots for the same date
#[derive(Debug, Serialize)]
pub struct ConflictCheckResponse {
    pub has_conflict: bool,
    pub conflicts: Vec<Appointment>,
    pub selected_slot: Option<SlotWindow>,
    pub alternatives: Vec<SlotOption>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct AlternativesQuery {
    pub date: NaiveDate,
}

#[derive(Debug, Serialize)]
pub struct AlternativesResponse {
    pub date: NaiveDate,
    pub alternatives: Vec<SlotOption>,
}

/// Fetch the day's appointments, treating a source failure as an open
/// day. A missing calendar backend must never block a booking.
async fn day_appointments(state: &AppState, date: NaiveDate) -> Vec<Appointment> {
    match state.calendar.appointments_for_day(date).await {
        Ok(appointments) => appointments,
        Err(e) => {
            tracing::warn!("Calendar source unavailable, assuming open day: {}", e);
            Vec::new()
        }
    }
}

async fn check_conflicts(
    State(state): State<AppState>,
    Json(req): Json<ConflictCheckRequest>,
) -> Json<ConflictCheckResponse> {
    let appointments = day_appointments(&state, req.date).await;

    let result = conflicts::check_conflicts(&appointments, req.date, &req.time_slot);
    let alternatives = conflicts::alternative_slots(&appointments, req.date);

    Json(ConflictCheckResponse {
        has_conflict: result.has_conflict,
        conflicts: result.conflicts,
        selected_slot: result.selected_slot,
        alternatives,
        error: result.error,
    })
}

async fn alternatives(
    State(state): State<AppState>,
    Query(query): Query<AlternativesQuery>,
) -> Json<AlternativesResponse> {
    let appointments = day_appointments(&state, query.date).await;

    Json(AlternativesResponse {
        date: query.date,
        alternatives: conflicts::alternative_slots(&appointments, query.date),
    })
}
