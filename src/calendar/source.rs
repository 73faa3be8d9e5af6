//! Calendar data sources.
//!
//! The conflict detector only operates on appointment lists it is handed;
//! this trait is the seam where a real calendar backend (Google Calendar
//! in production) plugs in. `FixedCalendar` is the in-process stand-in
//! used when no backend is configured.

use async_trait::async_trait;
use chrono::NaiveDate;

use super::conflicts::Appointment;

/// Supplies the booked intervals for a given day
#[async_trait]
pub trait CalendarSource: Send + Sync {
    async fn appointments_for_day(&self, date: NaiveDate) -> anyhow::Result<Vec<Appointment>>;
}

/// Calendar backed by a fixed in-memory appointment list
#[derive(Debug, Clone, Default)]
pub struct FixedCalendar {
    appointments: Vec<Appointment>,
}

impl FixedCalendar {
    pub fn new(appointments: Vec<Appointment>) -> Self {
        Self { appointments }
    }

    /// The sample schedule used when no calendar backend is configured:
    /// one afternoon appointment on August 1st, 4-8 PM.
    pub fn sample_schedule() -> Self {
        let start = NaiveDate::from_ymd_opt(2025, 8, 1)
            .and_then(|d| d.and_hms_opt(16, 0, 0))
            .unwrap_or_default();

        Self::new(vec![Appointment {
            summary: "Client Cleaning Appointment".to_string(),
            start,
            end: start + chrono::Duration::hours(4),
        }])
    }
}

#[async_trait]
impl CalendarSource for FixedCalendar {
    async fn appointments_for_day(&self, date: NaiveDate) -> anyhow::Result<Vec<Appointment>> {
        Ok(self
            .appointments
            .iter()
            .filter(|appointment| appointment.start.date() == date)
            .cloned()
            .collect())
    }
}
