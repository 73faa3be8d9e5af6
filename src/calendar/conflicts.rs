//! Appointment conflict detection.
//!
//! Pure interval math over an already-fetched appointment list; fetching
//! lives behind `CalendarSource`. All windows are half-open, so a slot
//! that ends exactly when an appointment starts does not conflict.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// The three bookable daily windows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeSlot {
    Morning,
    Afternoon,
    Evening,
}

impl TimeSlot {
    /// Fixed evaluation order for alternative-slot searches
    pub const ALL: [TimeSlot; 3] = [TimeSlot::Morning, TimeSlot::Afternoon, TimeSlot::Evening];

    pub fn parse(id: &str) -> Option<Self> {
        match id {
            "morning" => Some(TimeSlot::Morning),
            "afternoon" => Some(TimeSlot::Afternoon),
            "evening" => Some(TimeSlot::Evening),
            _ => None,
        }
    }

    pub fn id(self) -> &'static str {
        match self {
            TimeSlot::Morning => "morning",
            TimeSlot::Afternoon => "afternoon",
            TimeSlot::Evening => "evening",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TimeSlot::Morning => "Morning (9 AM - 12 PM)",
            TimeSlot::Afternoon => "Afternoon (12 PM - 5 PM)",
            TimeSlot::Evening => "Evening (5 PM - 8 PM)",
        }
    }

    /// Start and end hours of the half-open window
    pub fn hours(self) -> (u32, u32) {
        match self {
            TimeSlot::Morning => (9, 12),
            TimeSlot::Afternoon => (12, 17),
            TimeSlot::Evening => (17, 20),
        }
    }

    /// Concrete [start, end) window on a given date
    pub fn window_on(self, date: NaiveDate) -> SlotWindow {
        let (start_hour, end_hour) = self.hours();
        SlotWindow {
            time_slot: self,
            start: date.and_hms_opt(start_hour, 0, 0).unwrap(),
            end: date.and_hms_opt(end_hour, 0, 0).unwrap(),
        }
    }
}

/// A booked interval on the schedule, as supplied by the calendar source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    pub summary: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl Appointment {
    /// Half-open overlap test: boundaries touching is not a conflict
    pub fn overlaps(&self, start: NaiveDateTime, end: NaiveDateTime) -> bool {
        start < self.end && end > self.start
    }
}

/// A candidate appointment window
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SlotWindow {
    pub time_slot: TimeSlot,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

/// Result of checking one (date, slot) pair. Produced fresh on every
/// check, never cached.
#[derive(Debug, Clone, Serialize)]
pub struct ConflictCheck {
    pub has_conflict: bool,
    pub conflicts: Vec<Appointment>,
    pub selected_slot: Option<SlotWindow>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// An open slot offered as an alternative
#[derive(Debug, Clone, Serialize)]
pub struct SlotOption {
    pub time_slot: TimeSlot,
    pub label: &'static str,
}

/// Check a candidate (date, slot id) against the day's appointments.
///
/// An unrecognized slot id is a recoverable input error: the result
/// carries an error note and reports no conflict. An empty appointment
/// list means the day is open; no special casing.
pub fn check_conflicts(appointments: &[Appointment], date: NaiveDate, slot_id: &str) -> ConflictCheck {
    let Some(slot) = TimeSlot::parse(slot_id) else {
        return ConflictCheck {
            has_conflict: false,
            conflicts: Vec::new(),
            selected_slot: None,
            error: Some(format!("Invalid time slot selected: {}", slot_id)),
        };
    };

    let window = slot.window_on(date);
    let conflicts: Vec<Appointment> = appointments
        .iter()
        .filter(|appointment| appointment.overlaps(window.start, window.end))
        .cloned()
        .collect();

    ConflictCheck {
        has_conflict: !conflicts.is_empty(),
        conflicts,
        selected_slot: Some(window),
        error: None,
    }
}

/// All conflict-free slots for a date, in fixed morning/afternoon/evening
/// order.
pub fn alternative_slots(appointments: &[Appointment], date: NaiveDate) -> Vec<SlotOption> {
    TimeSlot::ALL
        .into_iter()
        .filter(|slot| !check_conflicts(appointments, date, slot.id()).has_conflict)
        .map(|slot| SlotOption {
            time_slot: slot,
            label: slot.label(),
        })
        .collect()
}
