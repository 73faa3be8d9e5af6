//! Scheduling module: time slots, conflict detection, and the calendar
//! source seam.

pub mod conflicts;
pub mod routes;
pub mod source;

// Re-export commonly used items
pub use conflicts::{Appointment, ConflictCheck, TimeSlot};
pub use routes::router;
pub use source::{CalendarSource, FixedCalendar};
