//! Booking module: the form aggregate and the submission endpoint.

pub mod form;
pub mod routes;

pub use form::BookingForm;
pub use routes::router;
