//! Quoting engine module.
//!
//! Two pricing engines coexist here with materially different rules. The
//! flat-rate engine (chart-based) is the customer-facing source of truth;
//! the hourly engine is the earlier model, kept behind its own entry
//! point because its discount table and hour estimates differ.

pub mod catalog;
pub mod flat_rate;
pub mod hourly;
pub mod requests;
pub mod responses;
pub mod rounding;
pub mod routes;

// Re-export commonly used items
pub use catalog::{Bedrooms, Frequency, HomeSize, ServiceType};
pub use rounding::round_money;
pub use routes::router;
