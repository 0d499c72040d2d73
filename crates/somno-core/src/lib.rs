//! somno-core
//!
//! Pure domain types for the sleep questionnaire: the record submitted by the
//! hosting application, the choice enumerations with their display labels,
//! and the fixed clock anchor used for time-of-day arithmetic.
//! No scoring logic lives here.

pub mod choice;
pub mod clock;
pub mod error;
pub mod models;
