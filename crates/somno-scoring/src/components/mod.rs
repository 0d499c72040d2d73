//! Component scorers.
//!
//! Each scorer is a pure function of the record. Bucketed scorers return a
//! value in `0..=3`, where 0 is the healthiest.

pub mod daytime;
pub mod disturbance;
pub mod duration;
pub mod efficiency;
pub mod latency;
pub mod terms;
