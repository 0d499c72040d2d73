//! somno-cli
//!
//! Command-line host for the scoring engine: config file handling, reading
//! questionnaire submissions and rendering score reports.

pub mod config;
pub mod input;
pub mod output;
pub mod score;
