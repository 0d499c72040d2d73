use jiff::civil::Time;
use thiserror::Error;

use somno_core::error::CoreError;

#[derive(Debug, Error)]
pub enum ScoringError {
    #[error("missing required field: {0}")]
    MissingRequiredField(&'static str),

    #[error("time in bed is zero: bedtime {bedtime} equals wakeup time {wakeup_time}")]
    DegenerateInterval { bedtime: Time, wakeup_time: Time },

    #[error("unknown scoring strategy: {0}")]
    UnknownStrategy(String),

    #[error(transparent)]
    Core(#[from] CoreError),
}
