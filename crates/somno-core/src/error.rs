use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("{field}: value {value} is outside range {expected}")]
    OutOfRangeValue {
        field: &'static str,
        value: String,
        expected: &'static str,
    },
}
