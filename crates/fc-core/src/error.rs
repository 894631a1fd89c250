use thiserror::Error;

pub type FcResult<T> = Result<T, FcError>;

/// Numeric and arena failures shared by the graph and flow crates.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FcError {
    #[error("{what} must be finite, got {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("{what} must be non-negative, got {value}")]
    Negative { what: &'static str, value: f64 },

    #[error("Arena full: slot {slot} has no id")]
    ArenaFull { slot: usize },

    #[error("Invariant violated: {what}")]
    Invariant { what: &'static str },
}
