//! Error types for the fitness tracker

use thiserror::Error;

/// Errors that can occur while turning sensor packages into summaries
#[derive(Debug, Error)]
pub enum WorkoutError {
    #[error("Unknown workout code: {0} (expected one of RUN, WLK, SWM)")]
    UnknownWorkoutCode(String),

    #[error("Arity mismatch for {code}: expected {expected} values, got {actual}")]
    ArityMismatch {
        code: String,
        expected: usize,
        actual: usize,
    },

    #[error("Invalid reading for {field}: {value} ({reason})")]
    InvalidReading {
        field: &'static str,
        value: f64,
        reason: &'static str,
    },

    #[error("Failed to parse sensor package: {0}")]
    ParseError(String),

    #[error("Invalid JSON: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl WorkoutError {
    /// Stable machine-readable code for the error kind
    pub fn kind_code(&self) -> &'static str {
        match self {
            WorkoutError::UnknownWorkoutCode(_) => "UNKNOWN_WORKOUT_CODE",
            WorkoutError::ArityMismatch { .. } => "ARITY_MISMATCH",
            WorkoutError::InvalidReading { .. } => "INVALID_READING",
            WorkoutError::ParseError(_) => "PARSE_ERROR",
            WorkoutError::JsonError(_) => "JSON_ERROR",
        }
    }
}
