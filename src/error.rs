//! Error types for the form interpreter.

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Errors surfaced by session, pipeline and configuration operations.
///
/// "No pose detected" is not one of them: a frame without landmarks is a
/// normal input and is handled by the pipeline.
#[derive(Debug, Error)]
pub enum FormError {
    /// Exercise selector sent an id other than 1 (lunge) or 2 (sit-up).
    #[error("unknown exercise id: {0} (expected 1 = lunge, 2 = sit-up)")]
    UnknownExercise(i32),

    /// Mode selector sent something other than "live" or "upload".
    #[error("unknown input mode: {0:?} (expected \"live\" or \"upload\")")]
    UnknownMode(String),

    /// Flat landmark array had the wrong length.
    #[error("invalid landmark data length: {got} (expected 0, 99 or 132)")]
    LandmarkCount {
        /// Number of floats received.
        got: usize,
    },

    /// Configuration parsed but is not usable.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Configuration JSON could not be parsed.
    #[error("configuration parse error: {0}")]
    ConfigParse(#[from] serde_json::Error),

    /// Live frame arrived after the camera was reported unavailable.
    #[error("live source unavailable: {0}")]
    SourceUnavailable(String),
}

impl FormError {
    /// Creates an invalid configuration error.
    #[must_use]
    pub fn invalid_config(reason: impl Into<String>) -> Self {
        Self::InvalidConfig(reason.into())
    }
}

impl From<FormError> for JsValue {
    fn from(err: FormError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, FormError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_bad_input() {
        assert!(FormError::UnknownExercise(7).to_string().contains('7'));
        assert!(FormError::UnknownMode("replay".into())
            .to_string()
            .contains("replay"));
        assert!(FormError::LandmarkCount { got: 12 }.to_string().contains("12"));
    }

    #[test]
    fn test_parse_error_converts() {
        let parse = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: FormError = parse.into();
        assert!(matches!(err, FormError::ConfigParse(_)));
    }
}
