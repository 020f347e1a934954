//! Error types for filter requests.

use thiserror::Error;

/// Reasons a filter request is rejected.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FilterError {
    /// The point set holds 1-3 points: neither a full image nor a rectangle.
    #[error("Invalid region: expected 0 or 4 points, got {points}")]
    InvalidRoi { points: usize },

    /// A point list holds more points than a selection can.
    #[error("Too many points: a selection holds at most 4, got {points}")]
    TooManyPoints { points: usize },

    /// The identifier is not one of the catalog labels.
    #[error("Unknown filter: {0}")]
    UnknownFilter(String),

    /// No image has been loaded into the session.
    #[error("No image loaded")]
    NoImageLoaded,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_error_display() {
        let err = FilterError::InvalidRoi { points: 2 };
        assert_eq!(err.to_string(), "Invalid region: expected 0 or 4 points, got 2");

        let err = FilterError::UnknownFilter("Sharpen Filter".to_string());
        assert_eq!(err.to_string(), "Unknown filter: Sharpen Filter");

        let err = FilterError::TooManyPoints { points: 6 };
        assert_eq!(err.to_string(), "Too many points: a selection holds at most 4, got 6");
    }
}
