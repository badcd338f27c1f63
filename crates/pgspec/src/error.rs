//! Error types for pgspec

use thiserror::Error;

/// Result type alias for fragment building
pub type BuildResult<T> = Result<T, BuildError>;

/// Error types for fragment building
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BuildError {
    /// BETWEEN filter with a missing range bound
    #[error("between filter on '{field}' requires both range bounds")]
    MalformedRange { field: String },

    /// Bindable comparison filter with no bound value
    #[error("filter on '{field}' requires a bound value")]
    MissingValue { field: String },
}

impl BuildError {
    /// Create a malformed-range error for a specific field
    pub fn malformed_range(field: impl Into<String>) -> Self {
        Self::MalformedRange {
            field: field.into(),
        }
    }

    /// Create a missing-value error for a specific field
    pub fn missing_value(field: impl Into<String>) -> Self {
        Self::MissingValue {
            field: field.into(),
        }
    }

    /// Check if this is a malformed-range error
    pub fn is_malformed_range(&self) -> bool {
        matches!(self, Self::MalformedRange { .. })
    }

    /// Check if this is a missing-value error
    pub fn is_missing_value(&self) -> bool {
        matches!(self, Self::MissingValue { .. })
    }
}
