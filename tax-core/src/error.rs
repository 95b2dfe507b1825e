use thiserror::Error;

/// Errors returned by bracket lookup, salary validation and tax calculation.
///
/// Every variant names the input field that caused it so the boundary layer
/// can report it back to the caller.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaxError {
    /// The input was malformed or out of range.
    #[error("{message}")]
    Validation {
        field: &'static str,
        message: String,
    },

    /// The input was well formed but nothing matches it.
    #[error("{message}")]
    NotFound {
        field: &'static str,
        message: String,
    },
}

impl TaxError {
    pub fn validation(
        field: &'static str,
        message: impl Into<String>,
    ) -> Self {
        Self::Validation {
            field,
            message: message.into(),
        }
    }

    pub fn not_found(
        field: &'static str,
        message: impl Into<String>,
    ) -> Self {
        Self::NotFound {
            field,
            message: message.into(),
        }
    }

    /// Name of the offending input field.
    pub fn field(&self) -> &'static str {
        match self {
            Self::Validation { field, .. } | Self::NotFound { field, .. } => field,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Self::Validation { message, .. } | Self::NotFound { message, .. } => message,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
