// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("Invalid design level '{input}'. Choose from: {valid}")]
    InvalidLevel { input: String, valid: String },

    #[error("Invalid component name '{name}': {reason}")]
    InvalidComponentName { name: String, reason: String },

    #[error("Invalid child component name '{name}': {reason}")]
    InvalidChildName { name: String, reason: String },

    #[error("Child component '{name}' is listed more than once")]
    DuplicateChild { name: String },

    // ========================================================================
    // Layout Errors (bugs if they ever surface)
    // ========================================================================
    #[error("Component layout has no files")]
    EmptyLayout,

    #[error("Duplicate path in component layout: {path}")]
    DuplicatePath { path: String },

    #[error("Absolute paths not allowed: {path}")]
    AbsolutePathNotAllowed { path: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidLevel { valid, .. } => vec![
                format!("Valid design levels: {valid}"),
                "Levels are case-insensitive: 'Atoms' and 'atoms' both work".into(),
                "Try: strata levels".into(),
            ],
            Self::InvalidComponentName { .. } | Self::InvalidChildName { .. } => vec![
                "Names are JavaScript identifiers: ASCII letters, digits, '_' and '$'".into(),
                "Names cannot start with a digit".into(),
                "Examples: Button, NameTitleBlock, CourseCard".into(),
            ],
            Self::DuplicateChild { name } => vec![
                format!("Remove the repeated '{name}' from the child list"),
                "Each child is included once, in list order".into(),
            ],
            _ => vec!["This is likely a bug in Strata, please report it".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidLevel { .. }
            | Self::InvalidComponentName { .. }
            | Self::InvalidChildName { .. }
            | Self::DuplicateChild { .. } => ErrorCategory::Validation,
            Self::EmptyLayout | Self::DuplicatePath { .. } | Self::AbsolutePathNotAllowed { .. } => {
                ErrorCategory::Internal
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Internal,
}
