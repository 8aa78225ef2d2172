//! Error types for fluent-sql

use crate::operator::Op;
use thiserror::Error;

/// Result type alias for rendering operations
pub type SqlResult<T> = Result<T, SqlError>;

/// Errors raised while rendering a statement.
///
/// Rendering is a pure transform, so every error describes a malformed
/// builder tree or an unsupported dialect feature. Nothing is retried.
#[derive(Debug, Error)]
pub enum SqlError {
    /// An operator was paired with an operand kind it cannot render
    #[error("operator `{op}` expects {expected}, found {found}")]
    OperandMismatch {
        op: Op,
        expected: &'static str,
        found: &'static str,
    },

    /// The dialect has no rendering for a feature
    #[error("dialect {dialect} does not support {feature}")]
    UnsupportedFeature { dialect: String, feature: &'static str },

    /// A required clause was never set
    #[error("missing clause: {0}")]
    MissingClause(&'static str),

    /// Malformed builder input
    #[error("Validation error: {0}")]
    Validation(String),

    /// Configuration could not be parsed
    #[error("Config error: {0}")]
    Config(String),
}

impl SqlError {
    /// Create an operand mismatch error
    pub fn operand_mismatch(op: Op, expected: &'static str, found: &'static str) -> Self {
        Self::OperandMismatch {
            op,
            expected,
            found,
        }
    }

    /// Create an unsupported feature error for a dialect
    pub fn unsupported(dialect: impl Into<String>, feature: &'static str) -> Self {
        Self::UnsupportedFeature {
            dialect: dialect.into(),
            feature,
        }
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Check if this is an operand mismatch error
    pub fn is_operand_mismatch(&self) -> bool {
        matches!(self, Self::OperandMismatch { .. })
    }

    /// Check if this is an unsupported feature error
    pub fn is_unsupported(&self) -> bool {
        matches!(self, Self::UnsupportedFeature { .. })
    }
}

impl From<toml::de::Error> for SqlError {
    fn from(err: toml::de::Error) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<serde_json::Error> for SqlError {
    fn from(err: serde_json::Error) -> Self {
        Self::Config(err.to_string())
    }
}
