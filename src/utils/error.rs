use thiserror::Error;

#[derive(Error, Debug)]
pub enum UtilError {
    #[error("Invalid date: {value}")]
    InvalidDate { value: String },

    #[error("Unknown timezone: {name}")]
    InvalidTimezone { name: String },

    #[error("Cannot capitalize an empty string")]
    EmptyString,

    #[error("Cannot look up '{segment}' in a {kind} value")]
    NotTraversable { segment: String, kind: String },

    #[error("Cannot parse a {kind} value as a number")]
    NotParsable { kind: String },

    #[error("Cannot read an error message from null")]
    NullError,

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration validation error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl UtilError {
    pub fn invalid_date(value: impl Into<String>) -> Self {
        UtilError::InvalidDate {
            value: value.into(),
        }
    }

    /// 是否為呼叫端違反前置條件（而非設定問題）
    pub fn is_precondition_violation(&self) -> bool {
        matches!(
            self,
            UtilError::EmptyString
                | UtilError::NotTraversable { .. }
                | UtilError::NotParsable { .. }
                | UtilError::NullError
        )
    }
}

pub type Result<T> = std::result::Result<T, UtilError>;
