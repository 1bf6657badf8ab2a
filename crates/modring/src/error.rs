use std::fmt::Display;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RingError {
    #[error("Invalid parameter `{name}` = {value}: {constraint}")]
    InvalidParameter {
        name: &'static str,
        value: String,
        constraint: &'static str,
    },
}

pub type Result<T> = std::result::Result<T, RingError>;

impl RingError {
    pub fn invalid(name: &'static str, value: impl Display, constraint: &'static str) -> Self {
        Self::InvalidParameter {
            name,
            value: value.to_string(),
            constraint,
        }
    }

    pub fn parameter(&self) -> &'static str {
        match self {
            Self::InvalidParameter { name, .. } => name,
        }
    }
}

/// Checks that an integer parameter is at least 1 and converts it to an index type.
pub(crate) fn require_positive(name: &'static str, value: i64) -> Result<usize> {
    if value < 1 {
        return Err(RingError::invalid(name, value, "must be at least 1"));
    }
    usize::try_from(value).map_err(|_| RingError::invalid(name, value, "does not fit in usize"))
}

pub(crate) fn require_positive_finite(name: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(RingError::invalid(
            name,
            value,
            "must be finite and greater than zero",
        ))
    }
}
