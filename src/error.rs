//! Error type shared by every CIDR operation.

use thiserror::Error;

/// Errors raised by block construction and block arithmetic.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CidrError {
    /// An input value is outside what the operation accepts.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// Navigation stepped below `0.0.0.0` or above `255.255.255.255`.
    #[error("out of range: {0}")]
    OutOfRange(String),
}

impl CidrError {
    pub fn invalid(msg: impl Into<String>) -> Self {
        CidrError::InvalidArgument(msg.into())
    }

    pub fn out_of_range(msg: impl Into<String>) -> Self {
        CidrError::OutOfRange(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, CidrError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            CidrError::invalid("prefix 33 > 32").to_string(),
            "invalid argument: prefix 33 > 32"
        );
        assert_eq!(
            CidrError::out_of_range("past 255.255.255.255").to_string(),
            "out of range: past 255.255.255.255"
        );
    }
}
