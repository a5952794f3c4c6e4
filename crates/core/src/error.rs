//! Device error model.

use std::borrow::Cow;

use thiserror::Error;

use crate::operation::Operation;

/// Result type returned by device operations that may be refused.
pub type DeviceResult<T> = Result<T, DeviceError>;

/// Device-level error.
///
/// Only raised by contracts that promise more than a device can deliver; a
/// device that declares just the capabilities it has never produces one.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DeviceError {
    /// The operation exists on the contract but the device cannot perform it.
    #[error("unsupported operation `{operation}`: {reason}")]
    Unsupported {
        operation: Operation,
        reason: Cow<'static, str>,
    },
}

impl DeviceError {
    pub fn unsupported(operation: Operation, reason: impl Into<Cow<'static, str>>) -> Self {
        Self::Unsupported {
            operation,
            reason: reason.into(),
        }
    }

    pub fn is_unsupported(&self) -> bool {
        matches!(self, Self::Unsupported { .. })
    }

    /// The operation that was refused.
    pub fn operation(&self) -> Operation {
        match self {
            Self::Unsupported { operation, .. } => *operation,
        }
    }

    /// Human-readable reason, without the operation prefix.
    pub fn reason(&self) -> &str {
        match self {
            Self::Unsupported { reason, .. } => reason,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsupported_display_names_the_operation() {
        let err = DeviceError::unsupported(Operation::Charge, "Disposable cameras cannot be charged.");

        assert!(err.is_unsupported());
        assert_eq!(err.operation(), Operation::Charge);
        assert_eq!(err.reason(), "Disposable cameras cannot be charged.");
        assert_eq!(
            err.to_string(),
            "unsupported operation `charge`: Disposable cameras cannot be charged."
        );
    }

    #[test]
    fn owned_reasons_are_accepted() {
        let err = DeviceError::unsupported(Operation::TurnOn, format!("{} is sealed.", "Widget"));
        assert_eq!(err.reason(), "Widget is sealed.");
    }
}
