//! Service result envelope.
//!
//! Service operations never return `Err`. They answer with a [`ServiceResult`] that
//! carries a [`Status`] (numeric code + fixed message), an optional payload on success,
//! and on failure the underlying [`Error`] so callers can still tell failure kinds apart.

use crate::errors::Error;

/// Outcome vocabulary shared by every service operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Rows were read
    SuccessRead,
    /// Rows were inserted
    SuccessInsert,
    /// Rows were updated
    SuccessUpdate,
    /// The row to update does not exist
    FailUpdate,
    /// Any other failure
    ErrorException,
}

impl Status {
    /// Numeric status code.
    #[must_use]
    pub const fn code(self) -> i32 {
        match self {
            Self::SuccessRead | Self::SuccessInsert | Self::SuccessUpdate => 1,
            Self::FailUpdate => -1,
            Self::ErrorException => -4,
        }
    }

    /// Fixed human readable message for the status.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::SuccessRead => "Read data success",
            Self::SuccessInsert => "Save data success",
            Self::SuccessUpdate => "Update data success",
            Self::FailUpdate => "Update data fail",
            Self::ErrorException => "An unexpected error occurred",
        }
    }
}

/// Result of a service operation.
#[derive(Debug)]
pub enum ServiceResult<T> {
    /// The operation succeeded
    Success {
        /// One of the success statuses
        status: Status,
        /// Payload, when the operation returns one
        data: Option<T>,
    },
    /// The operation failed; nothing was committed
    Failure {
        /// `FailUpdate` or `ErrorException`
        status: Status,
        /// Message describing the failure
        message: String,
        /// Underlying error, when the failure came from one
        error: Option<Error>,
    },
}

impl<T> ServiceResult<T> {
    /// Successful result carrying `data`.
    #[must_use]
    pub const fn success(status: Status, data: T) -> Self {
        Self::Success {
            status,
            data: Some(data),
        }
    }

    /// Failure with the fixed message of `status` and no underlying error.
    #[must_use]
    pub fn failure(status: Status) -> Self {
        Self::Failure {
            status,
            message: status.message().to_string(),
            error: None,
        }
    }

    /// `ErrorException` failure wrapping `error`; the message is the error's display text.
    #[must_use]
    pub fn from_error(error: Error) -> Self {
        Self::Failure {
            status: Status::ErrorException,
            message: error.to_string(),
            error: Some(error),
        }
    }

    /// Status of the result.
    #[must_use]
    pub const fn status(&self) -> Status {
        match self {
            Self::Success { status, .. } | Self::Failure { status, .. } => *status,
        }
    }

    /// Numeric status code of the result.
    #[must_use]
    pub const fn code(&self) -> i32 {
        self.status().code()
    }

    /// Human readable message.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Success { status, .. } => status.message(),
            Self::Failure { message, .. } => message,
        }
    }

    /// Whether the operation succeeded.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Payload of a successful result.
    #[must_use]
    pub const fn data(&self) -> Option<&T> {
        match self {
            Self::Success { data, .. } => data.as_ref(),
            Self::Failure { .. } => None,
        }
    }

    /// Consumes the result and returns its payload.
    #[must_use]
    pub fn into_data(self) -> Option<T> {
        match self {
            Self::Success { data, .. } => data,
            Self::Failure { .. } => None,
        }
    }

    /// Underlying error of a failed result.
    #[must_use]
    pub const fn error(&self) -> Option<&Error> {
        match self {
            Self::Success { .. } => None,
            Self::Failure { error, .. } => error.as_ref(),
        }
    }
}
