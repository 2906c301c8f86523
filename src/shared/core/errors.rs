// Error taxonomy shared by every time record use case.
//
// Purpose
// - Give handlers one error type that the inbound adapters can map to a status.
//
// Rules
// - Domain kinds (invalid argument, conflict, not found, permission denied) are raised where
//   they are detected and travel to the caller unchanged.
// - Everything else becomes Internal with an operation-specific message. The cause is logged,
//   never returned.

use std::fmt::Display;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApplicationError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("conflict: {0}")]
    Conflict(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("permission denied: {0}")]
    PermissionDenied(String),

    #[error("internal: {0}")]
    Internal(String),
}

impl ApplicationError {
    pub fn kind(&self) -> &'static str {
        match self {
            ApplicationError::InvalidArgument(_) => "invalid_argument",
            ApplicationError::Conflict(_) => "conflict",
            ApplicationError::NotFound(_) => "not_found",
            ApplicationError::PermissionDenied(_) => "permission_denied",
            ApplicationError::Internal(_) => "internal",
        }
    }

    pub fn message(&self) -> &str {
        match self {
            ApplicationError::InvalidArgument(message)
            | ApplicationError::Conflict(message)
            | ApplicationError::NotFound(message)
            | ApplicationError::PermissionDenied(message)
            | ApplicationError::Internal(message) => message,
        }
    }

    /// Builds a `map_err` closure that logs `cause` and hides it behind `operation`.
    pub fn internal<E: Display>(operation: &'static str) -> impl FnOnce(E) -> ApplicationError {
        move |cause| {
            tracing::error!(error = %cause, operation, "unexpected failure");
            ApplicationError::Internal(operation.to_string())
        }
    }
}
