//! Customer Error Types
//!
//! This module provides customer-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.
//!
//! The `Display` text of every variant is the exact plain-text body sent
//! to the client.

use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Customer-specific result type alias
pub type CustomerResult<T> = Result<T, CustomerError>;

/// The storage operation a handler performs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    FetchOne,
    FetchAll,
    Create,
    Update,
    Delete,
}

impl Operation {
    /// Generic message reported when the operation fails for any internal reason
    pub const fn failure_message(&self) -> &'static str {
        match self {
            Operation::FetchOne => "Error fetching customer",
            Operation::FetchAll => "Error fetching customers",
            Operation::Create => "Error adding customer",
            Operation::Update => "Error updating customer",
            Operation::Delete => "Error deleting customer",
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Operation::FetchOne => "fetch_one",
            Operation::FetchAll => "fetch_all",
            Operation::Create => "create",
            Operation::Update => "update",
            Operation::Delete => "delete",
        }
    }
}

/// Customer-specific error variants
#[derive(Debug, Error)]
pub enum CustomerError {
    /// PUT without an identifier segment
    #[error("Customer ID is required for update")]
    MissingUpdateId,

    /// DELETE without an identifier segment
    #[error("Customer ID is required for deletion")]
    MissingDeleteId,

    /// Required body fields missing or empty
    #[error("Invalid customer data")]
    InvalidCustomerData,

    /// No row for the identifier (fetch / delete)
    #[error("Customer not found")]
    NotFound,

    /// Update affected no rows
    #[error("Customer not found or no changes made")]
    NotUpdated,

    /// Method outside GET / POST / PUT / DELETE
    #[error("Method Not Allowed")]
    MethodNotAllowed,

    /// Request body could not be read, or exceeded the configured limit
    #[error("{}", .operation.failure_message())]
    BodyRead {
        operation: Operation,
        source: axum::Error,
    },

    /// Request body is not the expected JSON
    #[error("{}", .operation.failure_message())]
    MalformedBody {
        operation: Operation,
        source: serde_json::Error,
    },

    /// Database error
    #[error("{}", .operation.failure_message())]
    Storage {
        operation: Operation,
        source: sqlx::Error,
    },
}

impl CustomerError {
    pub fn storage(operation: Operation) -> impl FnOnce(sqlx::Error) -> Self {
        move |source| CustomerError::Storage { operation, source }
    }

    pub fn body_read(operation: Operation) -> impl FnOnce(axum::Error) -> Self {
        move |source| CustomerError::BodyRead { operation, source }
    }

    pub fn malformed_body(operation: Operation) -> impl FnOnce(serde_json::Error) -> Self {
        move |source| CustomerError::MalformedBody { operation, source }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            CustomerError::MissingUpdateId
            | CustomerError::MissingDeleteId
            | CustomerError::InvalidCustomerData => ErrorKind::BadRequest,
            CustomerError::NotFound | CustomerError::NotUpdated => ErrorKind::NotFound,
            CustomerError::MethodNotAllowed => ErrorKind::MethodNotAllowed,
            CustomerError::BodyRead { .. }
            | CustomerError::MalformedBody { .. }
            | CustomerError::Storage { .. } => ErrorKind::InternalServerError,
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            CustomerError::Storage { operation, source } => {
                tracing::error!(operation = operation.as_str(), error = %source, "Customer database error");
            }
            CustomerError::BodyRead { operation, source } => {
                tracing::warn!(operation = operation.as_str(), error = %source, "Customer payload unreadable");
            }
            CustomerError::MalformedBody { operation, source } => {
                tracing::warn!(operation = operation.as_str(), error = %source, "Malformed customer payload");
            }
            _ => {
                tracing::debug!(error = %self, "Customer request rejected");
            }
        }
    }
}

impl From<CustomerError> for AppError {
    fn from(err: CustomerError) -> Self {
        let kind = err.kind();
        let message = err.to_string();
        AppError::new(kind, message).with_source(err)
    }
}

impl IntoResponse for CustomerError {
    fn into_response(self) -> Response {
        self.log();
        AppError::from(self).into_response()
    }
}
