//! Error types for API operations
//!
//! This module defines the failure taxonomy surfaced to API callers,
//! with mappings to HTTP status codes and machine-readable error codes.

use masthead_org::{PolicyError, WorkflowError};
use masthead_store::StoreError;
use thiserror::Error;

/// API error types.
///
/// Every error carries a machine-readable code and maps onto one HTTP
/// status; the response body is `{"error": {"code", "message"}}`.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Route requires an authenticated caller
    #[error("authentication required")]
    AuthRequired,

    /// Caller lacks the required role
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    /// Slug collision on create or rename
    #[error("slug already exists: {0}")]
    DuplicateSlug(String),

    /// Slug is not URL-safe
    #[error("invalid slug: {0}")]
    InvalidSlug(String),

    /// Username collision on profile registration
    #[error("username already exists: {0}")]
    DuplicateUsername(String),

    /// Organization, article, profile, or route is absent
    #[error("not found: {0}")]
    NotFound(String),

    /// Publish attempted on an article that is not pending review
    #[error("not pending: {0}")]
    NotPending(String),

    /// Submit attempted on an article that is not a draft
    #[error("already submitted: {0}")]
    AlreadySubmitted(String),

    /// Request body failed to parse or validate
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Internal error
    #[error("internal error: {0}")]
    Internal(String),
}

/// Result type for API operations.
pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    /// Check if this error should be logged at error level.
    ///
    /// Client-caused errors (bad slugs, missing records) are expected
    /// and should not be logged as errors.
    pub fn is_server_error(&self) -> bool {
        matches!(self, ApiError::Internal(_))
    }

    /// Get HTTP status code for this error.
    pub fn status_code(&self) -> u16 {
        match self {
            ApiError::AuthRequired => 401,
            ApiError::Unauthorized(_) => 403,
            ApiError::NotFound(_) => 404,
            ApiError::NotPending(_) | ApiError::AlreadySubmitted(_) => 409,
            ApiError::DuplicateSlug(_)
            | ApiError::InvalidSlug(_)
            | ApiError::DuplicateUsername(_) => 422,
            ApiError::InvalidRequest(_) => 400,
            ApiError::Internal(_) => 500,
        }
    }

    /// Get error code for API responses.
    pub fn error_code(&self) -> &'static str {
        match self {
            ApiError::AuthRequired => "AUTH_REQUIRED",
            ApiError::Unauthorized(_) => "UNAUTHORIZED",
            ApiError::DuplicateSlug(_) => "DUPLICATE_SLUG",
            ApiError::InvalidSlug(_) => "INVALID_SLUG",
            ApiError::DuplicateUsername(_) => "DUPLICATE_USERNAME",
            ApiError::NotFound(_) => "NOT_FOUND",
            ApiError::NotPending(_) => "NOT_PENDING",
            ApiError::AlreadySubmitted(_) => "ALREADY_SUBMITTED",
            ApiError::InvalidRequest(_) => "INVALID_REQUEST",
            ApiError::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::DuplicateSlug(slug) => ApiError::DuplicateSlug(slug),
            StoreError::InvalidSlug(slug) => ApiError::InvalidSlug(slug),
            StoreError::DuplicateUsername(name) => ApiError::DuplicateUsername(name),
            StoreError::NotFound { kind, key } => ApiError::NotFound(format!("{kind} {key}")),
            StoreError::Policy(PolicyError::Unauthorized { .. }) => {
                ApiError::Unauthorized("moderator role required".to_string())
            }
            StoreError::Workflow(WorkflowError::NotPending { title, org }) => {
                ApiError::NotPending(format!("article '{title}' in '{org}'"))
            }
            StoreError::Workflow(WorkflowError::AlreadySubmitted { title }) => {
                ApiError::AlreadySubmitted(format!("article '{title}'"))
            }
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Internal(err.to_string())
    }
}
