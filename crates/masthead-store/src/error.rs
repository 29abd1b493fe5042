//! Error types for store operations
//!
//! This module defines the failures a store operation can surface:
//! uniqueness violations, missing records, and the policy/workflow
//! errors propagated from the domain layer.

use masthead_org::{PolicyError, WorkflowError};
use thiserror::Error;

/// Store error types.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Slug collision on create or rename
    #[error("organization slug already exists: {0}")]
    DuplicateSlug(String),

    /// Slug is not URL-safe
    #[error("invalid organization slug: {0}")]
    InvalidSlug(String),

    /// Username collision on profile registration
    #[error("username already exists: {0}")]
    DuplicateUsername(String),

    /// A referenced record is absent
    #[error("{kind} not found: {key}")]
    NotFound {
        /// Record kind ("organization", "article", "profile")
        kind: &'static str,
        /// Lookup key that missed
        key: String,
    },

    /// Membership policy rejected the operation
    #[error(transparent)]
    Policy(#[from] PolicyError),

    /// Review workflow rejected the transition
    #[error(transparent)]
    Workflow(#[from] WorkflowError),
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

impl StoreError {
    /// An absent organization.
    pub fn organization_not_found(slug: impl Into<String>) -> Self {
        Self::NotFound {
            kind: "organization",
            key: slug.into(),
        }
    }

    /// An absent article.
    pub fn article_not_found(key: impl Into<String>) -> Self {
        Self::NotFound {
            kind: "article",
            key: key.into(),
        }
    }

    /// An absent profile.
    pub fn profile_not_found(key: impl Into<String>) -> Self {
        Self::NotFound {
            kind: "profile",
            key: key.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message() {
        let err = StoreError::organization_not_found("acme");
        assert_eq!(err.to_string(), "organization not found: acme");
    }

    #[test]
    fn test_policy_error_is_transparent() {
        let policy = PolicyError::Unauthorized {
            actor: uuid::Uuid::now_v7(),
            org: "acme".to_string(),
        };
        let message = policy.to_string();
        let err: StoreError = policy.into();
        assert_eq!(err.to_string(), message);
    }
}
