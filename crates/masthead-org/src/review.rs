//! Article review workflow
//!
//! This module implements the review state machine shared between
//! articles and organizations:
//!
//! ```text
//! Draft ──submit──→ PendingReview ──publish──→ Published
//! ```
//!
//! The article side tracks the lifecycle state; the organization side
//! tracks the pending queue. The store applies both halves inside one
//! transaction so they cannot drift apart.

use thiserror::Error;
use uuid::Uuid;

use crate::article::{Article, ReviewState};
use crate::organization::Organization;

/// Review workflow error types.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum WorkflowError {
    /// Submit attempted on an article that is not a draft
    #[error("article '{title}' has already been submitted for review")]
    AlreadySubmitted {
        /// Title of the article
        title: String,
    },

    /// Publish attempted on an article that is not pending review
    #[error("article '{title}' is not pending review in '{org}'")]
    NotPending {
        /// Title of the article
        title: String,
        /// Slug of the organization
        org: String,
    },
}

/// Result type for review workflow operations.
pub type WorkflowResult<T> = Result<T, WorkflowError>;

impl Article {
    /// Submit this article to an organization for review.
    ///
    /// Valid only from [`ReviewState::Draft`]. On success the article is
    /// [`ReviewState::PendingReview`] and records the organization it was
    /// submitted to. The caller is responsible for adding the article to
    /// the organization's pending queue ([`Organization::request_review`]).
    ///
    /// # Errors
    ///
    /// [`WorkflowError::AlreadySubmitted`] if the article is not a draft
    pub fn submit_for_review(&mut self, org: Uuid) -> WorkflowResult<()> {
        if self.state != ReviewState::Draft {
            return Err(WorkflowError::AlreadySubmitted {
                title: self.title.clone(),
            });
        }
        self.state = ReviewState::PendingReview;
        self.organization = Some(org);
        self.touch();
        Ok(())
    }

    /// Return a pending article to draft.
    ///
    /// Used by the deletion cascade when the reviewing organization
    /// disappears; this is not a caller-facing transition. There is no
    /// reject or cancel in the review workflow.
    ///
    /// # Returns
    ///
    /// `true` if the article was pending
    pub fn revert_to_draft(&mut self) -> bool {
        if self.state != ReviewState::PendingReview {
            return false;
        }
        self.state = ReviewState::Draft;
        self.organization = None;
        self.touch();
        true
    }

    /// Publish this article.
    ///
    /// Valid only from [`ReviewState::PendingReview`]. On success the
    /// article is [`ReviewState::Published`] and no longer references a
    /// reviewing organization. The caller is responsible for removing the
    /// article from the pending queue ([`Organization::clear_review`]).
    ///
    /// # Errors
    ///
    /// [`WorkflowError::NotPending`] if the article is not pending review
    pub fn publish(&mut self, org_slug: &str) -> WorkflowResult<()> {
        if self.state != ReviewState::PendingReview {
            return Err(WorkflowError::NotPending {
                title: self.title.clone(),
                org: org_slug.to_string(),
            });
        }
        self.state = ReviewState::Published;
        self.organization = None;
        self.touch();
        Ok(())
    }
}

impl Organization {
    /// Add an article to the pending review queue.
    ///
    /// # Returns
    ///
    /// `true` if the article was newly queued
    pub fn request_review(&mut self, article: Uuid) -> bool {
        let added = self.pending_articles.insert(article);
        if added {
            self.touch();
        }
        added
    }

    /// Remove an article from the pending review queue.
    ///
    /// # Returns
    ///
    /// `true` if the article was queued
    pub fn clear_review(&mut self, article: Uuid) -> bool {
        let removed = self.pending_articles.remove(&article);
        if removed {
            self.touch();
        }
        removed
    }

    /// Check if an article is awaiting review in this organization.
    pub fn is_pending(&self, article: Uuid) -> bool {
        self.pending_articles.contains(&article)
    }
}
