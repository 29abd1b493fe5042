//! Article domain model
//!
//! Articles are authored independently of organizations; an organization
//! only ever holds references to articles submitted to it for review.
//! The review lifecycle is an explicit state enum rather than a boolean
//! flag, so illegal transitions are unrepresentable.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use uuid::Uuid;

/// Review lifecycle state of an article.
///
/// ```text
/// Draft ──submit──→ PendingReview ──publish──→ Published
/// ```
///
/// There is no reject or cancel transition: once submitted, an article
/// stays pending until it is published or its organization is deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReviewState {
    /// Not submitted to any organization
    Draft,
    /// Submitted and awaiting moderator review
    PendingReview,
    /// Approved and published by a moderator
    Published,
}

/// An article referenced by an organization's review queue.
///
/// # Examples
///
/// ```
/// use uuid::Uuid;
/// use masthead_org::{Article, ReviewState};
///
/// let author = Uuid::now_v7();
/// let mut article = Article::new("Hello", "Intro", "Body text", author);
/// assert_eq!(article.state, ReviewState::Draft);
///
/// article.add_tag("essays");
/// assert!(article.tags.contains("essays"));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Article {
    /// Unique article ID
    pub id: Uuid,

    /// Title
    pub title: String,

    /// Short description
    pub description: String,

    /// Body text
    pub body: String,

    /// Authoring profile
    pub author: Uuid,

    /// Normalized tag names
    pub tags: BTreeSet<String>,

    /// Review lifecycle state
    pub state: ReviewState,

    /// Organization holding the article in its review queue, while pending
    pub organization: Option<Uuid>,

    /// When the article was created
    pub created_at: DateTime<Utc>,

    /// When the article was last updated
    pub updated_at: DateTime<Utc>,
}

impl Article {
    /// Creates a new draft article.
    ///
    /// # Arguments
    ///
    /// * `title` - Article title
    /// * `description` - Short description
    /// * `body` - Body text
    /// * `author` - Authoring profile ID
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        body: impl Into<String>,
        author: Uuid,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::now_v7(),
            title: title.into(),
            description: description.into(),
            body: body.into(),
            author,
            tags: BTreeSet::new(),
            state: ReviewState::Draft,
            organization: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Add a tag, normalizing surrounding whitespace.
    ///
    /// Empty tags are rejected; re-adding an existing tag is a no-op.
    ///
    /// # Returns
    ///
    /// `true` if the tag was newly added
    pub fn add_tag(&mut self, tag: impl AsRef<str>) -> bool {
        let tag = tag.as_ref().trim();
        if tag.is_empty() {
            return false;
        }
        let added = self.tags.insert(tag.to_string());
        if added {
            self.touch();
        }
        added
    }

    /// Whether the article is awaiting moderator review.
    pub fn needs_review(&self) -> bool {
        self.state == ReviewState::PendingReview
    }

    pub(crate) fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}
