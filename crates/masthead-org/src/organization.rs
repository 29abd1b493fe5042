//! Organization domain model
//!
//! This module provides the core Organization entity. Organizations are
//! named groups that curate articles: profiles follow them as members,
//! moderators review submissions, and articles awaiting review are held
//! in the pending set.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use uuid::Uuid;

/// Maximum length of an organization slug.
pub const MAX_SLUG_LEN: usize = 64;

/// An organization is a named group that curates articles.
///
/// Profiles follow an organization as members; moderators hold elevated
/// rights (promoting members, removing members, publishing pending
/// articles). A moderator is implicitly also a member for access
/// purposes.
///
/// # Invariants
///
/// - The slug is unique across all organizations (enforced by the store).
/// - The creator is a moderator immediately after creation.
///
/// # Examples
///
/// ```
/// use uuid::Uuid;
/// use masthead_org::Organization;
///
/// let creator = Uuid::now_v7();
/// let org = Organization::new("Acme Press", "Independent essays", "acme", creator);
/// assert_eq!(org.slug, "acme");
/// assert!(org.is_moderator(creator));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Organization {
    /// Unique identifier for the organization
    pub id: Uuid,

    /// Human-readable name
    pub name: String,

    /// Free-text description
    pub description: String,

    /// URL-friendly slug (unique across the platform)
    pub slug: String,

    /// Profiles with elevated rights
    pub moderators: BTreeSet<Uuid>,

    /// Profiles following the organization
    pub members: BTreeSet<Uuid>,

    /// Articles awaiting moderator review
    pub pending_articles: BTreeSet<Uuid>,

    /// When the organization was created
    pub created_at: DateTime<Utc>,

    /// When the organization was last updated
    pub updated_at: DateTime<Utc>,
}

impl Organization {
    /// Creates a new organization.
    ///
    /// The organization is created with:
    /// - A newly generated UUID v7 ID
    /// - The creator seated as the first moderator
    /// - Empty member and pending-article sets
    /// - Current timestamp for created_at and updated_at
    ///
    /// # Arguments
    ///
    /// * `name` - The organization name
    /// * `description` - Free-text description
    /// * `slug` - URL-friendly slug (must be unique; see [`is_valid_slug`])
    /// * `creator` - The profile ID of the creating user
    ///
    /// # Examples
    ///
    /// ```
    /// use uuid::Uuid;
    /// use masthead_org::Organization;
    ///
    /// let creator = Uuid::now_v7();
    /// let org = Organization::new("Acme Press", "Independent essays", "acme", creator);
    /// ```
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        slug: impl Into<String>,
        creator: Uuid,
    ) -> Self {
        let now = Utc::now();
        let mut moderators = BTreeSet::new();
        moderators.insert(creator);
        Self {
            id: Uuid::now_v7(),
            name: name.into(),
            description: description.into(),
            slug: slug.into(),
            moderators,
            members: BTreeSet::new(),
            pending_articles: BTreeSet::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply a rename of the slug.
    ///
    /// Uniqueness against other organizations is the store's concern;
    /// this only swaps the value and bumps the update timestamp.
    pub fn rename_slug(&mut self, slug: impl Into<String>) {
        self.slug = slug.into();
        self.touch();
    }

    /// Number of member profiles, counting moderators.
    pub fn member_count(&self) -> usize {
        self.members.union(&self.moderators).count()
    }

    /// Produce a lightweight summary for list displays.
    pub fn summarize(&self) -> OrganizationSummary {
        OrganizationSummary {
            id: self.id,
            name: self.name.clone(),
            slug: self.slug.clone(),
            description: self.description.clone(),
            member_count: self.member_count() as u32,
            moderator_count: self.moderators.len() as u32,
            pending_count: self.pending_articles.len() as u32,
        }
    }

    /// Apply a partial update.
    ///
    /// Unset fields are left untouched. Slug uniqueness is the store's
    /// concern and must be checked before applying a rename.
    ///
    /// # Examples
    ///
    /// ```
    /// use uuid::Uuid;
    /// use masthead_org::{Organization, OrganizationChanges};
    ///
    /// let mut org = Organization::new("Acme Press", "", "acme", Uuid::now_v7());
    /// org.apply(OrganizationChanges {
    ///     description: Some("Independent essays".to_string()),
    ///     ..Default::default()
    /// });
    /// assert_eq!(org.description, "Independent essays");
    /// assert_eq!(org.slug, "acme");
    /// ```
    pub fn apply(&mut self, changes: OrganizationChanges) {
        let mut changed = false;
        if let Some(name) = changes.name {
            self.name = name;
            changed = true;
        }
        if let Some(description) = changes.description {
            self.description = description;
            changed = true;
        }
        if let Some(slug) = changes.slug {
            self.slug = slug;
            changed = true;
        }
        if changed {
            self.touch();
        }
    }

    pub(crate) fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

/// A partial update to an organization.
///
/// Unset fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrganizationChanges {
    /// New name
    pub name: Option<String>,

    /// New description
    pub description: Option<String>,

    /// New slug (rename)
    pub slug: Option<String>,
}

impl OrganizationChanges {
    /// Whether the update changes nothing.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.description.is_none() && self.slug.is_none()
    }
}

/// Check whether a string is a valid organization slug.
///
/// Valid slugs are non-empty, at most [`MAX_SLUG_LEN`] characters, made
/// of ASCII lowercase alphanumerics and `-`, and contain no leading,
/// trailing, or doubled `-`.
///
/// # Examples
///
/// ```
/// use masthead_org::is_valid_slug;
///
/// assert!(is_valid_slug("acme"));
/// assert!(is_valid_slug("acme-press-2"));
/// assert!(!is_valid_slug("Acme"));
/// assert!(!is_valid_slug("-acme"));
/// assert!(!is_valid_slug("acme--press"));
/// ```
pub fn is_valid_slug(slug: &str) -> bool {
    if slug.is_empty() || slug.len() > MAX_SLUG_LEN {
        return false;
    }
    if slug.starts_with('-') || slug.ends_with('-') || slug.contains("--") {
        return false;
    }
    slug.chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

/// Summary of an organization for list displays.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrganizationSummary {
    /// Organization ID
    pub id: Uuid,

    /// Organization name
    pub name: String,

    /// Slug
    pub slug: String,

    /// Description
    pub description: String,

    /// Number of members (moderators included)
    pub member_count: u32,

    /// Number of moderators
    pub moderator_count: u32,

    /// Number of articles awaiting review
    pub pending_count: u32,
}
