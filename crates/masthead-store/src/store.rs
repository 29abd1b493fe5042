//! Platform store core
//!
//! This module provides [`PlatformStore`], the single shared resource of
//! the platform, together with the organization CRUD surface and the
//! profile directory. Membership and review operations live in the
//! sibling modules and share the same lock.

use std::collections::{BTreeSet, HashMap};

use masthead_org::{
    is_valid_slug, Article, Organization, OrganizationChanges, OrganizationSummary, Profile,
};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::{StoreError, StoreResult};

/// In-memory platform store.
///
/// All records live behind one `RwLock`; every mutating operation is a
/// single read-modify-write under the write guard. This is the
/// transactional isolation the platform relies on: slug uniqueness
/// checks are atomic with the insert they guard, and membership changes
/// cannot interleave.
///
/// Reads return owned clones, so callers never hold the lock across
/// serialization or I/O.
pub struct PlatformStore {
    pub(crate) inner: RwLock<Inner>,
}

#[derive(Default)]
pub(crate) struct Inner {
    /// Organizations keyed by slug
    pub(crate) organizations: HashMap<String, Organization>,

    /// Articles keyed by id
    pub(crate) articles: HashMap<Uuid, Article>,

    /// Title index into `articles` (most recent submission wins)
    pub(crate) titles: HashMap<String, Uuid>,

    /// Profiles keyed by id
    pub(crate) profiles: HashMap<Uuid, Profile>,

    /// Username index into `profiles`
    pub(crate) usernames: HashMap<String, Uuid>,

    /// Platform-wide tag registry
    pub(crate) tags: BTreeSet<String>,
}

impl Inner {
    pub(crate) fn organization(&self, slug: &str) -> StoreResult<&Organization> {
        self.organizations
            .get(slug)
            .ok_or_else(|| StoreError::organization_not_found(slug))
    }

    pub(crate) fn require_profile(&self, id: Uuid) -> StoreResult<&Profile> {
        self.profiles
            .get(&id)
            .ok_or_else(|| StoreError::profile_not_found(id.to_string()))
    }
}

impl PlatformStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner::default()),
        }
    }

    // ------------------------------------------------------------------
    // Profiles
    // ------------------------------------------------------------------

    /// Register a profile in the directory.
    ///
    /// # Errors
    ///
    /// [`StoreError::DuplicateUsername`] if the username is taken
    pub async fn register_profile(&self, profile: Profile) -> StoreResult<Profile> {
        let mut guard = self.inner.write().await;
        let inner = &mut *guard;

        if inner.usernames.contains_key(&profile.username) {
            return Err(StoreError::DuplicateUsername(profile.username));
        }
        inner
            .usernames
            .insert(profile.username.clone(), profile.id);
        inner.profiles.insert(profile.id, profile.clone());

        tracing::debug!(username = %profile.username, "profile registered");
        Ok(profile)
    }

    /// Fetch a profile by id.
    pub async fn profile(&self, id: Uuid) -> StoreResult<Profile> {
        let inner = self.inner.read().await;
        inner.require_profile(id).cloned()
    }

    /// Fetch a profile by username.
    pub async fn profile_by_username(&self, username: &str) -> StoreResult<Profile> {
        let inner = self.inner.read().await;
        inner
            .usernames
            .get(username)
            .and_then(|id| inner.profiles.get(id))
            .cloned()
            .ok_or_else(|| StoreError::profile_not_found(username))
    }

    // ------------------------------------------------------------------
    // Organizations
    // ------------------------------------------------------------------

    /// Create an organization.
    ///
    /// The creator is seated as the first moderator.
    ///
    /// # Errors
    ///
    /// - [`StoreError::InvalidSlug`] if the slug is not URL-safe
    /// - [`StoreError::DuplicateSlug`] if the slug is taken
    /// - [`StoreError::NotFound`] if the creator profile is unknown
    pub async fn create_organization(
        &self,
        name: impl Into<String>,
        description: impl Into<String>,
        slug: impl Into<String>,
        creator: Uuid,
    ) -> StoreResult<Organization> {
        let slug = slug.into();
        let mut guard = self.inner.write().await;
        let inner = &mut *guard;

        if !is_valid_slug(&slug) {
            return Err(StoreError::InvalidSlug(slug));
        }
        if inner.organizations.contains_key(&slug) {
            return Err(StoreError::DuplicateSlug(slug));
        }
        inner.require_profile(creator)?;

        let org = Organization::new(name, description, slug, creator);
        inner.organizations.insert(org.slug.clone(), org.clone());

        tracing::info!(slug = %org.slug, "organization created");
        Ok(org)
    }

    /// Fetch an organization by slug.
    pub async fn organization(&self, slug: &str) -> StoreResult<Organization> {
        let inner = self.inner.read().await;
        inner.organization(slug).cloned()
    }

    /// List all organizations as summaries, ordered by slug.
    pub async fn organizations(&self) -> Vec<OrganizationSummary> {
        let inner = self.inner.read().await;
        let mut summaries: Vec<_> = inner
            .organizations
            .values()
            .map(Organization::summarize)
            .collect();
        summaries.sort_by(|a, b| a.slug.cmp(&b.slug));
        summaries
    }

    /// Apply a partial update, including an optional slug rename.
    ///
    /// A failed rename leaves the original record (and slug) intact.
    ///
    /// # Errors
    ///
    /// - [`StoreError::NotFound`] if the organization is absent
    /// - [`StoreError::InvalidSlug`] / [`StoreError::DuplicateSlug`] on a
    ///   bad rename target
    pub async fn update_organization(
        &self,
        slug: &str,
        changes: OrganizationChanges,
    ) -> StoreResult<Organization> {
        let mut guard = self.inner.write().await;
        let inner = &mut *guard;

        if !inner.organizations.contains_key(slug) {
            return Err(StoreError::organization_not_found(slug));
        }
        if let Some(new_slug) = changes.slug.as_deref() {
            if new_slug != slug {
                if !is_valid_slug(new_slug) {
                    return Err(StoreError::InvalidSlug(new_slug.to_string()));
                }
                if inner.organizations.contains_key(new_slug) {
                    return Err(StoreError::DuplicateSlug(new_slug.to_string()));
                }
            }
        }

        // Validation passed; the record can safely move to its new key.
        let mut org = match inner.organizations.remove(slug) {
            Some(org) => org,
            None => return Err(StoreError::organization_not_found(slug)),
        };
        org.apply(changes);
        let updated = org.clone();
        inner.organizations.insert(org.slug.clone(), org);

        tracing::info!(slug, new_slug = %updated.slug, "organization updated");
        Ok(updated)
    }

    /// Delete an organization.
    ///
    /// Membership references die with the record. Pending articles fall
    /// back to drafts, since nothing is left to review them.
    ///
    /// # Errors
    ///
    /// [`StoreError::NotFound`] if the organization is absent
    pub async fn delete_organization(&self, slug: &str) -> StoreResult<()> {
        let mut guard = self.inner.write().await;
        let inner = &mut *guard;

        let org = inner
            .organizations
            .remove(slug)
            .ok_or_else(|| StoreError::organization_not_found(slug))?;

        for article_id in &org.pending_articles {
            if let Some(article) = inner.articles.get_mut(article_id) {
                article.revert_to_draft();
            }
        }

        tracing::info!(slug, pending = org.pending_articles.len(), "organization deleted");
        Ok(())
    }

    // ------------------------------------------------------------------
    // Tags
    // ------------------------------------------------------------------

    /// List all known tags, ordered.
    pub async fn tags(&self) -> Vec<String> {
        let inner = self.inner.read().await;
        inner.tags.iter().cloned().collect()
    }
}

impl Default for PlatformStore {
    fn default() -> Self {
        Self::new()
    }
}
