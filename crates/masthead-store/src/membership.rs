//! Membership operations
//!
//! Transactional wrappers around the domain membership policy: each
//! operation loads the organization under the write guard, applies the
//! pure policy method, and returns the updated records. The acting
//! profile is always an explicit argument.

use masthead_org::{Organization, Profile};
use std::collections::BTreeSet;
use uuid::Uuid;

use crate::error::{StoreError, StoreResult};
use crate::store::PlatformStore;

/// Resolved membership of one organization.
///
/// Moderators are listed separately; a moderator appears under `members`
/// only if they also follow the organization explicitly.
#[derive(Debug, Clone)]
pub struct Roster {
    /// Profiles following the organization
    pub members: Vec<Profile>,

    /// Profiles with elevated rights
    pub moderators: Vec<Profile>,
}

impl PlatformStore {
    /// Add a profile to an organization's members.
    ///
    /// Idempotent: following twice leaves the member set unchanged.
    ///
    /// # Errors
    ///
    /// [`StoreError::NotFound`] if the organization or profile is absent
    pub async fn follow(&self, slug: &str, profile: Uuid) -> StoreResult<Organization> {
        let mut guard = self.inner.write().await;
        let inner = &mut *guard;

        inner.require_profile(profile)?;
        let org = inner
            .organizations
            .get_mut(slug)
            .ok_or_else(|| StoreError::organization_not_found(slug))?;
        org.follow(profile);

        tracing::debug!(slug, profile = %profile, "profile followed organization");
        Ok(org.clone())
    }

    /// Remove a profile from an organization's members.
    ///
    /// Idempotent: unfollowing an absent member is a no-op.
    ///
    /// # Errors
    ///
    /// [`StoreError::NotFound`] if the organization or profile is absent
    pub async fn unfollow(&self, slug: &str, profile: Uuid) -> StoreResult<Organization> {
        let mut guard = self.inner.write().await;
        let inner = &mut *guard;

        inner.require_profile(profile)?;
        let org = inner
            .organizations
            .get_mut(slug)
            .ok_or_else(|| StoreError::organization_not_found(slug))?;
        org.unfollow(profile);

        tracing::debug!(slug, profile = %profile, "profile unfollowed organization");
        Ok(org.clone())
    }

    /// Resolve an organization's members and moderators to profiles.
    ///
    /// Dangling references (profiles no longer in the directory) are
    /// skipped rather than surfaced.
    pub async fn roster(&self, slug: &str) -> StoreResult<Roster> {
        let inner = self.inner.read().await;
        let org = inner.organization(slug)?;

        let resolve = |ids: &BTreeSet<Uuid>| -> Vec<Profile> {
            ids.iter()
                .filter_map(|id| inner.profiles.get(id))
                .cloned()
                .collect()
        };

        Ok(Roster {
            members: resolve(&org.members),
            moderators: resolve(&org.moderators),
        })
    }

    /// Promote a member to moderator, on behalf of `acting`.
    ///
    /// The target is looked up by username. The policy check and the
    /// promotion happen under one write guard, so the acting moderator
    /// cannot be demoted concurrently.
    ///
    /// # Errors
    ///
    /// - [`StoreError::NotFound`] if the organization or target is absent
    /// - [`StoreError::Policy`] if `acting` is not a moderator
    pub async fn promote(&self, slug: &str, acting: Uuid, username: &str) -> StoreResult<Profile> {
        let mut guard = self.inner.write().await;
        let inner = &mut *guard;

        let target = inner
            .usernames
            .get(username)
            .and_then(|id| inner.profiles.get(id))
            .cloned()
            .ok_or_else(|| StoreError::profile_not_found(username))?;
        let org = inner
            .organizations
            .get_mut(slug)
            .ok_or_else(|| StoreError::organization_not_found(slug))?;
        org.promote(acting, target.id)?;

        tracing::info!(slug, target = %target.username, "member promoted to moderator");
        Ok(target)
    }

    /// Remove a member from an organization, on behalf of `acting`.
    ///
    /// The target is looked up by username and loses the moderator role
    /// too if it held one.
    ///
    /// # Errors
    ///
    /// - [`StoreError::NotFound`] if the organization or target is absent
    /// - [`StoreError::Policy`] if `acting` is not a moderator
    pub async fn remove_member(
        &self,
        slug: &str,
        acting: Uuid,
        username: &str,
    ) -> StoreResult<Profile> {
        let mut guard = self.inner.write().await;
        let inner = &mut *guard;

        let target = inner
            .usernames
            .get(username)
            .and_then(|id| inner.profiles.get(id))
            .cloned()
            .ok_or_else(|| StoreError::profile_not_found(username))?;
        let org = inner
            .organizations
            .get_mut(slug)
            .ok_or_else(|| StoreError::organization_not_found(slug))?;
        org.remove_member(acting, target.id)?;

        tracing::info!(slug, target = %target.username, "member removed");
        Ok(target)
    }

    /// Resolve a set of profile ids, skipping dangling references.
    pub async fn profiles_of(&self, ids: &BTreeSet<Uuid>) -> Vec<Profile> {
        let inner = self.inner.read().await;
        ids.iter()
            .filter_map(|id| inner.profiles.get(id))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn fixture() -> (PlatformStore, Profile, Profile) {
        let store = PlatformStore::new();
        let founder = store
            .register_profile(Profile::new("valjean"))
            .await
            .unwrap();
        let reader = store
            .register_profile(Profile::new("cosette"))
            .await
            .unwrap();
        store
            .create_organization("Acme Press", "", "acme", founder.id)
            .await
            .unwrap();
        (store, founder, reader)
    }

    #[tokio::test]
    async fn test_follow_is_idempotent() {
        let (store, _, reader) = fixture().await;

        let first = store.follow("acme", reader.id).await.unwrap();
        let second = store.follow("acme", reader.id).await.unwrap();
        assert_eq!(first.members, second.members);
        assert_eq!(second.members.len(), 1);
    }

    #[tokio::test]
    async fn test_unfollow_is_idempotent() {
        let (store, _, reader) = fixture().await;
        store.follow("acme", reader.id).await.unwrap();

        store.unfollow("acme", reader.id).await.unwrap();
        let org = store.unfollow("acme", reader.id).await.unwrap();
        assert!(org.members.is_empty());
    }

    #[tokio::test]
    async fn test_follow_unknown_org() {
        let (store, _, reader) = fixture().await;

        let err = store.follow("nope", reader.id).await.unwrap_err();
        assert!(matches!(
            err,
            StoreError::NotFound {
                kind: "organization",
                ..
            }
        ));
    }

    #[tokio::test]
    async fn test_roster_splits_roles() {
        let (store, founder, reader) = fixture().await;
        store.follow("acme", reader.id).await.unwrap();

        let roster = store.roster("acme").await.unwrap();
        assert_eq!(roster.members.len(), 1);
        assert_eq!(roster.members[0].username, "cosette");
        assert_eq!(roster.moderators.len(), 1);
        assert_eq!(roster.moderators[0].id, founder.id);
    }

    #[tokio::test]
    async fn test_promote_by_moderator() {
        let (store, founder, reader) = fixture().await;
        store.follow("acme", reader.id).await.unwrap();

        let promoted = store
            .promote("acme", founder.id, "cosette")
            .await
            .unwrap();
        assert_eq!(promoted.id, reader.id);

        let org = store.organization("acme").await.unwrap();
        assert!(org.is_moderator(reader.id));
    }

    #[tokio::test]
    async fn test_promote_by_non_moderator_is_unauthorized() {
        let (store, _, reader) = fixture().await;
        store.follow("acme", reader.id).await.unwrap();

        let err = store
            .promote("acme", reader.id, "valjean")
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::Policy(_)));
    }

    #[tokio::test]
    async fn test_promote_unknown_username() {
        let (store, founder, _) = fixture().await;

        let err = store
            .promote("acme", founder.id, "nobody")
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::NotFound { kind: "profile", .. }));
    }

    #[tokio::test]
    async fn test_remove_member() {
        let (store, founder, reader) = fixture().await;
        store.follow("acme", reader.id).await.unwrap();

        store
            .remove_member("acme", founder.id, "cosette")
            .await
            .unwrap();
        let org = store.organization("acme").await.unwrap();
        assert!(!org.is_member(reader.id));
    }

    #[tokio::test]
    async fn test_remove_member_by_non_moderator_is_unauthorized() {
        let (store, _, reader) = fixture().await;
        store.follow("acme", reader.id).await.unwrap();

        let err = store
            .remove_member("acme", reader.id, "valjean")
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::Policy(_)));
    }
}
