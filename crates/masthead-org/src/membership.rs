//! Membership policy
//!
//! This module implements the membership operations on an organization:
//! following and unfollowing (both idempotent), role queries, and the
//! moderator-gated operations (promote, remove). The gated operations
//! fail with [`PolicyError::Unauthorized`] when the acting profile is
//! not a moderator; there is no silent no-op path.

use thiserror::Error;
use uuid::Uuid;

use crate::organization::Organization;
use crate::roles::OrganizationRole;

/// Membership policy error types.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PolicyError {
    /// Acting profile lacks the moderator role
    #[error("profile {actor} is not a moderator of '{org}'")]
    Unauthorized {
        /// The acting profile
        actor: Uuid,
        /// Slug of the organization
        org: String,
    },
}

/// Result type for membership policy operations.
pub type PolicyResult<T> = Result<T, PolicyError>;

impl Organization {
    /// Add a profile to the members.
    ///
    /// Idempotent: re-adding an existing member is a no-op.
    ///
    /// # Returns
    ///
    /// `true` if the profile was newly added
    pub fn follow(&mut self, profile: Uuid) -> bool {
        let added = self.members.insert(profile);
        if added {
            self.touch();
        }
        added
    }

    /// Remove a profile from the members.
    ///
    /// Idempotent: removing an absent member is a no-op.
    ///
    /// # Returns
    ///
    /// `true` if the profile was present
    pub fn unfollow(&mut self, profile: Uuid) -> bool {
        let removed = self.members.remove(&profile);
        if removed {
            self.touch();
        }
        removed
    }

    /// Check if a profile is a moderator.
    pub fn is_moderator(&self, profile: Uuid) -> bool {
        self.moderators.contains(&profile)
    }

    /// Check if a profile is a member.
    ///
    /// Moderators count as members for access purposes.
    pub fn is_member(&self, profile: Uuid) -> bool {
        self.members.contains(&profile) || self.is_moderator(profile)
    }

    /// Get a profile's role within this organization, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use uuid::Uuid;
    /// use masthead_org::{Organization, OrganizationRole};
    ///
    /// let creator = Uuid::now_v7();
    /// let org = Organization::new("Acme Press", "", "acme", creator);
    /// assert_eq!(org.role_of(creator), Some(OrganizationRole::Moderator));
    /// assert_eq!(org.role_of(Uuid::now_v7()), None);
    /// ```
    pub fn role_of(&self, profile: Uuid) -> Option<OrganizationRole> {
        if self.is_moderator(profile) {
            Some(OrganizationRole::Moderator)
        } else if self.members.contains(&profile) {
            Some(OrganizationRole::Member)
        } else {
            None
        }
    }

    /// Promote a profile to moderator.
    ///
    /// Succeeds only if the acting profile holds a role that can manage
    /// members. Re-promoting an existing moderator is a no-op.
    ///
    /// # Errors
    ///
    /// [`PolicyError::Unauthorized`] if `acting` is not a moderator
    pub fn promote(&mut self, acting: Uuid, target: Uuid) -> PolicyResult<()> {
        self.require_manager(acting)?;
        if self.moderators.insert(target) {
            self.touch();
        }
        Ok(())
    }

    /// Remove a profile from the organization.
    ///
    /// Succeeds only if the acting profile holds a role that can manage
    /// members. The target loses the moderator role too if it held one;
    /// a moderator that is not a member would contradict the membership
    /// model.
    ///
    /// # Errors
    ///
    /// [`PolicyError::Unauthorized`] if `acting` is not a moderator
    pub fn remove_member(&mut self, acting: Uuid, target: Uuid) -> PolicyResult<()> {
        self.require_manager(acting)?;
        let was_member = self.members.remove(&target);
        let was_moderator = self.moderators.remove(&target);
        if was_member || was_moderator {
            self.touch();
        }
        Ok(())
    }

    fn require_manager(&self, acting: Uuid) -> PolicyResult<()> {
        let can_manage = self
            .role_of(acting)
            .is_some_and(|role| role.can_manage_members());
        if can_manage {
            Ok(())
        } else {
            Err(PolicyError::Unauthorized {
                actor: acting,
                org: self.slug.clone(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn org_with_creator() -> (Organization, Uuid) {
        let creator = Uuid::now_v7();
        let org = Organization::new("Acme Press", "", "acme", creator);
        (org, creator)
    }

    #[test]
    fn test_follow_is_idempotent() {
        let (mut org, _) = org_with_creator();
        let reader = Uuid::now_v7();

        assert!(org.follow(reader));
        let members_after_first = org.members.clone();

        assert!(!org.follow(reader));
        assert_eq!(org.members, members_after_first);
    }

    #[test]
    fn test_unfollow_is_idempotent() {
        let (mut org, _) = org_with_creator();
        let reader = Uuid::now_v7();

        org.follow(reader);
        assert!(org.unfollow(reader));
        assert!(!org.unfollow(reader));
        assert!(!org.is_member(reader));
    }

    #[test]
    fn test_moderator_counts_as_member() {
        let (org, creator) = org_with_creator();

        assert!(org.is_member(creator));
        assert!(!org.members.contains(&creator));
    }

    #[test]
    fn test_promote_by_moderator() {
        let (mut org, creator) = org_with_creator();
        let reader = Uuid::now_v7();
        org.follow(reader);

        org.promote(creator, reader).unwrap();
        assert!(org.is_moderator(reader));
        assert_eq!(org.role_of(reader), Some(OrganizationRole::Moderator));
    }

    #[test]
    fn test_promote_by_non_moderator_is_unauthorized() {
        let (mut org, _) = org_with_creator();
        let reader = Uuid::now_v7();
        let target = Uuid::now_v7();
        org.follow(reader);
        org.follow(target);

        let err = org.promote(reader, target).unwrap_err();
        assert_eq!(
            err,
            PolicyError::Unauthorized {
                actor: reader,
                org: "acme".to_string(),
            }
        );
        assert!(!org.is_moderator(target));
    }

    #[test]
    fn test_remove_member_by_moderator() {
        let (mut org, creator) = org_with_creator();
        let reader = Uuid::now_v7();
        org.follow(reader);

        org.remove_member(creator, reader).unwrap();
        assert!(!org.is_member(reader));
    }

    #[test]
    fn test_remove_member_by_non_moderator_is_unauthorized() {
        let (mut org, _) = org_with_creator();
        let reader = Uuid::now_v7();
        let target = Uuid::now_v7();
        org.follow(reader);
        org.follow(target);

        assert!(org.remove_member(reader, target).is_err());
        assert!(org.is_member(target));
    }

    #[test]
    fn test_remove_member_strips_moderator_role() {
        let (mut org, creator) = org_with_creator();
        let reader = Uuid::now_v7();
        org.follow(reader);
        org.promote(creator, reader).unwrap();

        org.remove_member(creator, reader).unwrap();
        assert!(!org.is_moderator(reader));
        assert!(!org.is_member(reader));
    }
}
