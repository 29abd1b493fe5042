//! Organization roles
//!
//! This module defines the role hierarchy within an organization and the
//! capabilities each role carries.

use serde::{Deserialize, Serialize};

/// A profile's role within one organization.
///
/// Roles are hierarchical: Member < Moderator.
///
/// # Permission Model
///
/// - **Member**: Follows the organization; no elevated rights
/// - **Moderator**: Can promote members, remove members, and publish
///   pending articles
///
/// # Examples
///
/// ```
/// use masthead_org::OrganizationRole;
///
/// let role = OrganizationRole::Member;
/// assert!(!role.can_review());
///
/// let moderator = OrganizationRole::Moderator;
/// assert!(moderator.can_review());
/// assert!(moderator.can_manage_members());
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum OrganizationRole {
    /// Follows the organization without elevated rights
    Member = 0,

    /// Elevated rights within the organization
    Moderator = 1,
}

impl OrganizationRole {
    /// Check if this role can review and publish pending articles.
    ///
    /// # Returns
    ///
    /// `true` only for the Moderator role
    pub fn can_review(&self) -> bool {
        *self >= OrganizationRole::Moderator
    }

    /// Check if this role can manage members.
    ///
    /// This includes promoting members to moderator and removing members.
    ///
    /// # Returns
    ///
    /// `true` only for the Moderator role
    pub fn can_manage_members(&self) -> bool {
        *self >= OrganizationRole::Moderator
    }

    /// Parse role from string representation.
    ///
    /// # Arguments
    ///
    /// * `s` - String to parse (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use masthead_org::OrganizationRole;
    ///
    /// assert_eq!(OrganizationRole::parse("moderator"), Some(OrganizationRole::Moderator));
    /// assert_eq!(OrganizationRole::parse("MEMBER"), Some(OrganizationRole::Member));
    /// assert_eq!(OrganizationRole::parse("invalid"), None);
    /// ```
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "member" => Some(Self::Member),
            "moderator" => Some(Self::Moderator),
            _ => None,
        }
    }

    /// Get string representation of the role.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Member => "member",
            Self::Moderator => "moderator",
        }
    }

    /// Get a human-readable display name for the role.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Member => "Member",
            Self::Moderator => "Moderator",
        }
    }
}

impl Default for OrganizationRole {
    fn default() -> Self {
        Self::Member
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_hierarchy() {
        assert!(OrganizationRole::Moderator > OrganizationRole::Member);
    }

    #[test]
    fn test_role_capabilities() {
        assert!(!OrganizationRole::Member.can_review());
        assert!(!OrganizationRole::Member.can_manage_members());
        assert!(OrganizationRole::Moderator.can_review());
        assert!(OrganizationRole::Moderator.can_manage_members());
    }

    #[test]
    fn test_role_parse() {
        assert_eq!(
            OrganizationRole::parse("moderator"),
            Some(OrganizationRole::Moderator)
        );
        assert_eq!(
            OrganizationRole::parse("MEMBER"),
            Some(OrganizationRole::Member)
        );
        assert_eq!(OrganizationRole::parse("invalid"), None);
    }

    #[test]
    fn test_role_round_trip() {
        for role in [OrganizationRole::Member, OrganizationRole::Moderator] {
            assert_eq!(OrganizationRole::parse(role.as_str()), Some(role));
        }
    }
}
