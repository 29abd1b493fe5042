//! Profile domain model
//!
//! Profiles are the public identities of platform users. They are owned
//! by the user subsystem; organizations only hold references to them.
//! This module carries the fields the organization surface touches.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A user's public identity, referenced (not owned) by organizations.
///
/// # Examples
///
/// ```
/// use masthead_org::Profile;
///
/// let profile = Profile::new("valjean").with_bio("Essayist");
/// assert_eq!(profile.username, "valjean");
/// assert_eq!(profile.bio.as_deref(), Some("Essayist"));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    /// Unique profile ID
    pub id: Uuid,

    /// Unique username
    pub username: String,

    /// Short biography
    pub bio: Option<String>,

    /// Avatar image URL
    pub image: Option<String>,

    /// When the profile was created
    pub created_at: DateTime<Utc>,
}

impl Profile {
    /// Creates a new profile with a generated UUID v7 ID.
    ///
    /// # Arguments
    ///
    /// * `username` - Unique username
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            id: Uuid::now_v7(),
            username: username.into(),
            bio: None,
            image: None,
            created_at: Utc::now(),
        }
    }

    /// Set the biography.
    pub fn with_bio(mut self, bio: impl Into<String>) -> Self {
        self.bio = Some(bio.into());
        self
    }

    /// Set the avatar image URL.
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }
}
