//! # Masthead Platform Store
//!
//! This crate provides the shared persistence layer for the Masthead
//! platform: a single in-memory store holding organizations, articles,
//! profiles, and the tag registry.
//!
//! ## Overview
//!
//! The masthead-store crate handles:
//! - **Organizations**: CRUD keyed by slug, with atomic slug uniqueness
//! - **Membership**: follow/unfollow and the moderator-gated operations
//! - **Review**: article submission and publication, with the pending
//!   queue and article state updated in one transaction
//! - **Profiles**: a minimal directory keyed by id and username
//! - **Tags**: a platform-wide registry, created on demand at submission
//!
//! ## Transaction model
//!
//! All records live behind one `tokio::sync::RwLock`. Every mutating
//! operation is a single read-modify-write under the write guard, so a
//! slug-uniqueness check and the insert it guards are atomic, and a
//! promote cannot race a concurrent demotion of the acting moderator.
//! Reads take the read guard and return owned clones.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use masthead_org::Profile;
//! use masthead_store::PlatformStore;
//!
//! # async fn demo() -> Result<(), masthead_store::StoreError> {
//! let store = PlatformStore::new();
//! let founder = store.register_profile(Profile::new("valjean")).await?;
//! let org = store
//!     .create_organization("Acme Press", "Independent essays", "acme", founder.id)
//!     .await?;
//! assert!(org.is_moderator(founder.id));
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod membership;
pub mod review;
pub mod store;

// Re-export main types for convenience
pub use error::{StoreError, StoreResult};
pub use masthead_org::OrganizationChanges;
pub use membership::Roster;
pub use review::ArticleDraft;
pub use store::PlatformStore;
