//! # Masthead Organization Management
//!
//! This crate provides the organization domain model for the Masthead
//! publishing platform: organizations that curate articles, the profiles
//! that follow and moderate them, and the article review workflow.
//!
//! ## Overview
//!
//! The masthead-org crate handles:
//! - **Organizations**: Named groups with a unique URL-safe slug
//! - **Membership**: Followers (members) and moderators, with an explicit
//!   authorization policy for promotion and removal
//! - **Roles**: The member/moderator hierarchy
//! - **Articles**: Externally authored content referenced by organizations
//! - **Review workflow**: Draft → PendingReview → Published transitions
//!
//! ## Architecture
//!
//! ```text
//! Profile
//!   ├─ member of ────→ Organization
//!   └─ moderator of ─→   ├─ members / moderators
//!                        └─ pending articles ─→ Article (ReviewState)
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use masthead_org::{Article, Organization, Profile};
//!
//! let founder = Profile::new("valjean");
//! let mut org = Organization::new("Acme Press", "Independent essays", "acme", founder.id);
//! assert!(org.is_moderator(founder.id));
//!
//! // A reader follows the organization.
//! let reader = Profile::new("cosette");
//! org.follow(reader.id);
//! assert!(org.is_member(reader.id));
//!
//! // An author submits an article for review.
//! let mut article = Article::new("Hello", "Intro", "Body text", reader.id);
//! article.submit_for_review(org.id).unwrap();
//! org.request_review(article.id);
//! assert!(article.needs_review());
//! ```
//!
//! ## Integration
//!
//! This crate is pure domain logic. Persistence and transactional
//! isolation live in `masthead-store`; the request surface lives in
//! `masthead-api`. Every operation takes the acting profile as an
//! explicit argument; there is no ambient current-user context.
//!
//! ## Feature Flags
//!
//! - `serde`: Serialization support (enabled by default)

pub mod article;
pub mod membership;
pub mod organization;
pub mod profile;
pub mod review;
pub mod roles;

// Re-export main types for convenience
pub use article::{Article, ReviewState};
pub use membership::PolicyError;
pub use organization::{is_valid_slug, Organization, OrganizationChanges, OrganizationSummary};
pub use profile::Profile;
pub use review::WorkflowError;
pub use roles::OrganizationRole;
