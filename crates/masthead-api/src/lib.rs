//! # Masthead API
//!
//! This crate provides the API dispatch surface for the Masthead
//! platform's organization features: creating and managing
//! organizations, following them, managing members and moderators, and
//! the article review workflow.
//!
//! ## Overview
//!
//! The masthead-api crate handles:
//! - **Dispatch**: method + path routing to per-resource handlers
//! - **Context**: the acting profile travels on every request, never
//!   through ambient current-user state
//! - **Views**: camelCase wire serialization resolving internal ids to
//!   usernames and titles
//! - **Errors**: a machine-readable error taxonomy with HTTP status
//!   mappings
//!
//! ## Transport
//!
//! The server is transport-agnostic. An HTTP frontend (out of scope
//! here, along with token validation) translates each incoming request
//! into an [`ApiRequest`], resolving credentials to the acting profile
//! id, and writes the [`ApiResponse`] status and body back out.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use masthead_api::{ApiRequest, ApiServer, Method};
//! use masthead_org::Profile;
//! use masthead_store::PlatformStore;
//!
//! # async fn demo() -> Result<(), masthead_store::StoreError> {
//! let store = Arc::new(PlatformStore::new());
//! let founder = store.register_profile(Profile::new("valjean")).await?;
//! let server = ApiServer::platform(store);
//!
//! let response = server
//!     .handle(
//!         ApiRequest::new(Method::Post, "/api/organizations")
//!             .with_actor(founder.id)
//!             .with_body(serde_json::json!({
//!                 "name": "Acme Press",
//!                 "description": "Independent essays",
//!                 "slug": "acme",
//!             })),
//!     )
//!     .await;
//! assert_eq!(response.status, 201);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod handlers;
pub mod server;
pub mod types;
pub mod views;

// Re-export main types for convenience
pub use error::{ApiError, ApiResult};
pub use server::ApiServer;
pub use types::{ApiRequest, ApiResponse, Method, ServerInfo};
pub use views::{ArticleView, MembersView, OrganizationView, ProfileView};
