//! API server
//!
//! This module provides the [`ApiServer`], which owns the route table
//! for the organization surface and dispatches requests to the handler
//! modules. Transport is someone else's job: an HTTP frontend feeds
//! [`ApiRequest`] values in and writes [`ApiResponse`] values out.

use std::sync::Arc;

use masthead_store::PlatformStore;

use crate::error::{ApiError, ApiResult};
use crate::handlers::{articles, members, organizations};
use crate::types::{ApiRequest, ApiResponse, Method, ServerInfo};

/// The Masthead organization API.
///
/// # Routes
///
/// ```text
/// POST   /api/organizations                     create organization
/// GET    /api/organizations/{slug}              fetch organization
/// PUT    /api/organizations/{slug}              update (incl. slug rename)
/// DELETE /api/organizations/{slug}              delete organization
/// POST   /api/organizations/{slug}/follow       follow
/// DELETE /api/organizations/{slug}/follow       unfollow
/// GET    /api/organizations/{slug}/members      list members/moderators
/// POST   /api/organizations/{slug}/members      promote member
/// DELETE /api/organizations/{slug}/members      remove member
/// POST   /api/organization/{slug}/articles      submit article for review
/// DELETE /api/organization/{slug}/articles      publish pending article
/// GET    /api/organization/{slug}/articles      organization + pending articles
/// ```
///
/// The article routes use the singular `organization` path segment; the
/// frontends depend on it, so it stays.
pub struct ApiServer {
    /// Server info
    info: ServerInfo,

    /// Shared platform store
    store: Arc<PlatformStore>,
}

impl ApiServer {
    /// Create a new API server.
    pub fn new(
        name: impl Into<String>,
        version: impl Into<String>,
        store: Arc<PlatformStore>,
    ) -> Self {
        Self {
            info: ServerInfo {
                name: name.into(),
                version: version.into(),
            },
            store,
        }
    }

    /// Create with default platform configuration.
    pub fn platform(store: Arc<PlatformStore>) -> Self {
        Self::new("masthead-api", env!("CARGO_PKG_VERSION"), store)
    }

    /// Get server info.
    pub fn info(&self) -> &ServerInfo {
        &self.info
    }

    /// Get the shared store.
    pub fn store(&self) -> &PlatformStore {
        &self.store
    }

    /// Handle an API request.
    pub async fn handle(&self, request: ApiRequest) -> ApiResponse {
        tracing::debug!(method = %request.method, path = %request.path, "dispatching request");

        match self.route(&request).await {
            Ok(response) => response,
            Err(error) => {
                if error.is_server_error() {
                    tracing::error!(
                        method = %request.method,
                        path = %request.path,
                        %error,
                        "request failed"
                    );
                } else {
                    tracing::debug!(
                        method = %request.method,
                        path = %request.path,
                        code = error.error_code(),
                        "request rejected"
                    );
                }
                ApiResponse::from_error(&error)
            }
        }
    }

    async fn route(&self, request: &ApiRequest) -> ApiResult<ApiResponse> {
        let path = request.path.trim_matches('/').to_string();
        let segments: Vec<&str> = path.split('/').collect();

        match (request.method, segments.as_slice()) {
            (Method::Post, ["api", "organizations"]) => {
                organizations::create(self, request).await
            }
            (Method::Get, ["api", "organizations", slug]) => {
                organizations::get(self, slug).await
            }
            (Method::Put, ["api", "organizations", slug]) => {
                organizations::update(self, request, slug).await
            }
            (Method::Delete, ["api", "organizations", slug]) => {
                organizations::delete(self, request, slug).await
            }
            (Method::Post, ["api", "organizations", slug, "follow"]) => {
                members::follow(self, request, slug).await
            }
            (Method::Delete, ["api", "organizations", slug, "follow"]) => {
                members::unfollow(self, request, slug).await
            }
            (Method::Get, ["api", "organizations", slug, "members"]) => {
                members::list(self, request, slug).await
            }
            (Method::Post, ["api", "organizations", slug, "members"]) => {
                members::promote(self, request, slug).await
            }
            (Method::Delete, ["api", "organizations", slug, "members"]) => {
                members::remove(self, request, slug).await
            }
            (Method::Post, ["api", "organization", slug, "articles"]) => {
                articles::submit(self, request, slug).await
            }
            (Method::Delete, ["api", "organization", slug, "articles"]) => {
                articles::publish(self, request, slug).await
            }
            (Method::Get, ["api", "organization", slug, "articles"]) => {
                articles::get(self, request, slug).await
            }
            _ => Err(ApiError::NotFound(format!(
                "no route for {} /{}",
                request.method, path
            ))),
        }
    }
}
