//! Organization CRUD handlers

use masthead_org::OrganizationChanges;
use serde::Deserialize;

use crate::error::ApiResult;
use crate::server::ApiServer;
use crate::types::{ApiRequest, ApiResponse};
use crate::views::OrganizationView;

/// Body of `POST /api/organizations`.
#[derive(Debug, Deserialize)]
pub struct CreateOrganizationRequest {
    /// Organization name
    pub name: String,

    /// Free-text description
    #[serde(default)]
    pub description: String,

    /// URL-friendly slug
    pub slug: String,
}

/// Body of `PUT /api/organizations/{slug}`; unset fields are untouched.
#[derive(Debug, Deserialize)]
pub struct UpdateOrganizationRequest {
    /// New name
    pub name: Option<String>,

    /// New description
    pub description: Option<String>,

    /// New slug (rename)
    pub slug: Option<String>,
}

pub async fn create(server: &ApiServer, request: &ApiRequest) -> ApiResult<ApiResponse> {
    let actor = request.require_actor()?;
    let payload: CreateOrganizationRequest = request.parse_body()?;

    let org = server
        .store()
        .create_organization(payload.name, payload.description, payload.slug, actor)
        .await?;
    let view = OrganizationView::resolve(server.store(), &org).await;

    Ok(ApiResponse::ok(
        201,
        serde_json::json!({ "organization": view }),
    ))
}

pub async fn get(server: &ApiServer, slug: &str) -> ApiResult<ApiResponse> {
    let org = server.store().organization(slug).await?;
    let view = OrganizationView::resolve(server.store(), &org).await;

    Ok(ApiResponse::ok(
        200,
        serde_json::json!({ "organization": view }),
    ))
}

pub async fn update(
    server: &ApiServer,
    request: &ApiRequest,
    slug: &str,
) -> ApiResult<ApiResponse> {
    request.require_actor()?;
    let payload: UpdateOrganizationRequest = request.parse_body()?;

    let changes = OrganizationChanges {
        name: payload.name,
        description: payload.description,
        slug: payload.slug,
    };
    let org = server.store().update_organization(slug, changes).await?;
    let view = OrganizationView::resolve(server.store(), &org).await;

    Ok(ApiResponse::ok(
        200,
        serde_json::json!({ "organization": view }),
    ))
}

pub async fn delete(
    server: &ApiServer,
    request: &ApiRequest,
    slug: &str,
) -> ApiResult<ApiResponse> {
    request.require_actor()?;
    server.store().delete_organization(slug).await?;

    Ok(ApiResponse::no_content())
}
