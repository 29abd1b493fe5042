//! Membership handlers

use serde::Deserialize;

use crate::error::ApiResult;
use crate::server::ApiServer;
use crate::types::{ApiRequest, ApiResponse};
use crate::views::{MembersView, OrganizationView, ProfileView};

/// Body of member promotion/removal requests.
#[derive(Debug, Deserialize)]
pub struct MemberRequest {
    /// Target username
    pub username: String,
}

pub async fn follow(
    server: &ApiServer,
    request: &ApiRequest,
    slug: &str,
) -> ApiResult<ApiResponse> {
    let actor = request.require_actor()?;

    let org = server.store().follow(slug, actor).await?;
    let view = OrganizationView::resolve(server.store(), &org).await;

    Ok(ApiResponse::ok(
        200,
        serde_json::json!({ "organization": view }),
    ))
}

pub async fn unfollow(
    server: &ApiServer,
    request: &ApiRequest,
    slug: &str,
) -> ApiResult<ApiResponse> {
    let actor = request.require_actor()?;

    let org = server.store().unfollow(slug, actor).await?;
    let view = OrganizationView::resolve(server.store(), &org).await;

    Ok(ApiResponse::ok(
        200,
        serde_json::json!({ "organization": view }),
    ))
}

pub async fn list(
    server: &ApiServer,
    request: &ApiRequest,
    slug: &str,
) -> ApiResult<ApiResponse> {
    request.require_actor()?;

    let roster = server.store().roster(slug).await?;
    let view = MembersView::from(&roster);

    Ok(ApiResponse::ok(200, serde_json::to_value(view)?))
}

pub async fn promote(
    server: &ApiServer,
    request: &ApiRequest,
    slug: &str,
) -> ApiResult<ApiResponse> {
    let actor = request.require_actor()?;
    let payload: MemberRequest = request.parse_body()?;

    let promoted = server
        .store()
        .promote(slug, actor, &payload.username)
        .await?;
    let view = ProfileView::from(&promoted);

    Ok(ApiResponse::ok(200, serde_json::json!({ "profile": view })))
}

pub async fn remove(
    server: &ApiServer,
    request: &ApiRequest,
    slug: &str,
) -> ApiResult<ApiResponse> {
    let actor = request.require_actor()?;
    let payload: MemberRequest = request.parse_body()?;

    server
        .store()
        .remove_member(slug, actor, &payload.username)
        .await?;

    Ok(ApiResponse::no_content())
}
