//! Article review handlers
//!
//! Submission and publication run against the singular
//! `/api/organization/{slug}/articles` routes.

use masthead_store::ArticleDraft;
use serde::Deserialize;

use crate::error::ApiResult;
use crate::server::ApiServer;
use crate::types::{ApiRequest, ApiResponse};
use crate::views::{ArticleView, OrganizationView};

/// Body of `POST /api/organization/{slug}/articles`.
#[derive(Debug, Deserialize)]
pub struct SubmitArticleRequest {
    /// Article title
    pub title: String,

    /// Short description
    #[serde(default)]
    pub description: String,

    /// Body text
    pub body: String,

    /// Tag names; unknown tags are created on demand
    #[serde(default, rename = "tagList")]
    pub tag_list: Vec<String>,
}

/// Body of `DELETE /api/organization/{slug}/articles`.
#[derive(Debug, Deserialize)]
pub struct PublishArticleRequest {
    /// Title of the pending article to publish
    pub title: String,
}

pub async fn submit(
    server: &ApiServer,
    request: &ApiRequest,
    slug: &str,
) -> ApiResult<ApiResponse> {
    let actor = request.require_actor()?;
    let payload: SubmitArticleRequest = request.parse_body()?;

    let article = server
        .store()
        .submit_for_review(
            slug,
            ArticleDraft {
                title: payload.title,
                description: payload.description,
                body: payload.body,
                author: actor,
                tags: payload.tag_list,
            },
        )
        .await?;
    let view = ArticleView::resolve(server.store(), &article).await;

    Ok(ApiResponse::ok(201, serde_json::json!({ "article": view })))
}

pub async fn publish(
    server: &ApiServer,
    request: &ApiRequest,
    slug: &str,
) -> ApiResult<ApiResponse> {
    request.require_actor()?;
    let payload: PublishArticleRequest = request.parse_body()?;

    let article = server.store().publish(slug, &payload.title).await?;
    let view = ArticleView::resolve(server.store(), &article).await;

    Ok(ApiResponse::ok(200, serde_json::json!({ "article": view })))
}

pub async fn get(
    server: &ApiServer,
    request: &ApiRequest,
    slug: &str,
) -> ApiResult<ApiResponse> {
    request.require_actor()?;

    let (org, pending) = server.store().org_articles(slug).await?;
    let org_view = OrganizationView::resolve(server.store(), &org).await;
    let mut pending_views = Vec::with_capacity(pending.len());
    for article in &pending {
        pending_views.push(ArticleView::resolve(server.store(), article).await);
    }

    Ok(ApiResponse::ok(
        200,
        serde_json::json!({
            "organization": org_view,
            "pendingArticles": pending_views,
        }),
    ))
}
