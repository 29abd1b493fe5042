//! Review operations
//!
//! Transactional wrappers around the review workflow. Submission creates
//! the article, registers unknown tags, and queues the article on the
//! organization in one write-guard pass; publication checks the pending
//! queue and applies both halves of the transition the same way.

use masthead_org::{Article, Organization, WorkflowError};
use std::collections::BTreeSet;
use uuid::Uuid;

use crate::error::{StoreError, StoreResult};
use crate::store::PlatformStore;

/// Input for submitting an article to an organization.
#[derive(Debug, Clone)]
pub struct ArticleDraft {
    /// Article title
    pub title: String,

    /// Short description
    pub description: String,

    /// Body text
    pub body: String,

    /// Authoring profile
    pub author: Uuid,

    /// Tag names; unknown tags are created on demand
    pub tags: Vec<String>,
}

impl PlatformStore {
    /// Submit a new article to an organization for review.
    ///
    /// The article is created as a draft, tagged (unknown tags are added
    /// to the registry), transitioned to pending review, and queued on
    /// the organization, all under one write guard.
    ///
    /// # Errors
    ///
    /// [`StoreError::NotFound`] if the organization or author is absent
    pub async fn submit_for_review(
        &self,
        org_slug: &str,
        draft: ArticleDraft,
    ) -> StoreResult<Article> {
        let mut guard = self.inner.write().await;
        let inner = &mut *guard;

        inner.require_profile(draft.author)?;
        let org = inner
            .organizations
            .get_mut(org_slug)
            .ok_or_else(|| StoreError::organization_not_found(org_slug))?;

        let mut article = Article::new(draft.title, draft.description, draft.body, draft.author);
        for tag in &draft.tags {
            article.add_tag(tag);
        }
        for tag in &article.tags {
            inner.tags.insert(tag.clone());
        }

        article.submit_for_review(org.id)?;
        org.request_review(article.id);

        inner.titles.insert(article.title.clone(), article.id);
        inner.articles.insert(article.id, article.clone());

        tracing::info!(
            org = org_slug,
            title = %article.title,
            tags = article.tags.len(),
            "article submitted for review"
        );
        Ok(article)
    }

    /// Publish a pending article, identified by title.
    ///
    /// # Errors
    ///
    /// - [`StoreError::NotFound`] if the organization or article is absent
    /// - [`StoreError::Workflow`] with [`WorkflowError::NotPending`] if
    ///   the article is not in the organization's pending queue
    pub async fn publish(&self, org_slug: &str, title: &str) -> StoreResult<Article> {
        let mut guard = self.inner.write().await;
        let inner = &mut *guard;

        let org = inner
            .organizations
            .get_mut(org_slug)
            .ok_or_else(|| StoreError::organization_not_found(org_slug))?;
        let article_id = inner
            .titles
            .get(title)
            .copied()
            .ok_or_else(|| StoreError::article_not_found(title))?;

        if !org.is_pending(article_id) {
            return Err(WorkflowError::NotPending {
                title: title.to_string(),
                org: org_slug.to_string(),
            }
            .into());
        }

        let article = inner
            .articles
            .get_mut(&article_id)
            .ok_or_else(|| StoreError::article_not_found(title))?;
        article.publish(org_slug)?;
        org.clear_review(article_id);

        tracing::info!(org = org_slug, title, "article published");
        Ok(article.clone())
    }

    /// Fetch an organization together with its pending articles.
    pub async fn org_articles(&self, org_slug: &str) -> StoreResult<(Organization, Vec<Article>)> {
        let inner = self.inner.read().await;
        let org = inner.organization(org_slug)?.clone();
        let pending = org
            .pending_articles
            .iter()
            .filter_map(|id| inner.articles.get(id))
            .cloned()
            .collect();
        Ok((org, pending))
    }

    /// Fetch an article by id.
    pub async fn article(&self, id: Uuid) -> StoreResult<Article> {
        let inner = self.inner.read().await;
        inner
            .articles
            .get(&id)
            .cloned()
            .ok_or_else(|| StoreError::article_not_found(id.to_string()))
    }

    /// Fetch an article by title.
    pub async fn article_by_title(&self, title: &str) -> StoreResult<Article> {
        let inner = self.inner.read().await;
        inner
            .titles
            .get(title)
            .and_then(|id| inner.articles.get(id))
            .cloned()
            .ok_or_else(|| StoreError::article_not_found(title))
    }

    /// Resolve a set of article ids, skipping dangling references.
    pub async fn articles_of(&self, ids: &BTreeSet<Uuid>) -> Vec<Article> {
        let inner = self.inner.read().await;
        ids.iter()
            .filter_map(|id| inner.articles.get(id))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use masthead_org::{Profile, ReviewState};

    fn draft(title: &str, author: Uuid, tags: &[&str]) -> ArticleDraft {
        ArticleDraft {
            title: title.to_string(),
            description: "Intro".to_string(),
            body: "Body text".to_string(),
            author,
            tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }

    async fn fixture() -> (PlatformStore, Profile) {
        let store = PlatformStore::new();
        let author = store
            .register_profile(Profile::new("valjean"))
            .await
            .unwrap();
        store
            .create_organization("Acme Press", "", "acme", author.id)
            .await
            .unwrap();
        (store, author)
    }

    #[tokio::test]
    async fn test_submit_queues_article() {
        let (store, author) = fixture().await;

        let article = store
            .submit_for_review("acme", draft("Hello", author.id, &["essays"]))
            .await
            .unwrap();
        assert_eq!(article.state, ReviewState::PendingReview);
        assert!(article.needs_review());

        let org = store.organization("acme").await.unwrap();
        assert!(org.is_pending(article.id));
    }

    #[tokio::test]
    async fn test_submit_creates_tags_on_demand() {
        let (store, author) = fixture().await;

        store
            .submit_for_review("acme", draft("Hello", author.id, &["essays", " essays ", "rust"]))
            .await
            .unwrap();
        assert_eq!(store.tags().await, vec!["essays", "rust"]);

        store
            .submit_for_review("acme", draft("Again", author.id, &["rust"]))
            .await
            .unwrap();
        assert_eq!(store.tags().await, vec!["essays", "rust"]);
    }

    #[tokio::test]
    async fn test_submit_unknown_org() {
        let (store, author) = fixture().await;

        let err = store
            .submit_for_review("nope", draft("Hello", author.id, &[]))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            StoreError::NotFound {
                kind: "organization",
                ..
            }
        ));
    }

    #[tokio::test]
    async fn test_publish_pending_article() {
        let (store, author) = fixture().await;
        store
            .submit_for_review("acme", draft("Hello", author.id, &[]))
            .await
            .unwrap();

        let published = store.publish("acme", "Hello").await.unwrap();
        assert_eq!(published.state, ReviewState::Published);
        assert!(!published.needs_review());

        let org = store.organization("acme").await.unwrap();
        assert!(org.pending_articles.is_empty());
    }

    #[tokio::test]
    async fn test_publish_not_pending() {
        let (store, author) = fixture().await;
        store
            .submit_for_review("acme", draft("Hello", author.id, &[]))
            .await
            .unwrap();
        store.publish("acme", "Hello").await.unwrap();

        let err = store.publish("acme", "Hello").await.unwrap_err();
        assert!(matches!(
            err,
            StoreError::Workflow(WorkflowError::NotPending { .. })
        ));
    }

    #[tokio::test]
    async fn test_publish_only_from_owning_org() {
        let (store, author) = fixture().await;
        store
            .create_organization("Beta Press", "", "beta", author.id)
            .await
            .unwrap();
        store
            .submit_for_review("acme", draft("Hello", author.id, &[]))
            .await
            .unwrap();

        let err = store.publish("beta", "Hello").await.unwrap_err();
        assert!(matches!(
            err,
            StoreError::Workflow(WorkflowError::NotPending { .. })
        ));
    }

    #[tokio::test]
    async fn test_publish_unknown_title() {
        let (store, _) = fixture().await;

        let err = store.publish("acme", "Nope").await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound { kind: "article", .. }));
    }

    #[tokio::test]
    async fn test_org_articles_lists_pending() {
        let (store, author) = fixture().await;
        store
            .submit_for_review("acme", draft("Hello", author.id, &[]))
            .await
            .unwrap();
        store
            .submit_for_review("acme", draft("World", author.id, &[]))
            .await
            .unwrap();

        let (org, pending) = store.org_articles("acme").await.unwrap();
        assert_eq!(org.pending_articles.len(), 2);
        assert_eq!(pending.len(), 2);
    }

    #[tokio::test]
    async fn test_delete_reverts_pending_to_draft() {
        let (store, author) = fixture().await;
        let article = store
            .submit_for_review("acme", draft("Hello", author.id, &[]))
            .await
            .unwrap();

        store.delete_organization("acme").await.unwrap();

        let reverted = store.article(article.id).await.unwrap();
        assert_eq!(reverted.state, ReviewState::Draft);
        assert!(reverted.organization.is_none());
    }
}
