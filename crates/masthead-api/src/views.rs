//! Wire views
//!
//! Serialization views for API responses. Views are camelCase on the
//! wire and resolve internal profile/article ids to usernames and
//! titles, so responses never leak raw record ids for referenced
//! entities.

use chrono::{DateTime, Utc};
use masthead_org::{Article, Organization, Profile, ReviewState};
use masthead_store::{PlatformStore, Roster};
use serde::{Deserialize, Serialize};

/// A profile as serialized on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileView {
    /// Username
    pub username: String,

    /// Short biography
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,

    /// Avatar image URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl From<&Profile> for ProfileView {
    fn from(profile: &Profile) -> Self {
        Self {
            username: profile.username.clone(),
            bio: profile.bio.clone(),
            image: profile.image.clone(),
        }
    }
}

/// An organization as serialized on the wire.
///
/// Member and moderator sets resolve to usernames; the pending queue
/// resolves to article titles.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationView {
    /// Slug
    pub slug: String,

    /// Name
    pub name: String,

    /// Description
    pub description: String,

    /// Usernames of members
    pub members: Vec<String>,

    /// Usernames of moderators
    pub moderators: Vec<String>,

    /// Titles of articles awaiting review
    pub pending_articles: Vec<String>,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,

    /// Last-update timestamp
    pub updated_at: DateTime<Utc>,
}

impl OrganizationView {
    /// Build the view, resolving referenced profiles and articles.
    pub async fn resolve(store: &PlatformStore, org: &Organization) -> Self {
        let members = store.profiles_of(&org.members).await;
        let moderators = store.profiles_of(&org.moderators).await;
        let pending = store.articles_of(&org.pending_articles).await;

        Self {
            slug: org.slug.clone(),
            name: org.name.clone(),
            description: org.description.clone(),
            members: members.into_iter().map(|p| p.username).collect(),
            moderators: moderators.into_iter().map(|p| p.username).collect(),
            pending_articles: pending.into_iter().map(|a| a.title).collect(),
            created_at: org.created_at,
            updated_at: org.updated_at,
        }
    }
}

/// An article as serialized on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleView {
    /// Title
    pub title: String,

    /// Short description
    pub description: String,

    /// Body text
    pub body: String,

    /// Author username
    pub author: String,

    /// Tag names
    pub tag_list: Vec<String>,

    /// Review lifecycle state
    pub state: ReviewState,

    /// Whether the article awaits moderator review
    pub needs_review: bool,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,

    /// Last-update timestamp
    pub updated_at: DateTime<Utc>,
}

impl ArticleView {
    /// Build the view, resolving the author profile.
    pub async fn resolve(store: &PlatformStore, article: &Article) -> Self {
        let author = store
            .profile(article.author)
            .await
            .map(|p| p.username)
            .unwrap_or_else(|_| article.author.to_string());

        Self {
            title: article.title.clone(),
            description: article.description.clone(),
            body: article.body.clone(),
            author,
            tag_list: article.tags.iter().cloned().collect(),
            state: article.state,
            needs_review: article.needs_review(),
            created_at: article.created_at,
            updated_at: article.updated_at,
        }
    }
}

/// The membership listing of one organization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MembersView {
    /// Profiles following the organization
    pub members: Vec<ProfileView>,

    /// Profiles with elevated rights
    pub moderators: Vec<ProfileView>,
}

impl From<&Roster> for MembersView {
    fn from(roster: &Roster) -> Self {
        Self {
            members: roster.members.iter().map(ProfileView::from).collect(),
            moderators: roster.moderators.iter().map(ProfileView::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use masthead_org::Profile;

    #[tokio::test]
    async fn test_organization_view_resolves_usernames() {
        let store = PlatformStore::new();
        let founder = store
            .register_profile(Profile::new("valjean"))
            .await
            .unwrap();
        let org = store
            .create_organization("Acme Press", "Essays", "acme", founder.id)
            .await
            .unwrap();

        let view = OrganizationView::resolve(&store, &org).await;
        assert_eq!(view.slug, "acme");
        assert_eq!(view.moderators, vec!["valjean"]);
        assert!(view.members.is_empty());
        assert!(view.pending_articles.is_empty());
    }

    #[tokio::test]
    async fn test_article_view_wire_shape() {
        let store = PlatformStore::new();
        let author = store
            .register_profile(Profile::new("valjean"))
            .await
            .unwrap();
        store
            .create_organization("Acme Press", "", "acme", author.id)
            .await
            .unwrap();
        let article = store
            .submit_for_review(
                "acme",
                masthead_store::ArticleDraft {
                    title: "Hello".to_string(),
                    description: "Intro".to_string(),
                    body: "Body".to_string(),
                    author: author.id,
                    tags: vec!["essays".to_string()],
                },
            )
            .await
            .unwrap();

        let view = ArticleView::resolve(&store, &article).await;
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["author"], "valjean");
        assert_eq!(json["needsReview"], true);
        assert_eq!(json["tagList"][0], "essays");
        assert_eq!(json["state"], "pending_review");
    }

    #[test]
    fn test_profile_view_skips_empty_fields() {
        let profile = Profile::new("valjean");
        let json = serde_json::to_value(ProfileView::from(&profile)).unwrap();

        assert_eq!(json["username"], "valjean");
        assert!(json.get("bio").is_none());
    }
}
