//! Blog articles served under `/blog/articles`.
//!
//! The blog payload uses snake_case keys and sends `null` for every unset
//! optional field. The output models group the related flat keys
//! (`og_*`, `twitter_*`, `meta_*`, `codeinjection_*`, `feature_image*`) into
//! nested records and turn `null` into `None`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// Domain Models (Input from API)
// ============================================================================

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ArticleReply {
    pub id: String,
    pub uuid: String,
    pub title: String,
    pub slug: String,
    pub html: String,
    pub comment_id: String,
    #[serde(default)]
    pub feature_image: Option<String>,
    #[serde(default)]
    pub feature_image_alt: Option<String>,
    #[serde(default)]
    pub feature_image_caption: Option<String>,
    pub featured: bool,
    pub visibility: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub published_at: DateTime<Utc>,
    #[serde(default)]
    pub custom_excerpt: Option<String>,
    #[serde(default)]
    pub codeinjection_head: Option<String>,
    #[serde(default)]
    pub codeinjection_foot: Option<String>,
    #[serde(default)]
    pub custom_template: Option<String>,
    #[serde(default)]
    pub canonical_url: Option<String>,
    #[serde(default)]
    pub tags: Vec<ArticleTagReply>,
    #[serde(default)]
    pub authors: Vec<ArticleAuthorReply>,
    #[serde(default)]
    pub primary_author: Option<ArticleAuthorReply>,
    #[serde(default)]
    pub primary_tag: Option<ArticleTagReply>,
    pub url: String,
    pub excerpt: String,
    pub reading_time: u32,
    pub access: bool,
    pub comments: bool,
    #[serde(default)]
    pub og_image: Option<String>,
    #[serde(default)]
    pub og_title: Option<String>,
    #[serde(default)]
    pub og_description: Option<String>,
    #[serde(default)]
    pub twitter_image: Option<String>,
    #[serde(default)]
    pub twitter_title: Option<String>,
    #[serde(default)]
    pub twitter_description: Option<String>,
    #[serde(default)]
    pub meta_title: Option<String>,
    #[serde(default)]
    pub meta_description: Option<String>,
    #[serde(default)]
    pub email_subject: Option<String>,
    #[serde(default)]
    pub frontmatter: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ArticleAuthorReply {
    pub id: String,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub profile_image: Option<String>,
    #[serde(default)]
    pub cover_image: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub facebook: Option<String>,
    #[serde(default)]
    pub twitter: Option<String>,
    #[serde(default)]
    pub meta_title: Option<String>,
    #[serde(default)]
    pub meta_description: Option<String>,
    pub url: String,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ArticleTagReply {
    pub id: String,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub feature_image: Option<String>,
    pub visibility: String,
    #[serde(default)]
    pub og_image: Option<String>,
    #[serde(default)]
    pub og_title: Option<String>,
    #[serde(default)]
    pub og_description: Option<String>,
    #[serde(default)]
    pub twitter_image: Option<String>,
    #[serde(default)]
    pub twitter_title: Option<String>,
    #[serde(default)]
    pub twitter_description: Option<String>,
    #[serde(default)]
    pub meta_title: Option<String>,
    #[serde(default)]
    pub meta_description: Option<String>,
    #[serde(default)]
    pub codeinjection_head: Option<String>,
    #[serde(default)]
    pub codeinjection_foot: Option<String>,
    #[serde(default)]
    pub canonical_url: Option<String>,
    #[serde(default)]
    pub accent_color: Option<String>,
    pub url: String,
}

// ============================================================================
// Output Models (Domain Model)
// ============================================================================

#[derive(Debug, Serialize, Clone, PartialEq, Default)]
pub struct FeaturedImage {
    pub url: Option<String>,
    pub alt: Option<String>,
    pub caption: Option<String>,
}

#[derive(Debug, Serialize, Clone, PartialEq, Default)]
pub struct CodeInjection {
    pub head: Option<String>,
    pub foot: Option<String>,
}

/// Open Graph or Twitter card overrides.
#[derive(Debug, Serialize, Clone, PartialEq, Default)]
pub struct SocialContent {
    pub image: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Serialize, Clone, PartialEq, Default)]
pub struct MetaContent {
    pub title: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct Article {
    pub id: String,
    pub uuid: String,
    pub title: String,
    pub slug: String,
    /// Rendered HTML body.
    pub content: String,
    pub comment_id: String,
    pub featured_image: FeaturedImage,
    pub featured: bool,
    pub visibility: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub published_at: DateTime<Utc>,
    pub custom_excerpt: Option<String>,
    pub code_injection: CodeInjection,
    pub custom_template: Option<String>,
    pub canonical_url: Option<String>,
    pub authors: Vec<ArticleAuthor>,
    pub tags: Vec<ArticleTag>,
    pub primary_author: Option<ArticleAuthor>,
    pub primary_tag: Option<ArticleTag>,
    pub url: String,
    pub excerpt: String,
    /// Estimated reading time in minutes.
    pub reading_time: u32,
    pub access: bool,
    pub comments_enabled: bool,
    pub og_content: SocialContent,
    pub twitter_content: SocialContent,
    pub meta_content: MetaContent,
    pub email_subject: Option<String>,
    pub frontmatter: Option<String>,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct ArticleAuthor {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub profile_image: Option<String>,
    pub cover_image: Option<String>,
    pub biography: Option<String>,
    pub website: Option<String>,
    pub location: Option<String>,
    pub facebook: Option<String>,
    pub twitter: Option<String>,
    pub meta_content: MetaContent,
    pub url: String,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct ArticleTag {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub feature_image: Option<String>,
    pub visibility: String,
    pub og_content: SocialContent,
    pub twitter_content: SocialContent,
    pub meta_content: MetaContent,
    pub code_injection: CodeInjection,
    pub canonical_url: Option<String>,
    pub accent_color: Option<String>,
    pub url: String,
}

// ============================================================================
// Transformations
// ============================================================================

impl From<ArticleAuthorReply> for ArticleAuthor {
    fn from(reply: ArticleAuthorReply) -> Self {
        ArticleAuthor {
            id: reply.id,
            name: reply.name,
            slug: reply.slug,
            profile_image: reply.profile_image,
            cover_image: reply.cover_image,
            biography: reply.bio,
            website: reply.website,
            location: reply.location,
            facebook: reply.facebook,
            twitter: reply.twitter,
            meta_content: MetaContent {
                title: reply.meta_title,
                description: reply.meta_description,
            },
            url: reply.url,
        }
    }
}

impl From<ArticleTagReply> for ArticleTag {
    fn from(reply: ArticleTagReply) -> Self {
        ArticleTag {
            id: reply.id,
            name: reply.name,
            slug: reply.slug,
            description: reply.description,
            feature_image: reply.feature_image,
            visibility: reply.visibility,
            og_content: SocialContent {
                image: reply.og_image,
                title: reply.og_title,
                description: reply.og_description,
            },
            twitter_content: SocialContent {
                image: reply.twitter_image,
                title: reply.twitter_title,
                description: reply.twitter_description,
            },
            meta_content: MetaContent {
                title: reply.meta_title,
                description: reply.meta_description,
            },
            code_injection: CodeInjection {
                head: reply.codeinjection_head,
                foot: reply.codeinjection_foot,
            },
            canonical_url: reply.canonical_url,
            accent_color: reply.accent_color,
            url: reply.url,
        }
    }
}

impl From<ArticleReply> for Article {
    fn from(reply: ArticleReply) -> Self {
        Article {
            id: reply.id,
            uuid: reply.uuid,
            title: reply.title,
            slug: reply.slug,
            content: reply.html,
            comment_id: reply.comment_id,
            featured_image: FeaturedImage {
                url: reply.feature_image,
                alt: reply.feature_image_alt,
                caption: reply.feature_image_caption,
            },
            featured: reply.featured,
            visibility: reply.visibility,
            created_at: reply.created_at,
            updated_at: reply.updated_at,
            published_at: reply.published_at,
            custom_excerpt: reply.custom_excerpt,
            code_injection: CodeInjection {
                head: reply.codeinjection_head,
                foot: reply.codeinjection_foot,
            },
            custom_template: reply.custom_template,
            canonical_url: reply.canonical_url,
            authors: reply.authors.into_iter().map(ArticleAuthor::from).collect(),
            tags: reply.tags.into_iter().map(ArticleTag::from).collect(),
            primary_author: reply.primary_author.map(ArticleAuthor::from),
            primary_tag: reply.primary_tag.map(ArticleTag::from),
            url: reply.url,
            excerpt: reply.excerpt,
            reading_time: reply.reading_time,
            access: reply.access,
            comments_enabled: reply.comments,
            og_content: SocialContent {
                image: reply.og_image,
                title: reply.og_title,
                description: reply.og_description,
            },
            twitter_content: SocialContent {
                image: reply.twitter_image,
                title: reply.twitter_title,
                description: reply.twitter_description,
            },
            meta_content: MetaContent {
                title: reply.meta_title,
                description: reply.meta_description,
            },
            email_subject: reply.email_subject,
            frontmatter: reply.frontmatter,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
