//! Article models

use serde::Serialize;

use super::tags::{normalize_tag, scalar_text, split_tags, title_from_slug, RawTags};
use super::FrontMatter;

/// Placeholder for a missing `created` or `edited` date
pub const UNKNOWN_DATE: &str = "0000-00-00";

/// An article file, read fresh from disk
#[derive(Debug, Clone, Serialize)]
pub struct Article {
    /// File name without extension; lookup key and URL segment
    pub slug: String,

    pub title: String,
    pub subtitle: String,

    /// Creation date as written in the front-matter, also the sort key
    pub created: String,
    pub edited: String,

    pub tags: Vec<String>,

    /// Raw HTML body, trusted
    #[serde(skip)]
    pub content: String,
}

impl Article {
    /// Build an article from its front-matter, applying field defaults.
    ///
    /// Keys holding a value of the wrong shape (a list as `title`, say) fall
    /// back to their default.
    pub fn from_parts(slug: &str, fm: FrontMatter, content: String) -> Self {
        let text = |key: &str| fm.get(key).and_then(scalar_text);

        Self {
            slug: slug.to_string(),
            title: text("title").unwrap_or_else(|| title_from_slug(slug)),
            subtitle: text("subtitle").unwrap_or_default(),
            created: text("created").unwrap_or_else(|| UNKNOWN_DATE.to_string()),
            edited: text("edited").unwrap_or_else(|| UNKNOWN_DATE.to_string()),
            tags: fm
                .get("tags")
                .and_then(RawTags::from_value)
                .map(|raw| split_tags(&raw))
                .unwrap_or_default(),
            content,
        }
    }

    /// Whether any of the article's tags normalizes to `tag_slug`
    pub fn has_tag(&self, tag_slug: &str) -> bool {
        self.tags.iter().any(|tag| normalize_tag(tag) == tag_slug)
    }

    /// Tags paired with their slugs, for linking to `/tag/<slug>`
    pub fn tag_links(&self) -> Vec<TagLink> {
        self.tags.iter().map(|tag| TagLink::new(tag)).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagLink {
    pub name: String,
    pub slug: String,
}

impl TagLink {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            slug: normalize_tag(name),
        }
    }
}

/// An article ready for the article template
#[derive(Debug, Clone, Serialize)]
pub struct RenderableArticle {
    pub slug: String,
    pub title: String,
    pub subtitle: String,
    pub created: String,
    pub edited: String,
    pub tags: Vec<TagLink>,
    /// Trusted HTML, emitted by the template without escaping
    pub content: String,
}

impl From<Article> for RenderableArticle {
    fn from(article: Article) -> Self {
        let tags = article.tag_links();
        Self {
            slug: article.slug,
            title: article.title,
            subtitle: article.subtitle,
            created: article.created,
            edited: article.edited,
            tags,
            content: article.content,
        }
    }
}
