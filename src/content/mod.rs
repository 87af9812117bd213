//! Content module - article files, their front-matter and listings

mod article;
mod error;
mod frontmatter;
pub mod listing;
mod repository;
mod tags;

pub use article::{Article, RenderableArticle, TagLink, UNKNOWN_DATE};
pub use error::ContentError;
pub use frontmatter::FrontMatter;
pub use listing::{home_listing, render_article, tag_listing};
pub use repository::{ArticleRepository, ARTICLE_EXTENSION};
pub use tags::{normalize_tag, scalar_text, split_tags, title_from_slug, RawTags};
