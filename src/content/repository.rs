//! Article repository - loads articles from the content directory

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::{Article, ContentError, FrontMatter};

/// Extension of article files
pub const ARTICLE_EXTENSION: &str = "html";

/// Reads articles from a content directory on every call
#[derive(Debug, Clone)]
pub struct ArticleRepository {
    articles_dir: PathBuf,
}

impl ArticleRepository {
    pub fn new<P: Into<PathBuf>>(articles_dir: P) -> Self {
        Self {
            articles_dir: articles_dir.into(),
        }
    }

    pub fn articles_dir(&self) -> &Path {
        &self.articles_dir
    }

    /// Load every article file in the content directory, in directory order
    pub fn list_articles(&self) -> Result<Vec<Article>, ContentError> {
        if !self.articles_dir.is_dir() {
            tracing::warn!("Articles directory {:?} does not exist", self.articles_dir);
            return Ok(Vec::new());
        }

        let mut articles = Vec::new();

        for entry in WalkDir::new(&self.articles_dir)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
        {
            let entry = entry.map_err(|e| ContentError::Io {
                path: self.articles_dir.clone(),
                source: e.into(),
            })?;
            let path = entry.path();

            if !path.is_file() {
                continue;
            }
            let Some(slug) = article_slug(path) else {
                continue;
            };

            articles.push(self.load(path, slug)?);
        }

        tracing::debug!(
            "Loaded {} articles from {:?}",
            articles.len(),
            self.articles_dir
        );
        Ok(articles)
    }

    /// Load a single article by slug
    pub fn get_article(&self, slug: &str) -> Result<Article, ContentError> {
        if !is_safe_slug(slug) {
            return Err(ContentError::NotFound(slug.to_string()));
        }

        let path = self
            .articles_dir
            .join(format!("{}.{}", slug, ARTICLE_EXTENSION));
        self.load(&path, slug)
    }

    fn load(&self, path: &Path, slug: &str) -> Result<Article, ContentError> {
        let (fm, body) = FrontMatter::load(path)?;
        Ok(Article::from_parts(slug, fm, body))
    }
}

/// Slug of an article file, or `None` if the file is not an article
fn article_slug(path: &Path) -> Option<&str> {
    let is_article = path
        .extension()
        .map(|ext| ext == ARTICLE_EXTENSION)
        .unwrap_or(false);
    if !is_article {
        return None;
    }
    path.file_stem().and_then(|s| s.to_str())
}

/// A slug must name a file directly inside the content directory
fn is_safe_slug(slug: &str) -> bool {
    !matches!(slug, "" | "." | "..") && !slug.contains(['/', '\\', '\0'])
}
