//! Listings and single-article views built from the repository

use super::{Article, ArticleRepository, ContentError, RenderableArticle};

/// All articles, newest first
pub fn home_listing(repo: &ArticleRepository) -> Result<Vec<Article>, ContentError> {
    let mut articles = repo.list_articles()?;
    sort_newest_first(&mut articles);
    Ok(articles)
}

/// Articles with a tag that normalizes to `tag_slug`, newest first
pub fn tag_listing(
    repo: &ArticleRepository,
    tag_slug: &str,
) -> Result<Vec<Article>, ContentError> {
    let mut articles: Vec<_> = repo
        .list_articles()?
        .into_iter()
        .filter(|article| article.has_tag(tag_slug))
        .collect();
    sort_newest_first(&mut articles);
    Ok(articles)
}

/// Resolve one article for display
pub fn render_article(
    repo: &ArticleRepository,
    slug: &str,
) -> Result<RenderableArticle, ContentError> {
    repo.get_article(slug).map(RenderableArticle::from)
}

/// Dates are compared as strings, so ISO 8601 dates sort chronologically
fn sort_newest_first(articles: &mut [Article]) {
    articles.sort_by(|a, b| b.created.cmp(&a.created));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::normalize_tag;
    use std::fs;
    use std::path::Path;

    fn article(dir: &Path, slug: &str, created: Option<&str>, tags: &str) {
        let mut content = String::from("---\n");
        if let Some(created) = created {
            content.push_str(&format!("created: {}\n", created));
        }
        content.push_str(&format!("tags: {}\n---\n<p>{}</p>\n", tags, slug));
        fs::write(dir.join(format!("{}.html", slug)), content).unwrap();
    }

    fn slugs(articles: &[Article]) -> Vec<&str> {
        articles.iter().map(|a| a.slug.as_str()).collect()
    }

    #[test]
    fn test_home_listing_newest_first() {
        let dir = tempfile::tempdir().unwrap();
        article(dir.path(), "old", Some("2022-05-01"), "rust");
        article(dir.path(), "new", Some("2024-01-01"), "web");
        article(dir.path(), "middle", Some("2023-12-31"), "rust");
        article(dir.path(), "undated", None, "misc");

        let repo = ArticleRepository::new(dir.path());
        let articles = home_listing(&repo).unwrap();
        assert_eq!(slugs(&articles), vec!["new", "middle", "old", "undated"]);

        for pair in articles.windows(2) {
            assert!(pair[0].created >= pair[1].created);
        }
    }

    #[test]
    fn test_tag_listing_matches_normalized_tags() {
        let dir = tempfile::tempdir().unwrap();
        article(dir.path(), "a", Some("2024-01-01"), "My Tag, other");
        article(dir.path(), "b", Some("2024-02-01"), "[my-tag]");
        article(dir.path(), "c", Some("2024-03-01"), "[\"MY   TAG!\", \"my tag\"]");
        article(dir.path(), "d", Some("2024-04-01"), "mytag, tag");

        let repo = ArticleRepository::new(dir.path());
        let articles = tag_listing(&repo, &normalize_tag("My Tag")).unwrap();
        assert_eq!(slugs(&articles), vec!["c", "b", "a"]);
    }

    #[test]
    fn test_tag_listing_no_matches() {
        let dir = tempfile::tempdir().unwrap();
        article(dir.path(), "a", Some("2024-01-01"), "rust");

        let repo = ArticleRepository::new(dir.path());
        assert!(tag_listing(&repo, "python").unwrap().is_empty());
    }

    #[test]
    fn test_render_article() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("hello-world.html"),
            "---\ntitle: Hello\ncreated: 2024-01-01\ntags: a, b\n---\n<p>Hi</p>",
        )
        .unwrap();

        let repo = ArticleRepository::new(dir.path());
        let article = render_article(&repo, "hello-world").unwrap();
        assert_eq!(article.title, "Hello");
        assert_eq!(article.created, "2024-01-01");
        let tags: Vec<_> = article.tags.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(tags, vec!["a", "b"]);
        assert_eq!(article.content, "<p>Hi</p>");
    }

    #[test]
    fn test_render_missing_article() {
        let dir = tempfile::tempdir().unwrap();
        let repo = ArticleRepository::new(dir.path());
        assert!(render_article(&repo, "missing-slug")
            .unwrap_err()
            .is_not_found());
    }
}
