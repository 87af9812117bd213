//! List articles from the command line

use anyhow::Result;

use crate::content::{self, Article};
use crate::Site;

/// Print the home listing, or the listing for one tag
pub fn run(site: &Site, tag: Option<&str>, json: bool) -> Result<()> {
    let repo = site.repository();
    let articles = match tag {
        Some(tag) => content::tag_listing(&repo, &content::normalize_tag(tag))?,
        None => content::home_listing(&repo)?,
    };

    print!("{}", format_listing(&articles, tag, json)?);
    Ok(())
}

fn format_listing(articles: &[Article], tag: Option<&str>, json: bool) -> Result<String> {
    if json {
        return Ok(serde_json::to_string_pretty(articles)? + "\n");
    }

    let mut out = match tag {
        Some(tag) => format!("Articles tagged {} ({}):\n", tag, articles.len()),
        None => format!("Articles ({}):\n", articles.len()),
    };
    for article in articles {
        out.push_str(&format!(
            "  {} - {} [{}]",
            article.created, article.title, article.slug
        ));
        if !article.tags.is_empty() {
            out.push_str(&format!(" ({})", article.tags.join(", ")));
        }
        out.push('\n');
    }
    Ok(out)
}
