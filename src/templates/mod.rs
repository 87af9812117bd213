//! Built-in page templates using Tera template engine
//!
//! Templates are embedded in the binary. Autoescaping stays on for every
//! template; article bodies are the only values emitted with `| safe`.

use anyhow::Result;
use serde::Serialize;
use std::collections::HashMap;
use tera::{Context, Tera};

use crate::config::SiteConfig;
use crate::content::{normalize_tag, Article, RenderableArticle, UNKNOWN_DATE};

/// Template renderer with the embedded default theme
pub struct TemplateRenderer {
    tera: Tera,
}

impl TemplateRenderer {
    /// Create a new renderer with all templates loaded
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();

        tera.add_raw_templates(vec![
            ("layout.html", include_str!("default/layout.html")),
            ("home.html", include_str!("default/home.html")),
            ("article.html", include_str!("default/article.html")),
        ])?;

        tera.register_filter("tag_slug", tag_slug_filter);
        tera.register_filter("date_format", date_format_filter);

        Ok(Self { tera })
    }

    /// Render a template with given context
    pub fn render(&self, template_name: &str, context: &Context) -> Result<String> {
        Ok(self.tera.render(template_name, context)?)
    }

    /// Render the home page, or a tag page when `tag_filter` is set
    pub fn render_listing(
        &self,
        site: &SiteData,
        articles: &[Article],
        tag_filter: Option<&str>,
    ) -> Result<String> {
        let mut context = Context::new();
        context.insert("site", site);
        context.insert("articles", articles);
        context.insert("tag_filter", &tag_filter);
        self.render("home.html", &context)
    }

    /// Render a single article page
    pub fn render_article(&self, site: &SiteData, article: &RenderableArticle) -> Result<String> {
        let mut context = Context::new();
        context.insert("site", site);
        context.insert("article", article);
        self.render("article.html", &context)
    }
}

/// Site-wide values available to every template
#[derive(Debug, Clone, Serialize)]
pub struct SiteData {
    pub title: String,
    pub description: String,
}

impl From<&SiteConfig> for SiteData {
    fn from(config: &SiteConfig) -> Self {
        Self {
            title: config.title.clone(),
            description: config.description.clone(),
        }
    }
}

/// Tera filter: slug of a tag, matching what `/tag/<slug>` expects
fn tag_slug_filter(
    value: &tera::Value,
    _args: &HashMap<String, tera::Value>,
) -> tera::Result<tera::Value> {
    let s = tera::try_get_value!("tag_slug", "value", String, value);
    Ok(tera::Value::String(normalize_tag(&s)))
}

/// Tera filter: format date string
fn date_format_filter(
    value: &tera::Value,
    args: &HashMap<String, tera::Value>,
) -> tera::Result<tera::Value> {
    let s = tera::try_get_value!("date_format", "value", String, value);
    let format = match args.get("format") {
        Some(val) => tera::try_get_value!("date_format", "format", String, val),
        None => "YYYY-MM-DD".to_string(),
    };

    if s == UNKNOWN_DATE {
        return Ok(tera::Value::String("Unknown date".to_string()));
    }

    // For "LL" format (like "May 30, 2023"), we parse and reformat
    if format == "LL" {
        if let Ok(date) = chrono::NaiveDate::parse_from_str(&s, "%Y-%m-%d") {
            return Ok(tera::Value::String(date.format("%B %d, %Y").to_string()));
        }
    }

    // Anything else is shown as written
    Ok(tera::Value::String(s))
}
