//! article-server: serves HTML articles with front-matter from a directory
//!
//! Articles are plain `.html` files with a YAML header. Every request reads
//! the content directory afresh and renders pages with embedded Tera
//! templates.

pub mod commands;
pub mod config;
pub mod content;
pub mod server;
pub mod templates;

use anyhow::Result;
use std::path::{Path, PathBuf};

/// The main application: configuration plus resolved directories
#[derive(Debug, Clone)]
pub struct Site {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: PathBuf,
    /// Directory holding `*.html` articles
    pub articles_dir: PathBuf,
    /// Directory holding article images
    pub images_dir: PathBuf,
    /// Directory holding robots.txt
    pub static_dir: PathBuf,
}

impl Site {
    /// Create a new site from a directory, reading `_config.yml` if present
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("_config.yml");

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        Ok(Self::with_config(base_dir, config))
    }

    /// Create a site from an already loaded configuration
    pub fn with_config(base_dir: PathBuf, config: config::SiteConfig) -> Self {
        let articles_dir = base_dir.join(&config.articles_dir);
        let images_dir = articles_dir.join(&config.images_dir);
        let static_dir = base_dir.join(&config.static_dir);

        Self {
            config,
            base_dir,
            articles_dir,
            images_dir,
            static_dir,
        }
    }

    /// Repository over this site's articles
    pub fn repository(&self) -> content::ArticleRepository {
        content::ArticleRepository::new(&self.articles_dir)
    }
}
