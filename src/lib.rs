//! folio: markdown blog content pipeline
//!
//! Reads a directory of markdown posts with optional front matter and
//! turns them into [`content::Post`] records with rendered HTML, ready
//! for a presentation layer.

pub mod commands;
pub mod config;
pub mod content;
pub mod server;

use anyhow::Result;
use std::path::{Path, PathBuf};

use content::{ContentError, ContentLoader, LoadReport, Post};

/// The main blog application
#[derive(Debug, Clone)]
pub struct Blog {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: PathBuf,
    /// Directory holding post sources
    pub content_dir: PathBuf,
    /// Directory served under /static
    pub static_dir: PathBuf,
}

impl Blog {
    /// Create a new Blog instance from a directory
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

    /// Create a Blog with an explicit configuration
    pub fn with_config(base_dir: PathBuf, config: config::SiteConfig) -> Self {
        let content_dir = base_dir.join(&config.content_dir);
        let static_dir = base_dir.join(&config.static_dir);

        Self {
            config,
            base_dir,
            content_dir,
            static_dir,
        }
    }

    /// Load every post, newest first
    pub fn load_posts(&self) -> Result<LoadReport, ContentError> {
        ContentLoader::new(self).load_posts()
    }

    /// Load one post by slug
    pub fn load_post(&self, slug: &str) -> Result<Post, ContentError> {
        ContentLoader::new(self).load_post(slug)
    }
}
