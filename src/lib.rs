//! blog-rs: a small blog website server
//!
//! Serves a home page, a blog listing page, and a blog detail page backed by
//! a static JSON data file loaded once at startup.

pub mod commands;
pub mod config;
pub mod loader;
pub mod server;
pub mod store;
pub mod templates;

use anyhow::Result;
use std::path::Path;

/// The main blog application
#[derive(Clone)]
pub struct Blog {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: std::path::PathBuf,
    /// Path to the static data file
    pub data_path: std::path::PathBuf,
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

        let data_path = base_dir.join(&config.data_file);

        Ok(Self {
            config,
            base_dir,
            data_path,
        })
    }

    /// Load the post collection from the data file
    pub fn load_store(&self) -> Result<store::BlogStore> {
        Ok(store::BlogStore::load(&self.data_path)?)
    }
}
