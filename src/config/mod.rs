//! Configuration module

mod site;

pub use site::{ServerConfig, SiteConfig};
