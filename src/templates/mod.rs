//! Embedded HTML templates using the Tera template engine
//!
//! All page templates are compiled into the binary. Autoescaping stays on:
//! post titles and descriptions are plain text, never raw HTML.

use anyhow::Result;
use std::collections::HashMap;
use tera::{Context, Tera};

use crate::config::SiteConfig;
use crate::store::BlogPost;

/// Template renderer with the embedded page templates
pub struct TemplateRenderer {
    tera: Tera,
}

impl TemplateRenderer {
    /// Create a new renderer with all templates loaded
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();

        tera.add_raw_templates(vec![
            ("layout.html", include_str!("theme/layout.html")),
            ("home.html", include_str!("theme/home.html")),
            ("blogs.html", include_str!("theme/blogs.html")),
            ("blog.html", include_str!("theme/blog.html")),
            ("not_found.html", include_str!("theme/not_found.html")),
        ])?;

        tera.register_filter("truncate_chars", truncate_chars_filter);

        Ok(Self { tera })
    }

    /// Render a template with given context
    pub fn render(&self, template_name: &str, context: &Context) -> Result<String> {
        Ok(self.tera.render(template_name, context)?)
    }

    /// Render the home page
    pub fn render_home(&self, config: &SiteConfig) -> Result<String> {
        let context = base_context(config);
        self.render("home.html", &context)
    }

    /// Render the listing page with the full collection
    pub fn render_blogs(&self, config: &SiteConfig, posts: &[BlogPost]) -> Result<String> {
        let mut context = base_context(config);
        context.insert("posts", posts);
        self.render("blogs.html", &context)
    }

    /// Render the detail page for a single post
    pub fn render_blog(&self, config: &SiteConfig, post: &BlogPost) -> Result<String> {
        let mut context = base_context(config);
        context.insert("post", post);
        self.render("blog.html", &context)
    }

    /// Render the not-found page
    pub fn render_not_found(&self, config: &SiteConfig) -> Result<String> {
        let context = base_context(config);
        self.render("not_found.html", &context)
    }
}

fn base_context(config: &SiteConfig) -> Context {
    let mut context = Context::new();
    context.insert("config", config);
    context
}

/// Tera filter: truncate by character count
fn truncate_chars_filter(
    value: &tera::Value,
    args: &HashMap<String, tera::Value>,
) -> tera::Result<tera::Value> {
    let s = tera::try_get_value!("truncate_chars", "value", String, value);
    let length = match args.get("length") {
        Some(val) => tera::try_get_value!("truncate_chars", "length", usize, val),
        None => 150,
    };
    let omission = match args.get("omission") {
        Some(val) => tera::try_get_value!("truncate_chars", "omission", String, val),
        None => "...".to_string(),
    };

    if s.chars().count() <= length {
        Ok(tera::Value::String(s))
    } else {
        let truncated: String = s.chars().take(length).collect();
        Ok(tera::Value::String(format!(
            "{}{}",
            truncated.trim_end(),
            omission
        )))
    }
}
