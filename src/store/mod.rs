//! Static blog post store
//!
//! The post collection is read from a JSON file exactly once, at startup, and
//! is immutable for the lifetime of the process. Listing order is the order
//! the posts appear in the source file.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// A blog post
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogPost {
    /// Unique identifier, assigned at authoring time
    pub id: u64,

    /// Display title
    pub title: String,

    /// Body text; embedded newlines are preserved on display
    pub description: String,
}

/// Errors raised while loading the data file
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read data file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse data file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Read-only, in-memory collection of blog posts
#[derive(Debug, Clone)]
pub struct BlogStore {
    posts: Vec<BlogPost>,
}

impl BlogStore {
    /// Load the collection from a JSON file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let content = fs::read_to_string(path.as_ref())?;
        let posts: Vec<BlogPost> = serde_json::from_str(&content)?;

        let store = Self { posts };
        for id in store.duplicate_ids() {
            tracing::warn!("Duplicate post id {} in data file; lookups return the first match", id);
        }
        tracing::debug!("Loaded {} posts from {:?}", store.len(), path.as_ref());

        Ok(store)
    }

    /// Build a store from an already-materialized collection
    pub fn from_posts(posts: Vec<BlogPost>) -> Self {
        Self { posts }
    }

    /// The full collection, in source order
    pub fn all(&self) -> &[BlogPost] {
        &self.posts
    }

    /// Number of posts in the collection
    pub fn len(&self) -> usize {
        self.posts.len()
    }

    /// Whether the collection is empty
    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    /// Ids that appear more than once, in first-occurrence order
    pub fn duplicate_ids(&self) -> Vec<u64> {
        let mut seen = HashSet::new();
        let mut dupes = Vec::new();
        for post in &self.posts {
            if !seen.insert(post.id) && !dupes.contains(&post.id) {
                dupes.push(post.id);
            }
        }
        dupes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_data_file(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_preserves_source_order() {
        let file = write_data_file(
            r#"[
                {"id": 3, "title": "Third", "description": "c"},
                {"id": 1, "title": "First", "description": "a"},
                {"id": 2, "title": "Second", "description": "b"}
            ]"#,
        );
        let store = BlogStore::load(file.path()).unwrap();
        assert_eq!(store.len(), 3);
        let ids: Vec<u64> = store.all().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
        assert_eq!(store.all()[0].title, "Third");
    }

    #[test]
    fn test_load_empty_collection() {
        let file = write_data_file("[]");
        let store = BlogStore::load(file.path()).unwrap();
        assert!(store.is_empty());
        assert_eq!(store.all().len(), 0);
    }

    #[test]
    fn test_load_malformed_json() {
        let file = write_data_file("{not json");
        let err = BlogStore::load(file.path()).unwrap_err();
        assert!(matches!(err, StoreError::Parse(_)));
    }

    #[test]
    fn test_load_missing_file() {
        let err = BlogStore::load("does-not-exist.json").unwrap_err();
        assert!(matches!(err, StoreError::Io(_)));
    }

    #[test]
    fn test_all_returns_same_collection() {
        let file = write_data_file(r#"[{"id": 1, "title": "A", "description": "d1"}]"#);
        let store = BlogStore::load(file.path()).unwrap();
        assert_eq!(store.all(), store.all());
    }

    #[test]
    fn test_duplicate_ids() {
        let store = BlogStore::from_posts(vec![
            BlogPost {
                id: 1,
                title: "A".to_string(),
                description: "a".to_string(),
            },
            BlogPost {
                id: 2,
                title: "B".to_string(),
                description: "b".to_string(),
            },
            BlogPost {
                id: 1,
                title: "A again".to_string(),
                description: "a2".to_string(),
            },
        ]);
        assert_eq!(store.duplicate_ids(), vec![1]);
    }

    #[test]
    fn test_no_duplicate_ids() {
        let store = BlogStore::from_posts(vec![BlogPost {
            id: 1,
            title: "A".to_string(),
            description: "a".to_string(),
        }]);
        assert!(store.duplicate_ids().is_empty());
    }
}
