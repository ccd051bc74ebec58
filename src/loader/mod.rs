//! Data loaders for the page routes
//!
//! A loader maps route parameters to the record (or records) a page needs,
//! decoupled from rendering. Lookup failure and malformed id input collapse
//! into the same `NotFound` outcome: a malformed id cannot refer to any post,
//! so it is not a distinct error path.

use crate::store::{BlogPost, BlogStore};

/// Result of a single-post lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup<'a> {
    Found(&'a BlogPost),
    NotFound,
}

impl<'a> Lookup<'a> {
    /// The matching post, if any
    pub fn found(self) -> Option<&'a BlogPost> {
        match self {
            Lookup::Found(post) => Some(post),
            Lookup::NotFound => None,
        }
    }
}

/// Loader for the listing page: every post, in collection order.
///
/// Never fails; an empty store yields an empty slice.
pub fn list_all(store: &BlogStore) -> &[BlogPost] {
    store.all()
}

/// Loader for the detail page: the post whose id matches the route parameter.
///
/// `raw_id` is the path segment as extracted from the URL. With duplicate ids
/// in the source data the first match in collection order wins.
pub fn get_by_id<'a>(store: &'a BlogStore, raw_id: &str) -> Lookup<'a> {
    let id = match raw_id.parse::<u64>() {
        Ok(id) => id,
        Err(_) => return Lookup::NotFound,
    };

    match store.all().iter().find(|post| post.id == id) {
        Some(post) => Lookup::Found(post),
        None => Lookup::NotFound,
    }
}
