//! Validate the data file
//!
//! Duplicate ids and empty titles are accepted at serve time (first match
//! wins on lookup), so this command is the place where an author finds out
//! about them.

use anyhow::Result;

use crate::Blog;

/// Check the data file for authoring mistakes; returns the number of findings
pub fn run(blog: &Blog) -> Result<usize> {
    let store = blog.load_store()?;
    let mut findings = 0;

    for id in store.duplicate_ids() {
        println!("duplicate id: {} appears more than once", id);
        findings += 1;
    }

    for post in store.all() {
        if post.title.trim().is_empty() {
            println!("empty title: post {} has no title", post.id);
            findings += 1;
        }
    }

    if findings == 0 {
        println!("OK: {} posts, no problems found", store.len());
    } else {
        println!("{} problem(s) found in {:?}", findings, blog.data_path);
    }

    Ok(findings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn blog_with_data(data: &str) -> (tempfile::TempDir, Blog) {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("data")).unwrap();
        fs::write(dir.path().join("data/blogs.json"), data).unwrap();
        let blog = Blog::new(dir.path()).unwrap();
        (dir, blog)
    }

    #[test]
    fn test_clean_data_file() {
        let (_dir, blog) = blog_with_data(
            r#"[
                {"id": 1, "title": "A", "description": "a"},
                {"id": 2, "title": "B", "description": "b"}
            ]"#,
        );
        assert_eq!(run(&blog).unwrap(), 0);
    }

    #[test]
    fn test_reports_duplicates_and_empty_titles() {
        let (_dir, blog) = blog_with_data(
            r#"[
                {"id": 1, "title": "A", "description": "a"},
                {"id": 1, "title": "A again", "description": "a2"},
                {"id": 2, "title": "  ", "description": "b"}
            ]"#,
        );
        assert_eq!(run(&blog).unwrap(), 2);
    }
}
