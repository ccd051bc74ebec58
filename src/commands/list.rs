//! List posts from the data file

use anyhow::Result;

use crate::loader;
use crate::Blog;

/// Print the post collection to stdout
pub fn run(blog: &Blog) -> Result<()> {
    let store = blog.load_store()?;
    let posts = loader::list_all(&store);

    println!("Posts ({}):", posts.len());
    for post in posts {
        println!("  {} - {}", post.id, post.title);
    }

    Ok(())
}
