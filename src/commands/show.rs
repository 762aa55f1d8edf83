//! Show a single post

use anyhow::Result;

use crate::Blog;

/// Print one post as rendered HTML or as JSON
pub fn run(blog: &Blog, slug: &str, json: bool) -> Result<()> {
    let post = blog.load_post(slug)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&post)?);
    } else {
        println!("{}", post.content);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_show_missing_post() {
        let dir = TempDir::new().unwrap();
        let blog = Blog::new(dir.path()).unwrap();
        let err = run(&blog, "nothing-here", false).unwrap_err();
        assert!(err.to_string().contains("post not found"));
    }

    #[test]
    fn test_show_existing_post() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("posts")).unwrap();
        fs::write(dir.path().join("posts/hi.md"), "Hello").unwrap();
        let blog = Blog::new(dir.path()).unwrap();
        assert!(run(&blog, "hi", true).is_ok());
    }
}
