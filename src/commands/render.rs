//! Render a single markdown file

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::content::{FrontMatter, MarkdownRenderer};

/// Render the body of a markdown file to HTML on stdout
pub fn run(path: &Path) -> Result<()> {
    let content =
        fs::read_to_string(path).with_context(|| format!("Failed to read {:?}", path))?;
    println!("{}", render_source(&content));
    Ok(())
}

/// Front matter is dropped; only the body is rendered
pub fn render_source(content: &str) -> String {
    let (_, body) = FrontMatter::parse(content);
    MarkdownRenderer::render(body)
}
