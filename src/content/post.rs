//! Post model and assembly

use chrono::{DateTime, Local};
use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;

use super::{metadata, FrontMatter, MarkdownRenderer};

/// Number of plain-text characters kept in a summary
pub const SUMMARY_LENGTH: usize = 100;

/// Appended to a summary that was cut short
const ELLIPSIS: &str = "...";

lazy_static! {
    static ref TAG_RE: Regex = Regex::new(r"<[^>]*>").unwrap();
}

/// A blog post
#[derive(Debug, Clone, Serialize)]
pub struct Post {
    /// Post title
    pub title: String,

    /// Rendered HTML content
    pub content: String,

    /// Publication date
    pub date: DateTime<Local>,

    /// Post tags, in declaration order
    pub tags: Vec<String>,

    /// Plain-text preview of the body
    pub summary: String,

    /// Slug (filename stem)
    pub slug: String,
}

impl Post {
    /// Assemble a post from its slug and the full source text
    pub fn from_source(slug: &str, raw: &str) -> Self {
        let (fm, body) = FrontMatter::parse(raw);

        Self {
            title: metadata::title(&fm, slug),
            content: MarkdownRenderer::render(body),
            date: metadata::date(&fm),
            tags: metadata::tags(&fm),
            summary: summarize(body),
            slug: slug.to_string(),
        }
    }
}

/// Remove anything that looks like an HTML tag
pub fn strip_html(s: &str) -> String {
    TAG_RE.replace_all(s, "").into_owned()
}

/// Plain-text summary of a markdown body
///
/// Works on the source text, not the rendered HTML, so it carries no
/// markup from the renderer.
pub fn summarize(body: &str) -> String {
    let plain = strip_html(body);
    if plain.chars().count() > SUMMARY_LENGTH {
        let mut summary: String = plain.chars().take(SUMMARY_LENGTH).collect();
        summary.push_str(ELLIPSIS);
        summary
    } else {
        plain
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_source() {
        let raw = r#"---
title: "My Post"
date: 2024-03-01
tags: [foo, bar]
---

# Heading

Some <b>text</b>.
"#;

        let post = Post::from_source("my-post", raw);
        assert_eq!(post.title, "My Post");
        assert_eq!(post.slug, "my-post");
        assert_eq!(post.date.format("%Y-%m-%d").to_string(), "2024-03-01");
        assert_eq!(post.tags, vec!["foo", "bar"]);
        assert!(post
            .content
            .starts_with("<h1 class='text-3xl font-bold mb-8'>Heading</h1>"));
        assert_eq!(post.summary, "# Heading\n\nSome text.");
    }

    #[test]
    fn test_from_source_without_frontmatter() {
        let before = Local::now();
        let post = Post::from_source("hello-world", "Just text.");
        assert_eq!(post.title, "Hello World");
        assert!(post.tags.is_empty());
        assert!(post.date >= before);
        assert_eq!(post.content, "<p class='mb-4'>Just text.</p>");
        assert_eq!(post.summary, "Just text.");
    }

    #[test]
    fn test_summary_truncation() {
        let long = "a".repeat(150);
        let summary = summarize(&long);
        assert_eq!(summary.chars().count(), 103);
        assert_eq!(summary, format!("{}...", "a".repeat(100)));

        let short = "b".repeat(50);
        assert_eq!(summarize(&short), short);

        let exact = "c".repeat(100);
        assert_eq!(summarize(&exact), exact);
    }

    #[test]
    fn test_summary_counts_characters() {
        let body = "é".repeat(120);
        let summary = summarize(&body);
        assert_eq!(summary, format!("{}...", "é".repeat(100)));
    }

    #[test]
    fn test_summary_strips_tags_before_counting() {
        let body = format!("<div>{}</div>", "x".repeat(98));
        assert_eq!(summarize(&body), "x".repeat(98));
    }

    #[test]
    fn test_strip_html() {
        assert_eq!(strip_html("<p class='a'>Hi <em>there</em></p>"), "Hi there");
        assert_eq!(strip_html("1 < 2"), "1 < 2");
    }
}
