//! List site content

use anyhow::Result;
use std::collections::HashMap;

use crate::content::{LoadReport, Post};
use crate::Blog;

/// List site content by type
pub fn run(blog: &Blog, content_type: &str, strict: bool) -> Result<()> {
    let report = blog.load_posts()?;

    for failure in &report.failures {
        eprintln!("Skipped {}: {}", failure.source_id, failure.error);
    }
    if strict && !report.is_complete() {
        anyhow::bail!("{} post(s) failed to load", report.failures.len());
    }

    match content_type {
        "post" | "posts" => print!("{}", format_posts(&blog.config.title, &report)),
        "tag" | "tags" => print!("{}", format_tags(&report.posts)),
        _ => {
            anyhow::bail!("Unknown type: {}. Available: post, tag", content_type);
        }
    }

    Ok(())
}

/// One line per post, newest first, under the site title
pub fn format_posts(site_title: &str, report: &LoadReport) -> String {
    let mut out = format!("{} - Posts ({}):\n", site_title, report.posts.len());
    for post in &report.posts {
        out.push_str(&format!(
            "  {} - {} [{}]\n",
            post.date.format("%Y-%m-%d"),
            post.title,
            post.slug
        ));
    }
    out
}

/// Tags with post counts, most used first
pub fn format_tags(posts: &[Post]) -> String {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for post in posts {
        for tag in &post.tags {
            *counts.entry(tag.as_str()).or_insert(0) += 1;
        }
    }

    let mut tags: Vec<_> = counts.into_iter().collect();
    // Name breaks ties so the output is stable
    tags.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));

    let mut out = format!("Tags ({}):\n", tags.len());
    for (tag, count) in tags {
        out.push_str(&format!("  {} ({})\n", tag, count));
    }
    out
}
