//! Content module - front matter, metadata, rendering and post loading

mod error;
mod frontmatter;
pub mod loader;
mod markdown;
pub mod metadata;
mod post;

pub use error::ContentError;
pub use frontmatter::FrontMatter;
pub use loader::{ContentLoader, ContentStore, FsStore, LoadFailure, LoadReport};
pub use markdown::MarkdownRenderer;
pub use post::{strip_html, summarize, Post, SUMMARY_LENGTH};
