//! Content loader - loads posts from the content directory

use std::collections::HashSet;
use std::fs;
use std::path::{Component, Path, PathBuf};
use walkdir::WalkDir;

use super::{ContentError, Post};
use crate::Blog;

/// Read-only access to post sources
///
/// Source ids are paths relative to the store root, `/`-separated and
/// including the file extension.
pub trait ContentStore {
    /// List the ids of all sources with the given extension
    fn list(&self, extension: &str) -> Result<Vec<String>, ContentError>;

    /// Read one source as text
    fn read(&self, source_id: &str) -> Result<String, ContentError>;
}

/// Post sources on the local filesystem
#[derive(Debug, Clone)]
pub struct FsStore {
    root: PathBuf,
    recursive: bool,
}

impl FsStore {
    /// Store over the top level of `root`
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self {
            root: root.into(),
            recursive: false,
        }
    }

    /// Also descend into subdirectories when listing
    pub fn recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    /// Directory the source ids are relative to
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl ContentStore for FsStore {
    fn list(&self, extension: &str) -> Result<Vec<String>, ContentError> {
        if !self.root.exists() {
            return Ok(Vec::new());
        }

        let mut walker = WalkDir::new(&self.root)
            .follow_links(true)
            .min_depth(1)
            .sort_by_file_name();
        if !self.recursive {
            walker = walker.max_depth(1);
        }

        let mut ids = Vec::new();
        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                // The root itself is unreadable
                Err(e) if e.depth() == 0 => {
                    return Err(ContentError::List {
                        root: self.root.clone(),
                        source: e.into(),
                    });
                }
                Err(e) => {
                    tracing::warn!("Skipping unreadable entry under {:?}: {}", self.root(), e);
                    continue;
                }
            };

            let path = entry.path();
            if entry.file_type().is_file() && has_extension(path, extension) {
                let relative = path.strip_prefix(&self.root).unwrap_or(path);
                ids.push(source_id(relative));
            }
        }

        Ok(ids)
    }

    fn read(&self, source_id: &str) -> Result<String, ContentError> {
        fs::read_to_string(self.root().join(source_id)).map_err(|source| ContentError::Read {
            source_id: source_id.to_string(),
            source,
        })
    }
}

/// A source that could not be turned into a post
#[derive(Debug)]
pub struct LoadFailure {
    pub source_id: String,
    pub error: ContentError,
}

/// Result of loading the whole collection
#[derive(Debug, Default)]
pub struct LoadReport {
    /// Loaded posts, newest first
    pub posts: Vec<Post>,
    /// Sources that were skipped
    pub failures: Vec<LoadFailure>,
}

impl LoadReport {
    /// Whether every listed source loaded
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }

    /// All posts, or the first failure if any source was skipped
    pub fn into_strict(self) -> Result<Vec<Post>, ContentError> {
        match self.failures.into_iter().next() {
            Some(failure) => Err(failure.error),
            None => Ok(self.posts),
        }
    }
}

/// Loads posts from a content store
pub struct ContentLoader<S = FsStore> {
    store: S,
    extension: String,
}

impl ContentLoader<FsStore> {
    /// Create a loader over the blog's content directory
    pub fn new(blog: &Blog) -> Self {
        let store = FsStore::new(&blog.content_dir).recursive(blog.config.recursive);
        Self::with_store(store, &blog.config.extension)
    }
}

impl<S: ContentStore> ContentLoader<S> {
    /// Create a loader over any store
    pub fn with_store(store: S, extension: &str) -> Self {
        Self {
            store,
            extension: extension.trim_start_matches('.').to_string(),
        }
    }

    /// Load all posts, newest first
    ///
    /// A source that fails to load is recorded in the report and the
    /// rest still load. Only a failure to list the store is an error.
    pub fn load_posts(&self) -> Result<LoadReport, ContentError> {
        let mut report = LoadReport::default();
        let mut seen = HashSet::new();

        for id in self.store.list(&self.extension)? {
            match self.load_source(&id) {
                Ok(post) => {
                    if !seen.insert(post.slug.clone()) {
                        tracing::warn!("Duplicate slug {:?} from {}", post.slug, id);
                    }
                    tracing::debug!("Loaded post {:?} from {}", post.slug, id);
                    report.posts.push(post);
                }
                Err(error) => {
                    tracing::warn!("Failed to load post {}: {}", id, error);
                    report.failures.push(LoadFailure {
                        source_id: id,
                        error,
                    });
                }
            }
        }

        // Sort by date descending (newest first)
        report.posts.sort_by(|a, b| b.date.cmp(&a.date));

        tracing::info!(
            "Loaded {} posts ({} skipped)",
            report.posts.len(),
            report.failures.len()
        );

        Ok(report)
    }

    /// Load a single post by slug
    pub fn load_post(&self, slug: &str) -> Result<Post, ContentError> {
        if slug.is_empty() {
            return Err(ContentError::NotFound {
                slug: slug.to_string(),
            });
        }

        let id = self
            .store
            .list(&self.extension)?
            .into_iter()
            .find(|id| slug_for(id, &self.extension) == slug)
            .ok_or_else(|| ContentError::NotFound {
                slug: slug.to_string(),
            })?;

        self.load_source(&id)
    }

    fn load_source(&self, id: &str) -> Result<Post, ContentError> {
        let raw = self.store.read(id)?;
        Ok(Post::from_source(&slug_for(id, &self.extension), &raw))
    }
}

/// Slug of a source id: the file name without directories or extension
pub fn slug_for(source_id: &str, extension: &str) -> String {
    let name = source_id.rsplit(['/', '\\']).next().unwrap_or(source_id);
    let suffix = format!(".{}", extension);
    name.strip_suffix(suffix.as_str()).unwrap_or(name).to_string()
}

/// Check if a file has the given extension
fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e == extension)
        .unwrap_or(false)
}

fn source_id(relative: &Path) -> String {
    relative
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}
