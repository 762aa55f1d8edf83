//! Read-only HTTP server for posts and static assets

use anyhow::Result;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::task::JoinError;
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::content::{ContentError, Post};
use crate::Blog;

/// Body of the post listing
#[derive(Debug, Serialize)]
pub struct PostList {
    pub posts: Vec<Post>,
    /// Source ids that failed to load
    pub skipped: Vec<String>,
}

/// Errors surfaced to HTTP clients
///
/// Only the status and a fixed message reach the client; details are
/// logged.
#[derive(Debug)]
pub enum ApiError {
    NotFound,
    Internal(String),
}

impl From<ContentError> for ApiError {
    fn from(err: ContentError) -> Self {
        if err.is_not_found() {
            ApiError::NotFound
        } else {
            ApiError::Internal(err.to_string())
        }
    }
}

impl From<JoinError> for ApiError {
    fn from(err: JoinError) -> Self {
        ApiError::Internal(format!("load task failed: {}", err))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::NotFound => (StatusCode::NOT_FOUND, "Not found").into_response(),
            ApiError::Internal(detail) => {
                tracing::error!("Request failed: {}", detail);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error").into_response()
            }
        }
    }
}

/// Build the application router
pub fn router(blog: Arc<Blog>) -> Router {
    let static_dir = blog.static_dir.clone();

    Router::new()
        .route("/api/posts", get(list_posts))
        .route("/api/posts/:slug", get(get_post))
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(blog)
}

/// Start the server
pub async fn start(blog: &Blog, ip: &str, port: u16) -> Result<()> {
    let app = router(Arc::new(blog.clone()));

    // Parse address - handle "localhost" specially
    let bind_ip = if ip == "localhost" { "127.0.0.1" } else { ip };
    let addr: SocketAddr = format!("{}:{}", bind_ip, port).parse()?;

    tracing::info!(
        "Serving {:?} from {:?} (posts in {:?})",
        blog.config.title,
        blog.base_dir,
        blog.content_dir
    );
    println!("Server running at http://{}:{}", ip, port);
    println!("Press Ctrl+C to stop.");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// GET /api/posts
pub async fn list_posts(State(blog): State<Arc<Blog>>) -> Result<Json<PostList>, ApiError> {
    // Loading reads the disk synchronously
    let report = tokio::task::spawn_blocking(move || blog.load_posts()).await??;

    let skipped = report
        .failures
        .into_iter()
        .map(|failure| failure.source_id)
        .collect();

    Ok(Json(PostList {
        posts: report.posts,
        skipped,
    }))
}

/// GET /api/posts/:slug
pub async fn get_post(
    State(blog): State<Arc<Blog>>,
    Path(slug): Path<String>,
) -> Result<Json<Post>, ApiError> {
    let post = tokio::task::spawn_blocking(move || blog.load_post(&slug)).await??;
    Ok(Json(post))
}
