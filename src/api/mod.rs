//! Client for the remote posts API.
//!
//! The remote API owns all data: posts, their comments, and the identifiers
//! assigned on comment creation. This module defines the view-model types,
//! the [`PostsApi`] trait that page handlers depend on, and the reqwest-based
//! implementation used in production. Handlers hold the trait object so tests
//! can substitute a fake without a live server.

mod http;
mod models;

use async_trait::async_trait;
use reqwest::StatusCode;
use thiserror::Error;

pub use http::HttpPostsApi;
pub use models::{Comment, NewComment, Post};

/// Failure modes of a remote API call.
///
/// A non-success status is distinguished from transport and decode failures
/// because the listing page treats them differently: an upstream status is
/// ignored silently, while the others are logged.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("remote API returned status {status}")]
    Status { status: StatusCode },
    #[error("request to remote API failed: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("failed to decode remote API response: {0}")]
    Decode(#[source] reqwest::Error),
}

/// Read and write access to the remote posts API.
#[async_trait]
pub trait PostsApi: Send + Sync {
    /// Fetch the full post collection, in the order the API returns it.
    async fn list_posts(&self) -> Result<Vec<Post>, ApiError>;

    /// Fetch a single post by identifier.
    async fn fetch_post(&self, id: i64) -> Result<Post, ApiError>;

    /// Fetch the comments for a post, in the order the API returns them.
    async fn fetch_comments(&self, post_id: i64) -> Result<Vec<Comment>, ApiError>;

    /// Create a new comment on a post, returning the API's echo of the
    /// created resource.
    async fn create_comment(&self, post_id: i64, draft: &NewComment)
        -> Result<Comment, ApiError>;
}
