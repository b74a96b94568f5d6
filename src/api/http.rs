//! reqwest-based implementation of [`PostsApi`].

use async_trait::async_trait;
use reqwest::Response;

use crate::config::Config;
use crate::constants::USER_AGENT;

use super::{ApiError, Comment, NewComment, Post, PostsApi};

/// HTTP client for the remote posts API.
#[derive(Debug, Clone)]
pub struct HttpPostsApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpPostsApi {
    /// Build a client for the API base URL in `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be constructed.
    pub fn new(config: &Config) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(ApiError::Transport)?;

        Ok(Self {
            client,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
        })
    }

    fn post_url(&self, id: i64) -> String {
        format!("{}/{id}", self.base_url)
    }

    fn comments_url(&self, post_id: i64) -> String {
        format!("{}/{post_id}/comments", self.base_url)
    }

    async fn decode<T: serde::de::DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status { status });
        }
        response.json().await.map_err(ApiError::Decode)
    }
}

#[async_trait]
impl PostsApi for HttpPostsApi {
    async fn list_posts(&self) -> Result<Vec<Post>, ApiError> {
        let response = self
            .client
            .get(&self.base_url)
            .send()
            .await
            .map_err(ApiError::Transport)?;
        Self::decode(response).await
    }

    async fn fetch_post(&self, id: i64) -> Result<Post, ApiError> {
        let response = self
            .client
            .get(self.post_url(id))
            .send()
            .await
            .map_err(ApiError::Transport)?;
        Self::decode(response).await
    }

    async fn fetch_comments(&self, post_id: i64) -> Result<Vec<Comment>, ApiError> {
        let response = self
            .client
            .get(self.comments_url(post_id))
            .send()
            .await
            .map_err(ApiError::Transport)?;
        Self::decode(response).await
    }

    async fn create_comment(
        &self,
        post_id: i64,
        draft: &NewComment,
    ) -> Result<Comment, ApiError> {
        let response = self
            .client
            .post(self.comments_url(post_id))
            .json(draft)
            .send()
            .await
            .map_err(ApiError::Transport)?;
        Self::decode(response).await
    }
}
