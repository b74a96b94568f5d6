use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Form, Router};
use serde::Deserialize;

use super::pages::{self, DetailPageParams};
use super::AppState;
use crate::api::{ApiError, NewComment};

/// Create the router with all routes.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(listing))
        .route("/post", get(post_detail))
        .route("/post/:id/comments", post(submit_comment))
        .route("/healthz", get(health))
}

// ========== HTML Routes ==========

/// Listing page: one read of the full post collection, one card per post.
///
/// A non-success upstream status produces no cards and no log line; the page
/// simply keeps its loading notice, matching the listing's long-standing
/// behavior. Transport and decode failures are logged but equally silent to
/// the user.
async fn listing(State(state): State<AppState>) -> Response {
    let posts = match state.api.list_posts().await {
        Ok(posts) => Some(posts),
        Err(ApiError::Status { .. }) => None,
        Err(e) => {
            tracing::error!("Failed to fetch posts: {e}");
            None
        }
    };

    let html = pages::render_listing_page(posts.as_deref());
    Html(html.into_string()).into_response()
}

#[derive(Debug, Deserialize)]
pub struct DetailParams {
    id: Option<String>,
}

/// Detail page: fetch one post and its comments concurrently, render both.
///
/// Without a usable `id` the page never reaches its loaded state. Either
/// fetch failing fails the joint wait and nothing is rendered.
async fn post_detail(State(state): State<AppState>, Query(params): Query<DetailParams>) -> Response {
    let Some(id) = params.id.as_deref().and_then(|v| v.parse::<i64>().ok()) else {
        return Html(pages::render_detail_unavailable().into_string()).into_response();
    };

    match tokio::try_join!(state.api.fetch_post(id), state.api.fetch_comments(id)) {
        Ok((post, comments)) => {
            let html = pages::render_detail_page(&DetailPageParams {
                post: &post,
                comments: &comments,
                draft: None,
            });
            Html(html.into_string()).into_response()
        }
        Err(e) => {
            tracing::error!(post_id = id, "Failed to fetch post detail: {e}");
            (StatusCode::BAD_GATEWAY, "Upstream API error").into_response()
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CommentFormData {
    email: String,
    comment: String,
}

/// Comment submission: forward the draft to the remote API and re-render the
/// detail page with the echoed comment appended to the list the user was
/// looking at. The comment list is fetched before the create and never
/// reconciled against the server afterwards.
async fn submit_comment(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Form(form): Form<CommentFormData>,
) -> Response {
    let (post, mut comments) =
        match tokio::try_join!(state.api.fetch_post(id), state.api.fetch_comments(id)) {
            Ok(pair) => pair,
            Err(e) => {
                tracing::error!(post_id = id, "Failed to fetch post detail: {e}");
                return (StatusCode::BAD_GATEWAY, "Upstream API error").into_response();
            }
        };

    let draft = NewComment {
        email: form.email,
        body: form.comment,
    };

    match state.api.create_comment(id, &draft).await {
        Ok(created) => {
            comments.push(created);
            let html = pages::render_detail_page(&DetailPageParams {
                post: &post,
                comments: &comments,
                draft: None,
            });
            Html(html.into_string()).into_response()
        }
        Err(e) => {
            // The submission is lost; keep the draft in the form fields.
            tracing::error!(post_id = id, "Failed to submit comment: {e}");
            let html = pages::render_detail_page(&DetailPageParams {
                post: &post,
                comments: &comments,
                draft: Some(&draft),
            });
            Html(html.into_string()).into_response()
        }
    }
}

// ========== Utility Routes ==========

async fn health() -> &'static str {
    "ok"
}
