//! View-model types mirroring the remote API's JSON shapes.
//!
//! These are transient: fetched fresh on every page render and discarded
//! afterwards. Fields the API sends beyond what the pages display are
//! ignored on deserialization.

use serde::{Deserialize, Serialize};

/// A blog post as returned by the posts collection and single-post reads.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub body: String,
}

/// A comment as returned by the comments read or echoed back on creation.
///
/// `id` and `post_id` are assigned by the remote API; a creation echo may
/// omit the post association, so both are optional.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Comment {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default, rename = "postId")]
    pub post_id: Option<i64>,
    pub email: String,
    pub body: String,
}

/// A locally constructed comment draft, built from form input.
///
/// No identifier and no post association are set client-side; the post is
/// addressed through the request path and the API assigns the rest. The
/// serialized form is exactly `{"email":...,"body":...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewComment {
    pub email: String,
    pub body: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_post_ignores_extra_fields() {
        let post: Post = serde_json::from_value(json!({
            "userId": 1,
            "id": 7,
            "title": "a title",
            "body": "a body"
        }))
        .unwrap();
        assert_eq!(post.id, 7);
        assert_eq!(post.title, "a title");
        assert_eq!(post.body, "a body");
    }

    #[test]
    fn test_comment_with_full_shape() {
        let comment: Comment = serde_json::from_value(json!({
            "postId": 1,
            "id": 3,
            "name": "some name field we do not display",
            "email": "a@example.com",
            "body": "hello"
        }))
        .unwrap();
        assert_eq!(comment.id, Some(3));
        assert_eq!(comment.post_id, Some(1));
        assert_eq!(comment.email, "a@example.com");
        assert_eq!(comment.body, "hello");
    }

    #[test]
    fn test_comment_echo_without_post_association() {
        // A creation echo carries only what was sent plus a fresh id.
        let comment: Comment = serde_json::from_value(json!({
            "id": 501,
            "email": "a@example.com",
            "body": "hello"
        }))
        .unwrap();
        assert_eq!(comment.id, Some(501));
        assert_eq!(comment.post_id, None);
    }

    #[test]
    fn test_new_comment_serializes_email_and_body_only() {
        let draft = NewComment {
            email: "a@example.com".to_string(),
            body: "hello".to_string(),
        };
        let value = serde_json::to_value(&draft).unwrap();
        assert_eq!(value, json!({"email": "a@example.com", "body": "hello"}));
    }
}
