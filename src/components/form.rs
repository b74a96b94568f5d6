//! Comment submission form component.

use maud::{html, Markup, Render};

/// The comment form for a post's detail page.
///
/// Posts to the comments route for `post_id`. After a successful submission
/// the page is re-rendered with an empty form; after a failed one the
/// submitted values are carried back so the fields stay populated.
#[derive(Debug, Clone)]
pub struct CommentForm<'a> {
    pub post_id: i64,
    pub email: &'a str,
    pub body: &'a str,
}

impl<'a> CommentForm<'a> {
    /// Create an empty comment form for the given post.
    #[must_use]
    pub const fn new(post_id: i64) -> Self {
        Self {
            post_id,
            email: "",
            body: "",
        }
    }

    /// Pre-populate the form fields with previously submitted values.
    #[must_use]
    pub const fn with_values(mut self, email: &'a str, body: &'a str) -> Self {
        self.email = email;
        self.body = body;
        self
    }

    /// The submission URL for this form.
    #[must_use]
    pub fn action(&self) -> String {
        format!("/post/{}/comments", self.post_id)
    }
}

impl Render for CommentForm<'_> {
    fn render(&self) -> Markup {
        html! {
            form id="comment-form" action=(self.action()) method="post" {
                label for="email" { "Email" }
                input type="email" id="email" name="email" value=(self.email) required;
                label for="comment" { "Comment" }
                textarea id="comment" name="comment" required { (self.body) }
                button type="submit" { "Send" }
            }
        }
    }
}
