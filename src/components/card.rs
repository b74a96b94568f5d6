//! Card component for the post listing page.

use maud::{html, Markup, Render};

use crate::api::Post;

/// A listing card for one post: title, body, and a link to the detail page.
///
/// Cards are rendered in the order the posts were fetched; the listing never
/// sorts them.
#[derive(Debug, Clone)]
pub struct PostCard<'a> {
    pub post: &'a Post,
}

impl<'a> PostCard<'a> {
    /// Create a new post card.
    #[must_use]
    pub const fn new(post: &'a Post) -> Self {
        Self { post }
    }

    /// The detail page URL for this card's post.
    #[must_use]
    pub fn detail_href(&self) -> String {
        format!("/post?id={}", self.post.id)
    }
}

impl Render for PostCard<'_> {
    fn render(&self) -> Markup {
        html! {
            article class="card" {
                h2 { (self.post.title) }
                p { (self.post.body) }
                a href=(self.detail_href()) { "Read" }
            }
        }
    }
}
