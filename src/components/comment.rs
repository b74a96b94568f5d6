//! Comment block component.
//!
//! This is the one shared rendering path for comments: the detail page uses
//! it for the initially fetched list, and the submission handler uses it for
//! the API's echo of a newly created comment. Author-supplied and
//! server-supplied content go through the same maud text escaping.

use maud::{html, Markup, Render};

use crate::api::Comment;

/// A rendered comment: author email as a heading, then the body.
#[derive(Debug, Clone)]
pub struct CommentBlock<'a> {
    pub comment: &'a Comment,
}

impl<'a> CommentBlock<'a> {
    /// Create a new comment block.
    #[must_use]
    pub const fn new(comment: &'a Comment) -> Self {
        Self { comment }
    }
}

impl Render for CommentBlock<'_> {
    fn render(&self) -> Markup {
        html! {
            div class="comment" {
                h3 { (self.comment.email) }
                p { (self.comment.body) }
            }
        }
    }
}
