//! Post detail page template.

use maud::{html, Markup};

use crate::api::{Comment, NewComment, Post};
use crate::components::{BaseLayout, CommentBlock, CommentForm, LoadingNotice};

/// Parameters for the post detail page.
#[derive(Debug, Clone)]
pub struct DetailPageParams<'a> {
    pub post: &'a Post,
    pub comments: &'a [Comment],
    /// A draft whose submission failed; its values are carried back into the
    /// form fields. `None` renders an empty form.
    pub draft: Option<&'a NewComment>,
}

/// Render the post detail page: the post, its comments in fetch order, and
/// the comment form.
#[must_use]
pub fn render_detail_page(params: &DetailPageParams<'_>) -> Markup {
    let form = match params.draft {
        Some(draft) => CommentForm::new(params.post.id).with_values(&draft.email, &draft.body),
        None => CommentForm::new(params.post.id),
    };

    let content = html! {
        (LoadingNotice::hidden())

        article id="post-container" {
            h2 { (params.post.title) }
            p { (params.post.body) }
        }

        section {
            h2 { "Comments" }
            div id="comments-container" {
                @for comment in params.comments {
                    (CommentBlock::new(comment))
                }
            }
        }

        section {
            h2 { "Add a comment" }
            (form)
        }
    };

    BaseLayout::new(&params.post.title).render(content)
}

/// Render the detail page when no usable post identifier was supplied.
///
/// There is nothing to fetch, so the page never reaches its loaded state and
/// the loading notice stays up.
#[must_use]
pub fn render_detail_unavailable() -> Markup {
    let content = html! {
        (LoadingNotice::visible())
    };

    BaseLayout::new("Post").render(content)
}
