//! Listing page template.

use maud::{html, Markup};

use crate::api::Post;
use crate::components::{BaseLayout, LoadingNotice, PostCard};

/// Render the listing page.
///
/// `Some(posts)` is the loaded state: the loading notice is hidden and one
/// card is rendered per post, in fetch order. `None` means the collection
/// read never succeeded, so the notice stays visible and no cards appear.
#[must_use]
pub fn render_listing_page(posts: Option<&[Post]>) -> Markup {
    let content = html! {
        h1 { "Posts" }

        @if let Some(posts) = posts {
            (LoadingNotice::hidden())
            div id="container" {
                @for post in posts {
                    (PostCard::new(post))
                }
            }
        } @else {
            (LoadingNotice::visible())
            div id="container" {}
        }
    };

    BaseLayout::new("Posts").render(content)
}
