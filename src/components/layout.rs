//! Base layout component for the web UI.

use maud::{html, Markup, DOCTYPE};

/// Base page layout builder.
///
/// # Example
///
/// ```ignore
/// use maud::html;
/// use crate::components::layout::BaseLayout;
///
/// let content = html! { h1 { "Hello World" } };
/// let page = BaseLayout::new("My Page").render(content);
/// ```
#[derive(Debug, Clone)]
pub struct BaseLayout<'a> {
    title: &'a str,
}

impl<'a> BaseLayout<'a> {
    /// Create a new base layout with the given page title.
    #[must_use]
    pub const fn new(title: &'a str) -> Self {
        Self { title }
    }

    /// Render the complete HTML page with the given content.
    ///
    /// The content is placed inside the `<main class="container">` element.
    #[must_use]
    pub fn render(self, content: Markup) -> Markup {
        html! {
            (DOCTYPE)
            html lang="en" {
                head {
                    meta charset="UTF-8";
                    meta name="viewport" content="width=device-width, initial-scale=1.0";
                    title { (self.title) " - Blogview" }
                    link rel="stylesheet" href="/static/css/style.css";
                }
                body {
                    header class="container" {
                        nav {
                            ul {
                                li {
                                    a href="/" { strong class="site-logo" { "Blogview" } }
                                }
                            }
                            ul {
                                li { a href="/" { "Posts" } }
                            }
                        }
                    }
                    main class="container" {
                        (content)
                    }
                }
            }
        }
    }
}
