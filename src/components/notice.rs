//! Loading notice component.

use maud::{html, Markup, Render};

/// The loading notice shown while a page has nothing to render.
///
/// It stays visible when a fetch never reached its success branch, which is
/// exactly how the listing signals (or rather fails to signal) an upstream
/// problem.
#[derive(Debug, Clone, Copy)]
pub struct LoadingNotice {
    hidden: bool,
}

impl LoadingNotice {
    /// A notice that is still showing.
    #[must_use]
    pub const fn visible() -> Self {
        Self { hidden: false }
    }

    /// A notice that has been dismissed by a loaded page.
    #[must_use]
    pub const fn hidden() -> Self {
        Self { hidden: true }
    }
}

impl Render for LoadingNotice {
    fn render(&self) -> Markup {
        let class = if self.hidden {
            "loading-notice hidden"
        } else {
            "loading-notice"
        };
        html! {
            p class=(class) { "Loading..." }
        }
    }
}
