//! Page templates rendered by the route handlers.

mod detail;
mod listing;

pub use detail::{render_detail_page, render_detail_unavailable, DetailPageParams};
pub use listing::render_listing_page;
