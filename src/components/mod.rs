//! Maud HTML template components for the web UI.
//!
//! Components are organized into submodules by functionality:
//!
//! - `layout`: Base page layout and navigation
//! - `card`: Post cards for the listing page
//! - `comment`: Comment blocks (shared by initial render and submission echo)
//! - `form`: The comment submission form
//! - `notice`: The loading notice shown while a page has no data

pub mod card;
pub mod comment;
pub mod form;
pub mod layout;
pub mod notice;

pub use card::PostCard;
pub use comment::CommentBlock;
pub use form::CommentForm;
pub use layout::BaseLayout;
pub use notice::LoadingNotice;
