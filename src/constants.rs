//! Shared constants used across the application.

/// User agent string sent with every request to the remote posts API.
pub const USER_AGENT: &str = concat!("blogview/", env!("CARGO_PKG_VERSION"));

/// Default base URL of the remote posts API.
pub const DEFAULT_API_BASE_URL: &str = "https://jsonplaceholder.typicode.com/posts";
