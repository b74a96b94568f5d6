//! Blogview library.
//!
//! A server-rendered viewer for a remote blog posts API: a listing page that
//! shows every post as a card, and a detail page that shows one post with its
//! comments and a form for submitting new ones. All state lives in the remote
//! API; nothing is persisted locally.

pub mod api;
pub mod components;
pub mod config;
pub mod constants;
pub mod web;
