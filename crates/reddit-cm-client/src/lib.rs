//! HTTP implementation of [`reddit_cm_domain::PlatformClient`] backed by the
//! Reddit OAuth API (script-app password grant).

pub mod models;
pub mod reddit;

pub use reddit::{RedditClient, RedditEndpoints};
