//! Transport-only GitHub REST client primitives.
//!
//! This crate owns request building and response parsing for the five REST
//! endpoints the session pipeline touches: credential check, rate-limit
//! query, repository resolution, file contents, and contents write-back. It
//! intentionally contains no session logic and no content decoding.
//!
//! Every call is a single attempt; retry, backoff, and cancellation are
//! deliberately absent. Non-success responses carry the response body
//! verbatim so callers can display it unchanged.

pub mod client;
pub mod config;
pub mod error;
pub mod headers;
pub mod payload;
pub mod url;

pub use client::GithubApiClient;
pub use config::GithubApiConfig;
pub use error::GithubApiError;
pub use payload::{
    ContentsResponse, ContentsUpdate, RateLimitResponse, RepoResponse, UpdateResponse,
    UserResponse,
};
pub use url::{normalize_base_url, DEFAULT_GITHUB_BASE_URL};
