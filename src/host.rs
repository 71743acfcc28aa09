//! Host abstraction over the remote source-hosting store.

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use crate::reports::{FileContent, Identity, RateLimit, RepoInfo};

/// Failure kinds a host reports, with raw error text carried verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HostError {
    #[error("authorization rejected: {0}")]
    Auth(String),

    #[error("resource not found: {0}")]
    NotFound(String),

    #[error("write rejected: {0}")]
    Conflict(String),

    #[error("transport failure: {0}")]
    Transport(String),

    #[error("malformed response payload: {0}")]
    Payload(String),
}

/// Write-back request: encoded content plus the revision hash it supersedes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileUpdate {
    pub message: String,
    pub content_base64: String,
    pub expected_sha: String,
}

impl FileUpdate {
    pub fn new(
        message: impl Into<String>,
        content_base64: impl Into<String>,
        expected_sha: impl Into<String>,
    ) -> Self {
        Self {
            message: message.into(),
            content_base64: content_base64.into(),
            expected_sha: expected_sha.into(),
        }
    }
}

/// The five remote operations the session pipeline performs. Each call is a
/// single attempt; callers re-invoke explicitly on failure.
#[async_trait]
pub trait RepoHost: Send + Sync {
    /// Credential check. A rejected credential is `Auth` with the raw body.
    async fn fetch_user(&self) -> Result<Identity, HostError>;

    /// Optional quota query; callers treat failure as non-fatal.
    async fn fetch_rate_limit(&self) -> Result<RateLimit, HostError>;

    async fn fetch_repo(&self, owner: &str, name: &str) -> Result<RepoInfo, HostError>;

    async fn fetch_file(
        &self,
        owner: &str,
        name: &str,
        path: &str,
    ) -> Result<FileContent, HostError>;

    /// Write content back under the optimistic-concurrency precondition.
    /// Returns the new revision hash; a stale `expected_sha` is `Conflict`
    /// and must leave the stored content unchanged.
    async fn update_file(
        &self,
        owner: &str,
        name: &str,
        path: &str,
        update: &FileUpdate,
    ) -> Result<String, HostError>;
}

// Sessions share nothing, but independent sessions may point at the same
// store; `Arc<H>` lets them without a second host value.
#[async_trait]
impl<H: RepoHost + ?Sized> RepoHost for Arc<H> {
    async fn fetch_user(&self) -> Result<Identity, HostError> {
        (**self).fetch_user().await
    }

    async fn fetch_rate_limit(&self) -> Result<RateLimit, HostError> {
        (**self).fetch_rate_limit().await
    }

    async fn fetch_repo(&self, owner: &str, name: &str) -> Result<RepoInfo, HostError> {
        (**self).fetch_repo(owner, name).await
    }

    async fn fetch_file(
        &self,
        owner: &str,
        name: &str,
        path: &str,
    ) -> Result<FileContent, HostError> {
        (**self).fetch_file(owner, name, path).await
    }

    async fn update_file(
        &self,
        owner: &str,
        name: &str,
        path: &str,
        update: &FileUpdate,
    ) -> Result<String, HostError> {
        (**self).update_file(owner, name, path, update).await
    }
}
