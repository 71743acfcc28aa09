use serde::{Deserialize, Serialize};

/// Identity record returned by the credential-check endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UserResponse {
    pub id: u64,
    pub login: String,
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct RateLimitResponse {
    pub resources: RateLimitResources,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct RateLimitResources {
    pub core: RateLimitWindow,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct RateLimitWindow {
    pub limit: u64,
    pub remaining: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RepoResponse {
    pub id: u64,
    pub default_branch: String,
    #[serde(default)]
    pub private: bool,
}

/// Single-file contents record. `content` arrives base64-encoded, wrapped
/// at a fixed column width.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ContentsResponse {
    pub content: String,
    pub sha: String,
    #[serde(default)]
    pub size: u64,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub encoding: Option<String>,
}

/// Update request body for the contents endpoint. `sha` is the
/// optimistic-concurrency precondition; the store rejects the write when it
/// no longer names the current revision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContentsUpdate {
    pub message: String,
    pub content: String,
    pub sha: String,
}

impl ContentsUpdate {
    pub fn new(
        message: impl Into<String>,
        content: impl Into<String>,
        sha: impl Into<String>,
    ) -> Self {
        Self {
            message: message.into(),
            content: content.into(),
            sha: sha.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UpdateResponse {
    pub content: UpdatedContent,
    #[serde(default)]
    pub commit: Option<CommitInfo>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UpdatedContent {
    pub sha: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CommitInfo {
    pub sha: String,
}
