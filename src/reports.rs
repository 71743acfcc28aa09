//! Typed records for each pipeline step, decoupled from the wire payloads.

use serde::{Deserialize, Serialize};

/// Identity attached to a validated credential.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub id: u64,
    pub login: String,
    pub name: Option<String>,
}

/// Core-quota snapshot, observed passively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateLimit {
    pub limit: u64,
    pub remaining: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoInfo {
    pub id: u64,
    pub default_branch: String,
}

/// Raw file content as fetched: still transfer-encoded, plus the revision
/// hash every later write must name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileContent {
    pub content: String,
    pub sha: String,
}

/// Outcome of a credential check. An invalid credential is an outcome, not
/// an error; the raw rejection body rides in `error` for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialReport {
    pub valid: bool,
    pub identity: Option<Identity>,
    pub rate_limit: Option<RateLimit>,
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoReport {
    pub exists: bool,
    pub repo: Option<RepoInfo>,
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileReport {
    pub exists: bool,
    pub content_hash: Option<String>,
    /// Whether decoding produced rows to edit.
    pub editable: bool,
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitOutcome {
    pub new_hash: String,
}
