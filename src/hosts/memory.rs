//! In-memory host double.
//!
//! Serves the whole pipeline without a network: configurable identity and
//! repositories, a file store with per-file revision hashes, and the same
//! optimistic-concurrency rejection the remote store applies. Content is
//! served base64-encoded and line-wrapped the way the wire delivers it.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use base64::{engine::general_purpose, Engine as _};

use crate::host::{FileUpdate, HostError, RepoHost};
use crate::reports::{FileContent, Identity, RateLimit, RepoInfo};

const TRANSFER_WRAP_WIDTH: usize = 60;

#[derive(Debug, Default)]
pub struct MemoryHost {
    identity: Option<Identity>,
    rate_limit: Option<RateLimit>,
    repos: HashMap<(String, String), RepoInfo>,
    files: Mutex<HashMap<(String, String, String), StoredFile>>,
}

#[derive(Debug, Clone)]
struct StoredFile {
    text: String,
    revision: u64,
}

impl StoredFile {
    fn sha(&self) -> String {
        format!("h{}", self.revision)
    }
}

impl MemoryHost {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_identity(mut self, identity: Identity) -> Self {
        self.identity = Some(identity);
        self
    }

    #[must_use]
    pub fn with_rate_limit(mut self, limit: u64, remaining: u64) -> Self {
        self.rate_limit = Some(RateLimit { limit, remaining });
        self
    }

    #[must_use]
    pub fn with_repo(mut self, owner: &str, name: &str, repo: RepoInfo) -> Self {
        self.repos
            .insert((owner.to_string(), name.to_string()), repo);
        self
    }

    /// Seed a file at revision zero (hash `h0`).
    #[must_use]
    pub fn with_file(self, owner: &str, name: &str, path: &str, text: &str) -> Self {
        if let Ok(mut files) = self.files.lock() {
            files.insert(
                (owner.to_string(), name.to_string(), path.to_string()),
                StoredFile {
                    text: text.to_string(),
                    revision: 0,
                },
            );
        }
        self
    }

    /// Current stored text, for inspecting what a write did (or did not do).
    pub fn file_text(&self, owner: &str, name: &str, path: &str) -> Option<String> {
        let files = self.files.lock().ok()?;
        files
            .get(&(owner.to_string(), name.to_string(), path.to_string()))
            .map(|file| file.text.clone())
    }

    pub fn file_sha(&self, owner: &str, name: &str, path: &str) -> Option<String> {
        let files = self.files.lock().ok()?;
        files
            .get(&(owner.to_string(), name.to_string(), path.to_string()))
            .map(StoredFile::sha)
    }
}

#[async_trait]
impl RepoHost for MemoryHost {
    async fn fetch_user(&self) -> Result<Identity, HostError> {
        self.identity
            .clone()
            .ok_or_else(|| HostError::Auth("Bad credentials".to_string()))
    }

    async fn fetch_rate_limit(&self) -> Result<RateLimit, HostError> {
        self.rate_limit
            .ok_or_else(|| HostError::Transport("rate limit not configured".to_string()))
    }

    async fn fetch_repo(&self, owner: &str, name: &str) -> Result<RepoInfo, HostError> {
        self.repos
            .get(&(owner.to_string(), name.to_string()))
            .cloned()
            .ok_or_else(|| HostError::NotFound(format!("repository {owner}/{name} not found")))
    }

    async fn fetch_file(
        &self,
        owner: &str,
        name: &str,
        path: &str,
    ) -> Result<FileContent, HostError> {
        let files = lock_store(&self.files)?;
        let file = files
            .get(&(owner.to_string(), name.to_string(), path.to_string()))
            .ok_or_else(|| HostError::NotFound(format!("{path} not found in {owner}/{name}")))?;
        Ok(FileContent {
            content: wrap_transfer(&general_purpose::STANDARD.encode(&file.text)),
            sha: file.sha(),
        })
    }

    async fn update_file(
        &self,
        owner: &str,
        name: &str,
        path: &str,
        update: &FileUpdate,
    ) -> Result<String, HostError> {
        let mut files = lock_store(&self.files)?;
        let file = files
            .get_mut(&(owner.to_string(), name.to_string(), path.to_string()))
            .ok_or_else(|| HostError::NotFound(format!("{path} not found in {owner}/{name}")))?;

        if update.expected_sha != file.sha() {
            return Err(HostError::Conflict(format!(
                "{path} does not match {}",
                update.expected_sha
            )));
        }

        let bytes = general_purpose::STANDARD
            .decode(update.content_base64.as_bytes())
            .map_err(|error| HostError::Payload(error.to_string()))?;
        let text =
            String::from_utf8(bytes).map_err(|error| HostError::Payload(error.to_string()))?;

        file.text = text;
        file.revision += 1;
        Ok(file.sha())
    }
}

fn lock_store<T>(store: &Mutex<T>) -> Result<std::sync::MutexGuard<'_, T>, HostError> {
    store
        .lock()
        .map_err(|_| HostError::Transport("file store lock poisoned".to_string()))
}

fn wrap_transfer(encoded: &str) -> String {
    let mut wrapped = String::with_capacity(encoded.len() + encoded.len() / TRANSFER_WRAP_WIDTH + 1);
    for (index, ch) in encoded.chars().enumerate() {
        if index > 0 && index % TRANSFER_WRAP_WIDTH == 0 {
            wrapped.push('\n');
        }
        wrapped.push(ch);
    }
    wrapped.push('\n');
    wrapped
}
