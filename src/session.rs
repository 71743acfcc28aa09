//! The session pipeline: a four-stage state machine over a [`RepoHost`].

use std::fmt;

use csv_table::Table;
use tracing::debug;

use crate::error::SessionError;
use crate::host::{FileUpdate, HostError, RepoHost};
use crate::reports::{
    CommitOutcome, CredentialReport, FileReport, Identity, RateLimit, RepoInfo, RepoReport,
};

/// Commit message used when the caller supplies none.
pub const DEFAULT_COMMIT_MESSAGE: &str = "Update CSV file";

/// Pipeline stage. Commands move the session strictly forward; a failed
/// command leaves the session at its last successful stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Unauthenticated,
    Authenticated,
    RepoResolved,
    FileLoaded,
}

impl SessionState {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unauthenticated => "unauthenticated",
            Self::Authenticated => "authenticated",
            Self::RepoResolved => "repo-resolved",
            Self::FileLoaded => "file-loaded",
        }
    }
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct RepoRef {
    owner: String,
    name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct LoadedFile {
    path: String,
    content_hash: Option<String>,
    text: String,
    table: Option<Table>,
}

/// One interactive run against a single host. Sessions share nothing with
/// each other; the credential lives inside the host's transport config and
/// is discarded with the session.
#[derive(Debug)]
pub struct Session<H: RepoHost> {
    host: H,
    state: SessionState,
    auth: Option<CredentialReport>,
    repo_ref: Option<RepoRef>,
    repo: Option<RepoInfo>,
    file: Option<LoadedFile>,
}

impl<H: RepoHost> Session<H> {
    pub fn new(host: H) -> Self {
        Self {
            host,
            state: SessionState::Unauthenticated,
            auth: None,
            repo_ref: None,
            repo: None,
            file: None,
        }
    }

    #[must_use]
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Whether the loaded file decoded into rows that can be edited.
    #[must_use]
    pub fn is_editable(&self) -> bool {
        self.state == SessionState::FileLoaded
            && self
                .file
                .as_ref()
                .is_some_and(|file| file.table.is_some())
    }

    #[must_use]
    pub fn identity(&self) -> Option<&Identity> {
        self.auth.as_ref()?.identity.as_ref()
    }

    #[must_use]
    pub fn rate_limit(&self) -> Option<RateLimit> {
        self.auth.as_ref()?.rate_limit
    }

    #[must_use]
    pub fn repo(&self) -> Option<&RepoInfo> {
        self.repo.as_ref()
    }

    #[must_use]
    pub fn file_path(&self) -> Option<&str> {
        self.file.as_ref().map(|file| file.path.as_str())
    }

    #[must_use]
    pub fn file_text(&self) -> Option<&str> {
        self.file.as_ref().map(|file| file.text.as_str())
    }

    #[must_use]
    pub fn content_hash(&self) -> Option<&str> {
        self.file.as_ref()?.content_hash.as_deref()
    }

    #[must_use]
    pub fn table(&self) -> Option<&Table> {
        self.file.as_ref()?.table.as_ref()
    }

    /// Check the credential against the store. A rejected credential is
    /// reported, not raised, and the session stays unauthenticated; the
    /// quota query afterwards is best-effort.
    pub async fn authenticate(&mut self) -> Result<CredentialReport, SessionError> {
        self.guard("authenticate", &[SessionState::Unauthenticated])?;

        match self.host.fetch_user().await {
            Ok(identity) => {
                let rate_limit = self.host.fetch_rate_limit().await.ok();
                let report = CredentialReport {
                    valid: true,
                    identity: Some(identity),
                    rate_limit,
                    error: None,
                };
                self.auth = Some(report.clone());
                self.state = SessionState::Authenticated;
                debug!(state = %self.state, "session authenticated");
                Ok(report)
            }
            Err(HostError::Auth(message)) => Ok(CredentialReport {
                valid: false,
                identity: None,
                rate_limit: None,
                error: Some(message),
            }),
            Err(other) => Err(other.into()),
        }
    }

    /// Resolve the repository the file lives in. Changing repositories
    /// later requires `reset`.
    pub async fn resolve_repo(
        &mut self,
        owner: &str,
        name: &str,
    ) -> Result<RepoReport, SessionError> {
        self.guard("resolve repository", &[SessionState::Authenticated])?;

        match self.host.fetch_repo(owner, name).await {
            Ok(repo) => {
                self.repo_ref = Some(RepoRef {
                    owner: owner.to_string(),
                    name: name.to_string(),
                });
                self.repo = Some(repo.clone());
                self.state = SessionState::RepoResolved;
                debug!(state = %self.state, owner, name, "repository resolved");
                Ok(RepoReport {
                    exists: true,
                    repo: Some(repo),
                    error: None,
                })
            }
            Err(HostError::NotFound(message)) => Ok(RepoReport {
                exists: false,
                repo: None,
                error: Some(message),
            }),
            Err(other) => Err(other.into()),
        }
    }

    /// Fetch and decode a file within the resolved repository. Allowed
    /// again from `FileLoaded` to reload or switch files.
    pub async fn load_file(&mut self, path: &str) -> Result<FileReport, SessionError> {
        self.guard(
            "load file",
            &[SessionState::RepoResolved, SessionState::FileLoaded],
        )?;
        let Some(repo_ref) = self.repo_ref.clone() else {
            return Err(SessionError::invalid_state("load file", self.state));
        };

        match self
            .host
            .fetch_file(&repo_ref.owner, &repo_ref.name, path)
            .await
        {
            Ok(content) => {
                let decoded = csv_table::decode(&content.content, path)?;
                let editable = decoded.table.is_some();
                let content_hash = if content.sha.trim().is_empty() {
                    None
                } else {
                    Some(content.sha)
                };
                let report = FileReport {
                    exists: true,
                    content_hash: content_hash.clone(),
                    editable,
                    error: None,
                };
                self.file = Some(LoadedFile {
                    path: path.to_string(),
                    content_hash,
                    text: decoded.text,
                    table: decoded.table,
                });
                self.state = SessionState::FileLoaded;
                debug!(state = %self.state, path, editable, "file loaded");
                Ok(report)
            }
            Err(HostError::NotFound(message)) => Ok(FileReport {
                exists: false,
                content_hash: None,
                editable: false,
                error: Some(message),
            }),
            Err(other) => Err(other.into()),
        }
    }

    /// Append rows to the loaded table. Nothing is appended unless every
    /// row matches the header width.
    pub fn append_rows(&mut self, rows: Vec<Vec<String>>) -> Result<(), SessionError> {
        let table = self.editable_table_mut("append rows")?;
        table.append_rows(rows)?;
        Ok(())
    }

    /// Replace the loaded rows wholesale, keeping the original header.
    pub fn replace_rows(&mut self, rows: Vec<Vec<String>>) -> Result<(), SessionError> {
        let table = self.editable_table_mut("replace rows")?;
        table.replace_rows(rows)?;
        Ok(())
    }

    /// Write the edited rows back under the held content hash. On success
    /// the returned hash replaces the held one, so a further commit needs
    /// no reload; on conflict nothing changes and no retry is attempted.
    pub async fn commit(&mut self, message: Option<&str>) -> Result<CommitOutcome, SessionError> {
        self.guard("commit", &[SessionState::FileLoaded])?;
        let Some(file) = self.file.as_ref() else {
            return Err(SessionError::invalid_state("commit", self.state));
        };
        let Some(table) = file.table.as_ref() else {
            return Err(SessionError::NotEditable);
        };
        let Some(expected_sha) = file.content_hash.clone() else {
            return Err(SessionError::MissingContentHash);
        };
        let Some(repo_ref) = self.repo_ref.clone() else {
            return Err(SessionError::invalid_state("commit", self.state));
        };

        let update = FileUpdate::new(
            message.unwrap_or(DEFAULT_COMMIT_MESSAGE),
            csv_table::encode(table),
            expected_sha,
        );
        // Text mirrors what the store holds once the write is accepted.
        let committed_text = csv_table::write_csv(table);
        let path = file.path.clone();

        let new_hash = self
            .host
            .update_file(&repo_ref.owner, &repo_ref.name, &path, &update)
            .await?;

        if let Some(file) = self.file.as_mut() {
            file.content_hash = Some(new_hash.clone());
            file.text = committed_text;
        }
        debug!(%path, %new_hash, "commit accepted");
        Ok(CommitOutcome { new_hash })
    }

    /// Discard everything and return to the first stage.
    pub fn reset(&mut self) {
        self.state = SessionState::Unauthenticated;
        self.auth = None;
        self.repo_ref = None;
        self.repo = None;
        self.file = None;
        debug!("session reset");
    }

    fn guard(
        &self,
        operation: &'static str,
        allowed: &[SessionState],
    ) -> Result<(), SessionError> {
        if allowed.contains(&self.state) {
            Ok(())
        } else {
            Err(SessionError::invalid_state(operation, self.state))
        }
    }

    fn editable_table_mut(
        &mut self,
        operation: &'static str,
    ) -> Result<&mut Table, SessionError> {
        self.guard(operation, &[SessionState::FileLoaded])?;
        self.file
            .as_mut()
            .and_then(|file| file.table.as_mut())
            .ok_or(SessionError::NotEditable)
    }
}
