//! Remote-file session manager for repository-hosted CSV files.
//!
//! The pipeline is a strict four-stage state machine: validate a personal
//! access token, resolve a repository, load a file, then edit and commit
//! rows back under the file's content hash. Every remote failure is a
//! reported outcome or a typed error, never a crash, and the session stays
//! at its last successful stage.
//!
//! [`Session`] drives the pipeline over any [`RepoHost`]; [`GithubHost`]
//! backs it with the GitHub REST API and [`MemoryHost`] backs it with an
//! in-memory store for tests and offline use.

pub mod config;
pub mod error;
pub mod host;
pub mod hosts;
pub mod reports;
pub mod session;

pub use config::EnvConfig;
pub use error::SessionError;
pub use host::{FileUpdate, HostError, RepoHost};
pub use hosts::{GithubHost, MemoryHost};
pub use reports::{
    CommitOutcome, CredentialReport, FileContent, FileReport, Identity, RateLimit, RepoInfo,
    RepoReport,
};
pub use session::{Session, SessionState, DEFAULT_COMMIT_MESSAGE};
