//! GitHub-backed host: wraps the transport client and classifies its
//! failures into the kinds the session layer acts on.

use async_trait::async_trait;
use github_api::{ContentsUpdate, GithubApiClient, GithubApiConfig, GithubApiError};

use crate::host::{FileUpdate, HostError, RepoHost};
use crate::reports::{FileContent, Identity, RateLimit, RepoInfo};

#[derive(Debug)]
pub struct GithubHost {
    client: GithubApiClient,
}

impl GithubHost {
    pub fn new(config: GithubApiConfig) -> Result<Self, HostError> {
        let client = GithubApiClient::new(config).map_err(transport_error)?;
        Ok(Self { client })
    }

    pub fn from_token(token: impl Into<String>) -> Result<Self, HostError> {
        Self::new(GithubApiConfig::new(token))
    }

    pub fn client(&self) -> &GithubApiClient {
        &self.client
    }
}

#[async_trait]
impl RepoHost for GithubHost {
    async fn fetch_user(&self) -> Result<Identity, HostError> {
        match self.client.fetch_user().await {
            Ok(user) => Ok(Identity {
                id: user.id,
                login: user.login,
                name: user.name,
            }),
            // Any rejection of /user means the credential does not work.
            Err(GithubApiError::Status(_, body)) => Err(HostError::Auth(body)),
            Err(other) => Err(transport_error(other)),
        }
    }

    async fn fetch_rate_limit(&self) -> Result<RateLimit, HostError> {
        match self.client.fetch_rate_limit().await {
            Ok(rate) => Ok(RateLimit {
                limit: rate.resources.core.limit,
                remaining: rate.resources.core.remaining,
            }),
            Err(GithubApiError::Status(_, body)) => Err(HostError::Auth(body)),
            Err(other) => Err(transport_error(other)),
        }
    }

    async fn fetch_repo(&self, owner: &str, name: &str) -> Result<RepoInfo, HostError> {
        match self.client.fetch_repo(owner, name).await {
            Ok(repo) => Ok(RepoInfo {
                id: repo.id,
                default_branch: repo.default_branch,
            }),
            // The resolver does not distinguish absent from inaccessible.
            Err(GithubApiError::Status(_, body)) => Err(HostError::NotFound(body)),
            Err(other) => Err(transport_error(other)),
        }
    }

    async fn fetch_file(
        &self,
        owner: &str,
        name: &str,
        path: &str,
    ) -> Result<FileContent, HostError> {
        match self.client.fetch_contents(owner, name, path).await {
            Ok(contents) => Ok(FileContent {
                content: contents.content,
                sha: contents.sha,
            }),
            Err(GithubApiError::Status(_, body)) => Err(HostError::NotFound(body)),
            Err(other) => Err(transport_error(other)),
        }
    }

    async fn update_file(
        &self,
        owner: &str,
        name: &str,
        path: &str,
        update: &FileUpdate,
    ) -> Result<String, HostError> {
        let body = ContentsUpdate::new(
            update.message.clone(),
            update.content_base64.clone(),
            update.expected_sha.clone(),
        );
        match self.client.put_contents(owner, name, path, &body).await {
            Ok(accepted) => Ok(accepted.content.sha),
            // The store enforces the hash precondition; every rejected
            // write surfaces as a conflict with the raw body attached.
            Err(GithubApiError::Status(_, body)) => Err(HostError::Conflict(body)),
            Err(other) => Err(transport_error(other)),
        }
    }
}

fn transport_error(error: GithubApiError) -> HostError {
    match error {
        GithubApiError::MissingToken => HostError::Auth(error.to_string()),
        GithubApiError::Serde(_) => HostError::Payload(error.to_string()),
        GithubApiError::Request(_)
        | GithubApiError::InvalidHeader(_)
        | GithubApiError::Status(..) => HostError::Transport(error.to_string()),
    }
}
