use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::config::GithubApiConfig;
use crate::error::GithubApiError;
use crate::headers::build_headers;
use crate::payload::{
    ContentsResponse, ContentsUpdate, RateLimitResponse, RepoResponse, UpdateResponse,
    UserResponse,
};
use crate::url::{contents_url, rate_limit_url, repo_url, user_url};

#[derive(Debug)]
pub struct GithubApiClient {
    http: Client,
    config: GithubApiConfig,
}

impl GithubApiClient {
    pub fn new(config: GithubApiConfig) -> Result<Self, GithubApiError> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().map_err(GithubApiError::from)?;
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &GithubApiConfig {
        &self.config
    }

    pub fn request_headers(&self) -> Result<HeaderMap, GithubApiError> {
        let headers = build_headers(&self.config)?;
        let mut out = HeaderMap::new();
        for (key, value) in headers {
            out.insert(
                HeaderName::from_bytes(key.as_bytes()).map_err(|_| {
                    GithubApiError::InvalidHeader(format!("invalid header key: {key}"))
                })?,
                HeaderValue::from_str(&value).map_err(|_| {
                    GithubApiError::InvalidHeader(format!("invalid header value for {key}"))
                })?,
            );
        }
        Ok(out)
    }

    /// `GET /user` — credential check.
    pub async fn fetch_user(&self) -> Result<UserResponse, GithubApiError> {
        self.get_json(user_url(&self.config.base_url)).await
    }

    /// `GET /rate_limit` — quota query.
    pub async fn fetch_rate_limit(&self) -> Result<RateLimitResponse, GithubApiError> {
        self.get_json(rate_limit_url(&self.config.base_url)).await
    }

    /// `GET /repos/{owner}/{name}` — repository resolution.
    pub async fn fetch_repo(
        &self,
        owner: &str,
        name: &str,
    ) -> Result<RepoResponse, GithubApiError> {
        self.get_json(repo_url(&self.config.base_url, owner, name))
            .await
    }

    /// `GET /repos/{owner}/{name}/contents/{path}` — file resolution.
    pub async fn fetch_contents(
        &self,
        owner: &str,
        name: &str,
        path: &str,
    ) -> Result<ContentsResponse, GithubApiError> {
        self.get_json(contents_url(&self.config.base_url, owner, name, path))
            .await
    }

    /// `PUT /repos/{owner}/{name}/contents/{path}` — write-back carrying the
    /// expected content hash.
    pub async fn put_contents(
        &self,
        owner: &str,
        name: &str,
        path: &str,
        update: &ContentsUpdate,
    ) -> Result<UpdateResponse, GithubApiError> {
        let url = contents_url(&self.config.base_url, owner, name, path);
        debug!(%url, "PUT contents");
        let headers = self.request_headers()?;
        let response = self
            .http
            .put(&url)
            .headers(headers)
            .json(update)
            .send()
            .await
            .map_err(GithubApiError::from)?;
        read_json(response).await
    }

    async fn get_json<T: DeserializeOwned>(&self, url: String) -> Result<T, GithubApiError> {
        debug!(%url, "GET");
        let headers = self.request_headers()?;
        let response = self
            .http
            .get(&url)
            .headers(headers)
            .send()
            .await
            .map_err(GithubApiError::from)?;
        read_json(response).await
    }
}

// One attempt per invocation: success deserializes into the typed record,
// anything else carries the body verbatim.
async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, GithubApiError> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_else(|_| {
            status
                .canonical_reason()
                .unwrap_or("request failed")
                .to_string()
        });
        return Err(GithubApiError::Status(status, body));
    }

    let body = response.text().await.map_err(GithubApiError::from)?;
    serde_json::from_str::<T>(&body).map_err(GithubApiError::from)
}
