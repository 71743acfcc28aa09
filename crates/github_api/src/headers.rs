use std::collections::BTreeMap;

use crate::config::GithubApiConfig;
use crate::error::GithubApiError;

pub const HEADER_AUTHORIZATION: &str = "authorization";
pub const HEADER_ACCEPT: &str = "accept";
pub const HEADER_USER_AGENT: &str = "user-agent";

/// Media type the REST v3 endpoints expect.
pub const ACCEPT_GITHUB_JSON: &str = "application/vnd.github.v3+json";

/// Build a deterministic header map for GitHub REST requests.
pub fn build_headers(
    config: &GithubApiConfig,
) -> Result<BTreeMap<String, String>, GithubApiError> {
    if config.token.trim().is_empty() {
        return Err(GithubApiError::MissingToken);
    }

    let mut headers = BTreeMap::new();
    headers.insert(
        HEADER_AUTHORIZATION.to_owned(),
        format!("token {}", config.token.trim()),
    );
    headers.insert(HEADER_ACCEPT.to_owned(), ACCEPT_GITHUB_JSON.to_owned());

    let user_agent = match config.user_agent.as_deref() {
        Some(explicit) if !explicit.trim().is_empty() => explicit.trim().to_owned(),
        _ => default_user_agent(),
    };
    headers.insert(HEADER_USER_AGENT.to_owned(), user_agent);

    for (key, value) in &config.extra_headers {
        headers.insert(key.trim().to_ascii_lowercase(), value.trim().to_owned());
    }

    Ok(headers)
}

// The API rejects requests without a User-Agent outright.
fn default_user_agent() -> String {
    format!("csv-session/{}", env!("CARGO_PKG_VERSION"))
}
