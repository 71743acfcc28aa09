use std::fmt;

use reqwest::StatusCode;
use serde_json::Error as JsonError;

#[derive(Debug)]
pub enum GithubApiError {
    MissingToken,
    InvalidHeader(String),
    Request(reqwest::Error),
    /// Non-success response; the body is carried verbatim for display.
    Status(StatusCode, String),
    Serde(JsonError),
}

impl fmt::Display for GithubApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingToken => write!(f, "access token is required"),
            Self::InvalidHeader(message) => write!(f, "invalid header: {message}"),
            Self::Request(error) => write!(f, "request error: {error}"),
            Self::Status(status, body) => {
                if body.trim().is_empty() {
                    write!(
                        f,
                        "HTTP {status} {}",
                        status.canonical_reason().unwrap_or("request failed")
                    )
                } else {
                    write!(f, "HTTP {status} {body}")
                }
            }
            Self::Serde(error) => write!(f, "unexpected response shape: {error}"),
        }
    }
}

impl std::error::Error for GithubApiError {}

impl From<reqwest::Error> for GithubApiError {
    fn from(error: reqwest::Error) -> Self {
        Self::Request(error)
    }
}

impl From<JsonError> for GithubApiError {
    fn from(error: JsonError) -> Self {
        Self::Serde(error)
    }
}
