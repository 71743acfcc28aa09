//! Environment configuration.

use std::env;

/// Defaults for interactive entry, sourced from the process environment.
///
/// Every field is optional; a missing or blank variable simply means the
/// caller must supply the value directly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvConfig {
    pub token: Option<String>,
    pub repo_owner: Option<String>,
    pub repo_name: Option<String>,
    pub file_path: Option<String>,
    pub api_base_url: Option<String>,
}

impl EnvConfig {
    pub fn from_env() -> Self {
        Self {
            token: env_string_opt("GITHUB_TOKEN"),
            repo_owner: env_string_opt("REPO_OWNER"),
            repo_name: env_string_opt("REPO_NAME"),
            file_path: env_string_opt("FILE_PATH"),
            api_base_url: env_string_opt("GITHUB_API_URL"),
        }
    }
}

fn env_string_opt(key: &str) -> Option<String> {
    env::var(key).ok().and_then(|value| {
        if value.trim().is_empty() {
            None
        } else {
            Some(value)
        }
    })
}
