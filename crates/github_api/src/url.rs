/// Default base URL for GitHub REST requests.
pub const DEFAULT_GITHUB_BASE_URL: &str = "https://api.github.com";

/// Normalize a configured base URL.
///
/// Normalization rules:
/// 1) empty or whitespace-only input falls back to the default base URL
/// 2) surrounding whitespace and trailing slashes are trimmed
pub fn normalize_base_url(input: &str) -> String {
    let base = if input.trim().is_empty() {
        DEFAULT_GITHUB_BASE_URL
    } else {
        input.trim()
    };
    base.trim_end_matches('/').to_string()
}

pub fn user_url(base: &str) -> String {
    format!("{}/user", normalize_base_url(base))
}

pub fn rate_limit_url(base: &str) -> String {
    format!("{}/rate_limit", normalize_base_url(base))
}

pub fn repo_url(base: &str, owner: &str, name: &str) -> String {
    format!("{}/repos/{owner}/{name}", normalize_base_url(base))
}

/// Single-file contents endpoint. The path is carried as given, so nested
/// paths keep their `/` separators.
pub fn contents_url(base: &str, owner: &str, name: &str, path: &str) -> String {
    let path = path.trim_start_matches('/');
    format!(
        "{}/repos/{owner}/{name}/contents/{path}",
        normalize_base_url(base)
    )
}
