use github_api::url::{
    contents_url, normalize_base_url, rate_limit_url, repo_url, user_url, DEFAULT_GITHUB_BASE_URL,
};

#[test]
fn normalization_falls_back_to_default_base() {
    assert_eq!(normalize_base_url(""), DEFAULT_GITHUB_BASE_URL);
    assert_eq!(normalize_base_url("   "), DEFAULT_GITHUB_BASE_URL);
}

#[test]
fn normalization_trims_trailing_slashes() {
    assert_eq!(
        normalize_base_url("https://github.example.com/api/v3/"),
        "https://github.example.com/api/v3"
    );
}

#[test]
fn endpoint_urls_cover_the_session_pipeline() {
    assert_eq!(user_url(""), "https://api.github.com/user");
    assert_eq!(rate_limit_url(""), "https://api.github.com/rate_limit");
    assert_eq!(
        repo_url("", "acme", "widgets"),
        "https://api.github.com/repos/acme/widgets"
    );
    assert_eq!(
        contents_url("", "acme", "widgets", "data.csv"),
        "https://api.github.com/repos/acme/widgets/contents/data.csv"
    );
}

#[test]
fn contents_url_keeps_nested_paths() {
    assert_eq!(
        contents_url("", "acme", "widgets", "reports/q3/data.csv"),
        "https://api.github.com/repos/acme/widgets/contents/reports/q3/data.csv"
    );
    assert_eq!(
        contents_url("", "acme", "widgets", "/data.csv"),
        "https://api.github.com/repos/acme/widgets/contents/data.csv"
    );
}
