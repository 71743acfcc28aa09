use std::io::Read;

use github_api::{GithubApiClient, GithubApiConfig, GithubApiError};
use reqwest::StatusCode;
use tiny_http::{Method, Response, Server};

type BoxedResponse = Response<std::io::Cursor<Vec<u8>>>;

fn spawn_server(
    mut handler: impl FnMut(&Method, &str, &str) -> (u16, String) + Send + 'static,
) -> String {
    let server = Server::http("127.0.0.1:0").expect("bind test server");
    let addr = server.server_addr().to_ip().expect("ip listener");

    std::thread::spawn(move || {
        for mut request in server.incoming_requests() {
            let mut body = String::new();
            let _ = request.as_reader().read_to_string(&mut body);
            let (status, payload) = handler(request.method(), request.url(), &body);
            let response: BoxedResponse = Response::from_string(payload).with_status_code(status);
            let _ = request.respond(response);
        }
    });

    format!("http://{addr}")
}

fn client(base: &str) -> GithubApiClient {
    GithubApiClient::new(GithubApiConfig::new("s3cret").with_base_url(base)).expect("client")
}

#[tokio::test]
async fn fetch_user_parses_identity() {
    let base = spawn_server(|_, url, _| match url {
        "/user" => (
            200,
            r#"{"login":"octocat","id":583231,"name":"The Octocat"}"#.to_string(),
        ),
        _ => (404, r#"{"message":"Not Found"}"#.to_string()),
    });

    let user = client(&base).fetch_user().await.expect("user");
    assert_eq!(user.login, "octocat");
    assert_eq!(user.name.as_deref(), Some("The Octocat"));
}

#[tokio::test]
async fn fetch_user_carries_the_error_body_verbatim() {
    let base = spawn_server(|_, _, _| {
        (
            401,
            r#"{"message":"Bad credentials","documentation_url":"https://docs.github.com/rest"}"#
                .to_string(),
        )
    });

    let error = client(&base).fetch_user().await.expect_err("unauthorized");
    match error {
        GithubApiError::Status(status, body) => {
            assert_eq!(status, StatusCode::UNAUTHORIZED);
            assert!(body.contains("Bad credentials"));
        }
        other => panic!("expected status error, got {other}"),
    }
}

#[tokio::test]
async fn fetch_rate_limit_reads_core_quota() {
    let base = spawn_server(|_, url, _| match url {
        "/rate_limit" => (
            200,
            r#"{"resources":{"core":{"limit":5000,"remaining":4999}}}"#.to_string(),
        ),
        _ => (404, r#"{"message":"Not Found"}"#.to_string()),
    });

    let rate = client(&base).fetch_rate_limit().await.expect("rate limit");
    assert_eq!(rate.resources.core.limit, 5000);
    assert_eq!(rate.resources.core.remaining, 4999);
}

#[tokio::test]
async fn fetch_contents_returns_content_and_hash() {
    let base = spawn_server(|_, url, _| match url {
        "/repos/acme/widgets/contents/data.csv" => (
            200,
            r#"{"type":"file","encoding":"base64","size":8,"content":"YSxiCjEs\nMgo=\n","sha":"h0"}"#
                .to_string(),
        ),
        _ => (404, r#"{"message":"Not Found"}"#.to_string()),
    });

    let contents = client(&base)
        .fetch_contents("acme", "widgets", "data.csv")
        .await
        .expect("contents");
    assert_eq!(contents.sha, "h0");
    assert_eq!(contents.kind, "file");
}

#[tokio::test]
async fn put_contents_enforces_the_expected_hash() {
    // The fake store holds one revision and rejects writes naming any other.
    let mut current = String::from("h0");
    let mut revision = 0_u64;
    let base = spawn_server(move |method, url, body| {
        if *method != Method::Put || url != "/repos/acme/widgets/contents/data.csv" {
            return (404, r#"{"message":"Not Found"}"#.to_string());
        }
        let update: serde_json::Value = match serde_json::from_str(body) {
            Ok(value) => value,
            Err(_) => return (400, r#"{"message":"Invalid request"}"#.to_string()),
        };
        if update["sha"] != serde_json::Value::String(current.clone()) {
            return (
                409,
                r#"{"message":"data.csv does not match the expected sha"}"#.to_string(),
            );
        }
        revision += 1;
        current = format!("h{revision}");
        (
            200,
            format!(r#"{{"content":{{"sha":"{current}"}},"commit":{{"sha":"c{revision}"}}}}"#),
        )
    });

    let client = client(&base);
    let update = github_api::ContentsUpdate::new("Update CSV file", "YSxiCjEsMgozLDQK", "h0");
    let accepted = client
        .put_contents("acme", "widgets", "data.csv", &update)
        .await
        .expect("write accepted");
    assert_eq!(accepted.content.sha, "h1");

    let stale = github_api::ContentsUpdate::new("Update CSV file", "YSxiCjUsNgo=", "h0");
    let error = client
        .put_contents("acme", "widgets", "data.csv", &stale)
        .await
        .expect_err("stale hash rejected");
    match error {
        GithubApiError::Status(status, body) => {
            assert_eq!(status, StatusCode::CONFLICT);
            assert!(body.contains("does not match"));
        }
        other => panic!("expected status error, got {other}"),
    }
}

#[tokio::test]
async fn malformed_payload_surfaces_as_shape_error() {
    let base = spawn_server(|_, _, _| (200, "not json at all".to_string()));

    let error = client(&base).fetch_user().await.expect_err("bad payload");
    assert!(matches!(error, GithubApiError::Serde(_)));
}
