//! Integration tests for the Reddit client against a mock Reddit API

use httpmock::prelude::*;
use persona_domain::traits::ContentSource;
use persona_domain::{extract_username, ContentItem, ContentKind};
use persona_generator::{ContentFetcher, GeneratorConfig};
use persona_reddit::{RedditClient, RedditCredentials, RedditError};

fn comments_of(client: &RedditClient, username: &str, limit: usize) -> (Vec<ContentItem>, Result<(), RedditError>) {
    let mut items = Vec::new();
    let result = client.comments(username, limit, &mut |item| items.push(item));
    (items, result)
}

fn submissions_of(
    client: &RedditClient,
    username: &str,
    limit: usize,
) -> (Vec<ContentItem>, Result<(), RedditError>) {
    let mut items = Vec::new();
    let result = client.submissions(username, limit, &mut |item| items.push(item));
    (items, result)
}

fn connected_client(server: &MockServer) -> RedditClient {
    server.mock(|when, then| {
        when.method(POST)
            .path("/api/v1/access_token")
            .header("user-agent", "persona-test/0.1")
            .body("grant_type=client_credentials");
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{"access_token":"tok-123","token_type":"bearer","expires_in":86400,"scope":"*"}"#);
    });

    let credentials = RedditCredentials::new("id", "secret", "persona-test/0.1");
    let mut client = RedditClient::new(credentials)
        .unwrap()
        .with_endpoints(&server.base_url(), &server.base_url());
    client.connect().unwrap();
    client
}

#[test]
fn test_connect_obtains_token() {
    let server = MockServer::start();
    let client = connected_client(&server);
    assert!(client.is_connected());
}

#[test]
fn test_connect_rejected_credentials() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/api/v1/access_token");
        then.status(401).body(r#"{"message": "Unauthorized", "error": 401}"#);
    });

    let credentials = RedditCredentials::new("id", "wrong", "persona-test/0.1");
    let mut client = RedditClient::new(credentials)
        .unwrap()
        .with_endpoints(&server.base_url(), &server.base_url());

    let result = client.connect();
    assert!(matches!(result, Err(RedditError::AuthError(_))));
    assert!(!client.is_connected());
}

#[test]
fn test_connect_error_body_with_ok_status() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/api/v1/access_token");
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{"error": "invalid_grant"}"#);
    });

    let credentials = RedditCredentials::new("id", "secret", "persona-test/0.1");
    let mut client = RedditClient::new(credentials)
        .unwrap()
        .with_endpoints(&server.base_url(), &server.base_url());

    match client.connect() {
        Err(RedditError::AuthError(msg)) => assert!(msg.contains("invalid_grant")),
        other => panic!("Expected AuthError, got {:?}", other),
    }
}

#[test]
fn test_fetch_comments() {
    let server = MockServer::start();
    let client = connected_client(&server);

    let listing = server.mock(|when, then| {
        when.method(GET)
            .path("/user/kojied/comments")
            .query_param("sort", "new")
            .query_param("limit", "100")
            .header("authorization", "Bearer tok-123");
        then.status(200)
            .header("content-type", "application/json")
            .body(
                r#"{"kind":"Listing","data":{"after":null,"children":[
                    {"kind":"t1","data":{"body":"second","permalink":"/r/a/comments/1/x/c2/","created_utc":1700000200.0}},
                    {"kind":"t1","data":{"body":"first","permalink":"/r/a/comments/1/x/c1/","created_utc":1700000100.0}}
                ]}}"#,
            );
    });

    let (comments, result) = comments_of(&client, "kojied", 100);
    result.unwrap();

    listing.assert();
    assert_eq!(comments.len(), 2);
    assert_eq!(comments[0].kind(), ContentKind::Comment);
    assert_eq!(comments[0].text(), "second");
    assert_eq!(comments[1].source_url(), "https://reddit.com/r/a/comments/1/x/c1/");
}

#[test]
fn test_fetch_submissions() {
    let server = MockServer::start();
    let client = connected_client(&server);

    server.mock(|when, then| {
        when.method(GET)
            .path("/user/kojied/submitted")
            .query_param("limit", "50");
        then.status(200)
            .header("content-type", "application/json")
            .body(
                r#"{"kind":"Listing","data":{"after":null,"children":[
                    {"kind":"t3","data":{"title":"My setup","selftext":"Three monitors","permalink":"/r/battlestations/comments/9/my_setup/","created_utc":1700000300.0}}
                ]}}"#,
            );
    });

    let (submissions, result) = submissions_of(&client, "kojied", 50);
    result.unwrap();
    assert_eq!(submissions.len(), 1);
    assert_eq!(submissions[0].kind(), ContentKind::Submission);
    assert_eq!(submissions[0].text(), "My setup\nThree monitors");
}

#[test]
fn test_fetch_respects_limit_across_pages() {
    let server = MockServer::start();
    let client = connected_client(&server);

    let first_page = server.mock(|when, then| {
        when.method(GET)
            .path("/user/kojied/comments")
            .query_param("limit", "100");
        then.status(200)
            .header("content-type", "application/json")
            .body(
                r#"{"kind":"Listing","data":{"after":"t1_next","children":[
                    {"kind":"t1","data":{"body":"a","permalink":"/a","created_utc":3.0}},
                    {"kind":"t1","data":{"body":"b","permalink":"/b","created_utc":2.0}}
                ]}}"#,
            );
    });
    let second_page = server.mock(|when, then| {
        when.method(GET)
            .path("/user/kojied/comments")
            .query_param("limit", "99")
            .query_param("after", "t1_next");
        then.status(200)
            .header("content-type", "application/json")
            .body(
                r#"{"kind":"Listing","data":{"after":null,"children":[
                    {"kind":"t1","data":{"body":"c","permalink":"/c","created_utc":1.0}}
                ]}}"#,
            );
    });

    let (comments, result) = comments_of(&client, "kojied", 101);
    result.unwrap();

    first_page.assert();
    second_page.assert();
    let texts: Vec<_> = comments.iter().map(|c| c.text()).collect();
    assert_eq!(texts, vec!["a", "b", "c"]);
}

#[test]
fn test_unknown_user() {
    let server = MockServer::start();
    let client = connected_client(&server);

    server.mock(|when, then| {
        when.method(GET).path("/user/nobody_here/comments");
        then.status(404).body(r#"{"message": "Not Found", "error": 404}"#);
    });

    let (comments, result) = comments_of(&client, "nobody_here", 100);
    assert!(comments.is_empty());
    assert!(matches!(result, Err(RedditError::UserNotFound(ref u)) if u == "nobody_here"));
}

#[test]
fn test_server_error() {
    let server = MockServer::start();
    let client = connected_client(&server);

    server.mock(|when, then| {
        when.method(GET).path("/user/kojied/submitted");
        then.status(503).body("upstream unavailable");
    });

    let (_, result) = submissions_of(&client, "kojied", 50);
    assert!(matches!(result, Err(RedditError::ApiError(_))));
}

#[test]
fn test_failed_page_keeps_earlier_pages() {
    let server = MockServer::start();
    let client = connected_client(&server);

    server.mock(|when, then| {
        when.method(GET)
            .path("/user/kojied/comments")
            .query_param("limit", "100");
        then.status(200)
            .header("content-type", "application/json")
            .body(
                r#"{"kind":"Listing","data":{"after":"t1_next","children":[
                    {"kind":"t1","data":{"body":"newest","permalink":"/a","created_utc":3.0}},
                    {"kind":"t1","data":{"body":"older","permalink":"/b","created_utc":2.0}}
                ]}}"#,
            );
    });
    let second_page = server.mock(|when, then| {
        when.method(GET)
            .path("/user/kojied/comments")
            .query_param("after", "t1_next");
        then.status(500).body("internal error");
    });

    let (comments, result) = comments_of(&client, "kojied", 100);

    second_page.assert();
    assert!(matches!(result, Err(RedditError::ApiError(_))));
    let texts: Vec<_> = comments.iter().map(|c| c.text()).collect();
    assert_eq!(texts, vec!["newest", "older"]);
}

#[test]
fn test_fetcher_keeps_first_page_when_second_fails() {
    let server = MockServer::start();
    let client = connected_client(&server);

    server.mock(|when, then| {
        when.method(GET)
            .path("/user/kojied/comments")
            .query_param("limit", "100");
        then.status(200)
            .header("content-type", "application/json")
            .body(
                r#"{"kind":"Listing","data":{"after":"t1_next","children":[
                    {"kind":"t1","data":{"body":"older","permalink":"/b","created_utc":2.0}},
                    {"kind":"t1","data":{"body":"newest","permalink":"/a","created_utc":3.0}}
                ]}}"#,
            );
    });
    server.mock(|when, then| {
        when.method(GET)
            .path("/user/kojied/comments")
            .query_param("after", "t1_next");
        then.status(500).body("internal error");
    });
    let submissions = server.mock(|when, then| {
        when.method(GET).path("/user/kojied/submitted");
        then.status(200);
    });

    let config = GeneratorConfig {
        item_pause_ms: 0,
        ..Default::default()
    };
    let fetcher = ContentFetcher::new(client, config);
    let content = fetcher.fetch_content("kojied");

    let texts: Vec<_> = content.iter().map(|c| c.text()).collect();
    assert_eq!(texts, vec!["newest", "older"]);
    submissions.assert_hits(0);
}

#[test]
fn test_shared_profile_link_requests_user_comments() {
    let server = MockServer::start();
    let client = connected_client(&server);

    let overview = server.mock(|when, then| {
        when.method(GET).path("/user/kojied");
        then.status(200);
    });
    let listing = server.mock(|when, then| {
        when.method(GET)
            .path("/user/kojied/comments")
            .query_param("sort", "new");
        then.status(200)
            .header("content-type", "application/json")
            .body(
                r#"{"kind":"Listing","data":{"after":null,"children":[
                    {"kind":"t1","data":{"body":"hi","permalink":"/a","created_utc":1.0}}
                ]}}"#,
            );
    });

    let username = extract_username("https://www.reddit.com/user/kojied?utm_source=share&utm_medium=web").unwrap();
    let (comments, result) = comments_of(&client, &username, 100);
    result.unwrap();

    listing.assert();
    overview.assert_hits(0);
    assert_eq!(comments.len(), 1);
    assert_eq!(comments[0].kind(), ContentKind::Comment);
}

#[test]
fn test_reserved_characters_stay_in_the_path() {
    let server = MockServer::start();
    let client = connected_client(&server);

    let listing = server.mock(|when, then| {
        when.method(GET)
            .path_contains("/comments")
            .query_param("sort", "new")
            .query_param("raw_json", "1");
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{"kind":"Listing","data":{"after":null,"children":[]}}"#);
    });

    let (comments, result) = comments_of(&client, "odd?name#frag", 10);
    result.unwrap();

    listing.assert();
    assert!(comments.is_empty());
}
