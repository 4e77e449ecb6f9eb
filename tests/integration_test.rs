//! Integration tests for the title_resolver library.
//!
//! These tests drive `resolve_titles()` against `httptest` mock servers, so
//! the real reqwest transport, header injection and error categorization are
//! all exercised without leaving localhost.
//!
//! Tests marked `#[ignore]` need working DNS and run with `cargo test -- --ignored`.

use std::time::Duration;

use httptest::{matchers::*, responders::*, Expectation, Server};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use title_resolver::{resolve_titles, Config, CredentialTable};

fn page(title: &str) -> String {
    format!("<!DOCTYPE html><html><head><title>{title}</title></head><body></body></html>")
}

#[tokio::test]
async fn test_all_titles_resolved() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/a"))
            .respond_with(status_code(200).body(page("Alpha"))),
    );
    server.expect(
        Expectation::matching(request::method_path("GET", "/b"))
            .respond_with(status_code(200).body(page("Beta"))),
    );

    let a = server.url_str("/a");
    let b = server.url_str("/b");
    let infos = resolve_titles([a.clone(), b.clone()], &Config::default())
        .await
        .expect("Client should build");

    assert_eq!(infos.mapping.len(), 2);
    assert_eq!(infos.mapping.get(&a).map(String::as_str), Some("Alpha"));
    assert_eq!(infos.mapping.get(&b).map(String::as_str), Some("Beta"));
    assert_eq!(infos.error_summary, "");
}

#[tokio::test]
async fn test_not_found_is_summarized() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/a"))
            .respond_with(status_code(200).body(page("Alpha"))),
    );
    server.expect(
        Expectation::matching(request::method_path("GET", "/missing"))
            .respond_with(status_code(404).body("<title>Not Found</title>")),
    );

    let a = server.url_str("/a");
    let infos = resolve_titles([a.clone(), server.url_str("/missing")], &Config::default())
        .await
        .expect("Client should build");

    assert_eq!(infos.mapping.len(), 1);
    assert_eq!(infos.mapping.get(&a).map(String::as_str), Some("Alpha"));
    assert_eq!(infos.error_summary, "Not Found response (404)");
}

#[tokio::test]
async fn test_repeated_status_failures_aggregate() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method("GET"))
            .times(4)
            .respond_with(status_code(404)),
    );

    let urls: Vec<String> = (0..4).map(|i| server.url_str(&format!("/gone/{i}"))).collect();
    let infos = resolve_titles(urls, &Config::default())
        .await
        .expect("Client should build");

    assert!(infos.mapping.is_empty());
    assert_eq!(infos.error_summary, "4\u{d7} Not Found response (404)");
}

/// Serves one connection with a fixed raw HTTP/1.1 response.
async fn serve_raw_once(response: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Should bind loopback");
    let addr = listener.local_addr().expect("Should have a local address");

    tokio::spawn(async move {
        let Ok((mut socket, _)) = listener.accept().await else {
            return;
        };
        let mut request = Vec::new();
        let mut buf = [0u8; 1024];
        while !request.windows(4).any(|w| w == &b"\r\n\r\n"[..]) {
            match socket.read(&mut buf).await {
                Ok(0) | Err(_) => return,
                Ok(n) => request.extend_from_slice(&buf[..n]),
            }
        }
        let _ = socket.write_all(response.as_bytes()).await;
        let _ = socket.shutdown().await;
    });

    format!("http://{addr}/")
}

#[tokio::test]
async fn test_custom_reason_phrase_is_kept() {
    let url = serve_raw_once(
        "HTTP/1.1 404 Gone Fishing\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
    )
    .await;

    let infos = resolve_titles([url], &Config::default())
        .await
        .expect("Client should build");

    assert!(infos.mapping.is_empty());
    assert_eq!(infos.error_summary, "Gone Fishing response (404)");
}

#[tokio::test]
async fn test_status_without_reason_phrase() {
    let url = serve_raw_once("HTTP/1.1 599 \r\nContent-Length: 0\r\nConnection: close\r\n\r\n").await;

    let infos = resolve_titles([url], &Config::default())
        .await
        .expect("Client should build");

    assert_eq!(infos.error_summary, "unexpected response (599)");
}

#[tokio::test]
async fn test_large_page_keeps_leading_title() {
    let mut body = page("Big");
    body.push_str(&"x".repeat(3 * 1024 * 1024));

    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/big"))
            .respond_with(status_code(200).body(body)),
    );

    let url = server.url_str("/big");
    let infos = resolve_titles([url.clone()], &Config::default())
        .await
        .expect("Client should build");

    assert_eq!(infos.mapping.get(&url).map(String::as_str), Some("Big"));
    assert_eq!(infos.error_summary, "");
}

#[tokio::test]
async fn test_title_past_body_cap_is_missing() {
    let mut body = "x".repeat(3 * 1024 * 1024);
    body.push_str(&page("Too deep"));

    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/deep"))
            .respond_with(status_code(200).body(body)),
    );

    let infos = resolve_titles([server.url_str("/deep")], &Config::default())
        .await
        .expect("Client should build");

    assert!(infos.mapping.is_empty());
    assert_eq!(infos.error_summary, "missing title HTML element");
}

#[tokio::test]
async fn test_missing_title_element() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/plain"))
            .respond_with(status_code(200).body("<html><body><h1>No title</h1></body></html>")),
    );

    let infos = resolve_titles([server.url_str("/plain")], &Config::default())
        .await
        .expect("Client should build");

    assert!(infos.mapping.is_empty());
    assert_eq!(infos.error_summary, "missing title HTML element");
}

#[tokio::test]
async fn test_accept_header_always_sent_and_cookie_only_on_match() {
    let server = Server::run();
    server.expect(
        Expectation::matching(all_of![
            request::method_path("GET", "/public"),
            request::headers(contains(("accept", "text/html,application/xhtml+xml"))),
            request::headers(not(contains(key("cookie")))),
        ])
        .respond_with(status_code(200).body(page("Public"))),
    );

    // Credentials configured for a different origin must not leak
    let mut credentials = CredentialTable::new();
    credentials.insert("https://other.test/", "session=secret");
    let config = Config {
        credentials,
        ..Default::default()
    };

    let infos = resolve_titles([server.url_str("/public")], &config)
        .await
        .expect("Client should build");
    assert_eq!(infos.error_summary, "");
    assert_eq!(infos.mapping.len(), 1);
}

#[tokio::test]
async fn test_longest_prefix_cookie_is_sent() {
    let server = Server::run();
    server.expect(
        Expectation::matching(all_of![
            request::method_path("GET", "/sub/page"),
            request::headers(contains(("cookie", "session=sub"))),
        ])
        .respond_with(status_code(200).body(page("Sub"))),
    );
    server.expect(
        Expectation::matching(all_of![
            request::method_path("GET", "/page"),
            request::headers(contains(("cookie", "session=root"))),
        ])
        .respond_with(status_code(200).body(page("Root"))),
    );

    let mut credentials = CredentialTable::new();
    credentials.insert(server.url_str("/"), "session=root");
    credentials.insert(server.url_str("/sub/"), "session=sub");
    let config = Config {
        credentials,
        ..Default::default()
    };

    let sub = server.url_str("/sub/page");
    let root = server.url_str("/page");
    let infos = resolve_titles([sub.clone(), root.clone()], &config)
        .await
        .expect("Client should build");

    assert_eq!(infos.error_summary, "");
    assert_eq!(infos.mapping.get(&sub).map(String::as_str), Some("Sub"));
    assert_eq!(infos.mapping.get(&root).map(String::as_str), Some("Root"));
}

#[tokio::test]
async fn test_slow_response_times_out_as_failed_request() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/slow"))
            .respond_with(delay_and_then(
                Duration::from_secs(3),
                status_code(200).body(page("Too late")),
            )),
    );

    let config = Config {
        timeout_seconds: 1,
        ..Default::default()
    };
    let infos = resolve_titles([server.url_str("/slow")], &config)
        .await
        .expect("Client should build");

    assert!(infos.mapping.is_empty());
    assert_eq!(infos.error_summary, "failed request");
}

#[tokio::test]
async fn test_connection_refused_and_malformed_urls_are_failed_requests() {
    // Port 1 on loopback is not listening in any sane test environment
    let infos = resolve_titles(
        ["http://127.0.0.1:1/", "definitely not a url"],
        &Config::default(),
    )
    .await
    .expect("Client should build");

    assert!(infos.mapping.is_empty());
    assert_eq!(infos.error_summary, "2\u{d7} failed request");
}

#[tokio::test]
async fn test_empty_batch() {
    let infos = resolve_titles(Vec::<String>::new(), &Config::default())
        .await
        .expect("Client should build");
    assert!(infos.mapping.is_empty());
    assert_eq!(infos.error_summary, "");
}

#[tokio::test]
async fn test_repeat_batch_is_idempotent() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/a"))
            .times(2)
            .respond_with(status_code(200).body(page("Alpha"))),
    );

    let urls = [server.url_str("/a")];
    let first = resolve_titles(urls.clone(), &Config::default())
        .await
        .expect("Client should build");
    let second = resolve_titles(urls, &Config::default())
        .await
        .expect("Client should build");

    assert_eq!(first, second);
}

#[tokio::test]
#[ignore] // Requires a resolver that answers NXDOMAIN for .invalid
async fn test_unresolvable_hosts_aggregate() {
    let infos = resolve_titles(
        [
            "https://title-resolver-test-1.invalid/",
            "https://title-resolver-test-2.invalid/",
        ],
        &Config::default(),
    )
    .await
    .expect("Client should build");

    assert!(infos.mapping.is_empty());
    assert_eq!(infos.error_summary, "2\u{d7} host not found");
}
