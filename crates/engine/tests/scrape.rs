// ABOUTME: Integration tests for the magpie engine against a local HTTP fixture server.
// ABOUTME: Covers end-to-end scraping, SSRF refusal, fetch errors, and charset decoding.

use httpmock::prelude::*;
use magpie_engine::Client;

const CONTACT_PAGE: &str = concat!(
    "<html><body>",
    "<h1>Jane Doe</h1>",
    "<p>Contact Jane Doe at jane@example.com or call 555-123-4567.</p>",
    "</body></html>"
);

fn local_client() -> Client {
    Client::builder().allow_private_networks(true).build()
}

#[tokio::test]
async fn scrape_extracts_email_and_phone() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/contact");
            then.status(200)
                .header("content-type", "text/html; charset=utf-8")
                .body(CONTACT_PAGE);
        })
        .await;

    let report = local_client()
        .scrape(&server.url("/contact"), "extract email and phone")
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(
        report.rows,
        vec!["jane@example.com".to_string(), "555-123-4567".to_string()]
    );
    assert_eq!(report.domain, "127.0.0.1");
}

#[tokio::test]
async fn empty_prompt_collects_paragraphs() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/page");
            then.status(200)
                .header("content-type", "text/html; charset=utf-8")
                .body("<html><body><p>Hello world.</p><p>Second.</p></body></html>");
        })
        .await;

    let report = local_client()
        .scrape(&server.url("/page"), "")
        .await
        .unwrap();

    assert_eq!(
        report.rows,
        vec!["Hello world.".to_string(), "Second.".to_string()]
    );
}

#[tokio::test]
async fn private_addresses_are_refused_by_default() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/contact");
            then.status(200).body(CONTACT_PAGE);
        })
        .await;

    let err = Client::builder()
        .build()
        .scrape(&server.url("/contact"), "email")
        .await
        .unwrap_err();

    assert!(err.is_ssrf(), "expected SSRF error, got: {}", err);
}

#[tokio::test]
async fn malformed_url_is_invalid() {
    let err = local_client().scrape("not a url", "email").await.unwrap_err();
    assert!(err.is_invalid_url());
}

#[tokio::test]
async fn non_http_scheme_is_invalid() {
    let err = local_client()
        .scrape("ftp://example.com/file", "email")
        .await
        .unwrap_err();
    assert!(err.is_invalid_url());
}

#[tokio::test]
async fn http_error_status_is_fetch_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/gone");
            then.status(404).body("not found");
        })
        .await;

    let err = local_client()
        .scrape(&server.url("/gone"), "email")
        .await
        .unwrap_err();

    assert!(err.is_fetch(), "expected fetch error, got: {}", err);
}

#[tokio::test]
async fn latin1_body_is_decoded_via_charset_header() {
    let server = MockServer::start_async().await;
    // "<p>Café.</p>" with é as 0xE9 (ISO-8859-1)
    let mut body = Vec::new();
    body.extend_from_slice(b"<html><body><p>Caf");
    body.push(0xE9);
    body.extend_from_slice(b".</p></body></html>");

    server
        .mock_async(move |when, then| {
            when.method(GET).path("/latin1");
            then.status(200)
                .header("content-type", "text/html; charset=iso-8859-1")
                .body(body.clone());
        })
        .await;

    let report = local_client()
        .scrape(&server.url("/latin1"), "")
        .await
        .unwrap();

    assert_eq!(report.rows, vec!["Café.".to_string()]);
}
