mod common;

use common::TestApp;
use reqwest::Client;

const DOCX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

#[tokio::test]
async fn generate_without_bid_returns_400() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    let response = client
        .get(format!("{}/generate", app.address))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 400);

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(
        body["error"],
        "Please provide bid number as ?bid=GEM/2025/B/XXXX"
    );

    app.cleanup().await;
}

#[tokio::test]
async fn generate_with_blank_bid_returns_400() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    let response = client
        .get(format!("{}/generate", app.address))
        .query(&[("bid", "   ")])
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 400);

    app.cleanup().await;
}

#[tokio::test]
async fn generate_returns_docx_attachment() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    let response = client
        .get(format!("{}/generate", app.address))
        .query(&[("bid", "GEM/2025/B/1234")])
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(
        response.headers().get("content-type").unwrap(),
        DOCX_CONTENT_TYPE
    );
    assert_eq!(
        response.headers().get("content-disposition").unwrap(),
        "attachment; filename=\"Company_Profile_GEM_2025_B_1234.docx\""
    );

    let body = response.bytes().await.expect("Failed to read body");
    // DOCX is a zip archive; check the local file header magic.
    assert!(body.len() > 4);
    assert_eq!(&body[..4], b"PK\x03\x04");

    app.cleanup().await;
}

#[tokio::test]
async fn generate_leaves_no_spool_files_behind() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    let response = client
        .get(format!("{}/generate", app.address))
        .query(&[("bid", "GEM/2025/B/5678")])
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 200);
    let _ = response.bytes().await.expect("Failed to read body");

    assert_eq!(app.spool_entries().await, 0);

    app.cleanup().await;
}

#[tokio::test]
async fn generate_with_failing_provider_returns_500() {
    let app = TestApp::spawn_with(|config| {
        config.provider.mock_enabled = false;
    })
    .await;
    let client = Client::new();

    let response = client
        .get(format!("{}/generate", app.address))
        .query(&[("bid", "GEM/2025/B/1234")])
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 500);

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["error"], "Error generating document");

    // No file is spooled when generation fails
    assert_eq!(app.spool_entries().await, 0);

    app.cleanup().await;
}

#[tokio::test]
async fn concurrent_requests_for_same_bid_both_succeed() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    let first = client
        .get(format!("{}/generate", app.address))
        .query(&[("bid", "GEM/2025/B/9999")])
        .send();
    let second = client
        .get(format!("{}/generate", app.address))
        .query(&[("bid", "GEM/2025/B/9999")])
        .send();

    let (first, second) = tokio::join!(first, second);
    let first = first.expect("Failed to execute first request");
    let second = second.expect("Failed to execute second request");

    assert_eq!(first.status().as_u16(), 200);
    assert_eq!(second.status().as_u16(), 200);

    let first_body = first.bytes().await.expect("Failed to read first body");
    let second_body = second.bytes().await.expect("Failed to read second body");
    assert_eq!(&first_body[..4], b"PK\x03\x04");
    assert_eq!(&second_body[..4], b"PK\x03\x04");

    assert_eq!(app.spool_entries().await, 0);

    app.cleanup().await;
}
