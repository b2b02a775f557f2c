mod common;

use axum::http::StatusCode;
use common::{EXPIRATION, LONG_URL, MockStore, SHORTLINK};
use serde_json::{Value, json};
use shortlink_core::error::AppError;

#[tokio::test]
async fn test_shorten_success() {
    let mut storage = MockStore::new();
    storage
        .expect_shorten()
        .withf(|url: &str, exp: &i64| url == LONG_URL && *exp == EXPIRATION)
        .times(1)
        .returning(|_, _| Ok(SHORTLINK.to_string()));

    let server = common::create_test_server(storage);

    let response = server
        .post("/api/shorten")
        .json(&json!({
            "url": LONG_URL,
            "expiration_in_minutes": EXPIRATION
        }))
        .await;

    response.assert_status(StatusCode::CREATED);
    assert_eq!(response.header("content-type"), "application/json");
    assert_eq!(response.json::<Value>(), json!({ "shortlink": SHORTLINK }));
}

#[tokio::test]
async fn test_shorten_without_content_type_header() {
    let mut storage = MockStore::new();
    storage
        .expect_shorten()
        .times(1)
        .returning(|_, _| Ok("abc".to_string()));

    let server = common::create_test_server(storage);

    let response = server
        .post("/api/shorten")
        .text(r#"{"url":"https://example.com","expiration_in_minutes":0}"#)
        .await;

    response.assert_status(StatusCode::CREATED);
    assert_eq!(response.json::<Value>()["shortlink"], "abc");
}

#[tokio::test]
async fn test_shorten_empty_url() {
    let mut storage = MockStore::new();
    storage.expect_shorten().never();

    let server = common::create_test_server(storage);

    for body in [
        json!({ "url": "", "expiration_in_minutes": 10 }),
        json!({ "url": "" }),
        json!({ "expiration_in_minutes": 10 }),
    ] {
        let response = server.post("/api/shorten").json(&body).await;

        response.assert_status_bad_request();
        let message = response.json::<String>();
        assert!(message.starts_with("validate parameters failed"), "{message}");
    }
}

#[tokio::test]
async fn test_shorten_negative_expiration() {
    let mut storage = MockStore::new();
    storage.expect_shorten().never();

    let server = common::create_test_server(storage);

    let response = server
        .post("/api/shorten")
        .json(&json!({ "url": LONG_URL, "expiration_in_minutes": -1 }))
        .await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_shorten_malformed_body() {
    let mut storage = MockStore::new();
    storage.expect_shorten().never();

    let server = common::create_test_server(storage);

    for body in [r#"{"url": "#, "not json", r#"{"url": 42}"#, ""] {
        let response = server.post("/api/shorten").text(body).await;

        response.assert_status_bad_request();
        let message = response.json::<String>();
        assert!(message.starts_with("parse parameters failed"), "{message}");
    }
}

#[tokio::test]
async fn test_shorten_storage_error_keeps_status() {
    let mut storage = MockStore::new();
    storage
        .expect_shorten()
        .times(1)
        .returning(|_, _| Err(AppError::with_status(StatusCode::CONFLICT, "token space exhausted")));

    let server = common::create_test_server(storage);

    let response = server
        .post("/api/shorten")
        .json(&json!({ "url": LONG_URL, "expiration_in_minutes": 0 }))
        .await;

    response.assert_status(StatusCode::CONFLICT);
    assert_eq!(response.json::<String>(), "token space exhausted");
}

#[tokio::test]
async fn test_shorten_unclassified_storage_error_is_masked() {
    let mut storage = MockStore::new();
    storage
        .expect_shorten()
        .times(1)
        .returning(|_, _| Err(anyhow::anyhow!("redis: connection refused").into()));

    let server = common::create_test_server(storage);

    let response = server
        .post("/api/shorten")
        .json(&json!({ "url": LONG_URL, "expiration_in_minutes": 0 }))
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.json::<String>(), "Internal Server Error");
}
