//! Request-shape and error-mapping tests for the fetch wrapper, using mockito.

use parkflow_core::{FetchError, HttpMethod, ParkingClient};
use serde::Deserialize;
use serde_json::json;

#[derive(Debug, Deserialize, PartialEq)]
struct Reply {
    success: bool,
    message: String,
}

// === request shape ===

#[tokio::test]
async fn test_get_sends_json_content_type_and_no_body() {
    let mut server = mockito::Server::new_async().await;

    let mock = server
        .mock("GET", "/metrics")
        .match_header("content-type", "application/json")
        .match_body(mockito::Matcher::Exact(String::new()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"success": true, "message": "ok"}"#)
        .create_async()
        .await;

    let client = ParkingClient::new(&format!("{}/", server.url()));
    let reply: Reply = client.fetch("metrics").await.expect("GET should succeed");

    assert!(reply.success);
    assert_eq!(reply.message, "ok");

    mock.assert_async().await;
}

#[tokio::test]
async fn test_get_ignores_the_data_argument() {
    let mut server = mockito::Server::new_async().await;

    // The mock only matches an empty body, so the test fails if the payload
    // below ever reaches the wire.
    let mock = server
        .mock("GET", "/parkingSlots")
        .match_body(mockito::Matcher::Exact(String::new()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"success": true, "message": "listed"}"#)
        .create_async()
        .await;

    let client = ParkingClient::new(&format!("{}/", server.url()));
    let data = json!({"plateNumber": "B 1234 XYZ"});
    let reply: Reply = client
        .fetch_data("parkingSlots", HttpMethod::Get, &data)
        .await
        .expect("GET should succeed");

    assert!(reply.success);

    mock.assert_async().await;
}

#[tokio::test]
async fn test_post_sends_the_serialized_data() {
    let mut server = mockito::Server::new_async().await;

    let mock = server
        .mock("POST", "/login")
        .match_header("content-type", "application/json")
        .match_body(mockito::Matcher::Json(json!({
            "email": "admin@gmail.com",
            "password": "admin123"
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"success": true, "message": "Login successful"}"#)
        .create_async()
        .await;

    let client = ParkingClient::new(&format!("{}/", server.url()));
    let data = json!({"email": "admin@gmail.com", "password": "admin123"});
    let reply: Reply = client
        .fetch_data("login", HttpMethod::Post, &data)
        .await
        .expect("POST should succeed");

    assert_eq!(reply.message, "Login successful");

    mock.assert_async().await;
}

#[tokio::test]
async fn test_put_sends_the_serialized_data() {
    let mut server = mockito::Server::new_async().await;

    let mock = server
        .mock("PUT", "/updateSlotStatus")
        .match_header("content-type", "application/json")
        .match_body(mockito::Matcher::Json(json!({
            "slot_number": "A3",
            "status": "taken"
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"success": true, "message": "Slot A3 status updated"}"#)
        .create_async()
        .await;

    let client = ParkingClient::new(&format!("{}/", server.url()));
    let data = json!({"slot_number": "A3", "status": "taken"});
    let reply: Reply = client
        .fetch_data("updateSlotStatus", HttpMethod::Put, &data)
        .await
        .expect("PUT should succeed");

    assert!(reply.success);

    mock.assert_async().await;
}

#[tokio::test]
async fn test_empty_path_targets_the_base_url() {
    let mut server = mockito::Server::new_async().await;

    let mock = server
        .mock("GET", "/")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"success": true, "message": "home"}"#)
        .create_async()
        .await;

    let client = ParkingClient::new(&format!("{}/", server.url()));
    let reply: Reply = client.fetch("").await.expect("GET should succeed");

    assert_eq!(reply.message, "home");

    mock.assert_async().await;
}

#[tokio::test]
async fn test_success_resolves_to_the_decoded_value() {
    let mut server = mockito::Server::new_async().await;

    let mock = server
        .mock("GET", "/users")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"id": 1}"#)
        .create_async()
        .await;

    let client = ParkingClient::new(&format!("{}/", server.url()));
    let value: serde_json::Value = client.fetch("users").await.expect("GET should succeed");

    assert_eq!(value, json!({"id": 1}));

    mock.assert_async().await;
}

// === error mapping ===

#[tokio::test]
async fn test_server_error_maps_to_not_ok() {
    let mut server = mockito::Server::new_async().await;

    let mock = server
        .mock("GET", "/metrics")
        .with_status(500)
        .with_body("Internal Server Error")
        .create_async()
        .await;

    let client = ParkingClient::new(&format!("{}/", server.url()));
    let result: Result<Reply, _> = client.fetch("metrics").await;

    let err = result.expect_err("500 should fail");
    assert!(matches!(err, FetchError::NotOk));
    assert_eq!(err.to_string(), "Network response was not ok");

    mock.assert_async().await;
}

#[tokio::test]
async fn test_error_status_and_body_are_discarded() {
    let mut server = mockito::Server::new_async().await;

    let mock = server
        .mock("POST", "/login")
        .with_status(401)
        .with_header("content-type", "application/json")
        .with_body(r#"{"success": false, "message": "Invalid credentials"}"#)
        .create_async()
        .await;

    let client = ParkingClient::new(&format!("{}/", server.url()));
    let data = json!({"email": "nobody@gmail.com", "password": "wrong"});
    let result: Result<Reply, _> = client.fetch_data("login", HttpMethod::Post, &data).await;

    // The caller learns nothing beyond the fixed message, whatever the
    // server put in the 401.
    let err = result.expect_err("401 should fail");
    assert!(matches!(err, FetchError::NotOk));
    assert_eq!(err.to_string(), "Network response was not ok");

    mock.assert_async().await;
}

#[tokio::test]
async fn test_invalid_json_is_a_decode_error() {
    let mut server = mockito::Server::new_async().await;

    let mock = server
        .mock("GET", "/metrics")
        .with_status(200)
        .with_body("not valid json")
        .create_async()
        .await;

    let client = ParkingClient::new(&format!("{}/", server.url()));
    let result: Result<Reply, _> = client.fetch("metrics").await;

    let err = result.expect_err("bad body should fail");
    assert!(matches!(err, FetchError::Decode(_)));

    mock.assert_async().await;
}

#[tokio::test]
async fn test_connection_failure_is_a_transport_error() {
    // Nothing listens on this port; reqwest fails before any status check.
    let client = ParkingClient::new("http://127.0.0.1:1/");
    let result: Result<Reply, _> = client.fetch("metrics").await;

    let err = result.expect_err("refused connection should fail");
    assert!(matches!(err, FetchError::Transport(_)));
}
