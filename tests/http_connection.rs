//! ReqwestConnection contra um servidor HTTP local (httpmock)

use std::time::Duration;

use httpmock::prelude::*;
use pretty_assertions::assert_eq;
use serde_json::json;

use clickup_sdk::{ApiConnection, CancellationToken, ClickUpError, ClientSettings, MultipartPayload, ReqwestConnection};

fn connection(server: &MockServer) -> ReqwestConnection {
    let settings = ClientSettings::new("pk_test").with_base_urls(server.url("/api/v2"), server.url("/api/v3"));
    ReqwestConnection::new(&settings).unwrap()
}

#[tokio::test]
async fn test_get_sends_token_and_parses_json() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/v2/task/abc/comment")
                .query_param("start", "0")
                .header("Authorization", "pk_test");
            then.status(200).json_body(json!({ "comments": [] }));
        })
        .await;

    let value = connection(&server)
        .get("task/abc/comment?start=0", &CancellationToken::new())
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(value, Some(json!({ "comments": [] })));
}

#[tokio::test]
async fn test_v3_paths_use_v3_base_url() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/api/v3/workspaces/1/docs");
            then.status(200).json_body(json!({ "docs": [] }));
        })
        .await;

    connection(&server)
        .get("v3/workspaces/1/docs", &CancellationToken::new())
        .await
        .unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn test_empty_or_null_body_is_none() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(PUT).path("/api/v2/comment/1");
            then.status(200);
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/v2/team/1/time_entries/current");
            then.status(200).body("null");
        })
        .await;
    let conn = connection(&server);
    let cancel = CancellationToken::new();

    assert_eq!(conn.put("comment/1", &json!({}), &cancel).await.unwrap(), None);
    assert_eq!(conn.get("team/1/time_entries/current", &cancel).await.unwrap(), None);
}

#[tokio::test]
async fn test_error_status_maps_message_and_ecode() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/v2/user");
            then.status(401)
                .json_body(json!({ "err": "Token invalid", "ECODE": "OAUTH_025" }));
        })
        .await;

    let err = connection(&server)
        .get("user", &CancellationToken::new())
        .await
        .unwrap_err();

    match err {
        ClickUpError::Api { status, message, code } => {
            assert_eq!(status, 401);
            assert_eq!(message, "Token invalid");
            assert_eq!(code.as_deref(), Some("OAUTH_025"));
        }
        other => panic!("erro inesperado: {:?}", other),
    }
}

#[tokio::test]
async fn test_error_with_plain_text_body() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(DELETE).path("/api/v2/task/x");
            then.status(500).body("upstream exploded");
        })
        .await;

    let err = connection(&server)
        .delete("task/x", &CancellationToken::new())
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        ClickUpError::Api { status: 500, ref message, code: None } if message == "upstream exploded"
    ));
}

#[tokio::test]
async fn test_multipart_upload_sends_file_part() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/api/v2/task/abc/attachment")
                .header_exists("content-type")
                .body_contains("name=\"attachment\"")
                .body_contains("filename=\"nota.txt\"")
                .body_contains("conteudo do arquivo");
            then.status(200).json_body(json!({ "id": "att-1" }));
        })
        .await;

    let payload = MultipartPayload::new("nota.txt", b"conteudo do arquivo".to_vec());
    let value = connection(&server)
        .post_multipart("task/abc/attachment", payload, &CancellationToken::new())
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(value, Some(json!({ "id": "att-1" })));
}

#[tokio::test]
async fn test_cancel_aborts_in_flight_request() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/v2/team");
            then.status(200)
                .delay(Duration::from_secs(5))
                .json_body(json!({ "teams": [] }));
        })
        .await;

    let cancel = CancellationToken::new();
    let trigger = cancel.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(50)).await;
        trigger.cancel();
    });

    let err = connection(&server).get("team", &cancel).await.unwrap_err();
    assert!(err.is_cancelled());
}
