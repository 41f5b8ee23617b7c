mod common;

use futures::StreamExt;
use pretty_assertions::assert_eq;
use serde_json::json;

use clickup_sdk::models::{CustomTaskIdOptions, GetTaskCommentsQuery};
use clickup_sdk::{CancellationToken, ClickUpError};

use common::{client, ScriptedConnection};

fn comment(id: &str) -> serde_json::Value {
    json!({ "id": id, "comment_text": format!("texto {}", id), "date": "1700000000000" })
}

#[tokio::test]
async fn test_stream_walks_start_then_start_id_until_empty_page() {
    let conn = ScriptedConnection::new();
    conn.reply(json!({ "comments": [comment("0"), comment("1")] }))
        .reply(json!({ "comments": [comment("2")] }))
        .reply(json!({ "comments": [] }));
    let cancel = CancellationToken::new();

    let comments: Vec<_> = client(&conn)
        .comments()
        .get_task_comments_stream("task123", &CustomTaskIdOptions::default(), Some(0), &cancel)
        .collect()
        .await;

    let ids: Vec<String> = comments.into_iter().map(|c| c.unwrap().id).collect();
    assert_eq!(ids, vec!["0", "1", "2"]);
    assert_eq!(
        conn.paths(),
        vec![
            "task/task123/comment?start=0",
            "task/task123/comment?start_id=1",
            "task/task123/comment?start_id=2",
        ]
    );
}

#[tokio::test]
async fn test_stream_keeps_custom_task_id_params_on_every_page() {
    let conn = ScriptedConnection::new();
    conn.reply(json!({ "comments": [comment("9")] }))
        .reply(json!({ "comments": [] }));
    let cancel = CancellationToken::new();

    let count = client(&conn)
        .comments()
        .get_task_comments_stream("CUS-1", &CustomTaskIdOptions::custom("t1"), None, &cancel)
        .count()
        .await;

    assert_eq!(count, 1);
    assert_eq!(
        conn.paths(),
        vec![
            "task/CUS-1/comment?custom_task_ids=true&team_id=t1",
            "task/CUS-1/comment?custom_task_ids=true&team_id=t1&start_id=9",
        ]
    );
}

#[tokio::test]
async fn test_stream_is_lazy() {
    let conn = ScriptedConnection::new();
    let cancel = CancellationToken::new();

    let _stream = client(&conn)
        .comments()
        .get_task_comments_stream("task123", &CustomTaskIdOptions::default(), None, &cancel);

    assert!(conn.calls().is_empty());
}

#[tokio::test]
async fn test_cancel_stops_stream_without_new_requests() {
    let conn = ScriptedConnection::new();
    conn.reply(json!({ "comments": [comment("1"), comment("2"), comment("3")] }));
    let cancel = CancellationToken::new();

    let mut stream = client(&conn)
        .comments()
        .get_task_comments_stream("task123", &CustomTaskIdOptions::default(), None, &cancel);

    assert_eq!(stream.next().await.unwrap().unwrap().id, "1");
    cancel.cancel();

    let err = stream.next().await.unwrap().unwrap_err();
    assert!(err.is_cancelled());
    assert!(stream.next().await.is_none());
    assert_eq!(conn.calls().len(), 1);
}

#[tokio::test]
async fn test_stream_yields_transport_error_once_then_ends() {
    let conn = ScriptedConnection::new();
    conn.reply(json!({ "comments": [comment("1")] }))
        .fail(ClickUpError::Api {
            status: 429,
            message: "Rate limit".into(),
            code: Some("APP_002".into()),
        });
    let cancel = CancellationToken::new();

    let items: Vec<_> = client(&conn)
        .comments()
        .get_task_comments_stream("task123", &CustomTaskIdOptions::default(), None, &cancel)
        .collect()
        .await;

    assert_eq!(items.len(), 2);
    assert!(items[0].is_ok());
    match &items[1] {
        Err(ClickUpError::Api { status, code, .. }) => {
            assert_eq!(*status, 429);
            assert_eq!(code.as_deref(), Some("APP_002"));
        }
        other => panic!("esperava erro da API, veio {:?}", other),
    }
}

#[tokio::test]
async fn test_single_page_query_orders_parameters() {
    let conn = ScriptedConnection::new();
    conn.reply(json!({ "comments": [comment("5")] }));
    let cancel = CancellationToken::new();

    let query = GetTaskCommentsQuery {
        task_ids: CustomTaskIdOptions::custom("t1"),
        start: Some(1700000000000),
        start_id: Some("4".into()),
    };
    let comments = client(&conn)
        .comments()
        .get_task_comments("abc", &query, &cancel)
        .await
        .unwrap();

    assert_eq!(comments.len(), 1);
    assert_eq!(
        conn.paths(),
        vec!["task/abc/comment?custom_task_ids=true&team_id=t1&start=1700000000000&start_id=4"]
    );
}

#[tokio::test]
async fn test_missing_comments_field_is_invalid_response() {
    let conn = ScriptedConnection::new();
    conn.reply(json!({ "comments": null })).reply_empty();
    let cancel = CancellationToken::new();
    let service = client(&conn).comments();

    let err = service
        .get_task_comments("abc", &GetTaskCommentsQuery::default(), &cancel)
        .await
        .unwrap_err();
    assert!(err.is_invalid_response());

    let err = service
        .get_list_comments("list1", None, None, &cancel)
        .await
        .unwrap_err();
    assert!(err.is_invalid_response());
}

#[tokio::test]
async fn test_fluent_task_comment_posts_assembled_body() {
    let conn = ScriptedConnection::new();
    conn.reply(json!({ "id": 458315, "hist_id": "26508", "date": 1568036964079i64 }));
    let cancel = CancellationToken::new();

    let created = client(&conn)
        .fluent()
        .add_task_comment("CUS-7")
        .with_text("Revisado")
        .with_assignee(183)
        .with_notify_all(true)
        .with_custom_task_ids("t1")
        .add(&cancel)
        .await
        .unwrap();

    assert_eq!(created.id, json!(458315));
    let calls = conn.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].method, "POST");
    assert_eq!(calls[0].path, "task/CUS-7/comment?custom_task_ids=true&team_id=t1");
    assert_eq!(
        calls[0].body,
        Some(json!({ "comment_text": "Revisado", "assignee": 183, "notify_all": true }))
    );
}

#[tokio::test]
async fn test_update_comment_discards_response() {
    let conn = ScriptedConnection::new();
    conn.reply_empty();
    let cancel = CancellationToken::new();

    let request = clickup_sdk::models::UpdateCommentRequest {
        comment_text: "editado".into(),
        resolved: Some(true),
        ..Default::default()
    };
    client(&conn)
        .comments()
        .update_comment("77", &request, &cancel)
        .await
        .unwrap();

    let calls = conn.calls();
    assert_eq!(calls[0].method, "PUT");
    assert_eq!(calls[0].path, "comment/77");
    assert_eq!(calls[0].body, Some(json!({ "comment_text": "editado", "resolved": true })));
}
