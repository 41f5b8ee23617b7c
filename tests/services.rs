mod common;

use futures::StreamExt;
use pretty_assertions::assert_eq;
use serde_json::json;
use tokio_test::{assert_err, assert_ok};

use clickup_sdk::models::{
    ChatPageQuery, CustomTaskIdOptions, GetTasksQuery, SearchDocsQuery, TimeEntryTag,
    TimeEntryTagsRequest,
};
use clickup_sdk::{CancellationToken, ClickUpError, MultipartPayload};

use common::{client, ScriptedConnection};

fn task(id: &str) -> serde_json::Value {
    json!({ "id": id, "name": format!("Task {}", id), "status": { "status": "to do" } })
}

// ==================== TASKS ====================

#[tokio::test]
async fn test_tasks_stream_pages_by_number_until_empty() {
    let conn = ScriptedConnection::new();
    conn.reply(json!({ "tasks": [task("a"), task("b")], "last_page": false }))
        .reply(json!({ "tasks": [task("c")], "last_page": false }))
        .reply(json!({ "tasks": [] }));
    let cancel = CancellationToken::new();

    let query = GetTasksQuery {
        include_closed: Some(true),
        ..Default::default()
    };
    let ids: Vec<String> = client(&conn)
        .tasks()
        .get_tasks_stream("L1", query, &cancel)
        .map(|task| task.unwrap().id)
        .collect()
        .await;

    assert_eq!(ids, vec!["a", "b", "c"]);
    assert_eq!(
        conn.paths(),
        vec![
            "list/L1/task?page=0&include_closed=true",
            "list/L1/task?page=1&include_closed=true",
            "list/L1/task?page=2&include_closed=true",
        ]
    );
}

#[tokio::test]
async fn test_get_tasks_encodes_arrays_once() {
    let conn = ScriptedConnection::new();
    conn.reply(json!({ "tasks": [], "last_page": true }));
    let cancel = CancellationToken::new();

    let query = GetTasksQuery {
        statuses: vec!["in progress".into(), "to do".into()],
        tags: vec!["urgente".into()],
        ..Default::default()
    };
    let page = client(&conn).tasks().get_tasks("L1", &query, &cancel).await.unwrap();

    assert!(page.tasks.is_empty());
    assert!(page.last_page);
    assert_eq!(
        conn.paths(),
        vec!["list/L1/task?statuses[]=in%20progress&statuses[]=to%20do&tags[]=urgente"]
    );
}

#[tokio::test]
async fn test_null_task_body_is_invalid_response() {
    let conn = ScriptedConnection::new();
    conn.reply_empty();
    let cancel = CancellationToken::new();

    let err = client(&conn)
        .tasks()
        .get_task("abc", &Default::default(), &cancel)
        .await
        .unwrap_err();

    assert!(err.is_invalid_response());
}

#[tokio::test]
async fn test_transport_errors_pass_through_unchanged() {
    let conn = ScriptedConnection::new();
    conn.fail(ClickUpError::Api {
        status: 401,
        message: "Token invalid".into(),
        code: Some("OAUTH_025".into()),
    });
    let cancel = CancellationToken::new();

    let err = client(&conn).spaces().get_space("S1", &cancel).await.unwrap_err();

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
async fn test_bulk_time_in_status_repeats_task_ids() {
    let conn = ScriptedConnection::new();
    conn.reply(json!({
        "t1": { "current_status": { "status": "open", "total_time": { "by_minute": 5, "since": "1" } }, "status_history": [] }
    }));
    let cancel = CancellationToken::new();

    let ids = vec!["t1".to_string(), "t2".to_string()];
    let result = client(&conn)
        .tasks()
        .get_bulk_tasks_time_in_status(&ids, &CustomTaskIdOptions::default(), &cancel)
        .await
        .unwrap();

    assert!(result.contains_key("t1"));
    assert_eq!(
        conn.paths(),
        vec!["task/bulk_time_in_status/task_ids?task_ids=t1&task_ids=t2"]
    );
}

// ==================== ANEXOS ====================

#[tokio::test]
async fn test_attachment_upload_forwards_payload_unchanged() {
    let conn = ScriptedConnection::new();
    conn.reply(json!({ "id": "att-1", "title": "nota.txt", "url": "https://t.co/nota.txt" }));
    let cancel = CancellationToken::new();

    let payload = MultipartPayload::new("nota.txt", b"conteudo".to_vec()).with_content_type("text/plain");
    let attachment = client(&conn)
        .attachments()
        .create_task_attachment("CUS-1", payload.clone(), &CustomTaskIdOptions::custom("t1"), &cancel)
        .await
        .unwrap();

    assert_eq!(attachment.id, "att-1");
    let calls = conn.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].path, "task/CUS-1/attachment?custom_task_ids=true&team_id=t1");
    assert_eq!(calls[0].multipart, Some(payload));
}

// ==================== TIME TRACKING ====================

#[tokio::test]
async fn test_running_timer_absent_is_none() {
    let conn = ScriptedConnection::new();
    conn.reply(json!({ "data": null }));
    let cancel = CancellationToken::new();

    let running = client(&conn)
        .time_tracking()
        .get_running_time_entry("W1", Some(42), &cancel)
        .await
        .unwrap();

    assert!(running.is_none());
    assert_eq!(conn.paths(), vec!["team/W1/time_entries/current?assignee=42"]);
}

#[tokio::test]
async fn test_running_timer_empty_body_is_invalid_response() {
    let conn = ScriptedConnection::new();
    conn.reply_empty();
    let cancel = CancellationToken::new();

    let err = client(&conn)
        .time_tracking()
        .get_running_time_entry("W1", None, &cancel)
        .await
        .unwrap_err();

    assert!(err.is_invalid_response());
}

#[tokio::test]
async fn test_time_entries_require_data_envelope() {
    let conn = ScriptedConnection::new();
    conn.reply(json!({ "data": [{ "id": "te1", "duration": "-1700000000000", "tags": [] }] }))
        .reply(json!({}));
    let cancel = CancellationToken::new();
    let service = client(&conn).time_tracking();

    let entries = service.get_time_entries("W1", &Default::default(), &cancel).await.unwrap();
    assert_eq!(entries.len(), 1);
    assert!(entries[0].is_running());

    let err = service.get_time_entries("W1", &Default::default(), &cancel).await.unwrap_err();
    assert!(err.is_invalid_response());
}

#[tokio::test]
async fn test_remove_time_entry_tags_sends_delete_with_body() {
    let conn = ScriptedConnection::new();
    let cancel = CancellationToken::new();

    let request = TimeEntryTagsRequest {
        time_entry_ids: vec!["te1".into()],
        tags: vec![TimeEntryTag::new("faturável")],
    };
    assert_ok!(
        client(&conn)
            .time_tracking()
            .remove_tags_from_time_entries("W1", &request, &cancel)
            .await
    );

    let calls = conn.calls();
    assert_eq!(calls[0].method, "DELETE");
    assert_eq!(calls[0].path, "team/W1/time_entries/tags");
    assert_eq!(
        calls[0].body,
        Some(json!({ "time_entry_ids": ["te1"], "tags": [{ "name": "faturável" }] }))
    );
}

// ==================== V3: DOCS E CHAT ====================

#[tokio::test]
async fn test_docs_stream_follows_next_cursor() {
    let conn = ScriptedConnection::new();
    conn.reply(json!({ "docs": [{ "id": "d1", "name": "Manual" }], "next_cursor": "abc" }))
        .reply(json!({ "docs": [{ "id": "d2", "name": "FAQ" }], "next_cursor": "" }));
    let cancel = CancellationToken::new();

    let query = SearchDocsQuery {
        limit: Some(1),
        ..Default::default()
    };
    let names: Vec<String> = client(&conn)
        .docs()
        .search_docs_stream("W1", query, &cancel)
        .map(|doc| doc.unwrap().name)
        .collect()
        .await;

    assert_eq!(names, vec!["Manual", "FAQ"]);
    assert_eq!(
        conn.paths(),
        vec![
            "v3/workspaces/W1/docs?limit=1",
            "v3/workspaces/W1/docs?limit=1&next_cursor=abc",
        ]
    );
}

#[tokio::test]
async fn test_chat_messages_page_and_envelope() {
    let conn = ScriptedConnection::new();
    conn.reply(json!({ "data": [{ "id": "m1", "content": "oi" }], "next_cursor": "c2" }))
        .reply(json!({ "data": null }));
    let cancel = CancellationToken::new();
    let chat = client(&conn).chat();

    let query = ChatPageQuery {
        limit: Some(50),
        ..Default::default()
    };
    let page = chat.get_chat_messages("W1", "CH1", &query, &cancel).await.unwrap();
    assert_eq!(page.items.len(), 1);
    assert_eq!(page.next.as_deref(), Some("c2"));

    assert_err!(chat.get_chat_channel("W1", "CH1", &cancel).await);
    assert_eq!(
        conn.paths(),
        vec![
            "v3/workspaces/W1/chat/channels/CH1/messages?limit=50",
            "v3/workspaces/W1/chat/channels/CH1",
        ]
    );
}

#[tokio::test]
async fn test_tag_names_in_path_are_percent_encoded() {
    let conn = ScriptedConnection::new();
    let cancel = CancellationToken::new();

    client(&conn)
        .tags()
        .delete_space_tag("S1", "alta prioridade", &cancel)
        .await
        .unwrap();

    assert_eq!(conn.paths(), vec!["space/S1/tag/alta%20prioridade"]);
}
