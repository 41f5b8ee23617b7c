mod common;

use chrono::{TimeZone, Utc};
use pretty_assertions::assert_eq;
use serde_json::json;

use clickup_sdk::fluent::{ListParent, ViewTarget};
use clickup_sdk::models::TaskPriority;
use clickup_sdk::CancellationToken;

use common::{client, ScriptedConnection};

#[tokio::test]
async fn test_create_task_sends_one_post_with_accumulated_fields() {
    let conn = ScriptedConnection::new();
    conn.reply(json!({ "id": "t9", "name": "Revisar contrato" }));
    let cancel = CancellationToken::new();
    let due = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();

    let task = client(&conn)
        .fluent()
        .create_task("L1")
        .with_name("Revisar contrato")
        .with_priority(TaskPriority::High)
        .with_tags(vec!["juridico".into()])
        .with_assignees(vec![183])
        .with_due_date(due)
        .with_custom_field("cf-1", json!("Nordja"))
        .create(&cancel)
        .await
        .unwrap();

    assert_eq!(task.id, "t9");
    let calls = conn.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].method, "POST");
    assert_eq!(calls[0].path, "list/L1/task");
    assert_eq!(
        calls[0].body,
        Some(json!({
            "name": "Revisar contrato",
            "assignees": [183],
            "tags": ["juridico"],
            "priority": 2,
            "due_date": due.timestamp_millis(),
            "custom_fields": [{ "id": "cf-1", "value": "Nordja" }],
        }))
    );
}

#[tokio::test]
async fn test_update_task_with_custom_id() {
    let conn = ScriptedConnection::new();
    conn.reply(json!({ "id": "t9", "name": "Novo nome" }));
    let cancel = CancellationToken::new();

    client(&conn)
        .fluent()
        .update_task("CUS-9")
        .with_name("Novo nome")
        .with_assignees(vec![1], vec![2])
        .with_custom_task_ids("t1")
        .change(&cancel)
        .await
        .unwrap();

    let calls = conn.calls();
    assert_eq!(calls[0].method, "PUT");
    assert_eq!(calls[0].path, "task/CUS-9?custom_task_ids=true&team_id=t1");
    assert_eq!(
        calls[0].body,
        Some(json!({ "name": "Novo nome", "assignees": { "add": [1], "rem": [2] } }))
    );
}

#[tokio::test]
async fn test_query_tasks_builds_filters_in_order() {
    let conn = ScriptedConnection::new();
    conn.reply(json!({ "tasks": [], "last_page": true }));
    let cancel = CancellationToken::new();

    client(&conn)
        .fluent()
        .query_tasks("L1")
        .with_page(2)
        .with_archived(false)
        .with_statuses(vec!["open".into()])
        .with_include_closed(true)
        .get(&cancel)
        .await
        .unwrap();

    assert_eq!(
        conn.paths(),
        vec!["list/L1/task?archived=false&page=2&statuses[]=open&include_closed=true"]
    );
}

#[tokio::test]
async fn test_add_dependency_posts_without_reading_body() {
    let conn = ScriptedConnection::new();
    let cancel = CancellationToken::new();

    client(&conn)
        .fluent()
        .add_dependency("A")
        .with_depends_on("B")
        .add(&cancel)
        .await
        .unwrap();

    let calls = conn.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].path, "task/A/dependency");
    assert_eq!(calls[0].body, Some(json!({ "depends_on": "B" })));
}

#[tokio::test]
async fn test_create_list_in_space_uses_folderless_endpoint() {
    let conn = ScriptedConnection::new();
    conn.reply(json!({ "id": "L7", "name": "Backlog" }));
    let cancel = CancellationToken::new();

    let list = client(&conn)
        .fluent()
        .create_list(ListParent::Space("S1".into()))
        .with_name("Backlog")
        .with_status("red")
        .create(&cancel)
        .await
        .unwrap();

    assert_eq!(list.id, "L7");
    let calls = conn.calls();
    assert_eq!(calls[0].path, "space/S1/list");
    assert_eq!(calls[0].body, Some(json!({ "name": "Backlog", "status": "red" })));
}

#[tokio::test]
async fn test_start_timer_unwraps_data_envelope() {
    let conn = ScriptedConnection::new();
    conn.reply(json!({ "data": { "id": "te-1", "duration": "-1", "tags": [] } }));
    let cancel = CancellationToken::new();

    let entry = client(&conn)
        .fluent()
        .start_timer("W1")
        .with_task("abc")
        .with_description("Reunião")
        .with_tag("cliente")
        .start(&cancel)
        .await
        .unwrap();

    assert_eq!(entry.id, "te-1");
    let calls = conn.calls();
    assert_eq!(calls[0].path, "team/W1/time_entries/start");
    assert_eq!(
        calls[0].body,
        Some(json!({ "description": "Reunião", "tags": [{ "name": "cliente" }], "tid": "abc" }))
    );
}

#[tokio::test]
async fn test_create_time_entry_defaults_required_fields() {
    let conn = ScriptedConnection::new();
    conn.reply(json!({ "data": { "id": "te-2" } }));
    let cancel = CancellationToken::new();
    let start = Utc.with_ymd_and_hms(2024, 1, 10, 9, 0, 0).unwrap();

    client(&conn)
        .fluent()
        .create_time_entry("W1")
        .with_start(start)
        .with_duration(3_600_000)
        .create(&cancel)
        .await
        .unwrap();

    assert_eq!(
        conn.calls()[0].body,
        Some(json!({ "start": start.timestamp_millis(), "duration": 3_600_000 }))
    );
}

#[tokio::test]
async fn test_create_view_on_folder() {
    let conn = ScriptedConnection::new();
    conn.reply(json!({ "view": { "id": "v1", "name": "Quadro", "type": "board" } }));
    let cancel = CancellationToken::new();

    let view = client(&conn)
        .fluent()
        .create_view(ViewTarget::Folder("F1".into()))
        .with_name("Quadro")
        .with_type("board")
        .create(&cancel)
        .await
        .unwrap();

    assert_eq!(view.id, "v1");
    let calls = conn.calls();
    assert_eq!(calls[0].path, "folder/F1/view");
    let body = calls[0].body.clone().unwrap();
    assert_eq!(body["name"], json!("Quadro"));
    assert_eq!(body["type"], json!("board"));
}

#[tokio::test]
async fn test_create_webhook_requires_webhook_field() {
    let conn = ScriptedConnection::new();
    conn.reply(json!({ "id": "wh1" }));
    let cancel = CancellationToken::new();

    let err = client(&conn)
        .fluent()
        .create_webhook("W1")
        .with_endpoint("https://exemplo.com/hook")
        .with_events(vec!["taskCreated".into()])
        .create(&cancel)
        .await
        .unwrap_err();

    assert!(err.is_invalid_response());
    assert_eq!(
        conn.calls()[0].body,
        Some(json!({ "endpoint": "https://exemplo.com/hook", "events": ["taskCreated"] }))
    );
}

#[tokio::test]
async fn test_chat_reply_goes_to_replies_endpoint() {
    let conn = ScriptedConnection::new();
    conn.reply(json!({ "data": { "id": "m2", "content": "ok" } }));
    let cancel = CancellationToken::new();

    let message = client(&conn)
        .fluent()
        .send_chat_message("W1", "CH1")
        .with_content("ok")
        .with_reply_to("m1")
        .send(&cancel)
        .await
        .unwrap();

    assert_eq!(message.id, "m2");
    let calls = conn.calls();
    assert_eq!(calls[0].path, "v3/workspaces/W1/chat/messages/m1/replies");
    assert_eq!(calls[0].body, Some(json!({ "type": "message", "content": "ok" })));
}

#[tokio::test]
async fn test_upload_attachment_builds_multipart_payload() {
    let conn = ScriptedConnection::new();
    conn.reply(json!({ "id": "att-9" }));
    let cancel = CancellationToken::new();

    client(&conn)
        .fluent()
        .upload_attachment("abc")
        .with_file("foto.png", vec![1u8, 2, 3])
        .with_content_type("image/png")
        .upload(&cancel)
        .await
        .unwrap();

    let payload = conn.calls()[0].multipart.clone().unwrap();
    assert_eq!(payload.field_name, "attachment");
    assert_eq!(payload.file_name, "foto.png");
    assert_eq!(payload.content, vec![1u8, 2, 3]);
    assert_eq!(payload.content_type.as_deref(), Some("image/png"));
}

#[tokio::test]
async fn test_cancelled_token_reaches_connection() {
    let conn = ScriptedConnection::new();
    let cancel = CancellationToken::new();
    cancel.cancel();

    let err = client(&conn)
        .fluent()
        .create_folder("S1")
        .with_name("Q1")
        .create(&cancel)
        .await
        .unwrap_err();

    assert!(err.is_cancelled());
    assert!(conn.calls().is_empty());
}

// ==================== HIERARQUIA ====================

#[tokio::test]
async fn test_create_space_defaults_multiple_assignees() {
    let conn = ScriptedConnection::new();
    conn.reply(json!({ "id": "S9", "name": "Comercial" }));
    let cancel = CancellationToken::new();

    let space = client(&conn)
        .fluent()
        .create_space("W1")
        .with_name("Comercial")
        .with_features(json!({ "due_dates": { "enabled": true } }))
        .create(&cancel)
        .await
        .unwrap();

    assert_eq!(space.id, "S9");
    let calls = conn.calls();
    assert_eq!(calls[0].path, "team/W1/space");
    assert_eq!(
        calls[0].body,
        Some(json!({
            "name": "Comercial",
            "multiple_assignees": false,
            "features": { "due_dates": { "enabled": true } },
        }))
    );
}

#[tokio::test]
async fn test_add_checklist_item_with_assignee() {
    let conn = ScriptedConnection::new();
    conn.reply(json!({ "checklist": { "id": "CL1", "name": "Entrega", "items": [{ "id": "i1", "name": "Assinar" }] } }));
    let cancel = CancellationToken::new();

    let checklist = client(&conn)
        .fluent()
        .add_checklist_item("CL1")
        .with_name("Assinar")
        .with_assignee(183)
        .add(&cancel)
        .await
        .unwrap();

    assert_eq!(checklist.items.len(), 1);
    let calls = conn.calls();
    assert_eq!(calls[0].method, "POST");
    assert_eq!(calls[0].path, "checklist/CL1/checklist_item");
    assert_eq!(calls[0].body, Some(json!({ "name": "Assinar", "assignee": 183 })));
}

#[tokio::test]
async fn test_query_task_comments_with_custom_id_and_cursor() {
    let conn = ScriptedConnection::new();
    conn.reply(json!({ "comments": [{ "id": "c1", "comment_text": "ok" }] }));
    let cancel = CancellationToken::new();

    let comments = client(&conn)
        .fluent()
        .query_task_comments("CUS-1")
        .with_custom_task_ids("W1")
        .with_start(1700000000000)
        .with_start_id("c0")
        .get(&cancel)
        .await
        .unwrap();

    assert_eq!(comments[0].id, "c1");
    assert_eq!(
        conn.paths(),
        vec!["task/CUS-1/comment?custom_task_ids=true&team_id=W1&start=1700000000000&start_id=c0"]
    );
}

// ==================== GOALS ====================

#[tokio::test]
async fn test_create_goal_marks_multiple_owners() {
    let conn = ScriptedConnection::new();
    conn.reply(json!({ "goal": { "id": "g1", "name": "Q3" } }));
    let cancel = CancellationToken::new();
    let due = Utc.with_ymd_and_hms(2024, 9, 30, 0, 0, 0).unwrap();

    let goal = client(&conn)
        .fluent()
        .create_goal("W1")
        .with_name("Q3")
        .with_due_date(due)
        .with_owners(vec![1, 2])
        .with_color("#32a852")
        .create(&cancel)
        .await
        .unwrap();

    assert_eq!(goal.id, "g1");
    let calls = conn.calls();
    assert_eq!(calls[0].path, "team/W1/goal");
    assert_eq!(
        calls[0].body,
        Some(json!({
            "name": "Q3",
            "due_date": due.timestamp_millis(),
            "description": "",
            "multiple_owners": true,
            "owners": [1, 2],
            "color": "#32a852",
        }))
    );
}

#[tokio::test]
async fn test_create_key_result_skips_empty_links() {
    let conn = ScriptedConnection::new();
    conn.reply(json!({ "key_result": { "id": "kr1", "name": "Tarefas" } }));
    let cancel = CancellationToken::new();

    client(&conn)
        .fluent()
        .create_key_result("g1")
        .with_name("Tarefas")
        .with_owners(vec![1, 2])
        .with_type("automatic")
        .with_steps(0.0, 10.0)
        .with_unit("tasks")
        .with_list_ids(vec!["L1".into()])
        .create(&cancel)
        .await
        .unwrap();

    let calls = conn.calls();
    assert_eq!(calls[0].path, "goal/g1/key_result");
    assert_eq!(
        calls[0].body,
        Some(json!({
            "name": "Tarefas",
            "owners": [1, 2],
            "type": "automatic",
            "steps_start": 0.0,
            "steps_end": 10.0,
            "unit": "tasks",
            "list_ids": ["L1"],
        }))
    );
}

// ==================== PESSOAS ====================

#[tokio::test]
async fn test_invite_user_with_custom_role() {
    let conn = ScriptedConnection::new();
    conn.reply(json!({ "team": { "id": "W1", "name": "Nordja" } }));
    let cancel = CancellationToken::new();

    let workspace = client(&conn)
        .fluent()
        .invite_user("W1")
        .with_email("bia@ex.com")
        .with_custom_role(3)
        .invite(&cancel)
        .await
        .unwrap();

    assert_eq!(workspace.name, "Nordja");
    assert_eq!(
        conn.calls()[0].body,
        Some(json!({ "email": "bia@ex.com", "admin": false, "custom_role_id": 3 }))
    );
}

#[tokio::test]
async fn test_invite_guest_flattens_permissions() {
    let conn = ScriptedConnection::new();
    conn.reply(json!({ "team": { "id": "W1", "name": "Nordja" } }));
    let cancel = CancellationToken::new();

    client(&conn)
        .fluent()
        .invite_guest("W1")
        .with_email("ana@ex.com")
        .with_can_see_time_spent(true)
        .with_can_create_views(false)
        .invite(&cancel)
        .await
        .unwrap();

    let calls = conn.calls();
    assert_eq!(calls[0].path, "team/W1/guest");
    assert_eq!(
        calls[0].body,
        Some(json!({
            "email": "ana@ex.com",
            "can_see_time_spent": true,
            "can_create_views": false,
        }))
    );
}

#[tokio::test]
async fn test_create_user_group_decodes_group_directly() {
    let conn = ScriptedConnection::new();
    conn.reply(json!({ "id": "G1", "name": "Suporte", "handle": "suporte" }));
    let cancel = CancellationToken::new();

    let group = client(&conn)
        .fluent()
        .create_user_group("W1")
        .with_name("Suporte")
        .with_handle("suporte")
        .with_members(vec![7, 8])
        .create(&cancel)
        .await
        .unwrap();

    assert_eq!(group.handle.as_deref(), Some("suporte"));
    let calls = conn.calls();
    assert_eq!(calls[0].path, "team/W1/group");
    assert_eq!(
        calls[0].body,
        Some(json!({ "name": "Suporte", "handle": "suporte", "members": [7, 8] }))
    );
}

// ==================== V3: DOCS E CHAT ====================

#[tokio::test]
async fn test_search_docs_returns_cursor() {
    let conn = ScriptedConnection::new();
    conn.reply(json!({ "docs": [{ "id": "d1", "name": "Manual" }], "next_cursor": "n2" }));
    let cancel = CancellationToken::new();

    let page = client(&conn)
        .fluent()
        .search_docs("W1")
        .with_parent("S1", "SPACE")
        .with_archived(false)
        .with_limit(10)
        .search(&cancel)
        .await
        .unwrap();

    assert_eq!(page.items[0].name, "Manual");
    assert_eq!(page.next.as_deref(), Some("n2"));
    assert_eq!(
        conn.paths(),
        vec!["v3/workspaces/W1/docs?archived=false&parent_id=S1&parent_type=SPACE&limit=10"]
    );
}

#[tokio::test]
async fn test_create_doc_with_parent() {
    let conn = ScriptedConnection::new();
    conn.reply(json!({ "id": "d1", "name": "Manual" }));
    let cancel = CancellationToken::new();

    let doc = client(&conn)
        .fluent()
        .create_doc("W1")
        .with_name("Manual")
        .with_parent("S1", 4)
        .with_visibility("PRIVATE")
        .with_create_page(false)
        .create(&cancel)
        .await
        .unwrap();

    assert_eq!(doc.id, "d1");
    let calls = conn.calls();
    assert_eq!(calls[0].path, "v3/workspaces/W1/docs");
    assert_eq!(
        calls[0].body,
        Some(json!({
            "name": "Manual",
            "parent": { "id": "S1", "type": 4 },
            "visibility": "PRIVATE",
            "create_page": false,
        }))
    );
}

#[tokio::test]
async fn test_create_page_under_parent_page() {
    let conn = ScriptedConnection::new();
    conn.reply(json!({ "id": "p2", "name": "Instalação", "doc_id": "d1" }));
    let cancel = CancellationToken::new();

    let page = client(&conn)
        .fluent()
        .create_page("W1", "d1")
        .with_name("Instalação")
        .with_parent_page("p1")
        .with_content("# Passos")
        .with_content_format("text/md")
        .create(&cancel)
        .await
        .unwrap();

    assert_eq!(page.doc_id.as_deref(), Some("d1"));
    let calls = conn.calls();
    assert_eq!(calls[0].path, "v3/workspaces/W1/docs/d1/pages");
    assert_eq!(
        calls[0].body,
        Some(json!({
            "parent_page_id": "p1",
            "name": "Instalação",
            "content": "# Passos",
            "content_format": "text/md",
        }))
    );
}

#[tokio::test]
async fn test_create_chat_channel_unwraps_data() {
    let conn = ScriptedConnection::new();
    conn.reply(json!({ "data": { "id": "CH1", "name": "suporte" } }));
    let cancel = CancellationToken::new();

    let channel = client(&conn)
        .fluent()
        .create_chat_channel("W1")
        .with_name("suporte")
        .with_topic("Chamados")
        .with_members(vec!["7".into()])
        .with_visibility("PRIVATE")
        .create(&cancel)
        .await
        .unwrap();

    assert_eq!(channel.id, "CH1");
    let calls = conn.calls();
    assert_eq!(calls[0].path, "v3/workspaces/W1/chat/channels");
    assert_eq!(
        calls[0].body,
        Some(json!({
            "name": "suporte",
            "topic": "Chamados",
            "user_ids": ["7"],
            "visibility": "PRIVATE",
        }))
    );
}
