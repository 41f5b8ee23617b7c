//! Comentários de tasks, lists e views de chat

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{CustomTaskIdOptions, User};
use crate::query::QueryBuilder;

/// Comentário retornado pela API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    /// ID do comentário (também usado como cursor `start_id`)
    pub id: String,

    /// Conteúdo em rich text (blocos `{"text": ..., "attributes": ...}`)
    #[serde(default)]
    pub comment: Vec<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment_text: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignee: Option<User>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_by: Option<User>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolved: Option<bool>,

    #[serde(default)]
    pub reactions: Vec<Value>,

    /// Timestamp em ms (string)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply_count: Option<Value>,
}

/// Envelope `{"comments": [...]}` usado por todas as listagens de comentários
#[derive(Debug, Clone, Deserialize)]
pub struct GetCommentsResponse {
    #[serde(default)]
    pub comments: Option<Vec<Comment>>,
}

/// Payload de criação de comentário (task, list, view ou reply)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CreateCommentRequest {
    pub comment_text: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_assignee: Option<String>,

    pub notify_all: bool,
}

impl CreateCommentRequest {
    pub fn new(comment_text: impl Into<String>) -> Self {
        Self {
            comment_text: comment_text.into(),
            ..Default::default()
        }
    }
}

/// Resposta de criação: o ID vem numérico em alguns endpoints e string em outros
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateCommentResponse {
    pub id: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hist_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<i64>,
}

/// Payload de `PUT comment/{comment_id}`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UpdateCommentRequest {
    pub comment_text: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_assignee: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolved: Option<bool>,
}

/// Cursor de comentários: `start` (timestamp) só na primeira página,
/// `start_id` (ID do último comentário recebido) nas seguintes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommentCursor {
    Start(Option<i64>),
    StartId(String),
}

impl CommentCursor {
    pub(crate) fn apply(&self, query: QueryBuilder) -> QueryBuilder {
        match self {
            Self::Start(start) => query.opt("start", *start),
            Self::StartId(id) => query.push("start_id", id),
        }
    }
}

/// Parâmetros de uma página de `GET task/{task_id}/comment`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetTaskCommentsQuery {
    pub task_ids: CustomTaskIdOptions,
    /// Timestamp Unix (ms) do comentário mais recente a retornar
    pub start: Option<i64>,
    pub start_id: Option<String>,
}

impl GetTaskCommentsQuery {
    pub(crate) fn to_query(&self) -> QueryBuilder {
        self.task_ids
            .apply(QueryBuilder::new())
            .opt("start", self.start)
            .opt("start_id", self.start_id.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_cursor_switches_from_start_to_start_id() {
        let first = CommentCursor::Start(Some(0)).apply(QueryBuilder::new());
        assert_eq!(first.build("task/t/comment"), "task/t/comment?start=0");

        let next = CommentCursor::StartId("42".to_string()).apply(QueryBuilder::new());
        assert_eq!(next.build("task/t/comment"), "task/t/comment?start_id=42");
    }

    #[test]
    fn test_create_comment_serialization() {
        let request = CreateCommentRequest {
            assignee: Some(183),
            ..CreateCommentRequest::new("Olá")
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({ "comment_text": "Olá", "assignee": 183, "notify_all": false })
        );
    }

    #[test]
    fn test_comment_with_string_id() {
        let comment: Comment = serde_json::from_value(json!({
            "id": "458",
            "comment": [{ "text": "Task comment content" }],
            "comment_text": "Task comment content",
            "user": { "id": 183, "username": "John Doe" },
            "resolved": false,
            "date": "1568036964079"
        }))
        .unwrap();
        assert_eq!(comment.id, "458");
        assert_eq!(comment.comment.len(), 1);
    }
}
