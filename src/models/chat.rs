//! Chat (API v3): canais, mensagens, reações e respostas

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::query::QueryBuilder;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatChannel {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,
    /// CHANNEL, DM ou GROUP_DM
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub channel_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visibility: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creator: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workspace_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub archived: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_channel: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_message: Option<String>,
    /// message ou post
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub message_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_updated: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolved: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replies_count: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatReaction {
    pub reaction: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<Value>,
}

/// Página `{"data": [...], "next_cursor": "..."}` dos endpoints v3 de chat
#[derive(Debug, Clone, Deserialize)]
pub struct CursorPage<T> {
    #[serde(default = "Option::default")]
    pub data: Option<Vec<T>>,
    #[serde(default)]
    pub next_cursor: Option<String>,
}

/// Filtros de listagem de canais
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetChatChannelsQuery {
    pub description_format: Option<String>,
    pub cursor: Option<String>,
    pub limit: Option<i32>,
    pub is_follower: Option<bool>,
    pub include_hidden: Option<bool>,
    pub with_comment_since: Option<i64>,
    pub room_types: Vec<String>,
}

impl GetChatChannelsQuery {
    pub(crate) fn to_query(&self) -> QueryBuilder {
        QueryBuilder::new()
            .opt("description_format", self.description_format.as_deref())
            .opt("cursor", self.cursor.as_deref())
            .opt("limit", self.limit)
            .opt("is_follower", self.is_follower)
            .opt("include_hidden", self.include_hidden)
            .opt("with_comment_since", self.with_comment_since)
            .array("room_types", &self.room_types)
    }
}

/// Paginação simples (`cursor` + `limit`) de mensagens, reações e respostas
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChatPageQuery {
    pub cursor: Option<String>,
    pub limit: Option<i32>,
    /// `text/md` ou `text/plain`
    pub content_format: Option<String>,
}

impl ChatPageQuery {
    pub(crate) fn to_query(&self) -> QueryBuilder {
        QueryBuilder::new()
            .opt("cursor", self.cursor.as_deref())
            .opt("limit", self.limit)
            .opt("content_format", self.content_format.as_deref())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CreateChatChannelRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub user_ids: Vec<String>,
    /// PUBLIC ou PRIVATE
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visibility: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UpdateChatChannelRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visibility: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub archived: Option<bool>,
}

/// Mensagem nova (também usada para respostas)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CreateChatMessageRequest {
    #[serde(rename = "type")]
    pub message_type: String,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_format: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub followers: Vec<String>,
}

impl CreateChatMessageRequest {
    pub fn message(content: impl Into<String>) -> Self {
        Self {
            message_type: "message".to_string(),
            content: content.into(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UpdateChatMessageRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolved: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CreateReactionRequest {
    pub reaction: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_channels_query_with_room_types() {
        let query = GetChatChannelsQuery {
            limit: Some(50),
            room_types: vec!["CHANNEL".to_string(), "DM".to_string()],
            ..Default::default()
        };
        assert_eq!(
            query.to_query().build("v3/workspaces/1/chat/channels"),
            "v3/workspaces/1/chat/channels?limit=50&room_types[]=CHANNEL&room_types[]=DM"
        );
    }

    #[test]
    fn test_message_request_type_rename() {
        assert_eq!(
            serde_json::to_value(CreateChatMessageRequest::message("oi")).unwrap(),
            json!({ "type": "message", "content": "oi" })
        );
    }
}
