use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{Status, Tag, User};

/// Space do workspace
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Space {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub private: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin_can_manage: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub archived: Option<bool>,
    #[serde(default)]
    pub members: Vec<SpaceMember>,
    #[serde(default)]
    pub statuses: Vec<Status>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub multiple_assignees: Option<bool>,
    /// Features habilitadas (due_dates, time_tracking, tags, ...); formato varia
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub features: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpaceMember {
    pub user: User,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GetSpacesResponse {
    #[serde(default)]
    pub spaces: Option<Vec<Space>>,
}

/// Payload de `POST team/{team_id}/space`
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CreateSpaceRequest {
    pub name: String,
    pub multiple_assignees: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub features: Option<Value>,
}

/// Payload de `PUT space/{space_id}`
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UpdateSpaceRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_can_manage: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub multiple_assignees: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub features: Option<Value>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GetTagsResponse {
    #[serde(default)]
    pub tags: Option<Vec<Tag>>,
}

/// Payload `{"tag": {...}}` de criação de tag no space
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateTagRequest {
    pub tag: Tag,
}

/// Payload de `PUT space/{space_id}/tag/{tag_name}`
///
/// A edição usa `fg_color`/`bg_color` em vez de `tag_fg`/`tag_bg`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EditTagRequest {
    pub tag: EditTag,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EditTag {
    pub name: String,
    pub fg_color: String,
    pub bg_color: String,
}
