use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::User;

/// Checklist de uma task
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Checklist {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task_id: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub orderindex: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolved: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unresolved: Option<i64>,
    #[serde(default)]
    pub items: Vec<ChecklistItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChecklistItem {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub orderindex: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignee: Option<User>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolved: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_created: Option<String>,
    #[serde(default)]
    pub children: Vec<Value>,
}

/// Envelope `{"checklist": {...}}`
#[derive(Debug, Clone, Deserialize)]
pub struct ChecklistResponse {
    #[serde(default)]
    pub checklist: Option<Checklist>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CreateChecklistRequest {
    pub name: String,
}

/// Payload de `PUT checklist/{checklist_id}` (renomear ou reordenar)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EditChecklistRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CreateChecklistItemRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee: Option<i64>,
}

/// Payload de `PUT checklist/{id}/checklist_item/{item_id}`
///
/// `parent` aninha o item dentro de outro item da mesma checklist.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EditChecklistItemRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolved: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
}
