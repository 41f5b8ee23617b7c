use serde::{Deserialize, Serialize};

use super::{EntityRef, List, Status};

/// Folder dentro de um space
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Folder {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub orderindex: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub override_statuses: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hidden: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub space: Option<EntityRef>,
    /// A API retorna como string
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task_count: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub archived: Option<bool>,
    #[serde(default)]
    pub statuses: Vec<Status>,
    #[serde(default)]
    pub lists: Vec<List>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GetFoldersResponse {
    #[serde(default)]
    pub folders: Option<Vec<Folder>>,
}

/// Payload de criação/renomeação de folder
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FolderNameRequest {
    pub name: String,
}

/// Payload de `POST space/{space_id}/folder_template/{template_id}`
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CreateFromTemplateRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<TemplateOptions>,
}

/// Opções aplicadas ao criar folder/list a partir de template
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TemplateOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_immediately: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_estimate: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub automation: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_views: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub old_due_date: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub old_start_date: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub old_followers: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment_attachments: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recur_settings: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub old_tags: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub old_statuses: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtasks: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_type: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub old_assignees: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachments: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub old_status: Option<bool>,
}
