//! Time tracking
//!
//! Timestamps em milissegundos. Um timer em andamento tem `duration` negativa
//! e `end` ausente.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{Status, User};
use crate::query::QueryBuilder;

/// Resumo da task associada a um time entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeEntryTask {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_type: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeEntryTag {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag_bg: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag_fg: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creator: Option<i64>,
}

impl TimeEntryTag {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tag_bg: None,
            tag_fg: None,
            creator: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeEntry {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task: Option<TimeEntryTask>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wid: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub billable: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub tags: Vec<TimeEntryTag>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task_location: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task_url: Option<String>,
}

impl TimeEntry {
    /// `true` enquanto o timer está rodando
    pub fn is_running(&self) -> bool {
        self.end.is_none()
            && self
                .duration
                .as_deref()
                .map(|d| d.starts_with('-'))
                .unwrap_or(false)
    }
}

/// Alteração registrada no histórico de um time entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeEntryHistory {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub before: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub after: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
}

/// Envelope `{"data": ...}` usado por todo o time tracking
#[derive(Debug, Clone, Deserialize)]
pub struct DataResponse<T> {
    #[serde(default = "Option::default")]
    pub data: Option<T>,
}

/// Filtros de `GET team/{team_id}/time_entries`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetTimeEntriesQuery {
    pub start_date: Option<i64>,
    pub end_date: Option<i64>,
    /// IDs de usuários separados por vírgula
    pub assignee: Option<String>,
    pub include_task_tags: Option<bool>,
    pub include_location_names: Option<bool>,
    pub space_id: Option<String>,
    pub folder_id: Option<String>,
    pub list_id: Option<String>,
    pub task_id: Option<String>,
    pub custom_task_ids: Option<bool>,
    pub team_id: Option<String>,
}

impl GetTimeEntriesQuery {
    pub(crate) fn to_query(&self) -> QueryBuilder {
        QueryBuilder::new()
            .opt("start_date", self.start_date)
            .opt("end_date", self.end_date)
            .opt("assignee", self.assignee.as_deref())
            .opt("include_task_tags", self.include_task_tags)
            .opt("include_location_names", self.include_location_names)
            .opt("space_id", self.space_id.as_deref())
            .opt("folder_id", self.folder_id.as_deref())
            .opt("list_id", self.list_id.as_deref())
            .opt("task_id", self.task_id.as_deref())
            .opt("custom_task_ids", self.custom_task_ids)
            .opt("team_id", self.team_id.as_deref())
    }
}

/// Payload de `POST team/{team_id}/time_entries`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CreateTimeEntryRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<TimeEntryTag>,
    pub start: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billable: Option<bool>,
    pub duration: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee: Option<i64>,
    /// ID da task
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tid: Option<String>,
}

/// Payload de `PUT team/{team_id}/time_entries/{timer_id}`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UpdateTimeEntryRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<TimeEntryTag>,
    /// `add` ou `remove`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag_action: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<i64>,
}

/// Payload de `POST team/{team_id}/time_entries/start`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StartTimeEntryRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<TimeEntryTag>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billable: Option<bool>,
}

/// Payload para adicionar/remover tags de vários time entries
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TimeEntryTagsRequest {
    pub time_entry_ids: Vec<String>,
    pub tags: Vec<TimeEntryTag>,
}

/// Payload de `PUT team/{team_id}/time_entries/tags`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RenameTimeEntryTagRequest {
    pub name: String,
    pub new_name: String,
    pub tag_bg: String,
    pub tag_fg: String,
}
