//! Builders de spaces, folders, lists e checklists

use chrono::{DateTime, Utc};
use serde_json::Value;
use tokio_util::sync::CancellationToken;

use crate::error::Result;
use crate::models::{
    Checklist, CreateChecklistItemRequest, CreateListRequest, CreateSpaceRequest, Folder,
    FolderNameRequest, List, Space, TaskPriority,
};
use crate::services::{ChecklistsService, FoldersService, ListsService, SpacesService};

pub struct SpaceCreateBuilder {
    service: SpacesService,
    workspace_id: String,
    name: Option<String>,
    multiple_assignees: Option<bool>,
    features: Option<Value>,
}

impl SpaceCreateBuilder {
    pub fn new(service: SpacesService, workspace_id: impl Into<String>) -> Self {
        Self {
            service,
            workspace_id: workspace_id.into(),
            name: None,
            multiple_assignees: None,
            features: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_multiple_assignees(mut self, enabled: bool) -> Self {
        self.multiple_assignees = Some(enabled);
        self
    }

    /// Ex: `json!({"due_dates": {"enabled": true}, "time_tracking": {"enabled": false}})`
    pub fn with_features(mut self, features: Value) -> Self {
        self.features = Some(features);
        self
    }

    pub async fn create(self, cancel: &CancellationToken) -> Result<Space> {
        let request = CreateSpaceRequest {
            name: self.name.unwrap_or_default(),
            multiple_assignees: self.multiple_assignees.unwrap_or_default(),
            features: self.features,
        };
        self.service
            .create_space(&self.workspace_id, &request, cancel)
            .await
    }
}

pub struct FolderCreateBuilder {
    service: FoldersService,
    space_id: String,
    name: Option<String>,
}

impl FolderCreateBuilder {
    pub fn new(service: FoldersService, space_id: impl Into<String>) -> Self {
        Self {
            service,
            space_id: space_id.into(),
            name: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub async fn create(self, cancel: &CancellationToken) -> Result<Folder> {
        let request = FolderNameRequest {
            name: self.name.unwrap_or_default(),
        };
        self.service
            .create_folder(&self.space_id, &request, cancel)
            .await
    }
}

/// Local da nova list: dentro de um folder ou direto no space
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListParent {
    Folder(String),
    Space(String),
}

pub struct ListCreateBuilder {
    service: ListsService,
    parent: ListParent,
    name: Option<String>,
    content: Option<String>,
    markdown_content: Option<String>,
    due_date: Option<i64>,
    priority: Option<TaskPriority>,
    assignee: Option<i64>,
    status: Option<String>,
}

impl ListCreateBuilder {
    pub fn new(service: ListsService, parent: ListParent) -> Self {
        Self {
            service,
            parent,
            name: None,
            content: None,
            markdown_content: None,
            due_date: None,
            priority: None,
            assignee: None,
            status: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn with_markdown_content(mut self, markdown: impl Into<String>) -> Self {
        self.markdown_content = Some(markdown.into());
        self
    }

    pub fn with_due_date(mut self, due_date: DateTime<Utc>) -> Self {
        self.due_date = Some(due_date.timestamp_millis());
        self
    }

    pub fn with_priority(mut self, priority: TaskPriority) -> Self {
        self.priority = Some(priority);
        self
    }

    pub fn with_assignee(mut self, user_id: i64) -> Self {
        self.assignee = Some(user_id);
        self
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    pub async fn create(self, cancel: &CancellationToken) -> Result<List> {
        let request = CreateListRequest {
            name: self.name.unwrap_or_default(),
            content: self.content,
            markdown_content: self.markdown_content,
            due_date: self.due_date,
            due_date_time: None,
            priority: self.priority,
            assignee: self.assignee,
            status: self.status,
        };

        match &self.parent {
            ListParent::Folder(folder_id) => {
                self.service.create_list(folder_id, &request, cancel).await
            }
            ListParent::Space(space_id) => {
                self.service
                    .create_folderless_list(space_id, &request, cancel)
                    .await
            }
        }
    }
}

/// Adiciona um item a uma checklist existente
pub struct ChecklistItemAddBuilder {
    service: ChecklistsService,
    checklist_id: String,
    name: Option<String>,
    assignee: Option<i64>,
}

impl ChecklistItemAddBuilder {
    pub fn new(service: ChecklistsService, checklist_id: impl Into<String>) -> Self {
        Self {
            service,
            checklist_id: checklist_id.into(),
            name: None,
            assignee: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_assignee(mut self, user_id: i64) -> Self {
        self.assignee = Some(user_id);
        self
    }

    pub async fn add(self, cancel: &CancellationToken) -> Result<Checklist> {
        let request = CreateChecklistItemRequest {
            name: self.name.unwrap_or_default(),
            assignee: self.assignee,
        };
        self.service
            .create_checklist_item(&self.checklist_id, &request, cancel)
            .await
    }
}
