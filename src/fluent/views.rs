//! Builders de views e webhooks

use serde_json::Value;
use tokio_util::sync::CancellationToken;

use crate::error::Result;
use crate::models::{CreateWebhookRequest, View, ViewRequest, Webhook};
use crate::services::{ViewsService, WebhooksService};

/// Nível da hierarquia onde a view é criada
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewTarget {
    Workspace(String),
    Space(String),
    Folder(String),
    List(String),
}

pub struct ViewCreateBuilder {
    service: ViewsService,
    target: ViewTarget,
    request: ViewRequest,
}

impl ViewCreateBuilder {
    pub fn new(service: ViewsService, target: ViewTarget) -> Self {
        Self {
            service,
            target,
            request: ViewRequest::default(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.request.name = name.into();
        self
    }

    /// list, board, calendar, table, timeline, workload, activity, map, conversation ou gantt
    pub fn with_type(mut self, view_type: impl Into<String>) -> Self {
        self.request.view_type = view_type.into();
        self
    }

    pub fn with_grouping(mut self, grouping: Value) -> Self {
        self.request.grouping = Some(grouping);
        self
    }

    pub fn with_sorting(mut self, sorting: Value) -> Self {
        self.request.sorting = Some(sorting);
        self
    }

    pub fn with_filters(mut self, filters: Value) -> Self {
        self.request.filters = Some(filters);
        self
    }

    pub fn with_columns(mut self, columns: Value) -> Self {
        self.request.columns = Some(columns);
        self
    }

    pub fn with_settings(mut self, settings: Value) -> Self {
        self.request.settings = Some(settings);
        self
    }

    pub async fn create(self, cancel: &CancellationToken) -> Result<View> {
        let service = &self.service;
        let request = &self.request;
        match &self.target {
            ViewTarget::Workspace(id) => service.create_workspace_view(id, request, cancel).await,
            ViewTarget::Space(id) => service.create_space_view(id, request, cancel).await,
            ViewTarget::Folder(id) => service.create_folder_view(id, request, cancel).await,
            ViewTarget::List(id) => service.create_list_view(id, request, cancel).await,
        }
    }
}

/// Registra um webhook no workspace
pub struct WebhookCreateBuilder {
    service: WebhooksService,
    workspace_id: String,
    request: CreateWebhookRequest,
}

impl WebhookCreateBuilder {
    pub fn new(service: WebhooksService, workspace_id: impl Into<String>) -> Self {
        Self {
            service,
            workspace_id: workspace_id.into(),
            request: CreateWebhookRequest::default(),
        }
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.request.endpoint = endpoint.into();
        self
    }

    /// Ex: `taskCreated`, `taskUpdated`; `*` assina todos
    pub fn with_events(mut self, events: Vec<String>) -> Self {
        self.request.events = events;
        self
    }

    pub fn with_space(mut self, space_id: i64) -> Self {
        self.request.space_id = Some(space_id);
        self
    }

    pub fn with_folder(mut self, folder_id: i64) -> Self {
        self.request.folder_id = Some(folder_id);
        self
    }

    pub fn with_list(mut self, list_id: i64) -> Self {
        self.request.list_id = Some(list_id);
        self
    }

    pub fn with_task(mut self, task_id: impl Into<String>) -> Self {
        self.request.task_id = Some(task_id.into());
        self
    }

    pub async fn create(self, cancel: &CancellationToken) -> Result<Webhook> {
        self.service
            .create_webhook(&self.workspace_id, &self.request, cancel)
            .await
    }
}
