use chrono::{DateTime, Utc};
use tokio_util::sync::CancellationToken;

use crate::error::Result;
use crate::models::{
    CreateTimeEntryRequest, CustomTaskIdOptions, GetTimeEntriesQuery, StartTimeEntryRequest,
    TimeEntry, TimeEntryTag,
};
use crate::services::TimeTrackingService;

/// Registra um intervalo de tempo já concluído
pub struct TimeEntryCreateBuilder {
    service: TimeTrackingService,
    workspace_id: String,
    request: CreateTimeEntryRequest,
    task_ids: CustomTaskIdOptions,
}

impl TimeEntryCreateBuilder {
    pub fn new(service: TimeTrackingService, workspace_id: impl Into<String>) -> Self {
        Self {
            service,
            workspace_id: workspace_id.into(),
            request: CreateTimeEntryRequest::default(),
            task_ids: CustomTaskIdOptions::default(),
        }
    }

    pub fn with_start(mut self, start: DateTime<Utc>) -> Self {
        self.request.start = start.timestamp_millis();
        self
    }

    /// Duração em milissegundos
    pub fn with_duration(mut self, millis: i64) -> Self {
        self.request.duration = millis;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.request.description = Some(description.into());
        self
    }

    pub fn with_task(mut self, task_id: impl Into<String>) -> Self {
        self.request.tid = Some(task_id.into());
        self
    }

    pub fn with_billable(mut self, billable: bool) -> Self {
        self.request.billable = Some(billable);
        self
    }

    pub fn with_assignee(mut self, user_id: i64) -> Self {
        self.request.assignee = Some(user_id);
        self
    }

    pub fn with_tag(mut self, name: impl Into<String>) -> Self {
        self.request.tags.push(TimeEntryTag::new(name));
        self
    }

    pub fn with_custom_task_ids(mut self, team_id: impl Into<String>) -> Self {
        self.task_ids = CustomTaskIdOptions::custom(team_id);
        self
    }

    pub async fn create(self, cancel: &CancellationToken) -> Result<TimeEntry> {
        self.service
            .create_time_entry(&self.workspace_id, &self.request, &self.task_ids, cancel)
            .await
    }
}

/// Consulta time entries do workspace por período e localização
pub struct TimeEntriesQueryBuilder {
    service: TimeTrackingService,
    workspace_id: String,
    query: GetTimeEntriesQuery,
}

impl TimeEntriesQueryBuilder {
    pub fn new(service: TimeTrackingService, workspace_id: impl Into<String>) -> Self {
        Self {
            service,
            workspace_id: workspace_id.into(),
            query: GetTimeEntriesQuery::default(),
        }
    }

    pub fn with_date_range(mut self, start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        self.query.start_date = Some(start.timestamp_millis());
        self.query.end_date = Some(end.timestamp_millis());
        self
    }

    /// IDs de usuário; vários são enviados separados por vírgula
    pub fn with_assignees(mut self, user_ids: &[i64]) -> Self {
        let joined = user_ids
            .iter()
            .map(|id| id.to_string())
            .collect::<Vec<_>>()
            .join(",");
        self.query.assignee = Some(joined);
        self
    }

    pub fn with_task_tags(mut self, include: bool) -> Self {
        self.query.include_task_tags = Some(include);
        self
    }

    pub fn with_location_names(mut self, include: bool) -> Self {
        self.query.include_location_names = Some(include);
        self
    }

    pub fn with_space(mut self, space_id: impl Into<String>) -> Self {
        self.query.space_id = Some(space_id.into());
        self
    }

    pub fn with_folder(mut self, folder_id: impl Into<String>) -> Self {
        self.query.folder_id = Some(folder_id.into());
        self
    }

    pub fn with_list(mut self, list_id: impl Into<String>) -> Self {
        self.query.list_id = Some(list_id.into());
        self
    }

    pub fn with_task(mut self, task_id: impl Into<String>) -> Self {
        self.query.task_id = Some(task_id.into());
        self
    }

    pub async fn get(self, cancel: &CancellationToken) -> Result<Vec<TimeEntry>> {
        self.service
            .get_time_entries(&self.workspace_id, &self.query, cancel)
            .await
    }
}

/// Inicia um timer para o usuário autenticado
pub struct TimerStartBuilder {
    service: TimeTrackingService,
    workspace_id: String,
    request: StartTimeEntryRequest,
    task_ids: CustomTaskIdOptions,
}

impl TimerStartBuilder {
    pub fn new(service: TimeTrackingService, workspace_id: impl Into<String>) -> Self {
        Self {
            service,
            workspace_id: workspace_id.into(),
            request: StartTimeEntryRequest::default(),
            task_ids: CustomTaskIdOptions::default(),
        }
    }

    pub fn with_task(mut self, task_id: impl Into<String>) -> Self {
        self.request.tid = Some(task_id.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.request.description = Some(description.into());
        self
    }

    pub fn with_billable(mut self, billable: bool) -> Self {
        self.request.billable = Some(billable);
        self
    }

    pub fn with_tag(mut self, name: impl Into<String>) -> Self {
        self.request.tags.push(TimeEntryTag::new(name));
        self
    }

    pub fn with_custom_task_ids(mut self, team_id: impl Into<String>) -> Self {
        self.task_ids = CustomTaskIdOptions::custom(team_id);
        self
    }

    pub async fn start(self, cancel: &CancellationToken) -> Result<TimeEntry> {
        self.service
            .start_time_entry(&self.workspace_id, &self.request, &self.task_ids, cancel)
            .await
    }
}
