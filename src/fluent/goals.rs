use chrono::{DateTime, Utc};
use tokio_util::sync::CancellationToken;

use crate::error::Result;
use crate::models::{CreateGoalRequest, CreateKeyResultRequest, Goal, KeyResult};
use crate::services::GoalsService;

pub struct GoalCreateBuilder {
    service: GoalsService,
    workspace_id: String,
    name: Option<String>,
    due_date: Option<i64>,
    description: Option<String>,
    multiple_owners: Option<bool>,
    owners: Vec<i64>,
    color: Option<String>,
}

impl GoalCreateBuilder {
    pub fn new(service: GoalsService, workspace_id: impl Into<String>) -> Self {
        Self {
            service,
            workspace_id: workspace_id.into(),
            name: None,
            due_date: None,
            description: None,
            multiple_owners: None,
            owners: Vec::new(),
            color: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_due_date(mut self, due_date: DateTime<Utc>) -> Self {
        self.due_date = Some(due_date.timestamp_millis());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_owners(mut self, owners: Vec<i64>) -> Self {
        self.multiple_owners = Some(owners.len() > 1);
        self.owners = owners;
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub async fn create(self, cancel: &CancellationToken) -> Result<Goal> {
        let request = CreateGoalRequest {
            name: self.name.unwrap_or_default(),
            due_date: self.due_date.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
            multiple_owners: self.multiple_owners.unwrap_or_default(),
            owners: self.owners,
            color: self.color.unwrap_or_default(),
        };
        self.service
            .create_goal(&self.workspace_id, &request, cancel)
            .await
    }
}

/// Cria um key result (target) dentro de um goal
pub struct KeyResultCreateBuilder {
    service: GoalsService,
    goal_id: String,
    request: CreateKeyResultRequest,
}

impl KeyResultCreateBuilder {
    pub fn new(service: GoalsService, goal_id: impl Into<String>) -> Self {
        Self {
            service,
            goal_id: goal_id.into(),
            request: CreateKeyResultRequest::default(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.request.name = name.into();
        self
    }

    pub fn with_owners(mut self, owners: Vec<i64>) -> Self {
        self.request.owners = owners;
        self
    }

    /// number, currency, boolean, percentage ou automatic
    pub fn with_type(mut self, key_result_type: impl Into<String>) -> Self {
        self.request.key_result_type = key_result_type.into();
        self
    }

    pub fn with_steps(mut self, start: f64, end: f64) -> Self {
        self.request.steps_start = start;
        self.request.steps_end = end;
        self
    }

    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.request.unit = unit.into();
        self
    }

    pub fn with_task_ids(mut self, task_ids: Vec<String>) -> Self {
        self.request.task_ids = task_ids;
        self
    }

    pub fn with_list_ids(mut self, list_ids: Vec<String>) -> Self {
        self.request.list_ids = list_ids;
        self
    }

    pub async fn create(self, cancel: &CancellationToken) -> Result<KeyResult> {
        self.service
            .create_key_result(&self.goal_id, &self.request, cancel)
            .await
    }
}
