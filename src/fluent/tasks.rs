//! Builders de tasks: criação, alteração, consulta e dependências

use chrono::{DateTime, Utc};
use tokio_util::sync::CancellationToken;

use crate::error::Result;
use crate::models::{
    AddDependencyRequest, CreateTaskRequest, CustomFieldValueRequest, CustomTaskIdOptions,
    GetTasksQuery, MembersUpdate, Task, TaskPriority, TasksPage, UpdateTaskRequest,
};
use crate::services::{TaskRelationshipsService, TasksService};

/// Cria uma task com os campos acumulados
///
/// ```rust,ignore
/// let task = client
///     .fluent()
///     .create_task("list_123")
///     .with_name("Revisar contrato")
///     .with_priority(TaskPriority::High)
///     .with_tags(vec!["juridico".into()])
///     .create(&cancel)
///     .await?;
/// ```
pub struct TaskCreateBuilder {
    service: TasksService,
    list_id: String,
    name: Option<String>,
    description: Option<String>,
    markdown_description: Option<String>,
    assignees: Vec<i64>,
    tags: Vec<String>,
    status: Option<String>,
    priority: Option<TaskPriority>,
    due_date: Option<i64>,
    start_date: Option<i64>,
    time_estimate: Option<i64>,
    points: Option<f64>,
    parent: Option<String>,
    notify_all: Option<bool>,
    custom_fields: Vec<CustomFieldValueRequest>,
    task_ids: CustomTaskIdOptions,
}

impl TaskCreateBuilder {
    pub fn new(service: TasksService, list_id: impl Into<String>) -> Self {
        Self {
            service,
            list_id: list_id.into(),
            name: None,
            description: None,
            markdown_description: None,
            assignees: Vec::new(),
            tags: Vec::new(),
            status: None,
            priority: None,
            due_date: None,
            start_date: None,
            time_estimate: None,
            points: None,
            parent: None,
            notify_all: None,
            custom_fields: Vec::new(),
            task_ids: CustomTaskIdOptions::default(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_markdown_description(mut self, markdown: impl Into<String>) -> Self {
        self.markdown_description = Some(markdown.into());
        self
    }

    pub fn with_assignees(mut self, assignees: Vec<i64>) -> Self {
        self.assignees = assignees;
        self
    }

    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    pub fn with_priority(mut self, priority: TaskPriority) -> Self {
        self.priority = Some(priority);
        self
    }

    pub fn with_due_date(mut self, due_date: DateTime<Utc>) -> Self {
        self.due_date = Some(due_date.timestamp_millis());
        self
    }

    pub fn with_start_date(mut self, start_date: DateTime<Utc>) -> Self {
        self.start_date = Some(start_date.timestamp_millis());
        self
    }

    /// Estimativa em milissegundos
    pub fn with_time_estimate(mut self, millis: i64) -> Self {
        self.time_estimate = Some(millis);
        self
    }

    pub fn with_points(mut self, points: f64) -> Self {
        self.points = Some(points);
        self
    }

    /// Cria como subtask da task informada
    pub fn with_parent(mut self, parent_task_id: impl Into<String>) -> Self {
        self.parent = Some(parent_task_id.into());
        self
    }

    pub fn with_notify_all(mut self, notify_all: bool) -> Self {
        self.notify_all = Some(notify_all);
        self
    }

    pub fn with_custom_field(mut self, field_id: impl Into<String>, value: serde_json::Value) -> Self {
        self.custom_fields.push(CustomFieldValueRequest {
            id: field_id.into(),
            value,
        });
        self
    }

    pub fn with_custom_task_ids(mut self, team_id: impl Into<String>) -> Self {
        self.task_ids = CustomTaskIdOptions::custom(team_id);
        self
    }

    fn build_request(&self) -> CreateTaskRequest {
        CreateTaskRequest {
            name: self.name.clone().unwrap_or_default(),
            description: self.description.clone(),
            markdown_description: self.markdown_description.clone(),
            assignees: self.assignees.clone(),
            tags: self.tags.clone(),
            status: self.status.clone(),
            priority: self.priority,
            due_date: self.due_date,
            start_date: self.start_date,
            time_estimate: self.time_estimate,
            points: self.points,
            parent: self.parent.clone(),
            notify_all: self.notify_all,
            custom_fields: self.custom_fields.clone(),
            ..Default::default()
        }
    }

    pub async fn create(self, cancel: &CancellationToken) -> Result<Task> {
        let request = self.build_request();
        self.service
            .create_task(&self.list_id, &request, &self.task_ids, cancel)
            .await
    }
}

/// Altera campos de uma task existente
pub struct TaskUpdateBuilder {
    service: TasksService,
    task_id: String,
    request: UpdateTaskRequest,
    task_ids: CustomTaskIdOptions,
}

impl TaskUpdateBuilder {
    pub fn new(service: TasksService, task_id: impl Into<String>) -> Self {
        Self {
            service,
            task_id: task_id.into(),
            request: UpdateTaskRequest::default(),
            task_ids: CustomTaskIdOptions::default(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.request.name = Some(name.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.request.description = Some(description.into());
        self
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.request.status = Some(status.into());
        self
    }

    pub fn with_priority(mut self, priority: TaskPriority) -> Self {
        self.request.priority = Some(priority);
        self
    }

    pub fn with_due_date(mut self, due_date: DateTime<Utc>) -> Self {
        self.request.due_date = Some(due_date.timestamp_millis());
        self
    }

    pub fn with_assignees(mut self, add: Vec<i64>, remove: Vec<i64>) -> Self {
        self.request.assignees = Some(MembersUpdate::add_and_remove(add, remove));
        self
    }

    pub fn with_archived(mut self, archived: bool) -> Self {
        self.request.archived = Some(archived);
        self
    }

    pub fn with_custom_task_ids(mut self, team_id: impl Into<String>) -> Self {
        self.task_ids = CustomTaskIdOptions::custom(team_id);
        self
    }

    pub async fn change(self, cancel: &CancellationToken) -> Result<Task> {
        self.service
            .update_task(&self.task_id, &self.request, &self.task_ids, cancel)
            .await
    }
}

/// Consulta uma página de tasks da list com filtros
pub struct TasksQueryBuilder {
    service: TasksService,
    list_id: String,
    query: GetTasksQuery,
}

impl TasksQueryBuilder {
    pub fn new(service: TasksService, list_id: impl Into<String>) -> Self {
        Self {
            service,
            list_id: list_id.into(),
            query: GetTasksQuery::default(),
        }
    }

    pub fn with_archived(mut self, archived: bool) -> Self {
        self.query.archived = Some(archived);
        self
    }

    pub fn with_page(mut self, page: i32) -> Self {
        self.query.page = Some(page);
        self
    }

    pub fn with_order_by(mut self, order_by: impl Into<String>) -> Self {
        self.query.order_by = Some(order_by.into());
        self
    }

    pub fn with_reverse(mut self, reverse: bool) -> Self {
        self.query.reverse = Some(reverse);
        self
    }

    pub fn with_subtasks(mut self, subtasks: bool) -> Self {
        self.query.subtasks = Some(subtasks);
        self
    }

    pub fn with_statuses(mut self, statuses: Vec<String>) -> Self {
        self.query.statuses = statuses;
        self
    }

    pub fn with_include_closed(mut self, include_closed: bool) -> Self {
        self.query.include_closed = Some(include_closed);
        self
    }

    pub fn with_assignees(mut self, assignees: Vec<String>) -> Self {
        self.query.assignees = assignees;
        self
    }

    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.query.tags = tags;
        self
    }

    pub fn with_due_date_between(mut self, after: DateTime<Utc>, before: DateTime<Utc>) -> Self {
        self.query.due_date_gt = Some(after.timestamp_millis());
        self.query.due_date_lt = Some(before.timestamp_millis());
        self
    }

    pub fn with_updated_after(mut self, after: DateTime<Utc>) -> Self {
        self.query.date_updated_gt = Some(after.timestamp_millis());
        self
    }

    /// Filtro JSON de custom fields, ex: `[{"field_id":"..","operator":"=","value":"x"}]`
    pub fn with_custom_fields(mut self, filter: impl Into<String>) -> Self {
        self.query.custom_fields = Some(filter.into());
        self
    }

    pub async fn get(self, cancel: &CancellationToken) -> Result<TasksPage> {
        self.service.get_tasks(&self.list_id, &self.query, cancel).await
    }
}

/// Adiciona uma dependência entre tasks
pub struct DependencyAddBuilder {
    service: TaskRelationshipsService,
    task_id: String,
    request: AddDependencyRequest,
    task_ids: CustomTaskIdOptions,
}

impl DependencyAddBuilder {
    pub fn new(service: TaskRelationshipsService, task_id: impl Into<String>) -> Self {
        Self {
            service,
            task_id: task_id.into(),
            request: AddDependencyRequest::default(),
            task_ids: CustomTaskIdOptions::default(),
        }
    }

    /// Esta task fica esperando pela task informada
    pub fn with_depends_on(mut self, task_id: impl Into<String>) -> Self {
        self.request.depends_on = Some(task_id.into());
        self
    }

    /// A task informada fica esperando por esta
    pub fn with_dependency_of(mut self, task_id: impl Into<String>) -> Self {
        self.request.dependency_of = Some(task_id.into());
        self
    }

    pub fn with_custom_task_ids(mut self, team_id: impl Into<String>) -> Self {
        self.task_ids = CustomTaskIdOptions::custom(team_id);
        self
    }

    pub async fn add(self, cancel: &CancellationToken) -> Result<()> {
        self.service
            .add_dependency(&self.task_id, &self.request, &self.task_ids, cancel)
            .await
    }
}
