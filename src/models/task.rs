//! Task types do ClickUp
//!
//! Estrutura completa de uma tarefa, parâmetros de listagem/filtro e DTOs de
//! criação/atualização.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{Attachment, Checklist, CustomField, EntityRef, MembersUpdate, Priority, Status, Tag, TaskPriority, User};
use crate::query::QueryBuilder;

/// Representa uma tarefa completa do ClickUp
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    // ==================== IDENTIFICAÇÃO ====================
    pub id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_id: Option<String>,

    #[serde(default)]
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_content: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Só vem preenchido com `include_markdown_description=true`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub markdown_description: Option<String>,

    // ==================== STATUS & PRIORIDADE ====================
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub orderindex: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub archived: Option<bool>,

    // ==================== DATAS (timestamps em ms, como string) ====================
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_created: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_updated: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_closed: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_done: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,

    // ==================== PESSOAS ====================
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creator: Option<User>,

    #[serde(default)]
    pub assignees: Vec<User>,

    #[serde(default)]
    pub watchers: Vec<User>,

    // ==================== TEMPO ====================
    /// Estimativa de tempo (em milissegundos)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_estimate: Option<i64>,

    /// Tempo rastreado (em milissegundos)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_spent: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub points: Option<f64>,

    // ==================== RELACIONAMENTOS ====================
    /// ID da tarefa pai (para subtasks)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,

    #[serde(default)]
    pub dependencies: Vec<TaskDependency>,

    #[serde(default)]
    pub linked_tasks: Vec<TaskLink>,

    /// Só vem preenchido com `include_subtasks=true`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtasks: Option<Vec<Task>>,

    // ==================== CONTEÚDO ====================
    #[serde(default)]
    pub checklists: Vec<Checklist>,

    #[serde(default)]
    pub tags: Vec<Tag>,

    #[serde(default)]
    pub custom_fields: Vec<CustomField>,

    #[serde(default)]
    pub attachments: Vec<Attachment>,

    // ==================== LOCALIZAÇÃO ====================
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub list: Option<EntityRef>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project: Option<EntityRef>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub folder: Option<EntityRef>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub space: Option<EntityRef>,
}

/// Dependência entre tarefas
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskDependency {
    pub task_id: String,
    pub depends_on: String,
    /// 0 = waiting on, 1 = blocking
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub dependency_type: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_created: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub userid: Option<String>,
}

/// Link simples entre duas tarefas
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskLink {
    pub task_id: String,
    pub link_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_created: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub userid: Option<String>,
}

/// Uma página de tarefas
#[derive(Debug, Clone, PartialEq)]
pub struct TasksPage {
    pub tasks: Vec<Task>,
    pub last_page: bool,
}

/// Envelope de `GET list/{id}/task`, `GET team/{id}/task` e `GET view/{id}/task`
#[derive(Debug, Clone, Deserialize)]
pub struct GetTasksResponse {
    #[serde(default)]
    pub tasks: Option<Vec<Task>>,
    #[serde(default)]
    pub last_page: Option<bool>,
}

/// Filtros de `GET list/{list_id}/task`
///
/// Os parâmetros entram na query exatamente na ordem dos campos abaixo.
/// Datas são timestamps Unix em milissegundos.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GetTasksQuery {
    pub archived: Option<bool>,
    pub include_markdown_description: Option<bool>,
    pub page: Option<i32>,
    pub order_by: Option<String>,
    pub reverse: Option<bool>,
    pub subtasks: Option<bool>,
    pub statuses: Vec<String>,
    pub include_closed: Option<bool>,
    pub assignees: Vec<String>,
    pub watchers: Vec<String>,
    pub tags: Vec<String>,
    pub due_date_gt: Option<i64>,
    pub due_date_lt: Option<i64>,
    pub date_created_gt: Option<i64>,
    pub date_created_lt: Option<i64>,
    pub date_updated_gt: Option<i64>,
    pub date_updated_lt: Option<i64>,
    pub date_done_gt: Option<i64>,
    pub date_done_lt: Option<i64>,
    /// Filtro JSON de custom fields, ex: `[{"field_id":"...","operator":"=","value":"x"}]`
    pub custom_fields: Option<String>,
    pub custom_items: Vec<i64>,
}

impl GetTasksQuery {
    pub(crate) fn to_query(&self) -> QueryBuilder {
        QueryBuilder::new()
            .opt("archived", self.archived)
            .opt("include_markdown_description", self.include_markdown_description)
            .opt("page", self.page)
            .opt("order_by", self.order_by.as_deref())
            .opt("reverse", self.reverse)
            .opt("subtasks", self.subtasks)
            .array("statuses", &self.statuses)
            .opt("include_closed", self.include_closed)
            .array("assignees", &self.assignees)
            .array("watchers", &self.watchers)
            .array("tags", &self.tags)
            .opt("due_date_gt", self.due_date_gt)
            .opt("due_date_lt", self.due_date_lt)
            .opt("date_created_gt", self.date_created_gt)
            .opt("date_created_lt", self.date_created_lt)
            .opt("date_updated_gt", self.date_updated_gt)
            .opt("date_updated_lt", self.date_updated_lt)
            .opt("date_done_gt", self.date_done_gt)
            .opt("date_done_lt", self.date_done_lt)
            .opt("custom_fields", self.custom_fields.as_deref())
            .array("custom_items", &self.custom_items)
    }
}

/// Filtros de `GET team/{team_id}/task` (tasks filtradas do workspace)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GetFilteredTeamTasksQuery {
    pub page: Option<i32>,
    pub order_by: Option<String>,
    pub reverse: Option<bool>,
    pub subtasks: Option<bool>,
    pub space_ids: Vec<String>,
    pub project_ids: Vec<String>,
    pub list_ids: Vec<String>,
    pub statuses: Vec<String>,
    pub include_closed: Option<bool>,
    pub assignees: Vec<String>,
    pub tags: Vec<String>,
    pub due_date_gt: Option<i64>,
    pub due_date_lt: Option<i64>,
    pub date_created_gt: Option<i64>,
    pub date_created_lt: Option<i64>,
    pub date_updated_gt: Option<i64>,
    pub date_updated_lt: Option<i64>,
    pub date_done_gt: Option<i64>,
    pub date_done_lt: Option<i64>,
    pub custom_fields: Option<String>,
    pub custom_task_ids: Option<bool>,
    pub team_id: Option<String>,
    pub parent: Option<String>,
    pub include_markdown_description: Option<bool>,
    pub custom_items: Vec<i64>,
}

impl GetFilteredTeamTasksQuery {
    pub(crate) fn to_query(&self) -> QueryBuilder {
        QueryBuilder::new()
            .opt("page", self.page)
            .opt("order_by", self.order_by.as_deref())
            .opt("reverse", self.reverse)
            .opt("subtasks", self.subtasks)
            .array("space_ids", &self.space_ids)
            .array("project_ids", &self.project_ids)
            .array("list_ids", &self.list_ids)
            .array("statuses", &self.statuses)
            .opt("include_closed", self.include_closed)
            .array("assignees", &self.assignees)
            .array("tags", &self.tags)
            .opt("due_date_gt", self.due_date_gt)
            .opt("due_date_lt", self.due_date_lt)
            .opt("date_created_gt", self.date_created_gt)
            .opt("date_created_lt", self.date_created_lt)
            .opt("date_updated_gt", self.date_updated_gt)
            .opt("date_updated_lt", self.date_updated_lt)
            .opt("date_done_gt", self.date_done_gt)
            .opt("date_done_lt", self.date_done_lt)
            .opt("custom_fields", self.custom_fields.as_deref())
            .opt("custom_task_ids", self.custom_task_ids)
            .opt("team_id", self.team_id.as_deref())
            .opt("parent", self.parent.as_deref())
            .opt("include_markdown_description", self.include_markdown_description)
            .array("custom_items", &self.custom_items)
    }
}

/// Parâmetros de `GET task/{task_id}`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetTaskQuery {
    pub custom_task_ids: Option<bool>,
    pub team_id: Option<String>,
    pub include_subtasks: Option<bool>,
    pub include_markdown_description: Option<bool>,
}

impl GetTaskQuery {
    pub(crate) fn to_query(&self) -> QueryBuilder {
        QueryBuilder::new()
            .opt("custom_task_ids", self.custom_task_ids)
            .opt("team_id", self.team_id.as_deref())
            .opt("include_subtasks", self.include_subtasks)
            .opt("include_markdown_description", self.include_markdown_description)
    }
}

/// Valor de custom field enviado na criação da task
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomFieldValueRequest {
    /// UUID do campo personalizado
    pub id: String,
    pub value: Value,
}

/// Payload de `POST list/{list_id}/task`
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CreateTaskRequest {
    /// Nome/título da task (obrigatório)
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Substitui `description` quando presente
    #[serde(skip_serializing_if = "Option::is_none")]
    pub markdown_description: Option<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub assignees: Vec<i64>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub group_assignees: Vec<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<TaskPriority>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date_time: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_estimate: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date_time: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub points: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub notify_all: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub links_to: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub check_required_custom_fields: Option<bool>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub custom_fields: Vec<CustomFieldValueRequest>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_item_id: Option<i64>,
}

impl CreateTaskRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}

/// Payload de `PUT task/{task_id}`: apenas campos presentes são alterados
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UpdateTaskRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub markdown_description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<TaskPriority>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date_time: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_estimate: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date_time: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub points: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignees: Option<MembersUpdate<i64>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_assignees: Option<MembersUpdate<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub watchers: Option<MembersUpdate<i64>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub archived: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_item_id: Option<i64>,
}

/// Payload de `POST task/{task_id}/merge`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MergeTasksRequest {
    pub source_task_ids: Vec<String>,
}

/// Tempo acumulado em um status
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TotalTime {
    pub by_minute: i64,
    #[serde(default)]
    pub since: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusTime {
    pub status: String,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default, rename = "type")]
    pub status_type: Option<String>,
    #[serde(default)]
    pub total_time: Option<TotalTime>,
    #[serde(default)]
    pub orderindex: Option<Value>,
}

/// Resposta de `GET task/{task_id}/time_in_status`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskTimeInStatus {
    #[serde(default)]
    pub current_status: Option<StatusTime>,
    #[serde(default)]
    pub status_history: Vec<StatusTime>,
}

/// Resposta de `GET task/bulk_time_in_status/task_ids`, indexada por task ID
pub type BulkTimeInStatus = HashMap<String, TaskTimeInStatus>;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CreateTaskFromTemplateRequest {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateTaskFromTemplateResponse {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub task: Option<Task>,
}

/// Payload de `POST task/{task_id}/dependency`: informe apenas um dos campos
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AddDependencyRequest {
    /// Esta task espera pela task informada
    #[serde(skip_serializing_if = "Option::is_none")]
    pub depends_on: Option<String>,

    /// A task informada espera por esta
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dependency_of: Option<String>,
}

/// Parâmetros de `DELETE task/{task_id}/dependency`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeleteDependencyQuery {
    pub depends_on: Option<String>,
    pub dependency_of: Option<String>,
    pub custom_task_ids: Option<bool>,
    pub team_id: Option<String>,
}

impl DeleteDependencyQuery {
    pub(crate) fn to_query(&self) -> QueryBuilder {
        QueryBuilder::new()
            .opt("depends_on", self.depends_on.as_deref())
            .opt("dependency_of", self.dependency_of.as_deref())
            .opt("custom_task_ids", self.custom_task_ids)
            .opt("team_id", self.team_id.as_deref())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct TaskEnvelope {
    #[serde(default)]
    pub task: Option<Task>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_get_tasks_query_order_and_arrays() {
        let query = GetTasksQuery {
            archived: Some(false),
            page: Some(2),
            statuses: vec!["to do".to_string(), "review".to_string()],
            assignees: vec!["183".to_string()],
            due_date_gt: Some(1_700_000_000_000),
            ..Default::default()
        };

        assert_eq!(
            query.to_query().build("list/9/task"),
            "list/9/task?archived=false&page=2&statuses[]=to%20do&statuses[]=review&assignees[]=183&due_date_gt=1700000000000"
        );
    }

    #[test]
    fn test_empty_query_has_no_question_mark() {
        assert_eq!(GetTasksQuery::default().to_query().build("list/9/task"), "list/9/task");
        assert_eq!(
            GetFilteredTeamTasksQuery::default().to_query().build("team/1/task"),
            "team/1/task"
        );
    }

    #[test]
    fn test_create_request_skips_unset_fields() {
        let request = CreateTaskRequest {
            priority: Some(TaskPriority::High),
            ..CreateTaskRequest::new("Nova tarefa")
        };

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({ "name": "Nova tarefa", "priority": 2 })
        );
    }

    #[test]
    fn test_task_deserializes_minimal_payload() {
        let task: Task = serde_json::from_value(json!({
            "id": "9hz",
            "name": "Task Name",
            "status": { "status": "in progress", "color": "#d3d3d3", "orderindex": 1, "type": "custom" },
            "assignees": [],
            "tags": [{ "name": "urgent", "tag_fg": "#000", "tag_bg": "#fff" }],
            "list": { "id": "123" }
        }))
        .unwrap();

        assert_eq!(task.id, "9hz");
        assert_eq!(task.status.unwrap().status_type.as_deref(), Some("custom"));
        assert_eq!(task.tags[0].name, "urgent");
        assert_eq!(task.list.unwrap().id, "123");
        assert!(task.checklists.is_empty());
    }
}
