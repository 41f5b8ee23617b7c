//! Task Service - operações sobre tasks do ClickUp
//!
//! # Endpoints
//!
//! - `GET  list/{list_id}/task` (paginado por `page`)
//! - `POST list/{list_id}/task`
//! - `GET|PUT|DELETE task/{task_id}`
//! - `GET  team/{team_id}/task` (tasks filtradas do workspace)
//! - `POST task/{task_id}/merge`
//! - `GET  task/{task_id}/time_in_status`
//! - `GET  task/bulk_time_in_status/task_ids`
//! - `POST list/{list_id}/taskTemplate/{template_id}`
//!
//! # Paginação
//!
//! As listagens retornam até 100 tasks por página. Os streams começam na
//! página informada (ou 0) e param na primeira página vazia.

use std::sync::Arc;

use futures::stream::BoxStream;
use tokio_util::sync::CancellationToken;

use crate::connection::ApiConnection;
use crate::error::Result;
use crate::models::{
    BulkTimeInStatus, CreateTaskFromTemplateRequest, CreateTaskFromTemplateResponse,
    CreateTaskRequest, CustomTaskIdOptions, GetFilteredTeamTasksQuery, GetTaskQuery,
    GetTasksQuery, GetTasksResponse, MergeTasksRequest, Task, TaskTimeInStatus, TasksPage,
    UpdateTaskRequest,
};
use crate::pagination::{paginate, Page};
use crate::query::QueryBuilder;
use crate::response::{body, decode, require};

#[derive(Clone)]
pub struct TasksService {
    connection: Arc<dyn ApiConnection>,
}

impl TasksService {
    pub fn new(connection: Arc<dyn ApiConnection>) -> Self {
        Self { connection }
    }

    /// Uma página de tasks da list
    ///
    /// # Endpoint da API
    ///
    /// `GET list/{list_id}/task?archived=..&page=..&statuses[]=..`
    pub async fn get_tasks(
        &self,
        list_id: &str,
        query: &GetTasksQuery,
        cancel: &CancellationToken,
    ) -> Result<TasksPage> {
        let path = query.to_query().build(&format!("list/{}/task", list_id));
        fetch_tasks_page(self.connection.as_ref(), &path, cancel).await
    }

    /// Todas as tasks da list, uma página por vez
    pub fn get_tasks_stream(
        &self,
        list_id: &str,
        query: GetTasksQuery,
        cancel: &CancellationToken,
    ) -> BoxStream<'static, Result<Task>> {
        let list_path = format!("list/{}/task", list_id);
        let first_page = query.page.unwrap_or(0);
        task_page_stream(
            self.connection.clone(),
            first_page,
            move |page| {
                let mut query = query.clone();
                query.page = Some(page);
                query.to_query().build(&list_path)
            },
            cancel.clone(),
        )
    }

    /// Cria uma task na list
    ///
    /// # Endpoint da API
    ///
    /// `POST list/{list_id}/task`
    ///
    /// # Erros Comuns
    ///
    /// - **400 Bad Request**: custom field obrigatório ausente ou ID inválido
    /// - **404 Not Found**: list não existe
    pub async fn create_task(
        &self,
        list_id: &str,
        request: &CreateTaskRequest,
        task_ids: &CustomTaskIdOptions,
        cancel: &CancellationToken,
    ) -> Result<Task> {
        let path = task_ids
            .apply(QueryBuilder::new())
            .build(&format!("list/{}/task", list_id));
        let response = self.connection.post(&path, &body(request)?, cancel).await?;
        let task: Task = decode(response, &path)?;
        tracing::info!("✅ Task criada: {} ({})", task.name, task.id);
        Ok(task)
    }

    /// `GET task/{task_id}`
    pub async fn get_task(
        &self,
        task_id: &str,
        query: &GetTaskQuery,
        cancel: &CancellationToken,
    ) -> Result<Task> {
        let path = query.to_query().build(&format!("task/{}", task_id));
        decode(self.connection.get(&path, cancel).await?, &path)
    }

    /// Atualiza apenas os campos presentes no request
    pub async fn update_task(
        &self,
        task_id: &str,
        request: &UpdateTaskRequest,
        task_ids: &CustomTaskIdOptions,
        cancel: &CancellationToken,
    ) -> Result<Task> {
        let path = task_ids
            .apply(QueryBuilder::new())
            .build(&format!("task/{}", task_id));
        let response = self.connection.put(&path, &body(request)?, cancel).await?;
        let task: Task = decode(response, &path)?;
        tracing::info!("✏️ Task atualizada: {}", task.id);
        Ok(task)
    }

    pub async fn delete_task(
        &self,
        task_id: &str,
        task_ids: &CustomTaskIdOptions,
        cancel: &CancellationToken,
    ) -> Result<()> {
        let path = task_ids
            .apply(QueryBuilder::new())
            .build(&format!("task/{}", task_id));
        self.connection.delete(&path, cancel).await?;
        tracing::info!("🗑️ Task {} removida", task_id);
        Ok(())
    }

    /// Tasks de todo o workspace que batem com os filtros
    ///
    /// `GET team/{team_id}/task`
    pub async fn get_filtered_team_tasks(
        &self,
        workspace_id: &str,
        query: &GetFilteredTeamTasksQuery,
        cancel: &CancellationToken,
    ) -> Result<TasksPage> {
        let path = query.to_query().build(&format!("team/{}/task", workspace_id));
        fetch_tasks_page(self.connection.as_ref(), &path, cancel).await
    }

    pub fn get_filtered_team_tasks_stream(
        &self,
        workspace_id: &str,
        query: GetFilteredTeamTasksQuery,
        cancel: &CancellationToken,
    ) -> BoxStream<'static, Result<Task>> {
        let team_path = format!("team/{}/task", workspace_id);
        let first_page = query.page.unwrap_or(0);
        task_page_stream(
            self.connection.clone(),
            first_page,
            move |page| {
                let mut query = query.clone();
                query.page = Some(page);
                query.to_query().build(&team_path)
            },
            cancel.clone(),
        )
    }

    /// Funde as tasks de origem na task alvo
    pub async fn merge_tasks(
        &self,
        task_id: &str,
        request: &MergeTasksRequest,
        cancel: &CancellationToken,
    ) -> Result<()> {
        let path = format!("task/{}/merge", task_id);
        self.connection
            .post_no_content(&path, &body(request)?, cancel)
            .await?;
        tracing::info!(
            "🔀 {} tasks mescladas em {}",
            request.source_task_ids.len(),
            task_id
        );
        Ok(())
    }

    /// Tempo que a task passou em cada status
    pub async fn get_task_time_in_status(
        &self,
        task_id: &str,
        task_ids: &CustomTaskIdOptions,
        cancel: &CancellationToken,
    ) -> Result<TaskTimeInStatus> {
        let path = task_ids
            .apply(QueryBuilder::new())
            .build(&format!("task/{}/time_in_status", task_id));
        decode(self.connection.get(&path, cancel).await?, &path)
    }

    /// Time in status de várias tasks (até 100), indexado por task ID
    ///
    /// Os IDs vão como `task_ids=a&task_ids=b`, sem colchetes.
    pub async fn get_bulk_tasks_time_in_status(
        &self,
        task_ids: &[String],
        options: &CustomTaskIdOptions,
        cancel: &CancellationToken,
    ) -> Result<BulkTimeInStatus> {
        let path = options
            .apply(QueryBuilder::new().repeated("task_ids", task_ids))
            .build("task/bulk_time_in_status/task_ids");
        decode(self.connection.get(&path, cancel).await?, &path)
    }

    /// `POST list/{list_id}/taskTemplate/{template_id}`
    pub async fn create_task_from_template(
        &self,
        list_id: &str,
        template_id: &str,
        request: &CreateTaskFromTemplateRequest,
        cancel: &CancellationToken,
    ) -> Result<CreateTaskFromTemplateResponse> {
        let path = format!("list/{}/taskTemplate/{}", list_id, template_id);
        let response = self.connection.post(&path, &body(request)?, cancel).await?;
        decode(response, &path)
    }
}

pub(crate) async fn fetch_tasks_page(
    connection: &dyn ApiConnection,
    path: &str,
    cancel: &CancellationToken,
) -> Result<TasksPage> {
    let response: GetTasksResponse = decode(connection.get(path, cancel).await?, path)?;
    let tasks = require(response.tasks, "tasks", path)?;
    tracing::debug!("{} tasks recebidas de {}", tasks.len(), path);
    Ok(TasksPage {
        tasks,
        last_page: response.last_page.unwrap_or(false),
    })
}

/// Stream de tasks paginado por número de página (`page=0,1,2...`)
pub(crate) fn task_page_stream<P>(
    connection: Arc<dyn ApiConnection>,
    first_page: i32,
    page_path: P,
    cancel: CancellationToken,
) -> BoxStream<'static, Result<Task>>
where
    P: Fn(i32) -> String + Send + 'static,
{
    let token = cancel.clone();
    paginate(first_page, cancel, move |page: i32| {
        let connection = connection.clone();
        let path = page_path(page);
        let token = token.clone();
        async move {
            let page_result = fetch_tasks_page(connection.as_ref(), &path, &token).await?;
            Ok(Page::new(page_result.tasks, Some(page + 1)))
        }
    })
}
