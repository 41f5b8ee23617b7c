//! Dependências ("waiting on" / "blocking") e links entre tasks

use std::sync::Arc;

use serde_json::json;
use tokio_util::sync::CancellationToken;

use crate::connection::ApiConnection;
use crate::error::Result;
use crate::models::{
    AddDependencyRequest, CustomTaskIdOptions, DeleteDependencyQuery, Task, TaskEnvelope,
};
use crate::query::QueryBuilder;
use crate::response::{body, decode, require};

#[derive(Clone)]
pub struct TaskRelationshipsService {
    connection: Arc<dyn ApiConnection>,
}

impl TaskRelationshipsService {
    pub fn new(connection: Arc<dyn ApiConnection>) -> Self {
        Self { connection }
    }

    /// `POST task/{task_id}/dependency`
    ///
    /// Use `depends_on` **ou** `dependency_of` no request, nunca os dois.
    pub async fn add_dependency(
        &self,
        task_id: &str,
        request: &AddDependencyRequest,
        task_ids: &CustomTaskIdOptions,
        cancel: &CancellationToken,
    ) -> Result<()> {
        let path = task_ids
            .apply(QueryBuilder::new())
            .build(&format!("task/{}/dependency", task_id));
        self.connection
            .post_no_content(&path, &body(request)?, cancel)
            .await?;
        tracing::info!("🔗 Dependência adicionada na task {}", task_id);
        Ok(())
    }

    pub async fn delete_dependency(
        &self,
        task_id: &str,
        query: &DeleteDependencyQuery,
        cancel: &CancellationToken,
    ) -> Result<()> {
        let path = query
            .to_query()
            .build(&format!("task/{}/dependency", task_id));
        self.connection.delete(&path, cancel).await
    }

    /// Liga duas tasks; retorna a task de origem com `linked_tasks` atualizado
    pub async fn add_task_link(
        &self,
        task_id: &str,
        links_to: &str,
        task_ids: &CustomTaskIdOptions,
        cancel: &CancellationToken,
    ) -> Result<Task> {
        let path = task_ids
            .apply(QueryBuilder::new())
            .build(&format!("task/{}/link/{}", task_id, links_to));
        let response: TaskEnvelope = decode(self.connection.post(&path, &json!({}), cancel).await?, &path)?;
        require(response.task, "task", &path)
    }

    pub async fn delete_task_link(
        &self,
        task_id: &str,
        links_to: &str,
        task_ids: &CustomTaskIdOptions,
        cancel: &CancellationToken,
    ) -> Result<()> {
        let path = task_ids
            .apply(QueryBuilder::new())
            .build(&format!("task/{}/link/{}", task_id, links_to));
        self.connection.delete(&path, cancel).await
    }
}
