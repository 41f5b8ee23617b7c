use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use crate::connection::ApiConnection;
use crate::error::Result;
use crate::models::{GetTaskTemplatesResponse, TaskTemplate};
use crate::query::QueryBuilder;
use crate::response::{decode, require};

#[derive(Clone)]
pub struct TemplatesService {
    connection: Arc<dyn ApiConnection>,
}

impl TemplatesService {
    pub fn new(connection: Arc<dyn ApiConnection>) -> Self {
        Self { connection }
    }

    /// Templates de task do workspace (`GET team/{team_id}/taskTemplate?page=0`)
    pub async fn get_task_templates(
        &self,
        workspace_id: &str,
        page: i32,
        cancel: &CancellationToken,
    ) -> Result<Vec<TaskTemplate>> {
        let path = QueryBuilder::new()
            .push("page", page)
            .build(&format!("team/{}/taskTemplate", workspace_id));
        let response: GetTaskTemplatesResponse = decode(self.connection.get(&path, cancel).await?, &path)?;
        require(response.templates, "templates", &path)
    }
}
