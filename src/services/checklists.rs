use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use crate::connection::ApiConnection;
use crate::error::Result;
use crate::models::{
    Checklist, ChecklistResponse, CreateChecklistItemRequest, CreateChecklistRequest,
    CustomTaskIdOptions, EditChecklistItemRequest, EditChecklistRequest,
};
use crate::query::QueryBuilder;
use crate::response::{body, decode, require};

/// Checklists de tasks e seus itens
#[derive(Clone)]
pub struct ChecklistsService {
    connection: Arc<dyn ApiConnection>,
}

impl ChecklistsService {
    pub fn new(connection: Arc<dyn ApiConnection>) -> Self {
        Self { connection }
    }

    /// `POST task/{task_id}/checklist`
    pub async fn create_checklist(
        &self,
        task_id: &str,
        request: &CreateChecklistRequest,
        task_ids: &CustomTaskIdOptions,
        cancel: &CancellationToken,
    ) -> Result<Checklist> {
        let path = task_ids
            .apply(QueryBuilder::new())
            .build(&format!("task/{}/checklist", task_id));
        self.post_checklist(&path, &body(request)?, cancel).await
    }

    pub async fn edit_checklist(
        &self,
        checklist_id: &str,
        request: &EditChecklistRequest,
        cancel: &CancellationToken,
    ) -> Result<()> {
        let path = format!("checklist/{}", checklist_id);
        self.connection.put(&path, &body(request)?, cancel).await?;
        Ok(())
    }

    pub async fn delete_checklist(&self, checklist_id: &str, cancel: &CancellationToken) -> Result<()> {
        self.connection
            .delete(&format!("checklist/{}", checklist_id), cancel)
            .await
    }

    /// Retorna a checklist inteira com o item novo
    pub async fn create_checklist_item(
        &self,
        checklist_id: &str,
        request: &CreateChecklistItemRequest,
        cancel: &CancellationToken,
    ) -> Result<Checklist> {
        let path = format!("checklist/{}/checklist_item", checklist_id);
        self.post_checklist(&path, &body(request)?, cancel).await
    }

    pub async fn edit_checklist_item(
        &self,
        checklist_id: &str,
        checklist_item_id: &str,
        request: &EditChecklistItemRequest,
        cancel: &CancellationToken,
    ) -> Result<Checklist> {
        let path = format!("checklist/{}/checklist_item/{}", checklist_id, checklist_item_id);
        let response: ChecklistResponse =
            decode(self.connection.put(&path, &body(request)?, cancel).await?, &path)?;
        require(response.checklist, "checklist", &path)
    }

    pub async fn delete_checklist_item(
        &self,
        checklist_id: &str,
        checklist_item_id: &str,
        cancel: &CancellationToken,
    ) -> Result<()> {
        let path = format!("checklist/{}/checklist_item/{}", checklist_id, checklist_item_id);
        self.connection.delete(&path, cancel).await
    }

    async fn post_checklist(
        &self,
        path: &str,
        request: &serde_json::Value,
        cancel: &CancellationToken,
    ) -> Result<Checklist> {
        let response: ChecklistResponse = decode(self.connection.post(path, request, cancel).await?, path)?;
        require(response.checklist, "checklist", path)
    }
}
