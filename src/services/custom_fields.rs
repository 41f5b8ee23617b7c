//! Custom fields: definições acessíveis e valores por task

use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use crate::connection::ApiConnection;
use crate::error::Result;
use crate::models::{CustomField, CustomTaskIdOptions, GetCustomFieldsResponse, SetCustomFieldValueRequest};
use crate::query::QueryBuilder;
use crate::response::{body, decode, require};

#[derive(Clone)]
pub struct CustomFieldsService {
    connection: Arc<dyn ApiConnection>,
}

impl CustomFieldsService {
    pub fn new(connection: Arc<dyn ApiConnection>) -> Self {
        Self { connection }
    }

    /// Campos visíveis na list (`GET list/{list_id}/field`)
    pub async fn get_accessible_custom_fields(
        &self,
        list_id: &str,
        cancel: &CancellationToken,
    ) -> Result<Vec<CustomField>> {
        self.fetch_fields(&format!("list/{}/field", list_id), cancel).await
    }

    pub async fn get_folder_custom_fields(
        &self,
        folder_id: &str,
        cancel: &CancellationToken,
    ) -> Result<Vec<CustomField>> {
        self.fetch_fields(&format!("folder/{}/field", folder_id), cancel).await
    }

    pub async fn get_space_custom_fields(
        &self,
        space_id: &str,
        cancel: &CancellationToken,
    ) -> Result<Vec<CustomField>> {
        self.fetch_fields(&format!("space/{}/field", space_id), cancel).await
    }

    pub async fn get_workspace_custom_fields(
        &self,
        workspace_id: &str,
        cancel: &CancellationToken,
    ) -> Result<Vec<CustomField>> {
        self.fetch_fields(&format!("team/{}/field", workspace_id), cancel).await
    }

    async fn fetch_fields(&self, path: &str, cancel: &CancellationToken) -> Result<Vec<CustomField>> {
        let response: GetCustomFieldsResponse = decode(self.connection.get(path, cancel).await?, path)?;
        let fields = require(response.fields, "fields", path)?;
        tracing::debug!("{} custom fields em {}", fields.len(), path);
        Ok(fields)
    }

    /// Define o valor do campo na task
    ///
    /// # Endpoint da API
    ///
    /// `POST task/{task_id}/field/{field_id}`
    pub async fn set_custom_field_value(
        &self,
        task_id: &str,
        field_id: &str,
        request: &SetCustomFieldValueRequest,
        task_ids: &CustomTaskIdOptions,
        cancel: &CancellationToken,
    ) -> Result<()> {
        let path = task_ids
            .apply(QueryBuilder::new())
            .build(&format!("task/{}/field/{}", task_id, field_id));
        self.connection
            .post_no_content(&path, &body(request)?, cancel)
            .await?;
        tracing::info!("✅ Campo {} definido na task {}", field_id, task_id);
        Ok(())
    }

    /// Limpa o valor (não apaga a definição do campo)
    pub async fn remove_custom_field_value(
        &self,
        task_id: &str,
        field_id: &str,
        task_ids: &CustomTaskIdOptions,
        cancel: &CancellationToken,
    ) -> Result<()> {
        let path = task_ids
            .apply(QueryBuilder::new())
            .build(&format!("task/{}/field/{}", task_id, field_id));
        self.connection.delete(&path, cancel).await
    }
}
