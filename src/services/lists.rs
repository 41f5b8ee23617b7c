use std::sync::Arc;

use serde_json::json;
use tokio_util::sync::CancellationToken;

use crate::connection::ApiConnection;
use crate::error::Result;
use crate::models::{
    CreateFromTemplateRequest, CreateListRequest, GetListsResponse, List, UpdateListRequest,
};
use crate::query::QueryBuilder;
use crate::response::{body, decode, require};

/// Lists em folders ou direto no space (folderless)
#[derive(Clone)]
pub struct ListsService {
    connection: Arc<dyn ApiConnection>,
}

impl ListsService {
    pub fn new(connection: Arc<dyn ApiConnection>) -> Self {
        Self { connection }
    }

    /// `GET folder/{folder_id}/list`
    pub async fn get_lists(
        &self,
        folder_id: &str,
        archived: Option<bool>,
        cancel: &CancellationToken,
    ) -> Result<Vec<List>> {
        let path = QueryBuilder::new()
            .opt("archived", archived)
            .build(&format!("folder/{}/list", folder_id));
        self.fetch_lists(&path, cancel).await
    }

    /// `GET space/{space_id}/list`
    pub async fn get_folderless_lists(
        &self,
        space_id: &str,
        archived: Option<bool>,
        cancel: &CancellationToken,
    ) -> Result<Vec<List>> {
        let path = QueryBuilder::new()
            .opt("archived", archived)
            .build(&format!("space/{}/list", space_id));
        self.fetch_lists(&path, cancel).await
    }

    async fn fetch_lists(&self, path: &str, cancel: &CancellationToken) -> Result<Vec<List>> {
        let response: GetListsResponse = decode(self.connection.get(path, cancel).await?, path)?;
        require(response.lists, "lists", path)
    }

    pub async fn create_list(
        &self,
        folder_id: &str,
        request: &CreateListRequest,
        cancel: &CancellationToken,
    ) -> Result<List> {
        let path = format!("folder/{}/list", folder_id);
        self.create(&path, request, cancel).await
    }

    pub async fn create_folderless_list(
        &self,
        space_id: &str,
        request: &CreateListRequest,
        cancel: &CancellationToken,
    ) -> Result<List> {
        let path = format!("space/{}/list", space_id);
        self.create(&path, request, cancel).await
    }

    async fn create(
        &self,
        path: &str,
        request: &CreateListRequest,
        cancel: &CancellationToken,
    ) -> Result<List> {
        let response = self.connection.post(path, &body(request)?, cancel).await?;
        let list: List = decode(response, path)?;
        tracing::info!("📋 List criada: {} ({})", list.name, list.id);
        Ok(list)
    }

    pub async fn get_list(&self, list_id: &str, cancel: &CancellationToken) -> Result<List> {
        let path = format!("list/{}", list_id);
        decode(self.connection.get(&path, cancel).await?, &path)
    }

    pub async fn update_list(
        &self,
        list_id: &str,
        request: &UpdateListRequest,
        cancel: &CancellationToken,
    ) -> Result<List> {
        let path = format!("list/{}", list_id);
        let response = self.connection.put(&path, &body(request)?, cancel).await?;
        decode(response, &path)
    }

    pub async fn delete_list(&self, list_id: &str, cancel: &CancellationToken) -> Result<()> {
        self.connection
            .delete(&format!("list/{}", list_id), cancel)
            .await
    }

    /// Adiciona a task a mais uma list (Tasks in Multiple Lists)
    pub async fn add_task_to_list(
        &self,
        list_id: &str,
        task_id: &str,
        cancel: &CancellationToken,
    ) -> Result<()> {
        let path = format!("list/{}/task/{}", list_id, task_id);
        self.connection.post_no_content(&path, &json!({}), cancel).await
    }

    pub async fn remove_task_from_list(
        &self,
        list_id: &str,
        task_id: &str,
        cancel: &CancellationToken,
    ) -> Result<()> {
        self.connection
            .delete(&format!("list/{}/task/{}", list_id, task_id), cancel)
            .await
    }

    /// `POST folder/{folder_id}/list_template/{template_id}`
    pub async fn create_list_from_template_in_folder(
        &self,
        folder_id: &str,
        template_id: &str,
        request: &CreateFromTemplateRequest,
        cancel: &CancellationToken,
    ) -> Result<List> {
        let path = format!("folder/{}/list_template/{}", folder_id, template_id);
        let response = self.connection.post(&path, &body(request)?, cancel).await?;
        decode(response, &path)
    }

    /// `POST space/{space_id}/list_template/{template_id}`
    pub async fn create_list_from_template_in_space(
        &self,
        space_id: &str,
        template_id: &str,
        request: &CreateFromTemplateRequest,
        cancel: &CancellationToken,
    ) -> Result<List> {
        let path = format!("space/{}/list_template/{}", space_id, template_id);
        let response = self.connection.post(&path, &body(request)?, cancel).await?;
        decode(response, &path)
    }
}
