//! Views em todos os níveis da hierarquia
//!
//! Workspace ("Everything"), space, folder e list têm endpoints próprios de
//! listagem/criação; leitura, edição e remoção usam só o ID da view.

use std::sync::Arc;

use futures::stream::BoxStream;
use tokio_util::sync::CancellationToken;

use crate::connection::ApiConnection;
use crate::error::Result;
use crate::models::{GetViewsResponse, Task, TasksPage, View, ViewRequest, ViewResponse};
use crate::query::QueryBuilder;
use crate::response::{body, decode, require};
use crate::services::tasks::{fetch_tasks_page, task_page_stream};

#[derive(Clone)]
pub struct ViewsService {
    connection: Arc<dyn ApiConnection>,
}

impl ViewsService {
    pub fn new(connection: Arc<dyn ApiConnection>) -> Self {
        Self { connection }
    }

    pub async fn get_workspace_views(&self, workspace_id: &str, cancel: &CancellationToken) -> Result<Vec<View>> {
        self.fetch_views(&format!("team/{}/view", workspace_id), cancel).await
    }

    pub async fn get_space_views(&self, space_id: &str, cancel: &CancellationToken) -> Result<Vec<View>> {
        self.fetch_views(&format!("space/{}/view", space_id), cancel).await
    }

    pub async fn get_folder_views(&self, folder_id: &str, cancel: &CancellationToken) -> Result<Vec<View>> {
        self.fetch_views(&format!("folder/{}/view", folder_id), cancel).await
    }

    pub async fn get_list_views(&self, list_id: &str, cancel: &CancellationToken) -> Result<Vec<View>> {
        self.fetch_views(&format!("list/{}/view", list_id), cancel).await
    }

    pub async fn create_workspace_view(
        &self,
        workspace_id: &str,
        request: &ViewRequest,
        cancel: &CancellationToken,
    ) -> Result<View> {
        self.post_view(&format!("team/{}/view", workspace_id), request, cancel).await
    }

    pub async fn create_space_view(
        &self,
        space_id: &str,
        request: &ViewRequest,
        cancel: &CancellationToken,
    ) -> Result<View> {
        self.post_view(&format!("space/{}/view", space_id), request, cancel).await
    }

    pub async fn create_folder_view(
        &self,
        folder_id: &str,
        request: &ViewRequest,
        cancel: &CancellationToken,
    ) -> Result<View> {
        self.post_view(&format!("folder/{}/view", folder_id), request, cancel).await
    }

    pub async fn create_list_view(
        &self,
        list_id: &str,
        request: &ViewRequest,
        cancel: &CancellationToken,
    ) -> Result<View> {
        self.post_view(&format!("list/{}/view", list_id), request, cancel).await
    }

    pub async fn get_view(&self, view_id: &str, cancel: &CancellationToken) -> Result<View> {
        let path = format!("view/{}", view_id);
        let response: ViewResponse = decode(self.connection.get(&path, cancel).await?, &path)?;
        require(response.view, "view", &path)
    }

    pub async fn update_view(
        &self,
        view_id: &str,
        request: &ViewRequest,
        cancel: &CancellationToken,
    ) -> Result<View> {
        let path = format!("view/{}", view_id);
        let response: ViewResponse =
            decode(self.connection.put(&path, &body(request)?, cancel).await?, &path)?;
        require(response.view, "view", &path)
    }

    pub async fn delete_view(&self, view_id: &str, cancel: &CancellationToken) -> Result<()> {
        self.connection.delete(&format!("view/{}", view_id), cancel).await
    }

    /// Uma página de tasks visíveis na view (`GET view/{view_id}/task?page=N`)
    pub async fn get_view_tasks(
        &self,
        view_id: &str,
        page: i32,
        cancel: &CancellationToken,
    ) -> Result<TasksPage> {
        let path = view_tasks_path(view_id, page);
        fetch_tasks_page(self.connection.as_ref(), &path, cancel).await
    }

    pub fn get_view_tasks_stream(
        &self,
        view_id: &str,
        cancel: &CancellationToken,
    ) -> BoxStream<'static, Result<Task>> {
        let view_id = view_id.to_string();
        task_page_stream(
            self.connection.clone(),
            0,
            move |page| view_tasks_path(&view_id, page),
            cancel.clone(),
        )
    }

    async fn fetch_views(&self, path: &str, cancel: &CancellationToken) -> Result<Vec<View>> {
        let response: GetViewsResponse = decode(self.connection.get(path, cancel).await?, path)?;
        require(response.views, "views", path)
    }

    async fn post_view(&self, path: &str, request: &ViewRequest, cancel: &CancellationToken) -> Result<View> {
        let response: ViewResponse = decode(self.connection.post(path, &body(request)?, cancel).await?, path)?;
        let view = require(response.view, "view", path)?;
        tracing::info!("👁️ View criada: {} ({})", view.name, view.id);
        Ok(view)
    }
}

fn view_tasks_path(view_id: &str, page: i32) -> String {
    QueryBuilder::new()
        .push("page", page)
        .build(&format!("view/{}/task", view_id))
}
