//! Time tracking (time entries, timer e tags de tempo)
//!
//! Todas as respostas vêm no envelope `{"data": ...}`.

use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use crate::connection::ApiConnection;
use crate::error::Result;
use crate::models::{
    CreateTimeEntryRequest, CustomTaskIdOptions, DataResponse, GetTimeEntriesQuery,
    RenameTimeEntryTagRequest, StartTimeEntryRequest, TimeEntry, TimeEntryHistory, TimeEntryTag,
    TimeEntryTagsRequest, UpdateTimeEntryRequest,
};
use crate::query::QueryBuilder;
use crate::response::{body, decode, require};

#[derive(Clone)]
pub struct TimeTrackingService {
    connection: Arc<dyn ApiConnection>,
}

impl TimeTrackingService {
    pub fn new(connection: Arc<dyn ApiConnection>) -> Self {
        Self { connection }
    }

    /// Time entries no intervalo (padrão da API: últimos 30 dias do usuário autenticado)
    ///
    /// # Endpoint da API
    ///
    /// `GET team/{team_id}/time_entries`
    pub async fn get_time_entries(
        &self,
        workspace_id: &str,
        query: &GetTimeEntriesQuery,
        cancel: &CancellationToken,
    ) -> Result<Vec<TimeEntry>> {
        let path = query.to_query().build(&entries_path(workspace_id));
        let entries: Vec<TimeEntry> = self.data(self.connection.get(&path, cancel).await?, &path)?;
        tracing::debug!("⏱️ {} time entries em {}", entries.len(), workspace_id);
        Ok(entries)
    }

    pub async fn create_time_entry(
        &self,
        workspace_id: &str,
        request: &CreateTimeEntryRequest,
        task_ids: &CustomTaskIdOptions,
        cancel: &CancellationToken,
    ) -> Result<TimeEntry> {
        let path = task_ids
            .apply(QueryBuilder::new())
            .build(&entries_path(workspace_id));
        let entry: TimeEntry = self.data(self.connection.post(&path, &body(request)?, cancel).await?, &path)?;
        tracing::info!("⏱️ Time entry criado: {}", entry.id);
        Ok(entry)
    }

    pub async fn get_time_entry(
        &self,
        workspace_id: &str,
        timer_id: &str,
        include_task_tags: Option<bool>,
        include_location_names: Option<bool>,
        cancel: &CancellationToken,
    ) -> Result<TimeEntry> {
        let path = QueryBuilder::new()
            .opt("include_task_tags", include_task_tags)
            .opt("include_location_names", include_location_names)
            .build(&format!("{}/{}", entries_path(workspace_id), timer_id));
        self.data(self.connection.get(&path, cancel).await?, &path)
    }

    /// Atualiza o time entry; a resposta é descartada
    pub async fn update_time_entry(
        &self,
        workspace_id: &str,
        timer_id: &str,
        request: &UpdateTimeEntryRequest,
        task_ids: &CustomTaskIdOptions,
        cancel: &CancellationToken,
    ) -> Result<()> {
        let path = task_ids
            .apply(QueryBuilder::new())
            .build(&format!("{}/{}", entries_path(workspace_id), timer_id));
        self.connection.put(&path, &body(request)?, cancel).await?;
        Ok(())
    }

    pub async fn delete_time_entry(
        &self,
        workspace_id: &str,
        timer_id: &str,
        cancel: &CancellationToken,
    ) -> Result<()> {
        let path = format!("{}/{}", entries_path(workspace_id), timer_id);
        self.connection.delete(&path, cancel).await
    }

    /// Histórico de alterações do time entry
    pub async fn get_time_entry_history(
        &self,
        workspace_id: &str,
        timer_id: &str,
        cancel: &CancellationToken,
    ) -> Result<Vec<TimeEntryHistory>> {
        let path = format!("{}/{}/history", entries_path(workspace_id), timer_id);
        self.data(self.connection.get(&path, cancel).await?, &path)
    }

    /// Timer em andamento do usuário
    ///
    /// Retorna `Ok(None)` quando não há timer rodando (`{"data": null}`).
    /// Uma resposta vazia continua sendo `InvalidResponse`.
    pub async fn get_running_time_entry(
        &self,
        workspace_id: &str,
        assignee: Option<i64>,
        cancel: &CancellationToken,
    ) -> Result<Option<TimeEntry>> {
        let path = QueryBuilder::new()
            .opt("assignee", assignee)
            .build(&format!("{}/current", entries_path(workspace_id)));
        let response: DataResponse<TimeEntry> = decode(self.connection.get(&path, cancel).await?, &path)?;
        Ok(response.data)
    }

    /// Inicia um timer (`POST team/{team_id}/time_entries/start`)
    pub async fn start_time_entry(
        &self,
        workspace_id: &str,
        request: &StartTimeEntryRequest,
        task_ids: &CustomTaskIdOptions,
        cancel: &CancellationToken,
    ) -> Result<TimeEntry> {
        let path = task_ids
            .apply(QueryBuilder::new())
            .build(&format!("{}/start", entries_path(workspace_id)));
        let entry: TimeEntry = self.data(self.connection.post(&path, &body(request)?, cancel).await?, &path)?;
        tracing::info!("▶️ Timer iniciado: {}", entry.id);
        Ok(entry)
    }

    pub async fn stop_time_entry(&self, workspace_id: &str, cancel: &CancellationToken) -> Result<TimeEntry> {
        let path = format!("{}/stop", entries_path(workspace_id));
        let entry: TimeEntry = self
            .data(self.connection.post(&path, &serde_json::json!({}), cancel).await?, &path)?;
        tracing::info!("⏹️ Timer parado: {}", entry.id);
        Ok(entry)
    }

    /// Todas as tags já usadas em time entries do workspace
    pub async fn get_all_time_entry_tags(
        &self,
        workspace_id: &str,
        cancel: &CancellationToken,
    ) -> Result<Vec<TimeEntryTag>> {
        let path = tags_path(workspace_id);
        self.data(self.connection.get(&path, cancel).await?, &path)
    }

    pub async fn add_tags_to_time_entries(
        &self,
        workspace_id: &str,
        request: &TimeEntryTagsRequest,
        cancel: &CancellationToken,
    ) -> Result<()> {
        self.connection
            .post_no_content(&tags_path(workspace_id), &body(request)?, cancel)
            .await
    }

    /// Remove tags dos time entries (DELETE com corpo)
    pub async fn remove_tags_from_time_entries(
        &self,
        workspace_id: &str,
        request: &TimeEntryTagsRequest,
        cancel: &CancellationToken,
    ) -> Result<()> {
        self.connection
            .delete_with_body(&tags_path(workspace_id), &body(request)?, cancel)
            .await
    }

    pub async fn change_tag_names(
        &self,
        workspace_id: &str,
        request: &RenameTimeEntryTagRequest,
        cancel: &CancellationToken,
    ) -> Result<()> {
        self.connection
            .put(&tags_path(workspace_id), &body(request)?, cancel)
            .await?;
        Ok(())
    }

    fn data<T: serde::de::DeserializeOwned>(
        &self,
        response: Option<serde_json::Value>,
        path: &str,
    ) -> Result<T> {
        let envelope: DataResponse<T> = decode(response, path)?;
        require(envelope.data, "data", path)
    }
}

fn entries_path(workspace_id: &str) -> String {
    format!("team/{}/time_entries", workspace_id)
}

fn tags_path(workspace_id: &str) -> String {
    format!("team/{}/time_entries/tags", workspace_id)
}
