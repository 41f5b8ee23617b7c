//! Convidados (guests): convite, permissões e compartilhamento de itens
//!
//! Disponível apenas no plano Enterprise.

use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use crate::connection::ApiConnection;
use crate::error::Result;
use crate::models::{
    CustomTaskIdOptions, Guest, GuestAccessRequest, GuestPermissions, GuestResponse,
    InviteGuestRequest, Workspace, WorkspaceResponse,
};
use crate::query::QueryBuilder;
use crate::response::{body, decode, require};

#[derive(Clone)]
pub struct GuestsService {
    connection: Arc<dyn ApiConnection>,
}

impl GuestsService {
    pub fn new(connection: Arc<dyn ApiConnection>) -> Self {
        Self { connection }
    }

    /// Convida por email; retorna o workspace com a lista de membros atualizada
    pub async fn invite_guest_to_workspace(
        &self,
        workspace_id: &str,
        request: &InviteGuestRequest,
        cancel: &CancellationToken,
    ) -> Result<Workspace> {
        let path = format!("team/{}/guest", workspace_id);
        let response: WorkspaceResponse =
            decode(self.connection.post(&path, &body(request)?, cancel).await?, &path)?;
        let workspace = require(response.team, "team", &path)?;
        tracing::info!("✉️ Convidado {} adicionado ao workspace {}", request.email, workspace_id);
        Ok(workspace)
    }

    pub async fn get_guest(
        &self,
        workspace_id: &str,
        guest_id: &str,
        cancel: &CancellationToken,
    ) -> Result<Guest> {
        let path = format!("team/{}/guest/{}", workspace_id, guest_id);
        self.guest_from(self.connection.get(&path, cancel).await?, &path)
    }

    pub async fn edit_guest_on_workspace(
        &self,
        workspace_id: &str,
        guest_id: &str,
        request: &GuestPermissions,
        cancel: &CancellationToken,
    ) -> Result<Guest> {
        let path = format!("team/{}/guest/{}", workspace_id, guest_id);
        self.guest_from(self.connection.put(&path, &body(request)?, cancel).await?, &path)
    }

    pub async fn remove_guest_from_workspace(
        &self,
        workspace_id: &str,
        guest_id: &str,
        cancel: &CancellationToken,
    ) -> Result<()> {
        self.connection
            .delete(&format!("team/{}/guest/{}", workspace_id, guest_id), cancel)
            .await
    }

    /// `POST task/{task_id}/guest/{guest_id}`
    pub async fn add_guest_to_task(
        &self,
        task_id: &str,
        guest_id: &str,
        request: &GuestAccessRequest,
        include_shared: Option<bool>,
        task_ids: &CustomTaskIdOptions,
        cancel: &CancellationToken,
    ) -> Result<Guest> {
        let path = task_ids
            .apply(QueryBuilder::new().opt("include_shared", include_shared))
            .build(&format!("task/{}/guest/{}", task_id, guest_id));
        self.guest_from(self.connection.post(&path, &body(request)?, cancel).await?, &path)
    }

    pub async fn remove_guest_from_task(
        &self,
        task_id: &str,
        guest_id: &str,
        include_shared: Option<bool>,
        task_ids: &CustomTaskIdOptions,
        cancel: &CancellationToken,
    ) -> Result<()> {
        let path = task_ids
            .apply(QueryBuilder::new().opt("include_shared", include_shared))
            .build(&format!("task/{}/guest/{}", task_id, guest_id));
        self.connection.delete(&path, cancel).await
    }

    pub async fn add_guest_to_list(
        &self,
        list_id: &str,
        guest_id: &str,
        request: &GuestAccessRequest,
        include_shared: Option<bool>,
        cancel: &CancellationToken,
    ) -> Result<Guest> {
        let path = QueryBuilder::new()
            .opt("include_shared", include_shared)
            .build(&format!("list/{}/guest/{}", list_id, guest_id));
        self.guest_from(self.connection.post(&path, &body(request)?, cancel).await?, &path)
    }

    pub async fn remove_guest_from_list(
        &self,
        list_id: &str,
        guest_id: &str,
        include_shared: Option<bool>,
        cancel: &CancellationToken,
    ) -> Result<()> {
        let path = QueryBuilder::new()
            .opt("include_shared", include_shared)
            .build(&format!("list/{}/guest/{}", list_id, guest_id));
        self.connection.delete(&path, cancel).await
    }

    pub async fn add_guest_to_folder(
        &self,
        folder_id: &str,
        guest_id: &str,
        request: &GuestAccessRequest,
        include_shared: Option<bool>,
        cancel: &CancellationToken,
    ) -> Result<Guest> {
        let path = QueryBuilder::new()
            .opt("include_shared", include_shared)
            .build(&format!("folder/{}/guest/{}", folder_id, guest_id));
        self.guest_from(self.connection.post(&path, &body(request)?, cancel).await?, &path)
    }

    pub async fn remove_guest_from_folder(
        &self,
        folder_id: &str,
        guest_id: &str,
        include_shared: Option<bool>,
        cancel: &CancellationToken,
    ) -> Result<()> {
        let path = QueryBuilder::new()
            .opt("include_shared", include_shared)
            .build(&format!("folder/{}/guest/{}", folder_id, guest_id));
        self.connection.delete(&path, cancel).await
    }

    fn guest_from(&self, response: Option<serde_json::Value>, path: &str) -> Result<Guest> {
        let envelope: GuestResponse = decode(response, path)?;
        require(envelope.guest, "guest", path)
    }
}
