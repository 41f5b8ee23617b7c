use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use crate::connection::ApiConnection;
use crate::error::Result;
use crate::models::{EditUserRequest, InviteUserRequest, Member, MemberResponse, Workspace, WorkspaceResponse};
use crate::response::{body, decode, require};

/// Usuários do workspace (plano Enterprise)
#[derive(Clone)]
pub struct UsersService {
    connection: Arc<dyn ApiConnection>,
}

impl UsersService {
    pub fn new(connection: Arc<dyn ApiConnection>) -> Self {
        Self { connection }
    }

    /// Convida um usuário como membro; retorna o workspace atualizado
    pub async fn invite_user_to_workspace(
        &self,
        workspace_id: &str,
        request: &InviteUserRequest,
        cancel: &CancellationToken,
    ) -> Result<Workspace> {
        let path = format!("team/{}/user", workspace_id);
        let response: WorkspaceResponse =
            decode(self.connection.post(&path, &body(request)?, cancel).await?, &path)?;
        let workspace = require(response.team, "team", &path)?;
        tracing::info!("✉️ Usuário {} convidado para {}", request.email, workspace_id);
        Ok(workspace)
    }

    pub async fn get_user(&self, workspace_id: &str, user_id: &str, cancel: &CancellationToken) -> Result<Member> {
        let path = format!("team/{}/user/{}", workspace_id, user_id);
        let response: MemberResponse = decode(self.connection.get(&path, cancel).await?, &path)?;
        require(response.member, "member", &path)
    }

    /// Altera nome, papel de admin ou role personalizado
    pub async fn edit_user_on_workspace(
        &self,
        workspace_id: &str,
        user_id: &str,
        request: &EditUserRequest,
        cancel: &CancellationToken,
    ) -> Result<Member> {
        let path = format!("team/{}/user/{}", workspace_id, user_id);
        let response: MemberResponse =
            decode(self.connection.put(&path, &body(request)?, cancel).await?, &path)?;
        require(response.member, "member", &path)
    }

    pub async fn remove_user_from_workspace(
        &self,
        workspace_id: &str,
        user_id: &str,
        cancel: &CancellationToken,
    ) -> Result<()> {
        self.connection
            .delete(&format!("team/{}/user/{}", workspace_id, user_id), cancel)
            .await?;
        tracing::info!("🗑️ Usuário {} removido de {}", user_id, workspace_id);
        Ok(())
    }
}
