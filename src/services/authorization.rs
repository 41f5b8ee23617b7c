//! Autorização
//!
//! # Modos de autenticação
//!
//! - **Personal Token** (`pk_...`): configurado direto no cliente
//! - **OAuth2**: o app troca o `code` recebido no redirect por um access token
//!   com [`AuthorizationService::get_access_token`]. O fluxo no navegador fica
//!   fora deste crate.

use std::sync::Arc;

use serde_json::json;
use tokio_util::sync::CancellationToken;

use crate::connection::ApiConnection;
use crate::error::Result;
use crate::models::{AccessTokenResponse, GetWorkspacesResponse, User, UserResponse, Workspace};
use crate::query::QueryBuilder;
use crate::response::{decode, require};

#[derive(Clone)]
pub struct AuthorizationService {
    connection: Arc<dyn ApiConnection>,
}

impl AuthorizationService {
    pub fn new(connection: Arc<dyn ApiConnection>) -> Self {
        Self { connection }
    }

    /// Troca o código OAuth2 por um access token
    ///
    /// `POST oauth/token?client_id=..&client_secret=..&code=..`
    pub async fn get_access_token(
        &self,
        client_id: &str,
        client_secret: &str,
        code: &str,
        cancel: &CancellationToken,
    ) -> Result<String> {
        let path = QueryBuilder::new()
            .push("client_id", client_id)
            .push("client_secret", client_secret)
            .push("code", code)
            .build("oauth/token");
        let response: AccessTokenResponse = decode(self.connection.post(&path, &json!({}), cancel).await?, "oauth/token")?;
        let token = require(response.access_token, "access_token", "oauth/token")?;
        tracing::info!("🔑 Access token OAuth2 obtido");
        Ok(token)
    }

    /// Usuário dono do token (`GET user`)
    pub async fn get_authorized_user(&self, cancel: &CancellationToken) -> Result<User> {
        let response: UserResponse = decode(self.connection.get("user", cancel).await?, "user")?;
        require(response.user, "user", "user")
    }

    /// Workspaces acessíveis pelo token (`GET team`)
    pub async fn get_authorized_workspaces(&self, cancel: &CancellationToken) -> Result<Vec<Workspace>> {
        let response: GetWorkspacesResponse = decode(self.connection.get("team", cancel).await?, "team")?;
        let workspaces = require(response.teams, "teams", "team")?;
        tracing::debug!("{} workspaces autorizados", workspaces.len());
        Ok(workspaces)
    }
}
