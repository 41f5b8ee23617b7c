use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use crate::connection::ApiConnection;
use crate::error::Result;
use crate::models::{CustomRole, GetCustomRolesResponse};
use crate::query::QueryBuilder;
use crate::response::{decode, require};

/// Roles personalizados do workspace (plano Enterprise)
#[derive(Clone)]
pub struct RolesService {
    connection: Arc<dyn ApiConnection>,
}

impl RolesService {
    pub fn new(connection: Arc<dyn ApiConnection>) -> Self {
        Self { connection }
    }

    /// `GET team/{team_id}/customroles?include_members=true`
    pub async fn get_custom_roles(
        &self,
        workspace_id: &str,
        include_members: Option<bool>,
        cancel: &CancellationToken,
    ) -> Result<Vec<CustomRole>> {
        let path = QueryBuilder::new()
            .opt("include_members", include_members)
            .build(&format!("team/{}/customroles", workspace_id));
        let response: GetCustomRolesResponse = decode(self.connection.get(&path, cancel).await?, &path)?;
        require(response.custom_roles, "custom_roles", &path)
    }
}
