//! Grupos de usuários ("Teams" na interface do ClickUp)

use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use crate::connection::ApiConnection;
use crate::error::Result;
use crate::models::{CreateUserGroupRequest, GetUserGroupsResponse, UpdateUserGroupRequest, UserGroup};
use crate::query::QueryBuilder;
use crate::response::{body, decode, require};

#[derive(Clone)]
pub struct UserGroupsService {
    connection: Arc<dyn ApiConnection>,
}

impl UserGroupsService {
    pub fn new(connection: Arc<dyn ApiConnection>) -> Self {
        Self { connection }
    }

    /// `GET group?team_id=..&group_ids=..`
    ///
    /// `group_ids` vai separado por vírgula, como a API espera.
    pub async fn get_user_groups(
        &self,
        workspace_id: Option<&str>,
        group_ids: &[String],
        cancel: &CancellationToken,
    ) -> Result<Vec<UserGroup>> {
        let ids = (!group_ids.is_empty()).then(|| group_ids.join(","));
        let path = QueryBuilder::new()
            .opt("team_id", workspace_id)
            .opt("group_ids", ids)
            .build("group");
        let response: GetUserGroupsResponse = decode(self.connection.get(&path, cancel).await?, &path)?;
        require(response.groups, "groups", &path)
    }

    pub async fn create_user_group(
        &self,
        workspace_id: &str,
        request: &CreateUserGroupRequest,
        cancel: &CancellationToken,
    ) -> Result<UserGroup> {
        let path = format!("team/{}/group", workspace_id);
        let group: UserGroup = decode(self.connection.post(&path, &body(request)?, cancel).await?, &path)?;
        tracing::info!("👥 Grupo criado: {} ({})", group.name, group.id);
        Ok(group)
    }

    pub async fn update_user_group(
        &self,
        group_id: &str,
        request: &UpdateUserGroupRequest,
        cancel: &CancellationToken,
    ) -> Result<UserGroup> {
        let path = format!("group/{}", group_id);
        decode(self.connection.put(&path, &body(request)?, cancel).await?, &path)
    }

    pub async fn delete_user_group(&self, group_id: &str, cancel: &CancellationToken) -> Result<()> {
        self.connection.delete(&format!("group/{}", group_id), cancel).await
    }
}
