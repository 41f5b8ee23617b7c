use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use crate::connection::ApiConnection;
use crate::error::Result;
use crate::models::{CreateSpaceRequest, GetSpacesResponse, Space, UpdateSpaceRequest};
use crate::query::QueryBuilder;
use crate::response::{body, decode, require};

/// Spaces de um workspace
#[derive(Clone)]
pub struct SpacesService {
    connection: Arc<dyn ApiConnection>,
}

impl SpacesService {
    pub fn new(connection: Arc<dyn ApiConnection>) -> Self {
        Self { connection }
    }

    /// `GET team/{team_id}/space`
    pub async fn get_spaces(
        &self,
        workspace_id: &str,
        archived: Option<bool>,
        cancel: &CancellationToken,
    ) -> Result<Vec<Space>> {
        let path = QueryBuilder::new()
            .opt("archived", archived)
            .build(&format!("team/{}/space", workspace_id));
        let response: GetSpacesResponse = decode(self.connection.get(&path, cancel).await?, &path)?;
        require(response.spaces, "spaces", &path)
    }

    pub async fn create_space(
        &self,
        workspace_id: &str,
        request: &CreateSpaceRequest,
        cancel: &CancellationToken,
    ) -> Result<Space> {
        let path = format!("team/{}/space", workspace_id);
        let response = self.connection.post(&path, &body(request)?, cancel).await?;
        let space: Space = decode(response, &path)?;
        tracing::info!("✅ Space criado: {} ({})", space.name, space.id);
        Ok(space)
    }

    pub async fn get_space(&self, space_id: &str, cancel: &CancellationToken) -> Result<Space> {
        let path = format!("space/{}", space_id);
        decode(self.connection.get(&path, cancel).await?, &path)
    }

    pub async fn update_space(
        &self,
        space_id: &str,
        request: &UpdateSpaceRequest,
        cancel: &CancellationToken,
    ) -> Result<Space> {
        let path = format!("space/{}", space_id);
        let response = self.connection.put(&path, &body(request)?, cancel).await?;
        decode(response, &path)
    }

    pub async fn delete_space(&self, space_id: &str, cancel: &CancellationToken) -> Result<()> {
        self.connection
            .delete(&format!("space/{}", space_id), cancel)
            .await
    }
}
