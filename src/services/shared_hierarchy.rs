use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use crate::connection::ApiConnection;
use crate::error::Result;
use crate::models::{SharedHierarchy, SharedHierarchyResponse};
use crate::response::{decode, require};

#[derive(Clone)]
pub struct SharedHierarchyService {
    connection: Arc<dyn ApiConnection>,
}

impl SharedHierarchyService {
    pub fn new(connection: Arc<dyn ApiConnection>) -> Self {
        Self { connection }
    }

    /// Tasks, lists e folders compartilhados com o usuário autenticado
    ///
    /// `GET team/{team_id}/shared`
    pub async fn get_shared_hierarchy(
        &self,
        workspace_id: &str,
        cancel: &CancellationToken,
    ) -> Result<SharedHierarchy> {
        let path = format!("team/{}/shared", workspace_id);
        let response: SharedHierarchyResponse = decode(self.connection.get(&path, cancel).await?, &path)?;
        require(response.shared, "shared", &path)
    }
}
