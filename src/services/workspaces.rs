use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use crate::connection::ApiConnection;
use crate::error::Result;
use crate::models::{WorkspacePlan, WorkspaceSeats};
use crate::response::decode;

/// Informações de plano e assentos do workspace
#[derive(Clone)]
pub struct WorkspacesService {
    connection: Arc<dyn ApiConnection>,
}

impl WorkspacesService {
    pub fn new(connection: Arc<dyn ApiConnection>) -> Self {
        Self { connection }
    }

    /// Assentos de membros e convidados usados/disponíveis
    pub async fn get_workspace_seats(&self, workspace_id: &str, cancel: &CancellationToken) -> Result<WorkspaceSeats> {
        let path = format!("team/{}/seats", workspace_id);
        decode(self.connection.get(&path, cancel).await?, &path)
    }

    pub async fn get_workspace_plan(&self, workspace_id: &str, cancel: &CancellationToken) -> Result<WorkspacePlan> {
        let path = format!("team/{}/plan", workspace_id);
        decode(self.connection.get(&path, cancel).await?, &path)
    }
}
