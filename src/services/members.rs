use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use crate::connection::ApiConnection;
use crate::error::Result;
use crate::models::{GetMembersResponse, User};
use crate::response::{decode, require};

/// Quem tem acesso explícito a uma task ou list
#[derive(Clone)]
pub struct MembersService {
    connection: Arc<dyn ApiConnection>,
}

impl MembersService {
    pub fn new(connection: Arc<dyn ApiConnection>) -> Self {
        Self { connection }
    }

    /// `GET task/{task_id}/member`
    pub async fn get_task_members(&self, task_id: &str, cancel: &CancellationToken) -> Result<Vec<User>> {
        self.fetch_members(&format!("task/{}/member", task_id), cancel).await
    }

    /// `GET list/{list_id}/member`
    pub async fn get_list_members(&self, list_id: &str, cancel: &CancellationToken) -> Result<Vec<User>> {
        self.fetch_members(&format!("list/{}/member", list_id), cancel).await
    }

    async fn fetch_members(&self, path: &str, cancel: &CancellationToken) -> Result<Vec<User>> {
        let response: GetMembersResponse = decode(self.connection.get(path, cancel).await?, path)?;
        require(response.members, "members", path)
    }
}
