//! Folders de um space

use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use crate::connection::ApiConnection;
use crate::error::Result;
use crate::models::{CreateFromTemplateRequest, Folder, FolderNameRequest, GetFoldersResponse};
use crate::query::QueryBuilder;
use crate::response::{body, decode, require};

#[derive(Clone)]
pub struct FoldersService {
    connection: Arc<dyn ApiConnection>,
}

impl FoldersService {
    pub fn new(connection: Arc<dyn ApiConnection>) -> Self {
        Self { connection }
    }

    /// Folders do space
    ///
    /// # Endpoint da API
    ///
    /// `GET space/{space_id}/folder?archived=false`
    pub async fn get_folders(
        &self,
        space_id: &str,
        archived: Option<bool>,
        cancel: &CancellationToken,
    ) -> Result<Vec<Folder>> {
        let path = QueryBuilder::new()
            .opt("archived", archived)
            .build(&format!("space/{}/folder", space_id));
        let response: GetFoldersResponse = decode(self.connection.get(&path, cancel).await?, &path)?;
        let folders = require(response.folders, "folders", &path)?;
        tracing::debug!("📁 {} folders no space {}", folders.len(), space_id);
        Ok(folders)
    }

    pub async fn create_folder(
        &self,
        space_id: &str,
        request: &FolderNameRequest,
        cancel: &CancellationToken,
    ) -> Result<Folder> {
        let path = format!("space/{}/folder", space_id);
        let response = self.connection.post(&path, &body(request)?, cancel).await?;
        let folder: Folder = decode(response, &path)?;
        tracing::info!("📁 Folder criado: {} ({})", folder.name, folder.id);
        Ok(folder)
    }

    pub async fn get_folder(&self, folder_id: &str, cancel: &CancellationToken) -> Result<Folder> {
        let path = format!("folder/{}", folder_id);
        decode(self.connection.get(&path, cancel).await?, &path)
    }

    /// Renomeia o folder
    pub async fn update_folder(
        &self,
        folder_id: &str,
        request: &FolderNameRequest,
        cancel: &CancellationToken,
    ) -> Result<Folder> {
        let path = format!("folder/{}", folder_id);
        let response = self.connection.put(&path, &body(request)?, cancel).await?;
        decode(response, &path)
    }

    pub async fn delete_folder(&self, folder_id: &str, cancel: &CancellationToken) -> Result<()> {
        self.connection
            .delete(&format!("folder/{}", folder_id), cancel)
            .await
    }

    /// `POST space/{space_id}/folder_template/{template_id}`
    pub async fn create_folder_from_template(
        &self,
        space_id: &str,
        template_id: &str,
        request: &CreateFromTemplateRequest,
        cancel: &CancellationToken,
    ) -> Result<Folder> {
        let path = format!("space/{}/folder_template/{}", space_id, template_id);
        let response = self.connection.post(&path, &body(request)?, cancel).await?;
        decode(response, &path)
    }
}
