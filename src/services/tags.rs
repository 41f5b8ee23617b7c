//! Tags de space e de task
//!
//! Nomes de tag aparecem no caminho da URL e são codificados uma vez
//! (`urgent fix` → `urgent%20fix`).

use std::sync::Arc;

use serde_json::json;
use tokio_util::sync::CancellationToken;

use crate::connection::ApiConnection;
use crate::error::Result;
use crate::models::{CreateTagRequest, CustomTaskIdOptions, EditTagRequest, GetTagsResponse, Tag};
use crate::query::{segment, QueryBuilder};
use crate::response::{body, decode, require};

#[derive(Clone)]
pub struct TagsService {
    connection: Arc<dyn ApiConnection>,
}

impl TagsService {
    pub fn new(connection: Arc<dyn ApiConnection>) -> Self {
        Self { connection }
    }

    /// `GET space/{space_id}/tag`
    pub async fn get_space_tags(&self, space_id: &str, cancel: &CancellationToken) -> Result<Vec<Tag>> {
        let path = format!("space/{}/tag", space_id);
        let response: GetTagsResponse = decode(self.connection.get(&path, cancel).await?, &path)?;
        require(response.tags, "tags", &path)
    }

    pub async fn create_space_tag(
        &self,
        space_id: &str,
        request: &CreateTagRequest,
        cancel: &CancellationToken,
    ) -> Result<()> {
        let path = format!("space/{}/tag", space_id);
        self.connection
            .post_no_content(&path, &body(request)?, cancel)
            .await?;
        tracing::info!("🏷️ Tag '{}' criada no space {}", request.tag.name, space_id);
        Ok(())
    }

    /// Renomeia/recolore a tag (`PUT space/{space_id}/tag/{tag_name}`)
    pub async fn edit_space_tag(
        &self,
        space_id: &str,
        tag_name: &str,
        request: &EditTagRequest,
        cancel: &CancellationToken,
    ) -> Result<()> {
        let path = format!("space/{}/tag/{}", space_id, segment(tag_name));
        self.connection.put(&path, &body(request)?, cancel).await?;
        Ok(())
    }

    pub async fn delete_space_tag(
        &self,
        space_id: &str,
        tag_name: &str,
        cancel: &CancellationToken,
    ) -> Result<()> {
        let path = format!("space/{}/tag/{}", space_id, segment(tag_name));
        self.connection.delete(&path, cancel).await
    }

    /// `POST task/{task_id}/tag/{tag_name}`
    pub async fn add_tag_to_task(
        &self,
        task_id: &str,
        tag_name: &str,
        task_ids: &CustomTaskIdOptions,
        cancel: &CancellationToken,
    ) -> Result<()> {
        let path = task_ids
            .apply(QueryBuilder::new())
            .build(&format!("task/{}/tag/{}", task_id, segment(tag_name)));
        self.connection.post_no_content(&path, &json!({}), cancel).await
    }

    pub async fn remove_tag_from_task(
        &self,
        task_id: &str,
        tag_name: &str,
        task_ids: &CustomTaskIdOptions,
        cancel: &CancellationToken,
    ) -> Result<()> {
        let path = task_ids
            .apply(QueryBuilder::new())
            .build(&format!("task/{}/tag/{}", task_id, segment(tag_name)));
        self.connection.delete(&path, cancel).await
    }
}
