use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use crate::connection::{ApiConnection, MultipartPayload};
use crate::error::Result;
use crate::models::{Attachment, CustomTaskIdOptions};
use crate::query::QueryBuilder;
use crate::response::decode;

/// Upload de anexos (multipart)
#[derive(Clone)]
pub struct AttachmentsService {
    connection: Arc<dyn ApiConnection>,
}

impl AttachmentsService {
    pub fn new(connection: Arc<dyn ApiConnection>) -> Self {
        Self { connection }
    }

    /// Envia um arquivo como anexo da task
    ///
    /// # Endpoint da API
    ///
    /// `POST task/{task_id}/attachment` (multipart/form-data, campo `attachment`)
    ///
    /// O payload é repassado à conexão sem alterações.
    pub async fn create_task_attachment(
        &self,
        task_id: &str,
        payload: MultipartPayload,
        task_ids: &CustomTaskIdOptions,
        cancel: &CancellationToken,
    ) -> Result<Attachment> {
        let path = task_ids
            .apply(QueryBuilder::new())
            .build(&format!("task/{}/attachment", task_id));
        let file_name = payload.file_name.clone();
        let response = self.connection.post_multipart(&path, payload, cancel).await?;
        let attachment: Attachment = decode(response, &path)?;
        tracing::info!("📎 Anexo '{}' enviado para a task {}", file_name, task_id);
        Ok(attachment)
    }
}
