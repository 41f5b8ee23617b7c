use tokio_util::sync::CancellationToken;

use crate::connection::MultipartPayload;
use crate::error::Result;
use crate::models::{Attachment, CustomTaskIdOptions};
use crate::services::AttachmentsService;

/// Envia um arquivo como anexo de task
///
/// ```rust,ignore
/// let anexo = client
///     .fluent()
///     .upload_attachment("abc123")
///     .with_file("relatorio.pdf", bytes)
///     .with_content_type("application/pdf")
///     .upload(&cancel)
///     .await?;
/// ```
pub struct AttachmentUploadBuilder {
    service: AttachmentsService,
    task_id: String,
    file_name: Option<String>,
    content: Vec<u8>,
    content_type: Option<String>,
    task_ids: CustomTaskIdOptions,
}

impl AttachmentUploadBuilder {
    pub fn new(service: AttachmentsService, task_id: impl Into<String>) -> Self {
        Self {
            service,
            task_id: task_id.into(),
            file_name: None,
            content: Vec::new(),
            content_type: None,
            task_ids: CustomTaskIdOptions::default(),
        }
    }

    pub fn with_file(mut self, file_name: impl Into<String>, content: impl Into<Vec<u8>>) -> Self {
        self.file_name = Some(file_name.into());
        self.content = content.into();
        self
    }

    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    pub fn with_custom_task_ids(mut self, team_id: impl Into<String>) -> Self {
        self.task_ids = CustomTaskIdOptions::custom(team_id);
        self
    }

    pub async fn upload(self, cancel: &CancellationToken) -> Result<Attachment> {
        let mut payload = MultipartPayload::new(self.file_name.unwrap_or_default(), self.content);
        if let Some(content_type) = self.content_type {
            payload = payload.with_content_type(content_type);
        }
        self.service
            .create_task_attachment(&self.task_id, payload, &self.task_ids, cancel)
            .await
    }
}
