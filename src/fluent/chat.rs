use tokio_util::sync::CancellationToken;

use crate::error::Result;
use crate::models::{ChatChannel, ChatMessage, CreateChatChannelRequest, CreateChatMessageRequest};
use crate::services::ChatService;

pub struct ChatChannelCreateBuilder {
    service: ChatService,
    workspace_id: String,
    request: CreateChatChannelRequest,
}

impl ChatChannelCreateBuilder {
    pub fn new(service: ChatService, workspace_id: impl Into<String>) -> Self {
        Self {
            service,
            workspace_id: workspace_id.into(),
            request: CreateChatChannelRequest::default(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.request.name = name.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.request.description = Some(description.into());
        self
    }

    pub fn with_topic(mut self, topic: impl Into<String>) -> Self {
        self.request.topic = Some(topic.into());
        self
    }

    pub fn with_members(mut self, user_ids: Vec<String>) -> Self {
        self.request.user_ids = user_ids;
        self
    }

    pub fn with_visibility(mut self, visibility: impl Into<String>) -> Self {
        self.request.visibility = Some(visibility.into());
        self
    }

    pub async fn create(self, cancel: &CancellationToken) -> Result<ChatChannel> {
        self.service
            .create_chat_channel(&self.workspace_id, &self.request, cancel)
            .await
    }
}

/// Envia mensagem num canal, ou resposta em thread com `with_reply_to`
pub struct ChatMessageSendBuilder {
    service: ChatService,
    workspace_id: String,
    channel_id: String,
    reply_to: Option<String>,
    request: CreateChatMessageRequest,
}

impl ChatMessageSendBuilder {
    pub fn new(
        service: ChatService,
        workspace_id: impl Into<String>,
        channel_id: impl Into<String>,
    ) -> Self {
        Self {
            service,
            workspace_id: workspace_id.into(),
            channel_id: channel_id.into(),
            reply_to: None,
            request: CreateChatMessageRequest::message(""),
        }
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.request.content = content.into();
        self
    }

    /// `text/md` ou `text/plain`
    pub fn with_content_format(mut self, format: impl Into<String>) -> Self {
        self.request.content_format = Some(format.into());
        self
    }

    /// `message` ou `post`
    pub fn with_type(mut self, message_type: impl Into<String>) -> Self {
        self.request.message_type = message_type.into();
        self
    }

    pub fn with_followers(mut self, user_ids: Vec<String>) -> Self {
        self.request.followers = user_ids;
        self
    }

    pub fn with_reply_to(mut self, message_id: impl Into<String>) -> Self {
        self.reply_to = Some(message_id.into());
        self
    }

    pub async fn send(self, cancel: &CancellationToken) -> Result<ChatMessage> {
        match &self.reply_to {
            Some(message_id) => {
                self.service
                    .create_reply_message(&self.workspace_id, message_id, &self.request, cancel)
                    .await
            }
            None => {
                self.service
                    .create_chat_message(&self.workspace_id, &self.channel_id, &self.request, cancel)
                    .await
            }
        }
    }
}
