//! Chat (API v3)
//!
//! Caminhos em `v3/workspaces/{workspace_id}/chat/...`. Listagens vêm no
//! formato `{"data": [...], "next_cursor": "..."}`; objetos únicos no
//! envelope `{"data": {...}}`.

use std::sync::Arc;

use futures::stream::BoxStream;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tokio_util::sync::CancellationToken;

use crate::connection::ApiConnection;
use crate::error::Result;
use crate::models::{
    ChatChannel, ChatMessage, ChatPageQuery, ChatReaction, CreateChatChannelRequest,
    CreateChatMessageRequest, CreateReactionRequest, CursorPage, DataResponse, GetChatChannelsQuery,
    UpdateChatChannelRequest, UpdateChatMessageRequest,
};
use crate::pagination::{paginate, Page};
use crate::query::{segment, QueryBuilder};
use crate::response::{body, decode, require};

#[derive(Clone)]
pub struct ChatService {
    connection: Arc<dyn ApiConnection>,
}

impl ChatService {
    pub fn new(connection: Arc<dyn ApiConnection>) -> Self {
        Self { connection }
    }

    // ==================== CANAIS ====================

    pub async fn get_chat_channels(
        &self,
        workspace_id: &str,
        query: &GetChatChannelsQuery,
        cancel: &CancellationToken,
    ) -> Result<Page<ChatChannel, String>> {
        let path = query.to_query().build(&channels_path(workspace_id));
        fetch_cursor_page(self.connection.as_ref(), &path, cancel).await
    }

    /// Todos os canais, seguindo `next_cursor` até página vazia ou cursor ausente
    pub fn get_chat_channels_stream(
        &self,
        workspace_id: &str,
        query: GetChatChannelsQuery,
        cancel: &CancellationToken,
    ) -> BoxStream<'static, Result<ChatChannel>> {
        let base_path = channels_path(workspace_id);
        let first = query.cursor.clone();
        cursor_stream(self.connection.clone(), first, cancel.clone(), move |cursor| {
            let mut query = query.clone();
            query.cursor = cursor;
            query.to_query().build(&base_path)
        })
    }

    pub async fn create_chat_channel(
        &self,
        workspace_id: &str,
        request: &CreateChatChannelRequest,
        cancel: &CancellationToken,
    ) -> Result<ChatChannel> {
        let path = channels_path(workspace_id);
        let channel: ChatChannel = data(self.connection.post(&path, &body(request)?, cancel).await?, &path)?;
        tracing::info!("💬 Canal criado: {} ({})", channel.name, channel.id);
        Ok(channel)
    }

    pub async fn get_chat_channel(
        &self,
        workspace_id: &str,
        channel_id: &str,
        cancel: &CancellationToken,
    ) -> Result<ChatChannel> {
        let path = format!("{}/{}", channels_path(workspace_id), channel_id);
        data(self.connection.get(&path, cancel).await?, &path)
    }

    /// `PATCH v3/workspaces/{id}/chat/channels/{channel_id}`
    pub async fn update_chat_channel(
        &self,
        workspace_id: &str,
        channel_id: &str,
        request: &UpdateChatChannelRequest,
        cancel: &CancellationToken,
    ) -> Result<ChatChannel> {
        let path = format!("{}/{}", channels_path(workspace_id), channel_id);
        data(self.connection.patch(&path, &body(request)?, cancel).await?, &path)
    }

    pub async fn delete_chat_channel(
        &self,
        workspace_id: &str,
        channel_id: &str,
        cancel: &CancellationToken,
    ) -> Result<()> {
        let path = format!("{}/{}", channels_path(workspace_id), channel_id);
        self.connection.delete(&path, cancel).await
    }

    // ==================== MENSAGENS ====================

    pub async fn get_chat_messages(
        &self,
        workspace_id: &str,
        channel_id: &str,
        query: &ChatPageQuery,
        cancel: &CancellationToken,
    ) -> Result<Page<ChatMessage, String>> {
        let path = query
            .to_query()
            .build(&channel_messages_path(workspace_id, channel_id));
        fetch_cursor_page(self.connection.as_ref(), &path, cancel).await
    }

    pub fn get_chat_messages_stream(
        &self,
        workspace_id: &str,
        channel_id: &str,
        query: ChatPageQuery,
        cancel: &CancellationToken,
    ) -> BoxStream<'static, Result<ChatMessage>> {
        let base_path = channel_messages_path(workspace_id, channel_id);
        let first = query.cursor.clone();
        cursor_stream(self.connection.clone(), first, cancel.clone(), move |cursor| {
            let mut query = query.clone();
            query.cursor = cursor;
            query.to_query().build(&base_path)
        })
    }

    pub async fn create_chat_message(
        &self,
        workspace_id: &str,
        channel_id: &str,
        request: &CreateChatMessageRequest,
        cancel: &CancellationToken,
    ) -> Result<ChatMessage> {
        let path = channel_messages_path(workspace_id, channel_id);
        let message: ChatMessage = data(self.connection.post(&path, &body(request)?, cancel).await?, &path)?;
        tracing::info!("💬 Mensagem {} enviada ao canal {}", message.id, channel_id);
        Ok(message)
    }

    /// `PATCH v3/workspaces/{id}/chat/messages/{message_id}`
    pub async fn update_chat_message(
        &self,
        workspace_id: &str,
        message_id: &str,
        request: &UpdateChatMessageRequest,
        cancel: &CancellationToken,
    ) -> Result<ChatMessage> {
        let path = message_path(workspace_id, message_id);
        data(self.connection.patch(&path, &body(request)?, cancel).await?, &path)
    }

    pub async fn delete_chat_message(
        &self,
        workspace_id: &str,
        message_id: &str,
        cancel: &CancellationToken,
    ) -> Result<()> {
        self.connection
            .delete(&message_path(workspace_id, message_id), cancel)
            .await
    }

    // ==================== REAÇÕES ====================

    pub async fn get_message_reactions(
        &self,
        workspace_id: &str,
        message_id: &str,
        query: &ChatPageQuery,
        cancel: &CancellationToken,
    ) -> Result<Page<ChatReaction, String>> {
        let path = query
            .to_query()
            .build(&format!("{}/reactions", message_path(workspace_id, message_id)));
        fetch_cursor_page(self.connection.as_ref(), &path, cancel).await
    }

    pub async fn create_message_reaction(
        &self,
        workspace_id: &str,
        message_id: &str,
        request: &CreateReactionRequest,
        cancel: &CancellationToken,
    ) -> Result<()> {
        let path = format!("{}/reactions", message_path(workspace_id, message_id));
        self.connection
            .post_no_content(&path, &body(request)?, cancel)
            .await
    }

    /// Remove a reação do usuário; o nome da reação é codificado no caminho
    pub async fn delete_message_reaction(
        &self,
        workspace_id: &str,
        message_id: &str,
        reaction: &str,
        cancel: &CancellationToken,
    ) -> Result<()> {
        let path = format!(
            "{}/reactions/{}",
            message_path(workspace_id, message_id),
            segment(reaction)
        );
        self.connection.delete(&path, cancel).await
    }

    // ==================== RESPOSTAS ====================

    pub async fn get_message_replies(
        &self,
        workspace_id: &str,
        message_id: &str,
        query: &ChatPageQuery,
        cancel: &CancellationToken,
    ) -> Result<Page<ChatMessage, String>> {
        let path = query
            .to_query()
            .build(&format!("{}/replies", message_path(workspace_id, message_id)));
        fetch_cursor_page(self.connection.as_ref(), &path, cancel).await
    }

    pub async fn create_reply_message(
        &self,
        workspace_id: &str,
        message_id: &str,
        request: &CreateChatMessageRequest,
        cancel: &CancellationToken,
    ) -> Result<ChatMessage> {
        let path = format!("{}/replies", message_path(workspace_id, message_id));
        data(self.connection.post(&path, &body(request)?, cancel).await?, &path)
    }
}

fn channels_path(workspace_id: &str) -> String {
    format!("v3/workspaces/{}/chat/channels", workspace_id)
}

fn channel_messages_path(workspace_id: &str, channel_id: &str) -> String {
    format!("{}/{}/messages", channels_path(workspace_id), channel_id)
}

fn message_path(workspace_id: &str, message_id: &str) -> String {
    format!("v3/workspaces/{}/chat/messages/{}", workspace_id, message_id)
}

fn data<T: DeserializeOwned>(response: Option<Value>, path: &str) -> Result<T> {
    let envelope: DataResponse<T> = decode(response, path)?;
    require(envelope.data, "data", path)
}

async fn fetch_cursor_page<T: DeserializeOwned>(
    connection: &dyn ApiConnection,
    path: &str,
    cancel: &CancellationToken,
) -> Result<Page<T, String>> {
    let response: CursorPage<T> = decode(connection.get(path, cancel).await?, path)?;
    let items = require(response.data, "data", path)?;
    let next = response.next_cursor.filter(|cursor| !cursor.is_empty());
    Ok(Page::new(items, next))
}

/// Stream v3 guiado por `next_cursor`
fn cursor_stream<T, P>(
    connection: Arc<dyn ApiConnection>,
    first: Option<String>,
    cancel: CancellationToken,
    page_path: P,
) -> BoxStream<'static, Result<T>>
where
    T: DeserializeOwned + Send + 'static,
    P: Fn(Option<String>) -> String + Send + 'static,
{
    let token = cancel.clone();
    paginate(first, cancel, move |cursor: Option<String>| {
        let connection = connection.clone();
        let path = page_path(cursor);
        let token = token.clone();
        async move {
            let page: Page<T, String> = fetch_cursor_page(connection.as_ref(), &path, &token).await?;
            Ok(Page::new(page.items, page.next.map(Some)))
        }
    })
}
