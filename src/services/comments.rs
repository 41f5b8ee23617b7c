//! Comentários de tasks, lists e views de chat
//!
//! # Paginação
//!
//! A API devolve no máximo 25 comentários por chamada, do mais novo para o
//! mais antigo. A primeira página usa `start` (timestamp); as seguintes usam
//! `start_id` com o ID do último comentário recebido e **não** repetem
//! `start`. Os métodos `*_stream` seguem exatamente essa regra até receber
//! uma página vazia.

use std::sync::Arc;

use futures::stream::BoxStream;
use tokio_util::sync::CancellationToken;

use crate::connection::ApiConnection;
use crate::error::Result;
use crate::models::{
    Comment, CommentCursor, CreateCommentRequest, CreateCommentResponse, CustomTaskIdOptions,
    GetCommentsResponse, GetTaskCommentsQuery, UpdateCommentRequest,
};
use crate::pagination::{paginate, Page};
use crate::query::QueryBuilder;
use crate::response::{body, decode, require};

#[derive(Clone)]
pub struct CommentsService {
    connection: Arc<dyn ApiConnection>,
}

impl CommentsService {
    pub fn new(connection: Arc<dyn ApiConnection>) -> Self {
        Self { connection }
    }

    // ==================== TASK ====================

    /// Uma página de comentários da task
    ///
    /// `GET task/{task_id}/comment`
    pub async fn get_task_comments(
        &self,
        task_id: &str,
        query: &GetTaskCommentsQuery,
        cancel: &CancellationToken,
    ) -> Result<Vec<Comment>> {
        let path = query.to_query().build(&format!("task/{}/comment", task_id));
        fetch_comments(self.connection.as_ref(), &path, cancel).await
    }

    /// Todos os comentários da task, página a página, sob demanda
    ///
    /// Nenhuma requisição é feita até o primeiro `next()`. Cancelar o token
    /// encerra o stream com `ClickUpError::Cancelled`.
    ///
    /// ```rust,ignore
    /// let mut comments = client
    ///     .comments()
    ///     .get_task_comments_stream("task123", &CustomTaskIdOptions::default(), Some(0), &cancel);
    /// while let Some(comment) = comments.next().await {
    ///     println!("{}", comment?.id);
    /// }
    /// ```
    pub fn get_task_comments_stream(
        &self,
        task_id: &str,
        task_ids: &CustomTaskIdOptions,
        start: Option<i64>,
        cancel: &CancellationToken,
    ) -> BoxStream<'static, Result<Comment>> {
        comment_stream(
            self.connection.clone(),
            format!("task/{}/comment", task_id),
            task_ids.apply(QueryBuilder::new()),
            start,
            cancel.clone(),
        )
    }

    /// `POST task/{task_id}/comment`
    pub async fn create_task_comment(
        &self,
        task_id: &str,
        request: &CreateCommentRequest,
        task_ids: &CustomTaskIdOptions,
        cancel: &CancellationToken,
    ) -> Result<CreateCommentResponse> {
        let path = task_ids
            .apply(QueryBuilder::new())
            .build(&format!("task/{}/comment", task_id));
        let response = self.connection.post(&path, &body(request)?, cancel).await?;
        let created: CreateCommentResponse = decode(response, &path)?;
        tracing::info!("💬 Comentário criado na task {}", task_id);
        Ok(created)
    }

    // ==================== VIEW DE CHAT ====================

    /// `GET view/{view_id}/comment`
    pub async fn get_chat_view_comments(
        &self,
        view_id: &str,
        start: Option<i64>,
        start_id: Option<&str>,
        cancel: &CancellationToken,
    ) -> Result<Vec<Comment>> {
        let path = QueryBuilder::new()
            .opt("start", start)
            .opt("start_id", start_id)
            .build(&format!("view/{}/comment", view_id));
        fetch_comments(self.connection.as_ref(), &path, cancel).await
    }

    pub fn get_chat_view_comments_stream(
        &self,
        view_id: &str,
        start: Option<i64>,
        cancel: &CancellationToken,
    ) -> BoxStream<'static, Result<Comment>> {
        comment_stream(
            self.connection.clone(),
            format!("view/{}/comment", view_id),
            QueryBuilder::new(),
            start,
            cancel.clone(),
        )
    }

    /// `POST view/{view_id}/comment`
    pub async fn create_chat_view_comment(
        &self,
        view_id: &str,
        request: &CreateCommentRequest,
        cancel: &CancellationToken,
    ) -> Result<CreateCommentResponse> {
        let path = format!("view/{}/comment", view_id);
        let response = self.connection.post(&path, &body(request)?, cancel).await?;
        decode(response, &path)
    }

    // ==================== LIST ====================

    /// `GET list/{list_id}/comment`
    pub async fn get_list_comments(
        &self,
        list_id: &str,
        start: Option<i64>,
        start_id: Option<&str>,
        cancel: &CancellationToken,
    ) -> Result<Vec<Comment>> {
        let path = QueryBuilder::new()
            .opt("start", start)
            .opt("start_id", start_id)
            .build(&format!("list/{}/comment", list_id));
        fetch_comments(self.connection.as_ref(), &path, cancel).await
    }

    pub fn get_list_comments_stream(
        &self,
        list_id: &str,
        start: Option<i64>,
        cancel: &CancellationToken,
    ) -> BoxStream<'static, Result<Comment>> {
        comment_stream(
            self.connection.clone(),
            format!("list/{}/comment", list_id),
            QueryBuilder::new(),
            start,
            cancel.clone(),
        )
    }

    /// `POST list/{list_id}/comment`
    pub async fn create_list_comment(
        &self,
        list_id: &str,
        request: &CreateCommentRequest,
        cancel: &CancellationToken,
    ) -> Result<CreateCommentResponse> {
        let path = format!("list/{}/comment", list_id);
        let response = self.connection.post(&path, &body(request)?, cancel).await?;
        decode(response, &path)
    }

    // ==================== EDIÇÃO E RESPOSTAS ====================

    /// Atualiza texto, responsável ou resolução (`PUT comment/{comment_id}`)
    pub async fn update_comment(
        &self,
        comment_id: &str,
        request: &UpdateCommentRequest,
        cancel: &CancellationToken,
    ) -> Result<()> {
        let path = format!("comment/{}", comment_id);
        self.connection.put(&path, &body(request)?, cancel).await?;
        Ok(())
    }

    pub async fn delete_comment(&self, comment_id: &str, cancel: &CancellationToken) -> Result<()> {
        self.connection
            .delete(&format!("comment/{}", comment_id), cancel)
            .await?;
        tracing::info!("🗑️ Comentário {} removido", comment_id);
        Ok(())
    }

    /// Respostas (thread) de um comentário: `GET comment/{comment_id}/reply`
    pub async fn get_threaded_comments(
        &self,
        comment_id: &str,
        cancel: &CancellationToken,
    ) -> Result<Vec<Comment>> {
        let path = format!("comment/{}/reply", comment_id);
        fetch_comments(self.connection.as_ref(), &path, cancel).await
    }

    pub async fn create_threaded_comment(
        &self,
        comment_id: &str,
        request: &CreateCommentRequest,
        cancel: &CancellationToken,
    ) -> Result<CreateCommentResponse> {
        let path = format!("comment/{}/reply", comment_id);
        let response = self.connection.post(&path, &body(request)?, cancel).await?;
        decode(response, &path)
    }
}

async fn fetch_comments(
    connection: &dyn ApiConnection,
    path: &str,
    cancel: &CancellationToken,
) -> Result<Vec<Comment>> {
    let response: GetCommentsResponse = decode(connection.get(path, cancel).await?, path)?;
    let comments = require(response.comments, "comments", path)?;
    tracing::debug!("{} comentários recebidos de {}", comments.len(), path);
    Ok(comments)
}

/// Stream de comentários com cursor `start` → `start_id`
fn comment_stream(
    connection: Arc<dyn ApiConnection>,
    path: String,
    base_query: QueryBuilder,
    start: Option<i64>,
    cancel: CancellationToken,
) -> BoxStream<'static, Result<Comment>> {
    let token = cancel.clone();
    paginate(CommentCursor::Start(start), cancel, move |cursor: CommentCursor| {
        let connection = connection.clone();
        let url = cursor.apply(base_query.clone()).build(&path);
        let token = token.clone();
        async move {
            let comments = fetch_comments(connection.as_ref(), &url, &token).await?;
            let next = comments
                .last()
                .map(|comment| CommentCursor::StartId(comment.id.clone()));
            Ok(Page::new(comments, next))
        }
    })
}
