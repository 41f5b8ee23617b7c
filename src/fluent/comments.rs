use tokio_util::sync::CancellationToken;

use crate::error::Result;
use crate::models::{
    Comment, CreateCommentRequest, CreateCommentResponse, CustomTaskIdOptions, GetTaskCommentsQuery,
};
use crate::services::CommentsService;

/// Onde o comentário será publicado
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommentTarget {
    Task(String),
    List(String),
    ChatView(String),
}

/// Publica um comentário em task, list ou view de chat
pub struct CommentCreateBuilder {
    service: CommentsService,
    target: CommentTarget,
    text: Option<String>,
    assignee: Option<i64>,
    group_assignee: Option<String>,
    notify_all: Option<bool>,
    task_ids: CustomTaskIdOptions,
}

impl CommentCreateBuilder {
    pub fn new(service: CommentsService, target: CommentTarget) -> Self {
        Self {
            service,
            target,
            text: None,
            assignee: None,
            group_assignee: None,
            notify_all: None,
            task_ids: CustomTaskIdOptions::default(),
        }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn with_assignee(mut self, user_id: i64) -> Self {
        self.assignee = Some(user_id);
        self
    }

    pub fn with_group_assignee(mut self, group_id: impl Into<String>) -> Self {
        self.group_assignee = Some(group_id.into());
        self
    }

    pub fn with_notify_all(mut self, notify_all: bool) -> Self {
        self.notify_all = Some(notify_all);
        self
    }

    /// Só tem efeito para comentários em task
    pub fn with_custom_task_ids(mut self, team_id: impl Into<String>) -> Self {
        self.task_ids = CustomTaskIdOptions::custom(team_id);
        self
    }

    pub async fn add(self, cancel: &CancellationToken) -> Result<CreateCommentResponse> {
        let request = CreateCommentRequest {
            comment_text: self.text.unwrap_or_default(),
            assignee: self.assignee,
            group_assignee: self.group_assignee,
            notify_all: self.notify_all.unwrap_or_default(),
        };

        match &self.target {
            CommentTarget::Task(task_id) => {
                self.service
                    .create_task_comment(task_id, &request, &self.task_ids, cancel)
                    .await
            }
            CommentTarget::List(list_id) => {
                self.service.create_list_comment(list_id, &request, cancel).await
            }
            CommentTarget::ChatView(view_id) => {
                self.service
                    .create_chat_view_comment(view_id, &request, cancel)
                    .await
            }
        }
    }
}

/// Lê uma página de comentários da task
pub struct TaskCommentsQueryBuilder {
    service: CommentsService,
    task_id: String,
    query: GetTaskCommentsQuery,
}

impl TaskCommentsQueryBuilder {
    pub fn new(service: CommentsService, task_id: impl Into<String>) -> Self {
        Self {
            service,
            task_id: task_id.into(),
            query: GetTaskCommentsQuery::default(),
        }
    }

    pub fn with_start(mut self, start: i64) -> Self {
        self.query.start = Some(start);
        self
    }

    pub fn with_start_id(mut self, start_id: impl Into<String>) -> Self {
        self.query.start_id = Some(start_id.into());
        self
    }

    pub fn with_custom_task_ids(mut self, team_id: impl Into<String>) -> Self {
        self.query.task_ids = CustomTaskIdOptions::custom(team_id);
        self
    }

    pub async fn get(self, cancel: &CancellationToken) -> Result<Vec<Comment>> {
        self.service
            .get_task_comments(&self.task_id, &self.query, cancel)
            .await
    }
}
