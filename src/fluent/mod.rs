//! API fluente: builders encadeáveis sobre os serviços
//!
//! Cada builder acumula parâmetros com `with_*` e termina numa única
//! chamada assíncrona (`create`, `get`, `add`, `send`, ...) que delega
//! para exatamente um método de serviço.

use std::sync::Arc;

use crate::connection::ApiConnection;
use crate::services::{
    AttachmentsService, ChatService, ChecklistsService, CommentsService, DocsService,
    FoldersService, GoalsService, GuestsService, ListsService, SpacesService,
    TaskRelationshipsService, TasksService, TimeTrackingService, UserGroupsService, UsersService,
    ViewsService, WebhooksService,
};

mod attachments;
mod chat;
mod comments;
mod docs;
mod goals;
mod hierarchy;
mod people;
mod tasks;
mod time_tracking;
mod views;

pub use attachments::AttachmentUploadBuilder;
pub use chat::{ChatChannelCreateBuilder, ChatMessageSendBuilder};
pub use comments::{CommentCreateBuilder, CommentTarget, TaskCommentsQueryBuilder};
pub use docs::{DocCreateBuilder, DocsSearchBuilder, PageCreateBuilder};
pub use goals::{GoalCreateBuilder, KeyResultCreateBuilder};
pub use hierarchy::{
    ChecklistItemAddBuilder, FolderCreateBuilder, ListCreateBuilder, ListParent,
    SpaceCreateBuilder,
};
pub use people::{GuestInviteBuilder, UserGroupCreateBuilder, UserInviteBuilder};
pub use tasks::{DependencyAddBuilder, TaskCreateBuilder, TaskUpdateBuilder, TasksQueryBuilder};
pub use time_tracking::{TimeEntriesQueryBuilder, TimeEntryCreateBuilder, TimerStartBuilder};
pub use views::{ViewCreateBuilder, ViewTarget, WebhookCreateBuilder};

/// Ponto de entrada dos builders (`client.fluent()`)
#[derive(Clone)]
pub struct FluentApi {
    connection: Arc<dyn ApiConnection>,
}

impl FluentApi {
    pub fn new(connection: Arc<dyn ApiConnection>) -> Self {
        Self { connection }
    }

    // ==================== TASKS ====================

    pub fn create_task(&self, list_id: impl Into<String>) -> TaskCreateBuilder {
        TaskCreateBuilder::new(TasksService::new(self.connection.clone()), list_id)
    }

    pub fn update_task(&self, task_id: impl Into<String>) -> TaskUpdateBuilder {
        TaskUpdateBuilder::new(TasksService::new(self.connection.clone()), task_id)
    }

    pub fn query_tasks(&self, list_id: impl Into<String>) -> TasksQueryBuilder {
        TasksQueryBuilder::new(TasksService::new(self.connection.clone()), list_id)
    }

    pub fn add_dependency(&self, task_id: impl Into<String>) -> DependencyAddBuilder {
        DependencyAddBuilder::new(TaskRelationshipsService::new(self.connection.clone()), task_id)
    }

    pub fn upload_attachment(&self, task_id: impl Into<String>) -> AttachmentUploadBuilder {
        AttachmentUploadBuilder::new(AttachmentsService::new(self.connection.clone()), task_id)
    }

    // ==================== COMENTÁRIOS ====================

    pub fn add_comment(&self, target: CommentTarget) -> CommentCreateBuilder {
        CommentCreateBuilder::new(CommentsService::new(self.connection.clone()), target)
    }

    pub fn add_task_comment(&self, task_id: impl Into<String>) -> CommentCreateBuilder {
        self.add_comment(CommentTarget::Task(task_id.into()))
    }

    pub fn query_task_comments(&self, task_id: impl Into<String>) -> TaskCommentsQueryBuilder {
        TaskCommentsQueryBuilder::new(CommentsService::new(self.connection.clone()), task_id)
    }

    // ==================== HIERARQUIA ====================

    pub fn create_space(&self, workspace_id: impl Into<String>) -> SpaceCreateBuilder {
        SpaceCreateBuilder::new(SpacesService::new(self.connection.clone()), workspace_id)
    }

    pub fn create_folder(&self, space_id: impl Into<String>) -> FolderCreateBuilder {
        FolderCreateBuilder::new(FoldersService::new(self.connection.clone()), space_id)
    }

    pub fn create_list(&self, parent: ListParent) -> ListCreateBuilder {
        ListCreateBuilder::new(ListsService::new(self.connection.clone()), parent)
    }

    pub fn add_checklist_item(&self, checklist_id: impl Into<String>) -> ChecklistItemAddBuilder {
        ChecklistItemAddBuilder::new(ChecklistsService::new(self.connection.clone()), checklist_id)
    }

    // ==================== GOALS ====================

    pub fn create_goal(&self, workspace_id: impl Into<String>) -> GoalCreateBuilder {
        GoalCreateBuilder::new(GoalsService::new(self.connection.clone()), workspace_id)
    }

    pub fn create_key_result(&self, goal_id: impl Into<String>) -> KeyResultCreateBuilder {
        KeyResultCreateBuilder::new(GoalsService::new(self.connection.clone()), goal_id)
    }

    // ==================== TIME TRACKING ====================

    pub fn create_time_entry(&self, workspace_id: impl Into<String>) -> TimeEntryCreateBuilder {
        TimeEntryCreateBuilder::new(TimeTrackingService::new(self.connection.clone()), workspace_id)
    }

    pub fn query_time_entries(&self, workspace_id: impl Into<String>) -> TimeEntriesQueryBuilder {
        TimeEntriesQueryBuilder::new(TimeTrackingService::new(self.connection.clone()), workspace_id)
    }

    pub fn start_timer(&self, workspace_id: impl Into<String>) -> TimerStartBuilder {
        TimerStartBuilder::new(TimeTrackingService::new(self.connection.clone()), workspace_id)
    }

    // ==================== DOCS ====================

    pub fn search_docs(&self, workspace_id: impl Into<String>) -> DocsSearchBuilder {
        DocsSearchBuilder::new(DocsService::new(self.connection.clone()), workspace_id)
    }

    pub fn create_doc(&self, workspace_id: impl Into<String>) -> DocCreateBuilder {
        DocCreateBuilder::new(DocsService::new(self.connection.clone()), workspace_id)
    }

    pub fn create_page(
        &self,
        workspace_id: impl Into<String>,
        doc_id: impl Into<String>,
    ) -> PageCreateBuilder {
        PageCreateBuilder::new(DocsService::new(self.connection.clone()), workspace_id, doc_id)
    }

    // ==================== VIEWS / WEBHOOKS ====================

    pub fn create_view(&self, target: ViewTarget) -> ViewCreateBuilder {
        ViewCreateBuilder::new(ViewsService::new(self.connection.clone()), target)
    }

    pub fn create_webhook(&self, workspace_id: impl Into<String>) -> WebhookCreateBuilder {
        WebhookCreateBuilder::new(WebhooksService::new(self.connection.clone()), workspace_id)
    }

    // ==================== PESSOAS ====================

    pub fn invite_user(&self, workspace_id: impl Into<String>) -> UserInviteBuilder {
        UserInviteBuilder::new(UsersService::new(self.connection.clone()), workspace_id)
    }

    pub fn invite_guest(&self, workspace_id: impl Into<String>) -> GuestInviteBuilder {
        GuestInviteBuilder::new(GuestsService::new(self.connection.clone()), workspace_id)
    }

    pub fn create_user_group(&self, workspace_id: impl Into<String>) -> UserGroupCreateBuilder {
        UserGroupCreateBuilder::new(UserGroupsService::new(self.connection.clone()), workspace_id)
    }

    // ==================== CHAT ====================

    pub fn create_chat_channel(&self, workspace_id: impl Into<String>) -> ChatChannelCreateBuilder {
        ChatChannelCreateBuilder::new(ChatService::new(self.connection.clone()), workspace_id)
    }

    pub fn send_chat_message(
        &self,
        workspace_id: impl Into<String>,
        channel_id: impl Into<String>,
    ) -> ChatMessageSendBuilder {
        ChatMessageSendBuilder::new(ChatService::new(self.connection.clone()), workspace_id, channel_id)
    }
}
