//! Cliente ClickUp: ponto de entrada do SDK
//!
//! Guarda uma única [`ApiConnection`] compartilhada e entrega os serviços
//! (`client.tasks()`, `client.comments()`, ...) e a API fluente
//! (`client.fluent()`). Criar um serviço é barato: só clona o `Arc`.

use std::sync::Arc;

use crate::config::ClientSettings;
use crate::connection::{ApiConnection, ReqwestConnection};
use crate::error::Result;
use crate::fluent::FluentApi;
use crate::services::{
    AttachmentsService, AuthorizationService, ChatService, ChecklistsService, CommentsService,
    CustomFieldsService, DocsService, FoldersService, GoalsService, GuestsService, ListsService,
    MembersService, RolesService, SharedHierarchyService, SpacesService, TagsService,
    TaskRelationshipsService, TasksService, TemplatesService, TimeTrackingService,
    UserGroupsService, UsersService, ViewsService, WebhooksService, WorkspacesService,
};

/// Cliente para interagir com a API do ClickUp
///
/// # Exemplo
///
/// ```rust,ignore
/// use clickup_sdk::{ClickUpClient, ClientSettings};
/// use tokio_util::sync::CancellationToken;
///
/// let client = ClickUpClient::new(&ClientSettings::new("pk_your_token"))?;
/// let cancel = CancellationToken::new();
/// let me = client.authorization().get_authorized_user(&cancel).await?;
/// ```
#[derive(Clone)]
pub struct ClickUpClient {
    connection: Arc<dyn ApiConnection>,
}

impl ClickUpClient {
    /// Cria o cliente com a conexão HTTP padrão (reqwest)
    pub fn new(settings: &ClientSettings) -> Result<Self> {
        let connection = ReqwestConnection::new(settings)?;
        Ok(Self::with_connection(Arc::new(connection)))
    }

    /// Atalho para `ClientSettings::new(token)` com os valores padrão
    pub fn from_token(token: impl Into<String>) -> Result<Self> {
        Self::new(&ClientSettings::new(token))
    }

    /// Carrega `.env`, arquivo e variáveis `CLICKUP_*`
    pub fn from_env() -> Result<Self> {
        Self::new(&ClientSettings::load()?)
    }

    /// Usa uma conexão própria (mock em testes, proxy, ...)
    pub fn with_connection(connection: Arc<dyn ApiConnection>) -> Self {
        Self { connection }
    }

    pub fn connection(&self) -> Arc<dyn ApiConnection> {
        self.connection.clone()
    }

    /// Superfície fluente (builders) sobre os mesmos serviços
    pub fn fluent(&self) -> FluentApi {
        FluentApi::new(self.connection.clone())
    }

    pub fn attachments(&self) -> AttachmentsService {
        AttachmentsService::new(self.connection.clone())
    }

    pub fn authorization(&self) -> AuthorizationService {
        AuthorizationService::new(self.connection.clone())
    }

    pub fn chat(&self) -> ChatService {
        ChatService::new(self.connection.clone())
    }

    pub fn checklists(&self) -> ChecklistsService {
        ChecklistsService::new(self.connection.clone())
    }

    pub fn comments(&self) -> CommentsService {
        CommentsService::new(self.connection.clone())
    }

    pub fn custom_fields(&self) -> CustomFieldsService {
        CustomFieldsService::new(self.connection.clone())
    }

    pub fn docs(&self) -> DocsService {
        DocsService::new(self.connection.clone())
    }

    pub fn folders(&self) -> FoldersService {
        FoldersService::new(self.connection.clone())
    }

    pub fn goals(&self) -> GoalsService {
        GoalsService::new(self.connection.clone())
    }

    pub fn guests(&self) -> GuestsService {
        GuestsService::new(self.connection.clone())
    }

    pub fn lists(&self) -> ListsService {
        ListsService::new(self.connection.clone())
    }

    pub fn members(&self) -> MembersService {
        MembersService::new(self.connection.clone())
    }

    pub fn roles(&self) -> RolesService {
        RolesService::new(self.connection.clone())
    }

    pub fn shared_hierarchy(&self) -> SharedHierarchyService {
        SharedHierarchyService::new(self.connection.clone())
    }

    pub fn spaces(&self) -> SpacesService {
        SpacesService::new(self.connection.clone())
    }

    pub fn tags(&self) -> TagsService {
        TagsService::new(self.connection.clone())
    }

    pub fn task_relationships(&self) -> TaskRelationshipsService {
        TaskRelationshipsService::new(self.connection.clone())
    }

    pub fn tasks(&self) -> TasksService {
        TasksService::new(self.connection.clone())
    }

    pub fn templates(&self) -> TemplatesService {
        TemplatesService::new(self.connection.clone())
    }

    pub fn time_tracking(&self) -> TimeTrackingService {
        TimeTrackingService::new(self.connection.clone())
    }

    pub fn user_groups(&self) -> UserGroupsService {
        UserGroupsService::new(self.connection.clone())
    }

    pub fn users(&self) -> UsersService {
        UsersService::new(self.connection.clone())
    }

    pub fn views(&self) -> ViewsService {
        ViewsService::new(self.connection.clone())
    }

    pub fn webhooks(&self) -> WebhooksService {
        WebhooksService::new(self.connection.clone())
    }

    pub fn workspaces(&self) -> WorkspacesService {
        WorkspacesService::new(self.connection.clone())
    }
}
