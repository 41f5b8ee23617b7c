//! Serviços da API, um por família de recursos
//!
//! Todos seguem o mesmo formato: montam o caminho relativo com a query,
//! chamam a [`ApiConnection`](crate::connection::ApiConnection) compartilhada
//! e desembrulham a resposta. Erros da conexão passam intactos; respostas
//! vazias viram `ClickUpError::InvalidResponse`.

mod attachments;
mod authorization;
mod chat;
mod checklists;
mod comments;
mod custom_fields;
mod docs;
mod folders;
mod goals;
mod guests;
mod lists;
mod members;
mod roles;
mod shared_hierarchy;
mod spaces;
mod tags;
mod task_relationships;
pub(crate) mod tasks;
mod templates;
mod time_tracking;
mod user_groups;
mod users;
mod views;
pub mod webhooks;
mod workspaces;

pub use attachments::AttachmentsService;
pub use authorization::AuthorizationService;
pub use chat::ChatService;
pub use checklists::ChecklistsService;
pub use comments::CommentsService;
pub use custom_fields::CustomFieldsService;
pub use docs::DocsService;
pub use folders::FoldersService;
pub use goals::GoalsService;
pub use guests::GuestsService;
pub use lists::ListsService;
pub use members::MembersService;
pub use roles::RolesService;
pub use shared_hierarchy::SharedHierarchyService;
pub use spaces::SpacesService;
pub use tags::TagsService;
pub use task_relationships::TaskRelationshipsService;
pub use tasks::TasksService;
pub use templates::TemplatesService;
pub use time_tracking::TimeTrackingService;
pub use user_groups::UserGroupsService;
pub use users::UsersService;
pub use views::ViewsService;
pub use webhooks::WebhooksService;
pub use workspaces::WorkspacesService;
