//! Builders de membros, convidados e grupos de usuários

use tokio_util::sync::CancellationToken;

use crate::error::Result;
use crate::models::{
    CreateUserGroupRequest, InviteGuestRequest, InviteUserRequest, UserGroup, Workspace,
};
use crate::services::{GuestsService, UserGroupsService, UsersService};

pub struct UserInviteBuilder {
    service: UsersService,
    workspace_id: String,
    request: InviteUserRequest,
}

impl UserInviteBuilder {
    pub fn new(service: UsersService, workspace_id: impl Into<String>) -> Self {
        Self {
            service,
            workspace_id: workspace_id.into(),
            request: InviteUserRequest::default(),
        }
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.request.email = email.into();
        self
    }

    pub fn with_admin(mut self, admin: bool) -> Self {
        self.request.admin = admin;
        self
    }

    pub fn with_custom_role(mut self, role_id: i64) -> Self {
        self.request.custom_role_id = Some(role_id);
        self
    }

    pub async fn invite(self, cancel: &CancellationToken) -> Result<Workspace> {
        self.service
            .invite_user_to_workspace(&self.workspace_id, &self.request, cancel)
            .await
    }
}

/// Convida um guest (plano Enterprise)
pub struct GuestInviteBuilder {
    service: GuestsService,
    workspace_id: String,
    request: InviteGuestRequest,
}

impl GuestInviteBuilder {
    pub fn new(service: GuestsService, workspace_id: impl Into<String>) -> Self {
        Self {
            service,
            workspace_id: workspace_id.into(),
            request: InviteGuestRequest::default(),
        }
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.request.email = email.into();
        self
    }

    pub fn with_can_edit_tags(mut self, allowed: bool) -> Self {
        self.request.permissions.can_edit_tags = Some(allowed);
        self
    }

    pub fn with_can_see_time_spent(mut self, allowed: bool) -> Self {
        self.request.permissions.can_see_time_spent = Some(allowed);
        self
    }

    pub fn with_can_see_time_estimated(mut self, allowed: bool) -> Self {
        self.request.permissions.can_see_time_estimated = Some(allowed);
        self
    }

    pub fn with_can_create_views(mut self, allowed: bool) -> Self {
        self.request.permissions.can_create_views = Some(allowed);
        self
    }

    pub fn with_can_see_points_estimated(mut self, allowed: bool) -> Self {
        self.request.permissions.can_see_points_estimated = Some(allowed);
        self
    }

    pub fn with_custom_role(mut self, role_id: i64) -> Self {
        self.request.permissions.custom_role_id = Some(role_id);
        self
    }

    pub async fn invite(self, cancel: &CancellationToken) -> Result<Workspace> {
        self.service
            .invite_guest_to_workspace(&self.workspace_id, &self.request, cancel)
            .await
    }
}

pub struct UserGroupCreateBuilder {
    service: UserGroupsService,
    workspace_id: String,
    request: CreateUserGroupRequest,
}

impl UserGroupCreateBuilder {
    pub fn new(service: UserGroupsService, workspace_id: impl Into<String>) -> Self {
        Self {
            service,
            workspace_id: workspace_id.into(),
            request: CreateUserGroupRequest::default(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.request.name = name.into();
        self
    }

    /// Handle usado em menções (`@handle`)
    pub fn with_handle(mut self, handle: impl Into<String>) -> Self {
        self.request.handle = Some(handle.into());
        self
    }

    pub fn with_members(mut self, user_ids: Vec<i64>) -> Self {
        self.request.members = user_ids;
        self
    }

    pub async fn create(self, cancel: &CancellationToken) -> Result<UserGroup> {
        self.service
            .create_user_group(&self.workspace_id, &self.request, cancel)
            .await
    }
}
