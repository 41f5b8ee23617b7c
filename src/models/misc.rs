//! Recursos pequenos: autorização, roles, hierarquia compartilhada,
//! templates e grupos de usuários

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{MembersUpdate, User};

// ==================== AUTORIZAÇÃO ====================

#[derive(Debug, Clone, Deserialize)]
pub struct AccessTokenResponse {
    #[serde(default)]
    pub access_token: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UserResponse {
    #[serde(default)]
    pub user: Option<User>,
}

// ==================== ROLES ====================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomRole {
    pub id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_id: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inherited_role: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_created: Option<String>,
    /// Só vem preenchido com `include_members=true`
    #[serde(default)]
    pub members: Vec<User>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GetCustomRolesResponse {
    #[serde(default)]
    pub custom_roles: Option<Vec<CustomRole>>,
}

// ==================== HIERARQUIA COMPARTILHADA ====================

/// Tasks, lists e folders compartilhados com o usuário autenticado
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SharedHierarchy {
    #[serde(default)]
    pub tasks: Vec<Value>,
    #[serde(default)]
    pub lists: Vec<Value>,
    #[serde(default)]
    pub folders: Vec<Value>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SharedHierarchyResponse {
    #[serde(default)]
    pub shared: Option<SharedHierarchy>,
}

// ==================== TEMPLATES ====================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskTemplate {
    pub id: String,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GetTaskTemplatesResponse {
    #[serde(default)]
    pub templates: Option<Vec<TaskTemplate>>,
}

// ==================== GRUPOS DE USUÁRIOS ====================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserGroup {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub userid: Option<i64>,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub handle: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_created: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initials: Option<String>,
    #[serde(default)]
    pub members: Vec<User>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<Value>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GetUserGroupsResponse {
    #[serde(default)]
    pub groups: Option<Vec<UserGroup>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CreateUserGroupRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub handle: Option<String>,
    pub members: Vec<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UpdateUserGroupRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub handle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub members: Option<MembersUpdate<i64>>,
}
