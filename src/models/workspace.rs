//! Workspaces (chamados de "team" na API v2), membros e convidados

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::User;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workspace {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(default)]
    pub members: Vec<Member>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GetWorkspacesResponse {
    #[serde(default)]
    pub teams: Option<Vec<Workspace>>,
}

/// Envelope `{"team": {...}}` retornado por convites
#[derive(Debug, Clone, Deserialize)]
pub struct WorkspaceResponse {
    #[serde(default)]
    pub team: Option<Workspace>,
}

/// Membro de workspace
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Member {
    pub user: User,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invited_by: Option<User>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub can_see_time_spent: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub can_see_time_estimated: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub can_edit_tags: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub can_create_views: Option<bool>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MemberResponse {
    #[serde(default)]
    pub member: Option<Member>,
}

/// `GET task/{id}/member` e `GET list/{id}/member`
#[derive(Debug, Clone, Deserialize)]
pub struct GetMembersResponse {
    #[serde(default)]
    pub members: Option<Vec<User>>,
}

/// Convidado do workspace e o que foi compartilhado com ele
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Guest {
    pub user: User,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invited_by: Option<User>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub can_see_time_spent: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub can_see_time_estimated: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub can_edit_tags: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub can_create_views: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shared: Option<Value>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GuestResponse {
    #[serde(default)]
    pub guest: Option<Guest>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberSeats {
    pub filled_members_seats: i64,
    pub total_member_seats: i64,
    pub empty_member_seats: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuestSeats {
    pub filled_guest_seats: i64,
    pub total_guest_seats: i64,
    pub empty_guest_seats: i64,
}

/// Resposta de `GET team/{team_id}/seats`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkspaceSeats {
    pub members: MemberSeats,
    pub guests: GuestSeats,
}

/// Resposta de `GET team/{team_id}/plan`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkspacePlan {
    pub plan_name: String,
    pub plan_id: i64,
}

/// Payload de `POST team/{team_id}/user`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct InviteUserRequest {
    pub email: String,
    pub admin: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_role_id: Option<i64>,
}

/// Payload de `PUT team/{team_id}/user/{user_id}`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EditUserRequest {
    pub username: String,
    pub admin: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_role_id: Option<i64>,
}

/// Permissões de convidado (convite e edição)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GuestPermissions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_edit_tags: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_see_time_spent: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_see_time_estimated: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_create_views: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_see_points_estimated: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_role_id: Option<i64>,
}

/// Payload de `POST team/{team_id}/guest`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct InviteGuestRequest {
    pub email: String,
    #[serde(flatten)]
    pub permissions: GuestPermissions,
}

/// Payload para compartilhar task/list/folder com um convidado
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GuestAccessRequest {
    /// read, comment, edit ou create
    pub permission_level: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_invite_guest_flattens_permissions() {
        let request = InviteGuestRequest {
            email: "guest@example.com".to_string(),
            permissions: GuestPermissions {
                can_edit_tags: Some(true),
                ..Default::default()
            },
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({ "email": "guest@example.com", "can_edit_tags": true })
        );
    }

    #[test]
    fn test_seats_deserialize() {
        let seats: WorkspaceSeats = serde_json::from_value(json!({
            "members": { "filled_members_seats": 5, "total_member_seats": 10, "empty_member_seats": 5 },
            "guests": { "filled_guest_seats": 1, "total_guest_seats": 10, "empty_guest_seats": 9 }
        }))
        .unwrap();
        assert_eq!(seats.members.empty_member_seats, 5);
        assert_eq!(seats.guests.filled_guest_seats, 1);
    }
}
