//! Tipos compartilhados entre vários recursos (usuários, status, tags, ...)

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::query::QueryBuilder;

/// Representa um usuário do ClickUp
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// ID do usuário (sempre presente)
    pub id: i64,

    /// Nome de usuário
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    /// Email do usuário
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Cor associada ao usuário (hex color)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,

    /// URL da foto de perfil (`profilePicture` na API)
    #[serde(
        default,
        rename = "profilePicture",
        skip_serializing_if = "Option::is_none"
    )]
    pub profile_picture: Option<String>,

    /// Iniciais do usuário
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initials: Option<String>,

    /// Papel no workspace (1=owner, 2=admin, 3=member, 4=guest)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<i32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_role: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_active: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_joined: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_invited: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
}

impl User {
    /// Cria um usuário apenas com ID (mínimo necessário)
    pub fn new(id: i64) -> Self {
        Self {
            id,
            username: None,
            email: None,
            color: None,
            profile_picture: None,
            initials: None,
            role: None,
            custom_role: None,
            last_active: None,
            date_joined: None,
            date_invited: None,
            timezone: None,
        }
    }
}

/// Status de tarefa. Status não são globais: cada lista/space tem os seus.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Status {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Nome do status (e.g., "to do", "in progress", "complete")
    pub status: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,

    /// A API retorna número ou string dependendo do endpoint
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub orderindex: Option<Value>,

    /// Tipo do status (open, closed, custom, done)
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub status_type: Option<String>,
}

/// Prioridade como retornada pela API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Priority {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub priority: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub orderindex: Option<String>,
}

/// Prioridade da task em requisições (1=Urgent, 2=High, 3=Normal, 4=Low)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TaskPriority {
    Urgent = 1,
    High = 2,
    #[default]
    Normal = 3,
    Low = 4,
}

impl Serialize for TaskPriority {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_i32(*self as i32)
    }
}

/// Tag de space/task
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tag {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag_fg: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag_bg: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creator: Option<i64>,
}

impl Tag {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tag_fg: None,
            tag_bg: None,
            creator: None,
        }
    }

    pub fn with_colors(mut self, fg: impl Into<String>, bg: impl Into<String>) -> Self {
        self.tag_fg = Some(fg.into());
        self.tag_bg = Some(bg.into());
        self
    }
}

/// Referência resumida a list/folder/space embutida em outras entidades
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityRef {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hidden: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access: Option<bool>,
}

/// Parâmetros `custom_task_ids` + `team_id`, aceitos por quase todos os
/// endpoints de task. Quando `custom_task_ids=true`, `team_id` é obrigatório
/// para a API.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomTaskIdOptions {
    pub custom_task_ids: Option<bool>,
    pub team_id: Option<String>,
}

impl CustomTaskIdOptions {
    /// Referencia tasks pelo custom ID dentro do workspace informado
    pub fn custom(team_id: impl Into<String>) -> Self {
        Self {
            custom_task_ids: Some(true),
            team_id: Some(team_id.into()),
        }
    }

    pub(crate) fn apply(&self, query: QueryBuilder) -> QueryBuilder {
        query
            .opt("custom_task_ids", self.custom_task_ids)
            .opt("team_id", self.team_id.as_deref())
    }
}

/// Atualização incremental de membros (`{"add": [...], "rem": [...]}`)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MembersUpdate<T> {
    #[serde(default)]
    pub add: Vec<T>,
    #[serde(default)]
    pub rem: Vec<T>,
}

impl<T> MembersUpdate<T> {
    pub fn add(items: Vec<T>) -> Self {
        Self {
            add: items,
            rem: Vec::new(),
        }
    }

    pub fn add_and_remove(add: Vec<T>, rem: Vec<T>) -> Self {
        Self { add, rem }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_priority_serializes_as_number() {
        assert_eq!(serde_json::to_value(TaskPriority::Urgent).unwrap(), json!(1));
        assert_eq!(serde_json::to_value(TaskPriority::default()).unwrap(), json!(3));
    }

    #[test]
    fn test_user_profile_picture_rename() {
        let user: User = serde_json::from_value(json!({
            "id": 183,
            "username": "John Doe",
            "profilePicture": "https://example.com/p.png"
        }))
        .unwrap();

        assert_eq!(user.id, 183);
        assert_eq!(user.profile_picture.as_deref(), Some("https://example.com/p.png"));
        assert!(user.email.is_none());
    }

    #[test]
    fn test_custom_task_id_options_query() {
        let url = CustomTaskIdOptions::custom("t1")
            .apply(QueryBuilder::new())
            .build("task/abc");
        assert_eq!(url, "task/abc?custom_task_ids=true&team_id=t1");

        let url = CustomTaskIdOptions::default()
            .apply(QueryBuilder::new())
            .build("task/abc");
        assert_eq!(url, "task/abc");
    }
}
