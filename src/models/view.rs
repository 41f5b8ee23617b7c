//! Views e webhooks

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// View (list, board, calendar, chat, doc, ...)
///
/// As configurações de agrupamento/filtro variam por tipo e ficam como `Value`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct View {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub view_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grouping: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub divide: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sorting: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filters: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub columns: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_sidebar: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settings: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_created: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creator: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visibility: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protected: Option<bool>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GetViewsResponse {
    #[serde(default)]
    pub views: Option<Vec<View>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ViewResponse {
    #[serde(default)]
    pub view: Option<View>,
}

/// Payload de criação/atualização de view
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ViewRequest {
    pub name: String,
    #[serde(rename = "type")]
    pub view_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grouping: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub divide: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sorting: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filters: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub columns: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team_sidebar: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub settings: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Webhook {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub userid: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_id: Option<i64>,
    #[serde(default)]
    pub endpoint: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
    #[serde(default)]
    pub events: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub list_id: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub folder_id: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub space_id: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub health: Option<Value>,
    /// Segredo usado para assinar as entregas (`X-Signature`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secret: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GetWebhooksResponse {
    #[serde(default)]
    pub webhooks: Option<Vec<Webhook>>,
}

/// Resposta de criação/atualização: `{"id": "...", "webhook": {...}}`
#[derive(Debug, Clone, Deserialize)]
pub struct WebhookResponse {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub webhook: Option<Webhook>,
}

/// Payload de `POST team/{team_id}/webhook`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CreateWebhookRequest {
    pub endpoint: String,
    /// Eventos assinados; `["*"]` para todos
    pub events: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub space_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub folder_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub list_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_id: Option<String>,
}

/// Payload de `PUT webhook/{webhook_id}`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UpdateWebhookRequest {
    pub endpoint: String,
    pub events: Vec<String>,
    /// active ou suspended
    pub status: String,
}
