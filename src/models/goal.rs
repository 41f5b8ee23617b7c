//! Goals e key results

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{MembersUpdate, User};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pretty_id: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creator: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<User>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_created: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub private: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub archived: Option<bool>,
    #[serde(default)]
    pub members: Vec<User>,
    #[serde(default)]
    pub owners: Vec<User>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub multiple_owners: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub folder_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_result_count: Option<i64>,
    #[serde(default)]
    pub key_results: Vec<KeyResult>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub percent_completed: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pretty_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyResult {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goal_id: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creator: Option<i64>,
    /// number, currency, boolean, percentage ou automatic
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub key_result_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_created: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goal_pretty_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub percent_completed: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
    #[serde(default)]
    pub task_ids: Vec<String>,
    #[serde(default)]
    pub subcategory_ids: Vec<String>,
    #[serde(default)]
    pub owners: Vec<User>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub steps_current: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub steps_start: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub steps_end: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// `GET team/{team_id}/goal` retorna goals e folders de goals
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GetGoalsResponse {
    #[serde(default)]
    pub goals: Option<Vec<Goal>>,
    #[serde(default)]
    pub folders: Vec<Value>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GoalResponse {
    #[serde(default)]
    pub goal: Option<Goal>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct KeyResultResponse {
    #[serde(default)]
    pub key_result: Option<KeyResult>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CreateGoalRequest {
    pub name: String,
    /// Timestamp em ms
    pub due_date: i64,
    pub description: String,
    pub multiple_owners: bool,
    pub owners: Vec<i64>,
    pub color: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UpdateGoalRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub rem_owners: Vec<i64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub add_owners: Vec<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CreateKeyResultRequest {
    pub name: String,
    pub owners: Vec<i64>,
    #[serde(rename = "type")]
    pub key_result_type: String,
    pub steps_start: f64,
    pub steps_end: f64,
    pub unit: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub task_ids: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub list_ids: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EditKeyResultRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub steps_current: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owners: Option<MembersUpdate<i64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
}
