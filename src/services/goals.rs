use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use crate::connection::ApiConnection;
use crate::error::Result;
use crate::models::{
    CreateGoalRequest, CreateKeyResultRequest, EditKeyResultRequest, GetGoalsResponse, Goal,
    GoalResponse, KeyResult, KeyResultResponse, UpdateGoalRequest,
};
use crate::query::QueryBuilder;
use crate::response::{body, decode, require};

/// Goals do workspace e seus key results (targets)
#[derive(Clone)]
pub struct GoalsService {
    connection: Arc<dyn ApiConnection>,
}

impl GoalsService {
    pub fn new(connection: Arc<dyn ApiConnection>) -> Self {
        Self { connection }
    }

    /// `GET team/{team_id}/goal`
    pub async fn get_goals(
        &self,
        workspace_id: &str,
        include_completed: Option<bool>,
        cancel: &CancellationToken,
    ) -> Result<Vec<Goal>> {
        let path = QueryBuilder::new()
            .opt("include_completed", include_completed)
            .build(&format!("team/{}/goal", workspace_id));
        let response: GetGoalsResponse = decode(self.connection.get(&path, cancel).await?, &path)?;
        require(response.goals, "goals", &path)
    }

    pub async fn create_goal(
        &self,
        workspace_id: &str,
        request: &CreateGoalRequest,
        cancel: &CancellationToken,
    ) -> Result<Goal> {
        let path = format!("team/{}/goal", workspace_id);
        let goal = self.goal_from(self.connection.post(&path, &body(request)?, cancel).await?, &path)?;
        tracing::info!("🎯 Goal criado: {} ({})", goal.name, goal.id);
        Ok(goal)
    }

    pub async fn get_goal(&self, goal_id: &str, cancel: &CancellationToken) -> Result<Goal> {
        let path = format!("goal/{}", goal_id);
        self.goal_from(self.connection.get(&path, cancel).await?, &path)
    }

    pub async fn update_goal(
        &self,
        goal_id: &str,
        request: &UpdateGoalRequest,
        cancel: &CancellationToken,
    ) -> Result<Goal> {
        let path = format!("goal/{}", goal_id);
        self.goal_from(self.connection.put(&path, &body(request)?, cancel).await?, &path)
    }

    pub async fn delete_goal(&self, goal_id: &str, cancel: &CancellationToken) -> Result<()> {
        self.connection.delete(&format!("goal/{}", goal_id), cancel).await
    }

    /// `POST goal/{goal_id}/key_result`
    pub async fn create_key_result(
        &self,
        goal_id: &str,
        request: &CreateKeyResultRequest,
        cancel: &CancellationToken,
    ) -> Result<KeyResult> {
        let path = format!("goal/{}/key_result", goal_id);
        let response: KeyResultResponse =
            decode(self.connection.post(&path, &body(request)?, cancel).await?, &path)?;
        require(response.key_result, "key_result", &path)
    }

    /// Atualiza progresso (`steps_current`), nota ou dados do key result
    pub async fn edit_key_result(
        &self,
        key_result_id: &str,
        request: &EditKeyResultRequest,
        cancel: &CancellationToken,
    ) -> Result<KeyResult> {
        let path = format!("key_result/{}", key_result_id);
        let response: KeyResultResponse =
            decode(self.connection.put(&path, &body(request)?, cancel).await?, &path)?;
        require(response.key_result, "key_result", &path)
    }

    pub async fn delete_key_result(&self, key_result_id: &str, cancel: &CancellationToken) -> Result<()> {
        self.connection
            .delete(&format!("key_result/{}", key_result_id), cancel)
            .await
    }

    fn goal_from(&self, response: Option<serde_json::Value>, path: &str) -> Result<Goal> {
        let envelope: GoalResponse = decode(response, path)?;
        require(envelope.goal, "goal", path)
    }
}
