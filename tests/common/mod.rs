//! Conexão roteirizada para testes de serviços e builders
//!
//! Cada chamada consome a próxima resposta da fila e fica registrada
//! (método, caminho, corpo) para conferência.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::Value;

use clickup_sdk::error::{ClickUpError, Result};
use clickup_sdk::{ApiConnection, CancellationToken, ClickUpClient, MultipartPayload};

#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub method: &'static str,
    pub path: String,
    pub body: Option<Value>,
    pub multipart: Option<MultipartPayload>,
}

#[derive(Default)]
pub struct ScriptedConnection {
    replies: Mutex<VecDeque<Result<Option<Value>>>>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl ScriptedConnection {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Enfileira uma resposta JSON
    pub fn reply(&self, value: Value) -> &Self {
        self.push(Ok(Some(value)))
    }

    /// Enfileira uma resposta vazia (corpo vazio ou `null`)
    pub fn reply_empty(&self) -> &Self {
        self.push(Ok(None))
    }

    pub fn fail(&self, error: ClickUpError) -> &Self {
        self.push(Err(error))
    }

    fn push(&self, reply: Result<Option<Value>>) -> &Self {
        self.replies.lock().unwrap().push_back(reply);
        self
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn paths(&self) -> Vec<String> {
        self.calls().into_iter().map(|c| c.path).collect()
    }

    fn record(
        &self,
        method: &'static str,
        path: &str,
        body: Option<&Value>,
        multipart: Option<MultipartPayload>,
        cancel: &CancellationToken,
    ) -> Result<Option<Value>> {
        if cancel.is_cancelled() {
            return Err(ClickUpError::Cancelled);
        }
        self.calls.lock().unwrap().push(RecordedCall {
            method,
            path: path.to_string(),
            body: body.cloned(),
            multipart,
        });
        self.replies.lock().unwrap().pop_front().unwrap_or(Ok(None))
    }
}

#[async_trait]
impl ApiConnection for ScriptedConnection {
    async fn get(&self, path: &str, cancel: &CancellationToken) -> Result<Option<Value>> {
        self.record("GET", path, None, None, cancel)
    }

    async fn post(&self, path: &str, body: &Value, cancel: &CancellationToken) -> Result<Option<Value>> {
        self.record("POST", path, Some(body), None, cancel)
    }

    async fn post_no_content(&self, path: &str, body: &Value, cancel: &CancellationToken) -> Result<()> {
        self.record("POST", path, Some(body), None, cancel).map(|_| ())
    }

    async fn put(&self, path: &str, body: &Value, cancel: &CancellationToken) -> Result<Option<Value>> {
        self.record("PUT", path, Some(body), None, cancel)
    }

    async fn patch(&self, path: &str, body: &Value, cancel: &CancellationToken) -> Result<Option<Value>> {
        self.record("PATCH", path, Some(body), None, cancel)
    }

    async fn delete(&self, path: &str, cancel: &CancellationToken) -> Result<()> {
        self.record("DELETE", path, None, None, cancel).map(|_| ())
    }

    async fn delete_with_body(&self, path: &str, body: &Value, cancel: &CancellationToken) -> Result<()> {
        self.record("DELETE", path, Some(body), None, cancel).map(|_| ())
    }

    async fn post_multipart(
        &self,
        path: &str,
        payload: MultipartPayload,
        cancel: &CancellationToken,
    ) -> Result<Option<Value>> {
        self.record("POST", path, None, Some(payload), cancel)
    }
}

pub fn client(connection: &Arc<ScriptedConnection>) -> ClickUpClient {
    ClickUpClient::with_connection(connection.clone())
}
