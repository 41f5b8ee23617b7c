//! Abstração da conexão HTTP usada por todos os serviços
//!
//! Os serviços nunca falam HTTP diretamente: montam um caminho relativo
//! (`task/123/comment?start=0`), chamam a [`ApiConnection`] injetada e
//! desembrulham o JSON retornado. Endereço base, autenticação, timeouts e
//! transporte são responsabilidade da implementação.
//!
//! Caminhos começando com `v3/` pertencem à API v3 (docs, chat); os demais
//! são da API v2.

mod http;

pub use http::ReqwestConnection;

use async_trait::async_trait;
use serde_json::Value;
use tokio_util::sync::CancellationToken;

use crate::error::Result;

/// Conexão HTTP com a API do ClickUp
///
/// Respostas com corpo vazio ou `null` devem ser retornadas como `Ok(None)`;
/// a decisão de falhar fica com o serviço. Erros de rede, status não-2xx e
/// cancelamento são retornados como `Err` e atravessam os serviços intactos.
#[async_trait]
pub trait ApiConnection: Send + Sync {
    async fn get(&self, path: &str, cancel: &CancellationToken) -> Result<Option<Value>>;

    async fn post(
        &self,
        path: &str,
        body: &Value,
        cancel: &CancellationToken,
    ) -> Result<Option<Value>>;

    /// POST cujo corpo de resposta é ignorado
    async fn post_no_content(
        &self,
        path: &str,
        body: &Value,
        cancel: &CancellationToken,
    ) -> Result<()>;

    async fn put(
        &self,
        path: &str,
        body: &Value,
        cancel: &CancellationToken,
    ) -> Result<Option<Value>>;

    async fn patch(
        &self,
        path: &str,
        body: &Value,
        cancel: &CancellationToken,
    ) -> Result<Option<Value>>;

    async fn delete(&self, path: &str, cancel: &CancellationToken) -> Result<()>;

    /// DELETE com corpo JSON (ex: remoção de tags de time entries)
    async fn delete_with_body(
        &self,
        path: &str,
        body: &Value,
        cancel: &CancellationToken,
    ) -> Result<()>;

    async fn post_multipart(
        &self,
        path: &str,
        payload: MultipartPayload,
        cancel: &CancellationToken,
    ) -> Result<Option<Value>>;
}

/// Corpo multipart: um arquivo + campos de formulário opcionais
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultipartPayload {
    /// Nome do campo do arquivo no formulário (ClickUp usa `attachment`)
    pub field_name: String,
    pub file_name: String,
    pub content: Vec<u8>,
    pub content_type: Option<String>,
    pub fields: Vec<(String, String)>,
}

impl MultipartPayload {
    pub fn new(file_name: impl Into<String>, content: impl Into<Vec<u8>>) -> Self {
        Self {
            field_name: "attachment".to_string(),
            file_name: file_name.into(),
            content: content.into(),
            content_type: None,
            fields: Vec::new(),
        }
    }

    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push((name.into(), value.into()));
        self
    }
}
