//! Implementação padrão da conexão usando reqwest
//!
//! Suporta ambas as versões da API:
//! - v2: tasks, lists, folders, spaces, comments, time tracking, ...
//! - v3: docs e chat (caminhos relativos começando com `v3/`)

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::multipart::{Form, Part};
use reqwest::{Client as HttpClient, Method, RequestBuilder, Response};
use serde_json::Value;
use tokio_util::sync::CancellationToken;

use super::{ApiConnection, MultipartPayload};
use crate::config::ClientSettings;
use crate::error::{ClickUpError, Result};

const V3_PREFIX: &str = "v3/";

/// Parâmetros de query que nunca vão para o log
const SENSITIVE_PARAMS: &[&str] = &["client_secret", "code"];

/// Mascara os valores sensíveis da query string antes de logar a URL
pub(crate) fn redact_url(url: &str) -> String {
    let Some((base, query)) = url.split_once('?') else {
        return url.to_string();
    };

    let pairs: Vec<String> = query
        .split('&')
        .map(|pair| match pair.split_once('=') {
            Some((key, _)) if SENSITIVE_PARAMS.contains(&key) => format!("{}=***", key),
            _ => pair.to_string(),
        })
        .collect();

    format!("{}?{}", base, pairs.join("&"))
}

/// Conexão HTTP real com a API do ClickUp
#[derive(Debug, Clone)]
pub struct ReqwestConnection {
    http_client: HttpClient,
    base_url_v2: String,
    base_url_v3: String,
}

impl ReqwestConnection {
    /// Cria a conexão a partir das configurações
    ///
    /// # Timeouts
    ///
    /// - Total: `settings.timeout_secs` (padrão 30s)
    /// - Connect: `settings.connect_timeout_secs` (padrão 5s)
    pub fn new(settings: &ClientSettings) -> Result<Self> {
        settings.validate()?;

        let mut headers = HeaderMap::new();
        let auth = HeaderValue::from_str(&settings.token)
            .map_err(|e| ClickUpError::config(format!("Invalid token header: {}", e)))?;
        headers.insert(AUTHORIZATION, auth);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let http_client = HttpClient::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(settings.timeout_secs))
            .connect_timeout(Duration::from_secs(settings.connect_timeout_secs))
            .build()
            .map_err(|e| ClickUpError::config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            http_client,
            base_url_v2: settings.base_url_v2.trim_end_matches('/').to_string(),
            base_url_v3: settings.base_url_v3.trim_end_matches('/').to_string(),
        })
    }

    /// Resolve o caminho relativo para a URL completa (v2 ou v3)
    pub fn resolve(&self, path: &str) -> String {
        let path = path.trim_start_matches('/');
        match path.strip_prefix(V3_PREFIX) {
            Some(rest) => format!("{}/{}", self.base_url_v3, rest),
            None => format!("{}/{}", self.base_url_v2, path),
        }
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = self.resolve(path);
        tracing::debug!("{} {}", method, redact_url(&url));
        self.http_client.request(method, url)
    }

    /// Envia a requisição, abortando se o token for cancelado
    async fn send(&self, request: RequestBuilder, cancel: &CancellationToken) -> Result<Response> {
        let response = tokio::select! {
            _ = cancel.cancelled() => return Err(ClickUpError::Cancelled),
            response = request.send() => response?,
        };
        self.handle_response(response).await
    }

    async fn send_json(
        &self,
        request: RequestBuilder,
        cancel: &CancellationToken,
    ) -> Result<Option<Value>> {
        let response = self.send(request, cancel).await?;
        let text = tokio::select! {
            _ = cancel.cancelled() => return Err(ClickUpError::Cancelled),
            text = response.text() => text?,
        };

        if text.trim().is_empty() {
            return Ok(None);
        }

        match serde_json::from_str::<Value>(&text)? {
            Value::Null => Ok(None),
            value => Ok(Some(value)),
        }
    }

    /// Processa a resposta HTTP e trata erros
    async fn handle_response(&self, response: Response) -> Result<Response> {
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let status_code = status.as_u16();
        let error_body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());

        tracing::error!("ClickUp API error ({}): {}", status_code, error_body);

        let (message, code) = match serde_json::from_str::<Value>(&error_body) {
            Ok(json) => {
                let message = json
                    .get("err")
                    .or_else(|| json.get("error"))
                    .or_else(|| json.get("message"))
                    .and_then(|v| v.as_str())
                    .unwrap_or(&error_body)
                    .to_string();
                let code = json
                    .get("ECODE")
                    .and_then(|v| v.as_str())
                    .map(str::to_string);
                (message, code)
            }
            Err(_) => (error_body, None),
        };

        Err(ClickUpError::Api {
            status: status_code,
            message,
            code,
        })
    }

    pub fn base_url_v2(&self) -> &str {
        &self.base_url_v2
    }

    pub fn base_url_v3(&self) -> &str {
        &self.base_url_v3
    }
}

#[async_trait]
impl ApiConnection for ReqwestConnection {
    async fn get(&self, path: &str, cancel: &CancellationToken) -> Result<Option<Value>> {
        self.send_json(self.request(Method::GET, path), cancel).await
    }

    async fn post(
        &self,
        path: &str,
        body: &Value,
        cancel: &CancellationToken,
    ) -> Result<Option<Value>> {
        self.send_json(self.request(Method::POST, path).json(body), cancel)
            .await
    }

    async fn post_no_content(
        &self,
        path: &str,
        body: &Value,
        cancel: &CancellationToken,
    ) -> Result<()> {
        self.send(self.request(Method::POST, path).json(body), cancel)
            .await?;
        Ok(())
    }

    async fn put(
        &self,
        path: &str,
        body: &Value,
        cancel: &CancellationToken,
    ) -> Result<Option<Value>> {
        self.send_json(self.request(Method::PUT, path).json(body), cancel)
            .await
    }

    async fn patch(
        &self,
        path: &str,
        body: &Value,
        cancel: &CancellationToken,
    ) -> Result<Option<Value>> {
        self.send_json(self.request(Method::PATCH, path).json(body), cancel)
            .await
    }

    async fn delete(&self, path: &str, cancel: &CancellationToken) -> Result<()> {
        self.send(self.request(Method::DELETE, path), cancel).await?;
        Ok(())
    }

    async fn delete_with_body(
        &self,
        path: &str,
        body: &Value,
        cancel: &CancellationToken,
    ) -> Result<()> {
        self.send(self.request(Method::DELETE, path).json(body), cancel)
            .await?;
        Ok(())
    }

    async fn post_multipart(
        &self,
        path: &str,
        payload: MultipartPayload,
        cancel: &CancellationToken,
    ) -> Result<Option<Value>> {
        tracing::debug!(
            "Upload multipart de '{}' ({} bytes)",
            payload.file_name,
            payload.content.len()
        );

        let mut part = Part::bytes(payload.content).file_name(payload.file_name);
        if let Some(content_type) = payload.content_type.as_deref() {
            part = part.mime_str(content_type)?;
        }

        let mut form = Form::new();
        for (name, value) in payload.fields {
            form = form.text(name, value);
        }
        form = form.part(payload.field_name, part);

        // reqwest define o Content-Type com o boundary do multipart
        self.send_json(self.request(Method::POST, path).multipart(form), cancel)
            .await
    }
}
