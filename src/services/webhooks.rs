//! Webhooks: cadastro na API e validação das entregas recebidas
//!
//! O ClickUp assina cada entrega com HMAC-SHA256 do corpo bruto usando o
//! `secret` do webhook e envia o resultado em hex no header `X-Signature`.

use std::sync::Arc;

use hmac::{Hmac, Mac};
use sha2::Sha256;
use tokio_util::sync::CancellationToken;

use crate::connection::ApiConnection;
use crate::error::Result;
use crate::models::{
    CreateWebhookRequest, GetWebhooksResponse, UpdateWebhookRequest, Webhook, WebhookResponse,
};
use crate::response::{body, decode, require};

type HmacSha256 = Hmac<Sha256>;

/// Header HTTP com a assinatura das entregas
pub const SIGNATURE_HEADER: &str = "X-Signature";

#[derive(Clone)]
pub struct WebhooksService {
    connection: Arc<dyn ApiConnection>,
}

impl WebhooksService {
    pub fn new(connection: Arc<dyn ApiConnection>) -> Self {
        Self { connection }
    }

    /// Webhooks criados pelo usuário autenticado no workspace
    pub async fn get_webhooks(&self, workspace_id: &str, cancel: &CancellationToken) -> Result<Vec<Webhook>> {
        let path = format!("team/{}/webhook", workspace_id);
        let response: GetWebhooksResponse = decode(self.connection.get(&path, cancel).await?, &path)?;
        require(response.webhooks, "webhooks", &path)
    }

    /// Registra um webhook
    ///
    /// # Endpoint da API
    ///
    /// `POST team/{team_id}/webhook`
    ///
    /// Guarde o `secret` retornado: ele é necessário para
    /// [`verify_signature`].
    pub async fn create_webhook(
        &self,
        workspace_id: &str,
        request: &CreateWebhookRequest,
        cancel: &CancellationToken,
    ) -> Result<Webhook> {
        let path = format!("team/{}/webhook", workspace_id);
        let response: WebhookResponse =
            decode(self.connection.post(&path, &body(request)?, cancel).await?, &path)?;
        let webhook = require(response.webhook, "webhook", &path)?;
        tracing::info!("🪝 Webhook {} registrado para {}", webhook.id, webhook.endpoint);
        Ok(webhook)
    }

    pub async fn update_webhook(
        &self,
        webhook_id: &str,
        request: &UpdateWebhookRequest,
        cancel: &CancellationToken,
    ) -> Result<Webhook> {
        let path = format!("webhook/{}", webhook_id);
        let response: WebhookResponse =
            decode(self.connection.put(&path, &body(request)?, cancel).await?, &path)?;
        require(response.webhook, "webhook", &path)
    }

    pub async fn delete_webhook(&self, webhook_id: &str, cancel: &CancellationToken) -> Result<()> {
        self.connection
            .delete(&format!("webhook/{}", webhook_id), cancel)
            .await
    }
}

/// Valida a assinatura `X-Signature` de uma entrega
///
/// `body` deve ser o corpo exatamente como recebido, antes de qualquer parse.
/// A comparação é feita em tempo constante.
pub fn verify_signature(signature: &str, secret: &str, body: &[u8]) -> bool {
    let Ok(expected) = hex::decode(signature.trim()) else {
        tracing::warn!("Assinatura de webhook não é hex válido");
        return false;
    };

    let Ok(mut mac) = HmacSha256::new_from_slice(secret.as_bytes()) else {
        return false;
    };
    mac.update(body);
    mac.verify_slice(&expected).is_ok()
}

/// Assina um corpo como o ClickUp faria (útil para testar receptores)
pub fn sign_payload(secret: &str, body: &[u8]) -> String {
    // HMAC aceita chaves de qualquer tamanho
    let mut mac = match HmacSha256::new_from_slice(secret.as_bytes()) {
        Ok(mac) => mac,
        Err(_) => return String::new(),
    };
    mac.update(body);
    hex::encode(mac.finalize().into_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "test_secret";
    const BODY: &[u8] = br#"{"event":"taskCreated","task_id":"abc"}"#;

    #[test]
    fn test_verify_valid_signature() {
        let signature = sign_payload(SECRET, BODY);
        assert_eq!(signature.len(), 64);
        assert!(verify_signature(&signature, SECRET, BODY));
    }

    #[test]
    fn test_rejects_tampered_body_and_wrong_secret() {
        let signature = sign_payload(SECRET, BODY);
        assert!(!verify_signature(&signature, SECRET, b"{}"));
        assert!(!verify_signature(&signature, "other", BODY));
    }

    #[test]
    fn test_rejects_malformed_signature() {
        assert!(!verify_signature("invalid", SECRET, BODY));
        assert!(!verify_signature("", SECRET, BODY));
    }
}
