//! Tipos de erro para o crate clickup-sdk
//!
//! Existem duas famílias de erro:
//!
//! - **Resposta inválida** (`InvalidResponse`): o transporte funcionou, mas o
//!   payload veio `null` ou sem o campo esperado. É o único erro originado
//!   pela camada de serviços.
//! - **Transporte** (`Http`, `Api`, `Json`, `Cancelled`): produzidos pela
//!   [`ApiConnection`](crate::connection::ApiConnection) e repassados ao
//!   chamador sem alteração.

use thiserror::Error;

/// Erros do cliente ClickUp
#[derive(Debug, Error)]
pub enum ClickUpError {
    /// O servidor respondeu, mas sem payload utilizável
    #[error("Invalid response from ClickUp API: {0}")]
    InvalidResponse(String),

    /// Erro de requisição HTTP
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Erro da API do ClickUp (status code não-2xx)
    #[error("ClickUp API error (status {status}): {message}")]
    Api {
        status: u16,
        message: String,
        /// Código `ECODE` retornado pelo ClickUp (ex: `OAUTH_027`)
        code: Option<String>,
    },

    /// Erro de parsing JSON
    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    /// Operação cancelada via `CancellationToken`
    #[error("Operation cancelled")]
    Cancelled,

    /// Erro de configuração
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ClickUpError {
    pub fn invalid_response(msg: impl Into<String>) -> Self {
        Self::InvalidResponse(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// `true` quando o servidor respondeu com payload vazio/nulo
    pub fn is_invalid_response(&self) -> bool {
        matches!(self, Self::InvalidResponse(_))
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }

    /// `true` para qualquer erro vindo da conexão HTTP
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            Self::Http(_) | Self::Api { .. } | Self::Json(_) | Self::Cancelled
        )
    }
}

impl From<config::ConfigError> for ClickUpError {
    fn from(err: config::ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}

/// Tipo Result padrão para o crate
pub type Result<T> = std::result::Result<T, ClickUpError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_messages() {
        let invalid = ClickUpError::invalid_response("task/1: resposta vazia");
        assert_eq!(
            invalid.to_string(),
            "Invalid response from ClickUp API: task/1: resposta vazia"
        );

        let api = ClickUpError::Api {
            status: 401,
            message: "Team not authorized".to_string(),
            code: Some("OAUTH_027".to_string()),
        };
        assert_eq!(
            api.to_string(),
            "ClickUp API error (status 401): Team not authorized"
        );

        assert_eq!(ClickUpError::Cancelled.to_string(), "Operation cancelled");
    }

    #[test]
    fn test_error_kinds() {
        assert!(ClickUpError::invalid_response("x").is_invalid_response());
        assert!(!ClickUpError::invalid_response("x").is_transport());
        assert!(ClickUpError::Cancelled.is_transport());
        assert!(ClickUpError::Cancelled.is_cancelled());
        assert!(!ClickUpError::config("x").is_transport());
    }

    #[test]
    fn test_json_error_from() {
        let parse: std::result::Result<serde_json::Value, _> = serde_json::from_str("{invalid");
        let err = ClickUpError::from(parse.unwrap_err());
        assert!(matches!(err, ClickUpError::Json(_)));
        assert!(err.is_transport());
    }
}
