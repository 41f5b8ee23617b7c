//! Desembrulho de respostas: `null` nunca passa silenciosamente
//!
//! Toda resposta da conexão é `Option<Value>`. `decode` falha com
//! `InvalidResponse` quando a resposta é vazia/`null`; `require` falha quando o
//! campo de payload do envelope veio ausente ou `null`.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::error::{ClickUpError, Result};

/// Converte a resposta bruta no DTO esperado
pub(crate) fn decode<T: DeserializeOwned>(value: Option<Value>, endpoint: &str) -> Result<T> {
    match value {
        None | Some(Value::Null) => {
            tracing::warn!("Resposta vazia do ClickUp para {}", endpoint);
            Err(ClickUpError::invalid_response(format!(
                "{}: resposta vazia",
                endpoint
            )))
        }
        Some(value) => Ok(serde_json::from_value(value)?),
    }
}

/// Exige o payload de um envelope (`tasks`, `data`, `view`...)
pub(crate) fn require<T>(payload: Option<T>, field: &str, endpoint: &str) -> Result<T> {
    payload.ok_or_else(|| {
        tracing::warn!("Campo '{}' ausente na resposta de {}", field, endpoint);
        ClickUpError::invalid_response(format!("{}: campo '{}' ausente", endpoint, field))
    })
}

/// Serializa o corpo da requisição
pub(crate) fn body<T: Serialize>(request: &T) -> Result<Value> {
    Ok(serde_json::to_value(request)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Deserialize)]
    struct Envelope {
        items: Option<Vec<u32>>,
    }

    #[test]
    fn test_decode_none_and_null_are_invalid() {
        let none: Result<Envelope> = decode(None, "x");
        assert!(none.unwrap_err().is_invalid_response());

        let null: Result<Envelope> = decode(Some(Value::Null), "x");
        assert!(null.unwrap_err().is_invalid_response());
    }

    #[test]
    fn test_require_missing_field() {
        let env: Envelope = decode(Some(json!({})), "x").unwrap();
        let err = require(env.items, "items", "x").unwrap_err();
        assert!(err.is_invalid_response());
        assert!(err.to_string().contains("'items'"));
    }

    #[test]
    fn test_empty_collection_is_not_an_error() {
        let env: Envelope = decode(Some(json!({ "items": [] })), "x").unwrap();
        let items = require(env.items, "items", "x").unwrap();
        assert!(items.is_empty());
    }

    #[test]
    fn test_shape_mismatch_is_json_error() {
        let err = decode::<Envelope>(Some(json!({ "items": "nope" })), "x").unwrap_err();
        assert!(matches!(err, ClickUpError::Json(_)));
    }
}
