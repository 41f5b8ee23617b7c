//! Campos personalizados (custom fields)
//!
//! O formato de `type_config` e `value` depende do tipo do campo
//! (drop_down, labels, date, currency, ...), por isso ficam como `Value`.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Definição de campo personalizado, com o valor atual quando embutido em uma task
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomField {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub field_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_config: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_created: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hide_from_guests: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
}

impl CustomField {
    /// Opções de um campo `drop_down`/`labels` (`type_config.options`)
    pub fn options(&self) -> &[Value] {
        self.type_config
            .as_ref()
            .and_then(|config| config.get("options"))
            .and_then(|options| options.as_array())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct GetCustomFieldsResponse {
    #[serde(default)]
    pub fields: Option<Vec<CustomField>>,
}

/// Payload de `POST task/{task_id}/field/{field_id}`
///
/// Ex: `{"value": "uuid-da-opcao"}` para drop_down, `{"value": 1700000000000,
/// "value_options": {"time": true}}` para datas.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SetCustomFieldValueRequest {
    pub value: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_options: Option<Value>,
}

impl SetCustomFieldValueRequest {
    pub fn new(value: impl Into<Value>) -> Self {
        Self {
            value: value.into(),
            value_options: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_dropdown_options() {
        let field: CustomField = serde_json::from_value(json!({
            "id": "f1",
            "name": "Categoria",
            "type": "drop_down",
            "type_config": { "options": [{ "id": "o1", "name": "A" }, { "id": "o2", "name": "B" }] }
        }))
        .unwrap();

        assert_eq!(field.field_type.as_deref(), Some("drop_down"));
        assert_eq!(field.options().len(), 2);
        assert_eq!(field.options()[1]["name"], "B");
    }

    #[test]
    fn test_field_without_config_has_no_options() {
        let field: CustomField = serde_json::from_value(json!({ "id": "f2", "name": "Texto" })).unwrap();
        assert!(field.options().is_empty());
    }
}
