//! Montagem de URLs relativas com query string
//!
//! Regras:
//! - apenas parâmetros presentes entram na query, na ordem em que são adicionados
//! - cada valor é percent-encoded exatamente uma vez
//! - arrays viram pares repetidos `chave[]=valor`
//! - booleanos viram `true`/`false`

use std::fmt::Display;

/// Acumula pares `chave=valor` e produz o caminho final
#[derive(Debug, Clone, Default)]
pub struct QueryBuilder {
    pairs: Vec<(String, String)>,
}

impl QueryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adiciona um parâmetro obrigatório
    pub fn push(mut self, key: &str, value: impl Display) -> Self {
        self.pairs.push((key.to_string(), value.to_string()));
        self
    }

    /// Adiciona o parâmetro apenas se estiver presente
    pub fn opt<T: Display>(self, key: &str, value: Option<T>) -> Self {
        match value {
            Some(v) => self.push(key, v),
            None => self,
        }
    }

    /// Adiciona `chave[]=valor` para cada item (nada se vazio)
    pub fn array<T: Display>(mut self, key: &str, values: &[T]) -> Self {
        let key = format!("{}[]", key);
        for value in values {
            self.pairs.push((key.clone(), value.to_string()));
        }
        self
    }

    /// Adiciona `chave=valor` repetido, sem colchetes (ex: `task_ids` do bulk time in status)
    pub fn repeated<T: Display>(mut self, key: &str, values: &[T]) -> Self {
        for value in values {
            self.pairs.push((key.to_string(), value.to_string()));
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Query string sem o `?` inicial
    pub fn encode(&self) -> String {
        self.pairs
            .iter()
            .map(|(key, value)| format!("{}={}", key, urlencoding::encode(value)))
            .collect::<Vec<_>>()
            .join("&")
    }

    /// Anexa a query ao caminho (`path?query`), ou devolve o caminho puro
    pub fn build(&self, path: &str) -> String {
        if self.pairs.is_empty() {
            path.to_string()
        } else {
            format!("{}?{}", path, self.encode())
        }
    }
}

/// Percent-encode de um segmento de caminho com texto livre (nome de tag, emoji...)
pub fn segment(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_present_params_in_order() {
        let url = QueryBuilder::new()
            .opt("archived", Some(false))
            .opt::<i32>("page", None)
            .opt("order_by", Some("created"))
            .opt::<bool>("reverse", None)
            .build("list/123/task");

        assert_eq!(url, "list/123/task?archived=false&order_by=created");
    }

    #[test]
    fn test_no_params_returns_plain_path() {
        let url = QueryBuilder::new().opt::<bool>("archived", None).build("team/1/space");
        assert_eq!(url, "team/1/space");
    }

    #[test]
    fn test_arrays_are_repeated_with_brackets() {
        let url = QueryBuilder::new()
            .array("statuses", &["to do", "in progress"])
            .array::<String>("tags", &[])
            .build("list/1/task");

        assert_eq!(url, "list/1/task?statuses[]=to%20do&statuses[]=in%20progress");
    }

    #[test]
    fn test_values_are_encoded_once() {
        let url = QueryBuilder::new()
            .push("custom_fields", r#"[{"field_id":"a b"}]"#)
            .build("list/1/task");

        assert_eq!(
            url,
            "list/1/task?custom_fields=%5B%7B%22field_id%22%3A%22a%20b%22%7D%5D"
        );
        assert!(!url.contains("%25"));
    }

    #[test]
    fn test_percent_sign_encoded_once() {
        let url = QueryBuilder::new().push("q", "100%").build("x");
        assert_eq!(url, "x?q=100%25");
    }

    #[test]
    fn test_repeated_without_brackets() {
        let url = QueryBuilder::new()
            .repeated("task_ids", &["a", "b"])
            .build("task/bulk_time_in_status/task_ids");
        assert_eq!(url, "task/bulk_time_in_status/task_ids?task_ids=a&task_ids=b");
    }

    #[test]
    fn test_segment_encoding() {
        assert_eq!(segment("urgent fix"), "urgent%20fix");
        assert_eq!(segment("plain"), "plain");
    }
}
