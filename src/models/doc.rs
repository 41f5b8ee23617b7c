//! Docs (API v3)

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::query::QueryBuilder;

/// Pai de um doc (space, folder, list, task ou workspace)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocParent {
    pub id: String,
    /// 4=space, 5=folder, 6=list, 7=everything, 12=workspace
    #[serde(rename = "type")]
    pub parent_type: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Doc {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_created: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_updated: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creator: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<DocParent>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub doc_type: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleted: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub archived: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workspace_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public: Option<bool>,
}

/// Página de `GET v3/workspaces/{id}/docs`
#[derive(Debug, Clone, Deserialize)]
pub struct SearchDocsResponse {
    #[serde(default)]
    pub docs: Option<Vec<Doc>>,
    #[serde(default)]
    pub next_cursor: Option<String>,
}

/// Filtros de busca de docs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchDocsQuery {
    pub id: Option<String>,
    pub creator: Option<i64>,
    pub deleted: Option<bool>,
    pub archived: Option<bool>,
    pub parent_id: Option<String>,
    pub parent_type: Option<String>,
    pub limit: Option<i32>,
    pub next_cursor: Option<String>,
}

impl SearchDocsQuery {
    pub(crate) fn to_query(&self) -> QueryBuilder {
        QueryBuilder::new()
            .opt("id", self.id.as_deref())
            .opt("creator", self.creator)
            .opt("deleted", self.deleted)
            .opt("archived", self.archived)
            .opt("parent_id", self.parent_id.as_deref())
            .opt("parent_type", self.parent_type.as_deref())
            .opt("limit", self.limit)
            .opt("next_cursor", self.next_cursor.as_deref())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CreateDocRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<DocParent>,
    /// PUBLIC, PRIVATE, PERSONAL ou HIDDEN
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visibility: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_page: Option<bool>,
}

/// Página de um doc com conteúdo
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocPage {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doc_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_page_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workspace_id: Option<i64>,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_created: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_updated: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creator_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub archived: Option<bool>,
    #[serde(default)]
    pub pages: Vec<DocPage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<Value>,
}

/// Entrada da árvore de páginas (`page_listing`), sem conteúdo
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocPageListing {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doc_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_page_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workspace_id: Option<i64>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub pages: Vec<DocPageListing>,
}

/// Payload de criação de página
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CreatePageRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_page_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// `text/md` (padrão da API) ou `text/plain`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_format: Option<String>,
}

/// Payload de `PUT v3/.../pages/{page_id}`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EditPageRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// `replace`, `append` ou `prepend`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_edit_mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_format: Option<String>,
}
