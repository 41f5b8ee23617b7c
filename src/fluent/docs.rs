use tokio_util::sync::CancellationToken;

use crate::error::Result;
use crate::models::{CreateDocRequest, CreatePageRequest, Doc, DocPage, DocParent, SearchDocsQuery};
use crate::pagination::Page;
use crate::services::DocsService;

/// Busca docs do workspace (v3)
pub struct DocsSearchBuilder {
    service: DocsService,
    workspace_id: String,
    query: SearchDocsQuery,
}

impl DocsSearchBuilder {
    pub fn new(service: DocsService, workspace_id: impl Into<String>) -> Self {
        Self {
            service,
            workspace_id: workspace_id.into(),
            query: SearchDocsQuery::default(),
        }
    }

    pub fn with_id(mut self, doc_id: impl Into<String>) -> Self {
        self.query.id = Some(doc_id.into());
        self
    }

    pub fn with_creator(mut self, user_id: i64) -> Self {
        self.query.creator = Some(user_id);
        self
    }

    pub fn with_deleted(mut self, deleted: bool) -> Self {
        self.query.deleted = Some(deleted);
        self
    }

    pub fn with_archived(mut self, archived: bool) -> Self {
        self.query.archived = Some(archived);
        self
    }

    /// `parent_type` aceita SPACE, FOLDER, LIST, EVERYTHING ou WORKSPACE
    pub fn with_parent(mut self, parent_id: impl Into<String>, parent_type: impl Into<String>) -> Self {
        self.query.parent_id = Some(parent_id.into());
        self.query.parent_type = Some(parent_type.into());
        self
    }

    pub fn with_limit(mut self, limit: i32) -> Self {
        self.query.limit = Some(limit);
        self
    }

    pub fn with_cursor(mut self, cursor: impl Into<String>) -> Self {
        self.query.next_cursor = Some(cursor.into());
        self
    }

    pub async fn search(self, cancel: &CancellationToken) -> Result<Page<Doc, String>> {
        self.service
            .search_docs(&self.workspace_id, &self.query, cancel)
            .await
    }
}

pub struct DocCreateBuilder {
    service: DocsService,
    workspace_id: String,
    request: CreateDocRequest,
}

impl DocCreateBuilder {
    pub fn new(service: DocsService, workspace_id: impl Into<String>) -> Self {
        Self {
            service,
            workspace_id: workspace_id.into(),
            request: CreateDocRequest::default(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.request.name = name.into();
        self
    }

    /// Tipos de parent: 4 space, 5 folder, 6 list, 7 everything, 12 workspace
    pub fn with_parent(mut self, parent_id: impl Into<String>, parent_type: i32) -> Self {
        self.request.parent = Some(DocParent {
            id: parent_id.into(),
            parent_type,
        });
        self
    }

    pub fn with_visibility(mut self, visibility: impl Into<String>) -> Self {
        self.request.visibility = Some(visibility.into());
        self
    }

    pub fn with_create_page(mut self, create_page: bool) -> Self {
        self.request.create_page = Some(create_page);
        self
    }

    pub async fn create(self, cancel: &CancellationToken) -> Result<Doc> {
        self.service
            .create_doc(&self.workspace_id, &self.request, cancel)
            .await
    }
}

pub struct PageCreateBuilder {
    service: DocsService,
    workspace_id: String,
    doc_id: String,
    request: CreatePageRequest,
}

impl PageCreateBuilder {
    pub fn new(
        service: DocsService,
        workspace_id: impl Into<String>,
        doc_id: impl Into<String>,
    ) -> Self {
        Self {
            service,
            workspace_id: workspace_id.into(),
            doc_id: doc_id.into(),
            request: CreatePageRequest::default(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.request.name = Some(name.into());
        self
    }

    pub fn with_sub_title(mut self, sub_title: impl Into<String>) -> Self {
        self.request.sub_title = Some(sub_title.into());
        self
    }

    pub fn with_parent_page(mut self, page_id: impl Into<String>) -> Self {
        self.request.parent_page_id = Some(page_id.into());
        self
    }

    /// Conteúdo em markdown (`text/md`) por padrão da API
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.request.content = Some(content.into());
        self
    }

    pub fn with_content_format(mut self, format: impl Into<String>) -> Self {
        self.request.content_format = Some(format.into());
        self
    }

    pub async fn create(self, cancel: &CancellationToken) -> Result<DocPage> {
        self.service
            .create_page(&self.workspace_id, &self.doc_id, &self.request, cancel)
            .await
    }
}
