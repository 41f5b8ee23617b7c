//! Docs (API v3)
//!
//! Todos os caminhos começam com `v3/workspaces/{workspace_id}/docs`.

use std::sync::Arc;

use futures::stream::BoxStream;
use tokio_util::sync::CancellationToken;

use crate::connection::ApiConnection;
use crate::error::Result;
use crate::models::{
    CreateDocRequest, CreatePageRequest, Doc, DocPage, DocPageListing, EditPageRequest,
    SearchDocsQuery, SearchDocsResponse,
};
use crate::pagination::{paginate, Page};
use crate::query::QueryBuilder;
use crate::response::{body, decode, require};

#[derive(Clone)]
pub struct DocsService {
    connection: Arc<dyn ApiConnection>,
}

impl DocsService {
    pub fn new(connection: Arc<dyn ApiConnection>) -> Self {
        Self { connection }
    }

    /// Uma página da busca de docs; `next_cursor` aponta para a próxima
    pub async fn search_docs(
        &self,
        workspace_id: &str,
        query: &SearchDocsQuery,
        cancel: &CancellationToken,
    ) -> Result<Page<Doc, String>> {
        let path = query.to_query().build(&docs_path(workspace_id));
        fetch_docs_page(self.connection.as_ref(), &path, cancel).await
    }

    /// Todos os docs que batem com os filtros, seguindo `next_cursor`
    pub fn search_docs_stream(
        &self,
        workspace_id: &str,
        query: SearchDocsQuery,
        cancel: &CancellationToken,
    ) -> BoxStream<'static, Result<Doc>> {
        let connection = self.connection.clone();
        let base_path = docs_path(workspace_id);
        let token = cancel.clone();
        let first = query.next_cursor.clone();
        paginate(first, cancel.clone(), move |cursor: Option<String>| {
            let connection = connection.clone();
            let mut query = query.clone();
            query.next_cursor = cursor;
            let path = query.to_query().build(&base_path);
            let token = token.clone();
            async move {
                let page = fetch_docs_page(connection.as_ref(), &path, &token).await?;
                Ok(Page::new(page.items, page.next.map(Some)))
            }
        })
    }

    pub async fn create_doc(
        &self,
        workspace_id: &str,
        request: &CreateDocRequest,
        cancel: &CancellationToken,
    ) -> Result<Doc> {
        let path = docs_path(workspace_id);
        let response = self.connection.post(&path, &body(request)?, cancel).await?;
        let doc: Doc = decode(response, &path)?;
        tracing::info!("📄 Doc criado: {} ({})", doc.name, doc.id);
        Ok(doc)
    }

    pub async fn get_doc(&self, workspace_id: &str, doc_id: &str, cancel: &CancellationToken) -> Result<Doc> {
        let path = format!("{}/{}", docs_path(workspace_id), doc_id);
        decode(self.connection.get(&path, cancel).await?, &path)
    }

    /// Árvore de páginas do doc, sem conteúdo
    pub async fn get_doc_page_listing(
        &self,
        workspace_id: &str,
        doc_id: &str,
        max_page_depth: Option<i32>,
        cancel: &CancellationToken,
    ) -> Result<Vec<DocPageListing>> {
        let path = QueryBuilder::new()
            .opt("max_page_depth", max_page_depth)
            .build(&format!("{}/{}/page_listing", docs_path(workspace_id), doc_id));
        decode(self.connection.get(&path, cancel).await?, &path)
    }

    /// Páginas do doc com conteúdo
    pub async fn get_doc_pages(
        &self,
        workspace_id: &str,
        doc_id: &str,
        max_page_depth: Option<i32>,
        content_format: Option<&str>,
        cancel: &CancellationToken,
    ) -> Result<Vec<DocPage>> {
        let path = QueryBuilder::new()
            .opt("max_page_depth", max_page_depth)
            .opt("content_format", content_format)
            .build(&pages_path(workspace_id, doc_id));
        decode(self.connection.get(&path, cancel).await?, &path)
    }

    pub async fn create_page(
        &self,
        workspace_id: &str,
        doc_id: &str,
        request: &CreatePageRequest,
        cancel: &CancellationToken,
    ) -> Result<DocPage> {
        let path = pages_path(workspace_id, doc_id);
        let response = self.connection.post(&path, &body(request)?, cancel).await?;
        decode(response, &path)
    }

    pub async fn get_page(
        &self,
        workspace_id: &str,
        doc_id: &str,
        page_id: &str,
        content_format: Option<&str>,
        cancel: &CancellationToken,
    ) -> Result<DocPage> {
        let path = QueryBuilder::new()
            .opt("content_format", content_format)
            .build(&format!("{}/{}", pages_path(workspace_id, doc_id), page_id));
        decode(self.connection.get(&path, cancel).await?, &path)
    }

    /// Edita nome/conteúdo da página; a resposta é descartada
    pub async fn edit_page(
        &self,
        workspace_id: &str,
        doc_id: &str,
        page_id: &str,
        request: &EditPageRequest,
        cancel: &CancellationToken,
    ) -> Result<()> {
        let path = format!("{}/{}", pages_path(workspace_id, doc_id), page_id);
        self.connection.put(&path, &body(request)?, cancel).await?;
        Ok(())
    }
}

fn docs_path(workspace_id: &str) -> String {
    format!("v3/workspaces/{}/docs", workspace_id)
}

fn pages_path(workspace_id: &str, doc_id: &str) -> String {
    format!("{}/{}/pages", docs_path(workspace_id), doc_id)
}

async fn fetch_docs_page(
    connection: &dyn ApiConnection,
    path: &str,
    cancel: &CancellationToken,
) -> Result<Page<Doc, String>> {
    let response: SearchDocsResponse = decode(connection.get(path, cancel).await?, path)?;
    let docs = require(response.docs, "docs", path)?;
    let next = response.next_cursor.filter(|cursor| !cursor.is_empty());
    Ok(Page::new(docs, next))
}
