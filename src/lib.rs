//! SDK tipado para a API REST do ClickUp (v2 e v3)
//!
//! - [`ClickUpClient`] entrega um serviço por recurso (`tasks()`, `comments()`, ...)
//! - [`FluentApi`] oferece builders encadeáveis sobre os mesmos serviços
//! - todo I/O passa por uma [`ApiConnection`] injetável; a padrão usa reqwest
//! - toda operação aceita um [`CancellationToken`]
//!
//! ```rust,ignore
//! use clickup_sdk::{ClickUpClient, CancellationToken};
//! use futures::StreamExt;
//!
//! let client = ClickUpClient::from_env()?;
//! let cancel = CancellationToken::new();
//!
//! let mut comments = client
//!     .comments()
//!     .get_task_comments_stream("abc123", &Default::default(), None, &cancel);
//! while let Some(comment) = comments.next().await {
//!     println!("{}", comment?.comment_text);
//! }
//! ```

pub mod client;
pub mod config;
pub mod connection;
pub mod error;
pub mod fluent;
pub mod models;
pub mod pagination;
pub mod query;
pub mod services;

mod response;

pub use client::ClickUpClient;
pub use config::ClientSettings;
pub use connection::{ApiConnection, MultipartPayload, ReqwestConnection};
pub use error::{ClickUpError, Result};
pub use fluent::FluentApi;
pub use pagination::Page;
pub use query::QueryBuilder;
pub use tokio_util::sync::CancellationToken;
