//! DTOs da API do ClickUp
//!
//! Entidades espelham o JSON da API; campos opcionais são `Option<T>` e áreas
//! pouco tipadas usam `serde_json::Value`. Envelopes de resposta guardam o
//! payload em `Option<T>`, que os serviços desembrulham explicitamente.

mod attachment;
mod chat;
mod checklist;
mod comment;
mod common;
mod custom_field;
mod doc;
mod folder;
mod goal;
mod list;
mod misc;
mod space;
mod task;
mod time_entry;
mod view;
mod workspace;

pub use attachment::*;
pub use chat::*;
pub use checklist::*;
pub use comment::*;
pub use common::*;
pub use custom_field::*;
pub use doc::*;
pub use folder::*;
pub use goal::*;
pub use list::*;
pub use misc::*;
pub use space::*;
pub use task::*;
pub use time_entry::*;
pub use view::*;
pub use workspace::*;
