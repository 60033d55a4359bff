//! Storage abstraction for managed documents.
//!
//! The [`DocumentStore`] trait is the read/write contract of the
//! persistence layer. Implementations convert documents with
//! [`ManagedDocument::to_storage_row`] on write and
//! [`ManagedDocument::from_storage_row`] on read, so any text (quotes
//! included) round-trips unchanged.
//!
//! Operations take `&mut self`: a store instance holds a single
//! connection and is not meant to be shared between concurrent callers.

pub mod memory;

use anyhow::Result;
use async_trait::async_trait;

use crate::document::ManagedDocument;

/// Abstract document storage backend.
///
/// | Method | Purpose |
/// |--------|---------|
/// | [`put`](DocumentStore::put) | Insert documents in one unit of work |
/// | [`get`](DocumentStore::get) | Read all documents, or those with the given names |
/// | [`get_names`](DocumentStore::get_names) | List stored document names |
/// | [`disconnect`](DocumentStore::disconnect) | Release the held connection |
///
/// Results are always in insertion order. Storage is created lazily on
/// first access; rows are never updated or deleted.
#[async_trait]
pub trait DocumentStore: Send {
    async fn put(&mut self, documents: &[ManagedDocument]) -> Result<()>;

    /// `None` returns every document. `Some(names)` returns the documents
    /// whose name is in `names`; an empty slice matches nothing.
    async fn get(&mut self, names: Option<&[String]>) -> Result<Vec<ManagedDocument>>;

    async fn get_names(&mut self) -> Result<Vec<String>>;

    /// Fails with [`StoreError::NeverConnected`](crate::error::StoreError::NeverConnected)
    /// when no connection is held.
    async fn disconnect(&mut self) -> Result<()>;
}
