//! In-memory [`DocumentStore`] implementation for tests and dry runs.
//!
//! Rows are kept in their storage encoding, so the same conversions run
//! as with a database-backed store.

use anyhow::Result;
use async_trait::async_trait;

use crate::document::{DocumentRow, ManagedDocument};
use crate::error::StoreError;

use super::DocumentStore;

/// In-memory store. "Connecting" happens on first access.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    rows: Vec<DocumentRow>,
    connected: bool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[async_trait]
impl DocumentStore for InMemoryStore {
    async fn put(&mut self, documents: &[ManagedDocument]) -> Result<()> {
        self.connected = true;
        self.rows
            .extend(documents.iter().map(ManagedDocument::to_storage_row));
        Ok(())
    }

    async fn get(&mut self, names: Option<&[String]>) -> Result<Vec<ManagedDocument>> {
        self.connected = true;
        let docs = self
            .rows
            .iter()
            .cloned()
            .map(ManagedDocument::from_storage_row)
            .filter(|doc| names.map_or(true, |names| names.contains(&doc.document_name)))
            .collect();
        Ok(docs)
    }

    async fn get_names(&mut self) -> Result<Vec<String>> {
        Ok(self
            .get(None)
            .await?
            .into_iter()
            .map(|doc| doc.document_name)
            .collect())
    }

    async fn disconnect(&mut self) -> Result<()> {
        if !self.connected {
            return Err(StoreError::NeverConnected.into());
        }
        self.connected = false;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(name: &str, content: &str) -> ManagedDocument {
        ManagedDocument {
            document_name: name.to_string(),
            content: content.to_string(),
            summary: "Test".to_string(),
            q_and_a: "Hello? World.".to_string(),
            mindmap: "Hello -> World".to_string(),
            bullet_points: ". Hello, . World".to_string(),
        }
    }

    #[tokio::test]
    async fn test_round_trip_with_quotes() {
        let mut store = InMemoryStore::new();
        let original = doc("quotes", r#"It's a "test""#);
        store.put(std::slice::from_ref(&original)).await.unwrap();

        let loaded = store.get(None).await.unwrap();
        assert_eq!(loaded, vec![original]);
        assert_eq!(loaded[0].content, r#"It's a "test""#);
    }

    #[tokio::test]
    async fn test_names_in_insertion_order() {
        let mut store = InMemoryStore::new();
        store
            .put(&[doc("doc1", "one"), doc("doc2", "two")])
            .await
            .unwrap();
        assert_eq!(store.get_names().await.unwrap(), vec!["doc1", "doc2"]);
    }

    #[tokio::test]
    async fn test_get_filters_by_name() {
        let mut store = InMemoryStore::new();
        store
            .put(&[doc("a", "1"), doc("b", "2"), doc("c", "3")])
            .await
            .unwrap();

        let names = vec!["c".to_string(), "a".to_string()];
        let docs = store.get(Some(names.as_slice())).await.unwrap();
        let got: Vec<&str> = docs.iter().map(|d| d.document_name.as_str()).collect();
        assert_eq!(got, vec!["a", "c"]);

        assert!(store.get(Some(&[] as &[String])).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_disconnect_requires_connection() {
        let mut store = InMemoryStore::new();
        let err = store.disconnect().await.unwrap_err();
        assert_eq!(
            err.downcast_ref::<StoreError>(),
            Some(&StoreError::NeverConnected)
        );

        store.get_names().await.unwrap();
        store.disconnect().await.unwrap();
    }
}
