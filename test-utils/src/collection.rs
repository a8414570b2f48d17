//! In-memory student collection.
//!
//! Mimics the subset of MongoDB collection behaviour the service relies on: documents kept
//! in insertion order, identifiers assigned on insert, single-document lookup, update and
//! delete by `_id`. Cloning the collection shares the underlying storage.

use bson::oid::ObjectId;
use entity::student::Model;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::TestError;

#[derive(Default)]
struct Inner {
    documents: Vec<Model>,
    fault: Option<String>,
}

impl Inner {
    fn check_fault(&self) -> Result<(), TestError> {
        match &self.fault {
            Some(message) => Err(TestError::InjectedFault(message.clone())),
            None => Ok(()),
        }
    }
}

/// Shared in-memory collection of student documents.
#[derive(Clone, Default)]
pub struct MemoryCollection {
    inner: Arc<RwLock<Inner>>,
}

impl MemoryCollection {
    /// Creates an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every subsequent operation fail with `TestError::InjectedFault(message)`.
    pub async fn fail_with(&self, message: impl Into<String>) {
        self.inner.write().await.fault = Some(message.into());
    }

    /// Removes a previously injected fault.
    pub async fn clear_fault(&self) {
        self.inner.write().await.fault = None;
    }

    /// Returns all documents matching `predicate` in insertion order.
    pub async fn find<F>(&self, predicate: F) -> Result<Vec<Model>, TestError>
    where
        F: Fn(&Model) -> bool,
    {
        let inner = self.inner.read().await;
        inner.check_fault()?;

        Ok(inner
            .documents
            .iter()
            .filter(|doc| predicate(doc))
            .cloned()
            .collect())
    }

    /// Finds the document with the given `_id`.
    pub async fn find_one(&self, id: &ObjectId) -> Result<Option<Model>, TestError> {
        let inner = self.inner.read().await;
        inner.check_fault()?;

        Ok(inner
            .documents
            .iter()
            .find(|doc| doc.id.as_ref() == Some(id))
            .cloned())
    }

    /// Inserts a document, assigning a fresh `_id` when the document has none.
    ///
    /// # Returns
    /// - `Ok(ObjectId)` - Identifier of the inserted document
    /// - `Err(TestError::DuplicateKey)` - A document with the same `_id` already exists
    /// - `Err(TestError::InjectedFault)` - A fault is currently injected
    pub async fn insert_one(&self, mut document: Model) -> Result<ObjectId, TestError> {
        let mut inner = self.inner.write().await;
        inner.check_fault()?;

        let id = *document.id.get_or_insert_with(ObjectId::new);
        if inner.documents.iter().any(|doc| doc.id == Some(id)) {
            return Err(TestError::DuplicateKey(id));
        }

        inner.documents.push(document);

        Ok(id)
    }

    /// Applies `mutate` to the document with the given `_id`.
    ///
    /// Returns whether a document matched.
    pub async fn update_one<F>(&self, id: &ObjectId, mutate: F) -> Result<bool, TestError>
    where
        F: FnOnce(&mut Model),
    {
        let mut inner = self.inner.write().await;
        inner.check_fault()?;

        match inner
            .documents
            .iter_mut()
            .find(|doc| doc.id.as_ref() == Some(id))
        {
            Some(doc) => {
                mutate(doc);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Removes the document with the given `_id`, returning whether one was deleted.
    pub async fn delete_one(&self, id: &ObjectId) -> Result<bool, TestError> {
        let mut inner = self.inner.write().await;
        inner.check_fault()?;

        let before = inner.documents.len();
        inner.documents.retain(|doc| doc.id.as_ref() != Some(id));

        Ok(inner.documents.len() < before)
    }

    /// Number of stored documents, ignoring any injected fault.
    pub async fn len(&self) -> usize {
        self.inner.read().await.documents.len()
    }

    /// Snapshot of every stored document, ignoring any injected fault.
    pub async fn documents(&self) -> Vec<Model> {
        self.inner.read().await.documents.clone()
    }
}
