//! Document storage for the content backend.
//!
//! Collections are named sets of flat field-to-value documents. The backing
//! engine sits behind the `DocumentStore` trait; the rest of the crate only
//! sees the process-wide `Store` handle.

pub mod json_file_store;

use std::sync::Arc;

use serde_json::Value;

use crate::errors::ServiceError;

/// One record within a collection: a flat field-to-value mapping.
pub type Document = serde_json::Map<String, Value>;

/// Native key field assigned by the store at insert time. Never exposed past
/// the content layer.
pub const NATIVE_ID: &str = "_id";

#[async_trait::async_trait]
pub trait DocumentStore: Send + Sync {
    /// Store a document, returning the newly assigned identifier.
    async fn insert(&self, collection: &str, document: Document) -> Result<String, ServiceError>;

    /// Fetch documents whose fields equal `filter` exactly (empty filter
    /// matches all), capped at `limit` when provided, in the store's
    /// natural order.
    async fn find(
        &self,
        collection: &str,
        filter: &Document,
        limit: Option<usize>,
    ) -> Result<Vec<Document>, ServiceError>;

    /// Names of the collections currently holding documents.
    async fn collection_names(&self) -> Result<Vec<String>, ServiceError>;

    /// Connectivity probe.
    async fn ping(&self) -> Result<(), ServiceError>;
}

/// Process-wide store handle: the backend connection, or its absence.
///
/// Acquired once at startup and injected as a dependency; every operation on
/// a disconnected handle fails with `ServiceError::Unavailable`.
#[derive(Clone)]
pub struct Store {
    backend: Option<Arc<dyn DocumentStore>>,
}

impl Store {
    pub fn connected(backend: Arc<dyn DocumentStore>) -> Self {
        Self { backend: Some(backend) }
    }

    pub fn disconnected() -> Self {
        Self { backend: None }
    }

    pub fn is_connected(&self) -> bool {
        self.backend.is_some()
    }

    fn backend(&self) -> Result<&Arc<dyn DocumentStore>, ServiceError> {
        self.backend.as_ref().ok_or(ServiceError::Unavailable)
    }

    pub async fn insert(
        &self,
        collection: &str,
        document: Document,
    ) -> Result<String, ServiceError> {
        self.backend()?.insert(collection, document).await
    }

    pub async fn find(
        &self,
        collection: &str,
        filter: &Document,
        limit: Option<usize>,
    ) -> Result<Vec<Document>, ServiceError> {
        self.backend()?.find(collection, filter, limit).await
    }

    pub async fn collection_names(&self) -> Result<Vec<String>, ServiceError> {
        self.backend()?.collection_names().await
    }

    pub async fn ping(&self) -> Result<(), ServiceError> {
        self.backend()?.ping().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn disconnected_store_reports_unavailable() {
        let store = Store::disconnected();
        assert!(!store.is_connected());
        let err = store.find("service", &Document::new(), None).await.unwrap_err();
        assert!(matches!(err, ServiceError::Unavailable));
        let err = store.insert("service", Document::new()).await.unwrap_err();
        assert!(matches!(err, ServiceError::Unavailable));
        assert!(store.ping().await.is_err());
    }
}
