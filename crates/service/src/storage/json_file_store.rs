use std::{collections::HashMap, path::PathBuf, sync::Arc};

use serde_json::Value;
use tokio::{fs, sync::RwLock};
use uuid::Uuid;

use super::{Document, DocumentStore, NATIVE_ID};
use crate::errors::ServiceError;

/// JSON file-backed document store.
///
/// Keeps every collection in memory as an insertion-ordered list and
/// persists the whole set to one JSON file on each write. Intended for
/// deployments where a full database server is overkill.
#[derive(Clone)]
pub struct JsonFileStore {
    inner: Arc<RwLock<HashMap<String, Vec<Document>>>>,
    file_path: PathBuf,
}

impl JsonFileStore {
    /// Initialize the store from a path. Creates the file with an empty
    /// collection set if missing.
    pub async fn new<P: Into<PathBuf>>(path: P) -> Result<Arc<Self>, ServiceError> {
        let file_path = path.into();
        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent).await.ok();
        }

        let collections: HashMap<String, Vec<Document>> = match fs::read(&file_path).await {
            Ok(bytes) => serde_json::from_slice(&bytes).unwrap_or_default(),
            Err(_) => {
                let empty: HashMap<String, Vec<Document>> = HashMap::new();
                fs::write(
                    &file_path,
                    serde_json::to_vec(&empty).map_err(|e| ServiceError::Write(e.to_string()))?,
                )
                .await
                .map_err(|e| ServiceError::Write(e.to_string()))?;
                empty
            }
        };

        Ok(Arc::new(Self { inner: Arc::new(RwLock::new(collections)), file_path }))
    }

    async fn save(&self) -> Result<(), ServiceError> {
        let collections = self.inner.read().await;
        let data =
            serde_json::to_vec(&*collections).map_err(|e| ServiceError::Write(e.to_string()))?;
        fs::write(&self.file_path, data)
            .await
            .map_err(|e| ServiceError::Write(e.to_string()))?;
        Ok(())
    }
}

fn matches(doc: &Document, filter: &Document) -> bool {
    filter.iter().all(|(field, value)| doc.get(field) == Some(value))
}

#[async_trait::async_trait]
impl DocumentStore for JsonFileStore {
    async fn insert(
        &self,
        collection: &str,
        mut document: Document,
    ) -> Result<String, ServiceError> {
        let id = Uuid::new_v4().to_string();
        document.insert(NATIVE_ID.to_string(), Value::String(id.clone()));

        let mut collections = self.inner.write().await;
        collections.entry(collection.to_string()).or_default().push(document);
        drop(collections);
        self.save().await?;
        Ok(id)
    }

    async fn find(
        &self,
        collection: &str,
        filter: &Document,
        limit: Option<usize>,
    ) -> Result<Vec<Document>, ServiceError> {
        let collections = self.inner.read().await;
        let docs = collections.get(collection).map(Vec::as_slice).unwrap_or(&[]);
        let selected = docs.iter().filter(|d| matches(d, filter)).cloned();
        Ok(match limit {
            Some(n) => selected.take(n).collect(),
            None => selected.collect(),
        })
    }

    async fn collection_names(&self) -> Result<Vec<String>, ServiceError> {
        let collections = self.inner.read().await;
        let mut names: Vec<String> = collections.keys().cloned().collect();
        names.sort();
        Ok(names)
    }

    async fn ping(&self) -> Result<(), ServiceError> {
        fs::metadata(&self.file_path)
            .await
            .map_err(|e| ServiceError::Read(e.to_string()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(pairs: &[(&str, &str)]) -> Document {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), Value::String(v.to_string())))
            .collect()
    }

    fn temp_path() -> PathBuf {
        std::env::temp_dir().join(format!("json_file_store_{}.json", Uuid::new_v4()))
    }

    #[tokio::test]
    async fn insert_find_and_persist() -> Result<(), anyhow::Error> {
        let tmp = temp_path();
        let store = JsonFileStore::new(&tmp).await?;

        assert!(store.find("service", &Document::new(), None).await?.is_empty());

        let id = store.insert("service", doc(&[("title", "Wedding Planning")])).await?;
        assert!(!id.is_empty());
        store.insert("service", doc(&[("title", "Corporate Events")])).await?;

        let all = store.find("service", &Document::new(), None).await?;
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].get(NATIVE_ID), Some(&Value::String(id.clone())));

        // survives a reload from disk
        let reloaded = JsonFileStore::new(&tmp).await?;
        assert_eq!(reloaded.find("service", &Document::new(), None).await?.len(), 2);

        let _ = tokio::fs::remove_file(&tmp).await;
        Ok(())
    }

    #[tokio::test]
    async fn filter_and_limit_apply() -> Result<(), anyhow::Error> {
        let tmp = temp_path();
        let store = JsonFileStore::new(&tmp).await?;

        store.insert("teammember", doc(&[("name", "Ada"), ("team", "Media")])).await?;
        store.insert("teammember", doc(&[("name", "Ben"), ("team", "Events")])).await?;
        store.insert("teammember", doc(&[("name", "Cleo"), ("team", "Media")])).await?;

        let media = store.find("teammember", &doc(&[("team", "Media")]), None).await?;
        assert_eq!(media.len(), 2);

        let capped = store.find("teammember", &Document::new(), Some(1)).await?;
        assert_eq!(capped.len(), 1);

        let none = store.find("teammember", &doc(&[("team", "Catering")]), None).await?;
        assert!(none.is_empty());

        let names = store.collection_names().await?;
        assert_eq!(names, vec!["teammember".to_string()]);
        assert!(store.ping().await.is_ok());

        let _ = tokio::fs::remove_file(&tmp).await;
        Ok(())
    }
}
