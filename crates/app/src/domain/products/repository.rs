//! Products Store

use std::{io::ErrorKind, path::PathBuf};

use tokio::{fs, sync::Mutex};

use crate::domain::products::{
    errors::ProductsStoreError, models::ProductUuid, records::ProductRecord,
};

/// JSON-file-backed product store.
///
/// The whole collection lives in one pretty-printed JSON array on disk and
/// every operation reads and rewrites the file. The mutex serializes
/// read-modify-write cycles across concurrent handlers.
#[derive(Debug)]
pub(crate) struct JsonFileStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl JsonFileStore {
    pub(crate) fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    /// All records in stored order. A missing file reads as empty.
    pub(crate) async fn list(&self) -> Result<Vec<ProductRecord>, ProductsStoreError> {
        let _guard = self.lock.lock().await;

        self.load().await
    }

    /// Prepends a record, keeping the collection newest-first.
    pub(crate) async fn prepend(&self, record: ProductRecord) -> Result<(), ProductsStoreError> {
        let _guard = self.lock.lock().await;

        let mut records = self.load().await?;
        records.insert(0, record);

        self.save(&records).await
    }

    /// Removes the record with the given id, or fails with `NotFound`.
    pub(crate) async fn remove(&self, id: ProductUuid) -> Result<(), ProductsStoreError> {
        let _guard = self.lock.lock().await;

        let mut records = self.load().await?;
        let before = records.len();
        records.retain(|record| record.id != id);

        if records.len() == before {
            return Err(ProductsStoreError::NotFound);
        }

        self.save(&records).await
    }

    async fn load(&self) -> Result<Vec<ProductRecord>, ProductsStoreError> {
        let bytes = match fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(error) if error.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(error) => return Err(ProductsStoreError::Io(error)),
        };

        serde_json::from_slice(&bytes).map_err(ProductsStoreError::Encoding)
    }

    async fn save(&self, records: &[ProductRecord]) -> Result<(), ProductsStoreError> {
        let json = serde_json::to_vec_pretty(records).map_err(ProductsStoreError::Encoding)?;

        fs::write(&self.path, json)
            .await
            .map_err(ProductsStoreError::Io)
    }
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;
    use tempfile::TempDir;
    use testresult::TestResult;

    use super::*;

    fn make_record(title: &str) -> ProductRecord {
        ProductRecord {
            id: ProductUuid::new(),
            title: title.to_string(),
            url: "http://x.test".to_string(),
            price: String::new(),
            image: String::new(),
            notes: String::new(),
            created_at: Timestamp::UNIX_EPOCH,
        }
    }

    fn make_store(dir: &TempDir) -> JsonFileStore {
        JsonFileStore::new(dir.path().join("products.json"))
    }

    #[tokio::test]
    async fn missing_file_reads_as_empty() -> TestResult {
        let dir = TempDir::new()?;
        let store = make_store(&dir);

        let records = store.list().await?;

        assert!(records.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn prepend_keeps_newest_first_order() -> TestResult {
        let dir = TempDir::new()?;
        let store = make_store(&dir);

        store.prepend(make_record("first")).await?;
        store.prepend(make_record("second")).await?;

        let records = store.list().await?;
        let titles: Vec<&str> = records.iter().map(|r| r.title.as_str()).collect();

        assert_eq!(titles, ["second", "first"]);

        Ok(())
    }

    #[tokio::test]
    async fn remove_unknown_id_returns_not_found() -> TestResult {
        let dir = TempDir::new()?;
        let store = make_store(&dir);

        store.prepend(make_record("kept")).await?;

        let result = store.remove(ProductUuid::new()).await;

        assert!(
            matches!(result, Err(ProductsStoreError::NotFound)),
            "expected NotFound, got {result:?}"
        );
        assert_eq!(store.list().await?.len(), 1, "store must be left unchanged");

        Ok(())
    }

    #[tokio::test]
    async fn remove_deletes_only_the_matching_record() -> TestResult {
        let dir = TempDir::new()?;
        let store = make_store(&dir);

        let doomed = make_record("doomed");
        let doomed_id = doomed.id;

        store.prepend(make_record("kept")).await?;
        store.prepend(doomed).await?;

        store.remove(doomed_id).await?;

        let records = store.list().await?;

        assert_eq!(records.len(), 1);
        assert_eq!(records.first().map(|r| r.title.as_str()), Some("kept"));

        Ok(())
    }

    #[tokio::test]
    async fn malformed_file_is_an_encoding_error() -> TestResult {
        let dir = TempDir::new()?;
        let path = dir.path().join("products.json");

        std::fs::write(&path, "not json")?;

        let store = JsonFileStore::new(path);
        let result = store.list().await;

        assert!(
            matches!(result, Err(ProductsStoreError::Encoding(_))),
            "expected Encoding, got {result:?}"
        );

        Ok(())
    }
}
