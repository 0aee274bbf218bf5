use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::PathBuf;

use tokio::fs;

use crate::common::response::JobError;
use crate::infrastructure::codec::Record;
use crate::infrastructure::storage::local::JobStore;

pub struct JobRepository;

impl JobRepository {
    /// A job exists iff its record file exists.
    pub async fn job_exists(store: &JobStore, job_id: u64) -> bool {
        fs::metadata(store.job_file(job_id))
            .await
            .map(|meta| meta.is_file())
            .unwrap_or(false)
    }

    /// The stored record, or an empty one when the job does not exist.
    pub async fn get_job(store: &JobStore, job_id: u64) -> Result<Record, JobError> {
        if !Self::job_exists(store, job_id).await {
            return Ok(Record::new());
        }

        let bytes = match fs::read(store.job_file(job_id)).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Record::new()),
            Err(e) => return Err(e.into()),
        };

        Ok(store.codec().decode(&bytes)?)
    }

    /// Overwrites an existing record. Returns `false` without touching the
    /// filesystem when the job does not exist.
    pub async fn write_job(store: &JobStore, job_id: u64, data: &Record) -> Result<bool, JobError> {
        if !Self::job_exists(store, job_id).await {
            return Ok(false);
        }

        let bytes = store.codec().encode(data)?;
        fs::write(store.job_file(job_id), bytes).await?;
        Ok(true)
    }

    /// Regular files in the job's assets folder, keyed by file name. A
    /// missing folder is an empty set.
    pub async fn get_assets(
        store: &JobStore,
        job_id: u64,
    ) -> Result<BTreeMap<String, PathBuf>, JobError> {
        let mut assets = BTreeMap::new();

        let mut entries = match fs::read_dir(store.assets_folder(job_id)).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(assets),
            Err(e) => return Err(e.into()),
        };

        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            // Follows symlinks
            let is_file = fs::metadata(&path)
                .await
                .map(|meta| meta.is_file())
                .unwrap_or(false);
            if !is_file {
                continue;
            }
            if let Ok(name) = entry.file_name().into_string() {
                assets.insert(name, path);
            }
        }

        Ok(assets)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::codec::RecordFormat;
    use serde_json::{Value, json};
    use std::fs as std_fs;
    use tempfile::TempDir;

    fn store(dir: &TempDir, format: RecordFormat) -> JobStore {
        JobStore::new(dir.path(), format.codec())
    }

    fn record(value: Value) -> Record {
        match value {
            Value::Object(map) => map,
            _ => panic!("fixture is not an object"),
        }
    }

    #[tokio::test]
    async fn missing_job_reads_as_empty() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir, RecordFormat::Json);

        assert!(!JobRepository::job_exists(&store, 9).await);
        assert!(JobRepository::get_job(&store, 9).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn write_to_missing_job_creates_nothing() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir, RecordFormat::Json);
        std_fs::create_dir_all(store.job_folder(3)).unwrap();

        let written = JobRepository::write_job(&store, 3, &record(json!({"complete": true})))
            .await
            .unwrap();

        assert!(!written);
        assert!(!store.job_file(3).exists());
        assert!(!store.job_folder(4).exists());
    }

    #[tokio::test]
    async fn write_then_read_yaml_record() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir, RecordFormat::Yaml);
        std_fs::create_dir_all(store.job_folder(5)).unwrap();
        std_fs::write(store.job_file(5), "complete: false\n").unwrap();

        let updated = record(json!({"complete": true, "frames": [1, 2]}));
        assert!(JobRepository::write_job(&store, 5, &updated).await.unwrap());

        assert_eq!(JobRepository::get_job(&store, 5).await.unwrap(), updated);
        let on_disk = std_fs::read_to_string(store.job_file(5)).unwrap();
        assert!(on_disk.contains("complete: true"));
    }

    #[tokio::test]
    async fn corrupt_record_is_an_error() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir, RecordFormat::Json);
        std_fs::create_dir_all(store.job_folder(1)).unwrap();
        std_fs::write(store.job_file(1), "{not json").unwrap();

        let err = JobRepository::get_job(&store, 1).await.unwrap_err();
        assert!(matches!(err, JobError::Codec(_)));
    }

    #[tokio::test]
    async fn assets_skip_directories() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir, RecordFormat::Json);
        let assets = store.assets_folder(2);
        std_fs::create_dir_all(assets.join("nested")).unwrap();
        std_fs::write(assets.join("a.png"), b"a").unwrap();
        std_fs::write(assets.join("b.jpg"), b"b").unwrap();

        let found = JobRepository::get_assets(&store, 2).await.unwrap();

        assert_eq!(found.keys().collect::<Vec<_>>(), vec!["a.png", "b.jpg"]);
        assert_eq!(found["a.png"], assets.join("a.png"));
    }

    #[tokio::test]
    async fn missing_assets_folder_is_empty() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir, RecordFormat::Json);

        assert!(JobRepository::get_assets(&store, 8).await.unwrap().is_empty());
    }
}
