//! JSON-file implementation of DeporteRepository

use async_trait::async_trait;
use std::io;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::instrument;

use crate::error::{StoreError, StoreResult};
use crate::models::Deporte;
use crate::repository::DeporteRepository;

/// Stores the collection as a pretty-printed JSON array in a single file.
///
/// `save` writes `<file>.tmp` next to the target, fsyncs it and renames it
/// over the target, so the file is always either the old or the new
/// collection. Two processes sharing a file can still lose updates.
#[derive(Debug, Clone)]
pub struct JsonFileDeporteRepository {
    path: PathBuf,
}

impl JsonFileDeporteRepository {
    /// # Example
    /// ```ignore
    /// let repo = JsonFileDeporteRepository::new("db/deportes.json");
    /// repo.ensure_exists().await?;
    /// ```
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Creates the file holding an empty collection (and its parent
    /// directories) unless it already exists. Existing content is untouched.
    #[instrument(skip(self), fields(path = %self.path.display()))]
    pub async fn ensure_exists(&self) -> StoreResult<()> {
        let exists = fs::try_exists(&self.path)
            .await
            .map_err(|source| self.read_error(source))?;
        if exists {
            return Ok(());
        }

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .await
                .map_err(|source| self.write_error(source))?;
        }

        self.write_atomically(b"[]").await?;
        tracing::info!("Created empty deportes file");
        Ok(())
    }

    fn temp_path(&self) -> PathBuf {
        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        PathBuf::from(tmp)
    }

    async fn write_atomically(&self, bytes: &[u8]) -> StoreResult<()> {
        let tmp = self.temp_path();

        if let Err(source) = replace_file(&tmp, &self.path, bytes).await {
            // The target is untouched; only the partial temp file needs to go.
            let _ = fs::remove_file(&tmp).await;
            return Err(self.write_error(source));
        }

        Ok(())
    }

    fn read_error(&self, source: io::Error) -> StoreError {
        StoreError::Read {
            path: self.path.clone(),
            source,
        }
    }

    fn write_error(&self, source: io::Error) -> StoreError {
        StoreError::Write {
            path: self.path.clone(),
            source,
        }
    }
}

async fn replace_file(tmp: &Path, target: &Path, bytes: &[u8]) -> io::Result<()> {
    let mut file = fs::File::create(tmp).await?;
    file.write_all(bytes).await?;
    file.sync_all().await?;
    drop(file);

    fs::rename(tmp, target).await
}

#[async_trait]
impl DeporteRepository for JsonFileDeporteRepository {
    #[instrument(skip(self), fields(path = %self.path.display()))]
    async fn load(&self) -> StoreResult<Vec<Deporte>> {
        let bytes = fs::read(&self.path)
            .await
            .map_err(|source| self.read_error(source))?;

        let deportes: Vec<Deporte> =
            serde_json::from_slice(&bytes).map_err(|source| StoreError::Decode {
                path: self.path.clone(),
                source,
            })?;

        tracing::debug!(count = deportes.len(), "Loaded deportes");
        Ok(deportes)
    }

    #[instrument(skip(self, deportes), fields(path = %self.path.display(), count = deportes.len()))]
    async fn save(&self, deportes: Vec<Deporte>) -> StoreResult<()> {
        let bytes = serde_json::to_vec_pretty(&deportes).map_err(StoreError::Encode)?;
        self.write_atomically(&bytes).await?;

        tracing::debug!("Saved deportes");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    fn setup() -> (TempDir, JsonFileDeporteRepository) {
        let dir = TempDir::new().unwrap();
        let repo = JsonFileDeporteRepository::new(dir.path().join("deportes.json"));
        (dir, repo)
    }

    #[tokio::test]
    async fn test_load_missing_file_is_read_error() {
        let (_dir, repo) = setup();
        let err = repo.load().await.unwrap_err();
        assert!(matches!(err, StoreError::Read { .. }));
    }

    #[tokio::test]
    async fn test_load_malformed_file_is_decode_error() {
        let (_dir, repo) = setup();
        std::fs::write(repo.path(), "{ not a list").unwrap();

        let err = repo.load().await.unwrap_err();
        assert!(matches!(err, StoreError::Decode { .. }));
    }

    #[tokio::test]
    async fn test_save_then_load_preserves_order_and_values() {
        let (_dir, repo) = setup();
        let deportes = vec![
            Deporte::new("golf", 50),
            Deporte::new("tenis", "30.5"),
            Deporte::new("golf", json!(12.75)),
        ];

        repo.save(deportes.clone()).await.unwrap();
        assert_eq!(repo.load().await.unwrap(), deportes);
    }

    #[tokio::test]
    async fn test_save_of_load_is_byte_identical() {
        let (_dir, repo) = setup();
        repo.save(vec![Deporte::new("golf", 50), Deporte::new("futbol", 20)])
            .await
            .unwrap();
        let before = std::fs::read(repo.path()).unwrap();

        let loaded = repo.load().await.unwrap();
        repo.save(loaded).await.unwrap();

        assert_eq!(std::fs::read(repo.path()).unwrap(), before);
    }

    #[tokio::test]
    async fn test_save_writes_two_space_indented_json() {
        let (_dir, repo) = setup();
        repo.save(vec![Deporte::new("golf", 50)]).await.unwrap();

        let content = std::fs::read_to_string(repo.path()).unwrap();
        assert_eq!(
            content,
            "[\n  {\n    \"name\": \"golf\",\n    \"price\": 50\n  }\n]"
        );
    }

    #[tokio::test]
    async fn test_save_leaves_no_temp_file() {
        let (dir, repo) = setup();
        repo.save(vec![Deporte::new("golf", 50)]).await.unwrap();

        let names: Vec<_> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name())
            .collect();
        assert_eq!(names, vec![std::ffi::OsString::from("deportes.json")]);
    }

    #[tokio::test]
    async fn test_save_into_missing_directory_is_write_error() {
        let dir = TempDir::new().unwrap();
        let repo = JsonFileDeporteRepository::new(dir.path().join("nope").join("deportes.json"));

        let err = repo.save(vec![]).await.unwrap_err();
        assert!(matches!(err, StoreError::Write { .. }));
    }

    #[tokio::test]
    async fn test_load_accepts_legacy_spanish_keys() {
        let (_dir, repo) = setup();
        std::fs::write(
            repo.path(),
            r#"[{"nombre": "natacion", "precio": "45"}]"#,
        )
        .unwrap();

        let deportes = repo.load().await.unwrap();
        assert_eq!(deportes, vec![Deporte::new("natacion", "45")]);
    }

    #[tokio::test]
    async fn test_save_of_load_keeps_unknown_keys() {
        let (_dir, repo) = setup();
        let content = "[\n  {\n    \"name\": \"golf\",\n    \"price\": 50,\n    \"categoria\": \"campo\",\n    \"cupos\": [\n      1,\n      2\n    ]\n  }\n]";
        std::fs::write(repo.path(), content).unwrap();

        let loaded = repo.load().await.unwrap();
        repo.save(loaded).await.unwrap();

        assert_eq!(std::fs::read_to_string(repo.path()).unwrap(), content);
    }

    #[tokio::test]
    async fn test_load_record_without_price() {
        let (_dir, repo) = setup();
        std::fs::write(repo.path(), r#"[{"name": "golf"}]"#).unwrap();

        let deportes = repo.load().await.unwrap();
        assert_eq!(deportes, vec![Deporte::new("golf", serde_json::Value::Null)]);
    }

    #[tokio::test]
    async fn test_ensure_exists_creates_empty_collection() {
        let dir = TempDir::new().unwrap();
        let repo = JsonFileDeporteRepository::new(dir.path().join("db").join("deportes.json"));

        repo.ensure_exists().await.unwrap();

        assert_eq!(std::fs::read_to_string(repo.path()).unwrap(), "[]");
        assert!(repo.load().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_ensure_exists_keeps_existing_content() {
        let (_dir, repo) = setup();
        repo.save(vec![Deporte::new("golf", 50)]).await.unwrap();

        repo.ensure_exists().await.unwrap();

        assert_eq!(repo.load().await.unwrap(), vec![Deporte::new("golf", 50)]);
    }
}
