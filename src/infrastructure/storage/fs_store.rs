use crate::domain::storage::{Storage, StorageKeys};
use crate::domain::WidgetPayload;
use crate::error::{Result, SalesError};
use chrono::NaiveDate;
use std::fs;
use std::io;
use std::path::PathBuf;
use tracing::{debug, info};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Keeps the cache as two plain files in one directory: a `YYYY-MM-DD` date
/// marker and the rendered payload as JSON.
#[derive(Clone)]
pub struct FileSystemStore {
    cache_dir: PathBuf,
}

impl FileSystemStore {
    pub fn new(cache_dir: impl Into<PathBuf>) -> Self {
        Self {
            cache_dir: cache_dir.into(),
        }
    }

    fn get_path_for_key(&self, key: &str) -> PathBuf {
        self.cache_dir.join(key)
    }

    fn ensure_dir(&self) -> io::Result<()> {
        if !self.cache_dir.exists() {
            fs::create_dir_all(&self.cache_dir)?;
        }
        Ok(())
    }

    /// Writes to a sibling temp file and renames it over the target, so a
    /// reader never sees a half-written artifact.
    fn replace_file(&self, key: &str, contents: &str) -> io::Result<()> {
        let path = self.get_path_for_key(key);
        let tmp = self.get_path_for_key(&format!("{}.tmp", key));
        fs::write(&tmp, contents)?;
        fs::rename(&tmp, &path)
    }

    fn write_file(&self, key: &str, contents: &str) -> Result<()> {
        match self.replace_file(key, contents) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                info!("Creating cache directory {:?}", self.cache_dir);
                self.ensure_dir().map_err(SalesError::CacheWrite)?;
                self.replace_file(key, contents)
                    .map_err(SalesError::CacheWrite)
            }
            Err(e) => Err(SalesError::CacheWrite(e)),
        }
    }

    fn read_file(&self, key: &str) -> Result<Option<String>> {
        let path = self.get_path_for_key(key);
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("No cache artifact at {:?}", path);
                Ok(None)
            }
            Err(e) => Err(SalesError::CacheCorrupt(format!("{:?}: {}", path, e))),
        }
    }
}

impl Storage for FileSystemStore {
    fn load_date_marker(&self) -> Result<Option<NaiveDate>> {
        let Some(content) = self.read_file(StorageKeys::DATE_MARKER)? else {
            return Ok(None);
        };

        NaiveDate::parse_from_str(content.trim(), DATE_FORMAT)
            .map(Some)
            .map_err(|e| SalesError::CacheCorrupt(format!("date marker: {}", e)))
    }

    fn load_payload(&self) -> Result<Option<WidgetPayload>> {
        let Some(content) = self.read_file(StorageKeys::PAYLOAD)? else {
            return Ok(None);
        };

        serde_json::from_str(&content)
            .map(Some)
            .map_err(|e| SalesError::CacheCorrupt(format!("payload: {}", e)))
    }

    fn save(&self, payload: &WidgetPayload, date: NaiveDate) -> Result<()> {
        // Payload goes first: if the marker write never happens the cache
        // reads as stale instead of fresh with the wrong contents.
        let content = serde_json::to_string_pretty(payload)?;
        self.write_file(StorageKeys::PAYLOAD, &content)?;
        self.write_file(
            StorageKeys::DATE_MARKER,
            &date.format(DATE_FORMAT).to_string(),
        )
    }
}
