use crate::{KeyValueStore, Result as StoreResult, StoreError};

use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};

const DATE_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Durable store: the whole map lives in one JSON file.
///
/// Every mutation rewrites the file through a temp file and an atomic rename,
/// so a crash mid-write leaves the previous contents intact.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStore {
    /// Opens (or creates) `dir/file_name`.
    ///
    /// A corrupted file is backed up and the store starts empty. Fails only
    /// when the directory cannot be created, the file cannot be read, or the
    /// initial write-back fails.
    pub fn open(dir: &Path, file_name: &str) -> StoreResult<Self> {
        fs::create_dir_all(dir).map_err(|e| StoreError::directory(dir.to_path_buf(), e))?;

        let path = dir.join(file_name);
        let entries = Self::load(&path)?;

        let store = Self { path, entries };
        // Fails early on read-only locations instead of on the first write.
        store.persist()?;

        info!(
            "Opened storage at {} ({} keys)",
            store.path.display(),
            store.entries.len()
        );
        Ok(store)
    }

    fn load(path: &Path) -> StoreResult<BTreeMap<String, String>> {
        if !path.exists() {
            info!("No storage file at {path:?} (first launch)");
            return Ok(BTreeMap::new());
        }

        let contents =
            fs::read_to_string(path).map_err(|e| StoreError::read(path.to_path_buf(), e))?;

        match serde_json::from_str::<BTreeMap<String, String>>(&contents) {
            Ok(entries) => Ok(entries),
            Err(e) => {
                let err = StoreError::corrupted(path.to_path_buf(), e.to_string());
                warn!("{err}");
                if let Err(backup_err) = Self::backup_corrupted(path) {
                    warn!("{backup_err}");
                }
                Ok(BTreeMap::new())
            }
        }
    }

    /// Renames `file` to `file.corrupted.{timestamp}`.
    fn backup_corrupted(path: &Path) -> StoreResult<PathBuf> {
        let timestamp = chrono::Utc::now().format(DATE_FORMAT);
        let mut backup = path.as_os_str().to_owned();
        backup.push(format!(".corrupted.{timestamp}"));
        let backup_path = PathBuf::from(backup);

        fs::rename(path, &backup_path).map_err(|e| StoreError::backup(path.to_path_buf(), e))?;

        warn!("Backed up corrupted storage to {backup_path:?}");
        Ok(backup_path)
    }

    /// Writes the map using the temp file, fsync, rename pattern.
    fn persist(&self) -> StoreResult<()> {
        let mut temp = self.path.as_os_str().to_owned();
        temp.push(format!(".tmp.{}", std::process::id()));
        let temp_path = PathBuf::from(temp);

        let json = serde_json::to_string_pretty(&self.entries)?;

        {
            let mut file = fs::File::create(&temp_path)
                .map_err(|e| StoreError::write(temp_path.clone(), e))?;

            file.write_all(json.as_bytes())
                .map_err(|e| StoreError::write(temp_path.clone(), e))?;

            file.sync_all()
                .map_err(|e| StoreError::write(temp_path.clone(), e))?;
        }

        fs::rename(&temp_path, &self.path).map_err(|e| {
            let _ = fs::remove_file(&temp_path);
            StoreError::write(self.path.clone(), e)
        })?;

        Ok(())
    }

    fn persist_or_warn(&self, key: &str) {
        match self.persist() {
            Ok(()) => debug!("Persisted {key}"),
            Err(e) => warn!("Keeping {key} in memory only: {e}"),
        }
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
        self.persist_or_warn(key);
    }

    fn remove(&mut self, key: &str) {
        if self.entries.remove(key).is_some() {
            self.persist_or_warn(key);
        }
    }

    fn is_persistent(&self) -> bool {
        true
    }
}
