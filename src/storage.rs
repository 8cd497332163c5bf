use std::path::PathBuf;

use crate::eid::Eid;

/// Key-value persistence boundary for saved records. One value per
/// fixed string key; the stores that own favorites and history receive
/// an implementation by injection and never reach for a global.
pub trait StorageManager: Send + Sync {
    fn set(&self, key: &str, data: &[u8]) -> std::io::Result<()>;
    fn get(&self, key: &str) -> std::io::Result<Vec<u8>>;
    fn exists(&self, key: &str) -> bool;
    fn delete(&self, key: &str) -> std::io::Result<()>;
    fn list(&self) -> Vec<String>;
}

/// Local-filesystem backend: each key is one file under `base_dir`.
/// Writes go through a uniquely-named temp file and a rename so a
/// crashed write never leaves a half-written value behind.
#[derive(Clone)]
pub struct BackendLocal {
    pub base_dir: PathBuf,
}

impl BackendLocal {
    pub fn new(storage_dir: &str) -> std::io::Result<Self> {
        let path = PathBuf::from(storage_dir);
        std::fs::create_dir_all(&path)?;
        Ok(BackendLocal { base_dir: path })
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.base_dir.join(key)
    }
}

impl StorageManager for BackendLocal {
    fn exists(&self, key: &str) -> bool {
        std::fs::metadata(self.key_path(key)).is_ok()
    }

    fn get(&self, key: &str) -> std::io::Result<Vec<u8>> {
        std::fs::read(self.key_path(key))
    }

    fn set(&self, key: &str, data: &[u8]) -> std::io::Result<()> {
        let path = self.key_path(key);
        let temp_path = self.base_dir.join(format!("{}-{key}", Eid::new()));

        std::fs::write(&temp_path, data)?;
        std::fs::rename(&temp_path, &path)
    }

    fn delete(&self, key: &str) -> std::io::Result<()> {
        std::fs::remove_file(self.key_path(key))
    }

    fn list(&self) -> Vec<String> {
        std::fs::read_dir(&self.base_dir)
            .map(|entries| {
                entries
                    .filter_map(|entry| entry.ok())
                    .filter_map(|entry| {
                        let path = entry.path();
                        if path.is_file() {
                            path.file_name()
                                .and_then(|name| name.to_str())
                                .map(|s| s.to_string())
                        } else {
                            None
                        }
                    })
                    .collect()
            })
            .unwrap_or_default()
    }
}
