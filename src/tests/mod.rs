use std::sync::Arc;

use crate::storage::{BackendLocal, StorageManager};

mod favorites;
mod history;
mod roundtrip;
mod storage;

/// Creates an isolated storage backend in a unique temp directory.
/// Each test gets its own directory so parallel tests never collide,
/// and no real data is touched.
pub fn temp_storage() -> (Arc<dyn StorageManager>, tempfile::TempDir) {
    let tmp = tempfile::tempdir().expect("failed to create temp dir");
    let backend = BackendLocal::new(tmp.path().to_str().unwrap()).expect("failed to create storage");
    (Arc::new(backend), tmp)
}
