//! Advisory exclusive lock scoped to the project's state directory.
//!
//! Only cooperating traceseq processes honour it. It serializes the index
//! read-modify-write so concurrent `annotate` runs do not lose entries.

use std::fs::{self, OpenOptions};

use fd_lock::RwLock;
use traceseq_core::errors::StorageError;

use crate::layout::ProjectLayout;

/// Run `f` while holding the project lock. When the layout has locking
/// disabled, `f` runs unguarded.
pub fn with_project_lock<T>(
    layout: &ProjectLayout,
    f: impl FnOnce() -> Result<T, StorageError>,
) -> Result<T, StorageError> {
    if !layout.lock_index() {
        return f();
    }

    let path = layout.lock_path();
    fs::create_dir_all(layout.state_dir()).map_err(|source| StorageError::Io {
        path: layout.state_dir().to_path_buf(),
        source,
    })?;
    let file = OpenOptions::new()
        .create(true)
        .truncate(false)
        .write(true)
        .open(path)
        .map_err(|source| StorageError::LockFailed {
            path: path.to_path_buf(),
            source,
        })?;

    let mut lock = RwLock::new(file);
    let _guard = lock.write().map_err(|source| StorageError::LockFailed {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), "acquired project lock");

    f()
}

#[cfg(test)]
mod tests {
    use super::*;
    use traceseq_core::config::StorageConfig;

    #[test]
    fn lock_file_is_created_and_value_returned() {
        let dir = tempfile::tempdir().unwrap();
        let layout = ProjectLayout::with_defaults(dir.path());
        let v = with_project_lock(&layout, || Ok(7)).unwrap();
        assert_eq!(v, 7);
        assert!(layout.lock_path().exists());
    }

    #[test]
    fn disabled_lock_touches_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let config = StorageConfig {
            lock_index: false,
            ..Default::default()
        };
        let layout = ProjectLayout::new(dir.path(), &config);
        with_project_lock(&layout, || Ok(())).unwrap();
        assert!(!layout.state_dir().exists());
    }

    #[test]
    fn inner_error_propagates() {
        let dir = tempfile::tempdir().unwrap();
        let layout = ProjectLayout::with_defaults(dir.path());
        let err = with_project_lock::<()>(&layout, || {
            Err(StorageError::RecordNotFound {
                trace_id: "x".into(),
            })
        })
        .unwrap_err();
        assert!(err.is_not_found());
    }
}
