use std::path::{Path, PathBuf};

use lfs_types::ObjectId;
use tokio::fs::File;

use crate::error::{StoreError, StoreResult};
use crate::layout::StoreLayout;

/// Size of an object as observed by a stat.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ObjectStat {
    pub size: u64,
}

/// Read-only object store backed by a local directory.
#[derive(Clone, Debug)]
pub struct FsObjectStore {
    layout: StoreLayout,
}

impl FsObjectStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            layout: StoreLayout::new(root),
        }
    }

    pub fn root(&self) -> &Path {
        self.layout.root()
    }

    pub fn layout(&self) -> &StoreLayout {
        &self.layout
    }

    /// Stat the object file.
    pub async fn stat(&self, oid: &ObjectId) -> StoreResult<ObjectStat> {
        let path = self.layout.locate(oid);
        match tokio::fs::metadata(&path).await {
            Ok(meta) if meta.is_file() => Ok(ObjectStat { size: meta.len() }),
            Ok(_) => Err(StoreError::NotFound {
                oid: oid.clone(),
                path,
                source: None,
            }),
            Err(e) => Err(StoreError::not_found(oid, path, e)),
        }
    }

    /// Open the object file for streaming, returning it with its size.
    ///
    /// The handle is closed when the returned `File` is dropped.
    pub async fn open(&self, oid: &ObjectId) -> StoreResult<(File, ObjectStat)> {
        let path = self.layout.locate(oid);
        let file = File::open(&path)
            .await
            .map_err(|e| StoreError::not_found(oid, path.clone(), e))?;
        let meta = file
            .metadata()
            .await
            .map_err(|e| StoreError::not_found(oid, path.clone(), e))?;
        if !meta.is_file() {
            return Err(StoreError::NotFound {
                oid: oid.clone(),
                path,
                source: None,
            });
        }
        tracing::trace!(oid = %oid.short(), size = meta.len(), "opened object");
        Ok((file, ObjectStat { size: meta.len() }))
    }
}
