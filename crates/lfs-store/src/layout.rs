use std::path::{Path, PathBuf};

use lfs_types::ObjectId;

/// Directory beneath the store root that holds all objects.
pub const OBJECTS_DIR: &str = "objects";

/// Maps object identifiers to their sharded location under a store root.
///
/// The first two pairs of hex characters pick the fan-out directories; the
/// full identifier is always the final component, so two distinct
/// identifiers never share a path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StoreLayout {
    root: PathBuf,
}

impl StoreLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// `root/objects/<oid[0:2]>/<oid[2:4]>/<oid>`.
    pub fn locate(&self, oid: &ObjectId) -> PathBuf {
        let oid = oid.as_str();
        self.root
            .join(OBJECTS_DIR)
            .join(&oid[..2])
            .join(&oid[2..4])
            .join(oid)
    }
}
