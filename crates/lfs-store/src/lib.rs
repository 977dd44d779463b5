//! Read-only access to a content-addressed LFS object directory.
//!
//! Objects live under `<root>/objects/<oid[0:2]>/<oid[2:4]>/<oid>`. The
//! file contents are the raw object bytes and the file size is the object
//! size. Some other process owns writes; this crate only looks.
//!
//! # Design Rules
//!
//! 1. Path computation is pure and never touches the filesystem.
//! 2. Existence reflects the directory at the instant of the check. No caching.
//! 3. A concurrent writer may add or remove objects between a stat and an
//!    open. Either step failing is reported as [`StoreError::NotFound`].

pub mod error;
pub mod fs;
pub mod layout;

pub use error::{StoreError, StoreResult};
pub use fs::{FsObjectStore, ObjectStat};
pub use layout::{StoreLayout, OBJECTS_DIR};
