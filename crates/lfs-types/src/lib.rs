//! Foundation types for the LFS object server.
//!
//! Every other crate in the workspace depends on `lfs-types`.
//!
//! # Key Types
//!
//! - [`ObjectId`] — Validated content hash (64 lowercase hex characters)
//! - [`Intent`] — Whether a request wants object metadata or raw bytes

pub mod error;
pub mod intent;
pub mod object;

pub use error::TypeError;
pub use intent::Intent;
pub use object::{ObjectId, OID_LEN};
