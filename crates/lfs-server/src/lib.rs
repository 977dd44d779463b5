//! Read-only HTTP server for LFS objects.
//!
//! Serves JSON descriptors at `/objects/{oid}` and raw bytes at
//! `/data/objects/{oid}` from a sharded object directory. The write path
//! (batch API, uploads) answers `501 Not Implemented`.

pub mod config;
pub mod error;
pub mod handler;
pub mod response;
pub mod router;
pub mod server;
pub mod state;

pub use config::ServerConfig;
pub use error::{LfsError, ServerError, ServerResult};
pub use response::{LfsResponse, ResponseBody};
pub use router::{build_router, route};
pub use server::LfsServer;
pub use state::ServerContext;
