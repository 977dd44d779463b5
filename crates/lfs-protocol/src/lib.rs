//! Wire contract for the LFS object server.
//!
//! Key names, nesting, and message texts in this crate are what clients
//! parse. Changing any of them breaks interoperability.

pub mod endpoint;
pub mod error;
pub mod links;
pub mod message;

pub use endpoint::{endpoints, media_types, messages, DEFAULT_HTTP_PORT};
pub use error::{ProtocolError, ProtocolResult};
pub use links::ObjectLinks;
pub use message::{render_error, render_metadata, ErrorMessage, Href, Links, ObjectMetadata};
