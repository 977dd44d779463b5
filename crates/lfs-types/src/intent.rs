use std::fmt;

use serde::{Deserialize, Serialize};

/// What a client asked for when it named an object.
///
/// Derived purely from the URL prefix the identifier appeared under.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Intent {
    /// JSON descriptor with size and links (`/objects/{oid}`).
    Metadata,
    /// The object bytes themselves (`/data/objects/{oid}`).
    RawObject,
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Metadata => write!(f, "metadata"),
            Self::RawObject => write!(f, "raw-object"),
        }
    }
}
