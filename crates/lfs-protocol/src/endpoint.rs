/// HTTP endpoint prefixes. The identifier is the final path segment.
pub mod endpoints {
    pub const OBJECTS: &str = "/objects";
    pub const DATA_OBJECTS: &str = "/data/objects";
}

pub mod media_types {
    /// Used for every JSON body, errors included.
    pub const LFS_JSON: &str = "application/vnd.git-lfs+json";
    pub const OCTET_STREAM: &str = "application/octet-stream";
}

/// Error message texts. Tests and clients match on these exactly.
pub mod messages {
    pub const WRONG_HOST: &str = "Wrong host";
    pub const WRONG_PATH: &str = "Wrong path";
    pub const OBJECT_NOT_FOUND: &str = "Object not found";
    pub const NOT_IMPLEMENTED: &str = "Not implemented";
}

/// Port left implicit in synthesized links.
pub const DEFAULT_HTTP_PORT: u16 = 80;
