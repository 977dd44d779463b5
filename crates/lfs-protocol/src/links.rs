use hyper::http::uri::Authority;
use hyper::Uri;
use lfs_types::ObjectId;

use crate::endpoint::{endpoints, DEFAULT_HTTP_PORT};
use crate::error::ProtocolResult;

/// Absolute self and download URLs for an object.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ObjectLinks {
    pub self_href: String,
    pub download_href: String,
}

impl ObjectLinks {
    /// Rewrite the request authority into plain-HTTP links for `oid`.
    ///
    /// The authority's own port wins; without one, `listen_port` is used.
    /// Port 80 is never written out.
    pub fn for_request(
        authority: &Authority,
        listen_port: u16,
        oid: &ObjectId,
    ) -> ProtocolResult<Self> {
        let port = authority.port_u16().unwrap_or(listen_port);
        let authority = if port == DEFAULT_HTTP_PORT {
            authority.host().to_owned()
        } else {
            format!("{}:{}", authority.host(), port)
        };
        Ok(Self {
            self_href: object_url(&authority, endpoints::OBJECTS, oid)?,
            download_href: object_url(&authority, endpoints::DATA_OBJECTS, oid)?,
        })
    }
}

fn object_url(authority: &str, prefix: &str, oid: &ObjectId) -> ProtocolResult<String> {
    let uri = Uri::builder()
        .scheme("http")
        .authority(authority)
        .path_and_query(format!("{prefix}/{oid}"))
        .build()?;
    Ok(uri.to_string())
}
