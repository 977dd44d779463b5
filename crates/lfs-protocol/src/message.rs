use lfs_types::ObjectId;
use serde::{Deserialize, Serialize};

use crate::error::ProtocolResult;
use crate::links::ObjectLinks;

/// Error envelope shared by every non-2xx response.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorMessage {
    pub message: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Href {
    pub href: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Links {
    #[serde(rename = "self")]
    pub self_link: Href,
    pub download: Href,
}

/// Object descriptor returned by `/objects/{oid}`.
///
/// `size` is serialized as a JSON integer across the full `u64` range.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectMetadata {
    pub oid: ObjectId,
    pub size: u64,
    #[serde(rename = "_links")]
    pub links: Links,
}

impl ObjectMetadata {
    pub fn new(oid: ObjectId, size: u64, links: ObjectLinks) -> Self {
        Self {
            oid,
            size,
            links: Links {
                self_link: Href { href: links.self_href },
                download: Href { href: links.download_href },
            },
        }
    }
}

/// `{"message": message}`, pretty-printed.
pub fn render_error(message: &str) -> ProtocolResult<String> {
    let body = ErrorMessage {
        message: message.to_owned(),
    };
    Ok(serde_json::to_string_pretty(&body)?)
}

/// `{"oid", "size", "_links": {"self": {"href"}, "download": {"href"}}}`, pretty-printed.
pub fn render_metadata(
    oid: &ObjectId,
    size: u64,
    self_url: &str,
    download_url: &str,
) -> ProtocolResult<String> {
    let body = ObjectMetadata::new(
        oid.clone(),
        size,
        ObjectLinks {
            self_href: self_url.to_owned(),
            download_href: download_url.to_owned(),
        },
    );
    Ok(serde_json::to_string_pretty(&body)?)
}
