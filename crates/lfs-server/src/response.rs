use axum::body::Body;
use axum::http::header::{CONTENT_LENGTH, CONTENT_TYPE};
use axum::http::{HeaderValue, Method, StatusCode};
use axum::response::{IntoResponse, Response};
use lfs_protocol::{media_types, render_error};
use tokio::fs::File;
use tokio_util::io::ReaderStream;

use crate::error::{LfsError, ServerResult};

/// What a response carries, independent of request method.
#[derive(Debug)]
pub enum ResponseBody {
    Empty,
    Text(String),
    /// Streamed lazily; the file handle closes when the stream is dropped.
    Stream(File),
}

/// Status, headers, and body of one protocol response, before the request
/// method has been applied.
#[derive(Debug)]
pub struct LfsResponse {
    pub status: StatusCode,
    pub content_type: &'static str,
    pub content_length: u64,
    pub body: ResponseBody,
}

impl LfsResponse {
    /// A JSON body under the protocol media type.
    pub fn json(status: StatusCode, text: String) -> Self {
        Self {
            status,
            content_type: media_types::LFS_JSON,
            content_length: text.len() as u64,
            body: ResponseBody::Text(text),
        }
    }

    /// The `{"message": ...}` envelope for `err`.
    pub fn error(err: LfsError) -> ServerResult<Self> {
        Ok(Self::json(err.status(), render_error(err.message())?))
    }

    /// Raw object bytes of a known size.
    pub fn object(file: File, size: u64) -> Self {
        Self {
            status: StatusCode::OK,
            content_type: media_types::OCTET_STREAM,
            content_length: size,
            body: ResponseBody::Stream(file),
        }
    }

    /// Apply the request method. HEAD keeps status and headers but always
    /// sends no body, dropping any open file without reading it.
    pub fn into_http(self, method: &Method) -> Response {
        let body = if method == Method::HEAD {
            ResponseBody::Empty
        } else {
            self.body
        };
        let body = match body {
            ResponseBody::Empty => Body::empty(),
            ResponseBody::Text(text) => Body::from(text),
            ResponseBody::Stream(file) => Body::from_stream(ReaderStream::new(file)),
        };
        let mut response = (self.status, body).into_response();
        let headers = response.headers_mut();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(self.content_type));
        headers.insert(CONTENT_LENGTH, HeaderValue::from(self.content_length));
        response
    }
}
