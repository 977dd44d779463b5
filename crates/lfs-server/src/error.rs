use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use lfs_protocol::messages;
use thiserror::Error;

/// Server-level failures: startup, configuration, and the rare internal
/// fault while rendering a response.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("protocol error: {0}")]
    Protocol(#[from] lfs_protocol::ProtocolError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type ServerResult<T> = Result<T, ServerError>;

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "failed to build response");
        StatusCode::INTERNAL_SERVER_ERROR.into_response()
    }
}

/// Per-request outcomes reported to the client as `{"message": ...}`.
///
/// `WrongPath` and `ObjectNotFound` share a status and differ only in text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum LfsError {
    #[error("{}", messages::WRONG_HOST)]
    WrongHost,

    #[error("{}", messages::WRONG_PATH)]
    WrongPath,

    #[error("{}", messages::OBJECT_NOT_FOUND)]
    ObjectNotFound,

    #[error("{}", messages::NOT_IMPLEMENTED)]
    NotImplemented,
}

impl LfsError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::WrongHost => StatusCode::BAD_REQUEST,
            Self::WrongPath | Self::ObjectNotFound => StatusCode::NOT_FOUND,
            Self::NotImplemented => StatusCode::NOT_IMPLEMENTED,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Self::WrongHost => messages::WRONG_HOST,
            Self::WrongPath => messages::WRONG_PATH,
            Self::ObjectNotFound => messages::OBJECT_NOT_FOUND,
            Self::NotImplemented => messages::NOT_IMPLEMENTED,
        }
    }
}

impl From<lfs_store::StoreError> for LfsError {
    fn from(_: lfs_store::StoreError) -> Self {
        Self::ObjectNotFound
    }
}
