use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProtocolError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("invalid link: {0}")]
    InvalidLink(#[from] hyper::http::Error),
}

pub type ProtocolResult<T> = Result<T, ProtocolError>;
