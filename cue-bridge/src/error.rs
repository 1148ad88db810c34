use thiserror::Error;

/// Errors surfaced by host-side adapter implementations.
///
/// Fetch and decode failures are distinct variants on purpose: the engine
/// reports them to callers as different error kinds.
#[derive(Error, Debug)]
pub enum BridgeError {
    #[error("fetch failed for {url}: {reason}")]
    Fetch { url: String, reason: String },

    #[error("decode failed for {url}: {reason}")]
    Decode { url: String, reason: String },

    #[error("media element failure: {0}")]
    Element(String),

    #[error("audio graph failure: {0}")]
    Graph(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, BridgeError>;
