//! Engine error types.

use cue_bridge::BridgeError;
use thiserror::Error;

/// Errors surfaced by playback operations.
#[derive(Error, Debug)]
pub enum EngineError {
    /// Caller requested an out-of-range playlist position. This is a
    /// programming error, not a runtime condition to recover from.
    #[error("invalid playlist index: {0}")]
    InvalidIndex(usize),

    /// Network fetch of a source failed.
    #[error("failed to load {url}: {reason}")]
    Load { url: String, reason: String },

    /// A fetched source could not be decoded.
    #[error("failed to decode {url}: {reason}")]
    Decode { url: String, reason: String },

    /// Neither playback backend is usable.
    #[error("no playback backend available")]
    BackendUnavailable,

    /// The media element host reported a failure.
    #[error("media element error: {0}")]
    Element(String),

    /// The audio graph host reported a failure.
    #[error("audio graph error: {0}")]
    Graph(String),

    /// Should not occur in normal operation.
    #[error("internal error: {0}")]
    Internal(String),
}

impl EngineError {
    /// Returns `true` for per-item fetch/decode failures. These abandon the
    /// item but leave the engine usable.
    pub fn is_load_failure(&self) -> bool {
        matches!(self, EngineError::Load { .. } | EngineError::Decode { .. })
    }

    /// Returns `true` for caller bugs rather than runtime conditions.
    pub fn is_programming_error(&self) -> bool {
        matches!(self, EngineError::InvalidIndex(_))
    }
}

impl From<BridgeError> for EngineError {
    fn from(err: BridgeError) -> Self {
        match err {
            BridgeError::Fetch { url, reason } => EngineError::Load { url, reason },
            BridgeError::Decode { url, reason } => EngineError::Decode { url, reason },
            BridgeError::Element(msg) => EngineError::Element(msg),
            BridgeError::Graph(msg) => EngineError::Graph(msg),
            BridgeError::Io(e) => EngineError::Internal(e.to_string()),
        }
    }
}

/// Result type for engine operations.
pub type Result<T> = std::result::Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bridge_errors_map_onto_engine_kinds() {
        let load: EngineError = BridgeError::Fetch {
            url: "u".into(),
            reason: "r".into(),
        }
        .into();
        assert!(load.is_load_failure());

        let decode: EngineError = BridgeError::Decode {
            url: "u".into(),
            reason: "r".into(),
        }
        .into();
        assert!(decode.is_load_failure());
        assert!(!decode.is_programming_error());

        assert!(EngineError::InvalidIndex(7).is_programming_error());
    }
}
