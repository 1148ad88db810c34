//! # Playback Backends
//!
//! Two ways to turn a resolved source into sound:
//!
//! ```text
//!  ResolvedSource ──> GraphBackend   (decoded samples into an audio graph,
//!  ResolvedSource ──> ElementBackend  known duration, timer completion)
//!                                    (host media elements, streaming,
//!                                     native ended signal, native pause)
//! ```
//!
//! Both implement [`PlaybackBackend`]. The graph path is preferred when a
//! graph is available; the element path is the fallback and the only path
//! for live element items.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use cue_bridge::{DecodedPayload, GraphSourceId, MediaElement};
use futures::future::BoxFuture;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::types::AudioSourceRef;

mod element;
mod graph;

pub use element::ElementBackend;
pub use graph::GraphBackend;

/// Which backend family a session runs on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BackendKind {
    /// Decoded-sample playback through an audio graph.
    Graph,
    /// Host media element playback.
    Element,
}

/// A source in a form a backend can start.
#[derive(Clone)]
pub enum ResolvedSource {
    /// Decoded samples, ready for the graph backend.
    Decoded(Arc<DecodedPayload>),
    /// A bare URL, for the element backend to stream.
    Url(AudioSourceRef),
    /// A caller-supplied media element, played as-is.
    LiveElement(Arc<dyn MediaElement>),
}

/// Backend-specific handle to an in-flight playback.
#[derive(Clone)]
pub enum PlaybackHandle {
    Graph {
        node: GraphSourceId,
        payload: Arc<DecodedPayload>,
    },
    Element {
        element: Arc<dyn MediaElement>,
    },
}

/// Future that resolves when the current playback reaches its natural end.
///
/// Completion signals are advisory: the engine stamps each with an epoch
/// and discards signals that fire after the item they belonged to was
/// paused, halted, or replaced.
pub type FinishedSignal = BoxFuture<'static, ()>;

/// A successfully started playback.
pub struct StartedPlayback {
    pub handle: PlaybackHandle,
    /// The effective start offset after any wrapping.
    pub offset: Duration,
    /// Known duration, when the backend can know it up front.
    pub duration: Option<Duration>,
    pub finished: FinishedSignal,
}

/// Uniform playback surface over the graph and element paths.
#[async_trait]
pub trait PlaybackBackend: Send + Sync {
    fn kind(&self) -> BackendKind;

    /// Start the source from `offset`. Offsets past the end of a
    /// known-duration source wrap modulo that duration.
    async fn start(&self, source: ResolvedSource, offset: Duration) -> Result<StartedPlayback>;

    /// Suspend playback. For the graph path this stops the source node;
    /// position is the engine's to remember.
    async fn pause(&self, handle: &PlaybackHandle) -> Result<()>;

    /// Resume a paused element in place, returning a fresh completion
    /// signal. The graph path does not resume in place; the engine
    /// restarts it via [`start`](PlaybackBackend::start).
    async fn resume(&self, handle: &PlaybackHandle) -> Result<FinishedSignal>;

    /// Tear playback down entirely.
    async fn stop(&self, handle: &PlaybackHandle) -> Result<()>;
}

/// Wrap an offset into `[0, duration)`. Zero-duration sources always
/// start at zero.
pub(crate) fn wrap_offset(offset: Duration, duration: Duration) -> Duration {
    if duration.is_zero() {
        return Duration::ZERO;
    }
    if offset < duration {
        return offset;
    }
    let nanos = offset.as_nanos() % duration.as_nanos();
    // Remainder of a Duration modulus always fits back into a Duration.
    Duration::from_nanos(nanos as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_within_duration_is_unchanged() {
        let wrapped = wrap_offset(Duration::from_secs(3), Duration::from_secs(10));
        assert_eq!(wrapped, Duration::from_secs(3));
    }

    #[test]
    fn offset_past_duration_wraps_modulo() {
        let wrapped = wrap_offset(Duration::from_secs(25), Duration::from_secs(10));
        assert_eq!(wrapped, Duration::from_secs(5));

        let exact = wrap_offset(Duration::from_secs(20), Duration::from_secs(10));
        assert_eq!(exact, Duration::ZERO);
    }

    #[test]
    fn zero_duration_wraps_to_zero() {
        let wrapped = wrap_offset(Duration::from_secs(7), Duration::ZERO);
        assert_eq!(wrapped, Duration::ZERO);
    }
}
