//! The decoded-buffer playback graph.

use crate::decode::DecodedPayload;
use crate::error::Result;
use std::time::Duration;

/// Identifier of a live source node inside the host's audio graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GraphSourceId(pub u64);

/// Low-latency playback of decoded buffers through an audio processing graph.
///
/// The calls are synchronous because graph APIs schedule sample-accurately on
/// their own clock and return immediately. The graph has no end-of-playback
/// event; the engine times out the node itself from the payload duration.
///
/// Implementations own routing and gain; the engine only starts and stops
/// source nodes.
pub trait AudioGraph: Send + Sync {
    /// Begin playing `payload` at `offset` into the buffer and return the
    /// node handle. `offset` has already been wrapped modulo the payload
    /// duration by the caller.
    fn start_source(&self, payload: &DecodedPayload, offset: Duration) -> Result<GraphSourceId>;

    /// Halt and disconnect a previously started node. Stopping an already
    /// finished node must be a no-op.
    fn stop_source(&self, source: GraphSourceId);
}
