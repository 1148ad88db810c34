//! Graph backend: decoded samples scheduled onto an audio graph.
//!
//! Graph source nodes are one-shot. Completion is a timer armed for the
//! remaining duration, not a signal from the graph; pause stops the node
//! and resume means scheduling a brand-new node at a remembered offset,
//! which the engine does through [`start`](super::PlaybackBackend::start).

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use cue_bridge::AudioGraph;
use tracing::trace;

use crate::error::{EngineError, Result};

use super::{
    wrap_offset, BackendKind, FinishedSignal, PlaybackBackend, PlaybackHandle, ResolvedSource,
    StartedPlayback,
};

pub struct GraphBackend {
    graph: Arc<dyn AudioGraph>,
}

impl GraphBackend {
    pub fn new(graph: Arc<dyn AudioGraph>) -> Self {
        Self { graph }
    }
}

#[async_trait]
impl PlaybackBackend for GraphBackend {
    fn kind(&self) -> BackendKind {
        BackendKind::Graph
    }

    async fn start(&self, source: ResolvedSource, offset: Duration) -> Result<StartedPlayback> {
        let payload = match source {
            ResolvedSource::Decoded(payload) => payload,
            ResolvedSource::Url(src) => {
                return Err(EngineError::Internal(format!(
                    "graph backend handed an unresolved url: {src}"
                )))
            }
            ResolvedSource::LiveElement(_) => {
                return Err(EngineError::Internal(
                    "graph backend cannot play a media element".into(),
                ))
            }
        };

        let duration = payload.duration;
        let offset = wrap_offset(offset, duration);
        let node = self.graph.start_source(&payload, offset)?;
        trace!(?node, ?offset, ?duration, "graph source started");

        let remaining = duration.saturating_sub(offset);
        let finished: FinishedSignal = Box::pin(tokio::time::sleep(remaining));

        Ok(StartedPlayback {
            handle: PlaybackHandle::Graph { node, payload },
            offset,
            duration: Some(duration),
            finished,
        })
    }

    async fn pause(&self, handle: &PlaybackHandle) -> Result<()> {
        match handle {
            PlaybackHandle::Graph { node, .. } => {
                self.graph.stop_source(*node);
                Ok(())
            }
            PlaybackHandle::Element { .. } => Err(EngineError::Internal(
                "element handle given to the graph backend".into(),
            )),
        }
    }

    async fn resume(&self, _handle: &PlaybackHandle) -> Result<FinishedSignal> {
        // One-shot nodes cannot restart; the engine re-enters start()
        // with the remembered payload and offset instead.
        Err(EngineError::Internal(
            "graph playback resumes by restarting the source".into(),
        ))
    }

    async fn stop(&self, handle: &PlaybackHandle) -> Result<()> {
        match handle {
            PlaybackHandle::Graph { node, .. } => {
                self.graph.stop_source(*node);
                Ok(())
            }
            PlaybackHandle::Element { .. } => Err(EngineError::Internal(
                "element handle given to the graph backend".into(),
            )),
        }
    }
}

impl std::fmt::Debug for GraphBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GraphBackend").finish()
    }
}
