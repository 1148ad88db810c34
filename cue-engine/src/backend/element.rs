//! Element backend: playback through host media elements.
//!
//! Elements stream their own data, pause and resume natively, and report
//! their own natural end. Durations are unknown up front, so offsets are
//! ignored and completion comes from the element's ended signal.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use cue_bridge::{MediaElement, MediaHost};
use tracing::trace;

use crate::error::{EngineError, Result};

use super::{
    BackendKind, FinishedSignal, PlaybackBackend, PlaybackHandle, ResolvedSource, StartedPlayback,
};

pub struct ElementBackend {
    host: Option<Arc<dyn MediaHost>>,
}

impl ElementBackend {
    pub fn new(host: Option<Arc<dyn MediaHost>>) -> Self {
        Self { host }
    }

    pub fn has_host(&self) -> bool {
        self.host.is_some()
    }

    fn host(&self) -> Result<&Arc<dyn MediaHost>> {
        self.host.as_ref().ok_or(EngineError::BackendUnavailable)
    }

    fn ended_signal(element: &Arc<dyn MediaElement>) -> FinishedSignal {
        let element = Arc::clone(element);
        Box::pin(async move { element.wait_ended().await })
    }
}

#[async_trait]
impl PlaybackBackend for ElementBackend {
    fn kind(&self) -> BackendKind {
        BackendKind::Element
    }

    async fn start(&self, source: ResolvedSource, _offset: Duration) -> Result<StartedPlayback> {
        let element = match source {
            ResolvedSource::Url(src) => self.host()?.create(src.as_str()),
            ResolvedSource::LiveElement(element) => element,
            ResolvedSource::Decoded(_) => {
                return Err(EngineError::Internal(
                    "element backend cannot play decoded samples".into(),
                ))
            }
        };

        element.play().await?;
        trace!(url = %element.source_url(), "media element playing");

        let finished = Self::ended_signal(&element);
        Ok(StartedPlayback {
            handle: PlaybackHandle::Element { element },
            offset: Duration::ZERO,
            duration: None,
            finished,
        })
    }

    async fn pause(&self, handle: &PlaybackHandle) -> Result<()> {
        match handle {
            PlaybackHandle::Element { element } => {
                element.pause().await?;
                Ok(())
            }
            PlaybackHandle::Graph { .. } => Err(EngineError::Internal(
                "graph handle given to the element backend".into(),
            )),
        }
    }

    async fn resume(&self, handle: &PlaybackHandle) -> Result<FinishedSignal> {
        match handle {
            PlaybackHandle::Element { element } => {
                element.play().await?;
                Ok(Self::ended_signal(element))
            }
            PlaybackHandle::Graph { .. } => Err(EngineError::Internal(
                "graph handle given to the element backend".into(),
            )),
        }
    }

    async fn stop(&self, handle: &PlaybackHandle) -> Result<()> {
        match handle {
            PlaybackHandle::Element { element } => {
                element.stop().await?;
                Ok(())
            }
            PlaybackHandle::Graph { .. } => Err(EngineError::Internal(
                "graph handle given to the element backend".into(),
            )),
        }
    }
}

impl std::fmt::Debug for ElementBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ElementBackend")
            .field("has_host", &self.has_host())
            .finish()
    }
}
