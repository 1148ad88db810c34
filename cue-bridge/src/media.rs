//! The tag-based media element fallback.

use crate::error::Result;
use async_trait::async_trait;
use std::sync::Arc;

/// A single native media element bound to one source URL.
///
/// Position tracking is entirely element-owned: `pause` freezes the playhead
/// and the next `play` continues from it, so the engine never computes resume
/// offsets for this backend.
#[async_trait]
pub trait MediaElement: Send + Sync {
    /// The source URL this element was created for.
    fn source_url(&self) -> String;

    /// Begin loading the resource without playing it.
    async fn preload(&self) -> Result<()>;

    /// Start playback, or continue from the current position after `pause`.
    async fn play(&self) -> Result<()>;

    /// Pause playback, keeping the current position.
    async fn pause(&self) -> Result<()>;

    /// Halt playback and reset the position to the start.
    async fn stop(&self) -> Result<()>;

    /// Resolve when the element reaches the natural end of its resource.
    /// Must not resolve on `pause` or `stop`. May be awaited concurrently by
    /// several tasks; all of them resolve on the same ended signal.
    async fn wait_ended(&self);
}

/// Factory for [`MediaElement`]s.
#[cfg_attr(test, mockall::automock)]
pub trait MediaHost: Send + Sync {
    /// Create a fresh element for `url`. The element is not loaded yet.
    fn create(&self, url: &str) -> Arc<dyn MediaElement>;
}
