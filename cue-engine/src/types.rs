//! Value types shared across the engine: source references, playlist items,
//! and session callbacks.

use crate::error::EngineError;
use cue_bridge::MediaElement;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

/// Opaque identifier of a playable resource, typically a URL.
///
/// Used as the cache and loader key; comparison is plain string equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AudioSourceRef(String);

impl AudioSourceRef {
    pub fn new(url: impl Into<String>) -> Self {
        Self(url.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AudioSourceRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AudioSourceRef {
    fn from(url: &str) -> Self {
        Self(url.to_string())
    }
}

impl From<String> for AudioSourceRef {
    fn from(url: String) -> Self {
        Self(url)
    }
}

/// One entry of a playlist.
#[derive(Clone)]
pub enum PlaylistItem {
    /// An audio resource resolved through the loader and buffer cache.
    Source(AudioSourceRef),
    /// A pre-resolved media element supplied by the caller; always plays
    /// through the element backend.
    Element(Arc<dyn MediaElement>),
    /// A silence gap of fixed duration.
    Interval(Duration),
}

impl PlaylistItem {
    pub fn source(url: impl Into<AudioSourceRef>) -> Self {
        PlaylistItem::Source(url.into())
    }

    pub fn element(element: Arc<dyn MediaElement>) -> Self {
        PlaylistItem::Element(element)
    }

    pub fn interval(duration: Duration) -> Self {
        PlaylistItem::Interval(duration)
    }

    pub fn interval_ms(ms: u64) -> Self {
        PlaylistItem::Interval(Duration::from_millis(ms))
    }

    pub fn is_interval(&self) -> bool {
        matches!(self, PlaylistItem::Interval(_))
    }

    /// Anything that produces audio, i.e. not an interval.
    pub fn is_playable(&self) -> bool {
        !self.is_interval()
    }
}

impl fmt::Debug for PlaylistItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlaylistItem::Source(src) => f.debug_tuple("Source").field(src).finish(),
            PlaylistItem::Element(el) => f.debug_tuple("Element").field(&el.source_url()).finish(),
            PlaylistItem::Interval(d) => f.debug_tuple("Interval").field(d).finish(),
        }
    }
}

impl From<&str> for PlaylistItem {
    fn from(url: &str) -> Self {
        PlaylistItem::Source(url.into())
    }
}

impl From<AudioSourceRef> for PlaylistItem {
    fn from(src: AudioSourceRef) -> Self {
        PlaylistItem::Source(src)
    }
}

impl From<Duration> for PlaylistItem {
    fn from(duration: Duration) -> Self {
        PlaylistItem::Interval(duration)
    }
}

/// Payload delivered to `on_item_started` when a playlist item begins.
///
/// Interval items carry `src: None` and their gap duration. Resource items
/// carry their reference and, when the duration is already known (graph
/// sessions know it from the decoded payload), the real duration; element
/// sessions report zero because position is element-owned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemInfo {
    pub src: Option<AudioSourceRef>,
    pub duration: Duration,
}

/// Invoked when a playlist item begins playing.
pub type ItemStartedFn = Arc<dyn Fn(ItemInfo) + Send + Sync>;
/// Invoked exactly once when a session runs out of playlist.
pub type FinishedFn = Arc<dyn Fn() + Send + Sync>;
/// Invoked when asynchronous advancement fails; distinct from `FinishedFn`
/// so callers can tell "ran out of playlist" from "a resource failed".
pub type PlaybackErrorFn = Arc<dyn Fn(EngineError) + Send + Sync>;
/// Invoked with the loaded fraction (0.0..=1.0) during element preloading.
pub type PreloadProgressFn = Arc<dyn Fn(f32) + Send + Sync>;

/// Caller-supplied callbacks for one playback session.
#[derive(Default, Clone)]
pub struct SessionCallbacks {
    pub on_item_started: Option<ItemStartedFn>,
    pub on_finished: Option<FinishedFn>,
    pub on_error: Option<PlaybackErrorFn>,
}

impl SessionCallbacks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_item_started(mut self, f: impl Fn(ItemInfo) + Send + Sync + 'static) -> Self {
        self.on_item_started = Some(Arc::new(f));
        self
    }

    pub fn with_finished(mut self, f: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_finished = Some(Arc::new(f));
        self
    }

    pub fn with_error(mut self, f: impl Fn(EngineError) + Send + Sync + 'static) -> Self {
        self.on_error = Some(Arc::new(f));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn playlist_item_conversions() {
        assert!(matches!(
            PlaylistItem::from("https://example.com/a.mp3"),
            PlaylistItem::Source(_)
        ));
        assert!(PlaylistItem::from(Duration::from_millis(500)).is_interval());
        assert!(PlaylistItem::source("x").is_playable());
        assert!(!PlaylistItem::interval_ms(100).is_playable());
    }

    #[test]
    fn source_ref_round_trips_as_string() {
        let src = AudioSourceRef::new("https://example.com/a.mp3");
        assert_eq!(src.as_str(), "https://example.com/a.mp3");
        assert_eq!(src.to_string(), "https://example.com/a.mp3");
        assert_eq!(src, AudioSourceRef::from("https://example.com/a.mp3"));
    }

    #[test]
    fn callbacks_builder_installs_handlers() {
        let cb = SessionCallbacks::new()
            .with_item_started(|_| {})
            .with_finished(|| {})
            .with_error(|_| {});
        assert!(cb.on_item_started.is_some());
        assert!(cb.on_finished.is_some());
        assert!(cb.on_error.is_some());
    }
}
