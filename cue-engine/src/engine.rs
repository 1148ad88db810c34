//! # Playback Engine
//!
//! Ties the loader, cache, backends, and transport state machine together
//! behind the public playback surface: single-shot plays, playlist
//! sessions with interval gaps, pause/resume, and navigation.
//!
//! ## Epochs
//!
//! Every deferred continuation (a graph end timer, an element ended
//! signal, an interval timer, a loader round-trip) captures the engine
//! epoch it was issued under. Pause, resume, navigation, and every item
//! start bump the epoch, so a completion that arrives for a superseded
//! item fails its epoch check and is discarded. Pause is thereby the only
//! cancellation primitive the engine needs.
//!
//! ## Locking
//!
//! One async mutex guards all mutable state. Backend calls are awaited
//! under the lock (they are cheap host calls, not I/O); loader fetches are
//! awaited with the lock released and re-validated against the epoch on
//! relock. Caller callbacks are only ever invoked after the lock is
//! dropped, so a callback may re-enter the engine freely.

use std::sync::Arc;
use std::time::Duration;

use cue_bridge::{AudioDecoder, AudioFetcher, AudioGraph, MediaHost};
use tokio::sync::Mutex;
use tokio::time::Instant;
use tracing::{debug, trace, warn};

use crate::backend::{
    BackendKind, ElementBackend, FinishedSignal, GraphBackend, PlaybackBackend, PlaybackHandle,
    ResolvedSource,
};
use crate::cache::BufferCache;
use crate::config::EngineConfig;
use crate::error::{EngineError, Result};
use crate::loader::AsyncLoader;
use crate::state::{ActiveItem, EngineState, SuspendedItem, Transport};
use crate::types::{
    AudioSourceRef, ItemInfo, PlaylistItem, PreloadProgressFn, SessionCallbacks,
};

// ============================================================================
// Builder
// ============================================================================

/// Builder for [`PlaybackEngine`].
///
/// A fetcher and decoder are always required. At least one of
/// [`with_graph`](EngineBuilder::with_graph) and
/// [`with_media_host`](EngineBuilder::with_media_host) must be supplied;
/// providing a graph is what makes the graph backend available, so host
/// capability detection happens outside the engine and is expressed here.
pub struct EngineBuilder {
    fetcher: Arc<dyn AudioFetcher>,
    decoder: Arc<dyn AudioDecoder>,
    graph: Option<Arc<dyn AudioGraph>>,
    host: Option<Arc<dyn MediaHost>>,
    config: EngineConfig,
}

impl EngineBuilder {
    pub fn new(fetcher: Arc<dyn AudioFetcher>, decoder: Arc<dyn AudioDecoder>) -> Self {
        Self {
            fetcher,
            decoder,
            graph: None,
            host: None,
            config: EngineConfig::default(),
        }
    }

    /// Enable the graph backend.
    pub fn with_graph(mut self, graph: Arc<dyn AudioGraph>) -> Self {
        self.graph = Some(graph);
        self
    }

    /// Enable the element backend.
    pub fn with_media_host(mut self, host: Arc<dyn MediaHost>) -> Self {
        self.host = Some(host);
        self
    }

    pub fn with_config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    pub fn build(self) -> Result<PlaybackEngine> {
        self.config.validate().map_err(EngineError::Internal)?;
        if self.graph.is_none() && self.host.is_none() {
            return Err(EngineError::BackendUnavailable);
        }

        let cache = BufferCache::new();
        let loader = AsyncLoader::new(self.fetcher, self.decoder, cache.clone());
        let force_element = self.config.force_element_backend;

        Ok(PlaybackEngine {
            shared: Arc::new(Shared {
                graph_backend: self.graph.map(GraphBackend::new),
                element_backend: ElementBackend::new(self.host.clone()),
                media_host: self.host,
                cache,
                loader,
                config: self.config,
                inner: Mutex::new(Inner {
                    transport: Transport::Stopped,
                    session: None,
                    epoch: 0,
                    force_element,
                }),
            }),
        })
    }
}

// ============================================================================
// Engine
// ============================================================================

/// The playback engine. Cheap to clone; all clones share one transport.
#[derive(Clone)]
pub struct PlaybackEngine {
    shared: Arc<Shared>,
}

struct Shared {
    cache: BufferCache,
    loader: AsyncLoader,
    graph_backend: Option<GraphBackend>,
    element_backend: ElementBackend,
    media_host: Option<Arc<dyn MediaHost>>,
    config: EngineConfig,
    inner: Mutex<Inner>,
}

struct Inner {
    transport: Transport,
    session: Option<Session>,
    /// Bumped on every transport transition; stale completions carry an
    /// older value and are discarded at dispatch.
    epoch: u64,
    force_element: bool,
}

struct Session {
    playlist: Vec<PlaylistItem>,
    index: usize,
    callbacks: SessionCallbacks,
    backend: BackendKind,
}

/// Where a backward navigation lands.
enum NavTarget {
    /// Play the item at this index from its beginning.
    Play(usize),
    /// Resume the paused item instead of restarting anything.
    Resume,
}

impl PlaybackEngine {
    // ------------------------------------------------------------------
    // Loading and cache control
    // ------------------------------------------------------------------

    /// Fetch and decode a single source into the cache ahead of playback.
    pub async fn load_single(&self, src: impl Into<AudioSourceRef>) -> Result<()> {
        self.shared.loader.load(std::slice::from_ref(&src.into())).await?;
        Ok(())
    }

    /// Drop one cached payload; the next play of it loads afresh.
    pub fn invalidate(&self, src: &AudioSourceRef) -> bool {
        self.shared.cache.invalidate(src)
    }

    /// Drop every cached payload.
    pub fn invalidate_all(&self) {
        self.shared.cache.invalidate_all()
    }

    // ------------------------------------------------------------------
    // Session entry points
    // ------------------------------------------------------------------

    /// Play one source, invoking `on_finished` at its natural end.
    pub async fn play_single(
        &self,
        src: impl Into<AudioSourceRef>,
        on_finished: impl Fn() + Send + Sync + 'static,
    ) -> Result<()> {
        let items = vec![PlaylistItem::Source(src.into())];
        self.play_items(items, SessionCallbacks::new().with_finished(on_finished))
            .await
    }

    /// Start a playlist session at its first item, replacing any session
    /// in progress.
    pub async fn play_list(
        &self,
        items: Vec<PlaylistItem>,
        callbacks: SessionCallbacks,
    ) -> Result<()> {
        self.play_items(items, callbacks).await
    }

    /// Resolve each `Source` item of a playlist into a preloaded media
    /// element, reporting progress as a fraction. When the graph backend
    /// will serve the session the items are returned untouched; graph
    /// sessions preload through the buffer cache instead.
    pub async fn preload_element_playlist(
        &self,
        items: Vec<PlaylistItem>,
        on_progress: Option<PreloadProgressFn>,
    ) -> Result<Vec<PlaylistItem>> {
        let element_session = {
            let guard = self.shared.inner.lock().await;
            self.shared.graph_backend.is_none() || guard.force_element
        };
        if !element_session {
            return Ok(items);
        }

        let host = self
            .shared
            .media_host
            .as_ref()
            .ok_or(EngineError::BackendUnavailable)?;
        let total = items.iter().filter(|i| matches!(i, PlaylistItem::Source(_))).count();
        let mut loaded = 0usize;
        let mut out = Vec::with_capacity(items.len());
        for item in items {
            match item {
                PlaylistItem::Source(src) => {
                    let element = host.create(src.as_str());
                    element.preload().await?;
                    loaded += 1;
                    if let Some(f) = &on_progress {
                        f(loaded as f32 / total as f32);
                    }
                    out.push(PlaylistItem::Element(element));
                }
                other => out.push(other),
            }
        }
        Ok(out)
    }

    // ------------------------------------------------------------------
    // Transport control
    // ------------------------------------------------------------------

    /// Suspend the current item, remembering its position. A no-op unless
    /// playing.
    pub async fn pause(&self) -> Result<()> {
        let mut guard = self.shared.inner.lock().await;
        self.pause_current(&mut guard).await
    }

    /// Resume the paused item in place. A no-op unless paused.
    pub async fn resume(&self) -> Result<()> {
        let mut guard = self.shared.inner.lock().await;
        self.resume_current(&mut guard).await
    }

    /// Replay the current item from its beginning, walking backward over
    /// any immediately preceding intervals. Reaching the head of the
    /// playlist on an interval resumes instead.
    pub async fn replay_current_list_item(&self) -> Result<()> {
        let mut guard = self.shared.inner.lock().await;
        let Some(session) = guard.session.as_ref() else {
            return Ok(());
        };
        if session.index >= session.playlist.len() {
            return Ok(());
        }
        let target = backward_target(&session.playlist, session.index);
        self.pause_current(&mut guard).await?;
        match target {
            NavTarget::Resume => self.resume_current(&mut guard).await,
            NavTarget::Play(index) => {
                let ep = guard.epoch;
                drop(guard);
                self.start_item_at(index, ep).await
            }
        }
    }

    /// Jump to the playable item before the current one. At the head of
    /// the playlist this resumes rather than restarting.
    pub async fn play_prev_list_item(&self) -> Result<()> {
        let mut guard = self.shared.inner.lock().await;
        let Some(session) = guard.session.as_ref() else {
            return Ok(());
        };
        if session.index == 0 {
            return self.resume_current(&mut guard).await;
        }
        // Step over the current item to land on its predecessor, then
        // apply the same backward-over-intervals walk replay uses.
        let target = backward_target(&session.playlist, session.index.saturating_sub(2));
        self.pause_current(&mut guard).await?;
        match target {
            NavTarget::Resume => self.resume_current(&mut guard).await,
            NavTarget::Play(index) => {
                let ep = guard.epoch;
                drop(guard);
                self.start_item_at(index, ep).await
            }
        }
    }

    /// Skip forward to the next playable item. Calling this on the last
    /// playable item is a complete no-op: no transition, no callback.
    pub async fn play_next_list_item(&self) -> Result<()> {
        let mut guard = self.shared.inner.lock().await;
        let Some(session) = guard.session.as_ref() else {
            return Ok(());
        };
        let Some(target) = forward_target(&session.playlist, session.index + 1) else {
            trace!("no playable item ahead; staying put");
            return Ok(());
        };
        self.pause_current(&mut guard).await?;
        let ep = guard.epoch;
        drop(guard);
        self.start_item_at(target, ep).await
    }

    // ------------------------------------------------------------------
    // Introspection
    // ------------------------------------------------------------------

    pub async fn state(&self) -> EngineState {
        self.shared.inner.lock().await.transport.snapshot()
    }

    pub async fn is_playing(&self) -> bool {
        self.state().await == EngineState::Playing
    }

    pub async fn is_paused(&self) -> bool {
        self.state().await == EngineState::Paused
    }

    pub async fn is_stopped(&self) -> bool {
        self.state().await == EngineState::Stopped
    }

    /// Position of the current item within the session playlist.
    pub async fn current_index(&self) -> Option<usize> {
        self.shared.inner.lock().await.session.as_ref().map(|s| s.index)
    }

    /// Force the element backend for subsequent `play*` calls, even when
    /// a graph is available. Does not affect the session in progress.
    pub async fn set_force_fallback_backend(&self, force: bool) {
        self.shared.inner.lock().await.force_element = force;
    }

    // ------------------------------------------------------------------
    // Session internals
    // ------------------------------------------------------------------

    async fn play_items(
        &self,
        items: Vec<PlaylistItem>,
        callbacks: SessionCallbacks,
    ) -> Result<()> {
        let ep = {
            let mut guard = self.shared.inner.lock().await;
            let inner = &mut *guard;
            self.halt_current(inner).await;
            let backend = self.select_backend(inner)?;
            debug!(items = items.len(), ?backend, "starting playback session");
            inner.session = Some(Session {
                playlist: items,
                index: 0,
                callbacks,
                backend,
            });
            inner.epoch
        };
        self.start_item_at(0, ep).await
    }

    fn select_backend(&self, inner: &Inner) -> Result<BackendKind> {
        if self.shared.graph_backend.is_some() && !inner.force_element {
            Ok(BackendKind::Graph)
        } else if self.shared.element_backend.has_host() {
            Ok(BackendKind::Element)
        } else {
            Err(EngineError::BackendUnavailable)
        }
    }

    /// Begin playing the session item at `index`, provided the engine is
    /// still at epoch `expect`. `index == playlist.len()` finishes the
    /// session.
    async fn start_item_at(&self, index: usize, expect: u64) -> Result<()> {
        let mut guard = self.shared.inner.lock().await;
        if guard.epoch != expect {
            trace!(expected = expect, current = guard.epoch, "superseded item start discarded");
            return Ok(());
        }

        let inner = &mut *guard;
        let Some(session) = inner.session.as_mut() else {
            return Ok(());
        };
        let len = session.playlist.len();
        if index > len {
            return Err(EngineError::InvalidIndex(index));
        }
        session.index = index;
        inner.epoch += 1;
        let ep = inner.epoch;

        if index == len {
            let on_finished = session.callbacks.on_finished.clone();
            inner.transport = Transport::Stopped;
            drop(guard);
            debug!("playlist session complete");
            if let Some(f) = on_finished {
                f();
            }
            return Ok(());
        }

        let item = session.playlist[index].clone();
        let backend = session.backend;
        let on_started = session.callbacks.on_item_started.clone();

        let info = match item {
            PlaylistItem::Interval(duration) => {
                trace!(?duration, index, "interval item started");
                inner.transport = Transport::Playing(ActiveItem::Interval {
                    remaining: duration,
                    started_at: Instant::now(),
                });
                self.spawn_interval_timer(duration, ep);
                ItemInfo { src: None, duration }
            }
            PlaylistItem::Element(element) => {
                self.start_via_backend(inner, ResolvedSource::LiveElement(element), Duration::ZERO, None, ep)
                    .await?
            }
            PlaylistItem::Source(src) => match backend {
                BackendKind::Element => {
                    self.start_via_backend(
                        inner,
                        ResolvedSource::Url(src.clone()),
                        Duration::ZERO,
                        Some(src),
                        ep,
                    )
                    .await?
                }
                BackendKind::Graph => match self.shared.cache.get(&src) {
                    Some(payload) => {
                        self.start_via_backend(
                            inner,
                            ResolvedSource::Decoded(payload),
                            Duration::ZERO,
                            Some(src),
                            ep,
                        )
                        .await?
                    }
                    None => {
                        // Load with the lock released; the epoch check on
                        // relock discards the result if anything else won.
                        inner.transport = Transport::Stopped;
                        drop(guard);
                        return self.start_after_load(index, src, ep).await;
                    }
                },
            },
        };

        drop(guard);
        if let Some(f) = on_started {
            f(info);
        }
        self.preload_upcoming(index, backend);
        Ok(())
    }

    async fn start_after_load(&self, index: usize, src: AudioSourceRef, ep: u64) -> Result<()> {
        let loaded = self.shared.loader.load(std::slice::from_ref(&src)).await;

        let mut guard = self.shared.inner.lock().await;
        if guard.epoch != ep {
            trace!(src = %src, "load completed for a superseded item; discarded");
            return Ok(());
        }
        let payload = match loaded {
            Ok(mut batch) => batch
                .pop()
                .ok_or_else(|| EngineError::Internal("loader returned an empty batch".into()))?,
            Err(e) => {
                guard.transport = Transport::Stopped;
                return Err(e);
            }
        };

        let (backend, on_started) = match guard.session.as_ref() {
            Some(s) => (s.backend, s.callbacks.on_item_started.clone()),
            None => return Ok(()),
        };
        let inner = &mut *guard;
        let info = self
            .start_via_backend(inner, ResolvedSource::Decoded(payload), Duration::ZERO, Some(src), ep)
            .await?;

        drop(guard);
        if let Some(f) = on_started {
            f(info);
        }
        self.preload_upcoming(index, backend);
        Ok(())
    }

    /// Hand a resolved source to the matching backend and install the
    /// running item. On failure the transport is left `Stopped`.
    async fn start_via_backend(
        &self,
        inner: &mut Inner,
        source: ResolvedSource,
        offset: Duration,
        src_ref: Option<AudioSourceRef>,
        ep: u64,
    ) -> Result<ItemInfo> {
        let backend: &dyn PlaybackBackend = match &source {
            ResolvedSource::Decoded(_) => self.graph_backend()?,
            _ => &self.shared.element_backend,
        };

        match backend.start(source, offset).await {
            Ok(started) => {
                let info = ItemInfo {
                    src: src_ref.clone(),
                    duration: started.duration.unwrap_or(Duration::ZERO),
                };
                let active = match &started.handle {
                    PlaybackHandle::Graph { .. } => ActiveItem::Graph {
                        source: src_ref,
                        handle: started.handle.clone(),
                        started_at: Instant::now(),
                        base_offset: started.offset,
                    },
                    PlaybackHandle::Element { .. } => ActiveItem::Element {
                        source: src_ref,
                        handle: started.handle.clone(),
                    },
                };
                inner.transport = Transport::Playing(active);
                self.spawn_finished_watcher(started.finished, ep);
                Ok(info)
            }
            Err(e) => {
                inner.transport = Transport::Stopped;
                Err(e)
            }
        }
    }

    // ------------------------------------------------------------------
    // Transport internals
    // ------------------------------------------------------------------

    async fn pause_current(&self, inner: &mut Inner) -> Result<()> {
        if !matches!(inner.transport, Transport::Playing(_)) {
            return Ok(());
        }
        inner.epoch += 1;
        let active = match std::mem::replace(&mut inner.transport, Transport::Stopped) {
            Transport::Playing(active) => active,
            other => {
                inner.transport = other;
                return Ok(());
            }
        };

        let suspended = match active {
            ActiveItem::Interval { remaining, started_at } => SuspendedItem::Interval {
                remaining: remaining.saturating_sub(started_at.elapsed()),
            },
            ActiveItem::Graph { source, handle, started_at, base_offset } => {
                self.graph_backend()?.pause(&handle).await?;
                let PlaybackHandle::Graph { payload, .. } = handle else {
                    return Err(EngineError::Internal("graph item held a non-graph handle".into()));
                };
                SuspendedItem::Graph {
                    source,
                    payload,
                    offset: base_offset + started_at.elapsed(),
                }
            }
            ActiveItem::Element { source, handle } => {
                self.shared.element_backend.pause(&handle).await?;
                let PlaybackHandle::Element { element } = handle else {
                    return Err(EngineError::Internal("element item held a non-element handle".into()));
                };
                SuspendedItem::Element { source, element }
            }
        };

        trace!("playback paused");
        inner.transport = Transport::Paused(suspended);
        Ok(())
    }

    async fn resume_current(&self, inner: &mut Inner) -> Result<()> {
        if !matches!(inner.transport, Transport::Paused(_)) {
            return Ok(());
        }
        inner.epoch += 1;
        let ep = inner.epoch;
        let suspended = match std::mem::replace(&mut inner.transport, Transport::Stopped) {
            Transport::Paused(suspended) => suspended,
            other => {
                inner.transport = other;
                return Ok(());
            }
        };

        match suspended {
            SuspendedItem::Interval { remaining } => {
                inner.transport = Transport::Playing(ActiveItem::Interval {
                    remaining,
                    started_at: Instant::now(),
                });
                self.spawn_interval_timer(remaining, ep);
                Ok(())
            }
            // Graph nodes are one-shot, so resume restarts the remembered
            // payload at the remembered offset.
            SuspendedItem::Graph { source, payload, offset } => self
                .start_via_backend(inner, ResolvedSource::Decoded(payload), offset, source, ep)
                .await
                .map(|_| ()),
            SuspendedItem::Element { source, element } => {
                let handle = PlaybackHandle::Element { element };
                let finished = self.shared.element_backend.resume(&handle).await?;
                inner.transport = Transport::Playing(ActiveItem::Element {
                    source,
                    handle,
                });
                self.spawn_finished_watcher(finished, ep);
                Ok(())
            }
        }
    }

    /// Tear down whatever is active and enter `Stopped`, invalidating all
    /// outstanding completions.
    async fn halt_current(&self, inner: &mut Inner) {
        inner.epoch += 1;
        let handle = match std::mem::replace(&mut inner.transport, Transport::Stopped) {
            Transport::Playing(ActiveItem::Graph { handle, .. })
            | Transport::Playing(ActiveItem::Element { handle, .. }) => Some(handle),
            Transport::Paused(SuspendedItem::Element { element, .. }) => {
                Some(PlaybackHandle::Element { element })
            }
            // Paused graph nodes are already stopped; intervals are timers.
            _ => None,
        };

        if let Some(handle) = handle {
            let backend: &dyn PlaybackBackend = match &handle {
                PlaybackHandle::Graph { .. } => match self.shared.graph_backend.as_ref() {
                    Some(g) => g,
                    None => return,
                },
                PlaybackHandle::Element { .. } => &self.shared.element_backend,
            };
            if let Err(e) = backend.stop(&handle).await {
                warn!(error = %e, "failed to stop playback during teardown");
            }
        }
    }

    fn graph_backend(&self) -> Result<&GraphBackend> {
        self.shared.graph_backend.as_ref().ok_or(EngineError::BackendUnavailable)
    }

    // ------------------------------------------------------------------
    // Deferred continuations
    // ------------------------------------------------------------------

    fn spawn_interval_timer(&self, duration: Duration, ep: u64) {
        let engine = self.clone();
        tokio::spawn(async move {
            tokio::time::sleep(duration).await;
            engine.dispatch_completion(ep).await;
        });
    }

    fn spawn_finished_watcher(&self, finished: FinishedSignal, ep: u64) {
        let engine = self.clone();
        tokio::spawn(async move {
            finished.await;
            engine.dispatch_completion(ep).await;
        });
    }

    /// Single re-entry point for every completion. Advances the playlist
    /// unless the completion's epoch was superseded; routes advancement
    /// failures to the session's error callback.
    async fn dispatch_completion(&self, ep: u64) {
        if let Err(e) = self.advance_after(ep).await {
            warn!(error = %e, "playlist advancement failed");
            let on_error = {
                let guard = self.shared.inner.lock().await;
                guard.session.as_ref().and_then(|s| s.callbacks.on_error.clone())
            };
            if let Some(f) = on_error {
                f(e);
            }
        }
    }

    async fn advance_after(&self, ep: u64) -> Result<()> {
        let next = {
            let mut guard = self.shared.inner.lock().await;
            if guard.epoch != ep {
                trace!(expected = ep, current = guard.epoch, "stale completion discarded");
                return Ok(());
            }
            guard.transport = Transport::Stopped;
            match guard.session.as_ref() {
                Some(s) => s.index + 1,
                None => return Ok(()),
            }
        };
        self.start_item_at(next, ep).await
    }

    /// Warm the cache for upcoming source items. Graph sessions only; the
    /// element backend streams and preloads through the host instead.
    fn preload_upcoming(&self, index: usize, backend: BackendKind) {
        if backend != BackendKind::Graph || self.shared.config.preload_ahead == 0 {
            return;
        }
        let engine = self.clone();
        tokio::spawn(async move {
            let targets: Vec<AudioSourceRef> = {
                let guard = engine.shared.inner.lock().await;
                let Some(session) = guard.session.as_ref() else {
                    return;
                };
                if session.index != index {
                    return;
                }
                session
                    .playlist
                    .iter()
                    .skip(index + 1)
                    .filter_map(|item| match item {
                        PlaylistItem::Source(src) => Some(src.clone()),
                        _ => None,
                    })
                    .filter(|src| !engine.shared.cache.contains(src))
                    .take(engine.shared.config.preload_ahead)
                    .collect()
            };
            if targets.is_empty() {
                return;
            }
            trace!(count = targets.len(), "preloading upcoming sources");
            if let Err(e) = engine.shared.loader.load(&targets).await {
                warn!(error = %e, "preload of upcoming sources failed");
            }
        });
    }
}

impl std::fmt::Debug for PlaybackEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlaybackEngine")
            .field("cache", &self.shared.cache)
            .field("has_graph", &self.shared.graph_backend.is_some())
            .field("has_host", &self.shared.element_backend.has_host())
            .finish()
    }
}

// ============================================================================
// Navigation walks
// ============================================================================

/// Walk backward from `idx` over interval items to the nearest playable
/// item. Hitting the head of the playlist on an interval yields `Resume`.
fn backward_target(playlist: &[PlaylistItem], mut idx: usize) -> NavTarget {
    loop {
        if playlist[idx].is_playable() {
            return NavTarget::Play(idx);
        }
        if idx == 0 {
            return NavTarget::Resume;
        }
        idx -= 1;
    }
}

/// First playable item at or after `from`, if any.
fn forward_target(playlist: &[PlaylistItem], from: usize) -> Option<usize> {
    playlist
        .iter()
        .enumerate()
        .skip(from)
        .find(|(_, item)| item.is_playable())
        .map(|(i, _)| i)
}
