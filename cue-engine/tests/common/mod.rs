//! Shared fakes for integration tests: an in-memory fetcher/decoder pair,
//! a recording audio graph, and scriptable media elements.
//!
//! Fetched "audio" is just the track's duration in milliseconds as 8
//! little-endian bytes; the fake decoder turns that back into a payload
//! with the given duration, so tests control timing without real audio.

#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::{Arc, Once};
use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use cue_bridge::{
    AudioDecoder, AudioFetcher, AudioGraph, BridgeError, DecodedPayload, GraphSourceId,
    MediaElement, MediaHost,
};
use cue_engine::{EngineBuilder, ItemInfo, PlaybackEngine, SessionCallbacks};
use parking_lot::Mutex;

static TRACING: Once = Once::new();

/// Route engine tracing through the test harness so `--nocapture` shows it.
/// Safe to call from every test; the subscriber installs once per binary.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
            )
            .with_test_writer()
            .try_init();
    });
}

// ----------------------------------------------------------------------
// Fetcher / decoder
// ----------------------------------------------------------------------

#[derive(Default)]
pub struct FakeFetcher {
    tracks: Mutex<HashMap<String, u64>>,
    failing: Mutex<HashSet<String>>,
    fetches: Mutex<HashMap<String, usize>>,
}

impl FakeFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a track whose decoded duration will be `ms` milliseconds.
    pub fn with_track(self, url: &str, ms: u64) -> Self {
        self.tracks.lock().insert(url.to_string(), ms);
        self
    }

    pub fn fail(&self, url: &str) {
        self.failing.lock().insert(url.to_string());
    }

    pub fn fetch_count(&self, url: &str) -> usize {
        self.fetches.lock().get(url).copied().unwrap_or(0)
    }
}

#[async_trait]
impl AudioFetcher for FakeFetcher {
    async fn fetch(&self, url: &str) -> cue_bridge::Result<Bytes> {
        *self.fetches.lock().entry(url.to_string()).or_insert(0) += 1;
        if self.failing.lock().contains(url) {
            return Err(BridgeError::Fetch {
                url: url.to_string(),
                reason: "simulated network failure".to_string(),
            });
        }
        let ms = self.tracks.lock().get(url).copied().ok_or_else(|| BridgeError::Fetch {
            url: url.to_string(),
            reason: "unknown track".to_string(),
        })?;
        Ok(Bytes::copy_from_slice(&ms.to_le_bytes()))
    }
}

#[derive(Default)]
pub struct FakeDecoder {
    failing: Mutex<HashSet<String>>,
}

impl FakeDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail(&self, url: &str) {
        self.failing.lock().insert(url.to_string());
    }
}

#[async_trait]
impl AudioDecoder for FakeDecoder {
    async fn decode(&self, url: &str, data: Bytes) -> cue_bridge::Result<DecodedPayload> {
        if self.failing.lock().contains(url) {
            return Err(BridgeError::Decode {
                url: url.to_string(),
                reason: "simulated codec failure".to_string(),
            });
        }
        if data.len() < 8 {
            return Err(BridgeError::Decode {
                url: url.to_string(),
                reason: "truncated data".to_string(),
            });
        }
        let mut buf = [0u8; 8];
        buf.copy_from_slice(&data[..8]);
        let ms = u64::from_le_bytes(buf);
        Ok(DecodedPayload::from_pcm(vec![0.0; 16], 44_100, 2)
            .with_duration(Duration::from_millis(ms)))
    }
}

// ----------------------------------------------------------------------
// Audio graph
// ----------------------------------------------------------------------

/// Records every start (id, offset, payload duration) and stop.
#[derive(Default)]
pub struct FakeGraph {
    next_id: AtomicU64,
    starts: Mutex<Vec<(u64, Duration, Duration)>>,
    stops: Mutex<Vec<u64>>,
}

impl FakeGraph {
    pub fn starts(&self) -> Vec<(u64, Duration, Duration)> {
        self.starts.lock().clone()
    }

    pub fn stops(&self) -> Vec<u64> {
        self.stops.lock().clone()
    }
}

impl AudioGraph for FakeGraph {
    fn start_source(
        &self,
        payload: &DecodedPayload,
        offset: Duration,
    ) -> cue_bridge::Result<GraphSourceId> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        self.starts.lock().push((id, offset, payload.duration));
        Ok(GraphSourceId(id))
    }

    fn stop_source(&self, source: GraphSourceId) {
        self.stops.lock().push(source.0);
    }
}

// ----------------------------------------------------------------------
// Media elements
// ----------------------------------------------------------------------

pub struct FakeMediaElement {
    url: String,
    ended: tokio::sync::watch::Sender<bool>,
    preloads: AtomicUsize,
    plays: AtomicUsize,
    pauses: AtomicUsize,
    stops: AtomicUsize,
}

impl FakeMediaElement {
    pub fn new(url: &str) -> Arc<Self> {
        let (ended, _) = tokio::sync::watch::channel(false);
        Arc::new(Self {
            url: url.to_string(),
            ended,
            preloads: AtomicUsize::new(0),
            plays: AtomicUsize::new(0),
            pauses: AtomicUsize::new(0),
            stops: AtomicUsize::new(0),
        })
    }

    /// Simulate the element reaching its natural end.
    pub fn finish(&self) {
        // send_replace stores the value even when no watcher has
        // subscribed yet; plain send would drop it and lose the end.
        self.ended.send_replace(true);
    }

    pub fn preload_count(&self) -> usize {
        self.preloads.load(Ordering::SeqCst)
    }

    pub fn play_count(&self) -> usize {
        self.plays.load(Ordering::SeqCst)
    }

    pub fn pause_count(&self) -> usize {
        self.pauses.load(Ordering::SeqCst)
    }

    pub fn stop_count(&self) -> usize {
        self.stops.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl MediaElement for FakeMediaElement {
    fn source_url(&self) -> String {
        self.url.clone()
    }

    async fn preload(&self) -> cue_bridge::Result<()> {
        self.preloads.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn play(&self) -> cue_bridge::Result<()> {
        self.plays.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn pause(&self) -> cue_bridge::Result<()> {
        self.pauses.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn stop(&self) -> cue_bridge::Result<()> {
        self.stops.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn wait_ended(&self) {
        let mut rx = self.ended.subscribe();
        while !*rx.borrow_and_update() {
            if rx.changed().await.is_err() {
                return;
            }
        }
    }
}

#[derive(Default)]
pub struct FakeMediaHost {
    created: Mutex<Vec<Arc<FakeMediaElement>>>,
}

impl FakeMediaHost {
    pub fn created(&self) -> Vec<Arc<FakeMediaElement>> {
        self.created.lock().clone()
    }

    pub fn last(&self) -> Arc<FakeMediaElement> {
        self.created.lock().last().cloned().expect("no element created yet")
    }
}

impl MediaHost for FakeMediaHost {
    fn create(&self, url: &str) -> Arc<dyn MediaElement> {
        let element = FakeMediaElement::new(url);
        self.created.lock().push(element.clone());
        element
    }
}

// ----------------------------------------------------------------------
// Session probe and engine shorthands
// ----------------------------------------------------------------------

/// Captures session callbacks for later assertions.
#[derive(Clone, Default)]
pub struct SessionProbe {
    started: Arc<Mutex<Vec<ItemInfo>>>,
    finished: Arc<AtomicUsize>,
    errors: Arc<Mutex<Vec<String>>>,
}

impl SessionProbe {
    pub fn callbacks(&self) -> SessionCallbacks {
        let started = self.started.clone();
        let finished = self.finished.clone();
        let errors = self.errors.clone();
        SessionCallbacks::new()
            .with_item_started(move |info| started.lock().push(info))
            .with_finished(move || {
                finished.fetch_add(1, Ordering::SeqCst);
            })
            .with_error(move |e| errors.lock().push(e.to_string()))
    }

    pub fn started(&self) -> Vec<ItemInfo> {
        self.started.lock().clone()
    }

    pub fn finished_count(&self) -> usize {
        self.finished.load(Ordering::SeqCst)
    }

    pub fn errors(&self) -> Vec<String> {
        self.errors.lock().clone()
    }
}

pub fn graph_engine(fetcher: Arc<FakeFetcher>, graph: Arc<FakeGraph>) -> PlaybackEngine {
    init_tracing();
    EngineBuilder::new(fetcher, Arc::new(FakeDecoder::new()))
        .with_graph(graph)
        .build()
        .expect("engine build failed")
}

pub fn element_engine(fetcher: Arc<FakeFetcher>, host: Arc<FakeMediaHost>) -> PlaybackEngine {
    init_tracing();
    EngineBuilder::new(fetcher, Arc::new(FakeDecoder::new()))
        .with_media_host(host)
        .build()
        .expect("engine build failed")
}
