//! # Buffer Cache
//!
//! Maps source references to decoded audio payloads. Entries live until
//! explicitly invalidated; there is no eviction policy, because playlist
//! working sets are small and the caller knows when a source's content
//! changed out from under its URL.
//!
//! The cache is cheap to clone and safe to share across tasks; payloads
//! are handed out as `Arc`s so a hit never copies sample data.

use std::collections::HashMap;
use std::sync::Arc;

use cue_bridge::DecodedPayload;
use parking_lot::Mutex;

use crate::types::AudioSourceRef;

/// Shared cache of decoded audio, keyed by source reference.
#[derive(Clone, Default)]
pub struct BufferCache {
    inner: Arc<Mutex<HashMap<AudioSourceRef, Arc<DecodedPayload>>>>,
}

impl BufferCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a decoded payload. A hit clones the `Arc`, not the samples.
    pub fn get(&self, src: &AudioSourceRef) -> Option<Arc<DecodedPayload>> {
        self.inner.lock().get(src).cloned()
    }

    /// Insert (or replace) the payload for a source.
    pub fn put(&self, src: AudioSourceRef, payload: Arc<DecodedPayload>) {
        self.inner.lock().insert(src, payload);
    }

    /// Drop a single entry. Returns whether an entry was present.
    pub fn invalidate(&self, src: &AudioSourceRef) -> bool {
        self.inner.lock().remove(src).is_some()
    }

    /// Drop every entry.
    pub fn invalidate_all(&self) {
        self.inner.lock().clear();
    }

    pub fn contains(&self, src: &AudioSourceRef) -> bool {
        self.inner.lock().contains_key(src)
    }

    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }
}

impl std::fmt::Debug for BufferCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BufferCache")
            .field("entries", &self.len())
            .finish()
    }
}
