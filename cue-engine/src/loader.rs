//! # Async Loader
//!
//! Resolves source references to decoded payloads by running fetch and
//! decode concurrently for every cache miss in a batch. A batch is
//! all-or-nothing: the cache is only updated once every miss resolved,
//! so a partial failure never leaves half a playlist cached.
//!
//! ```text
//!  [src, src, src] ── cache probe ──> hits filled in place
//!         │
//!         └─ misses ──> try_join_all(fetch ─> decode) ──> cache.put
//! ```

use std::sync::Arc;

use cue_bridge::{AudioDecoder, AudioFetcher, DecodedPayload};
use tracing::debug;

use crate::cache::BufferCache;
use crate::error::{EngineError, Result};
use crate::types::AudioSourceRef;

/// Batch fetch-and-decode front end over the [`BufferCache`].
#[derive(Clone)]
pub struct AsyncLoader {
    fetcher: Arc<dyn AudioFetcher>,
    decoder: Arc<dyn AudioDecoder>,
    cache: BufferCache,
}

impl AsyncLoader {
    pub fn new(
        fetcher: Arc<dyn AudioFetcher>,
        decoder: Arc<dyn AudioDecoder>,
        cache: BufferCache,
    ) -> Self {
        Self {
            fetcher,
            decoder,
            cache,
        }
    }

    /// Resolve a batch of sources to decoded payloads, in input order.
    ///
    /// Cache hits are returned as-is; misses are fetched and decoded
    /// concurrently. If any miss fails the whole call fails and the
    /// cache is left untouched.
    pub async fn load(&self, sources: &[AudioSourceRef]) -> Result<Vec<Arc<DecodedPayload>>> {
        let mut resolved: Vec<Option<Arc<DecodedPayload>>> =
            sources.iter().map(|src| self.cache.get(src)).collect();

        let misses: Vec<(usize, AudioSourceRef)> = resolved
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.is_none())
            .map(|(i, _)| (i, sources[i].clone()))
            .collect();

        if !misses.is_empty() {
            debug!(
                total = sources.len(),
                misses = misses.len(),
                "loading uncached sources"
            );

            let fetched = futures::future::try_join_all(
                misses.iter().map(|(_, src)| self.fetch_one(src)),
            )
            .await?;

            for ((index, src), payload) in misses.into_iter().zip(fetched) {
                self.cache.put(src, payload.clone());
                resolved[index] = Some(payload);
            }
        }

        resolved
            .into_iter()
            .map(|slot| {
                slot.ok_or_else(|| EngineError::Internal("loader left a batch slot unfilled".into()))
            })
            .collect()
    }

    async fn fetch_one(&self, src: &AudioSourceRef) -> Result<Arc<DecodedPayload>> {
        let data = self
            .fetcher
            .fetch(src.as_str())
            .await
            .map_err(EngineError::from)?;
        let payload = self
            .decoder
            .decode(src.as_str(), data)
            .await
            .map_err(EngineError::from)?;
        Ok(Arc::new(payload))
    }
}

impl std::fmt::Debug for AsyncLoader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AsyncLoader")
            .field("cache", &self.cache)
            .finish()
    }
}
