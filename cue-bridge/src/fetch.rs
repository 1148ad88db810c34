//! Network access for audio sources.

use crate::error::Result;
use async_trait::async_trait;
use bytes::Bytes;

/// Fetches raw, still-encoded audio data for a source URL.
///
/// The engine awaits this once per cache miss and hands the bytes to an
/// [`AudioDecoder`](crate::decode::AudioDecoder). There is no timeout at the
/// engine level; hosts that need one should enforce it inside `fetch` and
/// fail with [`BridgeError::Fetch`](crate::BridgeError::Fetch).
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AudioFetcher: Send + Sync {
    /// Fetch the complete resource at `url`.
    async fn fetch(&self, url: &str) -> Result<Bytes>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BridgeError;

    #[tokio::test]
    async fn mock_fetcher_returns_configured_bytes() {
        let mut fetcher = MockAudioFetcher::new();
        fetcher
            .expect_fetch()
            .withf(|url| url == "https://example.com/clip.ogg")
            .returning(|_| Ok(Bytes::from_static(b"encoded")));

        let data = fetcher.fetch("https://example.com/clip.ogg").await.unwrap();
        assert_eq!(&data[..], b"encoded");
    }

    #[tokio::test]
    async fn mock_fetcher_propagates_errors() {
        let mut fetcher = MockAudioFetcher::new();
        fetcher.expect_fetch().returning(|url| {
            Err(BridgeError::Fetch {
                url: url.to_string(),
                reason: "connection refused".into(),
            })
        });

        let err = fetcher.fetch("https://example.com/gone").await.unwrap_err();
        assert!(matches!(err, BridgeError::Fetch { .. }));
    }
}
