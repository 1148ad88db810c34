//! Decoding of fetched audio data into playable PCM payloads.

use crate::error::Result;
use async_trait::async_trait;
use bytes::Bytes;
use std::sync::Arc;
use std::time::Duration;

/// Decoded audio ready for graph playback.
///
/// Samples are interleaved f32 PCM in `[-1.0, 1.0]` (stereo is LRLR...).
/// The payload is immutable once created; the engine's buffer cache hands out
/// shared references and never mutates it.
#[derive(Debug, Clone)]
pub struct DecodedPayload {
    /// Interleaved PCM samples.
    pub samples: Arc<Vec<f32>>,
    /// Sample rate in hertz.
    pub sample_rate: u32,
    /// Number of audio channels.
    pub channels: u16,
    /// Total duration of the decoded audio.
    pub duration: Duration,
}

impl DecodedPayload {
    /// Build a payload from raw PCM, deriving the duration from the sample
    /// count and format.
    pub fn from_pcm(samples: Vec<f32>, sample_rate: u32, channels: u16) -> Self {
        let frames = if channels == 0 {
            0
        } else {
            samples.len() / channels as usize
        };
        let duration = if sample_rate == 0 {
            Duration::ZERO
        } else {
            Duration::from_secs_f64(frames as f64 / sample_rate as f64)
        };
        Self {
            samples: Arc::new(samples),
            sample_rate,
            channels,
            duration,
        }
    }

    /// Build a payload with a decoder-reported duration, overriding the
    /// sample-derived one. Useful when the container header is authoritative.
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Number of frames (one sample per channel).
    pub fn frames(&self) -> usize {
        if self.channels == 0 {
            0
        } else {
            self.samples.len() / self.channels as usize
        }
    }
}

/// Decodes encoded audio bytes into a [`DecodedPayload`].
///
/// `url` identifies the resource being decoded and is only used for error
/// reporting; implementations must not refetch it.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AudioDecoder: Send + Sync {
    async fn decode(&self, url: &str, data: Bytes) -> Result<DecodedPayload>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duration_derives_from_frames() {
        // 4410 stereo frames at 44.1kHz = 100ms
        let payload = DecodedPayload::from_pcm(vec![0.0; 8820], 44100, 2);
        assert_eq!(payload.frames(), 4410);
        assert_eq!(payload.duration, Duration::from_millis(100));
    }

    #[test]
    fn zero_rate_payload_has_zero_duration() {
        let payload = DecodedPayload::from_pcm(vec![0.0; 100], 0, 2);
        assert_eq!(payload.duration, Duration::ZERO);
    }

    #[test]
    fn reported_duration_overrides_derived() {
        let payload = DecodedPayload::from_pcm(vec![0.0; 8820], 44100, 2)
            .with_duration(Duration::from_millis(250));
        assert_eq!(payload.duration, Duration::from_millis(250));
    }
}
