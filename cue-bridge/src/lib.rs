//! Host adapter traits for the cue playback engine.
//!
//! The engine core never touches the network, the decoder, or a concrete
//! audio output by itself. Instead the embedding application implements the
//! traits in this crate and hands them to the engine at construction time:
//!
//! - [`AudioFetcher`]: fetch raw encoded bytes for a source URL.
//! - [`AudioDecoder`]: decode those bytes into a [`DecodedPayload`].
//! - [`AudioGraph`]: the low-latency decoded-buffer playback graph.
//! - [`MediaHost`] / [`MediaElement`]: the tag-based media element fallback.
//!
//! Whether the host supplies an [`AudioGraph`] at all doubles as the
//! capability flag for graph playback; probing the platform for support is
//! the host's concern, not the engine's.

pub mod decode;
pub mod error;
pub mod fetch;
pub mod graph;
pub mod media;

pub use decode::{AudioDecoder, DecodedPayload};
pub use error::{BridgeError, Result};
pub use fetch::AudioFetcher;
pub use graph::{AudioGraph, GraphSourceId};
pub use media::{MediaElement, MediaHost};
