//! # Cue Playback Engine
//!
//! A playlist playback engine that unifies two mutually exclusive audio
//! backends behind one state machine: a low-latency decoded-buffer graph and
//! a tag-based media element fallback. Callers queue audio sources and timed
//! silence gaps, and the engine plays them back-to-back with gapless
//! transitions where the graph backend allows it, tracking position across
//! pause/resume on either backend.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │              PlaybackEngine                  │
//! │  play_list / pause / resume / navigation     │
//! └────┬───────────────┬─────────────────────────┘
//!      │               │
//!      │          ┌────▼─────────┐   cache miss   ┌─────────────┐
//!      │          │ AsyncLoader  ├───────────────>│ AudioFetcher│
//!      │          │ BufferCache  │                │ AudioDecoder│
//!      │          └────┬─────────┘                └─────────────┘
//!      │               │ DecodedPayload
//! ┌────▼───────────────▼─────┐
//! │     PlaybackBackend      │
//! │  GraphBackend │ Element  │
//! └────┬──────────────┬──────┘
//!      │              │
//! ┌────▼──────┐  ┌────▼────────┐
//! │ AudioGraph│  │ MediaElement│   (host adapters, cue-bridge)
//! └───────────┘  └─────────────┘
//! ```
//!
//! The engine is single-state-machine by construction: every deferred
//! completion (graph end timer, element ended signal, interval timer, loader
//! round-trip) re-enters through one dispatch point and carries the epoch it
//! was issued under, so completions that a pause or navigation call already
//! superseded are discarded.

pub mod backend;
pub mod cache;
pub mod config;
pub mod engine;
pub mod error;
pub mod loader;
pub mod state;
pub mod types;

pub use backend::BackendKind;
pub use cache::BufferCache;
pub use config::EngineConfig;
pub use engine::{EngineBuilder, PlaybackEngine};
pub use error::{EngineError, Result};
pub use state::EngineState;
pub use types::{AudioSourceRef, ItemInfo, PlaylistItem, SessionCallbacks};
