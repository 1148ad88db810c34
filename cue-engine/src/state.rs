//! # Transport State
//!
//! The engine is always in exactly one of three transport states:
//!
//! ```text
//!  Stopped ──play──> Playing ──pause──> Paused
//!     ^                 │                  │
//!     └──── finish ─────┘ <──── resume ────┘
//! ```
//!
//! `Playing` carries everything needed to pause the current item;
//! `Paused` carries everything needed to resume it. Entering `Stopped`
//! drops both, so there is nothing to leak on teardown.

use std::sync::Arc;
use std::time::Duration;

use cue_bridge::{DecodedPayload, MediaElement};
use serde::{Deserialize, Serialize};
use tokio::time::Instant;

use crate::backend::PlaybackHandle;
use crate::types::AudioSourceRef;

/// Public snapshot of the transport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngineState {
    Stopped,
    Playing,
    Paused,
}

/// Transport with the per-state bookkeeping attached.
pub(crate) enum Transport {
    Stopped,
    Playing(ActiveItem),
    Paused(SuspendedItem),
}

impl Transport {
    pub(crate) fn snapshot(&self) -> EngineState {
        match self {
            Transport::Stopped => EngineState::Stopped,
            Transport::Playing(_) => EngineState::Playing,
            Transport::Paused(_) => EngineState::Paused,
        }
    }
}

/// An item currently making sound (or an interval currently elapsing).
pub(crate) enum ActiveItem {
    Graph {
        source: Option<AudioSourceRef>,
        handle: PlaybackHandle,
        /// When this stretch of playback started, for elapsed-time math.
        started_at: Instant,
        /// Offset into the source when this stretch started.
        base_offset: Duration,
    },
    Element {
        source: Option<AudioSourceRef>,
        handle: PlaybackHandle,
    },
    Interval {
        remaining: Duration,
        started_at: Instant,
    },
}

/// A paused item, holding just enough to start playing again.
pub(crate) enum SuspendedItem {
    Graph {
        source: Option<AudioSourceRef>,
        payload: Arc<DecodedPayload>,
        /// Position to resume from.
        offset: Duration,
    },
    Element {
        source: Option<AudioSourceRef>,
        element: Arc<dyn MediaElement>,
    },
    Interval {
        remaining: Duration,
    },
}
