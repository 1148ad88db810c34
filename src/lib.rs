//! Workspace placeholder crate.
//!
//! This crate exists so host applications can depend on `cue-workspace` and
//! reach both member crates without wiring each one individually. The actual
//! playback engine lives in [`cue_engine`]; the host adapter traits it is
//! built against live in [`cue_bridge`].

pub use cue_bridge as bridge;
pub use cue_engine as engine;
