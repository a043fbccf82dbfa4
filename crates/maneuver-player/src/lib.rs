//! Headless maneuver playback.
//!
//! Drives a [`Maneuver`](maneuver_path::Maneuver) one point per frame on an
//! externally supplied clock and hands each point to a [`PointerSink`].

pub mod config;
pub mod player;
pub mod sink;

pub use config::PlayerConfig;
pub use player::{HeadlessPlayer, ManeuverPlayer};
pub use sink::{PointerSink, TraceRecorder};
