//! Encodings at the engine boundary.
//!
//! - `request`: JSON position/move messages for a remote opponent
//! - `snapshot`: bincode snapshots for saving and resuming games

pub mod request;
pub mod snapshot;

pub use request::{wire_index, MoveReply, MoveRequest};
pub use snapshot::Snapshot;
