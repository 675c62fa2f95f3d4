//! Terminal input module.
//!
//! Maps `crossterm` key events onto [`crate::types::GameCommand`]s. The engine
//! never sees key codes; this crate is the only place physical keys exist.
//! [`SoftDropLatch`] covers terminals that never report key releases.

pub mod latch;
pub mod map;

pub use stackfall_types as types;

pub use latch::SoftDropLatch;
pub use map::{map_key, should_quit};
