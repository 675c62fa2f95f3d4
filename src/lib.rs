//! Stackfall (workspace facade crate).
//!
//! Re-exports the engine crates under one name so the binary, integration
//! tests and benches can write `stackfall::core::Game` and friends.

pub mod config;

pub use stackfall_core as core;
pub use stackfall_input as input;
pub use stackfall_term as term;
pub use stackfall_types as types;
