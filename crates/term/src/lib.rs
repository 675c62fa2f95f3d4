//! Terminal presentation for the engine.
//!
//! [`GameView`] turns a [`core::GameSnapshot`] into a character [`Frame`]
//! without any I/O, so layout is unit-testable. [`TerminalRenderer`] owns the
//! real terminal (raw mode, alternate screen) and flushes frames to it.

pub mod frame;
pub mod renderer;
pub mod view;

pub use stackfall_core as core;
pub use stackfall_types as types;

pub use frame::{Frame, Glyph, Rgb};
pub use renderer::{encode_frame_into, TerminalRenderer};
pub use view::GameView;
