// crates/trellis-widgets/src/lib.rs

//! Interactive widgets for the trellis element tree.
//!
//! Widgets are plain elements whose behavior polls the host each update and
//! conditionally runs a user callback. They carry no press/release edge
//! detection and no event queue; callbacks fire on every update for which the
//! polled state matches.

pub mod button;
pub mod slider;

pub use button::*;
pub use slider::*;
