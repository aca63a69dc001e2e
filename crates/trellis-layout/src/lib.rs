// crates/trellis-layout/src/lib.rs

//! Container factories for the trellis element tree.
//!
//! Each factory returns a plain [`trellis_core::Element`] whose part behavior
//! implements one layout algorithm; containers nest freely because they are
//! just elements. Layout runs only when `apply_part_behavior` is invoked,
//! either by the owner or by a container's own behavior (the field
//! re-laying-out on a drawable resize), never implicitly on every frame.

pub mod column;
pub mod field;
pub mod padding;
pub mod row;

pub use column::*;
pub use field::*;
pub use padding::*;
pub use row::*;
