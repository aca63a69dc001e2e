// crates/trellis-core/src/lib.rs

//! Core element tree model: elements own ordered child "parts", and three
//! per-instance behaviors drive the update, layout and render traversals.
//!
//! The tree is deliberately permissive: geometry is never validated, every
//! configuration field has a silent default, and no operation returns a
//! `Result`. Host input and drawing are capabilities ([`HostSurface`],
//! [`Canvas`]) injected into the traversals rather than ambient globals.

pub mod align;
pub mod behavior;
pub mod bounds;
pub mod canvas;
pub mod element;
pub mod host;

pub use align::*;
pub use behavior::*;
pub use bounds::*;
pub use canvas::*;
pub use element::*;
pub use host::*;
