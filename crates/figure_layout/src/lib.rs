//! Figure Layout - deferred panels and iterative margin correction
//!
//! This crate turns a grid of virtual panels into bound, measured drawing
//! surfaces. Callers queue drawing operations on panels before any real
//! surface exists; a first render with zero margins measures how far each
//! panel's labels, ticks, and colorbars actually reach, and a bounded
//! number of correction passes grow the inter-panel and outer margins until
//! nothing overlaps. The requested physical figure size is preserved
//! exactly throughout.

mod backend;
mod error;
mod figure;
mod grid;
mod margins;
mod ops;
mod panel;

pub use backend::*;
pub use error::*;
pub use figure::*;
pub use grid::*;
pub use margins::*;
pub use ops::*;
pub use panel::*;
