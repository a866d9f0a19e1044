//! Figure Model - geometry, width presets, and layout specification
//!
//! This crate defines the value types shared by the figure layout engine:
//! rectangles in fractional and physical coordinates, the figure
//! specification (width, aspect ratio, panel weights, spacing), and the
//! journal width-preset table.

mod error;
mod geometry;
mod spec;

pub use error::*;
pub use geometry::*;
pub use spec::*;
