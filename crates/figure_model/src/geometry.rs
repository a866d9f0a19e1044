//! Rectangle types for figure layout
//!
//! Panels live in two coordinate systems: fractional figure coordinates in
//! [0, 1]² and physical coordinates in inches. Both use a bottom-left
//! origin (`y` is the bottom edge), matching the axes convention of the
//! drawing backends this engine targets.

use serde::{Deserialize, Serialize};

/// A rectangle in fractional figure coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FracRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl FracRect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// Get the right edge
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Get the top edge (`y` measures from the bottom of the figure)
    pub fn top(&self) -> f64 {
        self.y + self.height
    }

    /// Scale to physical units given the figure dimensions in inches
    pub fn to_physical(&self, fig_width: f64, fig_height: f64) -> PhysRect {
        PhysRect {
            x: self.x * fig_width,
            y: self.y * fig_height,
            width: self.width * fig_width,
            height: self.height * fig_height,
        }
    }
}

/// A rectangle in physical units (inches)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PhysRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl PhysRect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// Get the right edge
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Get the top edge
    pub fn top(&self) -> f64 {
        self.y + self.height
    }

    /// Divide out the figure dimensions to get fractional coordinates
    pub fn to_fractional(&self, fig_width: f64, fig_height: f64) -> FracRect {
        FracRect {
            x: self.x / fig_width,
            y: self.y / fig_height,
            width: self.width / fig_width,
            height: self.height / fig_height,
        }
    }
}
