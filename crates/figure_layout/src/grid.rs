//! The layout grid
//!
//! Converts row/column weights plus the current margins into absolute
//! fractional panel rectangles, binds each virtual panel to a freshly
//! created surface, and measures what was drawn. Margins are the only
//! correction mechanism; panel weights are never altered.

use crate::backend::{DrawBackend, Surface};
use crate::error::{LayoutError, Result};
use crate::margins::Margins;
use crate::panel::Panel;
use figure_model::{FigureSpec, FracRect};

/// One bound cell from a rendering pass
#[derive(Debug)]
pub struct BoundCell<S> {
    pub surface: S,
    /// Tight bounding box in fractional figure coordinates
    pub bbox: FracRect,
}

/// Row-major grid of virtual panels
#[derive(Debug, Clone)]
pub struct PanelGrid {
    column_weights: Vec<f64>,
    row_weights: Vec<f64>,
    panels: Vec<Panel>,
}

impl PanelGrid {
    /// Build the grid for a figure spec, one fresh panel per cell.
    ///
    /// The grid owns its panels for the figure's lifetime; weights arrive
    /// already validated and normalized by the spec.
    pub fn new(spec: &FigureSpec) -> Self {
        let cells = spec.rows() * spec.columns();
        Self {
            column_weights: spec.column_weights.clone(),
            row_weights: spec.row_weights.clone(),
            panels: vec![Panel::new(); cells],
        }
    }

    pub fn rows(&self) -> usize {
        self.row_weights.len()
    }

    pub fn columns(&self) -> usize {
        self.column_weights.len()
    }

    pub fn panel(&self, row: usize, column: usize) -> &Panel {
        &self.panels[row * self.columns() + column]
    }

    pub fn panel_mut(&mut self, row: usize, column: usize) -> &mut Panel {
        let index = row * self.columns() + column;
        &mut self.panels[index]
    }

    /// Baseline cell rectangles for the given margins.
    ///
    /// Rows are placed top to bottom and columns left to right: the running
    /// Y drops by the row margin then the row's real height (weight times
    /// the remaining budget), the running X advances by the column margin
    /// then the column's real width. The result is a non-overlapping grid
    /// before any content-overflow correction.
    pub fn place(&self, margins: &Margins) -> Result<Vec<Vec<FracRect>>> {
        let h_budget = 1.0 - margins.h_total();
        let v_budget = 1.0 - margins.v_total();
        if h_budget <= 0.0 || v_budget <= 0.0 {
            return Err(LayoutError::Overflow(format!(
                "margins leave no room for panels (width budget {h_budget:.4}, height budget {v_budget:.4})"
            )));
        }

        let mut cells = Vec::with_capacity(self.rows());
        let mut y = 1.0;
        for (m, row_weight) in self.row_weights.iter().enumerate() {
            let height = row_weight * v_budget;
            y -= margins.v[m] + height;
            let mut row = Vec::with_capacity(self.columns());
            let mut x = 0.0;
            for (n, column_weight) in self.column_weights.iter().enumerate() {
                let width = column_weight * h_budget;
                x += margins.h[n];
                row.push(FracRect::new(x, y, width, height));
                x += width;
            }
            cells.push(row);
        }
        Ok(cells)
    }

    /// Render one pass: place every cell, bind its panel to a new surface,
    /// and measure the tight bounding box of what was drawn.
    ///
    /// Surfaces are created in physical units; measured boxes come back
    /// physical and are divided by the figure dimensions here.
    pub fn place_and_render<B: DrawBackend>(
        &self,
        margins: &Margins,
        spec: &FigureSpec,
        backend: &mut B,
    ) -> Result<Vec<Vec<BoundCell<B::Surface>>>> {
        let width = spec.width_in;
        let height = spec.height_in();
        let cells = self.place(margins)?;

        let mut bound = Vec::with_capacity(self.rows());
        for (m, row) in cells.iter().enumerate() {
            let mut bound_row = Vec::with_capacity(self.columns());
            for (n, rect) in row.iter().enumerate() {
                let mut surface = backend.create_surface(rect.to_physical(width, height))?;
                self.panel(m, n).bind(&mut surface)?;
                let bbox = surface.tight_bounding_box().to_fractional(width, height);
                bound_row.push(BoundCell { surface, bbox });
            }
            bound.push(bound_row);
        }
        Ok(bound)
    }
}
