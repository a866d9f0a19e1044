//! Figure orchestration
//!
//! Drives the render / measure / correct loop: a first pass with zero
//! margins establishes raw bounding boxes, a bounded number of correction
//! passes grow the margins, and a final pass produces the surfaces handed
//! to the caller. Passes are strictly sequential because each correction
//! needs the previous pass's measurements.

use crate::backend::DrawBackend;
use crate::error::Result;
use crate::grid::{BoundCell, PanelGrid};
use crate::margins::{MarginCorrector, Margins};
use crate::panel::Panel;
use figure_model::{FigureSpec, FracRect};

/// Rendering lifecycle of a figure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderState {
    /// No pass has run yet
    Unrendered,
    /// Measurement passes in progress
    Measuring,
    /// Final surfaces produced; margins frozen
    Finalized,
}

/// Output of a completed render
#[derive(Debug)]
pub struct RenderedFigure<S> {
    /// Bound surfaces with their measured boxes, row-major
    pub cells: Vec<Vec<BoundCell<S>>>,
    /// The margins used for the final pass
    pub margins: Margins,
    /// Physical figure width in inches
    pub width_in: f64,
    /// Physical figure height in inches
    pub height_in: f64,
}

/// A multi-panel figure with deferred drawing.
///
/// Panels are created when the figure is constructed and queued into
/// through `panel_mut` any number of times before (or between) renders.
pub struct Figure {
    spec: FigureSpec,
    grid: PanelGrid,
    correction_passes: usize,
    state: RenderState,
}

impl Figure {
    pub fn new(spec: FigureSpec) -> Self {
        let grid = PanelGrid::new(&spec);
        // One correction pass settles inter-panel spacing. Outer margins
        // shift every panel, so the labels move and a second measurement is
        // needed to settle.
        let correction_passes = if spec.has_outer_margins() { 2 } else { 1 };
        Self {
            spec,
            grid,
            correction_passes,
            state: RenderState::Unrendered,
        }
    }

    /// Override the number of correction passes.
    ///
    /// The loop is a bounded approximation, not a true fixed point:
    /// tick-label overflow interacts nonlinearly with placement, and the
    /// default pass count suffices for typical content.
    pub fn with_correction_passes(mut self, passes: usize) -> Self {
        self.correction_passes = passes.max(1);
        self
    }

    pub fn spec(&self) -> &FigureSpec {
        &self.spec
    }

    pub fn state(&self) -> RenderState {
        self.state
    }

    pub fn panel(&self, row: usize, column: usize) -> &Panel {
        self.grid.panel(row, column)
    }

    pub fn panel_mut(&mut self, row: usize, column: usize) -> &mut Panel {
        self.grid.panel_mut(row, column)
    }

    /// Render the figure.
    ///
    /// Runs the measurement passes, growing margins until the measured
    /// content fits, then renders once more with the final margins and
    /// returns the bound surfaces. Every intermediate surface is discarded
    /// through the backend so it never reaches the caller. The spec's
    /// render context is applied for the duration of the call and restored
    /// afterwards, error or not. All errors propagate synchronously; there
    /// is no retry.
    pub fn render<B: DrawBackend>(&mut self, backend: &mut B) -> Result<RenderedFigure<B::Surface>> {
        let context = self.spec.render_context.clone();
        let corrector = MarginCorrector::from_spec(&self.spec);
        let passes = self.correction_passes;
        self.state = RenderState::Measuring;

        let spec = &self.spec;
        let grid = &self.grid;
        let result = backend.with_context(&context, |backend| {
            let mut margins = Margins::zero(spec.rows(), spec.columns());
            for pass in 0..passes {
                let cells = grid.place_and_render(&margins, spec, backend)?;
                let boxes: Vec<Vec<FracRect>> = cells
                    .iter()
                    .map(|row| row.iter().map(|cell| cell.bbox).collect())
                    .collect();
                let delta = corrector.correction(&boxes);
                for row in cells {
                    for cell in row {
                        backend.discard(cell.surface);
                    }
                }
                margins.grow_by(&delta);
                tracing::debug!(
                    pass,
                    h_total = margins.h_total(),
                    v_total = margins.v_total(),
                    "margin correction pass"
                );
            }

            let cells = grid.place_and_render(&margins, spec, backend)?;
            Ok(RenderedFigure {
                cells,
                margins,
                width_in: spec.width_in,
                height_in: spec.height_in(),
            })
        });

        self.state = if result.is_ok() {
            RenderState::Finalized
        } else {
            // A failed run leaves nothing bound; the figure can be
            // rendered again from scratch.
            RenderState::Unrendered
        };
        result
    }
}
