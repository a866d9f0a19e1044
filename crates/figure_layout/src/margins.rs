//! Margin vectors and the correction algorithm
//!
//! Margins are extra fractional space inserted before each column/row and
//! after the last one. A rendering pass lays panels out with the current
//! margins, measures tight bounding boxes, and the corrector grows margins
//! wherever one panel's content crowds or overlaps its neighbor or a figure
//! edge. Margins only ever grow within a run, which is what makes repeated
//! passes converge.

use figure_model::{FigureSpec, FracRect};
use serde::{Deserialize, Serialize};

const INCHES_PER_POINT: f64 = 1.0 / 72.0;

/// Fractional margin vectors for a rows × columns grid.
///
/// `h` has `columns + 1` entries: space inserted before each column plus a
/// trailing entry at the right figure edge. `v` has `rows + 1` entries, top
/// to bottom, with the trailing entry at the bottom edge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Margins {
    pub h: Vec<f64>,
    pub v: Vec<f64>,
}

impl Margins {
    /// All-zero margins for the given grid shape
    pub fn zero(rows: usize, columns: usize) -> Self {
        Self {
            h: vec![0.0; columns + 1],
            v: vec![0.0; rows + 1],
        }
    }

    /// Total horizontal margin
    pub fn h_total(&self) -> f64 {
        self.h.iter().sum()
    }

    /// Total vertical margin
    pub fn v_total(&self) -> f64 {
        self.v.iter().sum()
    }

    /// Add another margin set entry-wise.
    ///
    /// Used to accumulate a pass's correction; entries never shrink because
    /// corrections are non-negative.
    pub fn grow_by(&mut self, delta: &Margins) {
        debug_assert_eq!(self.h.len(), delta.h.len());
        debug_assert_eq!(self.v.len(), delta.v.len());
        for (m, d) in self.h.iter_mut().zip(&delta.h) {
            *m += d;
        }
        for (m, d) in self.v.iter_mut().zip(&delta.v) {
            *m += d;
        }
    }
}

/// Spacing requirements for margin correction, as figure fractions
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarginCorrector {
    /// Required space between horizontally adjacent panels
    pub inner_h: f64,
    /// Required space between vertically adjacent panels
    pub inner_v: f64,
    /// Required space at the left figure edge
    pub outer_left: f64,
    /// Required space at the top figure edge
    pub outer_top: f64,
}

impl MarginCorrector {
    /// Convert a spec's point-valued spacing into figure fractions.
    ///
    /// Horizontal spacing is a fraction of the figure width, vertical
    /// spacing a fraction of the figure height.
    pub fn from_spec(spec: &FigureSpec) -> Self {
        let width = spec.width_in;
        let height = spec.height_in();
        Self {
            inner_h: spec.inner_margin_pt * INCHES_PER_POINT / width,
            inner_v: spec.inner_margin_pt * INCHES_PER_POINT / height,
            outer_left: spec.outer_margin_left_pt * INCHES_PER_POINT / width,
            outer_top: spec.outer_margin_top_pt * INCHES_PER_POINT / height,
        }
    }

    /// Compute the margin increments demanded by one pass's measurements.
    ///
    /// `boxes` is the row-major grid of tight bounding boxes in fractional
    /// figure coordinates. The scan walks rows top to bottom and columns
    /// left to right, tracking the previous column's right edge and the
    /// previous row's lowest bottom edge, both shifted by the increments
    /// already granted earlier in the scan. A positive deficit grows the
    /// margin before the offending column/row; the trailing entries absorb
    /// content that escapes the right or bottom figure edge. Every
    /// increment is non-negative, so adding the result to the margins the
    /// pass was rendered with can only make the next layout more spacious.
    ///
    /// Horizontal and vertical correction are independent; diagonal-only
    /// overlap is not modeled.
    pub fn correction(&self, boxes: &[Vec<FracRect>]) -> Margins {
        let rows = boxes.len();
        let columns = boxes.first().map_or(0, |row| row.len());
        let mut delta = Margins::zero(rows, columns);

        let mut bottom_edge = 1.0;
        for (m, row) in boxes.iter().enumerate() {
            let mut right_edge = 0.0;
            let mut row_bottom = f64::INFINITY;
            for (n, bbox) in row.iter().enumerate() {
                let h_shift: f64 = delta.h[..=n].iter().sum();
                let v_shift: f64 = delta.v[..=m].iter().sum();
                let left_edge = bbox.x + h_shift;
                let top_edge = bbox.top() - v_shift;

                let mut x_deficit = right_edge - left_edge;
                x_deficit += if n > 0 { self.inner_h } else { self.outer_left };
                let mut y_deficit = top_edge - bottom_edge;
                y_deficit += if m > 0 { self.inner_v } else { self.outer_top };

                // Strict tests: an exact fit demands no extra space.
                if x_deficit > 0.0 {
                    delta.h[n] += x_deficit;
                }
                if y_deficit > 0.0 {
                    delta.v[m] += y_deficit;
                }

                let h_shift: f64 = delta.h[..=n].iter().sum();
                let v_shift: f64 = delta.v[..=m].iter().sum();
                right_edge = bbox.right() + h_shift;
                row_bottom = row_bottom.min(bbox.y - v_shift);

                // Trailing margins absorb overflow past the figure edges,
                // exactly.
                let right_overflow = bbox.right() - 1.0;
                if right_overflow > delta.h[columns] {
                    delta.h[columns] = right_overflow;
                }
                let bottom_overflow = -bbox.y;
                if bottom_overflow > delta.v[rows] {
                    delta.v[rows] = bottom_overflow;
                }
            }
            // The worst overflow in the row bounds what the next row must
            // clear.
            bottom_edge = row_bottom;
        }
        delta
    }
}
