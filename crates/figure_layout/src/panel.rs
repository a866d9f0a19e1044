//! Virtual panels
//!
//! A panel looks like a drawing surface to the caller but records every
//! call into a queue. Nothing is drawn until the figure render binds the
//! panel to a real surface and replays the queue. The queue is never
//! consumed, so a panel can be re-bound on every rendering pass with
//! identical replay.

use crate::backend::Surface;
use crate::error::Result;
use crate::ops::{ColorbarOptions, ColorbarTarget, PanelOp, PlotStyle};

/// A virtual drawing region that defers every operation
#[derive(Debug, Clone, Default)]
pub struct Panel {
    ops: Vec<PanelOp>,
}

impl Panel {
    pub fn new() -> Self {
        Self { ops: Vec::new() }
    }

    /// Append a deferred operation; pure bookkeeping, never fails
    pub fn enqueue(&mut self, op: PanelOp) {
        self.ops.push(op);
    }

    /// Number of queued operations
    pub fn queued(&self) -> usize {
        self.ops.len()
    }

    /// The queued operations, in insertion order
    pub fn ops(&self) -> &[PanelOp] {
        &self.ops
    }

    pub fn set_xlim(&mut self, min: f64, max: f64) {
        self.enqueue(PanelOp::SetXLim { min, max });
    }

    pub fn set_ylim(&mut self, min: f64, max: f64) {
        self.enqueue(PanelOp::SetYLim { min, max });
    }

    pub fn plot(&mut self, x: Vec<f64>, y: Vec<f64>, style: PlotStyle) {
        self.enqueue(PanelOp::Plot { x, y, style });
    }

    pub fn set_xlabel(&mut self, text: impl Into<String>) {
        self.enqueue(PanelOp::SetXLabel {
            text: text.into(),
            size_pt: None,
        });
    }

    pub fn set_ylabel(&mut self, text: impl Into<String>) {
        self.enqueue(PanelOp::SetYLabel {
            text: text.into(),
            size_pt: None,
        });
    }

    pub fn set_xticklabels(&mut self, labels: Vec<String>) {
        self.enqueue(PanelOp::SetXTickLabels { labels });
    }

    pub fn set_yticklabels(&mut self, labels: Vec<String>) {
        self.enqueue(PanelOp::SetYTickLabels { labels });
    }

    /// Queue a colorbar drawn from this panel's content.
    ///
    /// The target is recorded as the own-panel placeholder and resolved to
    /// the real surface when the panel is bound.
    pub fn colorbar(&mut self, options: ColorbarOptions) {
        self.enqueue(PanelOp::Colorbar {
            target: ColorbarTarget::OwnPanel,
            options,
        });
    }

    /// Replay every queued operation, in insertion order, against a real
    /// surface.
    ///
    /// A colorbar queued with the own-panel placeholder is delivered to the
    /// surface this panel is being bound to, which is the resolution of
    /// that placeholder. The queue is left intact so the next pass replays
    /// identically.
    pub fn bind<S: Surface>(&self, surface: &mut S) -> Result<()> {
        for op in &self.ops {
            surface.apply(op)?;
        }
        Ok(())
    }
}
