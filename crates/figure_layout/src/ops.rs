//! Deferred drawing operations
//!
//! Panels record a closed, enumerated set of drawing operations rather than
//! mirroring an arbitrary backend API surface. Each operation carries typed
//! arguments and is replayed verbatim when its panel is bound to a real
//! surface.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Styling options for a plotted series
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlotStyle {
    pub color: Option<String>,
    pub line_style: Option<String>,
    pub line_width: Option<f64>,
    pub label: Option<String>,
}

/// Orientation of a colorbar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ColorbarOrientation {
    #[default]
    Vertical,
    Horizontal,
}

/// Options for a colorbar attached to a panel
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ColorbarOptions {
    pub label: Option<String>,
    pub orientation: ColorbarOrientation,
    /// Backend-specific options, passed through verbatim
    pub extra: BTreeMap<String, String>,
}

/// Target of a colorbar operation.
///
/// A colorbar's target must be a real surface, which does not exist when
/// the operation is queued. The queue therefore stores a tagged placeholder
/// that the bind step resolves to the surface the owning panel is being
/// bound to. This is a narrow, explicit special case, not a general
/// aliasing mechanism.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColorbarTarget {
    /// The panel the colorbar was queued on
    OwnPanel,
}

/// One deferred drawing operation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PanelOp {
    SetXLim {
        min: f64,
        max: f64,
    },
    SetYLim {
        min: f64,
        max: f64,
    },
    Plot {
        x: Vec<f64>,
        y: Vec<f64>,
        style: PlotStyle,
    },
    SetXLabel {
        text: String,
        size_pt: Option<f64>,
    },
    SetYLabel {
        text: String,
        size_pt: Option<f64>,
    },
    SetXTickLabels {
        labels: Vec<String>,
    },
    SetYTickLabels {
        labels: Vec<String>,
    },
    Colorbar {
        target: ColorbarTarget,
        options: ColorbarOptions,
    },
}

impl PanelOp {
    /// Operation name, used in error reporting
    pub fn name(&self) -> &'static str {
        match self {
            PanelOp::SetXLim { .. } => "set_xlim",
            PanelOp::SetYLim { .. } => "set_ylim",
            PanelOp::Plot { .. } => "plot",
            PanelOp::SetXLabel { .. } => "set_xlabel",
            PanelOp::SetYLabel { .. } => "set_ylabel",
            PanelOp::SetXTickLabels { .. } => "set_xticklabels",
            PanelOp::SetYTickLabels { .. } => "set_yticklabels",
            PanelOp::Colorbar { .. } => "colorbar",
        }
    }
}
