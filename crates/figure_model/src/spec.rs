//! Figure specification
//!
//! `FigureSpec` captures everything the caller decides up front: the
//! physical width (directly or via a journal preset), aspect ratio, panel
//! weights, and spacing. Weights are validated and normalized at
//! construction so layout itself never sees a malformed grid. The spec is
//! treated as immutable once a layout run starts.

use crate::error::{Result, SpecError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Journal column-width presets, in inches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WidthPreset {
    /// Physical Review single column (3 3/8 in)
    Pr,
    /// Physical Review full page width
    PrFull,
    /// eLife figure width
    ELife,
    /// Annual Reviews figure width
    AnnRev,
}

impl WidthPreset {
    /// Look up a preset by its caller-facing name
    pub fn from_name(name: &str) -> Result<Self> {
        match name {
            "PR" => Ok(WidthPreset::Pr),
            "PR_full" => Ok(WidthPreset::PrFull),
            "eLife" => Ok(WidthPreset::ELife),
            "AnnRev" => Ok(WidthPreset::AnnRev),
            other => Err(SpecError::UnknownFigurePreset(other.to_string())),
        }
    }

    /// Width in inches
    pub fn width_in(&self) -> f64 {
        match self {
            WidthPreset::Pr => 3.0 + 3.0 / 8.0,
            WidthPreset::PrFull => 7.08,
            WidthPreset::ELife => 5.6,
            WidthPreset::AnnRev => 5.06,
        }
    }
}

/// Tick mark direction applied for the duration of a render run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TickDirection {
    #[default]
    In,
    Out,
}

/// Rendering-context options scoped to a single render run.
///
/// The backend applies these when a run starts and restores its previous
/// configuration when the run ends; they are never ambient state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RenderContext {
    pub tick_direction: TickDirection,
    /// Backend-specific overrides, passed through verbatim
    pub overrides: BTreeMap<String, String>,
}

/// Normalize a weight sequence so it sums to 1.
///
/// Fails on an empty sequence or any non-positive entry. Normalizing an
/// already-normalized sequence leaves it unchanged.
pub fn normalize_weights(weights: &[f64]) -> Result<Vec<f64>> {
    if weights.is_empty() {
        return Err(SpecError::InvalidLayoutSpec(
            "weight sequence is empty".to_string(),
        ));
    }
    if weights.iter().any(|w| !(*w > 0.0)) {
        return Err(SpecError::InvalidLayoutSpec(format!(
            "weights must be positive, got {:?}",
            weights
        )));
    }
    let total: f64 = weights.iter().sum();
    Ok(weights.iter().map(|w| w / total).collect())
}

/// Complete specification for a multi-panel figure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FigureSpec {
    /// Figure width in inches
    pub width_in: f64,
    /// Height divided by width
    pub aspect_ratio: f64,
    /// Axis label font size in points
    pub axis_label_size_pt: f64,
    /// Panel label font size in points
    pub panel_label_size_pt: f64,
    /// Normalized column weights, left to right
    pub column_weights: Vec<f64>,
    /// Normalized row weights, top to bottom
    pub row_weights: Vec<f64>,
    /// Required space between adjacent panels, in points
    pub inner_margin_pt: f64,
    /// Extra space reserved at the left figure edge, in points
    pub outer_margin_left_pt: f64,
    /// Extra space reserved at the top figure edge, in points
    pub outer_margin_top_pt: f64,
    /// Rendering-context options applied for the duration of a run
    pub render_context: RenderContext,
}

impl FigureSpec {
    /// Create a spec with the given width and panel weights.
    ///
    /// Weights are normalized here; a zero-length sequence or a
    /// non-positive entry fails fast instead of surfacing mid-render.
    pub fn new(width_in: f64, column_weights: &[f64], row_weights: &[f64]) -> Result<Self> {
        Ok(Self {
            width_in,
            aspect_ratio: 1.0,
            axis_label_size_pt: 12.0,
            panel_label_size_pt: 12.0,
            column_weights: normalize_weights(column_weights)?,
            row_weights: normalize_weights(row_weights)?,
            inner_margin_pt: 6.0,
            outer_margin_left_pt: 0.0,
            outer_margin_top_pt: 0.0,
            render_context: RenderContext::default(),
        })
    }

    /// Create a spec using a named journal width preset
    pub fn with_preset(name: &str, column_weights: &[f64], row_weights: &[f64]) -> Result<Self> {
        Self::new(
            WidthPreset::from_name(name)?.width_in(),
            column_weights,
            row_weights,
        )
    }

    /// Set the aspect ratio (height / width)
    pub fn with_aspect_ratio(mut self, aspect_ratio: f64) -> Self {
        self.aspect_ratio = aspect_ratio;
        self
    }

    /// Set the space required between adjacent panels
    pub fn with_inner_margin_pt(mut self, points: f64) -> Self {
        self.inner_margin_pt = points;
        self
    }

    /// Reserve space at the left and top figure edges
    pub fn with_outer_margins_pt(mut self, left: f64, top: f64) -> Self {
        self.outer_margin_left_pt = left;
        self.outer_margin_top_pt = top;
        self
    }

    /// Set the axis label font size
    pub fn with_axis_label_size_pt(mut self, points: f64) -> Self {
        self.axis_label_size_pt = points;
        self
    }

    /// Set the panel label font size
    pub fn with_panel_label_size_pt(mut self, points: f64) -> Self {
        self.panel_label_size_pt = points;
        self
    }

    /// Set the rendering-context options for the run
    pub fn with_render_context(mut self, context: RenderContext) -> Self {
        self.render_context = context;
        self
    }

    /// Figure height in inches
    pub fn height_in(&self) -> f64 {
        self.aspect_ratio * self.width_in
    }

    /// Number of panel rows
    pub fn rows(&self) -> usize {
        self.row_weights.len()
    }

    /// Number of panel columns
    pub fn columns(&self) -> usize {
        self.column_weights.len()
    }

    /// True when either outer edge has reserved space
    pub fn has_outer_margins(&self) -> bool {
        self.outer_margin_left_pt > 0.0 || self.outer_margin_top_pt > 0.0
    }
}
