//! Integration tests for the figure render loop
//!
//! These tests drive the full render / measure / correct cycle with a
//! simulated drawing backend. Its surfaces report their creation rectangle
//! inflated by fixed physical overhangs, standing in for axis labels, tick
//! labels, and colorbars, so the tests can check the corrected layout keeps
//! panels clear of each other and inside the figure.

use figure_layout::{
    ColorbarOptions, DrawBackend, Figure, LayoutError, PanelOp, PlotStyle, RenderState, Surface,
};
use figure_model::{FigureSpec, PhysRect, RenderContext};

const EPS: f64 = 1e-9;

/// Physical label overhang around a panel, in inches
#[derive(Debug, Clone, Copy, Default)]
struct Overhang {
    left: f64,
    right: f64,
    top: f64,
    bottom: f64,
}

impl Overhang {
    fn right(amount: f64) -> Self {
        Self {
            right: amount,
            ..Self::default()
        }
    }

    fn below(amount: f64) -> Self {
        Self {
            bottom: amount,
            ..Self::default()
        }
    }
}

#[derive(Debug)]
struct SimSurface {
    rect: PhysRect,
    overhang: Overhang,
    applied: Vec<&'static str>,
    reject: Option<&'static str>,
}

impl Surface for SimSurface {
    fn apply(&mut self, op: &PanelOp) -> Result<(), LayoutError> {
        if self.reject == Some(op.name()) {
            return Err(LayoutError::UnsupportedOperation(op.name().to_string()));
        }
        self.applied.push(op.name());
        Ok(())
    }

    fn tight_bounding_box(&self) -> PhysRect {
        PhysRect::new(
            self.rect.x - self.overhang.left,
            self.rect.y - self.overhang.bottom,
            self.rect.width + self.overhang.left + self.overhang.right,
            self.rect.height + self.overhang.top + self.overhang.bottom,
        )
    }
}

/// Simulated backend. Overhangs are assigned per panel by creation order
/// within a pass (row-major, matching the grid's traversal), so a panel
/// keeps the same simulated labels on every pass.
struct SimBackend {
    overhangs: Vec<Overhang>,
    reject: Option<&'static str>,
    created: usize,
    discarded: usize,
    context_depth: i32,
    max_context_depth: i32,
}

impl SimBackend {
    fn new(overhangs: Vec<Overhang>) -> Self {
        Self {
            overhangs,
            reject: None,
            created: 0,
            discarded: 0,
            context_depth: 0,
            max_context_depth: 0,
        }
    }

    fn uniform(overhang: Overhang) -> Self {
        Self::new(vec![overhang])
    }
}

impl DrawBackend for SimBackend {
    type Surface = SimSurface;

    fn create_surface(&mut self, rect: PhysRect) -> Result<SimSurface, LayoutError> {
        if rect.width <= 0.0 || rect.height <= 0.0 {
            return Err(LayoutError::Backend(format!(
                "degenerate surface rect {rect:?}"
            )));
        }
        let overhang = self.overhangs[self.created % self.overhangs.len()];
        self.created += 1;
        Ok(SimSurface {
            rect,
            overhang,
            applied: Vec::new(),
            reject: self.reject,
        })
    }

    fn discard(&mut self, _surface: SimSurface) {
        self.discarded += 1;
    }

    fn apply_context(&mut self, _context: &RenderContext) {
        self.context_depth += 1;
        self.max_context_depth = self.max_context_depth.max(self.context_depth);
    }

    fn restore_context(&mut self) {
        self.context_depth -= 1;
    }
}

fn two_column_spec() -> FigureSpec {
    FigureSpec::new(4.0, &[1.0, 1.0], &[1.0]).unwrap()
}

#[test]
fn overflowing_column_gets_the_expected_margin() {
    // Left panel's content reaches 0.1 in past its nominal right edge on a
    // 4 in figure with a 6 pt inner margin.
    let mut backend = SimBackend::new(vec![Overhang::right(0.1), Overhang::default()]);
    let mut figure = Figure::new(two_column_spec());
    let rendered = figure.render(&mut backend).unwrap();

    let expected = 0.1 / 4.0 + 6.0 / 72.0 / 4.0;
    assert!((rendered.margins.h[1] - expected).abs() < EPS);
    assert!(rendered.margins.h[0].abs() < EPS);
    assert!(rendered.margins.h[2].abs() < EPS);
    assert_eq!(figure.state(), RenderState::Finalized);
}

#[test]
fn corrected_panels_do_not_overlap() {
    let mut backend = SimBackend::new(vec![Overhang::right(0.1), Overhang::default()]);
    let mut figure = Figure::new(two_column_spec());
    let rendered = figure.render(&mut backend).unwrap();

    let inner_h = 6.0 / 72.0 / 4.0;
    let left = &rendered.cells[0][0].bbox;
    let right = &rendered.cells[0][1].bbox;
    assert!(right.x - left.right() >= inner_h - EPS);
}

#[test]
fn single_panel_with_exact_fit_needs_no_margins() {
    let spec = FigureSpec::new(4.0, &[1.0], &[1.0]).unwrap();
    let mut backend = SimBackend::uniform(Overhang::default());
    let mut figure = Figure::new(spec).with_correction_passes(3);
    let rendered = figure.render(&mut backend).unwrap();

    assert!(rendered.margins.h.iter().all(|m| m.abs() < EPS));
    assert!(rendered.margins.v.iter().all(|m| m.abs() < EPS));
    let bbox = &rendered.cells[0][0].bbox;
    assert!((bbox.width - 1.0).abs() < EPS);
    assert!((bbox.height - 1.0).abs() < EPS);
}

#[test]
fn overlapping_rows_are_pushed_apart() {
    // Top row's tick labels hang 0.2 in below its nominal bottom edge.
    let spec = FigureSpec::new(4.0, &[1.0], &[1.0, 1.0]).unwrap();
    let mut backend = SimBackend::new(vec![Overhang::below(0.2), Overhang::default()]);
    let mut figure = Figure::new(spec);
    let rendered = figure.render(&mut backend).unwrap();

    let inner_v = 6.0 / 72.0 / 4.0;
    let expected = 0.2 / 4.0 + inner_v;
    assert!((rendered.margins.v[1] - expected).abs() < EPS);

    let top = &rendered.cells[0][0].bbox;
    let bottom = &rendered.cells[1][0].bbox;
    assert!(top.y - bottom.top() >= inner_v - EPS);
    // Nothing falls below the figure.
    assert!(bottom.y >= -EPS);
}

#[test]
fn outer_margins_reserve_edge_space() {
    let spec = FigureSpec::new(4.0, &[1.0], &[1.0])
        .unwrap()
        .with_outer_margins_pt(12.0, 12.0);
    let mut backend = SimBackend::uniform(Overhang::default());
    let mut figure = Figure::new(spec);
    let rendered = figure.render(&mut backend).unwrap();

    let expected = 12.0 / 72.0 / 4.0;
    assert!((rendered.margins.h[0] - expected).abs() < EPS);
    assert!((rendered.margins.v[0] - expected).abs() < EPS);
    // The panel itself stays inside the figure.
    let bbox = &rendered.cells[0][0].bbox;
    assert!(bbox.right() <= 1.0 + EPS);
    assert!(bbox.y >= -EPS);
}

#[test]
fn margins_only_grow_with_more_passes() {
    let overhangs = vec![Overhang::right(0.08), Overhang::below(0.12)];
    let spec = FigureSpec::new(4.0, &[1.0, 1.0], &[1.0]).unwrap();

    let mut one_pass_backend = SimBackend::new(overhangs.clone());
    let one = Figure::new(spec.clone())
        .with_correction_passes(1)
        .render(&mut one_pass_backend)
        .unwrap();

    let mut three_pass_backend = SimBackend::new(overhangs);
    let three = Figure::new(spec)
        .with_correction_passes(3)
        .render(&mut three_pass_backend)
        .unwrap();

    for (a, b) in one.margins.h.iter().zip(&three.margins.h) {
        assert!(b >= &(a - EPS));
    }
    for (a, b) in one.margins.v.iter().zip(&three.margins.v) {
        assert!(b >= &(a - EPS));
    }
}

#[test]
fn intermediate_surfaces_are_discarded() {
    let mut backend = SimBackend::uniform(Overhang::right(0.05));
    let mut figure = Figure::new(two_column_spec()).with_correction_passes(2);
    let rendered = figure.render(&mut backend).unwrap();

    // Two measurement passes of two panels each were discarded; only the
    // final pass's surfaces reach the caller.
    assert_eq!(backend.created, 6);
    assert_eq!(backend.discarded, 4);
    assert_eq!(rendered.cells.iter().map(|r| r.len()).sum::<usize>(), 2);
}

#[test]
fn render_context_is_scoped_to_the_run() {
    let mut backend = SimBackend::uniform(Overhang::default());
    let mut figure = Figure::new(two_column_spec());
    figure.render(&mut backend).unwrap();

    assert_eq!(backend.max_context_depth, 1);
    assert_eq!(backend.context_depth, 0);
}

#[test]
fn context_is_restored_when_an_operation_fails() {
    let mut backend = SimBackend::uniform(Overhang::default());
    backend.reject = Some("plot");
    let mut figure = Figure::new(two_column_spec());
    figure
        .panel_mut(0, 0)
        .plot(vec![0.0, 1.0], vec![0.0, 1.0], PlotStyle::default());

    let err = figure.render(&mut backend).unwrap_err();
    assert!(matches!(err, LayoutError::UnsupportedOperation(name) if name == "plot"));
    assert_eq!(backend.context_depth, 0);
    assert_eq!(figure.state(), RenderState::Unrendered);
}

#[test]
fn replay_reaches_the_final_surfaces_every_pass() {
    let mut backend = SimBackend::uniform(Overhang::default());
    let mut figure = Figure::new(two_column_spec());
    figure.panel_mut(0, 0).set_xlim(0.0, 10.0);
    figure.panel_mut(0, 0).set_xlabel("x");
    figure.panel_mut(0, 1).colorbar(ColorbarOptions::default());

    let rendered = figure.render(&mut backend).unwrap();
    // The final surfaces saw the full queues; the colorbar placeholder
    // resolved to panel (0, 1)'s own surface.
    assert_eq!(
        rendered.cells[0][0].surface.applied,
        vec!["set_xlim", "set_xlabel"]
    );
    assert_eq!(rendered.cells[0][1].surface.applied, vec!["colorbar"]);
}

#[test]
fn runaway_margins_surface_as_overflow() {
    // Demanded spacing exceeds the whole figure width.
    let mut backend = SimBackend::new(vec![Overhang::right(5.0), Overhang::default()]);
    let mut figure = Figure::new(two_column_spec());
    let err = figure.render(&mut backend).unwrap_err();
    assert!(matches!(err, LayoutError::Overflow(_)));
    assert_eq!(backend.context_depth, 0);
}

#[test]
fn rendering_twice_gives_the_same_layout() {
    let spec = FigureSpec::new(4.0, &[1.0, 2.0], &[1.0]).unwrap();
    let mut figure = Figure::new(spec);
    figure.panel_mut(0, 0).set_ylabel("signal");

    let mut first_backend = SimBackend::uniform(Overhang::right(0.05));
    let first = figure.render(&mut first_backend).unwrap();
    let mut second_backend = SimBackend::uniform(Overhang::right(0.05));
    let second = figure.render(&mut second_backend).unwrap();

    assert_eq!(first.margins, second.margins);
    assert_eq!(
        first.cells[0][0].surface.applied,
        second.cells[0][0].surface.applied
    );
}
