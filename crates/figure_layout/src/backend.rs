//! Drawing backend capability traits
//!
//! The layout engine never draws anything itself. A backend supplies real
//! drawing surfaces positioned in physical units, executes replayed panel
//! operations against them, and measures the tight extent of what was
//! drawn. The engine only measures and repositions these opaque regions.

use crate::error::Result;
use crate::ops::PanelOp;
use figure_model::{PhysRect, RenderContext};

/// A real drawing surface created by a backend for one panel
pub trait Surface {
    /// Execute one deferred operation against this surface.
    ///
    /// Colorbar operations received here target this surface; the virtual
    /// panel's own-panel placeholder was resolved during replay. An
    /// operation the backend does not support fails with
    /// `LayoutError::UnsupportedOperation`.
    fn apply(&mut self, op: &PanelOp) -> Result<()>;

    /// Tight bounding box of everything drawn so far, in physical units.
    ///
    /// Includes label, tick, and colorbar overflow reaching outside the
    /// surface's nominal rectangle.
    fn tight_bounding_box(&self) -> PhysRect;
}

/// Factory for drawing surfaces
pub trait DrawBackend {
    type Surface: Surface;

    /// Create a surface covering the given physical rectangle
    fn create_surface(&mut self, rect: PhysRect) -> Result<Self::Surface>;

    /// Release a surface created during a non-final pass.
    ///
    /// Provisional surfaces used provisional margins and must never remain
    /// visible in an interactive context.
    fn discard(&mut self, surface: Self::Surface);

    /// Apply rendering-context options (tick direction, overrides)
    fn apply_context(&mut self, context: &RenderContext);

    /// Restore whatever `apply_context` changed
    fn restore_context(&mut self);

    /// Run `f` with the given context applied, restoring the previous
    /// configuration afterwards even when `f` fails.
    fn with_context<R>(
        &mut self,
        context: &RenderContext,
        f: impl FnOnce(&mut Self) -> Result<R>,
    ) -> Result<R>
    where
        Self: Sized,
    {
        self.apply_context(context);
        let result = f(self);
        self.restore_context();
        result
    }
}
