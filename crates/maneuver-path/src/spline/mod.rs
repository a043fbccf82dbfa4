//! Spline cursors: sources of overlapping four-point windows.

mod points;

use maneuver_math::Quad;

pub use points::PointSpline;

/// A cursor that hands out consecutive [`Quad`]s of a spline.
pub trait SplineManeuver: Send + Sync {
    /// Return the quad at the cursor and advance by one control point.
    ///
    /// Consecutive quads overlap by three points. Callers check
    /// [`is_finished`](Self::is_finished) first, except for the priming call
    /// right after construction or [`reset`](Self::reset).
    fn next_quad(&mut self) -> Quad;

    /// Whether every quad has been handed out.
    fn is_finished(&self) -> bool;

    /// Move the cursor back to the first quad.
    fn reset(&mut self);
}
