//! Raw point generators and their combinators.

mod linear;
mod repeat;
mod sequence;
mod spline;
mod sum;
mod transform;

use maneuver_math::Point;

pub use linear::LinearManeuver;
pub use repeat::RepeatManeuver;
pub use sequence::SequenceManeuver;
pub use spline::SplineRawManeuver;
pub use sum::PointwiseSumManeuver;
pub use transform::TransformManeuver;

/// A pull-based generator of 2-D points, one per tick.
pub trait RawManeuver: Send + Sync {
    /// Advance one tick and return the point for it.
    fn next_point(&mut self) -> Point;

    /// Whether the generator has produced its final point.
    fn is_finished(&self) -> bool;

    /// Return to the initial state so the same points are produced again.
    fn reset(&mut self);

    /// Iterate over the remaining points until the generator finishes.
    fn points(&mut self) -> PointIter<'_, Self>
    where
        Self: Sized,
    {
        PointIter { maneuver: self }
    }
}

/// Iterator over the remaining points of a generator.
///
/// Never steps a generator past [`RawManeuver::is_finished`]; infinite for
/// generators that never finish.
pub struct PointIter<'a, M: RawManeuver> {
    maneuver: &'a mut M,
}

impl<'a, M: RawManeuver> Iterator for PointIter<'a, M> {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        if self.maneuver.is_finished() {
            return None;
        }
        Some(self.maneuver.next_point())
    }
}

/// The closed set of generator kinds.
///
/// Combinators own their children, so a maneuver is always a tree.
#[derive(Debug, Clone)]
pub enum Maneuver {
    Spline(SplineRawManeuver),
    Linear(LinearManeuver),
    Repeat(RepeatManeuver),
    Sequence(SequenceManeuver),
    Sum(PointwiseSumManeuver),
    Transform(TransformManeuver),
}

impl Maneuver {
    /// Short name of the variant, for logging.
    pub fn kind(&self) -> &'static str {
        match self {
            Maneuver::Spline(_) => "spline",
            Maneuver::Linear(_) => "linear",
            Maneuver::Repeat(_) => "repeat",
            Maneuver::Sequence(_) => "sequence",
            Maneuver::Sum(_) => "sum",
            Maneuver::Transform(_) => "transform",
        }
    }
}

impl RawManeuver for Maneuver {
    fn next_point(&mut self) -> Point {
        match self {
            Maneuver::Spline(m) => m.next_point(),
            Maneuver::Linear(m) => m.next_point(),
            Maneuver::Repeat(m) => m.next_point(),
            Maneuver::Sequence(m) => m.next_point(),
            Maneuver::Sum(m) => m.next_point(),
            Maneuver::Transform(m) => m.next_point(),
        }
    }

    fn is_finished(&self) -> bool {
        match self {
            Maneuver::Spline(m) => m.is_finished(),
            Maneuver::Linear(m) => m.is_finished(),
            Maneuver::Repeat(m) => m.is_finished(),
            Maneuver::Sequence(m) => m.is_finished(),
            Maneuver::Sum(m) => m.is_finished(),
            Maneuver::Transform(m) => m.is_finished(),
        }
    }

    fn reset(&mut self) {
        match self {
            Maneuver::Spline(m) => m.reset(),
            Maneuver::Linear(m) => m.reset(),
            Maneuver::Repeat(m) => m.reset(),
            Maneuver::Sequence(m) => m.reset(),
            Maneuver::Sum(m) => m.reset(),
            Maneuver::Transform(m) => m.reset(),
        }
    }
}

impl From<SplineRawManeuver> for Maneuver {
    fn from(m: SplineRawManeuver) -> Self {
        Maneuver::Spline(m)
    }
}

impl From<LinearManeuver> for Maneuver {
    fn from(m: LinearManeuver) -> Self {
        Maneuver::Linear(m)
    }
}

impl From<RepeatManeuver> for Maneuver {
    fn from(m: RepeatManeuver) -> Self {
        Maneuver::Repeat(m)
    }
}

impl From<SequenceManeuver> for Maneuver {
    fn from(m: SequenceManeuver) -> Self {
        Maneuver::Sequence(m)
    }
}

impl From<PointwiseSumManeuver> for Maneuver {
    fn from(m: PointwiseSumManeuver) -> Self {
        Maneuver::Sum(m)
    }
}

impl From<TransformManeuver> for Maneuver {
    fn from(m: TransformManeuver) -> Self {
        Maneuver::Transform(m)
    }
}
