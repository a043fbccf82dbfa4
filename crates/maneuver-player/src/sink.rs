//! Pointer sinks: where a player sends the points it plays.

use maneuver_math::Point;

/// Receives the pointer position on every frame.
pub trait PointerSink {
    /// Move the pointer to `point` and make it visible.
    fn show(&mut self, point: Point);

    /// Make the pointer invisible.
    fn hide(&mut self);

    /// Size the pointer, in the coordinate units of the shown points.
    fn set_radius(&mut self, radius: f64);
}

impl<S: PointerSink + ?Sized> PointerSink for &mut S {
    fn show(&mut self, point: Point) {
        (**self).show(point);
    }

    fn hide(&mut self) {
        (**self).hide();
    }

    fn set_radius(&mut self, radius: f64) {
        (**self).set_radius(radius);
    }
}

/// Records everything a player shows.
#[derive(Debug, Clone, Default)]
pub struct TraceRecorder {
    pub points: Vec<Point>,
    pub hides: usize,
    pub visible: bool,
    pub radius: f64,
}

impl TraceRecorder {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PointerSink for TraceRecorder {
    fn show(&mut self, point: Point) {
        self.points.push(point);
        self.visible = true;
    }

    fn hide(&mut self) {
        self.hides += 1;
        self.visible = false;
    }

    fn set_radius(&mut self, radius: f64) {
        self.radius = radius;
    }
}
