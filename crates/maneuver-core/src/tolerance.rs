/// Slack used for segment-boundary and finish detection while stepping.
pub const STEP_EPSILON: f64 = 1e-4;

/// Tolerances for the parametric stepping of maneuvers.
#[derive(Debug, Clone, Copy, serde::Serialize, serde::Deserialize)]
pub struct Tolerance {
    /// Slack applied to accumulated parameters (in parameter units)
    pub step: f64,
}

impl Tolerance {
    /// Stepping tolerance for a generator advancing by `rate` per tick.
    ///
    /// The slack is `STEP_EPSILON`, capped at a quarter of the rate so that it
    /// never spans a whole tick on long traversals.
    pub fn for_rate(rate: f64) -> Self {
        Self {
            step: STEP_EPSILON.min(rate / 4.0),
        }
    }

    /// Integer part of an accumulated parameter, rounding values that sit just
    /// below an integer up to it.
    pub fn step_floor(self, t: f64) -> f64 {
        (t + self.step).floor()
    }

    /// Check if an accumulated parameter has reached `target`
    pub fn has_reached(self, t: f64, target: f64) -> bool {
        t + self.step >= target
    }
}
