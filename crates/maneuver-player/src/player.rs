//! Frame-paced playback of a maneuver.

use std::time::Duration;

use log::{debug, info};
use maneuver_path::{Maneuver, RawManeuver};

use crate::config::PlayerConfig;
use crate::sink::PointerSink;

/// Plays one maneuver at a time, one point per frame.
pub trait ManeuverPlayer {
    /// Take ownership of `maneuver` and show its first point right away.
    fn play(&mut self, maneuver: Maneuver);

    /// Discard the current maneuver, finished or not.
    fn stop(&mut self);

    /// Let `elapsed` time pass, updating the pointer when a frame is due.
    fn run(&mut self, elapsed: Duration);

    /// Whether a maneuver is playing or a delay is pending.
    fn is_running(&self) -> bool;

    /// Hold off the next update for `ms` milliseconds.
    fn delay(&mut self, ms: u64);
}

/// A [`ManeuverPlayer`] without a window: time is supplied by the caller
/// and points go to a [`PointerSink`].
pub struct HeadlessPlayer<S: PointerSink> {
    sink: S,
    config: PlayerConfig,
    maneuver: Option<Maneuver>,
    since_update: Duration,
    time_till_next_update: Duration,
    waiting: bool,
    frames: u64,
}

impl<S: PointerSink> HeadlessPlayer<S> {
    pub fn new(mut sink: S, config: PlayerConfig) -> Self {
        sink.set_radius(config.pointer_radius);
        sink.hide();
        Self {
            sink,
            config,
            maneuver: None,
            since_update: Duration::ZERO,
            time_till_next_update: config.initial_delay(),
            waiting: true,
            frames: 0,
        }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Number of points shown so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Show the next point, or release the maneuver once it has finished.
    fn draw_pointer_at_next_point(&mut self) -> bool {
        let Some(maneuver) = self.maneuver.as_mut() else {
            return false;
        };
        if maneuver.is_finished() {
            info!("maneuver finished after {} frames", self.frames);
            self.sink.hide();
            self.maneuver = None;
            return false;
        }
        let point = maneuver.next_point();
        self.sink.show(point);
        self.frames += 1;
        self.since_update = Duration::ZERO;
        self.time_till_next_update = self.config.frame_interval();
        true
    }
}

impl<S: PointerSink> ManeuverPlayer for HeadlessPlayer<S> {
    fn play(&mut self, maneuver: Maneuver) {
        debug!("playing {} maneuver", maneuver.kind());
        self.maneuver = Some(maneuver);
        self.waiting = false;
        self.frames = 0;
        self.draw_pointer_at_next_point();
    }

    fn stop(&mut self) {
        if self.maneuver.take().is_some() {
            debug!("maneuver stopped after {} frames", self.frames);
        }
        self.sink.hide();
    }

    fn run(&mut self, elapsed: Duration) {
        self.since_update += elapsed;
        if self.since_update < self.time_till_next_update {
            return;
        }
        if self.maneuver.is_some() {
            self.draw_pointer_at_next_point();
        }
        if self.waiting {
            self.waiting = false;
            self.since_update = Duration::ZERO;
        }
    }

    fn is_running(&self) -> bool {
        self.maneuver.is_some() || self.waiting
    }

    fn delay(&mut self, ms: u64) {
        debug!("delaying next update by {} ms", ms);
        self.waiting = true;
        self.since_update = Duration::ZERO;
        self.time_till_next_update = Duration::from_millis(ms);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::TraceRecorder;
    use maneuver_math::dvec2;
    use maneuver_path::LinearManeuver;

    const FRAME: Duration = Duration::from_millis(33);

    fn line(steps: usize) -> Maneuver {
        LinearManeuver::new(dvec2(0.0, 0.0), dvec2(steps as f64, 0.0), steps)
            .unwrap()
            .into()
    }

    fn player() -> HeadlessPlayer<TraceRecorder> {
        HeadlessPlayer::new(TraceRecorder::new(), PlayerConfig::default())
    }

    #[test]
    fn test_waiting_until_first_update() {
        let mut p = player();
        assert!(p.is_running());
        p.run(Duration::ZERO);
        assert!(!p.is_running());
    }

    #[test]
    fn test_play_shows_first_point_immediately() {
        let mut p = player();
        p.play(line(3));
        assert_eq!(p.frames(), 1);
        assert_eq!(p.sink().points, vec![dvec2(1.0, 0.0)]);
        assert!(p.sink().visible);
    }

    #[test]
    fn test_one_point_per_frame_then_release() {
        let mut p = player();
        p.play(line(3));

        // not due yet
        p.run(Duration::from_millis(10));
        assert_eq!(p.frames(), 1);

        p.run(Duration::from_millis(23));
        p.run(FRAME);
        assert_eq!(p.frames(), 3);
        assert!(p.is_running());

        // the frame after the last point releases the maneuver
        p.run(FRAME);
        assert!(!p.is_running());
        assert!(!p.sink().visible);
        assert!(p.sink().points.last().unwrap().abs_diff_eq(dvec2(3.0, 0.0), 1e-9));
        assert_eq!(p.sink().points.len(), 3);
    }

    #[test]
    fn test_stop_discards_unfinished() {
        let mut p = player();
        p.play(line(100));
        p.run(FRAME);
        p.stop();
        assert!(!p.is_running());
        p.run(FRAME);
        assert_eq!(p.frames(), 2);
        assert!(!p.sink().visible);
    }

    #[test]
    fn test_delay_holds_next_update() {
        let mut p = player();
        p.play(line(5));
        p.delay(100);
        assert!(p.is_running());

        p.run(Duration::from_millis(99));
        assert_eq!(p.frames(), 1);
        p.run(Duration::from_millis(1));
        assert_eq!(p.frames(), 2);
    }

    #[test]
    fn test_delay_without_maneuver_counts_as_running() {
        let mut p = player();
        p.run(Duration::ZERO);
        p.delay(50);
        assert!(p.is_running());
        p.run(Duration::from_millis(50));
        assert!(!p.is_running());
    }

    #[test]
    fn test_initial_delay_from_config() {
        let config = PlayerConfig {
            initial_delay_ms: 200,
            ..PlayerConfig::default()
        };
        let mut p = HeadlessPlayer::new(TraceRecorder::new(), config);
        p.run(Duration::from_millis(150));
        assert!(p.is_running());
        p.run(Duration::from_millis(50));
        assert!(!p.is_running());
    }

    #[test]
    fn test_pointer_radius_from_config() {
        assert_eq!(player().sink().radius, 2.0);

        let config = PlayerConfig::from_json_str(r#"{"pointer_radius": 7.5}"#).unwrap();
        let p = HeadlessPlayer::new(TraceRecorder::new(), config);
        assert_eq!(p.sink().radius, 7.5);
        assert!(!p.sink().visible);
    }

    #[test]
    fn test_borrowed_sink() {
        let mut recorder = TraceRecorder::new();
        {
            let mut p = HeadlessPlayer::new(&mut recorder, PlayerConfig::default());
            p.play(line(2));
            p.run(FRAME);
            p.run(FRAME);
        }
        assert_eq!(recorder.points.len(), 2);
        assert_eq!(recorder.hides, 2);
    }
}
