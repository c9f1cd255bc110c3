//! Time-bounded linear transitions of the progress value.
//!
//! An [`AnimationRun`] is a pure value: it knows where it started, where it
//! ends and how long it takes, and answers "what is the value at `now`". The
//! host's frame clock supplies `now` through
//! [`ProgressBar::tick`](crate::ProgressBar::tick).

use std::time::{Duration, Instant};

/// Duration of a transition from `from` to `to`.
///
/// The distance is scaled against `max_progress`, so a full-scale transition
/// takes `full_scale` and shorter ones proportionally less. Rounded to the
/// nearest millisecond.
pub fn transition_duration(
    from: f32,
    to: f32,
    max_progress: f32,
    full_scale: Duration,
) -> Duration {
    if max_progress.is_nan() || max_progress <= 0.0 {
        return Duration::ZERO;
    }
    let millis =
        f64::from((to - from).abs()) / f64::from(max_progress) * full_scale.as_millis() as f64;
    if millis.is_finite() {
        Duration::from_millis(millis.round() as u64)
    } else {
        Duration::ZERO
    }
}

/// A single in-flight transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationRun {
    from: f32,
    to: f32,
    duration: Duration,
    started_at: Instant,
}

impl AnimationRun {
    /// Starts a run at `started_at`.
    pub fn new(from: f32, to: f32, duration: Duration, started_at: Instant) -> Self {
        Self {
            from,
            to,
            duration,
            started_at,
        }
    }

    /// Value at the start of the run.
    pub fn from(&self) -> f32 {
        self.from
    }

    /// Value the run ends on.
    pub fn to(&self) -> f32 {
        self.to
    }

    /// Total length of the run.
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Time since the start; zero for instants before it.
    pub fn elapsed(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.started_at)
    }

    /// Linear progress through the run in `[0, 1]`.
    pub fn progress_at(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (self.elapsed(now).as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }

    /// Interpolated value at `now`. Exactly `to` once finished.
    pub fn value_at(&self, now: Instant) -> f32 {
        if self.is_finished(now) {
            return self.to;
        }
        self.from + (self.to - self.from) * self.progress_at(now)
    }

    /// Whether the run has reached its end.
    pub fn is_finished(&self, now: Instant) -> bool {
        self.elapsed(now) >= self.duration
    }
}

/// Whether a transition is in flight.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub enum AnimationState {
    /// Nothing running; the progress value is at rest.
    #[default]
    Idle,
    /// A run is in flight.
    Animating(AnimationRun),
}

impl AnimationState {
    /// The in-flight run, if any.
    pub fn run(&self) -> Option<&AnimationRun> {
        match self {
            Self::Idle => None,
            Self::Animating(run) => Some(run),
        }
    }

    /// True while a run is in flight.
    pub fn is_animating(&self) -> bool {
        matches!(self, Self::Animating(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SPEED: Duration = Duration::from_millis(1500);

    #[test]
    fn duration_scales_with_distance() {
        assert_eq!(transition_duration(0.0, 50.0, 100.0, SPEED), Duration::from_millis(750));
        assert_eq!(transition_duration(100.0, 0.0, 100.0, SPEED), SPEED);
        assert_eq!(transition_duration(10.0, 10.0, 100.0, SPEED), Duration::ZERO);
    }

    #[test]
    fn duration_is_rounded_to_the_millisecond() {
        // 1/7 of 1500 ms is 214.28 ms.
        assert_eq!(transition_duration(0.0, 1.0, 7.0, SPEED), Duration::from_millis(214));
        assert_eq!(transition_duration(0.0, 2.0, 7.0, SPEED), Duration::from_millis(429));
    }

    #[test]
    fn value_is_linear_in_time() {
        let start = Instant::now();
        let run = AnimationRun::new(0.0, 50.0, Duration::from_millis(750), start);

        assert_eq!(run.value_at(start), 0.0);
        let halfway = run.value_at(start + Duration::from_millis(375));
        assert!((halfway - 25.0).abs() < 1e-3);
        assert!(!run.is_finished(start + Duration::from_millis(749)));
        assert_eq!(run.value_at(start + Duration::from_millis(750)), 50.0);
        assert_eq!(run.value_at(start + Duration::from_secs(10)), 50.0);
    }

    #[test]
    fn downward_runs_interpolate_backwards() {
        let start = Instant::now();
        let run = AnimationRun::new(80.0, 20.0, Duration::from_millis(600), start);
        let value = run.value_at(start + Duration::from_millis(200));
        assert!((value - 60.0).abs() < 1e-3);
    }

    #[test]
    fn zero_length_run_finishes_immediately() {
        let start = Instant::now();
        let run = AnimationRun::new(3.0, 4.0, Duration::ZERO, start);
        assert!(run.is_finished(start));
        assert_eq!(run.value_at(start), 4.0);
        assert_eq!(run.progress_at(start), 1.0);
    }

    #[test]
    fn instants_before_the_start_clamp_to_zero() {
        let start = Instant::now() + Duration::from_secs(1);
        let run = AnimationRun::new(0.0, 10.0, Duration::from_millis(100), start);
        assert_eq!(run.elapsed(Instant::now()), Duration::ZERO);
        assert_eq!(run.value_at(Instant::now()), 0.0);
    }
}
