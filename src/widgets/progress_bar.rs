use std::time::Duration;
use tokio::time::Instant;

/// Fraction of the active time that has elapsed, clamped to `0.0..=1.0`.
///
/// A zero active time counts as fully elapsed.
pub fn indicator_progress(elapsed: Duration, active: Duration) -> f32 {
    if active.is_zero() {
        return 1.0;
    }
    (elapsed.as_secs_f64() / active.as_secs_f64()).min(1.0) as f32
}

/// Width of the shrinking indicator in percent.
pub fn indicator_width(elapsed: Duration, active: Duration) -> f32 {
    (1.0 - indicator_progress(elapsed, active)) * 100.0
}

/// Shrinking indicator state
///
/// The clock starts on the first frame, not at creation, so a late first
/// frame does not eat into the visible time.
#[derive(Debug, Clone)]
pub struct Indicator {
    /// Timestamp of the first frame
    start: Option<Instant>,
    /// Duration the indicator takes to reach zero
    active: Duration,
    /// Current width in percent
    width: f32,
}

impl Indicator {
    pub fn new(active: Duration) -> Self {
        Self {
            start: None,
            active,
            width: 100.0,
        }
    }

    /// Advance to `now`. Returns true once the active time has elapsed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let start = *self.start.get_or_insert(now);
        let elapsed = now.saturating_duration_since(start);
        self.width = indicator_width(elapsed, self.active);
        elapsed >= self.active
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn started(&self) -> bool {
        self.start.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_bounds() {
        let active = Duration::from_millis(3000);
        assert_eq!(indicator_progress(Duration::ZERO, active), 0.0);
        assert!((indicator_progress(Duration::from_millis(1500), active) - 0.5).abs() < f32::EPSILON);
        assert_eq!(indicator_progress(Duration::from_millis(3000), active), 1.0);
        assert_eq!(indicator_progress(Duration::from_secs(60), active), 1.0);
    }

    #[test]
    fn test_zero_active_time() {
        assert_eq!(indicator_progress(Duration::ZERO, Duration::ZERO), 1.0);
        assert_eq!(indicator_width(Duration::ZERO, Duration::ZERO), 0.0);
    }

    #[test]
    fn test_width_is_non_increasing() {
        let active = Duration::from_millis(3000);
        let mut previous = f32::MAX;
        for ms in (0..=3500).step_by(7) {
            let width = indicator_width(Duration::from_millis(ms), active);
            assert!(width <= previous, "width grew at {ms}ms");
            assert!((0.0..=100.0).contains(&width));
            previous = width;
        }
        assert_eq!(indicator_width(active, active), 0.0);
    }

    #[test]
    fn test_indicator_starts_on_first_frame() {
        let active = Duration::from_millis(100);
        let mut indicator = Indicator::new(active);
        assert!(!indicator.started());
        assert_eq!(indicator.width(), 100.0);

        let t0 = Instant::now();
        assert!(!indicator.tick(t0 + Duration::from_millis(40)));
        assert_eq!(indicator.width(), 100.0);

        assert!(!indicator.tick(t0 + Duration::from_millis(90)));
        assert!((indicator.width() - 50.0).abs() < 1e-3);

        assert!(indicator.tick(t0 + Duration::from_millis(140)));
        assert_eq!(indicator.width(), 0.0);
    }

    #[test]
    fn test_indicator_with_zero_active_time_finishes_immediately() {
        let mut indicator = Indicator::new(Duration::ZERO);
        assert!(indicator.tick(Instant::now()));
        assert_eq!(indicator.width(), 0.0);
    }
}
