use std::time::Instant;

/// Instantaneous frame-rate from the gap between two consecutive samples.
///
/// No smoothing: each sample reflects only the last interval. When the clock
/// does not advance the previous value is held.
#[derive(Debug, Clone)]
pub struct FpsEstimator {
    previous: Instant,
    fps: f32,
}

impl Default for FpsEstimator {
    fn default() -> Self {
        Self::new()
    }
}

impl FpsEstimator {
    pub fn new() -> Self {
        Self::starting_at(Instant::now())
    }

    pub fn starting_at(start: Instant) -> Self {
        Self { previous: start, fps: 0.0 }
    }

    pub fn sample(&mut self) -> f32 {
        self.sample_at(Instant::now())
    }

    pub fn sample_at(&mut self, now: Instant) -> f32 {
        // None when `now` is before `previous`
        if let Some(elapsed) = now.checked_duration_since(self.previous) {
            let secs = elapsed.as_secs_f32();
            if secs > 0.0 {
                self.fps = 1.0 / secs;
            }
        }
        self.previous = now;
        self.fps
    }

    pub fn fps(&self) -> f32 {
        self.fps
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn fps_is_reciprocal_of_interval() {
        let start = Instant::now();
        let mut est = FpsEstimator::starting_at(start);

        let fps = est.sample_at(start + Duration::from_millis(40));
        assert!((fps - 25.0).abs() < 1e-3, "got {}", fps);

        let fps = est.sample_at(start + Duration::from_millis(40) + Duration::from_micros(16_667));
        assert!((fps - 60.0).abs() < 0.01, "got {}", fps);
    }

    #[test]
    fn zero_interval_holds_previous_value() {
        let start = Instant::now();
        let mut est = FpsEstimator::starting_at(start);
        let t1 = start + Duration::from_millis(50);

        assert!((est.sample_at(t1) - 20.0).abs() < 1e-3);
        assert!((est.sample_at(t1) - 20.0).abs() < 1e-3);
        assert!((est.fps() - 20.0).abs() < 1e-3);
    }

    #[test]
    fn first_sample_at_construction_time_is_zero() {
        let start = Instant::now();
        let mut est = FpsEstimator::starting_at(start);
        assert_eq!(est.sample_at(start), 0.0);
    }

    #[test]
    fn reversed_clock_holds_value_and_resets_reference() {
        let start = Instant::now();
        let mut est = FpsEstimator::starting_at(start + Duration::from_millis(100));

        assert_eq!(est.sample_at(start), 0.0);
        // reference moved back to `start`
        let fps = est.sample_at(start + Duration::from_millis(10));
        assert!((fps - 100.0).abs() < 1e-2, "got {}", fps);
    }
}
