/// Rate shown in the `FPS` overlay.
///
/// The numerator is the cumulative number of saved faces, not frames, so
/// the value is a save rate despite the label.
#[derive(Debug, Default)]
pub struct FrameRateTracker {
    last: f64,
}

impl FrameRateTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `saved_faces / elapsed_secs`, or 0 when no time has elapsed.
    pub fn update_and_report(&mut self, elapsed_secs: f64, saved_faces: u64) -> f64 {
        self.last = if elapsed_secs > 0.0 {
            saved_faces as f64 / elapsed_secs
        } else {
            0.0
        };
        self.last
    }

    pub fn last(&self) -> f64 {
        self.last
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rstest::rstest;

    #[rstest]
    #[case(2.0, 10, 5.0)]
    #[case(0.5, 3, 6.0)]
    #[case(4.0, 0, 0.0)]
    fn test_rate_is_saved_faces_over_elapsed(
        #[case] elapsed: f64,
        #[case] saved: u64,
        #[case] expected: f64,
    ) {
        let mut tracker = FrameRateTracker::new();
        assert_relative_eq!(tracker.update_and_report(elapsed, saved), expected);
    }

    #[rstest]
    #[case(0.0)]
    #[case(-1.0)]
    fn test_non_positive_elapsed_reports_zero(#[case] elapsed: f64) {
        let mut tracker = FrameRateTracker::new();
        assert_eq!(tracker.update_and_report(elapsed, 25), 0.0);
    }

    #[test]
    fn test_last_remembers_latest_report() {
        let mut tracker = FrameRateTracker::new();
        assert_eq!(tracker.last(), 0.0);
        tracker.update_and_report(2.0, 4);
        assert_relative_eq!(tracker.last(), 2.0);
        tracker.update_and_report(0.0, 4);
        assert_eq!(tracker.last(), 0.0);
    }
}
