use std::time::Instant;

/// Counters that live for the whole run.
///
/// The saved-face counter only ever increases; it numbers the crop files
/// and feeds the FPS overlay.
#[derive(Debug)]
pub struct RunStats {
    start: Instant,
    saved_faces: u64,
    frames_processed: u64,
}

impl RunStats {
    pub fn new() -> Self {
        Self::starting_at(Instant::now())
    }

    pub fn starting_at(start: Instant) -> Self {
        Self {
            start,
            saved_faces: 0,
            frames_processed: 0,
        }
    }

    /// Advances the saved-face counter and returns the new value.
    pub fn next_sequence(&mut self) -> u64 {
        self.saved_faces += 1;
        self.saved_faces
    }

    pub fn record_frame(&mut self) {
        self.frames_processed += 1;
    }

    pub fn saved_faces(&self) -> u64 {
        self.saved_faces
    }

    pub fn frames_processed(&self) -> u64 {
        self.frames_processed
    }

    pub fn elapsed_secs(&self) -> f64 {
        self.start.elapsed().as_secs_f64()
    }
}

impl Default for RunStats {
    fn default() -> Self {
        Self::new()
    }
}
