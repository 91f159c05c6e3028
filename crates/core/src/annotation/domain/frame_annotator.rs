use crate::shared::detection::Detection;
use crate::shared::frame::Frame;

/// Draws detection boxes and the run overlays onto a frame in place.
pub trait FrameAnnotator {
    /// Box and confidence label for one accepted detection.
    fn draw_detection(&self, frame: &mut Frame, detection: &Detection);

    /// Face count and FPS overlays in the top-left corner.
    fn draw_summary(&self, frame: &mut Frame, face_count: usize, fps: f64);

    fn annotate(&self, frame: &mut Frame, detections: &[Detection], face_count: usize, fps: f64) {
        for detection in detections {
            self.draw_detection(frame, detection);
        }
        self.draw_summary(frame, face_count, fps);
    }
}
