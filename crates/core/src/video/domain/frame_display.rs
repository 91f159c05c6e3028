use crate::shared::frame::Frame;

/// On-screen sink for annotated frames plus the keyboard poll that comes
/// with it.
pub trait FrameDisplay {
    fn show(&mut self, frame: &Frame) -> Result<(), Box<dyn std::error::Error>>;

    /// Waits up to `wait_ms` for a key press and returns it, if any.
    fn poll_key(&mut self, wait_ms: i32) -> Result<Option<char>, Box<dyn std::error::Error>>;

    /// Tears the window down. Must tolerate repeated calls.
    fn close(&mut self);
}
