use crate::shared::frame::Frame;

/// Live source of frames, such as a camera device.
///
/// Implementations handle device details (backend, pixel format) while the
/// pipeline works with RGB `Frame`s.
pub trait FrameSource {
    /// Grabs the next frame.
    ///
    /// `Ok(None)` means the source could not deliver a frame (device
    /// unplugged, stream ended). The caller treats it as the end of the run,
    /// not as an error.
    fn read(&mut self) -> Result<Option<Frame>, Box<dyn std::error::Error>>;

    /// Releases the underlying device. Must tolerate repeated calls.
    fn release(&mut self);
}
