use crate::detection::domain::detection_tensor::DetectionTensor;
use crate::shared::frame::Frame;

/// Domain interface for the face detection network.
///
/// Implementations own the loaded network and run one forward pass per
/// call, hence `&mut self`.
pub trait DetectionEngine {
    fn infer(&mut self, frame: &Frame) -> Result<DetectionTensor, Box<dyn std::error::Error>>;
}
