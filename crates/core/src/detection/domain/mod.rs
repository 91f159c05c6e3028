pub mod detection_decoder;
pub mod detection_engine;
pub mod detection_tensor;
