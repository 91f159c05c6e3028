use std::path::PathBuf;

use super::constants::{
    CONFIDENCE_THRESHOLD, FACE_FILE_EXTENSION, INPUT_MEAN_BGR, INPUT_SCALE, INPUT_SIZE,
    KEY_WAIT_MS, QUIT_KEY, SAVED_FACES_DIR, WINDOW_TITLE,
};

/// Parameters for turning a frame into the network's input blob.
#[derive(Clone, Debug, PartialEq)]
pub struct BlobParams {
    pub size: u32,
    pub scale: f32,
    pub mean_bgr: [f32; 3],
}

impl Default for BlobParams {
    fn default() -> Self {
        Self {
            size: INPUT_SIZE,
            scale: INPUT_SCALE,
            mean_bgr: INPUT_MEAN_BGR,
        }
    }
}

/// Immutable run configuration, built once at startup and handed to each
/// component at construction.
#[derive(Clone, Debug, PartialEq)]
pub struct FaceWatchConfig {
    pub confidence_threshold: f32,
    pub output_dir: PathBuf,
    pub file_extension: String,
    pub window_title: String,
    pub quit_key: char,
    pub key_wait_ms: i32,
    pub blob: BlobParams,
}

impl FaceWatchConfig {
    pub fn with_output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = output_dir.into();
        self
    }
}

impl Default for FaceWatchConfig {
    fn default() -> Self {
        Self {
            confidence_threshold: CONFIDENCE_THRESHOLD,
            output_dir: PathBuf::from(SAVED_FACES_DIR),
            file_extension: FACE_FILE_EXTENSION.to_string(),
            window_title: WINDOW_TITLE.to_string(),
            quit_key: QUIT_KEY,
            key_wait_ms: KEY_WAIT_MS,
            blob: BlobParams::default(),
        }
    }
}
