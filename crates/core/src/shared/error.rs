use std::path::PathBuf;

use thiserror::Error;

/// Failure kinds that end a run with a non-zero exit code.
///
/// Losing the camera mid-run is not one of them: the frame source reports
/// it as `Ok(None)` and the loop stops normally.
#[derive(Error, Debug)]
pub enum FaceWatchError {
    #[error("{0}")]
    ModelUnavailable(String),
    #[error("Webcam not detected (device {device}). Please check your camera connection.")]
    CameraUnavailable { device: i32 },
    #[error("failed to open display window: {0}")]
    Display(String),
    #[error("failed to create output directory {path}: {source}")]
    OutputDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{0}")]
    Unexpected(Box<dyn std::error::Error>),
}

impl FaceWatchError {
    /// Startup failures are the ones detected before the loop starts.
    pub fn is_startup(&self) -> bool {
        matches!(
            self,
            Self::ModelUnavailable(_)
                | Self::CameraUnavailable { .. }
                | Self::Display(_)
                | Self::OutputDirectory { .. }
        )
    }

    pub fn exit_code(&self) -> i32 {
        1
    }
}

impl From<Box<dyn std::error::Error>> for FaceWatchError {
    fn from(e: Box<dyn std::error::Error>) -> Self {
        Self::Unexpected(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_kind_exits_with_one() {
        let errors = [
            FaceWatchError::ModelUnavailable("missing".into()),
            FaceWatchError::CameraUnavailable { device: 0 },
            FaceWatchError::Display("no display".into()),
            FaceWatchError::Unexpected("disk full".into()),
        ];
        for e in &errors {
            assert_eq!(e.exit_code(), 1);
        }
    }

    #[test]
    fn test_startup_classification() {
        assert!(FaceWatchError::ModelUnavailable("x".into()).is_startup());
        assert!(FaceWatchError::CameraUnavailable { device: 2 }.is_startup());
        assert!(!FaceWatchError::Unexpected("x".into()).is_startup());
    }

    #[test]
    fn test_boxed_error_converts_to_unexpected() {
        let boxed: Box<dyn std::error::Error> = "write failed".into();
        let e: FaceWatchError = boxed.into();
        assert!(matches!(e, FaceWatchError::Unexpected(_)));
        assert_eq!(e.to_string(), "write failed");
    }

    #[test]
    fn test_camera_message_names_device() {
        let e = FaceWatchError::CameraUnavailable { device: 1 };
        assert!(e.to_string().contains("device 1"));
    }
}
