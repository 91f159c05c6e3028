use opencv::core::{AlgorithmHint, Mat, CV_8UC3};
use opencv::imgproc;
use opencv::prelude::*;
use opencv::videoio::{self, VideoCapture};

use crate::shared::error::FaceWatchError;
use crate::shared::frame::Frame;
use crate::video::domain::frame_source::FrameSource;

/// Captures frames from a camera device through OpenCV's `VideoCapture`.
///
/// Converts each BGR capture to RGB and wraps it in a [`Frame`].
pub struct OpenCvCamera {
    capture: VideoCapture,
    device: i32,
    frame_index: usize,
    released: bool,
}

impl OpenCvCamera {
    pub fn open(device: i32) -> Result<Self, FaceWatchError> {
        let capture = VideoCapture::new(device, videoio::CAP_ANY).map_err(|e| {
            log::debug!("VideoCapture::new({device}) failed: {e}");
            FaceWatchError::CameraUnavailable { device }
        })?;
        if !capture.is_opened().unwrap_or(false) {
            return Err(FaceWatchError::CameraUnavailable { device });
        }

        log::debug!("Opened camera device {device}");
        Ok(Self {
            capture,
            device,
            frame_index: 0,
            released: false,
        })
    }
}

impl FrameSource for OpenCvCamera {
    fn read(&mut self) -> Result<Option<Frame>, Box<dyn std::error::Error>> {
        if self.released {
            return Ok(None);
        }

        let mut mat = Mat::default();
        if !self.capture.read(&mut mat)? || mat.empty() {
            return Ok(None);
        }

        let frame = bgr_mat_to_frame(&mat, self.frame_index)?;
        self.frame_index += 1;
        Ok(Some(frame))
    }

    fn release(&mut self) {
        if self.released {
            return;
        }
        self.released = true;
        if let Err(e) = self.capture.release() {
            log::warn!("Failed to release camera {}: {e}", self.device);
        }
    }
}

/// Converts an 8-bit BGR capture into an RGB [`Frame`].
pub(crate) fn bgr_mat_to_frame(mat: &Mat, index: usize) -> Result<Frame, Box<dyn std::error::Error>> {
    if mat.typ() != CV_8UC3 {
        return Err(format!("unsupported camera pixel type {}", mat.typ()).into());
    }

    let mut rgb = Mat::default();
    imgproc::cvt_color(
        mat,
        &mut rgb,
        imgproc::COLOR_BGR2RGB,
        0,
        AlgorithmHint::ALGO_HINT_DEFAULT,
    )?;

    let width = rgb.cols() as u32;
    let height = rgb.rows() as u32;
    let data = rgb.data_bytes()?.to_vec();
    Ok(Frame::new(data, width, height, 3, index))
}
