use opencv::core::{AlgorithmHint, Mat};
use opencv::highgui;
use opencv::imgproc;
use opencv::prelude::*;

use crate::shared::error::FaceWatchError;
use crate::shared::frame::Frame;
use crate::video::domain::frame_display::FrameDisplay;

/// HighGUI window showing the annotated stream.
pub struct OpenCvWindow {
    title: String,
    open: bool,
}

impl OpenCvWindow {
    pub fn open(title: &str) -> Result<Self, FaceWatchError> {
        highgui::named_window(title, highgui::WINDOW_AUTOSIZE)
            .map_err(|e| FaceWatchError::Display(e.to_string()))?;
        Ok(Self {
            title: title.to_string(),
            open: true,
        })
    }
}

impl FrameDisplay for OpenCvWindow {
    fn show(&mut self, frame: &Frame) -> Result<(), Box<dyn std::error::Error>> {
        let bgr = frame_to_bgr_mat(frame)?;
        highgui::imshow(&self.title, &bgr)?;
        Ok(())
    }

    fn poll_key(&mut self, wait_ms: i32) -> Result<Option<char>, Box<dyn std::error::Error>> {
        let key = highgui::wait_key(wait_ms)?;
        if key < 0 {
            return Ok(None);
        }
        Ok(Some(char::from((key & 0xFF) as u8)))
    }

    fn close(&mut self) {
        if !self.open {
            return;
        }
        self.open = false;
        if let Err(e) = highgui::destroy_all_windows() {
            log::warn!("Failed to destroy display window: {e}");
        }
    }
}

/// Copies an RGB [`Frame`] into a BGR `Mat` ready for HighGUI.
pub(crate) fn frame_to_bgr_mat(frame: &Frame) -> Result<Mat, Box<dyn std::error::Error>> {
    if frame.channels() != 3 {
        return Err(format!("cannot display {}-channel frame", frame.channels()).into());
    }

    let rgb = Mat::from_slice(frame.data())?
        .reshape(3, frame.height() as i32)?
        .try_clone()?;
    let mut bgr = Mat::default();
    imgproc::cvt_color(
        &rgb,
        &mut bgr,
        imgproc::COLOR_RGB2BGR,
        0,
        AlgorithmHint::ALGO_HINT_DEFAULT,
    )?;
    Ok(bgr)
}
