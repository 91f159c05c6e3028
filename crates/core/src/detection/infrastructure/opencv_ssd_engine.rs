//! Res10 SSD face network run through OpenCV's DNN module.
//!
//! Loads the Caffe descriptor and weights, feeds the preprocessed blob and
//! hands back the raw `[1, 1, N, 7]` output for decoding.
use std::path::Path;

use ndarray::Array4;
use opencv::core::{Mat, Scalar, CV_32F};
use opencv::dnn;
use opencv::prelude::*;

use crate::detection::domain::detection_engine::DetectionEngine;
use crate::detection::domain::detection_tensor::DetectionTensor;
use crate::shared::config::BlobParams;
use crate::shared::error::FaceWatchError;
use crate::shared::frame::Frame;

use super::blob::build_blob;
use super::model_resolver::ModelArtifacts;

pub struct OpenCvSsdEngine {
    net: dnn::Net,
    blob_params: BlobParams,
}

impl OpenCvSsdEngine {
    /// Loads the network, failing with `ModelUnavailable` if either artifact
    /// is missing or OpenCV cannot build a usable network from them.
    pub fn new(artifacts: &ModelArtifacts, blob_params: BlobParams) -> Result<Self, FaceWatchError> {
        artifacts.verify()?;

        let prototxt = path_str(&artifacts.prototxt)?;
        let weights = path_str(&artifacts.weights)?;
        let net = dnn::read_net_from_caffe(prototxt, weights).map_err(|e| {
            FaceWatchError::ModelUnavailable(format!("failed to load Caffe network: {e}"))
        })?;

        let empty = net
            .empty()
            .map_err(|e| FaceWatchError::ModelUnavailable(e.to_string()))?;
        if empty {
            return Err(FaceWatchError::ModelUnavailable(format!(
                "network loaded from {} has no layers",
                artifacts.prototxt.display()
            )));
        }

        log::debug!(
            "Loaded face network from {} and {}",
            artifacts.prototxt.display(),
            artifacts.weights.display()
        );
        Ok(Self { net, blob_params })
    }
}

impl DetectionEngine for OpenCvSsdEngine {
    fn infer(&mut self, frame: &Frame) -> Result<DetectionTensor, Box<dyn std::error::Error>> {
        let blob = build_blob(frame, &self.blob_params)?;
        let input = blob_to_mat(&blob)?;

        self.net.set_input_def(&input)?;
        let output = self.net.forward_single_def()?;

        // Leading dimensions are 1, so the flat buffer is N rows of 7.
        let values = output.data_typed::<f32>()?.to_vec();
        DetectionTensor::from_flat(values)
    }
}

fn blob_to_mat(blob: &Array4<f32>) -> Result<Mat, Box<dyn std::error::Error>> {
    let sizes: Vec<i32> = blob.shape().iter().map(|&d| d as i32).collect();
    let mut mat = Mat::new_nd_with_default(&sizes, CV_32F, Scalar::all(0.0))?;
    let src = blob.as_slice().ok_or("blob is not contiguous")?;
    mat.data_typed_mut::<f32>()?.copy_from_slice(src);
    Ok(mat)
}

fn path_str(path: &Path) -> Result<&str, FaceWatchError> {
    path.to_str().ok_or_else(|| {
        FaceWatchError::ModelUnavailable(format!("model path is not valid UTF-8: {}", path.display()))
    })
}
