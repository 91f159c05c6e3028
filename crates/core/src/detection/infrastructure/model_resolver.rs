use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::shared::constants::{CACHE_APP_DIR, CAFFEMODEL_NAME, MODEL_DIR, PROTOTXT_NAME};
use crate::shared::error::FaceWatchError;

#[derive(Error, Debug, PartialEq)]
pub enum ModelResolveError {
    #[error("Prototxt file not found at {}", .0.display())]
    MissingPrototxt(PathBuf),
    #[error("Caffe model not found at {}", .0.display())]
    MissingWeights(PathBuf),
    #[error("no model directory candidates available")]
    NoCandidates,
}

impl From<ModelResolveError> for FaceWatchError {
    fn from(e: ModelResolveError) -> Self {
        FaceWatchError::ModelUnavailable(e.to_string())
    }
}

/// Paths to the detector's architecture descriptor and weights.
#[derive(Clone, Debug, PartialEq)]
pub struct ModelArtifacts {
    pub prototxt: PathBuf,
    pub weights: PathBuf,
}

impl ModelArtifacts {
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            prototxt: dir.join(PROTOTXT_NAME),
            weights: dir.join(CAFFEMODEL_NAME),
        }
    }

    /// Checks the descriptor first, then the weights.
    pub fn verify(&self) -> Result<(), ModelResolveError> {
        if !self.prototxt.is_file() {
            return Err(ModelResolveError::MissingPrototxt(self.prototxt.clone()));
        }
        if !self.weights.is_file() {
            return Err(ModelResolveError::MissingWeights(self.weights.clone()));
        }
        Ok(())
    }
}

/// Resolve the detector artifacts.
///
/// An explicit directory is the only place searched when given. Otherwise
/// the resolution order is:
/// 1. `models/` next to the executable
/// 2. `models/` in the working directory
/// 3. User cache directory (platform-specific)
///
/// When nothing matches, the error names the file missing from the first
/// candidate.
pub fn resolve(explicit_dir: Option<&Path>) -> Result<ModelArtifacts, ModelResolveError> {
    let candidates = match explicit_dir {
        Some(dir) => vec![dir.to_path_buf()],
        None => default_candidates(),
    };
    resolve_in(&candidates)
}

/// Returns the artifacts of the first candidate holding both files.
pub fn resolve_in(candidates: &[PathBuf]) -> Result<ModelArtifacts, ModelResolveError> {
    let mut first_error = None;
    for dir in candidates {
        let artifacts = ModelArtifacts::in_dir(dir);
        match artifacts.verify() {
            Ok(()) => {
                log::debug!("Using model artifacts in {}", dir.display());
                return Ok(artifacts);
            }
            Err(e) => {
                log::debug!("{e}");
                if first_error.is_none() {
                    first_error = Some(e);
                }
            }
        }
    }
    Err(first_error.unwrap_or(ModelResolveError::NoCandidates))
}

fn default_candidates() -> Vec<PathBuf> {
    let mut candidates = Vec::new();
    if let Some(exe_dir) = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
    {
        candidates.push(exe_dir.join(MODEL_DIR));
    }
    candidates.push(PathBuf::from(MODEL_DIR));
    if let Some(cache) = model_cache_dir() {
        candidates.push(cache);
    }
    candidates
}

/// Platform-specific model cache directory.
///
/// - macOS: `~/Library/Caches/FaceWatch/models/`
/// - Linux: `$XDG_CACHE_HOME/FaceWatch/models/` or `~/.cache/FaceWatch/models/`
/// - Windows: `%LOCALAPPDATA%/FaceWatch/models/`
pub fn model_cache_dir() -> Option<PathBuf> {
    dirs::cache_dir().map(|d| d.join(CACHE_APP_DIR).join(MODEL_DIR))
}
