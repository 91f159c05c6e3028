use std::path::{Path, PathBuf};

use crate::shared::error::FaceWatchError;
use crate::shared::frame::Frame;
use crate::video::domain::image_writer::ImageWriter;

/// Saves face crops as `face_<n>.<ext>` through an [`ImageWriter`].
///
/// The sequence number comes from the caller and is expected to be unique
/// within a run; an existing file with the same name is overwritten.
pub struct FacePersister {
    writer: Box<dyn ImageWriter>,
    extension: String,
}

impl FacePersister {
    pub fn new(writer: Box<dyn ImageWriter>, extension: impl Into<String>) -> Self {
        Self {
            writer,
            extension: extension.into(),
        }
    }

    pub fn file_name(&self, sequence: u64) -> String {
        format!("face_{sequence}.{}", self.extension)
    }

    /// Writes the crop and returns the path it was written to.
    pub fn persist(
        &self,
        crop: &Frame,
        dir: &Path,
        sequence: u64,
    ) -> Result<PathBuf, Box<dyn std::error::Error>> {
        let path = dir.join(self.file_name(sequence));
        self.writer.write(&path, crop)?;
        log::debug!(
            "Saved {}x{} face crop to {}",
            crop.width(),
            crop.height(),
            path.display()
        );
        Ok(path)
    }
}

/// Creates `dir` and any missing parents. Succeeds if it already exists.
pub fn ensure_output_dir(dir: &Path) -> Result<PathBuf, FaceWatchError> {
    std::fs::create_dir_all(dir).map_err(|source| FaceWatchError::OutputDirectory {
        path: dir.to_path_buf(),
        source,
    })?;
    Ok(dir.to_path_buf())
}
