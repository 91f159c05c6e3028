pub mod image_file_writer;
#[cfg(feature = "opencv")]
pub mod opencv_camera;
#[cfg(feature = "opencv")]
pub mod opencv_window;
