pub mod blob;
pub mod model_resolver;
#[cfg(feature = "opencv")]
pub mod opencv_ssd_engine;
