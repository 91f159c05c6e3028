pub mod annotation;
pub mod detection;
pub mod persistence;
pub mod pipeline;
pub mod shared;
pub mod video;
