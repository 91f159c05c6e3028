pub mod frame_rate_tracker;
pub mod live_detection_use_case;
pub mod pipeline_logger;
pub mod run_stats;
