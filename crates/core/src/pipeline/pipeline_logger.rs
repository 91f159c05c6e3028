use std::collections::HashMap;
use std::time::Instant;

/// Cross-cutting logger for live pipeline events.
///
/// Keeps the detection loop independent of where timings and status
/// messages end up.
pub trait PipelineLogger {
    /// Report that another frame went through the loop.
    fn frame_processed(&mut self, frame_index: usize);

    /// Record how long a named pipeline stage took for one frame.
    fn timing(&mut self, stage: &str, duration_ms: f64);

    /// Record a point-in-time metric (e.g. faces per frame).
    fn metric(&mut self, name: &str, value: f64);

    /// Log a human-readable status message.
    fn info(&mut self, message: &str);

    /// Emit an end-of-run summary. Default: no-op.
    fn summary(&self) {}
}

/// Silent logger that discards all events.
pub struct NullPipelineLogger;

impl PipelineLogger for NullPipelineLogger {
    fn frame_processed(&mut self, _frame_index: usize) {}
    fn timing(&mut self, _stage: &str, _duration_ms: f64) {}
    fn metric(&mut self, _name: &str, _value: f64) {}
    fn info(&mut self, _message: &str) {}
}

/// Logger backed by the `log` crate that keeps per-stage timings and
/// metrics for a summary at the end of the run.
///
/// Frame progress is reported every `throttle_frames` frames.
pub struct LogPipelineLogger {
    throttle_frames: usize,
    timings: HashMap<String, Vec<f64>>,
    metrics: HashMap<String, Vec<f64>>,
    start_time: Instant,
    frames: usize,
    messages: Vec<String>,
}

impl LogPipelineLogger {
    pub fn new(throttle_frames: usize) -> Self {
        Self {
            throttle_frames: throttle_frames.max(1),
            timings: HashMap::new(),
            metrics: HashMap::new(),
            start_time: Instant::now(),
            frames: 0,
            messages: Vec::new(),
        }
    }

    /// Returns the formatted summary string, or `None` if no data recorded.
    pub fn summary_string(&self) -> Option<String> {
        if self.timings.is_empty() && self.metrics.is_empty() {
            return None;
        }

        let elapsed_ms = self.start_time.elapsed().as_secs_f64() * 1000.0;
        let frames = self.frames;
        let mut lines = Vec::new();

        lines.push(format!(
            "Pipeline summary ({frames} frames, {:.1}s total):",
            elapsed_ms / 1000.0
        ));

        let mut stages: Vec<_> = self.timings.keys().collect();
        stages.sort();
        for stage in stages {
            let durations = &self.timings[stage];
            let total_ms: f64 = durations.iter().sum();
            let avg_ms = if durations.is_empty() {
                0.0
            } else {
                total_ms / durations.len() as f64
            };
            let pct = if elapsed_ms > 0.0 {
                total_ms / elapsed_ms * 100.0
            } else {
                0.0
            };
            lines.push(format!(
                "  {stage:12}: avg {avg_ms:6.1}ms  total {total_ms:7.0}ms  ({pct:4.1}%)"
            ));
        }

        let mut metric_names: Vec<_> = self.metrics.keys().collect();
        metric_names.sort();
        for name in metric_names {
            let values = &self.metrics[name];
            let avg = if values.is_empty() {
                0.0
            } else {
                values.iter().sum::<f64>() / values.len() as f64
            };
            let total: f64 = values.iter().sum();
            lines.push(format!("  {name}: avg {avg:.1}  total {total:.0}"));
        }

        if frames > 0 && elapsed_ms > 0.0 {
            let fps = frames as f64 / (elapsed_ms / 1000.0);
            lines.push(format!("  Throughput: {fps:.1} fps"));
        }

        Some(lines.join("\n"))
    }

    pub fn timings_for(&self, stage: &str) -> Option<&[f64]> {
        self.timings.get(stage).map(|v| v.as_slice())
    }

    pub fn metrics_for(&self, name: &str) -> Option<&[f64]> {
        self.metrics.get(name).map(|v| v.as_slice())
    }
}

impl Default for LogPipelineLogger {
    fn default() -> Self {
        Self::new(300)
    }
}

impl PipelineLogger for LogPipelineLogger {
    fn frame_processed(&mut self, frame_index: usize) {
        self.frames += 1;
        if self.frames % self.throttle_frames == 0 {
            log::debug!("Processed {} frames (last index {frame_index})", self.frames);
        }
    }

    fn timing(&mut self, stage: &str, duration_ms: f64) {
        self.timings
            .entry(stage.to_string())
            .or_default()
            .push(duration_ms);
    }

    fn metric(&mut self, name: &str, value: f64) {
        self.metrics
            .entry(name.to_string())
            .or_default()
            .push(value);
    }

    fn info(&mut self, message: &str) {
        self.messages.push(message.to_string());
        log::info!("{message}");
    }

    fn summary(&self) {
        if let Some(text) = self.summary_string() {
            log::info!("\n\n{text}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_logger_all_methods_are_noop() {
        let mut logger = NullPipelineLogger;
        logger.frame_processed(1);
        logger.timing("infer", 5.0);
        logger.metric("faces", 3.0);
        logger.info("hello");
        logger.summary();
    }

    #[test]
    fn test_timing_records_values() {
        let mut logger = LogPipelineLogger::new(10);
        logger.timing("infer", 20.0);
        logger.timing("infer", 30.0);
        logger.timing("persist", 5.0);

        let infer = logger.timings_for("infer").unwrap();
        assert_eq!(infer.len(), 2);
        assert!((infer[0] - 20.0).abs() < f64::EPSILON);
        assert!((infer[1] - 30.0).abs() < f64::EPSILON);

        let persist = logger.timings_for("persist").unwrap();
        assert_eq!(persist.len(), 1);
    }

    #[test]
    fn test_metric_records_values() {
        let mut logger = LogPipelineLogger::new(10);
        logger.metric("faces", 1.0);
        logger.metric("faces", 2.0);

        let values = logger.metrics_for("faces").unwrap();
        assert_eq!(values, &[1.0, 2.0]);
    }

    #[test]
    fn test_summary_includes_stages_and_metrics() {
        let mut logger = LogPipelineLogger::new(10);
        logger.frame_processed(0);
        logger.timing("capture", 8.0);
        logger.timing("infer", 20.0);
        logger.metric("faces", 1.0);
        logger.metric("faces", 2.0);

        let summary = logger.summary_string().unwrap();
        assert!(summary.contains("Pipeline summary (1 frames"));
        assert!(summary.contains("capture"));
        assert!(summary.contains("infer"));
        assert!(summary.contains("faces: avg 1.5  total 3"));
    }

    #[test]
    fn test_empty_summary_returns_none() {
        let logger = LogPipelineLogger::new(10);
        assert!(logger.summary_string().is_none());
    }

    #[test]
    fn test_frames_counted() {
        let mut logger = LogPipelineLogger::new(10);
        for i in 0..25 {
            logger.frame_processed(i);
        }
        assert_eq!(logger.frames, 25);
    }

    #[test]
    fn test_info_stores_messages() {
        let mut logger = LogPipelineLogger::new(10);
        logger.info("hello world");
        assert_eq!(logger.messages, vec!["hello world".to_string()]);
    }

    #[test]
    fn test_throttle_never_zero() {
        assert_eq!(LogPipelineLogger::new(0).throttle_frames, 1);
        assert_eq!(LogPipelineLogger::default().throttle_frames, 300);
    }
}
