use std::time::Instant;

use crate::annotation::domain::frame_annotator::FrameAnnotator;
use crate::detection::domain::detection_decoder::DetectionDecoder;
use crate::detection::domain::detection_engine::DetectionEngine;
use crate::persistence::face_persister::FacePersister;
use crate::pipeline::frame_rate_tracker::FrameRateTracker;
use crate::pipeline::pipeline_logger::PipelineLogger;
use crate::pipeline::run_stats::RunStats;
use crate::shared::config::FaceWatchConfig;
use crate::shared::error::FaceWatchError;
use crate::shared::frame::Frame;
use crate::video::domain::frame_display::FrameDisplay;
use crate::video::domain::frame_source::FrameSource;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Quitting,
    Terminated,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StopReason {
    /// The quit key was pressed.
    QuitRequested,
    /// The camera stopped delivering frames.
    FrameUnavailable,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunSummary {
    pub frames_processed: u64,
    pub faces_saved: u64,
    pub stop_reason: StopReason,
}

/// Live loop: capture, detect, save and annotate each face, display, poll
/// for the quit key.
///
/// Owns the camera and the window. Both are released exactly once, when
/// the loop ends for any reason or when the use case is dropped.
pub struct LiveDetectionUseCase {
    source: Box<dyn FrameSource>,
    display: Box<dyn FrameDisplay>,
    engine: Box<dyn DetectionEngine>,
    decoder: DetectionDecoder,
    annotator: Box<dyn FrameAnnotator>,
    persister: FacePersister,
    tracker: FrameRateTracker,
    stats: RunStats,
    logger: Box<dyn PipelineLogger>,
    config: FaceWatchConfig,
    state: LoopState,
    released: bool,
}

impl LiveDetectionUseCase {
    pub fn new(
        source: Box<dyn FrameSource>,
        display: Box<dyn FrameDisplay>,
        engine: Box<dyn DetectionEngine>,
        annotator: Box<dyn FrameAnnotator>,
        persister: FacePersister,
        logger: Box<dyn PipelineLogger>,
        config: FaceWatchConfig,
    ) -> Self {
        Self {
            source,
            display,
            engine,
            decoder: DetectionDecoder::new(config.confidence_threshold),
            annotator,
            persister,
            tracker: FrameRateTracker::new(),
            stats: RunStats::new(),
            logger,
            config,
            state: LoopState::Running,
            released: false,
        }
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    /// Runs until the quit key is pressed or the camera stops delivering
    /// frames. Any other failure ends the run with an error; the camera and
    /// window are released on every path.
    pub fn execute(mut self) -> Result<RunSummary, FaceWatchError> {
        self.logger.info(&format!(
            "Starting real-time face detection... Press '{}' to quit.",
            self.config.quit_key
        ));
        self.stats = RunStats::new();

        let outcome = self.run_loop();
        self.release();

        self.logger.info(&format!(
            "Run finished: {} frames processed, {} faces saved, last FPS {:.2}",
            self.stats.frames_processed(),
            self.stats.saved_faces(),
            self.tracker.last()
        ));
        self.logger.summary();

        Ok(RunSummary {
            frames_processed: self.stats.frames_processed(),
            faces_saved: self.stats.saved_faces(),
            stop_reason: outcome.map_err(FaceWatchError::from)?,
        })
    }

    fn run_loop(&mut self) -> Result<StopReason, Box<dyn std::error::Error>> {
        while self.state == LoopState::Running {
            let t = Instant::now();
            let Some(mut frame) = self.source.read()? else {
                log::warn!("Failed to grab frame.");
                return Ok(StopReason::FrameUnavailable);
            };
            self.logger.timing("capture", elapsed_ms(t));

            self.process_frame(&mut frame)?;
            self.stats.record_frame();
            self.logger.frame_processed(frame.index());

            let key = self.display.poll_key(self.config.key_wait_ms)?;
            if key == Some(self.config.quit_key) {
                self.state = LoopState::Quitting;
            }
        }
        Ok(StopReason::QuitRequested)
    }

    fn process_frame(&mut self, frame: &mut Frame) -> Result<(), Box<dyn std::error::Error>> {
        let t = Instant::now();
        let tensor = self.engine.infer(frame)?;
        self.logger.timing("infer", elapsed_ms(t));

        let t = Instant::now();
        let detections = self.decoder.decode(&tensor, frame.width(), frame.height());
        self.logger.timing("decode", elapsed_ms(t));
        self.logger.metric("faces", detections.len() as f64);

        let t = Instant::now();
        for detection in &detections {
            let b = detection.bbox;
            let Some(crop) = frame.crop(b.start_x, b.start_y, b.end_x, b.end_y) else {
                continue;
            };
            let sequence = self.stats.next_sequence();
            self.persister
                .persist(&crop, &self.config.output_dir, sequence)?;
            self.annotator.draw_detection(frame, detection);
        }
        self.logger.timing("persist", elapsed_ms(t));

        let fps = self
            .tracker
            .update_and_report(self.stats.elapsed_secs(), self.stats.saved_faces());
        self.annotator.draw_summary(frame, detections.len(), fps);

        let t = Instant::now();
        self.display.show(frame)?;
        self.logger.timing("display", elapsed_ms(t));
        Ok(())
    }

    fn release(&mut self) {
        if self.released {
            return;
        }
        self.released = true;
        self.source.release();
        self.display.close();
        self.state = LoopState::Terminated;
        log::debug!("Released camera and display window");
    }
}

impl Drop for LiveDetectionUseCase {
    fn drop(&mut self) {
        self.release();
    }
}

fn elapsed_ms(start: Instant) -> f64 {
    start.elapsed().as_secs_f64() * 1000.0
}
