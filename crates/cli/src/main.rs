use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;

use facewatch_core::annotation::infrastructure::bitmap_annotator::BitmapAnnotator;
use facewatch_core::detection::infrastructure::model_resolver;
use facewatch_core::detection::infrastructure::opencv_ssd_engine::OpenCvSsdEngine;
use facewatch_core::persistence::face_persister::{ensure_output_dir, FacePersister};
use facewatch_core::pipeline::live_detection_use_case::{LiveDetectionUseCase, StopReason};
use facewatch_core::pipeline::pipeline_logger::LogPipelineLogger;
use facewatch_core::shared::config::{BlobParams, FaceWatchConfig};
use facewatch_core::shared::constants::SAVED_FACES_DIR;
use facewatch_core::shared::error::FaceWatchError;
use facewatch_core::video::infrastructure::image_file_writer::ImageFileWriter;
use facewatch_core::video::infrastructure::opencv_camera::OpenCvCamera;
use facewatch_core::video::infrastructure::opencv_window::OpenCvWindow;

/// Real-time face detection from a webcam, saving every detected face.
#[derive(Parser)]
#[command(name = "facewatch")]
struct Cli {
    /// Camera device index.
    #[arg(long, default_value = "0")]
    camera: i32,

    /// Directory holding deploy.prototxt and the Caffe weights.
    #[arg(long)]
    model_dir: Option<PathBuf>,

    /// Directory where face crops are written.
    #[arg(long, default_value = SAVED_FACES_DIR)]
    output_dir: PathBuf,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run(Cli::parse()) {
        if e.is_startup() {
            log::error!("{e}");
        } else {
            log::error!("[UNEXPECTED ERROR] {e}");
        }
        process::exit(e.exit_code());
    }
}

fn run(cli: Cli) -> Result<(), FaceWatchError> {
    let config = FaceWatchConfig::default().with_output_dir(cli.output_dir);

    let (engine, camera) = load_model_then_camera(
        cli.model_dir.as_deref(),
        config.blob.clone(),
        || OpenCvCamera::open(cli.camera),
    )?;

    ensure_output_dir(&config.output_dir)?;
    let window = OpenCvWindow::open(&config.window_title)?;

    let persister = FacePersister::new(
        Box::new(ImageFileWriter::new()),
        config.file_extension.clone(),
    );
    let use_case = LiveDetectionUseCase::new(
        Box::new(camera),
        Box::new(window),
        Box::new(engine),
        Box::new(BitmapAnnotator::new()),
        persister,
        Box::new(LogPipelineLogger::default()),
        config,
    );

    let summary = use_case.execute()?;
    if summary.stop_reason == StopReason::FrameUnavailable {
        log::info!("Camera stopped delivering frames.");
    }
    log::info!(
        "Application closed successfully. {} faces saved.",
        summary.faces_saved
    );
    Ok(())
}

/// Loads the detector, then opens the camera. The camera is never touched
/// when the model cannot be loaded.
fn load_model_then_camera<C>(
    model_dir: Option<&Path>,
    blob: BlobParams,
    open_camera: impl FnOnce() -> Result<C, FaceWatchError>,
) -> Result<(OpenCvSsdEngine, C), FaceWatchError> {
    log::info!("Loading face detection model...");
    let artifacts = model_resolver::resolve(model_dir)?;
    let engine = OpenCvSsdEngine::new(&artifacts, blob)?;

    log::info!("Initializing webcam...");
    let camera = open_camera()?;
    Ok((engine, camera))
}
