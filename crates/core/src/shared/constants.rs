pub const PROTOTXT_NAME: &str = "deploy.prototxt";
pub const CAFFEMODEL_NAME: &str = "res10_300x300_ssd_iter_140000.caffemodel";

/// Directory searched for the detector artifacts.
pub const MODEL_DIR: &str = "models";
/// Application directory under the platform cache dir.
pub const CACHE_APP_DIR: &str = "FaceWatch";

pub const SAVED_FACES_DIR: &str = "saved_faces";
pub const FACE_FILE_EXTENSION: &str = "jpg";

pub const CONFIDENCE_THRESHOLD: f32 = 0.6;

/// Square input resolution of the res10 SSD network.
pub const INPUT_SIZE: u32 = 300;
pub const INPUT_SCALE: f32 = 1.0;
/// Per-channel means in B, G, R order, as the network was trained.
pub const INPUT_MEAN_BGR: [f32; 3] = [104.0, 177.0, 123.0];

pub const WINDOW_TITLE: &str = "Real-Time Face Detection";
pub const QUIT_KEY: char = 'q';
/// Key poll wait per iteration, in milliseconds.
pub const KEY_WAIT_MS: i32 = 1;
