/// Face box in absolute pixel coordinates, corners inclusive of the frame.
///
/// Produced by the decoder already clamped, so that
/// `0 <= start_x <= end_x <= width - 1` and likewise for y.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoundingBox {
    pub start_x: i32,
    pub start_y: i32,
    pub end_x: i32,
    pub end_y: i32,
}

impl BoundingBox {
    pub fn new(start_x: i32, start_y: i32, end_x: i32, end_y: i32) -> Self {
        Self {
            start_x,
            start_y,
            end_x,
            end_y,
        }
    }

    pub fn width(&self) -> i32 {
        self.end_x - self.start_x
    }

    pub fn height(&self) -> i32 {
        self.end_y - self.start_y
    }

    /// True when a crop of this box would contain no pixels.
    pub fn is_empty(&self) -> bool {
        self.start_x >= self.end_x || self.start_y >= self.end_y
    }
}

/// A face accepted by the decoder.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Detection {
    pub confidence: f32,
    pub bbox: BoundingBox,
}

impl Detection {
    /// Confidence formatted the way it is drawn on screen, e.g. `75.00%`.
    pub fn label(&self) -> String {
        format!("{:.2}%", self.confidence * 100.0)
    }
}
