use crate::annotation::domain::frame_annotator::FrameAnnotator;
use crate::shared::detection::Detection;
use crate::shared::frame::Frame;

use super::glyphs::{glyph_bits, GLYPH_ADVANCE, GLYPH_HEIGHT, GLYPH_WIDTH};

pub type Rgb = [u8; 3];

pub const BOX_COLOR: Rgb = [0, 255, 0];
pub const FACE_COUNT_COLOR: Rgb = [255, 0, 0];
pub const FPS_COLOR: Rgb = [0, 0, 255];

const BOX_THICKNESS: i32 = 2;
/// Distance between the label baseline and the top edge of its box.
const LABEL_OFFSET: i32 = 10;
const LABEL_SCALE: i32 = 1;
const OVERLAY_SCALE: i32 = 2;
/// Baseline origins of the face count and FPS overlays.
const FACE_COUNT_ORIGIN: (i32, i32) = (10, 30);
const FPS_ORIGIN: (i32, i32) = (10, 60);

/// Renders boxes and text directly into the frame's RGB buffer.
///
/// Text positions are baselines: glyphs extend upward from `y`. Every pixel
/// is clipped individually, so boxes and labels partially or wholly outside
/// the frame are safe to draw.
pub struct BitmapAnnotator;

impl BitmapAnnotator {
    pub fn new() -> Self {
        Self
    }
}

impl Default for BitmapAnnotator {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameAnnotator for BitmapAnnotator {
    fn draw_detection(&self, frame: &mut Frame, detection: &Detection) {
        let b = detection.bbox;
        for inset in 0..BOX_THICKNESS {
            draw_outline(
                frame,
                b.start_x + inset,
                b.start_y + inset,
                b.end_x - inset,
                b.end_y - inset,
                BOX_COLOR,
            );
        }
        draw_text(
            frame,
            &detection.label(),
            b.start_x,
            b.start_y - LABEL_OFFSET,
            LABEL_SCALE,
            BOX_COLOR,
        );
    }

    fn draw_summary(&self, frame: &mut Frame, face_count: usize, fps: f64) {
        let (x, y) = FACE_COUNT_ORIGIN;
        draw_text(
            frame,
            &format!("Faces: {face_count}"),
            x,
            y,
            OVERLAY_SCALE,
            FACE_COUNT_COLOR,
        );
        let (x, y) = FPS_ORIGIN;
        draw_text(frame, &format!("FPS: {fps:.2}"), x, y, OVERLAY_SCALE, FPS_COLOR);
    }
}

fn put_pixel(frame: &mut Frame, x: i32, y: i32, color: Rgb) {
    if x < 0 || y < 0 || x >= frame.width() as i32 || y >= frame.height() as i32 {
        return;
    }
    let channels = frame.channels() as usize;
    if channels < 3 {
        return;
    }
    let offset = (y as usize * frame.width() as usize + x as usize) * channels;
    frame.data_mut()[offset..offset + 3].copy_from_slice(&color);
}

fn draw_outline(frame: &mut Frame, left: i32, top: i32, right: i32, bottom: i32, color: Rgb) {
    if left > right || top > bottom {
        return;
    }
    for x in left..=right {
        put_pixel(frame, x, top, color);
        put_pixel(frame, x, bottom, color);
    }
    for y in top..=bottom {
        put_pixel(frame, left, y, color);
        put_pixel(frame, right, y, color);
    }
}

fn fill_block(frame: &mut Frame, x: i32, y: i32, size: i32, color: Rgb) {
    for dy in 0..size {
        for dx in 0..size {
            put_pixel(frame, x + dx, y + dy, color);
        }
    }
}

fn draw_text(frame: &mut Frame, text: &str, x: i32, baseline: i32, scale: i32, color: Rgb) {
    let top = baseline - GLYPH_HEIGHT * scale;
    let mut cursor = x;
    for ch in text.chars() {
        if cursor >= frame.width() as i32 {
            break;
        }
        if let Some(glyph) = glyph_bits(ch) {
            for (row, pattern) in glyph.iter().enumerate() {
                for col in 0..GLYPH_WIDTH {
                    if (pattern >> (GLYPH_WIDTH - 1 - col)) & 1 == 1 {
                        fill_block(
                            frame,
                            cursor + col * scale,
                            top + row as i32 * scale,
                            scale,
                            color,
                        );
                    }
                }
            }
        }
        cursor += GLYPH_ADVANCE * scale;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::detection::BoundingBox;

    fn black_frame(width: u32, height: u32) -> Frame {
        Frame::new(vec![0u8; (width * height * 3) as usize], width, height, 3, 0)
    }

    fn pixel(frame: &Frame, x: u32, y: u32) -> Rgb {
        let offset = ((y * frame.width() + x) * 3) as usize;
        let data = frame.data();
        [data[offset], data[offset + 1], data[offset + 2]]
    }

    fn pixels_of(frame: &Frame, color: Rgb) -> Vec<(u32, u32)> {
        let mut found = Vec::new();
        for y in 0..frame.height() {
            for x in 0..frame.width() {
                if pixel(frame, x, y) == color {
                    found.push((x, y));
                }
            }
        }
        found
    }

    fn detection(confidence: f32, bbox: BoundingBox) -> Detection {
        Detection { confidence, bbox }
    }

    #[test]
    fn test_box_is_green_and_two_pixels_thick() {
        let mut frame = black_frame(200, 120);
        let d = detection(0.75, BoundingBox::new(20, 30, 80, 90));
        BitmapAnnotator::new().draw_detection(&mut frame, &d);

        assert_eq!(pixel(&frame, 20, 30), BOX_COLOR);
        assert_eq!(pixel(&frame, 21, 31), BOX_COLOR);
        assert_eq!(pixel(&frame, 22, 32), [0, 0, 0]);
        assert_eq!(pixel(&frame, 80, 90), BOX_COLOR);
        assert_eq!(pixel(&frame, 79, 89), BOX_COLOR);
        assert_eq!(pixel(&frame, 50, 30), BOX_COLOR);
        assert_eq!(pixel(&frame, 50, 60), [0, 0, 0]);
    }

    #[test]
    fn test_label_sits_above_box() {
        let mut frame = black_frame(200, 120);
        let d = detection(0.75, BoundingBox::new(20, 30, 80, 90));
        BitmapAnnotator::new().draw_detection(&mut frame, &d);

        // '7' has a full top row; baseline 20 puts it on row 13.
        for x in 20..25 {
            assert_eq!(pixel(&frame, x, 13), BOX_COLOR);
        }
        assert_eq!(pixel(&frame, 20, 12), [0, 0, 0]);
    }

    #[test]
    fn test_label_off_top_edge_is_clipped() {
        let mut frame = black_frame(100, 60);
        let d = detection(0.9, BoundingBox::new(10, 0, 50, 40));
        BitmapAnnotator::new().draw_detection(&mut frame, &d);

        let green = pixels_of(&frame, BOX_COLOR);
        assert!(!green.is_empty());
        for (x, y) in green {
            assert!((10..=50).contains(&x) && y <= 40);
            assert!(x <= 11 || x >= 49 || y <= 1 || y >= 39, "({x}, {y}) not on outline");
        }
    }

    #[test]
    fn test_box_touching_frame_edges() {
        let mut frame = black_frame(64, 48);
        let d = detection(0.8, BoundingBox::new(0, 0, 63, 47));
        BitmapAnnotator::new().draw_detection(&mut frame, &d);

        assert_eq!(pixel(&frame, 0, 0), BOX_COLOR);
        assert_eq!(pixel(&frame, 63, 47), BOX_COLOR);
        assert_eq!(pixel(&frame, 62, 46), BOX_COLOR);
    }

    #[test]
    fn test_summary_overlay_positions_and_colors() {
        let mut frame = black_frame(240, 100);
        BitmapAnnotator::new().draw_summary(&mut frame, 2, 1.5);

        // 'F' opens both overlays with a full top row at twice the glyph size.
        assert_eq!(pixel(&frame, 10, 16), FACE_COUNT_COLOR);
        assert_eq!(pixel(&frame, 19, 17), FACE_COUNT_COLOR);
        assert_eq!(pixel(&frame, 10, 15), [0, 0, 0]);
        assert_eq!(pixel(&frame, 10, 46), FPS_COLOR);
        assert_eq!(pixel(&frame, 19, 47), FPS_COLOR);
        assert_eq!(pixel(&frame, 10, 45), [0, 0, 0]);
    }

    #[test]
    fn test_annotate_draws_detections_then_summary() {
        let mut frame = black_frame(320, 240);
        let detections = [
            detection(0.7, BoundingBox::new(100, 100, 150, 150)),
            detection(0.8, BoundingBox::new(200, 120, 260, 200)),
        ];
        BitmapAnnotator::new().annotate(&mut frame, &detections, 2, 0.0);

        assert_eq!(pixel(&frame, 100, 100), BOX_COLOR);
        assert_eq!(pixel(&frame, 260, 200), BOX_COLOR);
        assert!(!pixels_of(&frame, FACE_COUNT_COLOR).is_empty());
        assert!(!pixels_of(&frame, FPS_COLOR).is_empty());
    }

    #[test]
    fn test_text_past_right_edge_is_clipped() {
        let mut frame = black_frame(30, 80);
        BitmapAnnotator::new().draw_summary(&mut frame, 123456, 98765.43);
        assert!(!pixels_of(&frame, FACE_COUNT_COLOR).is_empty());
    }

    #[test]
    fn test_single_channel_frame_is_left_untouched() {
        let mut frame = Frame::new(vec![0u8; 50 * 50], 50, 50, 1, 0);
        let d = detection(0.9, BoundingBox::new(5, 20, 40, 45));
        BitmapAnnotator::new().draw_detection(&mut frame, &d);
        assert!(frame.data().iter().all(|&v| v == 0));
    }
}
