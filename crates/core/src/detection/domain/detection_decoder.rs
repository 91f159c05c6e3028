use crate::detection::domain::detection_tensor::{DetectionSlot, DetectionTensor};
use crate::shared::detection::{BoundingBox, Detection};

/// Turns raw SSD output into frame-clamped face detections.
///
/// A slot is kept only when its confidence is strictly above the threshold.
/// Kept boxes are scaled to pixels, truncated, clamped to the frame and
/// dropped if the clamped box has no area. Output follows slot order.
#[derive(Clone, Debug)]
pub struct DetectionDecoder {
    confidence_threshold: f32,
}

impl DetectionDecoder {
    pub fn new(confidence_threshold: f32) -> Self {
        Self {
            confidence_threshold,
        }
    }

    pub fn decode(
        &self,
        tensor: &DetectionTensor,
        frame_width: u32,
        frame_height: u32,
    ) -> Vec<Detection> {
        tensor
            .slots()
            .filter_map(|slot| self.decode_slot(&slot, frame_width, frame_height))
            .collect()
    }

    fn decode_slot(&self, slot: &DetectionSlot<'_>, width: u32, height: u32) -> Option<Detection> {
        let confidence = slot.confidence();
        if confidence.is_nan() || confidence <= self.confidence_threshold {
            return None;
        }

        let bbox = clamp_to_frame(denormalize(slot.fractional_box(), width, height), width, height);
        if bbox.is_empty() {
            log::debug!("Dropping zero-area detection {bbox:?} (confidence {confidence:.3})");
            return None;
        }

        Some(Detection { confidence, bbox })
    }
}

/// Scales a fractional box by the frame size and truncates toward zero.
fn denormalize(fractional: [f32; 4], width: u32, height: u32) -> BoundingBox {
    let w = width as f32;
    let h = height as f32;
    BoundingBox::new(
        (fractional[0] * w) as i32,
        (fractional[1] * h) as i32,
        (fractional[2] * w) as i32,
        (fractional[3] * h) as i32,
    )
}

/// Floors the start corner at 0 and caps the end corner at the last pixel.
fn clamp_to_frame(b: BoundingBox, width: u32, height: u32) -> BoundingBox {
    let max_x = width as i32 - 1;
    let max_y = height as i32 - 1;
    BoundingBox::new(
        b.start_x.max(0),
        b.start_y.max(0),
        b.end_x.min(max_x),
        b.end_y.min(max_y),
    )
}
