use ndarray::{s, Array4, ArrayView1};

/// Values per detection slot: `[image_id, label, confidence, x1, y1, x2, y2]`.
pub const SLOT_WIDTH: usize = 7;

const CONFIDENCE: usize = 2;
const BOX_START: usize = 3;

/// Raw SSD output of shape `[1, 1, N, 7]`, one row per candidate slot.
///
/// Box coordinates are fractions of the frame size and are not trusted to
/// lie inside `[0, 1]`.
#[derive(Clone, Debug)]
pub struct DetectionTensor {
    data: Array4<f32>,
}

/// Borrowed view of one detection slot.
#[derive(Clone, Copy, Debug)]
pub struct DetectionSlot<'a> {
    row: ArrayView1<'a, f32>,
}

impl<'a> DetectionSlot<'a> {
    pub fn confidence(&self) -> f32 {
        self.row[CONFIDENCE]
    }

    /// Fractional `[x1, y1, x2, y2]`.
    pub fn fractional_box(&self) -> [f32; 4] {
        [
            self.row[BOX_START],
            self.row[BOX_START + 1],
            self.row[BOX_START + 2],
            self.row[BOX_START + 3],
        ]
    }
}

impl DetectionTensor {
    pub fn new(data: Array4<f32>) -> Result<Self, Box<dyn std::error::Error>> {
        let shape = data.shape();
        if shape[0] == 0 || shape[1] == 0 || shape[3] < SLOT_WIDTH {
            return Err(format!(
                "detection tensor rows must hold at least {SLOT_WIDTH} values, got shape {shape:?}"
            )
            .into());
        }
        Ok(Self { data })
    }

    /// Builds a `[1, 1, N, 7]` tensor from a flat buffer of `N * 7` values.
    pub fn from_flat(values: Vec<f32>) -> Result<Self, Box<dyn std::error::Error>> {
        if values.len() % SLOT_WIDTH != 0 {
            return Err(format!(
                "detection output length {} is not a multiple of {SLOT_WIDTH}",
                values.len()
            )
            .into());
        }
        let slots = values.len() / SLOT_WIDTH;
        let data = Array4::from_shape_vec((1, 1, slots, SLOT_WIDTH), values)?;
        Self::new(data)
    }

    /// Builds a tensor from `(confidence, fractional box)` pairs.
    pub fn from_slots(slots: &[(f32, [f32; 4])]) -> Self {
        let mut values = Vec::with_capacity(slots.len() * SLOT_WIDTH);
        for (confidence, b) in slots {
            values.extend_from_slice(&[0.0, 1.0, *confidence, b[0], b[1], b[2], b[3]]);
        }
        let data = Array4::from_shape_vec((1, 1, slots.len(), SLOT_WIDTH), values)
            .expect("slot buffer length matches shape");
        Self { data }
    }

    pub fn len(&self) -> usize {
        self.data.shape()[2]
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Slots in native order, taken from the first image and class plane.
    pub fn slots(&self) -> impl Iterator<Item = DetectionSlot<'_>> + '_ {
        (0..self.len()).map(move |i| DetectionSlot {
            row: self.data.slice(s![0, 0, i, ..]),
        })
    }
}
