use ndarray::{s, ArrayView3, ArrayViewMut3};

/// A single camera frame: contiguous RGB bytes in row-major order.
///
/// Channel-order conversion (camera BGR) happens at I/O boundaries only;
/// the pipeline treats pixel data as RGB.
#[derive(Clone, Debug)]
pub struct Frame {
    data: Vec<u8>,
    width: u32,
    height: u32,
    channels: u8,
    index: usize,
}

impl Frame {
    pub fn new(data: Vec<u8>, width: u32, height: u32, channels: u8, index: usize) -> Self {
        debug_assert_eq!(
            data.len(),
            (width as usize) * (height as usize) * (channels as usize),
            "data length must equal width * height * channels"
        );
        Self {
            data,
            width,
            height,
            channels,
            index,
        }
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn channels(&self) -> u8 {
        self.channels
    }

    /// Position of this frame in the capture sequence.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn as_ndarray(&self) -> ArrayView3<'_, u8> {
        ArrayView3::from_shape(self.shape(), &self.data)
            .expect("Frame data length must match dimensions")
    }

    pub fn as_ndarray_mut(&mut self) -> ArrayViewMut3<'_, u8> {
        ArrayViewMut3::from_shape(self.shape(), &mut self.data)
            .expect("Frame data length must match dimensions")
    }

    /// Copies the pixels in columns `x1..x2` and rows `y1..y2` into a new frame.
    ///
    /// Bounds are clipped to the frame. Returns `None` when the clipped
    /// region holds no pixels.
    pub fn crop(&self, x1: i32, y1: i32, x2: i32, y2: i32) -> Option<Frame> {
        let x1 = x1.clamp(0, self.width as i32) as usize;
        let y1 = y1.clamp(0, self.height as i32) as usize;
        let x2 = x2.clamp(0, self.width as i32) as usize;
        let y2 = y2.clamp(0, self.height as i32) as usize;
        if x2 <= x1 || y2 <= y1 {
            return None;
        }

        let view = self.as_ndarray();
        let region = view.slice(s![y1..y2, x1..x2, ..]);
        let data: Vec<u8> = region.iter().copied().collect();

        Some(Frame::new(
            data,
            (x2 - x1) as u32,
            (y2 - y1) as u32,
            self.channels,
            self.index,
        ))
    }

    fn shape(&self) -> (usize, usize, usize) {
        (
            self.height as usize,
            self.width as usize,
            self.channels as usize,
        )
    }
}
