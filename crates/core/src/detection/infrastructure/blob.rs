//! Input blob construction for the SSD face network.
//!
//! Mirrors the network's training preprocessing: bilinear resize to a square
//! input, per-channel mean subtraction in B, G, R order, then scaling.
//! Getting any of these wrong does not fail loudly, detections just degrade.

use image::imageops::{self, FilterType};
use image::RgbImage;
use ndarray::Array4;

use crate::shared::config::BlobParams;
use crate::shared::frame::Frame;

/// Builds a `[1, 3, size, size]` float blob from an RGB frame.
///
/// Channel 0 holds blue, 1 green, 2 red, each as `(pixel - mean) * scale`.
pub fn build_blob(
    frame: &Frame,
    params: &BlobParams,
) -> Result<Array4<f32>, Box<dyn std::error::Error>> {
    if frame.channels() != 3 {
        return Err(format!("expected a 3-channel frame, got {}", frame.channels()).into());
    }

    let size = params.size;
    let img = RgbImage::from_raw(frame.width(), frame.height(), frame.data().to_vec())
        .ok_or("Failed to create image from frame data")?;
    let resized = if img.dimensions() == (size, size) {
        img
    } else {
        imageops::resize(&img, size, size, FilterType::Triangle)
    };

    let side = size as usize;
    let mut blob = Array4::<f32>::zeros((1, 3, side, side));
    for (x, y, pixel) in resized.enumerate_pixels() {
        let [r, g, b] = pixel.0;
        let (row, col) = (y as usize, x as usize);
        for (channel, value) in [b, g, r].into_iter().enumerate() {
            blob[[0, channel, row, col]] =
                (value as f32 - params.mean_bgr[channel]) * params.scale;
        }
    }

    Ok(blob)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn solid_frame(width: u32, height: u32, rgb: [u8; 3]) -> Frame {
        let data = rgb
            .iter()
            .copied()
            .cycle()
            .take((width * height * 3) as usize)
            .collect();
        Frame::new(data, width, height, 3, 0)
    }

    #[test]
    fn test_blob_shape_is_nchw_300() {
        let frame = solid_frame(640, 480, [10, 20, 30]);
        let blob = build_blob(&frame, &BlobParams::default()).unwrap();
        assert_eq!(blob.shape(), &[1, 3, 300, 300]);
    }

    #[test]
    fn test_mean_subtracted_in_bgr_order() {
        // R=200, G=150, B=100
        let frame = solid_frame(300, 300, [200, 150, 100]);
        let blob = build_blob(&frame, &BlobParams::default()).unwrap();

        assert_relative_eq!(blob[[0, 0, 0, 0]], 100.0 - 104.0);
        assert_relative_eq!(blob[[0, 1, 0, 0]], 150.0 - 177.0);
        assert_relative_eq!(blob[[0, 2, 0, 0]], 200.0 - 123.0);
        assert_relative_eq!(blob[[0, 2, 299, 299]], 77.0);
    }

    #[test]
    fn test_resize_keeps_uniform_color() {
        let frame = solid_frame(64, 48, [123, 177, 104]);
        let blob = build_blob(&frame, &BlobParams::default()).unwrap();
        for value in blob.iter() {
            assert_relative_eq!(*value, 0.0, epsilon = 1.0);
        }
    }

    #[test]
    fn test_scale_applied_after_mean() {
        let params = BlobParams {
            size: 4,
            scale: 0.5,
            mean_bgr: [0.0, 0.0, 0.0],
        };
        let frame = solid_frame(4, 4, [8, 6, 4]);
        let blob = build_blob(&frame, &params).unwrap();
        assert_relative_eq!(blob[[0, 0, 1, 1]], 2.0);
        assert_relative_eq!(blob[[0, 1, 1, 1]], 3.0);
        assert_relative_eq!(blob[[0, 2, 1, 1]], 4.0);
    }

    #[test]
    fn test_keeps_spatial_layout_row_major() {
        // Left half red, right half blue; after resize the left column
        // must still be red and the right column blue.
        let (w, h) = (8u32, 8u32);
        let mut data = Vec::new();
        for _y in 0..h {
            for x in 0..w {
                if x < w / 2 {
                    data.extend_from_slice(&[255, 0, 0]);
                } else {
                    data.extend_from_slice(&[0, 0, 255]);
                }
            }
        }
        let frame = Frame::new(data, w, h, 3, 0);
        let params = BlobParams {
            size: 8,
            scale: 1.0,
            mean_bgr: [0.0, 0.0, 0.0],
        };
        let blob = build_blob(&frame, &params).unwrap();
        assert_relative_eq!(blob[[0, 2, 3, 0]], 255.0);
        assert_relative_eq!(blob[[0, 0, 3, 0]], 0.0);
        assert_relative_eq!(blob[[0, 0, 3, 7]], 255.0);
        assert_relative_eq!(blob[[0, 2, 3, 7]], 0.0);
    }

    #[test]
    fn test_rejects_non_rgb_frame() {
        let frame = Frame::new(vec![0u8; 16], 4, 4, 1, 0);
        assert!(build_blob(&frame, &BlobParams::default()).is_err());
    }
}
