//! Nearest-neighbor grayscale downsampling.

use super::gray::{rgb_to_gray, GrayImage};
use crate::raster::Image;

impl GrayImage {
    /// Convert `image` to grayscale and resample it to
    /// `target_width x target_height` by nearest-neighbor.
    ///
    /// Destination pixel `(j, i)` reads source pixel
    /// `(j * width / target_width, i * height / target_height)` with
    /// truncating integer division. Alpha is ignored. A zero target
    /// dimension yields an empty image.
    ///
    /// # Example
    ///
    /// ```
    /// use png_phash::{GrayImage, Image};
    ///
    /// let image = Image::from_rgba(1, 1, vec![30, 60, 90, 255]).unwrap();
    /// let gray = GrayImage::resample(&image, 9, 8);
    /// assert_eq!(gray.samples().len(), 72);
    /// assert!(gray.samples().iter().all(|&s| s == 60));
    /// ```
    pub fn resample(image: &Image, target_width: u32, target_height: u32) -> GrayImage {
        let src_w = u64::from(image.width());
        let src_h = u64::from(image.height());
        let tw = u64::from(target_width);
        let th = u64::from(target_height);
        let pixels = image.pixels();

        let mut samples = Vec::with_capacity(target_width as usize * target_height as usize);
        for i in 0..th {
            let src_y = (i * src_h / th) as usize;
            let row_start = src_y * src_w as usize;
            for j in 0..tw {
                let src_x = (j * src_w / tw) as usize;
                let off = (row_start + src_x) * 4;
                samples.push(rgb_to_gray(pixels[off], pixels[off + 1], pixels[off + 2]));
            }
        }

        GrayImage {
            width: target_width,
            height: target_height,
            samples,
        }
    }
}
