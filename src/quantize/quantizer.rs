use std::path::Path;

use image::RgbImage;
use rand::Rng;

use crate::cluster::kmeans::KMeans;
use crate::quantize::error::QuantizeError;
use crate::quantize::palette::Palette;

/// Compresses an image to a fixed number of colors with k-means.
///
/// Every pixel becomes a normalized RGB sample, the samples are clustered,
/// and each pixel is remapped to its cluster's mean color. `colors` plays the
/// role of `k`; it must not exceed the number of pixels in the image.
#[derive(Debug, Clone, Copy)]
pub struct Quantizer {
    pub colors: usize,
    pub max_iterations: usize,
}

/// A quantized image, kept in indexed form: the palette plus one palette
/// index per source pixel. Frozen once produced.
#[derive(Debug, Clone)]
pub struct QuantizedImage {
    pub palette: Palette,
    pub assignments: Vec<usize>,
    pub width: u32,
    pub height: u32,
    pub iterations: usize,
    pub converged: bool,
}

impl Quantizer {
    pub fn new(colors: usize, max_iterations: usize) -> Quantizer {
        Quantizer { colors, max_iterations }
    }

    /// Runs k-means over the image's pixels.
    ///
    /// # Arguments
    /// - `image` — source image; channels are scaled to [0, 1] before
    ///             clustering so distances weigh all channels equally
    /// - `rng`   — random source for centroid initialization
    ///
    /// # Errors
    /// Fails before iterating if the image has no pixels, `colors` is outside
    /// `1..=pixel count`, or `max_iterations` is zero.
    pub fn quantize<R: Rng + ?Sized>(
        &self,
        image: &RgbImage,
        rng: &mut R,
    ) -> Result<QuantizedImage, QuantizeError> {
        let samples = pixel_samples(image);

        let fit = KMeans::new(self.colors, self.max_iterations).fit(&samples, rng)?;

        Ok(QuantizedImage {
            palette: Palette::from_centroids(&fit.centroids),
            assignments: fit.assignments,
            width: image.width(),
            height: image.height(),
            iterations: fit.iterations,
            converged: fit.converged,
        })
    }
}

impl QuantizedImage {
    /// Reconstructs the full-size image, each pixel replaced by its assigned
    /// palette color.
    pub fn to_image(&self) -> RgbImage {
        let mut out = RgbImage::new(self.width, self.height);
        for (x, y, pixel) in out.enumerate_pixels_mut() {
            let index = (y * self.width + x) as usize;
            let color = self.palette.colors[self.assignments[index]];
            *pixel = image::Rgb(color);
        }
        out
    }
}

/// Opens a raster image from disk and converts it to RGB8.
pub fn load_image(path: &Path) -> Result<RgbImage, QuantizeError> {
    let img = image::open(path)?;
    Ok(img.to_rgb8())
}

/// Flattens an image into row-major pixel samples with channels in [0, 1].
fn pixel_samples(image: &RgbImage) -> Vec<Vec<f64>> {
    image.pixels()
        .map(|pixel| pixel.0.iter().map(|&c| c as f64 / 255.0).collect())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    /// 2x2 image: left column black, right column white.
    fn two_color_image() -> RgbImage {
        RgbImage::from_fn(2, 2, |x, _| {
            if x == 0 { image::Rgb([0, 0, 0]) } else { image::Rgb([255, 255, 255]) }
        })
    }

    #[test]
    fn test_two_color_image_reproduces_itself() {
        let img = two_color_image();
        let quantized = Quantizer::new(2, 10).quantize(&img, &mut rng()).unwrap();

        assert!(quantized.converged);
        assert_eq!(quantized.palette.len(), 2);

        let out = quantized.to_image();
        assert_eq!(out.dimensions(), img.dimensions());
        assert_eq!(out.as_raw(), img.as_raw(), "two colors with k = 2 must be lossless");
    }

    #[test]
    fn test_uniform_image_with_one_color_is_exact() {
        let img = RgbImage::from_pixel(3, 2, image::Rgb([40, 90, 200]));
        let quantized = Quantizer::new(1, 5).quantize(&img, &mut rng()).unwrap();

        let out = quantized.to_image();
        assert_eq!(out.as_raw(), img.as_raw());
        assert_eq!(quantized.palette.colors, vec![[40, 90, 200]]);
    }

    #[test]
    fn test_more_colors_than_pixels_is_rejected() {
        let img = two_color_image();
        let result = Quantizer::new(16, 10).quantize(&img, &mut rng());
        assert!(matches!(
            result,
            Err(QuantizeError::Cluster(crate::ClusterError::InvalidClusterCount {
                requested: 16,
                available: 4,
            })),
        ));
    }

    #[test]
    fn test_empty_image_is_rejected() {
        let img = RgbImage::new(0, 0);
        let result = Quantizer::new(1, 10).quantize(&img, &mut rng());
        assert!(matches!(
            result,
            Err(QuantizeError::Cluster(crate::ClusterError::EmptyInput)),
        ));
    }

    #[test]
    fn test_output_uses_at_most_k_colors() {
        let img = RgbImage::from_fn(8, 8, |x, y| {
            image::Rgb([(x * 32) as u8, (y * 32) as u8, ((x + y) * 16) as u8])
        });
        let quantized = Quantizer::new(4, 20).quantize(&img, &mut rng()).unwrap();

        let out = quantized.to_image();
        let mut distinct: Vec<[u8; 3]> = out.pixels().map(|p| p.0).collect();
        distinct.sort();
        distinct.dedup();
        assert!(
            distinct.len() <= 4,
            "expected at most 4 colors, found {}",
            distinct.len(),
        );
    }
}
