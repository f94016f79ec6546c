// Fixed-kernel convolution filters (blur, sharpen, emboss).

use image::{DynamicImage, ImageBuffer, Pixel};

/// A square convolution kernel with its divisor and offset
#[derive(Debug, Clone, PartialEq)]
pub struct Kernel {
    size: usize,
    weights: Vec<f32>,
    scale: f32,
    offset: f32,
}

impl Kernel {
    /// `weights` are row-major and must hold `size * size` values
    pub fn new(size: usize, weights: Vec<f32>, scale: f32, offset: f32) -> Self {
        debug_assert_eq!(weights.len(), size * size);
        debug_assert!(size % 2 == 1);
        Self {
            size,
            weights,
            scale,
            offset,
        }
    }

    /// 5x5 ring of ones around a hollow centre
    pub fn blur() -> Self {
        #[rustfmt::skip]
        let weights = vec![
            1.0, 1.0, 1.0, 1.0, 1.0,
            1.0, 0.0, 0.0, 0.0, 1.0,
            1.0, 0.0, 0.0, 0.0, 1.0,
            1.0, 0.0, 0.0, 0.0, 1.0,
            1.0, 1.0, 1.0, 1.0, 1.0,
        ];
        Self::new(5, weights, 16.0, 0.0)
    }

    pub fn sharpen() -> Self {
        #[rustfmt::skip]
        let weights = vec![
            -2.0, -2.0, -2.0,
            -2.0, 32.0, -2.0,
            -2.0, -2.0, -2.0,
        ];
        Self::new(3, weights, 16.0, 0.0)
    }

    pub fn emboss() -> Self {
        #[rustfmt::skip]
        let weights = vec![
            -1.0, 0.0, 0.0,
             0.0, 1.0, 0.0,
             0.0, 0.0, 0.0,
        ];
        Self::new(3, weights, 1.0, 128.0)
    }
}

/// Convolve the colour channels of `image`. Alpha is copied through and
/// out-of-bounds reads replicate the nearest edge pixel.
pub fn convolve<P>(image: &ImageBuffer<P, Vec<u8>>, kernel: &Kernel) -> ImageBuffer<P, Vec<u8>>
where
    P: Pixel<Subpixel = u8>,
{
    let (width, height) = image.dimensions();
    let mut out = image.clone();
    let colour_channels = P::CHANNEL_COUNT as usize - usize::from(P::HAS_ALPHA);
    let half = (kernel.size / 2) as i64;

    for y in 0..height {
        for x in 0..width {
            let mut acc = [0.0f32; 4];

            for ky in 0..kernel.size {
                for kx in 0..kernel.size {
                    let weight = kernel.weights[ky * kernel.size + kx];
                    if weight == 0.0 {
                        continue;
                    }
                    let sx = (x as i64 + kx as i64 - half).clamp(0, width as i64 - 1) as u32;
                    let sy = (y as i64 + ky as i64 - half).clamp(0, height as i64 - 1) as u32;
                    let source = image.get_pixel(sx, sy).channels();
                    for c in 0..colour_channels {
                        acc[c] += f32::from(source[c]) * weight;
                    }
                }
            }

            let target = out.get_pixel_mut(x, y).channels_mut();
            for c in 0..colour_channels {
                target[c] = (acc[c] / kernel.scale + kernel.offset).round().clamp(0.0, 255.0) as u8;
            }
        }
    }

    out
}

/// Convolve any decoded image, keeping its colour type where it is 8-bit
pub fn apply(image: &DynamicImage, kernel: &Kernel) -> DynamicImage {
    match image {
        DynamicImage::ImageLuma8(buffer) => DynamicImage::ImageLuma8(convolve(buffer, kernel)),
        DynamicImage::ImageLumaA8(buffer) => DynamicImage::ImageLumaA8(convolve(buffer, kernel)),
        DynamicImage::ImageRgb8(buffer) => DynamicImage::ImageRgb8(convolve(buffer, kernel)),
        DynamicImage::ImageRgba8(buffer) => DynamicImage::ImageRgba8(convolve(buffer, kernel)),
        other => DynamicImage::ImageRgba8(convolve(&other.to_rgba8(), kernel)),
    }
}
