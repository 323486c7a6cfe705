//! Binarization: fixed-cut thresholding and Otsu automatic threshold
//! selection.

use crate::models::image::Image;
use crate::models::pixel::{Gray, Mono, Pixel, convert, threshold_pixel};

/// Binarize an image against a caller-supplied cutoff.
///
/// Every pixel is mapped through [`threshold_pixel`]; luminance at or above
/// `cut` becomes white.
pub fn threshold_binarize<P: Pixel>(img: &Image<P>, cut: u8) -> Image<Mono> {
    let mut out = Image::new(img.width(), img.height());

    for y in 0..img.height() {
        for x in 0..img.width() {
            out.set(x, y, threshold_pixel(img.get(x, y), cut));
        }
    }

    out
}

/// Binarize an image with an automatically selected threshold, see
/// [`otsu_threshold`]
pub fn otsu_binarize<P: Pixel>(img: &Image<P>) -> Image<Mono> {
    threshold_binarize(img, otsu_threshold(img))
}

/// Select a binarization threshold with Otsu's method.
///
/// Builds a 256-bin luminance histogram, normalizes it to a probability
/// distribution and picks the candidate maximizing the between-class
/// variance `(avg*w - u)^2 / (w*(1 - w))`, where `w` and `u` are the running
/// class probability and first moment. The first candidate achieving the
/// strict maximum wins, which keeps threshold selection reproducible.
/// Candidates with a zero-probability class are skipped.
pub fn otsu_threshold<P: Pixel>(img: &Image<P>) -> u8 {
    if img.pixels().is_empty() {
        return 0;
    }

    let mut histogram = [0.0f64; 256];
    for &px in img.pixels() {
        let gray: Gray = convert(px);
        histogram[gray.v as usize] += 1.0;
    }

    let size = img.pixels().len() as f64;
    for bin in histogram.iter_mut() {
        *bin /= size;
    }

    let mut avg_value = 0.0;
    for (i, &p) in histogram.iter().enumerate() {
        avg_value += i as f64 * p;
    }

    let mut threshold = 0usize;
    let mut max_variance = 0.0;
    let mut w = 0.0;
    let mut u = 0.0;
    for (i, &p) in histogram.iter().enumerate() {
        w += p;
        u += i as f64 * p;

        // both classes must carry mass for the variance to be defined
        let denom = w * (1.0 - w);
        if denom <= 0.0 {
            continue;
        }

        let t = avg_value * w - u;
        let variance = t * t / denom;
        if variance > max_variance {
            max_variance = variance;
            threshold = i;
        }
    }

    threshold as u8
}

impl<P: Pixel> Image<P> {
    /// Monochrome copy of this image using the given cutoff, see
    /// [`threshold_binarize`]
    pub fn threshold(&self, cut: u8) -> Image<Mono> {
        threshold_binarize(self, cut)
    }

    /// Monochrome copy of this image using an Otsu-selected cutoff, see
    /// [`otsu_binarize`]
    pub fn threshold_otsu(&self) -> Image<Mono> {
        otsu_binarize(self)
    }
}
