//! Geometric transforms: transpose, crop, rotate.
//!
//! Every transform allocates a fresh result image and leaves its input
//! untouched.

use crate::models::image::Image;
use crate::models::pixel::{Pixel, Rgb};

/// Return the transposed image: `result(y, x) = source(x, y)`
pub fn transpose<P: Pixel>(img: &Image<P>) -> Image<P> {
    let mut out = Image::new(img.height(), img.width());

    for x in 0..img.width() {
        for y in 0..img.height() {
            out.set(y, x, img.get(x, y));
        }
    }

    out
}

/// Crop the inclusive rectangle `[left, right] x [top, bottom]` into a new
/// image of size `(right - left + 1) x (bottom - top + 1)`.
///
/// Equal bounds degenerate to a one-pixel-wide or one-pixel-tall slice.
/// Panics if the ordering is violated or the rectangle exceeds the image.
pub fn crop<P: Pixel>(
    img: &Image<P>,
    left: usize,
    right: usize,
    top: usize,
    bottom: usize,
) -> Image<P> {
    assert!(
        left <= right && top <= bottom,
        "invalid crop rect: left {} right {} top {} bottom {}",
        left,
        right,
        top,
        bottom
    );

    let mut piece = Image::new(right - left + 1, bottom - top + 1);

    for (py, y) in (top..=bottom).enumerate() {
        for (px, x) in (left..=right).enumerate() {
            piece.set(px, py, img.get(x, y));
        }
    }

    piece
}

/// Rotate the image by `rad` radians around center `(cx, cy)`.
///
/// The result has the same dimensions as the source. Each destination pixel
/// samples its inverse-rotated source coordinate with nearest-neighbor
/// rounding; samples falling outside the source are filled with white
/// converted into the working pixel variant. Rotating by 0 is the identity.
pub fn rotate<P: Pixel>(img: &Image<P>, rad: f64, cx: usize, cy: usize) -> Image<P> {
    let (sin_phi, cos_phi) = rad.sin_cos();
    let white = P::from_rgb(Rgb::WHITE);

    let width = img.width() as i64;
    let height = img.height() as i64;
    let mut out = Image::new(img.width(), img.height());

    for y in 0..img.height() {
        for x in 0..img.width() {
            // move the rotation center to the origin
            let tx = x as f64 - cx as f64;
            let ty = y as f64 - cy as f64;

            // rotate, round to the nearest pixel, translate back
            let rx = (tx * cos_phi - ty * sin_phi).round() as i64 + cx as i64;
            let ry = (tx * sin_phi + ty * cos_phi).round() as i64 + cy as i64;

            let value = if rx >= 0 && rx < width && ry >= 0 && ry < height {
                img.get(rx as usize, ry as usize)
            } else {
                white
            };
            out.set(x, y, value);
        }
    }

    out
}

impl<P: Pixel> Image<P> {
    /// Transposed copy of this image, see [`transpose`]
    pub fn transpose(&self) -> Image<P> {
        transpose(self)
    }

    /// Cropped copy of this image, see [`crop`]
    pub fn crop(&self, left: usize, right: usize, top: usize, bottom: usize) -> Image<P> {
        crop(self, left, right, top, bottom)
    }

    /// Rotated copy of this image, see [`rotate`]
    pub fn rotate(&self, rad: f64, cx: usize, cy: usize) -> Image<P> {
        rotate(self, rad, cx, cy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::pixel::{Gray, Mono};

    fn gradient(width: usize, height: usize) -> Image<Gray> {
        let px = (0..width * height)
            .map(|i| Gray::new((i % 251) as u8))
            .collect();
        Image::from_raw(width, height, px)
    }

    #[test]
    fn test_transpose_swaps_coordinates() {
        let img = gradient(4, 3);
        let t = img.transpose();
        assert_eq!(t.width(), 3);
        assert_eq!(t.height(), 4);
        for y in 0..3 {
            for x in 0..4 {
                assert_eq!(t.get(y, x), img.get(x, y));
            }
        }
    }

    #[test]
    fn test_transpose_involution() {
        let img = gradient(7, 5);
        assert_eq!(img.transpose().transpose(), img);
    }

    #[test]
    fn test_crop_size_and_content() {
        let img = gradient(10, 8);
        let piece = img.crop(2, 6, 1, 4);
        assert_eq!(piece.width(), 5);
        assert_eq!(piece.height(), 4);
        for y in 0..4 {
            for x in 0..5 {
                assert_eq!(piece.get(x, y), img.get(2 + x, 1 + y));
            }
        }
    }

    #[test]
    fn test_crop_degenerate_single_row() {
        let img = gradient(6, 6);
        let row = img.crop(0, 5, 3, 3);
        assert_eq!(row.width(), 6);
        assert_eq!(row.height(), 1);
        assert_eq!(row.get(4, 0), img.get(4, 3));
    }

    #[test]
    #[should_panic(expected = "invalid crop rect")]
    fn test_crop_rejects_reversed_bounds() {
        let img = gradient(6, 6);
        let _ = img.crop(4, 2, 0, 5);
    }

    #[test]
    fn test_rotate_zero_is_identity() {
        let img = gradient(9, 9);
        assert_eq!(img.rotate(0.0, 0, 0), img);
        assert_eq!(img.rotate(0.0, 4, 4), img);
        assert_eq!(img.rotate(0.0, 8, 8), img);
    }

    #[test]
    fn test_rotate_quarter_turn_center() {
        // 3x3 with a single marked pixel right of center; a quarter turn
        // moves the sampled source around the center.
        let mut img: Image<Gray> = Image::new(3, 3);
        img.set(2, 1, Gray::new(200));

        let rot = img.rotate(std::f64::consts::FRAC_PI_2, 1, 1);
        // destination (1, 0) maps back onto source (2, 1)
        assert_eq!(rot.get(1, 0), Gray::new(200));
    }

    #[test]
    fn test_rotate_fills_outside_with_white() {
        let img: Image<Mono> = Image::new(4, 4); // all black
        let rot = img.rotate(std::f64::consts::FRAC_PI_4, 0, 0);

        // the corner opposite the rotation center samples outside the source
        assert_eq!(rot.get(0, 3), Mono::WHITE);
        // the rotation center itself maps onto itself
        assert_eq!(rot.get(0, 0), Mono::BLACK);
    }

    #[test]
    fn test_rotate_preserves_dimensions() {
        let img = gradient(5, 3);
        let rot = img.rotate(0.3, 2, 1);
        assert_eq!(rot.width(), 5);
        assert_eq!(rot.height(), 3);
    }
}
