//! Top-level 2D-code locator: oblique tomography sweep.
//!
//! The locator brute-forces the unknown skew of a scanned code: it projects
//! the image along a family of oblique directions, sums each projection over
//! a window matching the expected code height, and keeps the direction and
//! row offset with the densest concentration of black pixels. The sweep
//! trades computation for robustness, which is acceptable because the search
//! space is small and each step is O(width * height).

use log::debug;

use crate::models::image::Image;
use crate::models::location::CodeLocation;
use crate::models::pixel::Pixel;
use crate::tomography::{piecewise_integrate, project_into};

/// Find the vertical offset and confidence of a code of height `code_height`
/// in an already-computed projection.
///
/// The projection is integrated in place over windows of `code_height` rows
/// and the first maximal window wins. Returns `(y0, confidence)`.
pub fn estimate_location(tomo: &mut [i64], code_height: usize) -> (usize, i64) {
    piecewise_integrate(tomo, code_height);

    // only the leading N-W+1 positions hold window sums
    let valid = &tomo[..tomo.len() - code_height + 1];

    let mut y0 = 0;
    let mut confidence = valid[0];
    for (i, &v) in valid.iter().enumerate().skip(1) {
        if v > confidence {
            confidence = v;
            y0 = i;
        }
    }

    (y0, confidence)
}

/// Locate a 2D code of expected height `code_height` by sweeping oblique
/// projection angles.
///
/// For each integer step `h` in `[-max_oblique, max_oblique)` the image is
/// projected with slope `k = h / width` and the best window sum for that
/// slope is computed with [`estimate_location`]. The single best estimate
/// across all slopes is returned; on equal confidence the first-seen
/// candidate is kept. Monochrome input is strongly recommended, any other
/// variant is converted ray sample by ray sample.
pub fn locate_code<P: Pixel>(img: &Image<P>, max_oblique: i32, code_height: usize) -> CodeLocation {
    assert!(img.width() > 0, "cannot locate in a zero-width image");
    assert!(
        code_height >= 1 && code_height <= img.height(),
        "code height {} invalid for image height {}",
        code_height,
        img.height()
    );

    let mut tomo = Vec::with_capacity(img.height());
    let mut best = CodeLocation::default();

    for h_oblique in -max_oblique..max_oblique {
        let k = h_oblique as f64 / img.width() as f64;
        project_into(img, k, &mut tomo);

        let (y0, confidence) = estimate_location(&mut tomo, code_height);
        debug!("oblique {h_oblique}: k={k:.5} y0={y0} confidence={confidence}");

        if confidence > best.confidence {
            best = CodeLocation {
                y0,
                tilt: k,
                confidence,
            };
        }
    }

    best
}
