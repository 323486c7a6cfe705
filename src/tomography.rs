//! Tomography projection and piecewise (sliding-window) integration.
//!
//! A projection collapses a 2D image onto a 1D density signal by counting
//! black samples along a family of parallel oblique rays, one ray per image
//! row. Sliding-window sums over that signal are what the locator maximizes.

use rayon::prelude::*;

use crate::models::image::Image;
use crate::models::pixel::{Mono, Pixel, convert};

/// Count the black samples along a single oblique ray.
///
/// The ray anchored at row `y0` with slope `k` visits `(x, y0 + round(k*x))`
/// for increasing `x` and stops permanently the first time the computed row
/// leaves the image. Monochrome input is preferred since other variants are
/// converted sample by sample.
pub fn ray_detection<P: Pixel>(img: &Image<P>, k: f64, y0: usize) -> i64 {
    let height = img.height() as i64;
    let mut n_black = 0;

    for x in 0..img.width() {
        let y = y0 as i64 + (k * x as f64).round() as i64;
        if y < 0 || y >= height {
            break;
        }

        let px: Mono = convert(img.get(x, y as usize));
        if px.is_black() {
            n_black += 1;
        }
    }

    n_black
}

/// Project the image onto a 1D signal for slope `k`, one ray score per row
pub fn project<P: Pixel>(img: &Image<P>, k: f64) -> Vec<i64> {
    let mut tomo = Vec::new();
    project_into(img, k, &mut tomo);
    tomo
}

/// Like [`project`], but reuses the caller's buffer across invocations
pub fn project_into<P: Pixel>(img: &Image<P>, k: f64, tomo: &mut Vec<i64>) {
    tomo.clear();
    tomo.extend((0..img.height()).map(|y0| ray_detection(img, k, y0)));
}

/// Row-parallel variant of [`project`] with identical output.
///
/// Rays are independent per row, so the projection splits cleanly across a
/// rayon pool. Worth it for large scans; for small images prefer [`project`].
pub fn project_parallel<P: Pixel + Sync>(img: &Image<P>, k: f64) -> Vec<i64> {
    (0..img.height())
        .into_par_iter()
        .map(|y0| ray_detection(img, k, y0))
        .collect()
}

/// In-place sliding-window summation.
///
/// After the call, `samples[j]` for `j` in `0..=N-W` holds the sum of the
/// original samples at `[j, j+W-1]`. The remaining tail positions hold
/// leftover prefix sums and must be ignored. Runs in O(N): one prefix-sum
/// pass, one differencing pass.
///
/// Panics unless `1 <= window <= samples.len()`.
pub fn piecewise_integrate(samples: &mut [i64], window: usize) {
    assert!(
        window >= 1 && window <= samples.len(),
        "window {} invalid for {} samples",
        window,
        samples.len()
    );

    for i in 1..samples.len() {
        samples[i] += samples[i - 1];
    }

    // samples[j] = prefix[j + window - 1] - prefix[j - 1]
    let mut prev = 0;
    for j in 0..=samples.len() - window {
        let sum = samples[j + window - 1] - prev;
        prev = samples[j];
        samples[j] = sum;
    }
}
