//! tomoscan - tomography-based locator for stacked 2D codes
//!
//! An offline preprocessing stage for scanned documents: given a raster
//! scan containing a machine-printed 2D code at an unknown position and
//! tilt, this crate isolates, de-skews, and splits out the sub-images most
//! likely to contain individual codes for downstream decoding.
//!
//! The pipeline is built from small pure layers: a pixel/image data model,
//! geometric transforms (rotate, crop, transpose), adaptive thresholding
//! (Otsu's method), and a tomography projection that scores oblique rays by
//! their black-pixel density. Payload decoding is out of scope.
//!
//! # Example
//! ```
//! use tomoscan::models::{Image, Mono};
//! use tomoscan::locate_code;
//!
//! // blank white page with a black band of height 40 at row 120
//! let mut img = Image::from_raw(300, 300, vec![Mono::WHITE; 300 * 300]);
//! for y in 120..160 {
//!     for x in 0..300 {
//!         img.set(x, y, Mono::BLACK);
//!     }
//! }
//!
//! let loc = locate_code(&img, 10, 40);
//! assert_eq!(loc.y0, 120);
//! assert_eq!(loc.confidence, 40 * 300);
//! ```

#![warn(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

/// Top-level locator (oblique tomography sweep)
pub mod locator;
/// Core data structures (pixel variants, Image, CodeLocation)
pub mod models;
/// PPM raster codec (the only fallible boundary)
pub mod ppm;
/// Binarization (fixed cutoff and Otsu)
pub mod threshold;
/// Tomography projection and sliding-window integration
pub mod tomography;
/// Geometric transforms (transpose, crop, rotate)
pub mod transform;

pub use locator::locate_code;
pub use models::{CodeLocation, Gray, Image, Mono, Pixel, Rgb};
