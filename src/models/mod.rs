//! Core data structures (pixel variants, Image, CodeLocation)

pub mod image;
pub mod location;
pub mod pixel;

pub use image::Image;
pub use location::CodeLocation;
pub use pixel::{Gray, Mono, Pixel, Rgb, convert, threshold_pixel};
