use crate::models::pixel::{Pixel, convert};

/// Owned 2D grid of pixels of a single variant.
///
/// Pixels are stored contiguously in row-major order; coordinate `(x, y)`
/// maps to index `y * width + x`. The image has pure value semantics: clones
/// are deep copies and there is no sharing between instances. Out-of-range
/// access is a programming error and panics.
#[derive(Debug, Clone, PartialEq)]
pub struct Image<P: Pixel> {
    width: usize,
    height: usize,
    px: Vec<P>,
}

impl<P: Pixel> Image<P> {
    /// Create a blank image with every pixel default-valued
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            px: vec![P::default(); width * height],
        }
    }

    /// Create an image from an existing row-major pixel buffer.
    ///
    /// Panics unless `px.len() == width * height`.
    pub fn from_raw(width: usize, height: usize, px: Vec<P>) -> Self {
        assert_eq!(
            px.len(),
            width * height,
            "pixel buffer length {} does not match {}x{} image",
            px.len(),
            width,
            height
        );
        Self { width, height, px }
    }

    /// Image width in pixels
    pub fn width(&self) -> usize {
        self.width
    }

    /// Image height in pixels
    pub fn height(&self) -> usize {
        self.height
    }

    /// Get the pixel at `(x, y)`. Panics if the coordinate is out of range.
    pub fn get(&self, x: usize, y: usize) -> P {
        assert!(
            x < self.width && y < self.height,
            "pixel ({}, {}) outside {}x{} image",
            x,
            y,
            self.width,
            self.height
        );
        self.px[y * self.width + x]
    }

    /// Set the pixel at `(x, y)`. Panics if the coordinate is out of range.
    pub fn set(&mut self, x: usize, y: usize, value: P) {
        assert!(
            x < self.width && y < self.height,
            "pixel ({}, {}) outside {}x{} image",
            x,
            y,
            self.width,
            self.height
        );
        self.px[y * self.width + x] = value;
    }

    /// Row-major view of the pixel buffer
    pub fn pixels(&self) -> &[P] {
        &self.px
    }

    /// Convert every pixel to another variant, producing a new image of the
    /// same dimensions
    pub fn convert<T: Pixel>(&self) -> Image<T> {
        Image {
            width: self.width,
            height: self.height,
            px: self.px.iter().map(|&p| convert(p)).collect(),
        }
    }
}
