/// RGB pixel with three 8-bit channels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

impl Rgb {
    /// Pure white, used as the fill color when rotation samples fall outside the source
    pub const WHITE: Rgb = Rgb {
        r: 255,
        g: 255,
        b: 255,
    };

    /// Create a new RGB pixel
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Grayscale pixel with a single luminance channel (0-255)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Gray {
    /// Luminance value
    pub v: u8,
}

impl Gray {
    /// Create a new grayscale pixel
    pub fn new(v: u8) -> Self {
        Self { v }
    }
}

/// Monochrome pixel: 0 = black, 1 = white
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Mono {
    /// Binary value, 0 or 1
    pub v: u8,
}

impl Mono {
    /// Black pixel (value 0)
    pub const BLACK: Mono = Mono { v: 0 };
    /// White pixel (value 1)
    pub const WHITE: Mono = Mono { v: 1 };

    /// True if this pixel is black
    pub fn is_black(self) -> bool {
        self.v == 0
    }
}

/// A pixel variant that can be converted to and from canonical RGB.
///
/// Every variant exposes its canonical RGB expansion; conversion between two
/// non-RGB variants always routes through RGB. Both directions are total and
/// deterministic, and same-variant round trips are exact.
pub trait Pixel: Copy + Default {
    /// Canonical RGB expansion of this pixel
    fn to_rgb(self) -> Rgb;
    /// Construct this variant from an RGB pixel
    fn from_rgb(rgb: Rgb) -> Self;
}

impl Pixel for Rgb {
    fn to_rgb(self) -> Rgb {
        self
    }

    fn from_rgb(rgb: Rgb) -> Self {
        rgb
    }
}

impl Pixel for Gray {
    fn to_rgb(self) -> Rgb {
        Rgb::new(self.v, self.v, self.v)
    }

    fn from_rgb(rgb: Rgb) -> Self {
        Gray::new(luminance(rgb))
    }
}

impl Pixel for Mono {
    fn to_rgb(self) -> Rgb {
        let v = self.v * 255;
        Rgb::new(v, v, v)
    }

    fn from_rgb(rgb: Rgb) -> Self {
        // Fixed conversion cutoff: strictly above mid-gray is white
        if luminance(rgb) > 127 {
            Mono::WHITE
        } else {
            Mono::BLACK
        }
    }
}

/// Empirical luminance: 0.30*r + 0.59*g + 0.11*b, rounded by adding 0.5
/// and truncating
fn luminance(rgb: Rgb) -> u8 {
    (rgb.r as f64 * 0.30 + rgb.g as f64 * 0.59 + rgb.b as f64 * 0.11 + 0.5) as u8
}

/// Convert a pixel from one variant to another, routing through RGB
pub fn convert<F: Pixel, T: Pixel>(px: F) -> T {
    T::from_rgb(px.to_rgb())
}

/// Binarize a pixel against a caller-supplied cutoff.
///
/// The pixel is first converted to grayscale; luminance at or above `cut`
/// maps to white. Note the `>=` here versus the strict `>` of the fixed
/// RGB-to-Mono conversion; downstream black/white counts depend on both
/// cutoffs staying as they are.
pub fn threshold_pixel<P: Pixel>(px: P, cut: u8) -> Mono {
    let gray: Gray = convert(px);
    if gray.v >= cut {
        Mono::WHITE
    } else {
        Mono::BLACK
    }
}
