/// Best-scoring candidate position of a 2D code found by the locator.
///
/// `y0` and `tilt` jointly describe the code's affine position: the code's
/// top edge passes through row `y0` at the left image border with slope
/// `tilt`. `confidence` is the window-sum score that justified the choice.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CodeLocation {
    /// Row offset of the code's top edge at the left image border
    pub y0: usize,
    /// Slope of the code relative to the horizontal axis
    pub tilt: f64,
    /// Window-sum score of the winning candidate
    pub confidence: i64,
}
