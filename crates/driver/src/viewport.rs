/// Pixel ratios above this are clamped to bound GPU cost on dense displays.
pub const PIXEL_RATIO_CAP: f64 = 2.0;

/// Current output surface dimensions and pixel density.
///
/// Mutated only by resize and scale-factor events; read by the renderer and
/// the camera on every frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportState {
    pub width: u32,
    pub height: u32,
    pub device_pixel_ratio: f64,
}

impl ViewportState {
    pub fn new(width: u32, height: u32, device_pixel_ratio: f64) -> Self {
        Self {
            width,
            height,
            device_pixel_ratio,
        }
    }

    /// Device ratio clamped to [`PIXEL_RATIO_CAP`].
    pub fn effective_pixel_ratio(&self) -> f64 {
        self.device_pixel_ratio.min(PIXEL_RATIO_CAP)
    }

    pub fn aspect(&self) -> f32 {
        self.width as f32 / self.height as f32
    }
}
