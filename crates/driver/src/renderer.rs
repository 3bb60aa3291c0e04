use scene::{PerspectiveCamera, Scene};

use crate::error::RenderError;

/// The seam between the driver loop and whatever draws the scene.
///
/// The driver calls `render` exactly once per tick and keeps the output
/// size and pixel-ratio cap in sync with the host viewport.
pub trait Renderer {
    /// Draw one frame of `scene` as seen from `camera`.
    fn render(&mut self, scene: &Scene, camera: &PerspectiveCamera) -> Result<(), RenderError>;

    /// Resize the output target. `width` and `height` are logical pixels;
    /// the backend multiplies by the pixel ratio for its backing store.
    fn set_output_size(&mut self, width: u32, height: u32);

    /// Cap the backing-store pixel ratio. The driver passes
    /// `min(device_pixel_ratio, 2)`.
    fn set_pixel_ratio_cap(&mut self, ratio: f64);
}
