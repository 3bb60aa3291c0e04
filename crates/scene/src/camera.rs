use glam::{Mat4, Vec3};

/// Perspective camera the driver keeps in sync with the viewport.
#[derive(Debug, Clone, PartialEq)]
pub struct PerspectiveCamera {
    /// Camera position in world space.
    pub eye: Vec3,
    /// Point the camera is looking at.
    pub target: Vec3,
    /// Up vector of the camera.
    pub up: Vec3,
    /// Render target aspect ratio.
    pub aspect: f32,
    /// Vertical field of view in radians.
    pub fovy: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
}

impl PerspectiveCamera {
    /// Camera with the demos' lesson defaults: 75 degree FOV, 0.1..100 range.
    pub fn new(aspect: f32) -> Self {
        Self {
            eye: Vec3::new(1.0, 1.0, 2.0),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect,
            fovy: 75.0f32.to_radians(),
            znear: 0.1,
            zfar: 100.0,
        }
    }

    /// Update aspect ratio when the viewport is resized.
    pub fn set_aspect(&mut self, width: u32, height: u32) {
        self.aspect = width as f32 / height as f32;
    }

    /// Computes a combined view projection matrix from the camera parameters.
    pub fn view_projection_matrix(&self) -> Mat4 {
        let view = Mat4::look_at_rh(self.eye, self.target, self.up);
        let proj = Mat4::perspective_rh(self.fovy, self.aspect, self.znear, self.zfar);
        proj * view
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_aspect_divides_exactly() {
        let mut camera = PerspectiveCamera::new(1.0);
        camera.set_aspect(1920, 1080);
        assert_eq!(camera.aspect, 1920.0 / 1080.0);
    }

    #[test]
    fn view_projection_is_invertible() {
        let camera = PerspectiveCamera::new(16.0 / 9.0);
        let vp = camera.view_projection_matrix();
        let round_trip = vp * vp.inverse();
        for (a, b) in round_trip
            .to_cols_array()
            .iter()
            .zip(Mat4::IDENTITY.to_cols_array().iter())
        {
            assert!((a - b).abs() < 1e-4);
        }
    }
}
