use glam::Vec3;
use scene::PerspectiveCamera;

/// Orbit-style camera controller with damped motion.
///
/// Pointer input moves the desired yaw/pitch/distance; `update` eases the
/// current pose toward the desired one each frame, so released input coasts
/// to a stop instead of snapping.
#[derive(Debug, Clone)]
pub struct OrbitController {
    /// Point the camera orbits.
    pub target: Vec3,
    /// Mouse look sensitivity.
    pub sensitivity: f32,
    /// Fraction of the remaining distance covered per frame, in (0, 1].
    pub damping: f32,
    pub enabled: bool,
    yaw: f32,
    pitch: f32,
    distance: f32,
    desired_yaw: f32,
    desired_pitch: f32,
    desired_distance: f32,
}

impl OrbitController {
    /// Start orbiting from wherever `camera` currently is.
    pub fn from_camera(camera: &PerspectiveCamera) -> Self {
        let offset = camera.eye - camera.target;
        let distance = offset.length().max(0.1);
        let yaw = offset.x.atan2(offset.z);
        let pitch = (offset.y / distance).asin();
        Self {
            target: camera.target,
            sensitivity: 1.0,
            damping: 0.1,
            enabled: true,
            yaw,
            pitch,
            distance,
            desired_yaw: yaw,
            desired_pitch: pitch,
            desired_distance: distance,
        }
    }

    /// Feed a pointer drag delta in pixels.
    pub fn rotate(&mut self, delta_x: f64, delta_y: f64) {
        if !self.enabled {
            return;
        }
        self.desired_yaw -= delta_x as f32 * self.sensitivity * 0.005;
        self.desired_pitch += delta_y as f32 * self.sensitivity * 0.005;
        // Clamp pitch to prevent the camera flipping over the pole
        self.desired_pitch = self.desired_pitch.clamp(-1.5, 1.5);
    }

    /// Feed a scroll delta; positive zooms out.
    pub fn zoom(&mut self, delta: f32) {
        if !self.enabled {
            return;
        }
        self.desired_distance = (self.desired_distance * (1.0 + delta * 0.1)).max(0.1);
    }

    /// Advance the damping by one frame and write the pose into `camera`.
    pub fn update(&mut self, camera: &mut PerspectiveCamera) {
        let k = self.damping.clamp(0.0, 1.0);
        self.yaw += (self.desired_yaw - self.yaw) * k;
        self.pitch += (self.desired_pitch - self.pitch) * k;
        self.distance += (self.desired_distance - self.distance) * k;

        let offset = Vec3::new(
            self.pitch.cos() * self.yaw.sin(),
            self.pitch.sin(),
            self.pitch.cos() * self.yaw.cos(),
        ) * self.distance;

        camera.target = self.target;
        camera.eye = self.target + offset;
    }

    pub fn distance(&self) -> f32 {
        self.distance
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_converges_to_desired_pose() {
        let mut camera = PerspectiveCamera::new(1.0);
        camera.eye = Vec3::new(0.0, 0.0, 5.0);
        camera.target = Vec3::ZERO;
        let mut controls = OrbitController::from_camera(&camera);

        controls.rotate(100.0, 0.0);
        for _ in 0..200 {
            controls.update(&mut camera);
        }
        // Damping settled: the eye moved but kept its orbit radius.
        assert!((camera.eye.length() - 5.0).abs() < 1e-3);
        assert!(camera.eye.x.abs() > 1e-3);
    }

    #[test]
    fn pitch_is_clamped_at_the_poles() {
        let mut camera = PerspectiveCamera::new(1.0);
        camera.eye = Vec3::new(0.0, 0.0, 5.0);
        let mut controls = OrbitController::from_camera(&camera);

        controls.rotate(0.0, 1e6);
        for _ in 0..200 {
            controls.update(&mut camera);
        }
        assert!(camera.eye.y <= 5.0);
        assert!(camera.eye.length() > 0.1);
    }

    #[test]
    fn disabled_controller_ignores_input() {
        let mut camera = PerspectiveCamera::new(1.0);
        camera.eye = Vec3::new(0.0, 0.0, 5.0);
        let mut controls = OrbitController::from_camera(&camera);
        controls.enabled = false;

        let before = camera.eye;
        controls.rotate(100.0, 50.0);
        controls.zoom(1.0);
        for _ in 0..10 {
            controls.update(&mut camera);
        }
        assert!((camera.eye - before).length() < 1e-5);
    }
}
