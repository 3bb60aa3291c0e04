use glam::Vec3;
use scene::{ObjectId, Scene};

/// Deterministic time-based transform law.
///
/// Rotations are computed from the absolute elapsed time, so replaying the
/// same clock values reproduces the same poses exactly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Animation {
    /// Per-axis Euler rotation at a constant angular velocity (rad/s):
    /// `rotation = base + rate * elapsed`.
    Spin { rate: Vec3 },
}

/// An animation applied to one scene object each tick.
#[derive(Debug, Clone, Copy)]
pub struct AnimationBinding {
    pub object: ObjectId,
    /// Rotation the object had when the binding was registered.
    pub base_rotation: Vec3,
    pub animation: Animation,
}

impl AnimationBinding {
    /// Write the pose for `elapsed` seconds into the target object. An id
    /// that is not in the scene yet (pending asset) is skipped silently.
    pub fn apply(&self, scene: &mut Scene, elapsed: f32) {
        let Some(object) = scene.object_mut(self.object) else {
            return;
        };
        match self.animation {
            Animation::Spin { rate } => {
                object.transform.rotation = self.base_rotation + rate * elapsed;
            }
        }
    }
}
