use glam::Vec3;

use crate::color::Color;

/// Light source placed in the scene.
#[derive(Debug, Clone, PartialEq)]
pub struct Light {
    pub kind: LightKind,
    pub color: Color,
    pub intensity: f32,
    pub position: Vec3,
    pub visible: bool,
}

/// The light taxonomy the demo scenes exercise.
#[derive(Debug, Clone, PartialEq)]
pub enum LightKind {
    /// Omnidirectional constant term, position ignored.
    Ambient,
    /// Parallel light shining from `position` toward the origin.
    Directional,
    /// Sky/ground gradient keyed on the surface normal.
    Hemisphere { ground_color: Color },
    /// Local light with distance falloff.
    Point { distance: f32, decay: f32 },
    /// Rectangular area light aimed at `look_at`.
    RectArea {
        width: f32,
        height: f32,
        look_at: Vec3,
    },
    /// Cone light aimed at `target`.
    Spot {
        distance: f32,
        angle: f32,
        penumbra: f32,
        decay: f32,
        target: Vec3,
    },
}

impl Light {
    pub fn ambient(color: Color, intensity: f32) -> Self {
        Self::new(LightKind::Ambient, color, intensity)
    }

    pub fn directional(color: Color, intensity: f32) -> Self {
        Self::new(LightKind::Directional, color, intensity)
    }

    pub fn hemisphere(sky: Color, ground: Color, intensity: f32) -> Self {
        Self::new(
            LightKind::Hemisphere {
                ground_color: ground,
            },
            sky,
            intensity,
        )
    }

    pub fn point(color: Color, intensity: f32, distance: f32, decay: f32) -> Self {
        Self::new(LightKind::Point { distance, decay }, color, intensity)
    }

    pub fn rect_area(color: Color, intensity: f32, width: f32, height: f32) -> Self {
        Self::new(
            LightKind::RectArea {
                width,
                height,
                look_at: Vec3::ZERO,
            },
            color,
            intensity,
        )
    }

    pub fn spot(color: Color, intensity: f32, distance: f32, angle: f32, penumbra: f32, decay: f32) -> Self {
        Self::new(
            LightKind::Spot {
                distance,
                angle,
                penumbra,
                decay,
                target: Vec3::ZERO,
            },
            color,
            intensity,
        )
    }

    fn new(kind: LightKind, color: Color, intensity: f32) -> Self {
        Self {
            kind,
            color,
            intensity,
            position: Vec3::ZERO,
            visible: true,
        }
    }

    pub fn at(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }
}
