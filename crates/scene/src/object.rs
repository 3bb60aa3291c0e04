use crate::geometry::Geometry;
use crate::graph::MaterialId;
use crate::transform::Transform;

/// A positioned, renderable object: geometry + shared material + transform.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneObject {
    pub name: String,
    pub geometry: Geometry,
    pub material: MaterialId,
    pub transform: Transform,
    pub visible: bool,
}

impl SceneObject {
    pub fn new(name: impl Into<String>, geometry: Geometry, material: MaterialId) -> Self {
        Self {
            name: name.into(),
            geometry,
            material,
            transform: Transform::IDENTITY,
            visible: true,
        }
    }

    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.transform = transform;
        self
    }

    pub fn at(mut self, position: glam::Vec3) -> Self {
        self.transform.position = position;
        self
    }
}
