//! Scene graph data model shared by the driver, the backend, and the demos.
//!
//! Everything here is plain data: geometry and material descriptors, lights,
//! transforms, and a flat container with stable ids. The backend interprets
//! the descriptors; nothing in this crate touches the GPU.

pub mod camera;
pub mod color;
pub mod geometry;
pub mod graph;
pub mod light;
pub mod material;
pub mod object;
pub mod text;
pub mod transform;

pub use camera::PerspectiveCamera;
pub use color::Color;
pub use geometry::{BevelParams, Geometry, TextGeometry};
pub use graph::{LightId, MaterialId, ObjectId, Scene};
pub use light::{Light, LightKind};
pub use material::{Material, PhysicalMaterial, StandardMaterial};
pub use object::SceneObject;
pub use text::TextLayout;
pub use transform::Transform;
