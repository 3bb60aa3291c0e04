//! CPU-side mirrors of the shader's storage buffer records and the
//! conversion from scene descriptors into them.

use bytemuck::{Pod, Zeroable};
use glam::{Quat, Vec3};
use scene::{Geometry, LightKind, Material, Scene, SceneObject};

/// Sphere record: `center.w` is the radius.
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct SphereGpu {
    pub center: [f32; 4],
    pub color: [f32; 4],
    pub params: [f32; 4],
}

/// Box record: `rotation` is the world-from-local quaternion.
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct BoxGpu {
    pub center: [f32; 4],
    pub half_extents: [f32; 4],
    pub rotation: [f32; 4],
    pub color: [f32; 4],
    pub params: [f32; 4],
}

/// Torus record: `shape.x` is the ring radius, `shape.y` the tube radius.
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct TorusGpu {
    pub center: [f32; 4],
    pub shape: [f32; 4],
    pub rotation: [f32; 4],
    pub color: [f32; 4],
    pub params: [f32; 4],
}

/// Light record; `position.w` encodes the kind.
///
/// Kinds: 0 ambient, 1 directional, 2 hemisphere, 3 point, 4 rect-area,
/// 5 spot. `color.w` is intensity, `aux` the direction or ground color, and
/// `params` is (angle, penumbra, decay, distance).
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct LightGpu {
    pub position: [f32; 4],
    pub color: [f32; 4],
    pub aux: [f32; 4],
    pub params: [f32; 4],
}

/// Primitive counts the shader loops over.
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct SceneCounts {
    pub spheres: u32,
    pub boxes: u32,
    pub toruses: u32,
    pub lights: u32,
}

/// Camera uniform: combined matrix, its inverse for ray generation, and the
/// eye position.
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct CameraUniform {
    pub view_proj: [[f32; 4]; 4],
    pub view_proj_inv: [[f32; 4]; 4],
    pub eye: [f32; 4],
}

/// Everything one frame uploads.
#[derive(Debug, Default)]
pub struct GpuScene {
    pub spheres: Vec<SphereGpu>,
    pub boxes: Vec<BoxGpu>,
    pub toruses: Vec<TorusGpu>,
    pub lights: Vec<LightGpu>,
}

impl GpuScene {
    pub fn counts(&self) -> SceneCounts {
        SceneCounts {
            spheres: self.spheres.len() as u32,
            boxes: self.boxes.len() as u32,
            toruses: self.toruses.len() as u32,
            lights: self.lights.len() as u32,
        }
    }
}

/// Flatten the scene into GPU records, skipping invisible objects and
/// lights. Text without a shaped layout contributes nothing.
pub fn collect_scene(scene: &Scene) -> GpuScene {
    let mut out = GpuScene::default();

    for object in scene.objects().iter().filter(|o| o.visible) {
        let (color, params) = shading_of(scene, object);
        let position = object.transform.position;
        let rotation = object.transform.rotation_quat();
        let scale = object.transform.scale;

        match &object.geometry {
            Geometry::Sphere { radius, .. } => out.spheres.push(SphereGpu {
                center: point(position, radius * scale.x),
                color,
                params,
            }),
            Geometry::Plane { width, height, .. } => out.boxes.push(BoxGpu {
                // A plane is a very thin slab in its local XY.
                center: point(position, 0.0),
                half_extents: [
                    width * 0.5 * scale.x,
                    height * 0.5 * scale.y,
                    0.005,
                    0.0,
                ],
                rotation: quat(rotation),
                color,
                params,
            }),
            Geometry::Box {
                width,
                height,
                depth,
            } => out.boxes.push(BoxGpu {
                center: point(position, 0.0),
                half_extents: [
                    width * 0.5 * scale.x,
                    height * 0.5 * scale.y,
                    depth * 0.5 * scale.z,
                    0.0,
                ],
                rotation: quat(rotation),
                color,
                params,
            }),
            Geometry::Torus { radius, tube, .. } => out.toruses.push(TorusGpu {
                center: point(position, 0.0),
                shape: [radius * scale.x, tube * scale.x, 0.0, 0.0],
                rotation: quat(rotation),
                color,
                params,
            }),
            Geometry::Text(text) => {
                let Some(layout) = &text.layout else {
                    continue;
                };
                for glyph in &layout.glyphs {
                    let local = layout.center_offset
                        + Vec3::new(glyph.offset_x + glyph.width * 0.5, text.size * 0.5, 0.0);
                    out.boxes.push(BoxGpu {
                        center: point(position + rotation * (local * scale), 0.0),
                        half_extents: [
                            glyph.width * 0.45 * scale.x,
                            text.size * 0.5 * scale.y,
                            layout.depth * 0.5 * scale.z,
                            0.0,
                        ],
                        rotation: quat(rotation),
                        color,
                        params,
                    });
                }
            }
            Geometry::Axes { size } => {
                let size = *size;
                let arms = [
                    (Vec3::X, [1.0, 0.1, 0.1, 1.0]),
                    (Vec3::Y, [0.1, 1.0, 0.1, 1.0]),
                    (Vec3::Z, [0.1, 0.1, 1.0, 1.0]),
                ];
                for (axis, arm_color) in arms {
                    out.boxes.push(BoxGpu {
                        center: point(position + rotation * (axis * size * 0.5), 0.0),
                        half_extents: [
                            half_arm(axis.x, size),
                            half_arm(axis.y, size),
                            half_arm(axis.z, size),
                            0.0,
                        ],
                        rotation: quat(rotation),
                        color: arm_color,
                        params: [0.0, 1.0, 0.0, 0.0],
                    });
                }
            }
        }
    }

    for light in scene.lights().iter().filter(|l| l.visible) {
        out.lights.push(light_record(light));
    }

    out
}

fn half_arm(component: f32, size: f32) -> f32 {
    if component != 0.0 {
        size * 0.5
    } else {
        0.01
    }
}

fn shading_of(scene: &Scene, object: &SceneObject) -> ([f32; 4], [f32; 4]) {
    let material = scene.material(object.material);
    let color = material
        .map(Material::base_color)
        .unwrap_or(scene::Color::WHITE);
    let params = match material {
        Some(Material::Physical(m)) => [
            m.standard.metalness,
            m.standard.roughness,
            m.transmission,
            m.ior,
        ],
        Some(Material::Standard(m)) => [m.metalness, m.roughness, 0.0, 1.5],
        _ => [0.0, 1.0, 0.0, 1.5],
    };
    (
        [color.r, color.g, color.b, 1.0],
        params,
    )
}

fn light_record(light: &scene::Light) -> LightGpu {
    let color = light.color.to_array();
    let (kind, aux, params) = match &light.kind {
        LightKind::Ambient => (0.0, [0.0; 4], [0.0; 4]),
        LightKind::Directional => {
            let dir = (-light.position).normalize_or_zero();
            (1.0, [dir.x, dir.y, dir.z, 0.0], [0.0; 4])
        }
        LightKind::Hemisphere { ground_color } => {
            let g = ground_color.to_array();
            (2.0, [g[0], g[1], g[2], 0.0], [0.0; 4])
        }
        LightKind::Point { distance, decay } => {
            (3.0, [0.0; 4], [0.0, 0.0, *decay, *distance])
        }
        LightKind::RectArea {
            width,
            height,
            look_at,
        } => {
            let dir = (*look_at - light.position).normalize_or_zero();
            (
                4.0,
                [dir.x, dir.y, dir.z, 0.0],
                [*width, *height, 2.0, 0.0],
            )
        }
        LightKind::Spot {
            distance,
            angle,
            penumbra,
            decay,
            target,
        } => {
            let dir = (*target - light.position).normalize_or_zero();
            (
                5.0,
                [dir.x, dir.y, dir.z, 0.0],
                [*angle, *penumbra, *decay, *distance],
            )
        }
    };
    LightGpu {
        position: [
            light.position.x,
            light.position.y,
            light.position.z,
            kind,
        ],
        color: [color[0], color[1], color[2], light.intensity],
        aux,
        params,
    }
}

fn point(p: Vec3, w: f32) -> [f32; 4] {
    [p.x, p.y, p.z, w]
}

fn quat(q: Quat) -> [f32; 4] {
    [q.x, q.y, q.z, q.w]
}
