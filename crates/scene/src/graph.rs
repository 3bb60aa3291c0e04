use assets::AssetHandle;
use glam::Vec3;

use crate::geometry::Geometry;
use crate::light::{Light, LightKind};
use crate::material::Material;
use crate::object::SceneObject;

/// Stable index of an object in a [`Scene`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObjectId(u32);

/// Stable index of a light in a [`Scene`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LightId(u32);

/// Stable index of a material in a [`Scene`].
///
/// Materials are shared: several objects may reference the same id, so a
/// panel write to one material shows up on all of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MaterialId(u32);

/// Flat scene graph: objects, lights, shared materials, and an optional
/// environment map. Objects are only ever added; a failed asset load simply
/// means its object never appears.
#[derive(Debug, Default)]
pub struct Scene {
    objects: Vec<SceneObject>,
    lights: Vec<Light>,
    materials: Vec<Material>,
    pub environment: Option<AssetHandle>,
    pub background: Option<AssetHandle>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_material(&mut self, material: Material) -> MaterialId {
        let id = MaterialId(self.materials.len() as u32);
        self.materials.push(material);
        id
    }

    pub fn add_object(&mut self, object: SceneObject) -> ObjectId {
        let id = ObjectId(self.objects.len() as u32);
        self.objects.push(object);
        id
    }

    pub fn add_light(&mut self, light: Light) -> LightId {
        let id = LightId(self.lights.len() as u32);
        self.lights.push(light);
        id
    }

    pub fn object(&self, id: ObjectId) -> Option<&SceneObject> {
        self.objects.get(id.0 as usize)
    }

    pub fn object_mut(&mut self, id: ObjectId) -> Option<&mut SceneObject> {
        self.objects.get_mut(id.0 as usize)
    }

    pub fn light(&self, id: LightId) -> Option<&Light> {
        self.lights.get(id.0 as usize)
    }

    pub fn light_mut(&mut self, id: LightId) -> Option<&mut Light> {
        self.lights.get_mut(id.0 as usize)
    }

    pub fn material(&self, id: MaterialId) -> Option<&Material> {
        self.materials.get(id.0 as usize)
    }

    pub fn material_mut(&mut self, id: MaterialId) -> Option<&mut Material> {
        self.materials.get_mut(id.0 as usize)
    }

    pub fn objects(&self) -> &[SceneObject] {
        &self.objects
    }

    pub fn lights(&self) -> &[Light] {
        &self.lights
    }

    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    /// Add a marker gizmo visualizing `light`: an unlit dot in the light's
    /// color at its position and, for aimed kinds, a smaller dot offset
    /// along the aim direction. Returns the ids of the objects added; an
    /// unknown id adds nothing.
    pub fn add_light_helper(&mut self, light: LightId, size: f32) -> Vec<ObjectId> {
        let Some(light) = self.light(light).cloned() else {
            return Vec::new();
        };
        let material = self.add_material(Material::Basic { color: light.color });

        let mut ids = vec![self.add_object(
            SceneObject::new("light helper", Geometry::sphere(size, 8, 8), material)
                .at(light.position),
        )];

        let aim = match &light.kind {
            LightKind::Directional => Some(Vec3::ZERO),
            LightKind::Spot { target, .. } => Some(*target),
            LightKind::RectArea { look_at, .. } => Some(*look_at),
            _ => None,
        };
        if let Some(target) = aim {
            let direction = (target - light.position).normalize_or_zero();
            ids.push(self.add_object(
                SceneObject::new("light helper aim", Geometry::sphere(size * 0.5, 8, 8), material)
                    .at(light.position + direction * size * 4.0),
            ));
        }
        ids
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;

    #[test]
    fn ids_stay_stable_as_the_scene_grows() {
        let mut scene = Scene::new();
        let mat = scene.add_material(Material::standard());
        let first = scene.add_object(SceneObject::new("a", Geometry::cube(1.0), mat));
        let second = scene.add_object(SceneObject::new("b", Geometry::cube(1.0), mat));

        assert_ne!(first, second);
        assert_eq!(scene.object(first).unwrap().name, "a");
        assert_eq!(scene.object(second).unwrap().name, "b");
    }

    #[test]
    fn shared_material_edit_is_visible_to_all_objects() {
        let mut scene = Scene::new();
        let mat = scene.add_material(Material::standard());
        scene.add_object(SceneObject::new("a", Geometry::cube(1.0), mat));
        scene.add_object(SceneObject::new("b", Geometry::cube(1.0), mat));

        if let Some(Material::Standard(m)) = scene.material_mut(mat) {
            m.roughness = 0.4;
        }
        for object in scene.objects() {
            let shared = scene.material(object.material).unwrap();
            assert_eq!(shared.as_standard().unwrap().roughness, 0.4);
        }
    }

    #[test]
    fn point_light_helper_marks_the_light_position() {
        let mut scene = Scene::new();
        let light = scene.add_light(
            Light::point(Color::from_hex(0xff9000), 0.5, 10.0, 2.0).at(Vec3::new(1.0, -0.5, 1.0)),
        );

        let ids = scene.add_light_helper(light, 0.2);

        assert_eq!(ids.len(), 1);
        let marker = scene.object(ids[0]).unwrap();
        assert_eq!(marker.transform.position, Vec3::new(1.0, -0.5, 1.0));
        let color = scene.material(marker.material).unwrap().base_color();
        assert_eq!(color, Color::from_hex(0xff9000));
    }

    #[test]
    fn aimed_light_helper_adds_a_direction_dot() {
        let mut scene = Scene::new();
        let light = scene.add_light(
            Light::spot(Color::from_hex(0x78ff00), 4.5, 10.0, 0.3, 0.25, 1.0)
                .at(Vec3::new(0.0, 2.0, 3.0)),
        );

        let ids = scene.add_light_helper(light, 0.2);

        assert_eq!(ids.len(), 2);
        // The aim dot leans from the light toward its target at the origin.
        let aim = scene.object(ids[1]).unwrap();
        assert!(aim.transform.position.y < 2.0);
        assert!(aim.transform.position.z < 3.0);
    }

    #[test]
    fn helper_for_an_unknown_light_adds_nothing() {
        let mut scene = Scene::new();
        let light = scene.add_light(Light::ambient(Color::WHITE, 1.0));
        let mut other = Scene::new();

        assert!(other.add_light_helper(light, 0.2).is_empty());
        assert_eq!(other.object_count(), 0);
        // The id is only meaningful in the scene that minted it.
        assert_eq!(scene.add_light_helper(light, 0.2).len(), 1);
    }
}
