//! Material showcase: a sphere, plane, and torus sharing one physical
//! material, textured from the door set and lit by an HDR environment map.

use anyhow::Result;
use glam::Vec3;

use assets::AssetLoader;
use driver::{ControlRange, MaterialField, ParamTarget};
use scene::{Geometry, Material, PhysicalMaterial, Scene, SceneObject};

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let (loader, events) = AssetLoader::new();
    let door_color = loader.load_texture("assets/textures/door/color.jpg");
    let door_alpha = loader.load_data_texture("assets/textures/door/alpha.jpg");
    let door_height = loader.load_data_texture("assets/textures/door/height.jpg");
    let door_normal = loader.load_data_texture("assets/textures/door/normal.jpg");
    let door_ao = loader.load_data_texture("assets/textures/door/ambientOcclusion.jpg");
    let door_metalness = loader.load_data_texture("assets/textures/door/metalness.jpg");
    let door_roughness = loader.load_data_texture("assets/textures/door/roughness.jpg");
    let environment = loader.load_environment("assets/textures/environmentMap/2k.hdr");

    let mut material = PhysicalMaterial::default();
    material.standard.metalness = 1.0;
    material.standard.roughness = 1.0;
    material.standard.map = Some(door_color);
    material.standard.ao_map = Some(door_ao);
    material.standard.ao_map_intensity = 1.0;
    material.standard.displacement_map = Some(door_height);
    material.standard.displacement_scale = 0.02;
    material.standard.roughness_map = Some(door_roughness);
    material.standard.metalness_map = Some(door_metalness);
    material.standard.normal_map = Some(door_normal);
    material.standard.alpha_map = Some(door_alpha);
    material.standard.transparent = true;
    material.transmission = 1.0;
    material.ior = 1.5;
    material.thickness = 0.5;

    let mut scene = Scene::new();
    let shared = scene.add_material(Material::Physical(material));
    let sphere = scene.add_object(
        SceneObject::new("sphere", Geometry::sphere(1.0, 40, 40), shared)
            .at(Vec3::new(-2.0, 0.0, 0.0)),
    );
    let plane = scene.add_object(SceneObject::new(
        "plane",
        Geometry::plane(1.0, 1.0, 40, 40),
        shared,
    ));
    let torus = scene.add_object(
        SceneObject::new("torus", Geometry::torus(0.6, 0.3, 40, 40), shared)
            .at(Vec3::new(2.0, 0.0, 0.0)),
    );

    tracing::info!(
        objects = scene.object_count(),
        "materials scene assembled, door textures and environment loading"
    );

    render::run("Materials", scene, Some(events), move |driver| {
        driver.on_asset(environment, move |scene, _data| {
            scene.environment = Some(environment);
            scene.background = Some(environment);
        });

        // Both axes spin at the same rate, in opposite directions.
        let rate = Vec3::new(-0.4, 0.4, 0.0);
        driver.animate(sphere, rate);
        driver.animate(plane, rate);
        driver.animate(torus, rate);

        let fine = ControlRange::new(0.0, 1.0, 0.0001);
        let fields = [
            ("metalness", MaterialField::Metalness, fine),
            ("roughness", MaterialField::Roughness, fine),
            ("transmission", MaterialField::Transmission, fine),
            ("ior", MaterialField::Ior, ControlRange::new(1.0, 2.0, 0.0001)),
            ("thickness", MaterialField::Thickness, fine),
        ];
        for (label, field, range) in fields {
            driver.panel.register_control(
                label,
                ParamTarget::Material {
                    material: shared,
                    field,
                },
                Some(range),
            );
        }
    })
}
