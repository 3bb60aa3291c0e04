//! Light showcase: one of every supported light type over a spinning
//! sphere/cube/torus trio, with panel controls mirroring the light fields.

use std::f32::consts::PI;

use anyhow::Result;
use glam::Vec3;

use driver::{ControlRange, LightField, PanelRegistry, ParamTarget};
use scene::{
    Color, Geometry, Light, LightId, Material, Scene, SceneObject, StandardMaterial, Transform,
};

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let mut scene = Scene::new();

    let ambient = scene.add_light(Light::ambient(Color::WHITE, 1.0));
    let directional = scene.add_light(
        Light::directional(Color::from_hex(0x00fffc), 1.0).at(Vec3::new(1.0, 0.25, 0.0)),
    );
    let hemisphere = scene.add_light(Light::hemisphere(
        Color::from_hex(0xff0000),
        Color::from_hex(0x0000ff),
        2.0,
    ));
    let point = scene.add_light(
        Light::point(Color::from_hex(0xff9000), 0.5, 10.0, 2.0).at(Vec3::new(1.0, -0.5, 1.0)),
    );
    let rect_area = scene.add_light(
        Light::rect_area(Color::from_hex(0x4e00ff), 6.0, 1.0, 1.0).at(Vec3::new(-1.5, 0.0, 1.5)),
    );
    let spot = scene.add_light(
        Light::spot(Color::from_hex(0x78ff00), 4.5, 10.0, PI * 0.1, 0.25, 1.0)
            .at(Vec3::new(0.0, 2.0, 3.0)),
    );

    // Marker gizmos standing in for the lesson's light helpers.
    for light in [hemisphere, directional, point, spot, rect_area] {
        scene.add_light_helper(light, 0.2);
    }

    let mut material = StandardMaterial::default();
    material.roughness = 0.4;
    let shared = scene.add_material(Material::Standard(material));

    let sphere = scene.add_object(
        SceneObject::new("sphere", Geometry::sphere(0.5, 32, 32), shared)
            .at(Vec3::new(-1.5, 0.0, 0.0)),
    );
    let cube = scene.add_object(SceneObject::new("cube", Geometry::cube(0.75), shared));
    let torus = scene.add_object(
        SceneObject::new("torus", Geometry::torus(0.3, 0.2, 32, 64), shared)
            .at(Vec3::new(1.5, 0.0, 0.0)),
    );
    scene.add_object(
        SceneObject::new("floor", Geometry::plane(5.0, 5.0, 1, 1), shared).with_transform(
            Transform {
                position: Vec3::new(0.0, -0.65, 0.0),
                rotation: Vec3::new(-PI * 0.5, 0.0, 0.0),
                scale: Vec3::ONE,
            },
        ),
    );

    tracing::info!(
        lights = scene.lights().len(),
        objects = scene.object_count(),
        "lights scene assembled"
    );

    render::run("Lights", scene, None, move |driver| {
        let rate = Vec3::new(0.15, 0.1, 0.0);
        driver.animate(sphere, rate);
        driver.animate(cube, rate);
        driver.animate(torus, rate);

        light_folder(&mut driver.panel, "ambient", ambient, false, &[]);
        light_folder(&mut driver.panel, "directional", directional, true, &[]);
        light_folder(&mut driver.panel, "hemisphere", hemisphere, false, &[]);
        light_folder(&mut driver.panel, "point", point, true, &[]);
        light_folder(&mut driver.panel, "rect area", rect_area, true, &[]);
        light_folder(
            &mut driver.panel,
            "spot",
            spot,
            true,
            &[
                (LightField::Angle, ControlRange::new(0.0, PI as f64, 0.01)),
                (LightField::Penumbra, ControlRange::new(0.0, 1.0, 0.01)),
                (LightField::Decay, ControlRange::new(0.0, 2.0, 0.01)),
            ],
        );
    })
}

/// Register the panel controls one light folder carries: visibility,
/// intensity, optionally position, plus any light-specific extras.
fn light_folder(
    panel: &mut PanelRegistry,
    name: &str,
    light: LightId,
    with_position: bool,
    extras: &[(LightField, ControlRange)],
) {
    let control = |field| ParamTarget::Light { light, field };

    panel.register_control(format!("{name} visible"), control(LightField::Visible), None);
    panel.register_control(
        format!("{name} intensity"),
        control(LightField::Intensity),
        Some(ControlRange::new(0.0, 3.0, 0.01)),
    );
    if with_position {
        let span = ControlRange::new(-5.0, 5.0, 0.01);
        for (axis, field) in [
            ("x", LightField::PositionX),
            ("y", LightField::PositionY),
            ("z", LightField::PositionZ),
        ] {
            panel.register_control(format!("{name} {axis}"), control(field), Some(span));
        }
    }
    for (field, range) in extras {
        panel.register_control(format!("{name} {field:?}"), control(*field), Some(*range));
    }
}
