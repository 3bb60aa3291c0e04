use glam::Vec3;
use std::collections::HashMap;

use assets::FontData;
use render::gpu_types::collect_scene;
use scene::{
    Color, Geometry, Light, Material, Scene, SceneObject, TextGeometry, TextLayout,
};

fn test_font() -> FontData {
    let mut advances = HashMap::new();
    advances.insert('h', 500.0);
    advances.insert('i', 300.0);
    FontData::new("test", 1000.0, 800.0, -200.0, advances)
}

#[test]
fn primitives_land_in_their_own_buckets() {
    let mut scene = Scene::new();
    let mat = scene.add_material(Material::standard());
    scene.add_object(SceneObject::new("ball", Geometry::sphere(0.5, 32, 32), mat));
    scene.add_object(SceneObject::new("slab", Geometry::cube(0.75), mat));
    scene.add_object(SceneObject::new("donut", Geometry::torus(0.3, 0.2, 32, 64), mat));
    scene.add_object(SceneObject::new("floor", Geometry::plane(5.0, 5.0, 1, 1), mat));
    scene.add_light(Light::ambient(Color::WHITE, 1.0));

    let gpu = collect_scene(&scene);
    assert_eq!(gpu.spheres.len(), 1);
    // The plane renders as a thin box alongside the cube.
    assert_eq!(gpu.boxes.len(), 2);
    assert_eq!(gpu.toruses.len(), 1);
    assert_eq!(gpu.lights.len(), 1);

    let counts = gpu.counts();
    assert_eq!(counts.spheres, 1);
    assert_eq!(counts.boxes, 2);
    assert_eq!(counts.toruses, 1);
    assert_eq!(counts.lights, 1);
}

#[test]
fn sphere_radius_rides_in_center_w() {
    let mut scene = Scene::new();
    let mat = scene.add_material(Material::standard());
    scene.add_object(
        SceneObject::new("ball", Geometry::sphere(0.5, 32, 32), mat).at(Vec3::new(-1.5, 0.0, 0.0)),
    );

    let gpu = collect_scene(&scene);
    assert_eq!(gpu.spheres[0].center, [-1.5, 0.0, 0.0, 0.5]);
}

#[test]
fn invisible_objects_and_lights_are_skipped() {
    let mut scene = Scene::new();
    let mat = scene.add_material(Material::standard());
    let id = scene.add_object(SceneObject::new("ball", Geometry::sphere(1.0, 8, 8), mat));
    scene.object_mut(id).unwrap().visible = false;
    let mut light = Light::point(Color::WHITE, 0.5, 10.0, 2.0);
    light.visible = false;
    scene.add_light(light);

    let gpu = collect_scene(&scene);
    assert!(gpu.spheres.is_empty());
    assert!(gpu.lights.is_empty());
}

#[test]
fn unshaped_text_contributes_nothing() {
    let mut scene = Scene::new();
    let mat = scene.add_material(Material::standard());
    let text = TextGeometry::new("hi", 0.5, 0.2);
    scene.add_object(SceneObject::new("title", Geometry::Text(text), mat));

    let gpu = collect_scene(&scene);
    assert!(gpu.boxes.is_empty());
}

#[test]
fn shaped_text_emits_one_slab_per_glyph() {
    let mut scene = Scene::new();
    let mat = scene.add_material(Material::standard());
    let mut text = TextGeometry::new("hi", 0.5, 0.2);
    text.layout = Some(TextLayout::shape(&text, &test_font()));
    scene.add_object(SceneObject::new("title", Geometry::Text(text), mat));

    let gpu = collect_scene(&scene);
    assert_eq!(gpu.boxes.len(), 2);
}

#[test]
fn axes_helper_emits_three_colored_arms() {
    let mut scene = Scene::new();
    let mat = scene.add_material(Material::standard());
    scene.add_object(SceneObject::new("axes", Geometry::Axes { size: 2.0 }, mat));

    let gpu = collect_scene(&scene);
    assert_eq!(gpu.boxes.len(), 3);
    let colors: Vec<_> = gpu.boxes.iter().map(|b| b.color).collect();
    assert!(colors[0][0] > colors[0][1]); // x arm is red
    assert!(colors[1][1] > colors[1][0]); // y arm is green
    assert!(colors[2][2] > colors[2][0]); // z arm is blue
}

#[test]
fn light_kinds_are_encoded_in_position_w() {
    let mut scene = Scene::new();
    scene.add_light(Light::ambient(Color::WHITE, 1.0));
    scene.add_light(Light::directional(Color::WHITE, 1.0).at(Vec3::new(1.0, 0.25, 0.0)));
    scene.add_light(Light::hemisphere(
        Color::from_hex(0xff0000),
        Color::from_hex(0x0000ff),
        2.0,
    ));
    scene.add_light(Light::point(Color::from_hex(0xff9000), 0.5, 10.0, 2.0));
    scene.add_light(Light::rect_area(Color::from_hex(0x4e00ff), 6.0, 1.0, 1.0));
    scene.add_light(Light::spot(
        Color::from_hex(0x78ff00),
        4.5,
        10.0,
        std::f32::consts::PI * 0.1,
        0.25,
        1.0,
    ));

    let gpu = collect_scene(&scene);
    let kinds: Vec<f32> = gpu.lights.iter().map(|l| l.position[3]).collect();
    assert_eq!(kinds, vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0]);
}

#[test]
fn spot_light_carries_its_cone_parameters() {
    let mut scene = Scene::new();
    let angle = std::f32::consts::PI * 0.1;
    scene.add_light(
        Light::spot(Color::from_hex(0x78ff00), 4.5, 10.0, angle, 0.25, 1.0)
            .at(Vec3::new(0.0, 2.0, 3.0)),
    );

    let gpu = collect_scene(&scene);
    let light = gpu.lights[0];
    assert_eq!(light.color[3], 4.5);
    assert_eq!(light.params, [angle, 0.25, 1.0, 10.0]);
    // Aimed at the origin from (0, 2, 3): the direction points down and back.
    assert!(light.aux[1] < 0.0);
    assert!(light.aux[2] < 0.0);
}

#[test]
fn physical_material_params_reach_the_record() {
    let mut scene = Scene::new();
    let mut material = scene::PhysicalMaterial::default();
    material.standard.metalness = 1.0;
    material.standard.roughness = 0.2;
    material.transmission = 1.0;
    material.ior = 1.5;
    let mat = scene.add_material(Material::Physical(material));
    scene.add_object(SceneObject::new("ball", Geometry::sphere(1.0, 8, 8), mat));

    let gpu = collect_scene(&scene);
    assert_eq!(gpu.spheres[0].params, [1.0, 0.2, 1.0, 1.5]);
}
