//! 3D text showcase: a beveled, centered headline attached once its font
//! loads, surrounded by a hundred randomly scattered matcap donuts.

use std::f32::consts::PI;

use anyhow::Result;
use glam::Vec3;

use assets::{AssetData, AssetLoader};
use driver::ParamTarget;
use scene::{
    BevelParams, Geometry, Material, Scene, SceneObject, TextGeometry, TextLayout, Transform,
};

const DONUT_COUNT: usize = 100;

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let (loader, events) = AssetLoader::new();
    let matcap = loader.load_texture("assets/textures/matcaps/1.png");
    let font = loader.load_font("assets/fonts/helvetiker_regular.typeface.json");

    let mut scene = Scene::new();
    let matcap_material = scene.add_material(Material::Matcap {
        matcap: Some(matcap),
    });

    let axes = scene.add_object({
        let mut helper = SceneObject::new("axes", Geometry::Axes { size: 2.0 }, matcap_material);
        helper.visible = false;
        helper
    });

    let mut donuts = Vec::with_capacity(DONUT_COUNT);
    for i in 0..DONUT_COUNT {
        let position = Vec3::new(
            (fastrand::f32() - 0.5) * 10.0,
            (fastrand::f32() - 0.5) * 10.0,
            (fastrand::f32() - 0.5) * 10.0,
        );
        let rotation = Vec3::new(
            fastrand::f32() * PI,
            fastrand::f32() * PI,
            fastrand::f32() * PI,
        );
        let scale = fastrand::f32();
        donuts.push(scene.add_object(
            SceneObject::new(
                format!("donut-{i}"),
                Geometry::torus(0.3, 0.2, 20, 45),
                matcap_material,
            )
            .with_transform(Transform {
                position,
                rotation,
                scale: Vec3::splat(scale),
            }),
        ));
    }

    tracing::info!(donuts = DONUT_COUNT, "text scene assembled, font loading");

    render::run("3D Text", scene, Some(events), move |driver| {
        driver.on_asset(font, move |scene, data| {
            let AssetData::Font(font) = data else {
                return;
            };
            let mut text = TextGeometry::new("Hello Three.js", 0.5, 0.2);
            text.curve_segments = 5;
            text.bevel = BevelParams {
                enabled: true,
                thickness: 0.03,
                size: 0.02,
                offset: 0.0,
                segments: 4,
            };
            text.layout = Some(TextLayout::shape(&text, &font));
            scene.add_object(SceneObject::new(
                "headline",
                Geometry::Text(text),
                matcap_material,
            ));
        });

        for donut in donuts {
            driver.animate(donut, Vec3::splat(0.6));
        }

        driver
            .panel
            .register_control("Axes Helper", ParamTarget::ObjectVisible { object: axes }, None);
    })
}
