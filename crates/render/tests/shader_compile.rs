fn validate_shader(src: &str) {
    let module = naga::front::wgsl::parse_str(src).expect("wgsl parse");
    let mut validator = naga::valid::Validator::new(
        naga::valid::ValidationFlags::all(),
        naga::valid::Capabilities::all(),
    );
    validator.validate(&module).expect("wgsl validate");
}

#[test]
fn compile_scene_shader() {
    validate_shader(include_str!("../src/scene.wgsl"));
}

#[test]
fn scene_shader_declares_both_entry_points() {
    let src = include_str!("../src/scene.wgsl");
    let module = naga::front::wgsl::parse_str(src).expect("wgsl parse");
    let names: Vec<_> = module.entry_points.iter().map(|e| e.name.as_str()).collect();
    assert!(names.contains(&"vs_main"));
    assert!(names.contains(&"fs_main"));
}
