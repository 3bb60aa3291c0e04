use crate::text::TextLayout;

/// Geometry descriptor interpreted by the rendering backend.
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    Sphere {
        radius: f32,
        width_segments: u32,
        height_segments: u32,
    },
    Plane {
        width: f32,
        height: f32,
        width_segments: u32,
        height_segments: u32,
    },
    Box {
        width: f32,
        height: f32,
        depth: f32,
    },
    Torus {
        radius: f32,
        tube: f32,
        radial_segments: u32,
        tubular_segments: u32,
    },
    /// Extruded text. The layout is only present once the font has loaded.
    Text(TextGeometry),
    /// XYZ axes gizmo, `size` units long per axis.
    Axes { size: f32 },
}

impl Geometry {
    pub fn sphere(radius: f32, width_segments: u32, height_segments: u32) -> Self {
        Geometry::Sphere {
            radius,
            width_segments,
            height_segments,
        }
    }

    pub fn plane(width: f32, height: f32, width_segments: u32, height_segments: u32) -> Self {
        Geometry::Plane {
            width,
            height,
            width_segments,
            height_segments,
        }
    }

    pub fn cube(size: f32) -> Self {
        Geometry::Box {
            width: size,
            height: size,
            depth: size,
        }
    }

    pub fn torus(radius: f32, tube: f32, radial_segments: u32, tubular_segments: u32) -> Self {
        Geometry::Torus {
            radius,
            tube,
            radial_segments,
            tubular_segments,
        }
    }
}

/// Bevel applied to extruded text edges.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BevelParams {
    pub enabled: bool,
    pub thickness: f32,
    pub size: f32,
    pub offset: f32,
    pub segments: u32,
}

impl Default for BevelParams {
    fn default() -> Self {
        Self {
            enabled: false,
            thickness: 0.1,
            size: 0.08,
            offset: 0.0,
            segments: 3,
        }
    }
}

/// Parameters for generated 3D text plus its shaped layout.
#[derive(Debug, Clone, PartialEq)]
pub struct TextGeometry {
    pub text: String,
    /// Glyph height in world units.
    pub size: f32,
    /// Extrusion depth.
    pub depth: f32,
    pub curve_segments: u32,
    pub bevel: BevelParams,
    /// Filled in when the font arrives; `None` means the text cannot be
    /// shaped yet and the backend skips the object.
    pub layout: Option<TextLayout>,
}

impl TextGeometry {
    pub fn new(text: impl Into<String>, size: f32, depth: f32) -> Self {
        Self {
            text: text.into(),
            size,
            depth,
            curve_segments: 12,
            bevel: BevelParams::default(),
            layout: None,
        }
    }
}
