use assets::AssetHandle;

use crate::color::Color;

/// Material descriptor interpreted by the rendering backend.
///
/// Unsupported features degrade to the backend's closest approximation,
/// never to an error.
#[derive(Debug, Clone, PartialEq)]
pub enum Material {
    /// Unlit flat color.
    Basic { color: Color },
    /// Surface normal visualised as color.
    Normal { flat_shading: bool },
    /// Sphere-lookup shading from a matcap texture.
    Matcap { matcap: Option<AssetHandle> },
    /// Diffuse-only lit surface.
    Lambert { color: Color },
    /// Diffuse plus a specular highlight.
    Phong {
        color: Color,
        shininess: f32,
        specular: Color,
    },
    /// Banded shading stepped through a gradient map.
    Toon {
        color: Color,
        gradient_map: Option<AssetHandle>,
    },
    Standard(StandardMaterial),
    Physical(PhysicalMaterial),
}

impl Material {
    pub fn standard() -> Self {
        Material::Standard(StandardMaterial::default())
    }

    pub fn physical() -> Self {
        Material::Physical(PhysicalMaterial::default())
    }

    /// Flat base color the analytic backend shades with.
    pub fn base_color(&self) -> Color {
        match self {
            Material::Basic { color } => *color,
            Material::Normal { .. } => Color::new(0.5, 0.5, 1.0),
            Material::Matcap { .. } => Color::new(0.8, 0.8, 0.85),
            Material::Lambert { color }
            | Material::Phong { color, .. }
            | Material::Toon { color, .. } => *color,
            Material::Standard(m) => m.color,
            Material::Physical(m) => m.standard.color,
        }
    }

    pub fn as_standard(&self) -> Option<&StandardMaterial> {
        match self {
            Material::Standard(m) => Some(m),
            Material::Physical(m) => Some(&m.standard),
            _ => None,
        }
    }
}

/// PBR metalness/roughness material with the usual texture map slots.
///
/// Map slots hold loader handles; the pixels may still be in flight when the
/// first frames render.
#[derive(Debug, Clone, PartialEq)]
pub struct StandardMaterial {
    pub color: Color,
    pub metalness: f32,
    pub roughness: f32,
    pub map: Option<AssetHandle>,
    pub ao_map: Option<AssetHandle>,
    pub ao_map_intensity: f32,
    pub displacement_map: Option<AssetHandle>,
    pub displacement_scale: f32,
    pub roughness_map: Option<AssetHandle>,
    pub metalness_map: Option<AssetHandle>,
    pub normal_map: Option<AssetHandle>,
    pub alpha_map: Option<AssetHandle>,
    pub transparent: bool,
}

impl Default for StandardMaterial {
    fn default() -> Self {
        Self {
            color: Color::WHITE,
            metalness: 0.0,
            roughness: 1.0,
            map: None,
            ao_map: None,
            ao_map_intensity: 1.0,
            displacement_map: None,
            displacement_scale: 1.0,
            roughness_map: None,
            metalness_map: None,
            normal_map: None,
            alpha_map: None,
            transparent: false,
        }
    }
}

/// Standard material extended with clearcoat, sheen, and transmission.
#[derive(Debug, Clone, PartialEq)]
pub struct PhysicalMaterial {
    pub standard: StandardMaterial,
    pub clearcoat: f32,
    pub clearcoat_roughness: f32,
    pub sheen: f32,
    pub sheen_color: Color,
    pub sheen_roughness: f32,
    pub transmission: f32,
    pub ior: f32,
    pub thickness: f32,
}

impl Default for PhysicalMaterial {
    fn default() -> Self {
        Self {
            standard: StandardMaterial::default(),
            clearcoat: 0.0,
            clearcoat_roughness: 0.0,
            sheen: 0.0,
            sheen_color: Color::WHITE,
            sheen_roughness: 1.0,
            transmission: 0.0,
            ior: 1.5,
            thickness: 0.0,
        }
    }
}
