use std::path::Path;

use crate::error::AssetError;

/// Decoded 8-bit RGBA texture.
#[derive(Debug, Clone)]
pub struct TextureData {
    pub width: u32,
    pub height: u32,
    /// Tightly packed RGBA8 pixels, row-major.
    pub rgba: Vec<u8>,
    /// Whether the pixels are sRGB encoded (color maps) or linear (data maps).
    pub srgb: bool,
}

/// Decoded high-dynamic-range environment map (equirectangular RGB floats).
#[derive(Debug, Clone)]
pub struct EnvironmentData {
    pub width: u32,
    pub height: u32,
    /// Tightly packed RGB32F pixels, row-major.
    pub rgb: Vec<f32>,
}

impl EnvironmentData {
    /// Average radiance of the map, used by backends that reduce the
    /// environment to a single ambient term.
    pub fn average_radiance(&self) -> [f32; 3] {
        let texels = (self.width * self.height) as f32;
        if texels == 0.0 {
            return [0.0; 3];
        }
        let mut sum = [0.0f32; 3];
        for px in self.rgb.chunks_exact(3) {
            sum[0] += px[0];
            sum[1] += px[1];
            sum[2] += px[2];
        }
        [sum[0] / texels, sum[1] / texels, sum[2] / texels]
    }
}

pub(crate) fn decode_texture(path: &Path, srgb: bool) -> Result<TextureData, AssetError> {
    let image = image::open(path).map_err(|e| map_image_error(path, e))?;
    let rgba = image.to_rgba8();
    Ok(TextureData {
        width: rgba.width(),
        height: rgba.height(),
        rgba: rgba.into_raw(),
        srgb,
    })
}

pub(crate) fn decode_environment(path: &Path) -> Result<EnvironmentData, AssetError> {
    let image = image::open(path).map_err(|e| map_image_error(path, e))?;
    let rgb = image.to_rgb32f();
    Ok(EnvironmentData {
        width: rgb.width(),
        height: rgb.height(),
        rgb: rgb.into_raw(),
    })
}

fn map_image_error(path: &Path, err: image::ImageError) -> AssetError {
    match err {
        image::ImageError::IoError(source) => AssetError::Io {
            path: path.to_path_buf(),
            source,
        },
        other => AssetError::Decode {
            path: path.to_path_buf(),
            reason: other.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn average_radiance_of_uniform_map() {
        let env = EnvironmentData {
            width: 2,
            height: 2,
            rgb: vec![0.5; 12],
        };
        let avg = env.average_radiance();
        assert!((avg[0] - 0.5).abs() < 1e-6);
        assert!((avg[2] - 0.5).abs() < 1e-6);
    }

    #[test]
    fn missing_texture_reports_io_error() {
        let err = decode_texture(Path::new("/no/such/texture.png"), true).unwrap_err();
        assert!(matches!(err, AssetError::Io { .. }));
    }
}
