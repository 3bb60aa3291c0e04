use std::collections::HashMap;
use std::path::Path;

use crate::error::AssetError;

/// Metrics parsed from a typeface-JSON font.
///
/// Only the subset the text layout needs is kept: the design-unit resolution
/// and the horizontal advance of each glyph. Outline data stays with the
/// backend that tessellates it.
#[derive(Debug, Clone)]
pub struct FontData {
    pub family: String,
    /// Design units per em.
    pub resolution: f32,
    pub ascender: f32,
    pub descender: f32,
    advances: HashMap<char, f32>,
}

impl FontData {
    pub fn new(
        family: impl Into<String>,
        resolution: f32,
        ascender: f32,
        descender: f32,
        advances: HashMap<char, f32>,
    ) -> Self {
        Self {
            family: family.into(),
            resolution,
            ascender,
            descender,
            advances,
        }
    }

    /// Horizontal advance of a glyph in design units.
    pub fn advance(&self, ch: char) -> Option<f32> {
        self.advances.get(&ch).copied()
    }

    /// Fallback advance for glyphs missing from the font (half an em).
    pub fn fallback_advance(&self) -> f32 {
        self.resolution * 0.5
    }

    pub fn glyph_count(&self) -> usize {
        self.advances.len()
    }

    pub(crate) fn parse(path: &Path, bytes: &[u8]) -> Result<Self, AssetError> {
        let typeface = |reason: String| AssetError::Typeface {
            path: path.to_path_buf(),
            reason,
        };

        let root: serde_json::Value =
            serde_json::from_slice(bytes).map_err(|e| typeface(e.to_string()))?;

        let resolution = root
            .get("resolution")
            .and_then(serde_json::Value::as_f64)
            .ok_or_else(|| typeface("missing resolution".into()))? as f32;

        let glyphs = root
            .get("glyphs")
            .and_then(serde_json::Value::as_object)
            .ok_or_else(|| typeface("missing glyph table".into()))?;

        let mut advances = HashMap::with_capacity(glyphs.len());
        for (key, glyph) in glyphs {
            let Some(ch) = key.chars().next() else {
                continue;
            };
            if let Some(ha) = glyph.get("ha").and_then(serde_json::Value::as_f64) {
                advances.insert(ch, ha as f32);
            }
        }
        if advances.is_empty() {
            return Err(typeface("glyph table has no advances".into()));
        }

        let family = root
            .get("familyName")
            .and_then(serde_json::Value::as_str)
            .unwrap_or("unknown")
            .to_string();
        let ascender = root
            .get("ascender")
            .and_then(serde_json::Value::as_f64)
            .unwrap_or(f64::from(resolution)) as f32;
        let descender = root
            .get("descender")
            .and_then(serde_json::Value::as_f64)
            .unwrap_or(0.0) as f32;

        Ok(Self {
            family,
            resolution,
            ascender,
            descender,
            advances,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "familyName": "Helvetiker",
        "resolution": 1000,
        "ascender": 1189,
        "descender": -291,
        "glyphs": {
            "H": { "ha": 722, "o": "m 0 0" },
            "i": { "ha": 278, "o": "m 0 0" },
            " ": { "ha": 361 }
        }
    }"#;

    #[test]
    fn parses_typeface_subset() {
        let font = FontData::parse(Path::new("font.json"), SAMPLE.as_bytes()).unwrap();
        assert_eq!(font.family, "Helvetiker");
        assert_eq!(font.resolution, 1000.0);
        assert_eq!(font.advance('H'), Some(722.0));
        assert_eq!(font.advance(' '), Some(361.0));
        assert_eq!(font.advance('x'), None);
        assert_eq!(font.glyph_count(), 3);
    }

    #[test]
    fn rejects_font_without_glyphs() {
        let err =
            FontData::parse(Path::new("font.json"), br#"{"resolution": 1000}"#).unwrap_err();
        assert!(matches!(err, AssetError::Typeface { .. }));
    }
}
