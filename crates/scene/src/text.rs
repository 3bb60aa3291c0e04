use assets::FontData;
use glam::Vec3;

use crate::geometry::TextGeometry;

/// One shaped glyph: the character, its pen offset, and its advance width,
/// all in world units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacedGlyph {
    pub ch: char,
    pub offset_x: f32,
    pub width: f32,
}

/// World-space layout of a text run, shaped from font advances.
///
/// Glyph outlines stay with the backend; the layout only knows where each
/// glyph's pen position is and how big the whole run ends up.
#[derive(Debug, Clone, PartialEq)]
pub struct TextLayout {
    pub glyphs: Vec<PlacedGlyph>,
    pub width: f32,
    pub height: f32,
    pub depth: f32,
    /// Translation that centers the run on the origin.
    pub center_offset: Vec3,
}

impl TextLayout {
    /// Shape `params.text` with `font`, advancing the pen by each glyph's
    /// horizontal advance. Characters the font lacks still advance the pen
    /// (by the fallback advance) but produce no glyph.
    pub fn shape(params: &TextGeometry, font: &FontData) -> Self {
        let scale = params.size / font.resolution;
        let mut glyphs = Vec::with_capacity(params.text.chars().count());
        let mut pen_x = 0.0f32;

        for ch in params.text.chars() {
            match font.advance(ch) {
                Some(advance) => {
                    if !ch.is_whitespace() {
                        glyphs.push(PlacedGlyph {
                            ch,
                            offset_x: pen_x,
                            width: advance * scale,
                        });
                    }
                    pen_x += advance * scale;
                }
                None => pen_x += font.fallback_advance() * scale,
            }
        }

        let width = pen_x;
        let height = params.size;
        let depth = params.depth + if params.bevel.enabled { params.bevel.thickness } else { 0.0 };

        Self {
            glyphs,
            width,
            height,
            depth,
            center_offset: Vec3::new(-width * 0.5, -height * 0.5, -depth * 0.5),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn test_font() -> FontData {
        let mut advances = HashMap::new();
        advances.insert('a', 500.0);
        advances.insert('b', 250.0);
        advances.insert(' ', 250.0);
        FontData::new("test", 1000.0, 800.0, -200.0, advances)
    }

    #[test]
    fn pen_advances_accumulate() {
        let params = TextGeometry::new("ab", 1.0, 0.2);
        let layout = TextLayout::shape(&params, &test_font());
        assert_eq!(layout.glyphs.len(), 2);
        assert_eq!(layout.glyphs[0].offset_x, 0.0);
        assert!((layout.glyphs[1].offset_x - 0.5).abs() < 1e-6);
        assert!((layout.width - 0.75).abs() < 1e-6);
    }

    #[test]
    fn whitespace_advances_without_a_glyph() {
        let params = TextGeometry::new("a b", 1.0, 0.2);
        let layout = TextLayout::shape(&params, &test_font());
        assert_eq!(layout.glyphs.len(), 2);
        assert!((layout.glyphs[1].offset_x - 0.75).abs() < 1e-6);
    }

    #[test]
    fn centering_offset_halves_the_extents() {
        let params = TextGeometry::new("ab", 2.0, 0.4);
        let layout = TextLayout::shape(&params, &test_font());
        assert!((layout.center_offset.x + layout.width * 0.5).abs() < 1e-6);
        assert!((layout.center_offset.y + 1.0).abs() < 1e-6);
        assert!((layout.center_offset.z + 0.2).abs() < 1e-6);
    }

    #[test]
    fn missing_glyphs_use_fallback_advance() {
        let params = TextGeometry::new("za", 1.0, 0.2);
        let layout = TextLayout::shape(&params, &test_font());
        // 'z' is absent: pen still moves half an em before 'a'.
        assert_eq!(layout.glyphs.len(), 1);
        assert!((layout.glyphs[0].offset_x - 0.5).abs() < 1e-6);
    }
}
