use rusttype::{point, Font, Scale};
use std::fs;
use std::path::Path;

/// Antialiased text via a system TTF. Callers fall back to the bitmap
/// font in `font` when no matching family is found.
pub struct FontRenderer {
    font: Font<'static>,
}

impl FontRenderer {
    pub fn try_load(family: &str) -> Option<Self> {
        // Common macOS/Linux font locations, then the working directory.
        let candidates = [
            format!("/Library/Fonts/{}.ttf", family),
            format!("/System/Library/Fonts/{}.ttf", family),
            format!("/System/Library/Fonts/Supplemental/{}.ttf", family),
            format!("/usr/share/fonts/truetype/{}.ttf", family),
            format!("/usr/share/fonts/truetype/dejavu/{}.ttf", family),
            format!("{}.ttf", family),
        ];

        for path in candidates.iter() {
            if !Path::new(path).exists() {
                continue;
            }
            if let Ok(data) = fs::read(path) {
                if let Some(font) = Font::try_from_vec(data) {
                    println!("Loaded font from {}", path);
                    return Some(Self { font });
                }
            }
        }

        println!("Could not find font family '{}'. Falling back to bitmap.", family);
        None
    }

    pub fn draw_text(
        &self,
        buffer: &mut [u8],
        width: usize,
        height: usize,
        x: usize,
        y: usize,
        text: &str,
        color: (u8, u8, u8),
        size_pt: f32,
    ) {
        let scale = Scale::uniform(size_pt);
        let v_metrics = self.font.v_metrics(scale);
        let origin = point(x as f32, y as f32 + v_metrics.ascent);

        for glyph in self.font.layout(text, scale, origin) {
            if let Some(bb) = glyph.pixel_bounding_box() {
                glyph.draw(|gx, gy, coverage| {
                    if coverage < 0.2 {
                        return;
                    }
                    let px = bb.min.x + gx as i32;
                    let py = bb.min.y + gy as i32;
                    if px < 0 || py < 0 || px as usize >= width || py as usize >= height {
                        return;
                    }
                    let idx = (py as usize * width + px as usize) * 3;
                    if idx + 2 < buffer.len() {
                        buffer[idx] = color.0;
                        buffer[idx + 1] = color.1;
                        buffer[idx + 2] = color.2;
                    }
                });
            }
        }
    }

    pub fn measure_width(&self, text: &str, size_pt: f32) -> usize {
        let scale = Scale::uniform(size_pt);
        let width: f32 = self
            .font
            .layout(text, scale, point(0.0, 0.0))
            .map(|g| g.unpositioned().h_metrics().advance_width)
            .sum();
        width.ceil() as usize
    }

    pub fn measure_height(&self, size_pt: f32) -> usize {
        let scale = Scale::uniform(size_pt);
        let v_metrics = self.font.v_metrics(scale);
        (v_metrics.ascent - v_metrics.descent + v_metrics.line_gap) as usize
    }
}
