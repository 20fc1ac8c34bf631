//! Label rendering onto `RgbaImage` with `swash`.

use std::fs;
use std::path::Path;

use fontdb::{Database, Family, Query};
use image::{Rgba, RgbaImage};
use swash::FontRef;
use swash::scale::{Render, ScaleContext, Source, StrikeWith};
use swash::shape::ShapeContext;
use swash::zeno::{Format, Vector};
use tracing::debug;

use crate::error::{ReportError, Result};

/// Font data for heatmap labels.
#[derive(Debug, Clone)]
pub struct LabelFont {
    data: Vec<u8>,
    index: usize,
}

impl LabelFont {
    /// Load the first face of a TrueType/OpenType file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let data = fs::read(path).map_err(|e| ReportError::Font {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let font = Self { data, index: 0 };
        if font.font_ref().is_none() {
            return Err(ReportError::Font {
                path: path.to_path_buf(),
                message: "not a TrueType/OpenType font".to_string(),
            });
        }
        Ok(font)
    }

    /// The installed sans-serif face, if any.
    pub fn system() -> Option<Self> {
        let mut db = Database::new();
        db.load_system_fonts();
        let query = Query {
            families: &[Family::SansSerif],
            ..Query::default()
        };
        let id = db
            .query(&query)
            .or_else(|| db.faces().next().map(|face| face.id))?;
        let font = db.with_face_data(id, |data, index| Self {
            data: data.to_vec(),
            index: index as usize,
        })?;
        debug!(faces = db.len(), "selected system label font");
        let valid = font.font_ref().is_some();
        valid.then_some(font)
    }

    fn font_ref(&self) -> Option<FontRef<'_>> {
        FontRef::from_index(&self.data, self.index)
    }
}

/// Shapes and rasterizes label text.
pub struct TextPainter<'a> {
    font: FontRef<'a>,
    scale_context: ScaleContext,
    shape_context: ShapeContext,
}

impl<'a> TextPainter<'a> {
    pub fn new(font: &'a LabelFont) -> Option<Self> {
        Some(Self {
            font: font.font_ref()?,
            scale_context: ScaleContext::new(),
            shape_context: ShapeContext::new(),
        })
    }

    /// Advance width of `text` at `size` pixels.
    pub fn measure(&mut self, text: &str, size: f32) -> f32 {
        let mut shaper = self.shape_context.builder(self.font).size(size).build();
        shaper.add_str(text);
        let mut width = 0.0;
        shaper.shape_with(|cluster| {
            for glyph in cluster.glyphs {
                width += glyph.advance;
            }
        });
        width
    }

    /// Draw `text` with its top-left corner at (`x`, `y`).
    pub fn draw(&mut self, img: &mut RgbaImage, text: &str, x: i32, y: i32, size: f32, color: Rgba<u8>) {
        let mut shaper = self.shape_context.builder(self.font).size(size).build();
        shaper.add_str(text);
        let mut scaler = self.scale_context.builder(self.font).size(size).build();

        let mut pen_x = x as f32;
        let baseline = y as f32 + size;
        shaper.shape_with(|cluster| {
            for glyph in cluster.glyphs {
                let rendered = Render::new(&[
                    Source::ColorOutline(0),
                    Source::ColorBitmap(StrikeWith::BestFit),
                    Source::Outline,
                ])
                .format(Format::Alpha)
                .offset(Vector::new(glyph.x, glyph.y))
                .render(&mut scaler, glyph.id);

                if let Some(mask) = rendered {
                    let left = (pen_x + mask.placement.left as f32) as i32;
                    let top = (baseline - mask.placement.top as f32) as i32;
                    for py in 0..mask.placement.height {
                        for px in 0..mask.placement.width {
                            let alpha = mask.data[(py * mask.placement.width + px) as usize];
                            blend(img, left + px as i32, top + py as i32, color, alpha);
                        }
                    }
                }
                pen_x += glyph.advance;
            }
        });
    }

    /// `text` on a `background` strip, rotated a quarter turn
    /// counter-clockwise so it reads bottom to top.
    pub fn vertical(&mut self, text: &str, size: f32, color: Rgba<u8>, background: Rgba<u8>) -> RgbaImage {
        let width = self.measure(text, size).ceil().max(1.0) as u32;
        let height = (size * 1.4).ceil() as u32;
        let mut strip = RgbaImage::from_pixel(width, height, background);
        self.draw(&mut strip, text, 0, 0, size, color);
        image::imageops::rotate270(&strip)
    }
}

fn blend(img: &mut RgbaImage, x: i32, y: i32, color: Rgba<u8>, alpha: u8) {
    if alpha == 0 || x < 0 || y < 0 || x as u32 >= img.width() || y as u32 >= img.height() {
        return;
    }
    let dest = img.get_pixel_mut(x as u32, y as u32);
    let a = f32::from(alpha) / 255.0;
    for channel in 0..3 {
        dest[channel] = (f32::from(color[channel]) * a + f32::from(dest[channel]) * (1.0 - a)) as u8;
    }
    dest[3] = 255;
}
