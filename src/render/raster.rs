use ab_glyph::{Font, FontArc, GlyphId, PxScale, ScaleFont};
use egui::{Color32, FontDefinitions, Pos2};
use image::{Rgba, RgbaImage};
use log::warn;

use super::RenderSurface;

/// Offscreen raster backend used by PNG export.
///
/// All geometry is multiplied by a fixed scale factor, so a small live
/// canvas re-renders crisply into a larger export image. Polylines are
/// stamped as round-capped discs; glyphs are rasterized on the CPU with
/// the fonts egui already bundles.
pub struct RasterSurface {
    image: RgbaImage,
    scale: f32,
    fonts: Vec<FontArc>,
}

impl RasterSurface {
    pub fn new(width: u32, height: u32, scale: f32) -> Self {
        Self {
            image: RgbaImage::new(width, height),
            scale,
            fonts: load_fonts(),
        }
    }

    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// First bundled font that actually carries a glyph for `ch`.
    fn lookup(&self, ch: char) -> Option<(FontArc, GlyphId)> {
        for font in &self.fonts {
            let id = font.glyph_id(ch);
            if id.0 != 0 {
                return Some((font.clone(), id));
            }
        }
        None
    }

    /// Composite `color` over the pixel at (`x`, `y`) with the given
    /// coverage. Out-of-bounds writes are dropped.
    fn blend(&mut self, x: i64, y: i64, color: Color32, coverage: f32) {
        if coverage <= 0.0
            || x < 0
            || y < 0
            || x >= i64::from(self.image.width())
            || y >= i64::from(self.image.height())
        {
            return;
        }

        let alpha = coverage.min(1.0);
        let src = [color.r(), color.g(), color.b()];
        let pixel = self.image.get_pixel_mut(x as u32, y as u32);
        for channel in 0..3 {
            let blended =
                f32::from(src[channel]) * alpha + f32::from(pixel.0[channel]) * (1.0 - alpha);
            pixel.0[channel] = blended.round() as u8;
        }
        pixel.0[3] = 255;
    }

    /// Stamp an antialiased filled disc, already in raster coordinates.
    fn stamp_disc(&mut self, center: Pos2, radius: f32, color: Color32) {
        let min_x = (center.x - radius - 1.0).floor() as i64;
        let max_x = (center.x + radius + 1.0).ceil() as i64;
        let min_y = (center.y - radius - 1.0).floor() as i64;
        let max_y = (center.y + radius + 1.0).ceil() as i64;

        for y in min_y..=max_y {
            for x in min_x..=max_x {
                let px = x as f32 + 0.5;
                let py = y as f32 + 0.5;
                let distance = ((px - center.x).powi(2) + (py - center.y).powi(2)).sqrt();
                let coverage = (radius - distance + 0.5).clamp(0.0, 1.0);
                self.blend(x, y, color, coverage);
            }
        }
    }

    /// Stamp discs along a segment at half-pixel steps, giving round caps
    /// and joins. Endpoints are in canvas coordinates.
    fn stamp_segment(&mut self, a: Pos2, b: Pos2, radius: f32, color: Color32) {
        let a = Pos2::new(a.x * self.scale, a.y * self.scale);
        let b = Pos2::new(b.x * self.scale, b.y * self.scale);
        let steps = (a.distance(b) / 0.5).ceil().max(1.0) as u32;

        for i in 0..=steps {
            let t = i as f32 / steps as f32;
            let center = Pos2::new(a.x + (b.x - a.x) * t, a.y + (b.y - a.y) * t);
            self.stamp_disc(center, radius.max(0.5), color);
        }
    }
}

impl RenderSurface for RasterSurface {
    fn fill_background(&mut self, color: Color32) {
        let pixel = Rgba([color.r(), color.g(), color.b(), 255]);
        for p in self.image.pixels_mut() {
            *p = pixel;
        }
    }

    fn polyline(&mut self, points: &[Pos2], width: f32, color: Color32) {
        if points.len() < 2 {
            return;
        }

        let radius = width * self.scale / 2.0;
        for pair in points.windows(2) {
            self.stamp_segment(pair[0], pair[1], radius, color);
        }
    }

    fn circle_outline(&mut self, center: Pos2, radius: f32, color: Color32) {
        let center = Pos2::new(center.x * self.scale, center.y * self.scale);
        let radius = radius * self.scale;
        let half_width = (self.scale / 2.0).max(0.5);

        let reach = radius + half_width + 1.0;
        let min_x = (center.x - reach).floor() as i64;
        let max_x = (center.x + reach).ceil() as i64;
        let min_y = (center.y - reach).floor() as i64;
        let max_y = (center.y + reach).ceil() as i64;

        for y in min_y..=max_y {
            for x in min_x..=max_x {
                let px = x as f32 + 0.5;
                let py = y as f32 + 0.5;
                let distance = ((px - center.x).powi(2) + (py - center.y).powi(2)).sqrt();
                let coverage = (half_width - (distance - radius).abs() + 0.5).clamp(0.0, 1.0);
                self.blend(x, y, color, coverage);
            }
        }
    }

    fn glyph(&mut self, center: Pos2, symbol: &str, size: f32) {
        let px_scale = PxScale::from(size * self.scale);
        let center = Pos2::new(center.x * self.scale, center.y * self.scale);

        // Resolve every character first so the run can be centered as a
        // whole. Characters no bundled font covers are skipped.
        let run: Vec<(FontArc, GlyphId)> = symbol
            .chars()
            .filter_map(|ch| self.lookup(ch))
            .collect();
        if run.is_empty() {
            return;
        }

        let total_advance: f32 = run
            .iter()
            .map(|(font, id)| font.as_scaled(px_scale).h_advance(*id))
            .sum();

        let metrics = run[0].0.as_scaled(px_scale);
        let baseline = center.y + (metrics.ascent() + metrics.descent()) / 2.0;
        let mut cursor = center.x - total_advance / 2.0;

        for (font, id) in run {
            let scaled = font.as_scaled(px_scale);
            let advance = scaled.h_advance(id);
            let glyph = id.with_scale_and_position(px_scale, ab_glyph::point(cursor, baseline));
            if let Some(outlined) = font.outline_glyph(glyph) {
                let bounds = outlined.px_bounds();
                outlined.draw(|gx, gy, coverage| {
                    let x = bounds.min.x as i64 + i64::from(gx);
                    let y = bounds.min.y as i64 + i64::from(gy);
                    self.blend(x, y, Color32::BLACK, coverage);
                });
            }
            cursor += advance;
        }
    }
}

/// Re-parse the fonts egui bundles so sticker symbols can be rasterized
/// without a GPU. The default set includes monochrome emoji fonts.
fn load_fonts() -> Vec<FontArc> {
    let definitions = FontDefinitions::default();
    let mut fonts = Vec::new();

    for (name, data) in &definitions.font_data {
        match FontArc::try_from_vec(data.font.to_vec()) {
            Ok(font) => fonts.push(font),
            Err(err) => warn!("skipping unparsable bundled font {name}: {err}"),
        }
    }

    if fonts.is_empty() {
        warn!("no usable fonts; sticker glyphs will be missing from exports");
    }

    fonts
}
