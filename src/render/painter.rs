use egui::{Align2, Color32, FontId, Painter, Pos2, Rect, Stroke as EguiStroke};

use super::RenderSurface;

/// Live-canvas backend: paints through egui in screen coordinates.
///
/// The core works in canvas-local coordinates; this surface offsets
/// everything by the canvas origin so the scene lands inside the
/// allocated rect.
pub struct PainterSurface<'a> {
    painter: &'a Painter,
    canvas: Rect,
}

impl<'a> PainterSurface<'a> {
    pub fn new(painter: &'a Painter, canvas: Rect) -> Self {
        Self { painter, canvas }
    }

    fn to_screen(&self, pos: Pos2) -> Pos2 {
        pos + self.canvas.min.to_vec2()
    }
}

impl RenderSurface for PainterSurface<'_> {
    fn fill_background(&mut self, color: Color32) {
        self.painter.rect_filled(self.canvas, 0.0, color);
    }

    fn polyline(&mut self, points: &[Pos2], width: f32, color: Color32) {
        if points.len() < 2 {
            return;
        }

        let screen: Vec<Pos2> = points.iter().map(|p| self.to_screen(*p)).collect();
        self.painter
            .add(egui::Shape::line(screen, EguiStroke::new(width, color)));
    }

    fn circle_outline(&mut self, center: Pos2, radius: f32, color: Color32) {
        self.painter
            .circle_stroke(self.to_screen(center), radius, EguiStroke::new(1.0, color));
    }

    fn glyph(&mut self, center: Pos2, symbol: &str, size: f32) {
        self.painter.text(
            self.to_screen(center),
            Align2::CENTER_CENTER,
            symbol,
            FontId::proportional(size),
            Color32::BLACK,
        );
    }
}
