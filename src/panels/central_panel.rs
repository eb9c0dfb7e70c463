use crate::app::SketchApp;
use crate::render::{PainterSurface, render_scene};

/// Logical canvas size in points. Exports scale this up by 4 to 1024.
pub const CANVAS_SIZE: f32 = 256.0;

pub fn central_panel(app: &mut SketchApp, ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        ui.heading("Sketchpad");

        let (response, painter) = ui.allocate_painter(
            egui::vec2(CANVAS_SIZE, CANVAS_SIZE),
            egui::Sense::click_and_drag(),
        );
        let canvas_rect = response.rect;

        // Feed this frame's pointer events through the state machine
        // before painting so the canvas never lags the cursor.
        for event in app.input.process(ctx, canvas_rect) {
            app.session.handle_event(event);
        }

        let mut surface = PainterSurface::new(&painter, canvas_rect);
        render_scene(
            &mut surface,
            app.session.document(),
            app.session.visible_preview(),
        );

        // Canvas edge, so the drawable area is visible on light themes.
        ui.painter().rect_stroke(
            canvas_rect,
            0.0,
            egui::Stroke::new(1.0, egui::Color32::GRAY),
        );
    });
}
