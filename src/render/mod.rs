use egui::{Color32, Pos2};

mod painter;
mod raster;

pub use painter::PainterSurface;
pub use raster::RasterSurface;

use crate::document::Document;
use crate::preview::ToolPreview;

/// Canvas background color.
pub const BACKGROUND: Color32 = Color32::WHITE;

/// The drawing operations the core needs from a canvas backend.
///
/// The live canvas implements this on top of an [`egui::Painter`]; PNG
/// export implements it on top of an offscreen raster. The core never
/// talks to a backend any other way.
pub trait RenderSurface {
    /// Replace the whole surface with a solid color.
    fn fill_background(&mut self, color: Color32);

    /// Draw a connected polyline with round joins. Fewer than two points
    /// draw nothing; it is never an error.
    fn polyline(&mut self, points: &[Pos2], width: f32, color: Color32);

    /// Draw an unfilled circle outline.
    fn circle_outline(&mut self, center: Pos2, radius: f32, color: Color32);

    /// Draw a text glyph centered at `center`.
    fn glyph(&mut self, center: Pos2, symbol: &str, size: f32);
}

/// Redraw a full scene: background, every committed drawable in z-order,
/// then the transient preview (if any) on top.
///
/// Pure with respect to its inputs: rendering twice with no state change
/// in between paints the same pixels. Nothing here mutates the document.
pub fn render_scene(
    surface: &mut dyn RenderSurface,
    document: &Document,
    preview: Option<&ToolPreview>,
) {
    surface.fill_background(BACKGROUND);

    for drawable in document.committed() {
        drawable.render(surface);
    }

    if let Some(preview) = preview {
        preview.render(surface);
    }
}
