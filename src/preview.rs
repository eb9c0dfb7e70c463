use egui::{Color32, Pos2};

use crate::element::STICKER_FONT_SIZE;
use crate::render::RenderSurface;
use crate::tool::{ToolKind, ToolState};

/// Outline color of the marker-width preview ring.
const RING_COLOR: Color32 = Color32::DARK_GRAY;

/// The ephemeral cursor-following hint for the active tool.
///
/// Never part of the document or its history, never exported; it is
/// rebuilt from scratch whenever the tool selection changes.
#[derive(Clone, Debug, PartialEq)]
pub enum ToolPreview {
    /// A circle whose radius is half the current pen width.
    BrushRing { center: Pos2, radius: f32 },
    /// The selected sticker symbol following the cursor before the drop.
    StickerGhost { pos: Pos2, symbol: String },
}

impl ToolPreview {
    /// Build the preview shape for the current tool selection.
    pub fn for_tool(tools: &ToolState) -> Self {
        match tools.kind() {
            ToolKind::Marker => ToolPreview::BrushRing {
                center: Pos2::ZERO,
                radius: tools.line_width() / 2.0,
            },
            ToolKind::Sticker => ToolPreview::StickerGhost {
                pos: Pos2::ZERO,
                symbol: tools.symbol().to_owned(),
            },
        }
    }

    pub fn move_to(&mut self, pos: Pos2) {
        match self {
            ToolPreview::BrushRing { center, .. } => *center = pos,
            ToolPreview::StickerGhost { pos: ghost, .. } => *ghost = pos,
        }
    }

    pub fn position(&self) -> Pos2 {
        match self {
            ToolPreview::BrushRing { center, .. } => *center,
            ToolPreview::StickerGhost { pos, .. } => *pos,
        }
    }

    pub fn render(&self, surface: &mut dyn RenderSurface) {
        match self {
            ToolPreview::BrushRing { center, radius } => {
                surface.circle_outline(*center, *radius, RING_COLOR);
            }
            ToolPreview::StickerGhost { pos, symbol } => {
                surface.glyph(*pos, symbol, STICKER_FONT_SIZE);
            }
        }
    }
}
