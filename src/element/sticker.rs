use egui::Pos2;
use serde::{Deserialize, Serialize};

use crate::render::RenderSurface;

/// Half-size of the square region around a sticker that still counts as
/// a hit when the user clicks to grab it.
pub const STICKER_HIT_TOLERANCE: f32 = 16.0;

/// Sticker glyphs draw at this size on the live canvas; exports scale it.
pub const STICKER_FONT_SIZE: f32 = 20.0;

/// An emoji (or arbitrary short text) placed on the canvas.
///
/// The symbol is immutable; the position moves either while the sticker
/// follows the cursor before being dropped, or while it is being dragged
/// after a grab. The two update paths are mutually exclusive and the
/// session decides which one applies via the drag flag.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Sticker {
    pos: Pos2,
    symbol: String,
    dragging: bool,
}

impl Sticker {
    pub fn new(symbol: impl Into<String>, pos: Pos2) -> Self {
        Self {
            pos,
            symbol: symbol.into(),
            dragging: false,
        }
    }

    /// Unconditionally move the sticker to `pos`.
    pub fn reposition(&mut self, pos: Pos2) {
        self.pos = pos;
    }

    pub fn start_drag(&mut self) {
        self.dragging = true;
    }

    pub fn stop_drag(&mut self) {
        self.dragging = false;
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn pos(&self) -> Pos2 {
        self.pos
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// True when the cursor is within the hit tolerance of this sticker.
    pub fn hit_test(&self, pos: Pos2) -> bool {
        (self.pos.x - pos.x).abs() < STICKER_HIT_TOLERANCE
            && (self.pos.y - pos.y).abs() < STICKER_HIT_TOLERANCE
    }

    pub fn render(&self, surface: &mut dyn RenderSurface) {
        surface.glyph(self.pos, &self.symbol, STICKER_FONT_SIZE);
    }
}
