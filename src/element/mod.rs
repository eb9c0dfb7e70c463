// Re-export concrete implementations
pub(crate) mod sticker;
pub(crate) mod stroke;

pub use sticker::{STICKER_FONT_SIZE, STICKER_HIT_TOLERANCE, Sticker};
pub use stroke::Stroke;

use serde::{Deserialize, Serialize};

use crate::render::RenderSurface;

/// A committed, undoable drawing command.
///
/// Drawables are a tagged variant rather than a trait-object hierarchy so
/// rendering, hit testing and serialization stay exhaustive matches. A new
/// drawable kind (shapes, text, ...) would be added as a new variant.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Drawable {
    Stroke(Stroke),
    Sticker(Sticker),
}

impl Drawable {
    /// Paint this drawable onto the given surface.
    ///
    /// Side-effect only and idempotent: repeated calls with the same
    /// surface state produce the same visual.
    pub fn render(&self, surface: &mut dyn RenderSurface) {
        match self {
            Drawable::Stroke(stroke) => stroke.render(surface),
            Drawable::Sticker(sticker) => sticker.render(surface),
        }
    }

    /// Short human-readable kind, used by the history panel.
    pub fn kind(&self) -> &'static str {
        match self {
            Drawable::Stroke(_) => "Stroke",
            Drawable::Sticker(_) => "Sticker",
        }
    }

    pub fn as_sticker(&self) -> Option<&Sticker> {
        match self {
            Drawable::Sticker(sticker) => Some(sticker),
            _ => None,
        }
    }

    pub(crate) fn as_sticker_mut(&mut self) -> Option<&mut Sticker> {
        match self {
            Drawable::Sticker(sticker) => Some(sticker),
            _ => None,
        }
    }

    pub fn as_stroke(&self) -> Option<&Stroke> {
        match self {
            Drawable::Stroke(stroke) => Some(stroke),
            _ => None,
        }
    }
}
