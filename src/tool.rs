use egui::Color32;
use serde::{Deserialize, Serialize};

/// Which kind of drawable the next pointer-down gesture produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ToolKind {
    Marker,
    Sticker,
}

/// Sticker symbols available before the user adds their own.
pub const DEFAULT_STICKERS: [&str; 5] = ["👻", "🎃", "💀", "🧟", "🧛"];

/// The currently selected drawing mode and its parameters.
///
/// This is a plain value container: command-creation logic reads it (and
/// snapshots width/color into new strokes), only explicit tool-selection
/// actions mutate it. Hue/saturation/lightness arrive pre-clamped from
/// the slider controls and are not re-validated here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolState {
    kind: ToolKind,
    line_width: f32,
    hue: f32,
    saturation: f32,
    lightness: f32,
    symbol: String,
    catalog: Vec<String>,
}

impl Default for ToolState {
    fn default() -> Self {
        Self {
            kind: ToolKind::Marker,
            line_width: 1.0,
            hue: 0.0,
            saturation: 100.0,
            lightness: 50.0,
            symbol: DEFAULT_STICKERS[0].to_owned(),
            catalog: DEFAULT_STICKERS.iter().map(|s| (*s).to_owned()).collect(),
        }
    }
}

impl ToolState {
    pub fn kind(&self) -> ToolKind {
        self.kind
    }

    pub fn set_kind(&mut self, kind: ToolKind) {
        self.kind = kind;
    }

    pub fn line_width(&self) -> f32 {
        self.line_width
    }

    pub fn set_line_width(&mut self, width: f32) {
        self.line_width = width;
    }

    pub fn hue(&self) -> f32 {
        self.hue
    }

    pub fn set_hue(&mut self, hue: f32) {
        self.hue = hue;
    }

    pub fn saturation(&self) -> f32 {
        self.saturation
    }

    pub fn set_saturation(&mut self, saturation: f32) {
        self.saturation = saturation;
    }

    pub fn lightness(&self) -> f32 {
        self.lightness
    }

    pub fn set_lightness(&mut self, lightness: f32) {
        self.lightness = lightness;
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn set_symbol(&mut self, symbol: impl Into<String>) {
        self.symbol = symbol.into();
    }

    pub fn catalog(&self) -> &[String] {
        &self.catalog
    }

    /// Append a user-supplied symbol to the sticker palette.
    ///
    /// Empty or whitespace-only input is rejected and the catalog is left
    /// untouched. Duplicates are allowed.
    pub fn add_symbol(&mut self, text: &str) -> bool {
        let text = text.trim();
        if text.is_empty() {
            return false;
        }
        self.catalog.push(text.to_owned());
        true
    }

    /// The stroke color for the current hue/saturation/lightness.
    pub fn color(&self) -> Color32 {
        hsl_to_color(self.hue, self.saturation, self.lightness)
    }
}

/// Convert an HSL triple (degrees, percent, percent) to sRGB.
pub fn hsl_to_color(hue: f32, saturation: f32, lightness: f32) -> Color32 {
    let h = hue.rem_euclid(360.0);
    let s = (saturation / 100.0).clamp(0.0, 1.0);
    let l = (lightness / 100.0).clamp(0.0, 1.0);

    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = l - c / 2.0;

    let (r, g, b) = match (h / 60.0) as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    Color32::from_rgb(
        ((r + m) * 255.0).round() as u8,
        ((g + m) * 255.0).round() as u8,
        ((b + m) * 255.0).round() as u8,
    )
}
