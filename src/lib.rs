#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod document;
pub mod element;
pub mod export;
pub mod input;
pub mod panels;
pub mod preview;
pub mod render;
pub mod session;
pub mod tool;

pub use app::SketchApp;
pub use document::Document;
pub use element::{Drawable, Sticker, Stroke};
pub use export::{ExportError, export_png};
pub use input::{InputEvent, InputHandler};
pub use preview::ToolPreview;
pub use render::{PainterSurface, RasterSurface, RenderSurface, render_scene};
pub use session::{SessionState, SketchSession};
pub use tool::{ToolKind, ToolState};
