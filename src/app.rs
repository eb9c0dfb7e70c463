use log::{error, info};

use crate::export;
use crate::input::InputHandler;
use crate::panels;
use crate::session::SketchSession;

/// The sketchpad application shell.
///
/// All drawing state lives in the [`SketchSession`]; this type only wires
/// the session to eframe and the panels.
pub struct SketchApp {
    pub(crate) session: SketchSession,
    pub(crate) input: InputHandler,
    /// Text buffer for the "add new sticker" input.
    pub(crate) new_sticker_text: String,
}

impl SketchApp {
    /// Called once before the first frame.
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self {
            session: SketchSession::new(),
            input: InputHandler::new(),
            new_sticker_text: String::new(),
        }
    }

    pub fn session(&self) -> &SketchSession {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut SketchSession {
        &mut self.session
    }

    /// Ask for a destination and export the committed display list as a
    /// PNG. Failures are logged, never fatal.
    pub(crate) fn export_dialog(&self) {
        let Some(path) = rfd::FileDialog::new()
            .set_file_name("sketchpad.png")
            .add_filter("PNG image", &["png"])
            .save_file()
        else {
            info!("export cancelled");
            return;
        };

        match export::export_png(self.session.document(), &path) {
            Ok(()) => info!("exported sketch to {}", path.display()),
            Err(err) => error!("export failed: {err}"),
        }
    }
}

impl eframe::App for SketchApp {
    /// Called each time the UI needs repainting, which may be many times
    /// per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        panels::tools_panel(self, ctx);
        panels::central_panel(self, ctx);

        // Mutations notify the render pipeline synchronously within the
        // frame; the repaint request only keeps the next frame coming.
        if self.session.take_dirty() {
            ctx.request_repaint();
        }
    }
}
