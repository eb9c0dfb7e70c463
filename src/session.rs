use egui::Pos2;
use log::debug;

use crate::document::Document;
use crate::element::{Drawable, Sticker, Stroke};
use crate::input::InputEvent;
use crate::preview::ToolPreview;
use crate::tool::{ToolKind, ToolState};

/// What the pointer is currently doing.
///
/// The valid transitions are:
///
/// ```text
///              pointer-down (blank canvas)
///   Idle ────────────────────────────────────► Drawing
///   Idle ────────────────────────────────────► DraggingSticker
///              pointer-down (over a sticker)
///   Idle / any ──────────────────────────────► PlacingSticker
///              sticker picked from palette
///   PlacingSticker ──────────────────────────► Idle
///              pointer-down (drop)
///   Drawing / DraggingSticker ───────────────► Idle
///              pointer-up or pointer-leave
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    /// Extending the stroke at the top of the display list.
    Drawing,
    /// A sticker was picked from the palette and follows the cursor until
    /// it is dropped with a pointer-down.
    PlacingSticker,
    /// An already-placed sticker is being dragged around.
    DraggingSticker { index: usize },
}

/// One independent sketch session: the display list and its history, the
/// tool selection, the transient preview, and the pointer state machine.
///
/// All mutation funnels through here, synchronously, one pointer event at
/// a time. There are no process-wide singletons; two sessions never share
/// state.
pub struct SketchSession {
    document: Document,
    tools: ToolState,
    state: SessionState,
    preview: ToolPreview,
    preview_visible: bool,
    dirty: bool,
}

impl Default for SketchSession {
    fn default() -> Self {
        Self::new()
    }
}

impl SketchSession {
    pub fn new() -> Self {
        let tools = ToolState::default();
        let preview = ToolPreview::for_tool(&tools);
        Self {
            document: Document::new(),
            tools,
            state: SessionState::Idle,
            preview,
            preview_visible: false,
            dirty: true,
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn tools(&self) -> &ToolState {
        &self.tools
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// The preview to draw this frame, if the state machine allows one.
    /// While a stroke or drag is in flight only the real command shows.
    pub fn visible_preview(&self) -> Option<&ToolPreview> {
        match self.state {
            SessionState::Idle | SessionState::PlacingSticker if self.preview_visible => {
                Some(&self.preview)
            }
            _ => None,
        }
    }

    /// True once since the last call if anything observable changed.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    // ------------------------------------------------------------------
    // Pointer events

    pub fn handle_event(&mut self, event: InputEvent) {
        match event {
            InputEvent::PointerDown { pos } => self.pointer_down(pos),
            InputEvent::PointerMove { pos } => self.pointer_move(pos),
            InputEvent::PointerUp { .. } => self.finish_active(),
            InputEvent::PointerLeave => {
                // Leaving the canvas mid-stroke behaves exactly like
                // releasing the button; a stroke must never keep growing
                // after the cursor re-enters.
                self.preview_visible = false;
                self.finish_active();
                self.dirty = true;
            }
        }
    }

    fn pointer_down(&mut self, pos: Pos2) {
        // A pending sticker placement wins over both stroke-start and an
        // existing-sticker grab.
        if self.state == SessionState::PlacingSticker {
            self.document
                .commit(Drawable::Sticker(Sticker::new(self.tools.symbol(), pos)));
            debug!("sticker dropped at {pos:?}");
            self.state = SessionState::Idle;
            // Dropping the sticker reverts to the marker tool.
            self.tools.set_kind(ToolKind::Marker);
            self.refresh_preview();
            self.preview.move_to(pos);
            self.dirty = true;
            return;
        }

        if self.state != SessionState::Idle {
            return;
        }

        if let Some(index) = self.document.top_sticker_hit(pos) {
            if let Some(sticker) = self.document.sticker_mut(index) {
                sticker.start_drag();
                sticker.reposition(pos);
            }
            debug!("grabbed sticker #{index}");
            self.state = SessionState::DraggingSticker { index };
            self.dirty = true;
            return;
        }

        // Start a stroke. It is committed (and therefore visible and
        // undoable) immediately, so a plain click leaves a one-point
        // stroke on the history.
        let stroke = Stroke::new(pos, self.tools.line_width(), self.tools.color());
        self.document.commit(Drawable::Stroke(stroke));
        self.state = SessionState::Drawing;
        self.dirty = true;
    }

    fn pointer_move(&mut self, pos: Pos2) {
        match self.state {
            SessionState::Drawing => {
                if let Some(Drawable::Stroke(stroke)) = self.document.last_mut() {
                    stroke.extend(pos);
                }
                self.dirty = true;
            }
            SessionState::DraggingSticker { index } => {
                if let Some(sticker) = self.document.sticker_mut(index) {
                    sticker.reposition(pos);
                }
                self.dirty = true;
            }
            SessionState::Idle | SessionState::PlacingSticker => {
                self.preview.move_to(pos);
                self.preview_visible = true;
                self.dirty = true;
            }
        }
    }

    /// Freeze whatever gesture is active. Pointer-up and pointer-leave
    /// share this path; a pending sticker placement survives it.
    fn finish_active(&mut self) {
        match self.state {
            SessionState::Drawing => {
                self.state = SessionState::Idle;
                self.dirty = true;
            }
            SessionState::DraggingSticker { index } => {
                if let Some(sticker) = self.document.sticker_mut(index) {
                    sticker.stop_drag();
                }
                self.state = SessionState::Idle;
                self.dirty = true;
            }
            SessionState::Idle | SessionState::PlacingSticker => {}
        }
    }

    // ------------------------------------------------------------------
    // Tool selection (panel actions)

    /// Pick a marker width. Cancels any pending sticker placement and
    /// replaces the preview with the brush ring.
    pub fn select_marker_width(&mut self, width: f32) {
        self.finish_active();
        self.tools.set_line_width(width);
        self.tools.set_kind(ToolKind::Marker);
        if self.state == SessionState::PlacingSticker {
            self.state = SessionState::Idle;
        }
        self.refresh_preview();
    }

    /// Pick a sticker from the palette; it follows the cursor until the
    /// next pointer-down drops it.
    pub fn select_sticker(&mut self, symbol: &str) {
        self.finish_active();
        self.tools.set_kind(ToolKind::Sticker);
        self.tools.set_symbol(symbol);
        self.state = SessionState::PlacingSticker;
        self.refresh_preview();
    }

    pub fn set_hue(&mut self, hue: f32) {
        self.tools.set_hue(hue);
        self.dirty = true;
    }

    pub fn set_saturation(&mut self, saturation: f32) {
        self.tools.set_saturation(saturation);
        self.dirty = true;
    }

    pub fn set_lightness(&mut self, lightness: f32) {
        self.tools.set_lightness(lightness);
        self.dirty = true;
    }

    /// Append a user-supplied symbol to the sticker palette. Empty input
    /// is rejected with no effect.
    pub fn add_sticker_symbol(&mut self, text: &str) -> bool {
        let added = self.tools.add_symbol(text);
        if added {
            self.dirty = true;
        }
        added
    }

    /// Selecting a tool always replaces the preview entirely, keeping the
    /// last known cursor position.
    fn refresh_preview(&mut self) {
        let pos = self.preview.position();
        self.preview = ToolPreview::for_tool(&self.tools);
        self.preview.move_to(pos);
        self.dirty = true;
    }

    // ------------------------------------------------------------------
    // History (panel actions)

    pub fn undo(&mut self) {
        self.finish_active();
        if self.document.undo() {
            self.dirty = true;
        }
    }

    pub fn redo(&mut self) {
        self.finish_active();
        if self.document.redo() {
            self.dirty = true;
        }
    }

    pub fn clear(&mut self) {
        self.finish_active();
        self.document.clear();
        self.dirty = true;
    }
}
