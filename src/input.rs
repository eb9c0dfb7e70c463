use egui::{Context, PointerButton, Pos2, Rect, Vec2};

/// Pointer events over the canvas, in canvas-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    PointerDown { pos: Pos2 },
    PointerMove { pos: Pos2 },
    PointerUp { pos: Pos2 },
    /// The cursor left the canvas. Treated like a pointer-up by the
    /// session so no gesture dangles across re-entry.
    PointerLeave,
}

/// Converts raw egui pointer state over the canvas rect into
/// [`InputEvent`]s.
///
/// Tracks whether the pointer was inside the canvas on the previous frame
/// so that moving out (or losing the cursor entirely) emits exactly one
/// `PointerLeave`.
pub struct InputHandler {
    inside: bool,
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl InputHandler {
    pub fn new() -> Self {
        Self { inside: false }
    }

    /// Process this frame's pointer state. Events come out in
    /// down-move-up order within the frame.
    pub fn process(&mut self, ctx: &Context, canvas_rect: Rect) -> Vec<InputEvent> {
        let mut events = Vec::new();

        ctx.input(|input| {
            match input.pointer.hover_pos() {
                Some(pos) if canvas_rect.contains(pos) => {
                    let local = (pos - canvas_rect.min.to_vec2()).round();

                    if input.pointer.button_pressed(PointerButton::Primary) {
                        events.push(InputEvent::PointerDown { pos: local });
                    }
                    if input.pointer.delta() != Vec2::ZERO {
                        events.push(InputEvent::PointerMove { pos: local });
                    }
                    if input.pointer.button_released(PointerButton::Primary) {
                        events.push(InputEvent::PointerUp { pos: local });
                    }

                    self.inside = true;
                }
                _ => {
                    if self.inside {
                        events.push(InputEvent::PointerLeave);
                        self.inside = false;
                    }
                }
            }
        });

        events
    }
}
