use egui::{Color32, Pos2};
use serde::{Deserialize, Serialize};

use crate::render::RenderSurface;

/// A freehand polyline.
///
/// The pen width and color are captured from the tool state at the moment
/// the stroke begins and never change afterwards, even if the sliders move
/// while the stroke is still being drawn.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    points: Vec<Pos2>,
    line_width: f32,
    color: Color32,
}

impl Stroke {
    /// Create a stroke starting at `origin`. A stroke always has at least
    /// one point once created.
    pub fn new(origin: Pos2, line_width: f32, color: Color32) -> Self {
        Self {
            points: vec![origin],
            line_width,
            color,
        }
    }

    /// Append the next point, in drawing order.
    ///
    /// Valid only while this stroke is the active (unfrozen) one; the
    /// session state machine is the guard, not this type.
    pub fn extend(&mut self, pos: Pos2) {
        self.points.push(pos);
    }

    pub fn points(&self) -> &[Pos2] {
        &self.points
    }

    pub fn line_width(&self) -> f32 {
        self.line_width
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    /// Paint the stroke. A stroke with fewer than two points has no
    /// visible extent and draws nothing; it is never an error.
    pub fn render(&self, surface: &mut dyn RenderSurface) {
        if self.points.len() < 2 {
            return;
        }

        surface.polyline(&self.points, self.line_width, self.color);
    }
}
