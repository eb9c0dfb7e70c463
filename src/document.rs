use egui::Pos2;
use serde::{Deserialize, Serialize};

use crate::element::{Drawable, Sticker};

/// The ordered display list plus its undo/redo stacks.
///
/// Commit order is z-order: later entries draw on top. The committed list
/// and the undone stack are always disjoint; every entry on the undone
/// stack got there by popping the most recent commit, in LIFO order.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    committed: Vec<Drawable>,
    undone: Vec<Drawable>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a drawable to the display list.
    ///
    /// Any pending redo history is invalidated: redo does not survive a
    /// fresh edit.
    pub fn commit(&mut self, drawable: Drawable) {
        self.committed.push(drawable);
        self.undone.clear();
    }

    /// Move the most recent commit onto the redo stack. Silent no-op when
    /// nothing is committed.
    pub fn undo(&mut self) -> bool {
        match self.committed.pop() {
            Some(drawable) => {
                self.undone.push(drawable);
                true
            }
            None => false,
        }
    }

    /// Re-commit the most recently undone drawable. It returns as the
    /// topmost z-order entry, not at its original position. Silent no-op
    /// when the redo stack is empty.
    pub fn redo(&mut self) -> bool {
        match self.undone.pop() {
            Some(drawable) => {
                self.committed.push(drawable);
                true
            }
            None => false,
        }
    }

    /// Drop everything, including the redo stack. Clearing is not
    /// undoable.
    pub fn clear(&mut self) {
        self.committed.clear();
        self.undone.clear();
    }

    pub fn committed(&self) -> &[Drawable] {
        &self.committed
    }

    pub fn undone(&self) -> &[Drawable] {
        &self.undone
    }

    pub fn can_undo(&self) -> bool {
        !self.committed.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.undone.is_empty()
    }

    pub fn is_empty(&self) -> bool {
        self.committed.is_empty()
    }

    /// The most recent commit, mutable. The session uses this to extend
    /// the in-progress stroke, which is committed the moment the pointer
    /// goes down.
    pub(crate) fn last_mut(&mut self) -> Option<&mut Drawable> {
        self.committed.last_mut()
    }

    pub(crate) fn sticker_mut(&mut self, index: usize) -> Option<&mut Sticker> {
        self.committed
            .get_mut(index)
            .and_then(Drawable::as_sticker_mut)
    }

    /// Index of the topmost sticker under the cursor, if any. Strokes are
    /// never grabbable.
    pub fn top_sticker_hit(&self, pos: Pos2) -> Option<usize> {
        self.committed
            .iter()
            .enumerate()
            .rev()
            .find_map(|(index, drawable)| match drawable {
                Drawable::Sticker(sticker) if sticker.hit_test(pos) => Some(index),
                _ => None,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::pos2;

    #[test]
    fn top_sticker_hit_prefers_later_commits() {
        let mut document = Document::new();
        document.commit(Drawable::Sticker(Sticker::new("👻", pos2(50.0, 50.0))));
        document.commit(Drawable::Sticker(Sticker::new("🎃", pos2(55.0, 52.0))));

        // Both stickers overlap the cursor; the later (topmost) one wins.
        assert_eq!(document.top_sticker_hit(pos2(52.0, 51.0)), Some(1));
        // Outside both.
        assert_eq!(document.top_sticker_hit(pos2(200.0, 200.0)), None);
    }
}
