use egui::{Color32, Pos2};

use crate::stroke::Stroke;

/// The strokes of the current drawing session in draw order.
///
/// The first stroke is painted first (bottom), the last one on top. Strokes
/// are only ever appended, extended at the tail, or all cleared at once.
#[derive(Debug, Default, Clone)]
pub struct Document {
    strokes: Vec<Stroke>,
}

impl Document {
    pub fn new() -> Self {
        Self {
            strokes: Vec::new(),
        }
    }

    /// Append a new single-point stroke and return a reference to it
    pub fn begin_stroke(&mut self, start: Pos2, color: Color32, width: f32) -> &Stroke {
        self.strokes.push(Stroke::new(start, color, width));
        &self.strokes[self.strokes.len() - 1]
    }

    /// Extend the most recent stroke with `point`.
    ///
    /// Returns false and leaves the document untouched if there is no stroke.
    pub fn extend_last_stroke(&mut self, point: Pos2) -> bool {
        match self.strokes.last_mut() {
            Some(stroke) => {
                stroke.push(point);
                true
            }
            None => false,
        }
    }

    pub fn strokes(&self) -> &[Stroke] {
        &self.strokes
    }

    pub fn last_stroke(&self) -> Option<&Stroke> {
        self.strokes.last()
    }

    pub fn len(&self) -> usize {
        self.strokes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty()
    }

    /// Drop every stroke. There is no undo.
    pub fn clear(&mut self) {
        self.strokes.clear();
    }
}
