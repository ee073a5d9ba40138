use egui::{Color32, Pos2};
use uuid::Uuid;

/// Stable identity of a stroke for the lifetime of a drawing session
pub type StrokeId = Uuid;

/// One continuous drag on the canvas, drawn as a polyline.
///
/// A stroke always holds at least one point. Points can only be appended,
/// and the color and width chosen when the stroke was started never change.
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    id: StrokeId,
    points: Vec<Pos2>,
    color: Color32,
    width: f32,
}

impl Stroke {
    /// Start a new stroke at `start` with the given paint attributes
    pub fn new(start: Pos2, color: Color32, width: f32) -> Self {
        Self {
            id: Uuid::new_v4(),
            points: vec![start],
            color,
            width,
        }
    }

    pub fn id(&self) -> StrokeId {
        self.id
    }

    /// Get the points that make up this stroke, in drag order
    pub fn points(&self) -> &[Pos2] {
        &self.points
    }

    /// First point of the stroke, where the drag began
    pub fn start(&self) -> Pos2 {
        // Never empty: `new` seeds the first point and nothing removes points
        self.points[0]
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Never true for a stroke built with [`Stroke::new`]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Extend the stroke to `point`
    pub(crate) fn push(&mut self, point: Pos2) {
        self.points.push(point);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_stroke_has_one_point() {
        let stroke = Stroke::new(Pos2::new(3.0, 4.0), Color32::RED, 2.0);
        assert_eq!(stroke.len(), 1);
        assert!(!stroke.is_empty());
        assert_eq!(stroke.start(), Pos2::new(3.0, 4.0));
        assert_eq!(stroke.color(), Color32::RED);
        assert_eq!(stroke.width(), 2.0);
    }

    #[test]
    fn test_push_appends_in_order() {
        let mut stroke = Stroke::new(Pos2::new(0.0, 0.0), Color32::BLACK, 5.0);
        stroke.push(Pos2::new(1.0, 1.0));
        stroke.push(Pos2::new(2.0, 0.5));
        assert_eq!(
            stroke.points(),
            &[Pos2::new(0.0, 0.0), Pos2::new(1.0, 1.0), Pos2::new(2.0, 0.5)]
        );
    }

    #[test]
    fn test_ids_are_unique() {
        let a = Stroke::new(Pos2::ZERO, Color32::BLACK, 1.0);
        let b = Stroke::new(Pos2::ZERO, Color32::BLACK, 1.0);
        assert_ne!(a.id(), b.id());
    }
}
