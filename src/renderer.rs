use egui::{Color32, Painter, Pos2, Shape, Stroke as EguiStroke, Vec2};

use crate::document::Document;

/// Something strokes can be painted onto
pub trait Surface {
    /// Draw a connected polyline through `points` with the given color and width.
    ///
    /// `points` is never empty. A single point is drawn as a round dot whose
    /// diameter is the width.
    fn draw_polyline(&mut self, points: &[Pos2], color: Color32, width: f32);
}

/// Paints canvas-local strokes through an egui painter, offset to the canvas origin
pub struct CanvasPainter<'a> {
    painter: &'a Painter,
    origin: Vec2,
}

impl<'a> CanvasPainter<'a> {
    pub fn new(painter: &'a Painter, origin: Pos2) -> Self {
        Self {
            painter,
            origin: origin.to_vec2(),
        }
    }
}

impl Surface for CanvasPainter<'_> {
    fn draw_polyline(&mut self, points: &[Pos2], color: Color32, width: f32) {
        if let [point] = points {
            self.painter
                .circle_filled(*point + self.origin, width / 2.0, color);
        } else {
            let points = points.iter().map(|p| *p + self.origin).collect();
            self.painter
                .add(Shape::line(points, EguiStroke::new(width, color)));
        }
    }
}

/// Replays the document onto a surface
#[derive(Debug, Default, Clone, Copy)]
pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    /// Paint every stroke in document order, bottom to top.
    ///
    /// Read-only: the document is never modified.
    pub fn render(&self, document: &Document, surface: &mut impl Surface) {
        for stroke in document.strokes() {
            if stroke.points().is_empty() {
                continue;
            }
            surface.draw_polyline(stroke.points(), stroke.color(), stroke.width());
        }
    }

    /// Paint the canvas background and border, then the strokes.
    ///
    /// Stroke points are relative to `rect.min`.
    pub fn render_canvas(&self, document: &Document, painter: &Painter, rect: egui::Rect) {
        painter.rect_filled(rect, 0.0, Color32::WHITE);
        painter.rect_stroke(rect, 0.0, EguiStroke::new(1.0, Color32::GRAY));

        let clipped = painter.with_clip_rect(rect);
        self.render(document, &mut CanvasPainter::new(&clipped, rect.min));
    }
}
