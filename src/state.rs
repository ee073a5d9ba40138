use crate::brush::{Brush, PaletteColor};
use crate::document::Document;
use crate::input::{DragEvent, DragTracker, route_drag};

/// Session state of the doodle screen.
///
/// Created empty when the screen opens and dropped when it closes.
#[derive(Debug, Default, Clone)]
pub struct DoodleState {
    document: Document,
    brush: Brush,
    tracker: DragTracker,
}

impl DoodleState {
    pub fn new(brush: Brush) -> Self {
        Self {
            document: Document::new(),
            brush,
            tracker: DragTracker::new(),
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn brush(&self) -> &Brush {
        &self.brush
    }

    pub fn select_color(&mut self, color: PaletteColor) {
        log::debug!("Brush color: {}", color.name());
        self.brush.set_color(color);
    }

    pub fn set_width(&mut self, width: f32) {
        self.brush.set_width(width);
    }

    /// Route one drag sample into the document
    pub fn handle_drag(&mut self, event: &DragEvent) {
        route_drag(event, &self.brush, &mut self.document);
    }

    /// Feed the canvas response for this frame through the drag tracker
    pub fn handle_canvas_response(&mut self, response: &egui::Response, origin: egui::Pos2) {
        if let Some(mut event) = self.tracker.update_from_response(response) {
            // Strokes live in canvas-local coordinates
            event.location -= origin.to_vec2();
            self.handle_drag(&event);
        }
    }

    /// Remove every stroke
    pub fn clear(&mut self) {
        log::info!("Clearing {} strokes", self.document.len());
        self.document.clear();
    }
}
